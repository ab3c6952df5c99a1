//! Config CLI command
//!
//! Shows paths and settings, and updates settings when given options.

use clap::Args;
use tracing::info;

use super::Session;
use crate::error::TrackerResult;

/// Arguments for `config`
#[derive(Args, Default)]
pub struct ConfigArgs {
    /// Category for quick entries without a `category:` tag
    #[arg(long)]
    pub default_category: Option<String>,

    /// Currency symbol shown before amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// strftime pattern for displayed dates
    #[arg(long)]
    pub date_format: Option<String>,

    /// Budget percentage at which to warn (1-100)
    #[arg(long)]
    pub warning_threshold: Option<u8>,

    /// Rows shown by `list` when no limit is given
    #[arg(long)]
    pub list_limit: Option<usize>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.default_category.is_some()
            || self.currency.is_some()
            || self.date_format.is_some()
            || self.warning_threshold.is_some()
            || self.list_limit.is_some()
    }
}

/// Handle the config command
pub fn handle_config_command(session: &mut Session, args: ConfigArgs) -> TrackerResult<()> {
    if args.has_changes() {
        let mut updated = session.settings.clone();
        if let Some(category) = args.default_category {
            updated.default_category = category.trim().to_string();
        }
        if let Some(symbol) = args.currency {
            updated.currency_symbol = symbol;
        }
        if let Some(format) = args.date_format {
            updated.date_format = format;
        }
        if let Some(percent) = args.warning_threshold {
            updated.warning_threshold_percent = percent;
        }
        if let Some(limit) = args.list_limit {
            updated.list_limit = limit;
        }

        updated.save(&session.paths)?;
        session.settings = updated;
        info!(path = %session.paths.settings_file().display(), "settings saved");
        println!(
            "Settings saved to {}",
            session.paths.settings_file().display()
        );
        println!();
    }

    let settings = &session.settings;
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:   {}", session.paths.base_dir().display());
    println!("Settings file:    {}", session.paths.settings_file().display());
    println!("Ledger file:      {}", session.paths.ledger_file().display());
    println!("Export directory: {}", session.paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Default category:  {}", settings.default_category);
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  Warning threshold: {}%", settings.warning_threshold_percent);
    println!("  List limit:        {}", settings.list_limit);
    println!();
    println!("Budget:");
    println!("  Limit:  {}", session.ledger.budget().limit());
    println!("  Period: {}", session.ledger.budget().period());
    Ok(())
}
