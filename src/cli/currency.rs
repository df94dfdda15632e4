//! Currency command handlers

use clap::Subcommand;

use crate::error::FlowResult;
use crate::models::{Currency, CURRENCIES};
use crate::store::Tracker;

#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the selected display currency and the supported table
    Show,

    /// Select the display currency (USD or NGN)
    Set {
        /// Currency code
        code: String,
    },

    /// Cycle between USD and NGN
    Toggle,
}

/// Handle a currency subcommand
pub fn handle_currency_command(tracker: &Tracker, cmd: CurrencyCommands) -> FlowResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            let selected = tracker.currency();
            println!("Selected currency: {} ({})", selected, selected.info().name);
            println!();
            println!("Supported currencies:");
            for info in &CURRENCIES {
                let marker = if info.code == selected.code() { "*" } else { " " };
                println!(
                    " {} {} {} ({}) - rate {} per USD",
                    marker, info.code, info.symbol, info.name, info.rate
                );
            }
        }
        CurrencyCommands::Set { code } => {
            // Unsupported codes are rejected by the parser, never stored
            let currency: Currency = code.parse()?;
            tracker.set_currency(currency);
            println!("Display currency set to {}", currency);
        }
        CurrencyCommands::Toggle => {
            let currency = tracker.toggle_currency();
            println!("Display currency set to {}", currency);
        }
    }
    Ok(())
}
