//! Currency table and conversion functions
//!
//! Flow stores every amount in USD and converts at presentation time. The
//! supported currencies form a closed enum, so an unsupported code is
//! unrepresentable: parsing rejects anything but USD/NGN instead of silently
//! accepting arbitrary strings. The exchange rate is a static constant; no
//! live rate fetching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Static exchange rate: 1 USD = 1500 NGN
pub const NGN_PER_USD: f64 = 1500.0;

/// A supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "NGN")]
    Ngn,
}

impl Currency {
    /// All supported currencies
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Ngn];

    /// The ISO 4217 code
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// Static metadata for this currency
    pub fn info(&self) -> &'static CurrencyInfo {
        match self {
            Currency::Usd => &CURRENCIES[0],
            Currency::Ngn => &CURRENCIES[1],
        }
    }

    /// Conversion rate relative to USD
    pub fn rate(&self) -> f64 {
        self.info().rate
    }

    /// Cycle to the other supported currency
    pub fn toggled(&self) -> Currency {
        match self {
            Currency::Usd => Currency::Ngn,
            Currency::Ngn => Currency::Usd,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Ngn
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "NGN" => Ok(Currency::Ngn),
            other => Err(FlowError::Validation(format!(
                "Unsupported currency: {} (supported: USD, NGN)",
                other
            ))),
        }
    }
}

/// Static metadata for a supported currency
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyInfo {
    /// ISO 4217 code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Conversion rate relative to USD
    pub rate: f64,
}

/// The fixed currency lookup table
pub static CURRENCIES: [CurrencyInfo; 2] = [
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        rate: 1.0,
    },
    CurrencyInfo {
        code: "NGN",
        symbol: "\u{20a6}",
        name: "Nigerian Naira",
        rate: NGN_PER_USD,
    },
];

/// Look up the rate for a currency code, falling back to the NGN constant
/// for codes not in the table
fn rate_for(code: &str) -> f64 {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.rate)
        .unwrap_or(NGN_PER_USD)
}

/// Convert a USD amount into the target currency
pub fn convert_from_usd(amount_usd: f64, target: Currency) -> f64 {
    amount_usd * rate_for(target.code())
}

/// Convert an amount in the source currency back into USD
pub fn convert_to_usd(amount: f64, source: Currency) -> f64 {
    amount / rate_for(source.code())
}
