use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a currency, e.g. `"Token"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(name: impl Into<String>) -> Self {
        Currency(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(name: &str) -> Self {
        Currency::new(name)
    }
}

/// An amount tagged with the currency it is denominated in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    #[serde(rename = "Amount")]
    pub amount: u64,
    #[serde(rename = "Currency")]
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: u64, currency: impl Into<Currency>) -> Self {
        Money {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
