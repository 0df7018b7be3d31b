use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// A party to a promise, known by its address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity {
    pub address: String,
}

impl Identity {
    pub fn new(address: impl Into<String>) -> Self {
        Identity {
            address: address.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Identity {
    type Err = Infallible;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        Ok(Identity::new(address))
    }
}

impl From<&str> for Identity {
    fn from(address: &str) -> Self {
        Identity::new(address)
    }
}
