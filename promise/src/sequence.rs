//! Serial numbering for promise lineages.
//!
//! [`Promise::new`] always starts a lineage at [`FIRST_SERIAL_NUMBER`]. An
//! issuer that keeps promising the same benefiter hands out numbers from a
//! [`SerialNumberSource`] instead.

use crate::{
    identity::Identity,
    money::Money,
    promise::{Promise, FIRST_SERIAL_NUMBER},
};
use log::debug;
use std::{collections::BTreeMap, sync::Mutex};

/// Hands out serial numbers per (issuer, benefiter) pair.
pub trait SerialNumberSource: Send + Sync {
    /// Reserve the next serial number of the lineage between `issuer` and
    /// `benefiter`. No two calls for the same pair return the same number.
    fn next_serial_number(&self, issuer: &Identity, benefiter: &Identity) -> u64;

    /// A new promise numbered by this source
    fn issue(&self, issuer: &Identity, benefiter: &Identity, amount: Money) -> Promise {
        let serial_number = self.next_serial_number(issuer, benefiter);
        Promise::with_serial_number(serial_number, issuer, benefiter, amount)
    }
}

type Lineage = (String, String);

/// An in-memory [`SerialNumberSource`].
#[derive(Debug, Default)]
pub struct MemorySequence {
    last_issued: Mutex<BTreeMap<Lineage, u64>>,
}

impl MemorySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent number handed out for this pair, if any
    pub fn last_serial_number(&self, issuer: &Identity, benefiter: &Identity) -> Option<u64> {
        let last_issued = self
            .last_issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        last_issued
            .get(&(issuer.address.clone(), benefiter.address.clone()))
            .copied()
    }
}

impl SerialNumberSource for MemorySequence {
    fn next_serial_number(&self, issuer: &Identity, benefiter: &Identity) -> u64 {
        let mut last_issued = self
            .last_issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let serial_number = last_issued
            .entry((issuer.address.clone(), benefiter.address.clone()))
            .and_modify(|last| *last += 1)
            .or_insert(FIRST_SERIAL_NUMBER);

        debug!(
            "Promise lineage {} -> {} advanced to #{}",
            issuer, benefiter, serial_number
        );

        *serial_number
    }
}
