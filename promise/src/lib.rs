//! Signed payment promises.
//!
//! A [`Promise`](crate::promise::Promise) is a claim that one party (the
//! issuer) owes another (the benefiter) an amount of some currency. Signing
//! it with the issuer's [`Signer`](crate::crypto::Signer) yields a
//! [`SignedPromise`](crate::promise::SignedPromise) whose signature covers the
//! promise's canonical DAG-JSON encoding.

pub mod builder;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod money;
pub mod promise;
pub mod sequence;
pub mod serde;

pub use crate::promise::{Promise, Signature, SignedPromise, FIRST_SERIAL_NUMBER};

#[cfg(test)]
mod tests;
