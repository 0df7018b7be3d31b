use crate::crypto::Signer;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const FAKE_SIGNATURE: &[u8] = b"FakeSignature";

/// Always returns the same bytes, whatever it is asked to sign
pub struct FakeSigner;

#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
impl Signer for FakeSigner {
    async fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>> {
        Ok(FAKE_SIGNATURE.to_vec())
    }
}

/// Deterministic: the "signature" is the payload reversed
pub struct MirrorSigner;

#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
impl Signer for MirrorSigner {
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(payload.iter().rev().copied().collect())
    }
}

#[derive(Debug)]
pub struct KeyUnavailable;

impl std::fmt::Display for KeyUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("key unavailable")
    }
}

impl std::error::Error for KeyUnavailable {}

/// Fails every time, counting how often it was asked
#[derive(Default)]
pub struct BrokenSigner {
    pub attempts: AtomicUsize,
}

#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
impl Signer for BrokenSigner {
    async fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(KeyUnavailable.into())
    }
}
