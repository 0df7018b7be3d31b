use anyhow::{anyhow, Result};
use async_trait::async_trait;

use ed25519_zebra::{SigningKey as Ed25519PrivateKey, VerificationKey as Ed25519PublicKey};

use promise::{crypto::Signer, identity::Identity};

pub const ED25519_MAGIC_BYTES: &[u8] = &[0xed, 0x01];

pub const BASE58_DID_PREFIX: &str = "did:key:z";

/// An Ed25519 keypair as an issuer's signer. Without the private half it can
/// still name its identity, but every attempt to sign fails.
pub struct Ed25519KeyMaterial<'a>(pub &'a Ed25519PublicKey, pub Option<&'a Ed25519PrivateKey>);

impl<'a> Ed25519KeyMaterial<'a> {
    /// The `did:key` address of this key, for use as an issuer or benefiter
    pub fn identity(&self) -> Identity {
        let bytes = [ED25519_MAGIC_BYTES, self.0.as_ref()].concat();
        Identity::new(format!(
            "{}{}",
            BASE58_DID_PREFIX,
            bs58::encode(bytes).into_string()
        ))
    }
}

#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
impl<'a> Signer for Ed25519KeyMaterial<'a> {
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        match self.1 {
            Some(private_key) => {
                let signature = private_key.sign(payload);
                let bytes: [u8; 64] = signature.into();
                Ok(bytes.to_vec())
            }
            None => {
                debug!("Refusing to sign for {}: no private key", self.identity());
                Err(anyhow!("No private key; cannot sign data"))
            }
        }
    }
}
