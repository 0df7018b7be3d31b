use anyhow::Result;
use async_trait::async_trait;

#[cfg(not(feature = "web"))]
pub trait SignerConditionalSendSync: Send + Sync {}

#[cfg(not(feature = "web"))]
impl<S> SignerConditionalSendSync for S where S: Signer + Send + Sync {}

#[cfg(feature = "web")]
pub trait SignerConditionalSendSync {}

#[cfg(feature = "web")]
impl<S> SignerConditionalSendSync for S where S: Signer {}

/// The capability to sign arbitrary bytes on behalf of an issuer.
///
/// This is the only thing a promise needs from key material. Whether the key
/// lives in memory, in hardware or behind a remote service is up to the
/// implementor; signing may take as long as that round trip does, and may
/// fail.
#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
pub trait Signer: SignerConditionalSendSync {
    /// Sign some data with this key
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Adapts a plain signing function into a [`Signer`].
pub struct SignFn<F>(F);

/// Wrap `f` so it can be handed anywhere a [`Signer`] is expected.
pub fn sign_fn<F>(f: F) -> SignFn<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    SignFn(f)
}

#[cfg_attr(feature = "web", async_trait(?Send))]
#[cfg_attr(not(feature = "web"), async_trait)]
impl<F> Signer for SignFn<F>
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        (self.0)(payload)
    }
}
