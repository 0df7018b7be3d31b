//! Error types for promises

use thiserror::Error;

/// Error types for promises
#[derive(Error, Debug)]
pub enum Error {
    /// The issuer's signer could not produce a signature
    #[error("An error occurred while signing the promise: {source}")]
    SigningError {
        /// What the signer reported
        source: SignerError,
    },
    /// The promise could not be canonically encoded
    #[error("An error occurred while encoding the promise: {msg}")]
    EncodingError {
        /// Error message
        msg: String,
    },
    /// A signature's text is not standard base64
    #[error("An error occurred while decoding the signature: {msg}")]
    SignatureDecodingError {
        /// Error message
        msg: String,
    },
    /// A builder was finalised before every field was set
    #[error("The promise is incomplete: {msg}")]
    IncompletePromise {
        /// Error message
        msg: String,
    },
}

/// A failure reported by a [`Signer`](crate::crypto::Signer), passed through
/// untouched.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct SignerError {
    #[from]
    inner: anyhow::Error,
}

impl SignerError {
    /// The signer's own error, e.g. for downcasting
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }
}

impl From<anyhow::Error> for Error {
    fn from(inner: anyhow::Error) -> Self {
        Self::SigningError {
            source: SignerError { inner },
        }
    }
}
