use crate::{
    crypto::Signer,
    error::Error,
    identity::Identity,
    money::Money,
    serde::CanonicalDagJson,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serial number of the first promise between an issuer and a benefiter.
pub const FIRST_SERIAL_NUMBER: u64 = 1;

/// An unsigned claim that the issuer owes the benefiter `amount`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Promise {
    #[serde(rename = "SerialNumber")]
    pub serial_number: u64,
    #[serde(rename = "IssuerID")]
    pub issuer_id: String,
    #[serde(rename = "BenefiterID")]
    pub benefiter_id: String,
    #[serde(rename = "Amount")]
    pub amount: Money,
}

impl Promise {
    /// The first promise from `issuer` to `benefiter`. Numbering of later
    /// promises is up to the caller, see [`crate::sequence`].
    pub fn new(issuer: &Identity, benefiter: &Identity, amount: Money) -> Self {
        Promise::with_serial_number(FIRST_SERIAL_NUMBER, issuer, benefiter, amount)
    }

    pub fn with_serial_number(
        serial_number: u64,
        issuer: &Identity,
        benefiter: &Identity,
        amount: Money,
    ) -> Self {
        Promise {
            serial_number,
            issuer_id: issuer.address.clone(),
            benefiter_id: benefiter.address.clone(),
            amount,
        }
    }

    /// The exact bytes an issuer signs for this promise
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, Error> {
        self.encode_dag_json().map_err(|error| Error::EncodingError {
            msg: error.to_string(),
        })
    }

    /// Sign the canonical bytes of this promise with the issuer's key.
    ///
    /// The signer is trusted to belong to `issuer_id`; nothing here checks it.
    /// Signer failures are returned as [`Error::SigningError`] and never
    /// retried.
    pub async fn sign_by_issuer<S>(&self, signer: &S) -> Result<SignedPromise, Error>
    where
        S: Signer + ?Sized,
    {
        let data_to_sign = self.canonical_bytes()?;

        let signature = match signer.sign(&data_to_sign).await {
            Ok(signature) => signature,
            Err(error) => {
                warn!(
                    "Could not sign promise #{} from {}: {}",
                    self.serial_number, self.issuer_id, error
                );
                return Err(Error::from(error));
            }
        };

        debug!(
            "Signed promise #{} from {} to {} for {}",
            self.serial_number, self.issuer_id, self.benefiter_id, self.amount
        );

        Ok(SignedPromise {
            promise: self.clone(),
            issuer_signature: Signature::from_bytes(&signature),
        })
    }
}

/// Signature bytes rendered as standard (padded) base64 text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Signature(STANDARD.encode(bytes))
    }

    /// Recover the raw bytes the signer produced
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        STANDARD
            .decode(&self.0)
            .map_err(|error| Error::SignatureDecodingError {
                msg: error.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Signature(text)
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Signature(text.into())
    }
}

/// A promise together with its issuer's signature over
/// [`Promise::canonical_bytes`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedPromise {
    #[serde(rename = "Promise")]
    pub promise: Promise,
    #[serde(rename = "IssuerSignature")]
    pub issuer_signature: Signature,
}

impl SignedPromise {
    pub fn promise(&self) -> &Promise {
        &self.promise
    }

    pub fn issuer_signature(&self) -> &Signature {
        &self.issuer_signature
    }
}
