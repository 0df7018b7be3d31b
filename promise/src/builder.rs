use crate::{
    error::Error,
    identity::Identity,
    money::Money,
    promise::{Promise, FIRST_SERIAL_NUMBER},
};

/// A builder API for promises
#[derive(Clone, Debug)]
pub struct PromiseBuilder<'a> {
    issuer: Option<&'a Identity>,
    benefiter: Option<&'a Identity>,
    amount: Option<Money>,
    serial_number: u64,
}

impl<'a> Default for PromiseBuilder<'a> {
    /// Create an empty builder.
    /// Before finalising the builder, you need to at least call:
    ///
    /// - `issued_by`
    /// - `for_benefiter`
    /// - `with_amount`
    ///
    /// To finalise the builder, call its `build` method.
    fn default() -> Self {
        PromiseBuilder {
            issuer: None,
            benefiter: None,
            amount: None,
            serial_number: FIRST_SERIAL_NUMBER,
        }
    }
}

impl<'a> PromiseBuilder<'a> {
    /// The party that owes the amount and will sign the promise.
    pub fn issued_by(mut self, issuer: &'a Identity) -> Self {
        self.issuer = Some(issuer);
        self
    }

    /// The party the amount is owed to.
    pub fn for_benefiter(mut self, benefiter: &'a Identity) -> Self {
        self.benefiter = Some(benefiter);
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Defaults to [`FIRST_SERIAL_NUMBER`].
    pub fn with_serial_number(mut self, serial_number: u64) -> Self {
        self.serial_number = serial_number;
        self
    }

    pub fn build(self) -> Result<Promise, Error> {
        match self.issuer {
            Some(issuer) => match self.benefiter {
                Some(benefiter) => match self.amount {
                    Some(amount) => Ok(Promise::with_serial_number(
                        self.serial_number,
                        issuer,
                        benefiter,
                        amount,
                    )),
                    None => Err(Error::IncompletePromise {
                        msg: "Missing amount".into(),
                    }),
                },
                None => Err(Error::IncompletePromise {
                    msg: "Missing benefiter".into(),
                }),
            },
            None => Err(Error::IncompletePromise {
                msg: "Missing issuer".into(),
            }),
        }
    }
}
