use crate::{
    identity::Identity,
    money::{Currency, Money},
};

pub const CURRENCY_TOKEN: &str = "Token";

/// The two sides of a bandwidth exchange, plus a bystander
pub struct Identities {
    pub consumer: Identity,
    pub provider: Identity,
    pub mallory: Identity,
}

impl Identities {
    pub fn new() -> Self {
        Identities {
            consumer: Identity::new("Consumer"),
            provider: Identity::new("Provider"),
            mallory: Identity::new("Mallory"),
        }
    }
}

pub fn tokens(amount: u64) -> Money {
    Money::new(amount, Currency::new(CURRENCY_TOKEN))
}
