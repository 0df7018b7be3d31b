#[macro_use]
extern crate log;

pub mod ed25519;
