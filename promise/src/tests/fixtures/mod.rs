mod identities;
mod signers;

pub use identities::*;
pub use signers::*;
