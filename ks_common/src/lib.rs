mod sats;

pub mod op;
mod secret;

pub use sats::{Sats, SatsConversionError, BTC_CURRENCY_CODE, SATS_PER_BTC};
pub use secret::Secret;
