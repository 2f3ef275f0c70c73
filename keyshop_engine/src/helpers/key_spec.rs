use std::str::FromStr;

use ks_common::Sats;
use thiserror::Error;

use crate::db_types::NewGameKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySpecError {
    #[error("A key listing must have exactly three fields separated by '|'")]
    WrongFieldCount,
    #[error("The price field is not a valid BTC amount. {0}")]
    InvalidPrice(String),
}

/// Parses the pipe-delimited listing the operator sends to put a key up for sale: `Game|Key|Price`, with the
/// price quoted in BTC. Fields are trimmed. Nothing is written anywhere until the whole listing parses.
pub fn parse_key_spec(listing: &str) -> Result<NewGameKey, KeySpecError> {
    let mut fields = listing.split('|');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(game), Some(code), Some(price), None) => {
            let price = Sats::from_str(price).map_err(|e| KeySpecError::InvalidPrice(e.to_string()))?;
            Ok(NewGameKey::new(game.trim(), code.trim(), price))
        },
        _ => Err(KeySpecError::WrongFieldCount),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_well_formed_listing() {
        let key = parse_key_spec("Cyberpunk|ABCD-1234|0.002").unwrap();
        assert_eq!(key.game, "Cyberpunk");
        assert_eq!(key.code, "ABCD-1234");
        assert_eq!(key.price, Sats::from(200_000));
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let key = parse_key_spec(" Diablo IV | DDDD-1111 | 0.01 ").unwrap();
        assert_eq!(key.game, "Diablo IV");
        assert_eq!(key.code, "DDDD-1111");
        assert_eq!(key.price, Sats::from(1_000_000));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert_eq!(parse_key_spec("badformat"), Err(KeySpecError::WrongFieldCount));
        assert_eq!(parse_key_spec("Game|Key"), Err(KeySpecError::WrongFieldCount));
        assert_eq!(parse_key_spec("Game|Key|0.1|extra"), Err(KeySpecError::WrongFieldCount));
    }

    #[test]
    fn rejects_an_unparseable_price() {
        assert!(matches!(parse_key_spec("Game|Key|free"), Err(KeySpecError::InvalidPrice(_))));
        assert!(matches!(parse_key_spec("Game|Key|"), Err(KeySpecError::InvalidPrice(_))));
    }
}
