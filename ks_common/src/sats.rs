use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

use crate::op;

pub const BTC_CURRENCY_CODE: &str = "BTC";
pub const SATS_PER_BTC: i64 = 100_000_000;

//--------------------------------------        Sats         ---------------------------------------------------------
/// A bitcoin amount, stored as a whole number of satoshi.
///
/// Prices entered by the shop operator are decimal BTC strings ("0.002"). Those are converted to satoshi on the way
/// in, so no floating point value ever reaches the database or the order flow.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct Sats(i64);

op!(binary Sats, Add, add);
op!(binary Sats, Sub, sub);
op!(inplace Sats, SubAssign, sub_assign);
op!(unary Sats, Neg, neg);

impl Mul<i64> for Sats {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Sats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Value cannot be represented in satoshi: {0}")]
pub struct SatsConversionError(String);

impl From<i64> for Sats {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for Sats {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Sats {}

impl TryFrom<u64> for Sats {
    type Error = SatsConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(SatsConversionError(format!("Value {} is too large to convert to Sats", value)))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl FromStr for Sats {
    type Err = SatsConversionError;

    /// Parses a decimal BTC amount, e.g. "0.002", "1", or ".5". At most 8 fractional digits are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (sign, magnitude) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, trimmed),
        };
        let (whole, frac) = match magnitude.split_once('.') {
            Some((w, f)) => (w, f),
            None => (magnitude, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(SatsConversionError(format!("'{s}' is not a valid BTC amount")));
        }
        if frac.len() > 8 {
            return Err(SatsConversionError(format!("'{s}' has more than 8 decimal places")));
        }
        let whole_btc = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().map_err(|_| SatsConversionError(format!("'{s}' is not a valid BTC amount")))?
        };
        let mut frac_digits = frac.to_string();
        while frac_digits.len() < 8 {
            frac_digits.push('0');
        }
        let frac_sats = if frac.is_empty() {
            0
        } else {
            frac_digits.parse::<i64>().map_err(|_| SatsConversionError(format!("'{s}' is not a valid BTC amount")))?
        };
        let sats = whole_btc
            .checked_mul(SATS_PER_BTC)
            .and_then(|v| v.checked_add(frac_sats))
            .and_then(|v| v.checked_mul(sign))
            .ok_or_else(|| SatsConversionError(format!("'{s}' is too large to represent in satoshi")))?;
        Ok(Self(sats))
    }
}

impl Display for Sats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.abs() < 10_000 {
            write!(f, "{} sats", self.0)
        } else {
            let btc = self.0 as f64 / SATS_PER_BTC as f64;
            write!(f, "{btc} {BTC_CURRENCY_CODE}")
        }
    }
}

impl Sats {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_btc(btc: i64) -> Self {
        Self(btc * SATS_PER_BTC)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_decimal_btc_exactly() {
        assert_eq!(Sats::from_str("0.002").unwrap(), Sats::from(200_000));
        assert_eq!(Sats::from_str("0.01").unwrap(), Sats::from(1_000_000));
        assert_eq!(Sats::from_str("1").unwrap(), Sats::from_btc(1));
        assert_eq!(Sats::from_str(".00000001").unwrap(), Sats::from(1));
        assert_eq!(Sats::from_str(" 0.25 ").unwrap(), Sats::from(25_000_000));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(Sats::from_str("").is_err());
        assert!(Sats::from_str("abc").is_err());
        assert!(Sats::from_str("0.123456789").is_err());
        assert!(Sats::from_str("1.2.3").is_err());
        assert!(Sats::from_str(".").is_err());
    }

    #[test]
    fn displays_small_amounts_in_sats() {
        assert_eq!(Sats::from(500).to_string(), "500 sats");
        assert_eq!(Sats::from(200_000).to_string(), "0.002 BTC");
        assert_eq!(Sats::from(1_000_000).to_string(), "0.01 BTC");
    }

    #[test]
    fn arithmetic_is_exact() {
        let total: Sats = [Sats::from(200_000), Sats::from(1_000_000)].into_iter().sum();
        assert_eq!(total, Sats::from(1_200_000));
        assert_eq!(Sats::from(500) * 3, Sats::from(1_500));
        assert_eq!(-Sats::from(500), Sats::from(-500));
    }
}
