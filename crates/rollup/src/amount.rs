use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount")]
    Invalid,
    #[error("too many decimals")]
    TooManyDecimals,
    #[error("amount too large")]
    Overflow,
}

/// Signed money amount represented as **integer cents**.
///
/// The backend ships every monetary value as a decimal string (`"1234.56"`)
/// to avoid floating-point drift; this type is the client-side counterpart.
/// Parse at the edge, aggregate in cents, format on display.
///
/// The value is signed:
/// - positive = income / increase
/// - negative = expense / decrease
///
/// # Examples
///
/// ```rust
/// use rollup::Amount;
///
/// let amount: Amount = "12.34".parse().unwrap();
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "$12.34");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    #[must_use]
    pub const fn abs(self) -> Amount {
        Amount(self.0.saturating_abs())
    }

    /// Parses a server-provided decimal string, treating anything
    /// unparseable as zero, so one malformed record cannot poison a whole
    /// rollup. Form input goes through the strict [`FromStr`] path instead.
    #[must_use]
    pub fn parse_or_zero(s: &str) -> Amount {
        s.parse().unwrap_or(Amount::ZERO)
    }

    /// Rounds to whole dollars, for compact KPI display (`"$1235"`).
    #[must_use]
    pub fn format_whole(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = (abs + 50) / 100;
        format!("{sign}${dollars}")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}${dollars}.{cents:02}")
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`. Rejects more than 2 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(AmountError::Empty);
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let dollars_str = parts.next().ok_or(AmountError::Invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(AmountError::Invalid);
        }

        if dollars_str.is_empty() || !dollars_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountError::Invalid);
        }

        let dollars: i64 = dollars_str.parse().map_err(|_| AmountError::Invalid)?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(AmountError::Invalid);
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| AmountError::Invalid)? * 10,
                    2 => frac.parse::<i64>().map_err(|_| AmountError::Invalid)?,
                    _ => return Err(AmountError::TooManyDecimals),
                }
            }
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or(AmountError::Overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or(AmountError::Overflow)?
        } else {
            total
        };

        Ok(Amount(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_usd() {
        assert_eq!(Amount::from_cents(0).to_string(), "$0.00");
        assert_eq!(Amount::from_cents(1).to_string(), "$0.01");
        assert_eq!(Amount::from_cents(10).to_string(), "$0.10");
        assert_eq!(Amount::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Amount::from_cents(-1050).to_string(), "-$10.50");
    }

    #[test]
    fn format_whole_rounds_to_dollars() {
        assert_eq!(Amount::from_cents(123_449).format_whole(), "$1234");
        assert_eq!(Amount::from_cents(123_450).format_whole(), "$1235");
        assert_eq!(Amount::from_cents(-9_950).format_whole(), "-$100");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Amount>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Amount>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<Amount>().unwrap().cents(), 1050);
        assert_eq!("-0.01".parse::<Amount>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<Amount>().unwrap().cents(), 100);
        assert_eq!("  2.30 ".parse::<Amount>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert_eq!(
            "12.345".parse::<Amount>(),
            Err(AmountError::TooManyDecimals)
        );
        assert_eq!("0.001".parse::<Amount>(), Err(AmountError::TooManyDecimals));
    }

    #[test]
    fn parse_or_zero_swallows_garbage() {
        assert_eq!(Amount::parse_or_zero("100"), Amount::from_cents(10_000));
        assert_eq!(Amount::parse_or_zero(""), Amount::ZERO);
        assert_eq!(Amount::parse_or_zero("n/a"), Amount::ZERO);
    }
}
