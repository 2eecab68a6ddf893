use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Sub;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value in whole currency units.
///
/// # Why Use Money? It is a Value Object.
/// Wrapping the raw `i64` keeps balances and amounts from being mixed up with
/// account ids or other integers flowing through the terminal. Adding
/// customer-supplied amounts goes through [`Money::checked_add`].
///
/// # Examples
/// ```
/// use atm_sim::common::money::Money;
///
/// let amount = Money::new(120);
/// assert_eq!(amount.as_i64(), 120);
/// assert_eq!(amount.to_string(), "120");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseIntError;

    /// Parses a whole-unit integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(1));
        assert_eq!(Money::from_str("  250 ").unwrap(), Money(250));
        assert_eq!(Money::from_str("-50").unwrap(), Money(-50));
        assert_eq!(Money::from_str("0").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("1.5").is_err());
        assert!(Money::from_str("99999999999999999999").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(100).to_string(), "100");
        assert_eq!(Money(-50).to_string(), "-50");
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Money(100).checked_add(Money(20)), Some(Money(120)));
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
    }

    #[test]
    fn test_sub() {
        assert_eq!(Money(100) - Money(30), Money(70));
        assert_eq!(Money(100) - Money(150), Money(-50));
    }

    #[test]
    fn test_ordering() {
        assert!(Money(100) < Money(150));
        assert!(Money(150) > Money(100));
        assert!(Money(100) <= Money(100));
        assert_eq!(Money(-1).max(Money(1)), Money(1));
    }
}
