//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw asset quantity in the smallest unit.
///
/// `Amount` is a plain magnitude; it carries no notion of which asset it
/// measures — that responsibility lies with [`AssetId`](super::AssetId)
/// at the call site. All `u128` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use duopool::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_div(&a, Rounding::Down), Some(Amount::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division.
    /// - [`Rounding::Up`]: ceiling division — `(n + d - 1) / d`.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                // divisor > 0 guarantees (divisor.0 - 1) does not underflow.
                let numerator = match self.0.checked_add(divisor.0 - 1) {
                    Some(v) => v,
                    None => {
                        // (n + d - 1) overflowed; fall back to
                        // ceil(n / d) = floor(n / d) + (n % d != 0).
                        let q = self.0 / divisor.0;
                        let r = self.0 % divisor.0;
                        if r != 0 {
                            // q + 1 cannot overflow: q == u128::MAX requires
                            // d == 1, which makes r == 0.
                            return Some(Self(q + 1));
                        }
                        return Some(Self(q));
                    }
                };
                Some(Self(numerator / divisor.0))
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let a = Amount::new(42);
        assert_eq!(a.get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert_eq!(Amount::new(5), Amount::new(5));
    }

    // -- checked_add --------------------------------------------------------

    #[test]
    fn add_normal() {
        let a = Amount::new(100);
        let b = Amount::new(200);
        assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    // -- checked_sub --------------------------------------------------------

    #[test]
    fn sub_normal() {
        let a = Amount::new(300);
        assert_eq!(a.checked_sub(&Amount::new(100)), Some(Amount::new(200)));
    }

    #[test]
    fn sub_to_zero() {
        let a = Amount::new(42);
        assert_eq!(a.checked_sub(&a), Some(Amount::ZERO));
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    // -- checked_mul --------------------------------------------------------

    #[test]
    fn mul_normal() {
        let a = Amount::new(100);
        assert_eq!(a.checked_mul(&Amount::new(200)), Some(Amount::new(20_000)));
    }

    #[test]
    fn mul_by_zero() {
        assert_eq!(
            Amount::new(42).checked_mul(&Amount::ZERO),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    // -- checked_div --------------------------------------------------------

    #[test]
    fn div_exact_both_directions() {
        let a = Amount::new(100);
        let d = Amount::new(10);
        assert_eq!(a.checked_div(&d, Rounding::Down), Some(Amount::new(10)));
        assert_eq!(a.checked_div(&d, Rounding::Up), Some(Amount::new(10)));
    }

    #[test]
    fn div_remainder_round_down() {
        let a = Amount::new(10);
        assert_eq!(
            a.checked_div(&Amount::new(3), Rounding::Down),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn div_remainder_round_up() {
        let a = Amount::new(10);
        assert_eq!(
            a.checked_div(&Amount::new(3), Rounding::Up),
            Some(Amount::new(4))
        );
    }

    #[test]
    fn div_by_zero() {
        let a = Amount::new(100);
        assert_eq!(a.checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(a.checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn div_zero_numerator() {
        let d = Amount::new(10);
        assert_eq!(
            Amount::ZERO.checked_div(&d, Rounding::Down),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_larger_divisor() {
        // 1 / 2 = 0 (floor), 1 (ceil)
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Down),
            Some(Amount::ZERO)
        );
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Up),
            Some(Amount::new(1))
        );
    }

    #[test]
    fn div_max_round_up_overflow_path() {
        // u128::MAX / 2 with remainder exercises the overflow fallback in
        // ceiling division: (MAX + 1) would overflow.
        let a = Amount::MAX;
        let d = Amount::new(2);
        let expected_floor = u128::MAX / 2;
        assert_eq!(
            a.checked_div(&d, Rounding::Down),
            Some(Amount::new(expected_floor))
        );
        assert_eq!(
            a.checked_div(&d, Rounding::Up),
            Some(Amount::new(expected_floor + 1))
        );
    }

    #[test]
    fn copy_semantics() {
        let a = Amount::new(99);
        let b = a;
        assert_eq!(a, b);
    }
}
