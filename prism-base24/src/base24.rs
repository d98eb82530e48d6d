use std::fmt;
use thiserror::Error;

/// Radix of every digit slot
pub const BASE: u8 = 24;
/// Number of digit slots; a ninth digit is always dropped
pub const WIDTH: usize = 8;
/// Largest representable value: 24^8 - 1
pub const MAX_VALUE: u64 = 110_075_314_175;

const BASE_U64: u64 = BASE as u64;

/// Fixed-width base-24 integer.
///
/// Invariants:
/// - every digit lies in `[0, 23]`
/// - slots at index `>= size` are zero
/// - `1 <= size <= 8`, and zero is stored with `size == 1`
///
/// Values built by the constructors always carry the canonical size
/// (most significant non-zero digit + 1). A truncating `add` or `multiply`
/// may report a larger size whose top digits wrapped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base24Number {
    pub(crate) digits: [u8; WIDTH],
    pub(crate) size: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base24Error {
    #[error("Invalid base-24 digit {value} at position {position}")]
    InvalidDigit { position: usize, value: u8 },
    #[error("Too many digits: {0} (max 8)")]
    TooManyDigits(usize),
    #[error("Value {0} overflows a 32-bit accumulator")]
    AccumulatorOverflow(u64),
}

impl Base24Number {
    pub const ZERO: Self = Self {
        digits: [0; WIDTH],
        size: 1,
    };

    /// Convert from a native integer, least-significant digit first.
    /// Every `u32` fits in eight base-24 digits.
    pub fn from_u32(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }

    /// Convert from a 64-bit integer, keeping only the low eight digits
    /// (`value mod 24^8`).
    pub fn from_u64(mut value: u64) -> Self {
        let mut digits = [0u8; WIDTH];
        let mut produced = 0;
        while value > 0 && produced < WIDTH {
            digits[produced] = (value % BASE_U64) as u8;
            value /= BASE_U64;
            produced += 1;
        }
        // Values that are exact multiples of 24^8 leave zeros in every slot
        Self {
            digits,
            size: canonical_size(&digits),
        }
    }

    /// Build from explicit digits, least-significant first.
    /// Trailing zero digits are accepted and do not count towards `size`.
    pub fn from_digits(digits: &[u8]) -> Result<Self, Base24Error> {
        if digits.len() > WIDTH {
            return Err(Base24Error::TooManyDigits(digits.len()));
        }

        let mut slots = [0u8; WIDTH];
        for (position, &value) in digits.iter().enumerate() {
            if value >= BASE {
                return Err(Base24Error::InvalidDigit { position, value });
            }
            slots[position] = value;
        }

        Ok(Self {
            digits: slots,
            size: canonical_size(&slots),
        })
    }

    /// Sum of `digit[i] * 24^i` in a 32-bit accumulator.
    ///
    /// No overflow guard: values of `2^32` and above wrap modulo `2^32`.
    /// Use [`Self::to_u64`] or [`Self::checked_to_u32`] for an exact result.
    pub fn to_u32(&self) -> u32 {
        let mut result: u32 = 0;
        let mut multiplier: u32 = 1;
        for &digit in &self.digits[..self.size] {
            result = result.wrapping_add(u32::from(digit).wrapping_mul(multiplier));
            multiplier = multiplier.wrapping_mul(u32::from(BASE));
        }
        result
    }

    /// Exact conversion; eight base-24 digits always fit in 64 bits.
    pub fn to_u64(&self) -> u64 {
        self.digits[..self.size]
            .iter()
            .rev()
            .fold(0u64, |acc, &digit| acc * BASE_U64 + u64::from(digit))
    }

    pub fn checked_to_u32(&self) -> Result<u32, Base24Error> {
        let value = self.to_u64();
        u32::try_from(value).map_err(|_| Base24Error::AccumulatorOverflow(value))
    }

    /// All eight digit slots, least-significant first
    pub fn digits(&self) -> &[u8; WIDTH] {
        &self.digits
    }

    /// Number of active digit slots
    pub fn size(&self) -> usize {
        self.size
    }

    /// Digit at `position`, or `None` past the last slot
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

impl Default for Base24Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u32> for Base24Number {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

/// Most significant digit first, separated by `:` (42 renders as `1:18`)
impl fmt::Display for Base24Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits[..self.size].iter().rev().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

fn canonical_size(digits: &[u8; WIDTH]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(1, |top| top + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_single_digit() {
        let zero = Base24Number::from_u32(0);
        assert_eq!(zero.size(), 1);
        assert_eq!(zero.digits(), &[0; WIDTH]);
        assert_eq!(zero, Base24Number::ZERO);
        assert_eq!(zero, Base24Number::default());
        assert!(zero.is_zero());
    }

    #[test]
    fn test_small_values() {
        let n = Base24Number::from_u32(42);
        assert_eq!(n.size(), 2);
        assert_eq!(&n.digits()[..3], &[18, 1, 0]);
        assert_eq!(n.to_u32(), 42);

        let base = Base24Number::from_u32(24);
        assert_eq!(base.size(), 2);
        assert_eq!(&base.digits()[..2], &[0, 1]);
    }

    #[test]
    fn test_u32_max_roundtrip() {
        let n = Base24Number::from_u32(u32::MAX);
        assert_eq!(n.size(), 7);
        assert_eq!(n.to_u32(), u32::MAX);
        assert_eq!(n.to_u64(), u64::from(u32::MAX));
    }

    #[test]
    fn test_from_u64_truncates_to_eight_digits() {
        let full = Base24Number::from_u64(MAX_VALUE);
        assert_eq!(full.size(), WIDTH);
        assert_eq!(full.digits(), &[23; WIDTH]);

        // 24^8 has a ninth digit only
        let wrapped = Base24Number::from_u64(MAX_VALUE + 1);
        assert_eq!(wrapped, Base24Number::ZERO);

        let wrapped = Base24Number::from_u64(MAX_VALUE + 43);
        assert_eq!(wrapped, Base24Number::from_u32(42));
    }

    #[test]
    fn test_to_u32_wraps_on_full_width() {
        let full = Base24Number::from_u64(MAX_VALUE);
        assert_eq!(full.to_u32(), (MAX_VALUE % (1u64 << 32)) as u32);
        assert_eq!(
            full.checked_to_u32(),
            Err(Base24Error::AccumulatorOverflow(MAX_VALUE))
        );
        assert_eq!(Base24Number::from_u32(1008).checked_to_u32(), Ok(1008));
    }

    #[test]
    fn test_from_digits() {
        let n = Base24Number::from_digits(&[18, 1, 0, 0]).unwrap();
        assert_eq!(n, Base24Number::from_u32(42));
        assert_eq!(n.size(), 2);

        assert_eq!(Base24Number::from_digits(&[]).unwrap(), Base24Number::ZERO);
        assert_eq!(
            Base24Number::from_digits(&[1, 24]),
            Err(Base24Error::InvalidDigit { position: 1, value: 24 })
        );
        assert_eq!(
            Base24Number::from_digits(&[0; 9]),
            Err(Base24Error::TooManyDigits(9))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Base24Number::from_u32(42).to_string(), "1:18");
        assert_eq!(Base24Number::from_u32(0).to_string(), "0");
        assert_eq!(Base24Number::from_u32(576).to_string(), "1:0:0");
    }

    #[test]
    fn test_digit_accessor() {
        let n = Base24Number::from_u32(42);
        assert_eq!(n.digit(0), Some(18));
        assert_eq!(n.digit(7), Some(0));
        assert_eq!(n.digit(8), None);
    }
}
