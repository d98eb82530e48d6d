use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Balanced ternary digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i8)]
pub enum Trit {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TritError {
    #[error("Value {0} is not a trit (expected -1, 0 or 1)")]
    OutOfRange(i8),
}

impl Trit {
    pub const ALL: [Trit; 3] = [Trit::Negative, Trit::Zero, Trit::Positive];

    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Anything other than `1` or `-1` reads as `Zero`
    pub fn from_i8_lossy(value: i8) -> Self {
        match value {
            1 => Trit::Positive,
            -1 => Trit::Negative,
            _ => Trit::Zero,
        }
    }

    /// Row/column index into three-entry tables (`Negative` is 0)
    pub(crate) fn index(self) -> usize {
        (self.as_i8() + 1) as usize
    }
}

impl TryFrom<i8> for Trit {
    type Error = TritError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Trit::Negative),
            0 => Ok(Trit::Zero),
            1 => Ok(Trit::Positive),
            other => Err(TritError::OutOfRange(other)),
        }
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.as_i8()
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Trit::Negative => "-",
            Trit::Zero => "0",
            Trit::Positive => "+",
        };
        f.write_str(symbol)
    }
}
