use super::Base24Number;
use crate::base24::{BASE, WIDTH};

const BASE_U16: u16 = BASE as u16;

impl Base24Number {
    /// Schoolbook addition with carry propagation.
    ///
    /// A carry out of the eighth digit is dropped, so the result is
    /// `(a + b) mod 24^8`. In that case `size` stays at 8 even if the top
    /// digit wrapped to zero.
    pub fn add(&self, other: &Self) -> Self {
        let mut digits = [0u8; WIDTH];
        let mut carry = 0u8;
        let max_size = self.size.max(other.size);

        for i in 0..max_size {
            // At most 23 + 23 + 1, no u8 overflow
            let sum = self.digits[i] + other.digits[i] + carry;
            if sum >= BASE {
                digits[i] = sum - BASE;
                carry = 1;
            } else {
                digits[i] = sum;
                carry = 0;
            }
        }

        let size = if carry > 0 && max_size < WIDTH {
            digits[max_size] = 1;
            max_size + 1
        } else {
            max_size
        };

        Self { digits, size }
    }

    /// Schoolbook long multiplication.
    ///
    /// Digit pairs landing at position 8 or above are skipped and carries
    /// stop at the last slot, so the result is `(a * b) mod 24^8`.
    /// `size` grows to cover every position a partial product writes.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;

        for i in 0..self.size {
            for j in 0..other.size.min(WIDTH - i) {
                let mut product = u16::from(self.digits[i]) * u16::from(other.digits[j]);
                let mut carry: u16 = 0;
                let mut pos = i + j;

                while (product > 0 || carry > 0) && pos < WIDTH {
                    let sum = u16::from(result.digits[pos]) + product % BASE_U16 + carry;
                    result.digits[pos] = (sum % BASE_U16) as u8;
                    carry = sum / BASE_U16;
                    product /= BASE_U16;
                    pos += 1;

                    if pos > result.size {
                        result.size = pos;
                    }
                }
            }
        }

        result
    }
}
