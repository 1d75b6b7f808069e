use std::fmt;

/// Decoded EAN-13 digits, system digit first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode {
    digits: Vec<u8>,
}

impl Barcode {
    /// Number of digits in a complete EAN-13 barcode
    pub const LEN: usize = 13;

    /// Create a barcode from already decoded digits
    pub fn new(digits: Vec<u8>) -> Self {
        Self { digits }
    }

    /// Digits in reading order
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if no digits were decoded
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Leading digit, implied by the left-half parity
    pub fn system_digit(&self) -> Option<u8> {
        self.digits.first().copied()
    }

    /// Trailing check digit
    pub fn check_digit(&self) -> Option<u8> {
        self.digits.last().copied()
    }

    /// Check digit computed from the first twelve digits
    pub fn expected_check_digit(&self) -> Option<u8> {
        if self.digits.len() != Self::LEN {
            return None;
        }
        let sum: u32 = self.digits[..12]
            .iter()
            .enumerate()
            .map(|(i, &d)| d as u32 * if i % 2 == 0 { 1 } else { 3 })
            .sum();
        Some(((10 - sum % 10) % 10) as u8)
    }

    /// True if the check digit matches the payload
    pub fn checksum_is_valid(&self) -> bool {
        matches!(
            (self.expected_check_digit(), self.check_digit()),
            (Some(want), Some(got)) if want == got
        )
    }

    /// True for Bookland EAN-13 (978/979 prefix)
    pub fn is_isbn(&self) -> bool {
        self.digits.len() == Self::LEN && matches!(self.digits[..3], [9, 7, 8] | [9, 7, 9])
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl From<Barcode> for Vec<u8> {
    fn from(barcode: Barcode) -> Self {
        barcode.digits
    }
}
