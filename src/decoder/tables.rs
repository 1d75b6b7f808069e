//! EAN-13 symbol tables
//!
//! Each digit is seven modules wide. Patterns are stored as 7-bit codes,
//! most significant bit first, with black modules set.

use crate::error::{Result, ScanError};
use std::fmt;

/// Number of modules in one digit
pub const MODULES_PER_DIGIT: usize = 7;

/// Digits encoded in each half of the symbol
pub const DIGITS_PER_HALF: usize = 6;

// Odd parity, left half
const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

// Even parity, left half
const G_CODES: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
    0b0001001, 0b0010111,
];

// Right half
const R_CODES: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, 0b1001110, 0b1010000, 0b1000100,
    0b1001000, 0b1110100,
];

use self::Table::{G, L};

// Index: system digit
const FIRST_DIGIT_PARITY: [[Table; DIGITS_PER_HALF]; 10] = [
    [L, L, L, L, L, L],
    [L, L, G, L, G, G],
    [L, L, G, G, L, G],
    [L, L, G, G, G, L],
    [L, G, L, L, G, G],
    [L, G, G, L, L, G],
    [L, G, G, G, L, L],
    [L, G, L, G, L, G],
    [L, G, L, G, G, L],
    [L, G, G, L, G, L],
];

/// One of the three EAN-13 symbol tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Left half, odd parity
    L,
    /// Left half, even parity
    G,
    /// Right half
    R,
}

impl Table {
    /// All tables in lookup order
    pub const ALL: [Table; 3] = [Table::L, Table::G, Table::R];

    fn codes(self) -> &'static [u8; 10] {
        match self {
            Table::L => &L_CODES,
            Table::G => &G_CODES,
            Table::R => &R_CODES,
        }
    }

    /// Digit for a 7-bit module code, if the table holds it
    pub fn lookup(self, code: u8) -> Option<u8> {
        self.codes().iter().position(|&c| c == code).map(|d| d as u8)
    }

    /// 7-bit module code for a digit
    pub fn encode(self, digit: u8) -> Option<u8> {
        self.codes().get(digit as usize).copied()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::L => f.write_str("L"),
            Table::G => f.write_str("G"),
            Table::R => f.write_str("R"),
        }
    }
}

/// Table selection for the six left-hand digits
///
/// The right half always uses [`Table::R`]. The schedule implies the
/// leading (system) digit of the barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParitySchedule([Table; DIGITS_PER_HALF]);

impl ParitySchedule {
    /// Schedule shared by every Bookland (978/979) EAN-13
    pub const ISBN: ParitySchedule = ParitySchedule(FIRST_DIGIT_PARITY[9]);

    /// Build a schedule, rejecting ones that do not encode a system digit
    pub fn new(tables: [Table; DIGITS_PER_HALF]) -> Result<Self> {
        let schedule = ParitySchedule(tables);
        match schedule.system_digit() {
            Some(_) => Ok(schedule),
            None => Err(ScanError::UnknownParity { schedule }),
        }
    }

    /// Schedule used for barcodes starting with `digit`
    pub fn for_system_digit(digit: u8) -> Option<Self> {
        FIRST_DIGIT_PARITY
            .get(digit as usize)
            .map(|&tables| ParitySchedule(tables))
    }

    /// Parse six `L`/`G` letters, e.g. `"LGGLGL"`
    pub fn parse(s: &str) -> Result<Self> {
        let mut tables = [Table::L; DIGITS_PER_HALF];
        let mut count = 0;
        for (i, ch) in s.trim().chars().enumerate() {
            let table = match ch.to_ascii_uppercase() {
                'L' => Table::L,
                'G' => Table::G,
                _ => Table::R,
            };
            if i < DIGITS_PER_HALF {
                tables[i] = table;
            }
            count += 1;
        }
        if count != DIGITS_PER_HALF {
            return Err(ScanError::UnknownParity {
                schedule: ParitySchedule(tables),
            });
        }
        Self::new(tables)
    }

    /// Table for the left-half digit at `position`
    pub fn table(&self, position: usize) -> Table {
        self.0[position]
    }

    /// Tables in digit order
    pub fn tables(&self) -> &[Table; DIGITS_PER_HALF] {
        &self.0
    }

    /// Reverse lookup of the leading digit this schedule encodes
    pub fn system_digit(&self) -> Option<u8> {
        FIRST_DIGIT_PARITY
            .iter()
            .position(|tables| *tables == self.0)
            .map(|d| d as u8)
    }
}

impl Default for ParitySchedule {
    fn default() -> Self {
        Self::ISBN
    }
}

impl fmt::Display for ParitySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.0 {
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}
