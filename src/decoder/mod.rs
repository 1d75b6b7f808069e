//! Barcode decoding modules
//!
//! This module contains the logic that runs after guards are located:
//! - Symbol tables (L, G, R) and parity schedules
//! - Symbol lookup for normalized 7-module patterns
//! - Digitization of bar groups into modules

/// Digit group normalization and barcode assembly
pub mod digitizer;
/// Pattern to digit lookup
pub mod symbol;
/// EAN-13 symbol and parity tables
pub mod tables;
