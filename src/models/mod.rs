/// Colors and bars
pub mod bar;
/// Decoded digits
pub mod barcode;
/// Guards and symbol halves
pub mod guard;

pub use bar::{Bar, Color};
pub use barcode::Barcode;
pub use guard::{Guard, Guards, Half, Side};
