//! The code tables of the supported encodings.

mod dingbats;
mod keyboard;
mod thai;

pub use dingbats::DINGBATS;
pub use keyboard::KEYBOARD;
pub use thai::THAI;
