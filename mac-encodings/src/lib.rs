/*!
Unicode mapping tables for legacy Mac OS 8-bit encodings, as they are needed
when reading old Mac fonts.

This crate provides the mappings from legacy codes to Unicode for
- the ".Keyboard" symbol encoding, used for special-key and menu glyphs,
- the Zapf Dingbats encoding that accompanies it,
- Mac OS Thai.

Every table has exactly one [`Entry`] per code. An entry is either
undefined, or maps to a single character or a short sequence of characters.
Sequences use Apple's [transcoding hints](hint) to mark variants of standard
characters and must always be emitted as a whole. Entries also record
whether their mapping can be reversed: some mappings were added as one-way
mappings and must not be used to convert Unicode back to the legacy
encoding.

```
use mac_encodings::{Encoding, KEYBOARD};

// The F1 key is a grouping hint followed by "F1".
assert_eq!(KEYBOARD.lookup(0x6F).as_chars(), &['\u{F860}', 'F', '1']);
assert_eq!(Encoding::Thai.decode(&[0xA1, 0x20]), "\u{0E01} ");
```

## Features
- `std` (default): use the standard library. Without it, the crate only
  depends on `alloc`.
- `logging`: emit diagnostics through the `log` crate.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod log;

mod decode;
mod encoding;
mod entry;
mod error;
pub mod hint;
mod table;
mod tables;

pub use encoding::{Encoding, SCRIPT_ROMAN, SCRIPT_THAI};
pub use entry::{Entry, MAX_SEQUENCE_LEN, Mapping, Sequence};
pub use error::{DecodeError, Result};
pub use table::{CodeTable, TABLE_LEN};
pub use tables::{DINGBATS, KEYBOARD, THAI};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_across_threads() {
        assert_send_sync::<CodeTable>();
        assert_send_sync::<Entry>();
        assert_send_sync::<Encoding>();
    }

    #[test]
    fn tables_are_total() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.table().entries().len(), TABLE_LEN);
            assert_eq!(encoding.table().iter().count(), TABLE_LEN);
        }
    }
}
