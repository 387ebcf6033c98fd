//! Decoding byte strings.

use crate::entry::Entry;
use crate::error::{DecodeError, Result};
use crate::table::CodeTable;
use alloc::string::String;

impl CodeTable {
    /// Decode `bytes` into a string.
    ///
    /// Sequence entries are emitted as a whole, in order. Codes without a
    /// mapping are replaced with U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        self.decode_into(bytes, &mut out);

        out
    }

    /// Decode `bytes` and append the result to `out`.
    ///
    /// Returns the number of codes that had to be replaced with U+FFFD.
    pub fn decode_into(&self, bytes: &[u8], out: &mut String) -> usize {
        let mut replaced = 0;

        for (offset, &code) in bytes.iter().enumerate() {
            if !self.lookup(code).push_to(out) {
                lwarn!("no mapping for code {:#04X} at offset {}", code, offset);
                out.push(char::REPLACEMENT_CHARACTER);
                replaced += 1;
            }
        }

        replaced
    }

    /// Decode `bytes` into a string, failing on the first code that has no
    /// mapping.
    pub fn decode_strict(&self, bytes: &[u8]) -> Result<String> {
        let mut out = String::with_capacity(bytes.len());

        for (offset, &code) in bytes.iter().enumerate() {
            match self.lookup(code) {
                Entry::Undefined => return Err(DecodeError::Unmapped { code, offset }),
                entry => {
                    entry.push_to(&mut out);
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DecodeError;
    use crate::tables::{KEYBOARD, THAI};
    use alloc::string::{String, ToString};

    #[test]
    fn sequences_are_concatenated() {
        assert_eq!(
            KEYBOARD.decode(&[0x11, 0x6F, 0x67]),
            "\u{2318}\u{F860}F1?\u{20DD}"
        );
    }

    #[test]
    fn lossy_replaces_undefined() {
        let mut out = String::from(">");
        let replaced = THAI.decode_into(&[0xA1, 0x90, 0x20, 0xFF], &mut out);

        assert_eq!(replaced, 2);
        assert_eq!(out, ">\u{0E01}\u{FFFD} \u{FFFD}");
    }

    #[test]
    fn strict_rejects_undefined() {
        assert_eq!(THAI.decode_strict(b"ok").as_deref(), Ok("ok"));

        let err = THAI.decode_strict(&[0xA1, 0x83, 0x7F]).unwrap_err();
        assert_eq!(err, DecodeError::Unmapped { code: 0x7F, offset: 2 });
        assert_eq!(
            err.to_string(),
            "code 0x7F at offset 2 has no Unicode mapping"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(KEYBOARD.decode(&[]), "");
        assert_eq!(KEYBOARD.decode_strict(&[]).as_deref(), Ok(""));
    }
}
