use crate::entry::Entry;
use core::fmt;
use core::ops::Index;

/// The number of codes in an 8-bit encoding.
pub const TABLE_LEN: usize = 256;

/// A table mapping every code of an 8-bit legacy encoding to its [`Entry`].
///
/// The table always holds exactly one entry per code, so a lookup cannot
/// miss: codes without a Unicode equivalent hold [`Entry::Undefined`].
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: [Entry; TABLE_LEN],
}

impl CodeTable {
    /// Build a table from `(code, entry)` pairs.
    ///
    /// The pairs must be listed in strictly increasing code order. Codes
    /// that are not listed map to [`Entry::Undefined`].
    ///
    /// # Panics
    /// Panics if a code is listed twice or out of order. When used to
    /// initialize a `static`, this is reported at compile time.
    pub const fn build(pairs: &[(u8, Entry)]) -> Self {
        let mut entries = [Entry::Undefined; TABLE_LEN];
        let mut i = 0;

        while i < pairs.len() {
            let (code, entry) = pairs[i];

            if i > 0 {
                assert!(
                    pairs[i - 1].0 < code,
                    "table entries must be listed in strictly increasing code order"
                );
            }

            entries[code as usize] = entry;
            i += 1;
        }

        Self { entries }
    }

    /// Look up the entry of a code.
    #[inline]
    pub fn lookup(&self, code: u8) -> Entry {
        self.entries[usize::from(code)]
    }

    /// All entries, indexed by code.
    pub fn entries(&self) -> &[Entry; TABLE_LEN] {
        &self.entries
    }

    /// Iterate over all `(code, entry)` pairs in code order, including
    /// undefined codes.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Entry)> + '_ {
        (0..=u8::MAX).map(|code| (code, self.lookup(code)))
    }

    /// Iterate over the `(code, entry)` pairs of defined codes.
    pub fn defined(&self) -> impl Iterator<Item = (u8, Entry)> + '_ {
        self.iter().filter(|(_, entry)| entry.is_defined())
    }
}

impl Index<u8> for CodeTable {
    type Output = Entry;

    fn index(&self, code: u8) -> &Entry {
        &self.entries[usize::from(code)]
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.defined()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Mapping;

    static SMALL: CodeTable = CodeTable::build(&[
        (0x20, Entry::single(' ')),
        (0x41, Entry::single('A')),
        (0x42, Entry::sequence(&['B', '\u{F87F}'])),
        (0xFF, Entry::single('\u{2423}').one_way()),
    ]);

    #[test]
    fn gaps_are_undefined() {
        assert_eq!(SMALL.lookup(0x00), Entry::Undefined);
        assert_eq!(SMALL.lookup(0x21), Entry::Undefined);
        assert_eq!(SMALL.lookup(0xFE), Entry::Undefined);
        assert_eq!(SMALL.defined().count(), 4);
    }

    #[test]
    fn lookup_listed_codes() {
        assert_eq!(SMALL.lookup(0x41), Entry::RoundTrip(Mapping::Single('A')));
        assert_eq!(SMALL.lookup(0x42).as_chars(), &['B', '\u{F87F}']);
        assert_eq!(SMALL[0xFF], Entry::OneWay(Mapping::Single('\u{2423}')));
    }

    #[test]
    fn iter_is_total_and_ordered() {
        let codes = SMALL.iter().map(|(code, _)| code);
        assert!(codes.eq(0..=255));
    }

    #[test]
    #[should_panic]
    fn duplicate_code_is_rejected() {
        let _ = CodeTable::build(&[(0x41, Entry::single('A')), (0x41, Entry::single('B'))]);
    }

    #[test]
    #[should_panic]
    fn out_of_order_code_is_rejected() {
        let _ = CodeTable::build(&[(0x42, Entry::single('B')), (0x41, Entry::single('A'))]);
    }
}
