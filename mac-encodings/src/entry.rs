use crate::hint::TranscodingHint;
use alloc::string::String;
use core::fmt;

/// The maximum number of characters a single legacy code can expand to.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// An ordered sequence of two to four Unicode scalar values that a single
/// legacy code maps to.
///
/// The characters are stored inline, so a sequence never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence {
    chars: [char; MAX_SEQUENCE_LEN],
    len: u8,
}

impl Sequence {
    /// Create a new sequence.
    ///
    /// # Panics
    /// Panics if `chars` does not contain between two and four characters.
    /// Tables are built in `const` context, so this surfaces as a
    /// compilation error for malformed table data.
    pub const fn new(chars: &[char]) -> Self {
        assert!(
            chars.len() >= 2 && chars.len() <= MAX_SEQUENCE_LEN,
            "a sequence must contain between two and four characters"
        );

        let mut buf = ['\0'; MAX_SEQUENCE_LEN];
        let mut i = 0;

        while i < chars.len() {
            buf[i] = chars[i];
            i += 1;
        }

        Self {
            chars: buf,
            len: chars.len() as u8,
        }
    }

    /// The characters of the sequence, in output order.
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..usize::from(self.len)]
    }

    /// The transcoding hint this sequence carries, if any.
    ///
    /// Grouping hints lead a sequence, variant tags terminate it.
    pub fn hint(&self) -> Option<TranscodingHint> {
        let chars = self.as_chars();

        match TranscodingHint::classify(chars[0]) {
            Some(hint) if hint.is_grouping() => Some(hint),
            _ => TranscodingHint::classify(chars[chars.len() - 1]).filter(|h| h.is_variant_tag()),
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.as_chars().iter().map(|c| UnicodeScalar(*c)))
            .finish()
    }
}

/// Formats a character as `U+XXXX`.
struct UnicodeScalar(char);

impl fmt::Debug for UnicodeScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", u32::from(self.0))
    }
}

/// The Unicode text a defined legacy code maps to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// A single Unicode scalar value.
    Single(char),
    /// An ordered sequence of two to four Unicode scalar values. It must be
    /// emitted as a whole and never be reinterpreted as a single character.
    Sequence(Sequence),
}

impl Mapping {
    /// The characters of the mapping, in output order.
    pub fn as_chars(&self) -> &[char] {
        match self {
            Self::Single(c) => core::slice::from_ref(c),
            Self::Sequence(s) => s.as_chars(),
        }
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(c) => UnicodeScalar(*c).fmt(f),
            Self::Sequence(s) => s.fmt(f),
        }
    }
}

/// The entry of a code table for one legacy code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The code has no Unicode equivalent.
    Undefined,
    /// A mapping that can be reversed: converting the Unicode text back
    /// yields exactly this code.
    RoundTrip(Mapping),
    /// A mapping that is only valid from the legacy encoding to Unicode, for
    /// example because it duplicates the mapping of another code.
    OneWay(Mapping),
}

impl Entry {
    /// A round-trip entry for a single character.
    pub const fn single(c: char) -> Self {
        Self::RoundTrip(Mapping::Single(c))
    }

    /// A round-trip entry for a sequence of characters.
    pub const fn sequence(chars: &[char]) -> Self {
        Self::RoundTrip(Mapping::Sequence(Sequence::new(chars)))
    }

    /// Turn this entry into a one-way entry.
    pub const fn one_way(self) -> Self {
        match self {
            Self::RoundTrip(m) | Self::OneWay(m) => Self::OneWay(m),
            Self::Undefined => Self::Undefined,
        }
    }

    /// The mapping of this entry, or `None` if the code is undefined.
    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Undefined => None,
            Self::RoundTrip(m) | Self::OneWay(m) => Some(m),
        }
    }

    /// Whether the code has a Unicode mapping at all.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Whether the mapping may be reversed.
    pub fn is_round_trip(&self) -> bool {
        matches!(self, Self::RoundTrip(_))
    }

    /// The characters this entry maps to. Empty for undefined codes.
    pub fn as_chars(&self) -> &[char] {
        self.mapping().map(Mapping::as_chars).unwrap_or(&[])
    }

    /// The single character this entry maps to, if it maps to exactly one.
    pub fn as_char(&self) -> Option<char> {
        match self.mapping()? {
            Mapping::Single(c) => Some(*c),
            Mapping::Sequence(_) => None,
        }
    }

    /// Append the characters of this entry to `out`.
    ///
    /// Returns `false` (and leaves `out` untouched) for undefined codes.
    pub fn push_to(&self, out: &mut String) -> bool {
        let chars = self.as_chars();
        out.extend(chars);

        !chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn sequence_keeps_order_and_length() {
        let seq = Sequence::new(&['\u{F861}', 'F', '1', '0']);
        assert_eq!(seq.as_chars().len(), 4);
        assert_eq!(seq.as_chars(), &['\u{F861}', 'F', '1', '0']);
    }

    #[test]
    #[should_panic]
    fn sequence_of_one_is_rejected() {
        let _ = Sequence::new(&['a']);
    }

    #[test]
    #[should_panic]
    fn sequence_of_five_is_rejected() {
        let _ = Sequence::new(&['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn sequences_with_different_lengths_differ() {
        // The unused tail of the inline buffer must not leak into equality.
        assert_ne!(Sequence::new(&['a', 'b']), Sequence::new(&['a', 'b', '\0']));
    }

    #[test]
    fn one_way_keeps_mapping() {
        let entry = Entry::single('\u{2423}').one_way();
        assert_eq!(entry, Entry::OneWay(Mapping::Single('\u{2423}')));
        assert!(entry.is_defined());
        assert!(!entry.is_round_trip());
        assert_eq!(Entry::Undefined.one_way(), Entry::Undefined);
    }

    #[test]
    fn undefined_has_no_chars() {
        let mut out = String::from("x");
        assert!(!Entry::Undefined.push_to(&mut out));
        assert_eq!(out, "x");
        assert!(Entry::Undefined.as_chars().is_empty());
        assert_eq!(Entry::Undefined.as_char(), None);
    }

    #[test]
    fn push_sequence() {
        let mut out = String::new();
        assert!(Entry::sequence(&['?', '\u{20DD}']).push_to(&mut out));
        assert_eq!(out, "?\u{20DD}");
        assert_eq!(Entry::sequence(&['?', '\u{20DD}']).as_char(), None);
    }

    #[test]
    fn debug_output() {
        assert_eq!(
            format!("{:?}", Entry::sequence(&['\u{0E48}', '\u{F875}'])),
            "RoundTrip([U+0E48, U+F875])"
        );
        assert_eq!(format!("{:?}", Entry::single(' ')), "RoundTrip(U+0020)");
    }
}
