//! Apple's corporate-use transcoding hints.
//!
//! Apple reserves 32 characters in the private-use area to steer conversion
//! between Unicode and its legacy encodings. They carry no meaning of their
//! own. The first sixteen are grouping hints: the next two to four characters
//! form one unit for transcoding. The other sixteen are variant tags: like a
//! combining character they follow a base character (or base plus combining
//! marks), select a special variant of it, and always end the
//! combining-character sequence.

const GROUPING_START: u32 = 0xF860;
const VARIANT_START: u32 = 0xF870;
const HINTS_END: u32 = 0xF87F;

/// The number of hints of each kind.
pub const HINTS_PER_KIND: u8 = 16;

/// The kind of a transcoding hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    /// A grouping hint (U+F860 to U+F86F).
    Grouping,
    /// A variant tag (U+F870 to U+F87F).
    VariantTag,
}

impl HintKind {
    fn start(self) -> u32 {
        match self {
            Self::Grouping => GROUPING_START,
            Self::VariantTag => VARIANT_START,
        }
    }
}

/// A transcoding hint character.
///
/// Only the 32 reserved characters can be represented, so a hint always
/// converts back to the character it was built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranscodingHint(char);

impl TranscodingHint {
    /// Create the hint of the given kind at `offset` from the start of its
    /// range. Returns `None` if `offset` is not below [`HINTS_PER_KIND`].
    pub fn new(kind: HintKind, offset: u8) -> Option<Self> {
        if offset >= HINTS_PER_KIND {
            return None;
        }

        char::from_u32(kind.start() + u32::from(offset)).map(Self)
    }

    /// Classify a character, returning `None` if it is not a transcoding
    /// hint.
    pub fn classify(c: char) -> Option<Self> {
        matches!(u32::from(c), GROUPING_START..=HINTS_END).then_some(Self(c))
    }

    /// The kind of the hint.
    pub fn kind(self) -> HintKind {
        if u32::from(self.0) < VARIANT_START {
            HintKind::Grouping
        } else {
            HintKind::VariantTag
        }
    }

    /// The offset of the hint from the start of its range, below
    /// [`HINTS_PER_KIND`].
    pub fn offset(self) -> u8 {
        (u32::from(self.0) - self.kind().start()) as u8
    }

    /// Whether this is a grouping hint.
    pub fn is_grouping(self) -> bool {
        self.kind() == HintKind::Grouping
    }

    /// Whether this is a variant tag.
    pub fn is_variant_tag(self) -> bool {
        self.kind() == HintKind::VariantTag
    }

    /// The hint as a character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// How many of the following characters a grouping hint binds together.
    ///
    /// Only the plain left-to-right groupings are known here: U+F860 groups
    /// two characters and U+F861 groups three. Returns `None` for other hints.
    pub fn group_len(self) -> Option<usize> {
        match (self.kind(), self.offset()) {
            (HintKind::Grouping, 0) => Some(2),
            (HintKind::Grouping, 1) => Some(3),
            _ => None,
        }
    }
}

impl core::fmt::Debug for TranscodingHint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(kind: HintKind, offset: u8) -> TranscodingHint {
        TranscodingHint::new(kind, offset).unwrap()
    }

    #[test]
    fn classify_bounds() {
        assert_eq!(TranscodingHint::classify('\u{F85F}'), None);
        assert_eq!(
            TranscodingHint::classify('\u{F860}'),
            Some(hint(HintKind::Grouping, 0))
        );
        assert_eq!(
            TranscodingHint::classify('\u{F86F}'),
            Some(hint(HintKind::Grouping, 15))
        );
        assert_eq!(
            TranscodingHint::classify('\u{F870}'),
            Some(hint(HintKind::VariantTag, 0))
        );
        assert_eq!(
            TranscodingHint::classify('\u{F87F}'),
            Some(hint(HintKind::VariantTag, 15))
        );
        assert_eq!(TranscodingHint::classify('\u{F880}'), None);
        assert_eq!(TranscodingHint::classify('\u{F8FF}'), None);
        assert_eq!(TranscodingHint::classify('A'), None);
    }

    #[test]
    fn as_char_inverts_classify() {
        for c in '\u{F860}'..='\u{F87F}' {
            let hint = TranscodingHint::classify(c).unwrap();
            assert_eq!(hint.as_char(), c);
            assert_eq!(TranscodingHint::new(hint.kind(), hint.offset()), Some(hint));
        }
    }

    #[test]
    fn offsets_outside_range_are_rejected() {
        // One past the grouping range would be the first variant tag.
        assert_eq!(TranscodingHint::new(HintKind::Grouping, 16), None);
        // Far past the range would leave the hint characters entirely.
        assert_eq!(TranscodingHint::new(HintKind::VariantTag, 200), None);
        assert_eq!(TranscodingHint::new(HintKind::VariantTag, u8::MAX), None);

        let last = hint(HintKind::Grouping, 15);
        assert_eq!(last.as_char(), '\u{F86F}');
        assert!(last.is_grouping());
    }

    #[test]
    fn group_lengths() {
        assert_eq!(hint(HintKind::Grouping, 0).group_len(), Some(2));
        assert_eq!(hint(HintKind::Grouping, 1).group_len(), Some(3));
        assert_eq!(hint(HintKind::Grouping, 5).group_len(), None);
        assert_eq!(hint(HintKind::VariantTag, 0).group_len(), None);
        assert_eq!(hint(HintKind::VariantTag, 15).group_len(), None);
    }

    #[test]
    fn debug_names_kind_and_offset() {
        assert_eq!(
            alloc::format!("{:?}", hint(HintKind::VariantTag, 5)),
            "VariantTag(5)"
        );
    }
}
