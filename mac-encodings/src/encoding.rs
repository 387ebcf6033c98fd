use crate::entry::Entry;
use crate::error::Result;
use crate::table::CodeTable;
use crate::tables::{DINGBATS, KEYBOARD, THAI};
use alloc::string::String;
use phf::phf_map;

/// Mac OS script code of the Roman script.
pub const SCRIPT_ROMAN: u16 = 0;
/// Mac OS script code of the Thai script.
pub const SCRIPT_THAI: u16 = 21;

/// The font name that selects the Keyboard encoding.
const KEYBOARD_FONT_NAME: &str = ".Keyboard";
/// `PostScript` name prefix of the Zapf Dingbats fonts (`ZapfDingbats`,
/// `ZapfDingbatsITC`, ...).
const DINGBATS_FONT_PREFIX: &str = "zapfdingbats";

/// The longest label in `LABELS`.
const MAX_LABEL_LEN: usize = 16;

static LABELS: phf::Map<&'static str, Encoding> = phf_map! {
    ".keyboard" => Encoding::Keyboard,
    "keyboard" => Encoding::Keyboard,
    "mac-keyboard" => Encoding::Keyboard,
    "x-mac-keyboard" => Encoding::Keyboard,
    "dingbats" => Encoding::Dingbats,
    "mac-dingbats" => Encoding::Dingbats,
    "x-mac-dingbats" => Encoding::Dingbats,
    "zapfdingbats" => Encoding::Dingbats,
    "macthai" => Encoding::Thai,
    "mac-thai" => Encoding::Thai,
    "x-mac-thai" => Encoding::Thai,
};

/// A legacy Mac OS encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// The ".Keyboard" symbol encoding.
    Keyboard,
    /// The Zapf Dingbats encoding.
    Dingbats,
    /// Mac OS Thai.
    Thai,
}

impl Encoding {
    /// All encodings.
    pub const ALL: [Self; 3] = [Self::Keyboard, Self::Dingbats, Self::Thai];

    /// A human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyboard => "Mac OS Keyboard",
            Self::Dingbats => "Mac OS Dingbats",
            Self::Thai => "Mac OS Thai",
        }
    }

    /// The Mac OS script code the encoding belongs to.
    pub fn script_id(self) -> u16 {
        match self {
            Self::Keyboard | Self::Dingbats => SCRIPT_ROMAN,
            Self::Thai => SCRIPT_THAI,
        }
    }

    /// The code table of the encoding.
    pub fn table(self) -> &'static CodeTable {
        match self {
            Self::Keyboard => &KEYBOARD,
            Self::Dingbats => &DINGBATS,
            Self::Thai => &THAI,
        }
    }

    /// Look up the entry of a code.
    pub fn lookup(self, code: u8) -> Entry {
        self.table().lookup(code)
    }

    /// Decode `bytes`, replacing unmapped codes with U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> String {
        self.table().decode(bytes)
    }

    /// Decode `bytes`, failing on the first unmapped code.
    pub fn decode_strict(self, bytes: &[u8]) -> Result<String> {
        self.table().decode_strict(bytes)
    }

    /// Find an encoding by label, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().as_bytes();

        if label.len() > MAX_LABEL_LEN {
            return None;
        }

        let mut buf = [0_u8; MAX_LABEL_LEN];
        let buf = &mut buf[..label.len()];
        buf.copy_from_slice(label);
        buf.make_ascii_lowercase();

        LABELS.get(core::str::from_utf8(buf).ok()?).copied()
    }

    /// Select the encoding of a font from its Mac OS script code and name.
    ///
    /// The Keyboard encoding shares the Roman script code and is only
    /// recognised by the font name ".Keyboard", matched exactly: it is the
    /// name of a single system font, so other spellings are ordinary Roman
    /// fonts. Roman fonts whose `PostScript` name starts with "`ZapfDingbats`",
    /// in any case, use the dingbat table.
    /// Returns `None` for fonts that use none of the encodings of this crate.
    pub fn for_font(script_id: u16, font_name: Option<&str>) -> Option<Self> {
        let encoding = match (script_id, font_name) {
            (SCRIPT_ROMAN, Some(KEYBOARD_FONT_NAME)) => Some(Self::Keyboard),
            (SCRIPT_ROMAN, Some(name)) if is_dingbats_font(name) => Some(Self::Dingbats),
            (SCRIPT_THAI, _) => Some(Self::Thai),
            _ => None,
        };

        ldebug!(
            "selected {:?} for script {} and font {:?}",
            encoding,
            script_id,
            font_name
        );

        encoding
    }
}

fn is_dingbats_font(name: &str) -> bool {
    name.get(..DINGBATS_FONT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DINGBATS_FONT_PREFIX))
}
