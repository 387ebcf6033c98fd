//! The Mac OS Thai encoding.
//!
//! 0xA1-0xDA and 0xDF-0xFB follow TIS 620-2533, except that 0xEE, 0xFA and
//! 0xFB hold the trade mark, registered and copyright signs. The remaining
//! upper half holds punctuation and the positional variants of the upper
//! vowels, tone marks and other signs. Those variants are normally chosen at
//! display time, but the Thai-DTP keyboard can type them directly, so they
//! are real characters of the encoding. Each maps to its base character
//! followed by a variant tag:
//!
//! - U+F873: low position
//! - U+F874: left position
//! - U+F875: low left position
//!
//! The control range and 0x7F are undefined.
//!
//! Source: Apple's `THAI.TXT`.

use crate::entry::Entry;
use crate::table::CodeTable;

/// The Mac OS Thai encoding.
#[rustfmt::skip]
pub static THAI: CodeTable = CodeTable::build(&[
    (0x20, Entry::single('\u{0020}')), // SPACE
    (0x21, Entry::single('\u{0021}')), // EXCLAMATION MARK
    (0x22, Entry::single('\u{0022}')), // QUOTATION MARK
    (0x23, Entry::single('\u{0023}')), // NUMBER SIGN
    (0x24, Entry::single('\u{0024}')), // DOLLAR SIGN
    (0x25, Entry::single('\u{0025}')), // PERCENT SIGN
    (0x26, Entry::single('\u{0026}')), // AMPERSAND
    (0x27, Entry::single('\u{0027}')), // APOSTROPHE
    (0x28, Entry::single('\u{0028}')), // LEFT PARENTHESIS
    (0x29, Entry::single('\u{0029}')), // RIGHT PARENTHESIS
    (0x2A, Entry::single('\u{002A}')), // ASTERISK
    (0x2B, Entry::single('\u{002B}')), // PLUS SIGN
    (0x2C, Entry::single('\u{002C}')), // COMMA
    (0x2D, Entry::single('\u{002D}')), // HYPHEN-MINUS
    (0x2E, Entry::single('\u{002E}')), // FULL STOP
    (0x2F, Entry::single('\u{002F}')), // SOLIDUS
    (0x30, Entry::single('\u{0030}')), // DIGIT ZERO
    (0x31, Entry::single('\u{0031}')), // DIGIT ONE
    (0x32, Entry::single('\u{0032}')), // DIGIT TWO
    (0x33, Entry::single('\u{0033}')), // DIGIT THREE
    (0x34, Entry::single('\u{0034}')), // DIGIT FOUR
    (0x35, Entry::single('\u{0035}')), // DIGIT FIVE
    (0x36, Entry::single('\u{0036}')), // DIGIT SIX
    (0x37, Entry::single('\u{0037}')), // DIGIT SEVEN
    (0x38, Entry::single('\u{0038}')), // DIGIT EIGHT
    (0x39, Entry::single('\u{0039}')), // DIGIT NINE
    (0x3A, Entry::single('\u{003A}')), // COLON
    (0x3B, Entry::single('\u{003B}')), // SEMICOLON
    (0x3C, Entry::single('\u{003C}')), // LESS-THAN SIGN
    (0x3D, Entry::single('\u{003D}')), // EQUALS SIGN
    (0x3E, Entry::single('\u{003E}')), // GREATER-THAN SIGN
    (0x3F, Entry::single('\u{003F}')), // QUESTION MARK
    (0x40, Entry::single('\u{0040}')), // COMMERCIAL AT
    (0x41, Entry::single('\u{0041}')), // LATIN CAPITAL LETTER A
    (0x42, Entry::single('\u{0042}')), // LATIN CAPITAL LETTER B
    (0x43, Entry::single('\u{0043}')), // LATIN CAPITAL LETTER C
    (0x44, Entry::single('\u{0044}')), // LATIN CAPITAL LETTER D
    (0x45, Entry::single('\u{0045}')), // LATIN CAPITAL LETTER E
    (0x46, Entry::single('\u{0046}')), // LATIN CAPITAL LETTER F
    (0x47, Entry::single('\u{0047}')), // LATIN CAPITAL LETTER G
    (0x48, Entry::single('\u{0048}')), // LATIN CAPITAL LETTER H
    (0x49, Entry::single('\u{0049}')), // LATIN CAPITAL LETTER I
    (0x4A, Entry::single('\u{004A}')), // LATIN CAPITAL LETTER J
    (0x4B, Entry::single('\u{004B}')), // LATIN CAPITAL LETTER K
    (0x4C, Entry::single('\u{004C}')), // LATIN CAPITAL LETTER L
    (0x4D, Entry::single('\u{004D}')), // LATIN CAPITAL LETTER M
    (0x4E, Entry::single('\u{004E}')), // LATIN CAPITAL LETTER N
    (0x4F, Entry::single('\u{004F}')), // LATIN CAPITAL LETTER O
    (0x50, Entry::single('\u{0050}')), // LATIN CAPITAL LETTER P
    (0x51, Entry::single('\u{0051}')), // LATIN CAPITAL LETTER Q
    (0x52, Entry::single('\u{0052}')), // LATIN CAPITAL LETTER R
    (0x53, Entry::single('\u{0053}')), // LATIN CAPITAL LETTER S
    (0x54, Entry::single('\u{0054}')), // LATIN CAPITAL LETTER T
    (0x55, Entry::single('\u{0055}')), // LATIN CAPITAL LETTER U
    (0x56, Entry::single('\u{0056}')), // LATIN CAPITAL LETTER V
    (0x57, Entry::single('\u{0057}')), // LATIN CAPITAL LETTER W
    (0x58, Entry::single('\u{0058}')), // LATIN CAPITAL LETTER X
    (0x59, Entry::single('\u{0059}')), // LATIN CAPITAL LETTER Y
    (0x5A, Entry::single('\u{005A}')), // LATIN CAPITAL LETTER Z
    (0x5B, Entry::single('\u{005B}')), // LEFT SQUARE BRACKET
    (0x5C, Entry::single('\u{005C}')), // REVERSE SOLIDUS
    (0x5D, Entry::single('\u{005D}')), // RIGHT SQUARE BRACKET
    (0x5E, Entry::single('\u{005E}')), // CIRCUMFLEX ACCENT
    (0x5F, Entry::single('\u{005F}')), // LOW LINE
    (0x60, Entry::single('\u{0060}')), // GRAVE ACCENT
    (0x61, Entry::single('\u{0061}')), // LATIN SMALL LETTER A
    (0x62, Entry::single('\u{0062}')), // LATIN SMALL LETTER B
    (0x63, Entry::single('\u{0063}')), // LATIN SMALL LETTER C
    (0x64, Entry::single('\u{0064}')), // LATIN SMALL LETTER D
    (0x65, Entry::single('\u{0065}')), // LATIN SMALL LETTER E
    (0x66, Entry::single('\u{0066}')), // LATIN SMALL LETTER F
    (0x67, Entry::single('\u{0067}')), // LATIN SMALL LETTER G
    (0x68, Entry::single('\u{0068}')), // LATIN SMALL LETTER H
    (0x69, Entry::single('\u{0069}')), // LATIN SMALL LETTER I
    (0x6A, Entry::single('\u{006A}')), // LATIN SMALL LETTER J
    (0x6B, Entry::single('\u{006B}')), // LATIN SMALL LETTER K
    (0x6C, Entry::single('\u{006C}')), // LATIN SMALL LETTER L
    (0x6D, Entry::single('\u{006D}')), // LATIN SMALL LETTER M
    (0x6E, Entry::single('\u{006E}')), // LATIN SMALL LETTER N
    (0x6F, Entry::single('\u{006F}')), // LATIN SMALL LETTER O
    (0x70, Entry::single('\u{0070}')), // LATIN SMALL LETTER P
    (0x71, Entry::single('\u{0071}')), // LATIN SMALL LETTER Q
    (0x72, Entry::single('\u{0072}')), // LATIN SMALL LETTER R
    (0x73, Entry::single('\u{0073}')), // LATIN SMALL LETTER S
    (0x74, Entry::single('\u{0074}')), // LATIN SMALL LETTER T
    (0x75, Entry::single('\u{0075}')), // LATIN SMALL LETTER U
    (0x76, Entry::single('\u{0076}')), // LATIN SMALL LETTER V
    (0x77, Entry::single('\u{0077}')), // LATIN SMALL LETTER W
    (0x78, Entry::single('\u{0078}')), // LATIN SMALL LETTER X
    (0x79, Entry::single('\u{0079}')), // LATIN SMALL LETTER Y
    (0x7A, Entry::single('\u{007A}')), // LATIN SMALL LETTER Z
    (0x7B, Entry::single('\u{007B}')), // LEFT CURLY BRACKET
    (0x7C, Entry::single('\u{007C}')), // VERTICAL LINE
    (0x7D, Entry::single('\u{007D}')), // RIGHT CURLY BRACKET
    (0x7E, Entry::single('\u{007E}')), // TILDE
    (0x80, Entry::single('\u{00AB}')), // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    (0x81, Entry::single('\u{00BB}')), // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    (0x82, Entry::single('\u{2026}')), // HORIZONTAL ELLIPSIS
    (0x83, Entry::sequence(&['\u{0E48}', '\u{F875}'])), // THAI CHARACTER MAI EK, low left position
    (0x84, Entry::sequence(&['\u{0E49}', '\u{F875}'])), // THAI CHARACTER MAI THO, low left position
    (0x85, Entry::sequence(&['\u{0E4A}', '\u{F875}'])), // THAI CHARACTER MAI TRI, low left position
    (0x86, Entry::sequence(&['\u{0E4B}', '\u{F875}'])), // THAI CHARACTER MAI CHATTAWA, low left position
    (0x87, Entry::sequence(&['\u{0E4C}', '\u{F875}'])), // THAI CHARACTER THANTHAKHAT, low left position
    (0x88, Entry::sequence(&['\u{0E48}', '\u{F873}'])), // THAI CHARACTER MAI EK, low position
    (0x89, Entry::sequence(&['\u{0E49}', '\u{F873}'])), // THAI CHARACTER MAI THO, low position
    (0x8A, Entry::sequence(&['\u{0E4A}', '\u{F873}'])), // THAI CHARACTER MAI TRI, low position
    (0x8B, Entry::sequence(&['\u{0E4B}', '\u{F873}'])), // THAI CHARACTER MAI CHATTAWA, low position
    (0x8C, Entry::sequence(&['\u{0E4C}', '\u{F873}'])), // THAI CHARACTER THANTHAKHAT, low position
    (0x8D, Entry::single('\u{201C}')), // LEFT DOUBLE QUOTATION MARK
    (0x8E, Entry::single('\u{201D}')), // RIGHT DOUBLE QUOTATION MARK
    (0x8F, Entry::sequence(&['\u{0E4D}', '\u{F874}'])), // THAI CHARACTER NIKHAHIT, left position
    (0x91, Entry::single('\u{2022}')), // BULLET
    (0x92, Entry::sequence(&['\u{0E31}', '\u{F874}'])), // THAI CHARACTER MAI HAN-AKAT, left position
    (0x93, Entry::sequence(&['\u{0E47}', '\u{F874}'])), // THAI CHARACTER MAITAIKHU, left position
    (0x94, Entry::sequence(&['\u{0E34}', '\u{F874}'])), // THAI CHARACTER SARA I, left position
    (0x95, Entry::sequence(&['\u{0E35}', '\u{F874}'])), // THAI CHARACTER SARA II, left position
    (0x96, Entry::sequence(&['\u{0E36}', '\u{F874}'])), // THAI CHARACTER SARA UE, left position
    (0x97, Entry::sequence(&['\u{0E37}', '\u{F874}'])), // THAI CHARACTER SARA UEE, left position
    (0x98, Entry::sequence(&['\u{0E48}', '\u{F874}'])), // THAI CHARACTER MAI EK, left position
    (0x99, Entry::sequence(&['\u{0E49}', '\u{F874}'])), // THAI CHARACTER MAI THO, left position
    (0x9A, Entry::sequence(&['\u{0E4A}', '\u{F874}'])), // THAI CHARACTER MAI TRI, left position
    (0x9B, Entry::sequence(&['\u{0E4B}', '\u{F874}'])), // THAI CHARACTER MAI CHATTAWA, left position
    (0x9C, Entry::sequence(&['\u{0E4C}', '\u{F874}'])), // THAI CHARACTER THANTHAKHAT, left position
    (0x9D, Entry::single('\u{2018}')), // LEFT SINGLE QUOTATION MARK
    (0x9E, Entry::single('\u{2019}')), // RIGHT SINGLE QUOTATION MARK
    (0xA0, Entry::single('\u{00A0}')), // NO-BREAK SPACE
    (0xA1, Entry::single('\u{0E01}')), // THAI CHARACTER KO KAI
    (0xA2, Entry::single('\u{0E02}')), // THAI CHARACTER KHO KHAI
    (0xA3, Entry::single('\u{0E03}')), // THAI CHARACTER KHO KHUAT
    (0xA4, Entry::single('\u{0E04}')), // THAI CHARACTER KHO KHWAI
    (0xA5, Entry::single('\u{0E05}')), // THAI CHARACTER KHO KHON
    (0xA6, Entry::single('\u{0E06}')), // THAI CHARACTER KHO RAKHANG
    (0xA7, Entry::single('\u{0E07}')), // THAI CHARACTER NGO NGU
    (0xA8, Entry::single('\u{0E08}')), // THAI CHARACTER CHO CHAN
    (0xA9, Entry::single('\u{0E09}')), // THAI CHARACTER CHO CHING
    (0xAA, Entry::single('\u{0E0A}')), // THAI CHARACTER CHO CHANG
    (0xAB, Entry::single('\u{0E0B}')), // THAI CHARACTER SO SO
    (0xAC, Entry::single('\u{0E0C}')), // THAI CHARACTER CHO CHOE
    (0xAD, Entry::single('\u{0E0D}')), // THAI CHARACTER YO YING
    (0xAE, Entry::single('\u{0E0E}')), // THAI CHARACTER DO CHADA
    (0xAF, Entry::single('\u{0E0F}')), // THAI CHARACTER TO PATAK
    (0xB0, Entry::single('\u{0E10}')), // THAI CHARACTER THO THAN
    (0xB1, Entry::single('\u{0E11}')), // THAI CHARACTER THO NANGMONTHO
    (0xB2, Entry::single('\u{0E12}')), // THAI CHARACTER THO PHUTHAO
    (0xB3, Entry::single('\u{0E13}')), // THAI CHARACTER NO NEN
    (0xB4, Entry::single('\u{0E14}')), // THAI CHARACTER DO DEK
    (0xB5, Entry::single('\u{0E15}')), // THAI CHARACTER TO TAO
    (0xB6, Entry::single('\u{0E16}')), // THAI CHARACTER THO THUNG
    (0xB7, Entry::single('\u{0E17}')), // THAI CHARACTER THO THAHAN
    (0xB8, Entry::single('\u{0E18}')), // THAI CHARACTER THO THONG
    (0xB9, Entry::single('\u{0E19}')), // THAI CHARACTER NO NU
    (0xBA, Entry::single('\u{0E1A}')), // THAI CHARACTER BO BAIMAI
    (0xBB, Entry::single('\u{0E1B}')), // THAI CHARACTER PO PLA
    (0xBC, Entry::single('\u{0E1C}')), // THAI CHARACTER PHO PHUNG
    (0xBD, Entry::single('\u{0E1D}')), // THAI CHARACTER FO FA
    (0xBE, Entry::single('\u{0E1E}')), // THAI CHARACTER PHO PHAN
    (0xBF, Entry::single('\u{0E1F}')), // THAI CHARACTER FO FAN
    (0xC0, Entry::single('\u{0E20}')), // THAI CHARACTER PHO SAMPHAO
    (0xC1, Entry::single('\u{0E21}')), // THAI CHARACTER MO MA
    (0xC2, Entry::single('\u{0E22}')), // THAI CHARACTER YO YAK
    (0xC3, Entry::single('\u{0E23}')), // THAI CHARACTER RO RUA
    (0xC4, Entry::single('\u{0E24}')), // THAI CHARACTER RU
    (0xC5, Entry::single('\u{0E25}')), // THAI CHARACTER LO LING
    (0xC6, Entry::single('\u{0E26}')), // THAI CHARACTER LU
    (0xC7, Entry::single('\u{0E27}')), // THAI CHARACTER WO WAEN
    (0xC8, Entry::single('\u{0E28}')), // THAI CHARACTER SO SALA
    (0xC9, Entry::single('\u{0E29}')), // THAI CHARACTER SO RUSI
    (0xCA, Entry::single('\u{0E2A}')), // THAI CHARACTER SO SUA
    (0xCB, Entry::single('\u{0E2B}')), // THAI CHARACTER HO HIP
    (0xCC, Entry::single('\u{0E2C}')), // THAI CHARACTER LO CHULA
    (0xCD, Entry::single('\u{0E2D}')), // THAI CHARACTER O ANG
    (0xCE, Entry::single('\u{0E2E}')), // THAI CHARACTER HO NOKHUK
    (0xCF, Entry::single('\u{0E2F}')), // THAI CHARACTER PAIYANNOI
    (0xD0, Entry::single('\u{0E30}')), // THAI CHARACTER SARA A
    (0xD1, Entry::single('\u{0E31}')), // THAI CHARACTER MAI HAN-AKAT
    (0xD2, Entry::single('\u{0E32}')), // THAI CHARACTER SARA AA
    (0xD3, Entry::single('\u{0E33}')), // THAI CHARACTER SARA AM
    (0xD4, Entry::single('\u{0E34}')), // THAI CHARACTER SARA I
    (0xD5, Entry::single('\u{0E35}')), // THAI CHARACTER SARA II
    (0xD6, Entry::single('\u{0E36}')), // THAI CHARACTER SARA UE
    (0xD7, Entry::single('\u{0E37}')), // THAI CHARACTER SARA UEE
    (0xD8, Entry::single('\u{0E38}')), // THAI CHARACTER SARA U
    (0xD9, Entry::single('\u{0E39}')), // THAI CHARACTER SARA UU
    (0xDA, Entry::single('\u{0E3A}')), // THAI CHARACTER PHINTHU
    (0xDB, Entry::single('\u{FEFF}')), // ZERO WIDTH NO-BREAK SPACE
    (0xDC, Entry::single('\u{200B}')), // ZERO WIDTH SPACE
    (0xDD, Entry::single('\u{2013}')), // EN DASH
    (0xDE, Entry::single('\u{2014}')), // EM DASH
    (0xDF, Entry::single('\u{0E3F}')), // THAI CURRENCY SYMBOL BAHT
    (0xE0, Entry::single('\u{0E40}')), // THAI CHARACTER SARA E
    (0xE1, Entry::single('\u{0E41}')), // THAI CHARACTER SARA AE
    (0xE2, Entry::single('\u{0E42}')), // THAI CHARACTER SARA O
    (0xE3, Entry::single('\u{0E43}')), // THAI CHARACTER SARA AI MAIMUAN
    (0xE4, Entry::single('\u{0E44}')), // THAI CHARACTER SARA AI MAIMALAI
    (0xE5, Entry::single('\u{0E45}')), // THAI CHARACTER LAKKHANGYAO
    (0xE6, Entry::single('\u{0E46}')), // THAI CHARACTER MAIYAMOK
    (0xE7, Entry::single('\u{0E47}')), // THAI CHARACTER MAITAIKHU
    (0xE8, Entry::single('\u{0E48}')), // THAI CHARACTER MAI EK
    (0xE9, Entry::single('\u{0E49}')), // THAI CHARACTER MAI THO
    (0xEA, Entry::single('\u{0E4A}')), // THAI CHARACTER MAI TRI
    (0xEB, Entry::single('\u{0E4B}')), // THAI CHARACTER MAI CHATTAWA
    (0xEC, Entry::single('\u{0E4C}')), // THAI CHARACTER THANTHAKHAT
    (0xED, Entry::single('\u{0E4D}')), // THAI CHARACTER NIKHAHIT
    (0xEE, Entry::single('\u{2122}')), // TRADE MARK SIGN
    (0xEF, Entry::single('\u{0E4F}')), // THAI CHARACTER FONGMAN
    (0xF0, Entry::single('\u{0E50}')), // THAI DIGIT ZERO
    (0xF1, Entry::single('\u{0E51}')), // THAI DIGIT ONE
    (0xF2, Entry::single('\u{0E52}')), // THAI DIGIT TWO
    (0xF3, Entry::single('\u{0E53}')), // THAI DIGIT THREE
    (0xF4, Entry::single('\u{0E54}')), // THAI DIGIT FOUR
    (0xF5, Entry::single('\u{0E55}')), // THAI DIGIT FIVE
    (0xF6, Entry::single('\u{0E56}')), // THAI DIGIT SIX
    (0xF7, Entry::single('\u{0E57}')), // THAI DIGIT SEVEN
    (0xF8, Entry::single('\u{0E58}')), // THAI DIGIT EIGHT
    (0xF9, Entry::single('\u{0E59}')), // THAI DIGIT NINE
    (0xFA, Entry::single('\u{00AE}')), // REGISTERED SIGN
    (0xFB, Entry::single('\u{00A9}')), // COPYRIGHT SIGN
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Mapping;
    
    #[test]
    fn undefined_codes() {
        for (code, entry) in THAI.iter() {
            let undefined = matches!(code, 0x00..=0x1F | 0x7F | 0x90 | 0x9F | 0xFC..=0xFF);
            assert_eq!(entry.is_defined(), !undefined, "code {code:#04X}");
        }
    }

    #[test]
    fn ascii_is_identity() {
        for code in 0x20..=0x7E_u8 {
            assert_eq!(THAI.lookup(code).as_char(), Some(char::from(code)));
        }
    }

    #[test]
    fn tis_620_letters() {
        assert_eq!(THAI.lookup(0xA1).as_char(), Some('\u{0E01}'));
        assert_eq!(THAI.lookup(0xDA).as_char(), Some('\u{0E3A}'));
        assert_eq!(THAI.lookup(0xDF).as_char(), Some('\u{0E3F}'));
        assert_eq!(THAI.lookup(0xEE).as_char(), Some('\u{2122}'));
        assert_eq!(THAI.lookup(0xFA).as_char(), Some('\u{00AE}'));
        assert_eq!(THAI.lookup(0xFB).as_char(), Some('\u{00A9}'));
    }

    #[test]
    fn positional_variants() {
        assert_eq!(THAI.lookup(0x83).as_chars(), &['\u{0E48}', '\u{F875}']);
        assert_eq!(THAI.lookup(0x88).as_chars(), &['\u{0E48}', '\u{F873}']);
        assert_eq!(THAI.lookup(0x98).as_chars(), &['\u{0E48}', '\u{F874}']);

        let variants = THAI
            .defined()
            .filter_map(|(_, entry)| match entry.mapping() {
                Some(Mapping::Sequence(seq)) => Some(*seq),
                _ => None,
            });

        let mut count = 0;
        for seq in variants {
            assert_eq!(seq.as_chars().len(), 2);
            let hint = seq.hint().unwrap();
            assert!(hint.is_variant_tag());
            assert!((3..=5).contains(&hint.offset()));
            count += 1;
        }

        assert_eq!(count, 22);
    }
}
