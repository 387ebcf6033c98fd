//! The ".Keyboard" encoding.
//!
//! Before Mac OS X the ".Keyboard" font drew the glyphs for special keys in
//! menus. Mac OS X has no such font and only uses the encoding to turn Menu
//! Manager glyph constants into Unicode. The encoding shares script code 0
//! with Mac OS Roman, so it can only be recognised by the font name.
//!
//! Codes in the control range are real characters here. Several keys have no
//! single Unicode equivalent and map to a sequence that uses Apple's
//! transcoding hints. The function keys, for instance, are a grouping hint
//! followed by the key label. Mappings that were added for Mac OS X only are
//! one-way.
//!
//! Source: Apple's `KEYBOARD.TXT`, version c02.

use crate::entry::Entry;
use crate::table::CodeTable;

/// The ".Keyboard" symbol encoding.
#[rustfmt::skip]
pub static KEYBOARD: CodeTable = CodeTable::build(&[
    (0x00, Entry::single('\u{0000}')), // control - NUL
    (0x02, Entry::single('\u{21E5}')), // RIGHTWARDS ARROW TO BAR: Tab right (left-to-right text)
    (0x03, Entry::single('\u{21E4}')), // LEFTWARDS ARROW TO BAR: Tab left (right-to-left text)
    (0x04, Entry::single('\u{2324}')), // UP ARROWHEAD BETWEEN TWO HORIZONTAL BARS: Enter key
    (0x05, Entry::single('\u{21E7}')), // UPWARDS WHITE ARROW: Shift key
    (0x06, Entry::single('\u{2303}')), // UP ARROWHEAD: Control key
    (0x07, Entry::single('\u{2325}')), // OPTION KEY: Option key
    (0x08, Entry::single('\u{0008}')), // control - BS
    (0x09, Entry::single('\u{2423}').one_way()), // OPEN BOX: Space key (Mac OS X mapping, duplicates 0x61)
    (0x0A, Entry::single('\u{2326}')), // ERASE TO THE RIGHT: Delete right (right-to-left text)
    (0x0B, Entry::single('\u{21A9}')), // LEFTWARDS ARROW WITH HOOK: Return key (left-to-right text)
    (0x0C, Entry::single('\u{21AA}')), // RIGHTWARDS ARROW WITH HOOK: Return key (right-to-left text)
    (0x0D, Entry::single('\u{000D}')), // control - CR
    (0x0F, Entry::single('\u{F802}')), // lower left pencil
    (0x10, Entry::single('\u{21E3}')), // DOWNWARDS DASHED ARROW
    (0x11, Entry::single('\u{2318}')), // PLACE OF INTEREST SIGN: Command key
    (0x12, Entry::single('\u{2713}')), // CHECK MARK
    (0x13, Entry::single('\u{25C6}')), // BLACK DIAMOND
    (0x14, Entry::single('\u{F8FF}')), // Apple logo
    (0x17, Entry::single('\u{232B}')), // ERASE TO THE LEFT: Delete left (left-to-right text)
    (0x18, Entry::single('\u{21E0}')), // LEFTWARDS DASHED ARROW
    (0x19, Entry::single('\u{21E1}')), // UPWARDS DASHED ARROW
    (0x1A, Entry::single('\u{21E2}')), // RIGHTWARDS DASHED ARROW
    (0x1B, Entry::single('\u{238B}')), // BROKEN CIRCLE WITH NORTHWEST ARROW: Escape key; for Unicode 3.0 and later
    (0x1C, Entry::single('\u{2327}')), // X IN A RECTANGLE BOX: Clear key
    (0x20, Entry::single('\u{0020}')), // SPACE
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
    (0x46, Entry::single('\u{0046}')), // LATIN CAPITAL LETTER F
    (0x61, Entry::single('\u{2423}')), // OPEN BOX: Blank key
    (0x62, Entry::single('\u{21DE}')), // UPWARDS ARROW WITH DOUBLE STROKE: Page up key
    (0x63, Entry::single('\u{21EA}')), // UPWARDS WHITE ARROW FROM BAR: Caps lock key
    (0x64, Entry::single('\u{2190}')), // LEFTWARDS ARROW
    (0x65, Entry::single('\u{2192}')), // RIGHTWARDS ARROW
    (0x66, Entry::single('\u{2196}')), // NORTH WEST ARROW
    (0x67, Entry::sequence(&['\u{003F}', '\u{20DD}'])), // QUESTION MARK + COMBINING ENCLOSING CIRCLE: Help key
    (0x68, Entry::single('\u{2191}')), // UPWARDS ARROW
    (0x69, Entry::single('\u{2198}')), // SOUTH EAST ARROW
    (0x6A, Entry::single('\u{2193}')), // DOWNWARDS ARROW
    (0x6B, Entry::single('\u{21DF}')), // DOWNWARDS ARROW WITH DOUBLE STROKE: Page down key
    (0x6C, Entry::sequence(&['\u{F8FF}', '\u{F87F}'])), // Apple logo, outline
    (0x6D, Entry::single('\u{F803}')), // Contextual menu key symbol
    (0x6E, Entry::sequence(&['\u{2758}', '\u{20DD}'])), // LIGHT VERTICAL BAR + COMBINING ENCLOSING CIRCLE: Power key
    (0x6F, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0031}'])), // group_2 + F + 1: F1 key
    (0x70, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0032}'])), // group_2 + F + 2: F2 key
    (0x71, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0033}'])), // group_2 + F + 3: F3 key
    (0x72, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0034}'])), // group_2 + F + 4: F4 key
    (0x73, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0035}'])), // group_2 + F + 5: F5 key
    (0x74, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0036}'])), // group_2 + F + 6: F6 key
    (0x75, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0037}'])), // group_2 + F + 7: F7 key
    (0x76, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0038}'])), // group_2 + F + 8: F8 key
    (0x77, Entry::sequence(&['\u{F860}', '\u{0046}', '\u{0039}'])), // group_2 + F + 9: F9 key
    (0x78, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0030}'])), // group_3 + F + 1 + 0: F10 key
    (0x79, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0031}'])), // group_3 + F + 1 + 1: F11 key
    (0x7A, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0032}'])), // group_3 + F + 1 + 2: F12 key
    (0x87, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0033}'])), // group_3 + F + 1 + 3: F13 key
    (0x88, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0034}'])), // group_3 + F + 1 + 4: F14 key
    (0x89, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0035}'])), // group_3 + F + 1 + 5: F15 key
    (0x8A, Entry::single('\u{2388}')), // HELM SYMBOL: Control key (ISO standard), Unicode 3.0 and later
    (0x8B, Entry::single('\u{2387}')), // ALTERNATIVE KEY SYMBOL: Unicode 3.0 and later
    (0x8C, Entry::single('\u{23CF}')), // EJECT SYMBOL: Unicode 4.0 and later, Mac OS X only
    (0x8D, Entry::sequence(&['\u{82F1}', '\u{6570}']).one_way()), // Japanese "eisu" key symbol: Mac OS X only
    (0x8E, Entry::sequence(&['\u{304B}', '\u{306A}']).one_way()), // Japanese "kana" key symbol: Mac OS X only
    (0x8F, Entry::sequence(&['\u{F861}', '\u{0046}', '\u{0031}', '\u{0036}']).one_way()), // group_3 + F + 1 + 6: F16 key, Mac OS X only
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Mapping;
    use crate::hint::{HintKind, TranscodingHint};

    fn is_defined(code: u8) -> bool {
        matches!(
            code,
            0x00 | 0x02..=0x0D
                | 0x0F..=0x14
                | 0x17..=0x1C
                | 0x20
                | 0x30..=0x39
                | 0x46
                | 0x61..=0x7A
                | 0x87..=0x8F
        )
    }

    #[test]
    fn undefined_codes() {
        for (code, entry) in KEYBOARD.iter() {
            assert_eq!(entry.is_defined(), is_defined(code), "code {code:#04X}");
        }
    }

    #[test]
    fn singles() {
        assert_eq!(KEYBOARD.lookup(0x00).as_char(), Some('\0'));
        assert_eq!(KEYBOARD.lookup(0x11).as_char(), Some('\u{2318}'));
        assert_eq!(KEYBOARD.lookup(0x14).as_char(), Some('\u{F8FF}'));
        assert_eq!(KEYBOARD.lookup(0x20).as_char(), Some(' '));
        assert_eq!(KEYBOARD.lookup(0x35).as_char(), Some('5'));
        assert_eq!(KEYBOARD.lookup(0x8C).as_char(), Some('\u{23CF}'));
    }

    #[test]
    fn sequences() {
        assert_eq!(KEYBOARD.lookup(0x67).as_chars(), &['?', '\u{20DD}']);
        assert_eq!(KEYBOARD.lookup(0x6C).as_chars(), &['\u{F8FF}', '\u{F87F}']);
        assert_eq!(KEYBOARD.lookup(0x6F).as_chars(), &['\u{F860}', 'F', '1']);
        assert_eq!(KEYBOARD.lookup(0x7A).as_chars(), &['\u{F861}', 'F', '1', '2']);
        assert_eq!(KEYBOARD.lookup(0x8F).as_chars(), &['\u{F861}', 'F', '1', '6']);
    }

    #[test]
    fn function_keys() {
        let keys = (0x6F..=0x7A).chain(0x87..=0x89).chain(0x8F..=0x8F);

        for (n, code) in (1..=16).zip(keys) {
            let entry = KEYBOARD.lookup(code);
            let Some(Mapping::Sequence(seq)) = entry.mapping() else {
                panic!("F{n} is not a sequence");
            };

            let label: alloc::string::String = seq.as_chars()[1..].iter().collect();
            assert_eq!(label, alloc::format!("F{n}"));
        }
    }

    #[test]
    fn one_way_codes() {
        let one_way: alloc::vec::Vec<u8> = KEYBOARD
            .defined()
            .filter(|(_, entry)| !entry.is_round_trip())
            .map(|(code, _)| code)
            .collect();

        assert_eq!(one_way, [0x09, 0x8D, 0x8E, 0x8F]);
        // Space key duplicates the blank key.
        assert_eq!(KEYBOARD.lookup(0x09).as_chars(), KEYBOARD.lookup(0x61).as_chars());
    }

    #[test]
    fn grouping_hints() {
        assert_eq!(
            KEYBOARD.lookup(0x70).mapping().and_then(|m| match m {
                Mapping::Sequence(s) => s.hint(),
                Mapping::Single(_) => None,
            }),
            TranscodingHint::new(HintKind::Grouping, 0)
        );
    }
}
