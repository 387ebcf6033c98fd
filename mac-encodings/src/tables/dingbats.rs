//! The dingbat table that accompanies the ".Keyboard" encoding.
//!
//! This is the Mac OS mapping for Zapf Dingbats. Unlike the symbol table,
//! every defined code maps to exactly one character and every mapping
//! round-trips.
//!
//! Source: Apple's `DINGBATS.TXT`.

use crate::entry::Entry;
use crate::table::CodeTable;

/// The Mac OS Dingbats encoding.
#[rustfmt::skip]
pub static DINGBATS: CodeTable = CodeTable::build(&[
    (0x20, Entry::single('\u{0020}')), // SPACE
    (0x21, Entry::single('\u{2701}')), // UPPER BLADE SCISSORS
    (0x22, Entry::single('\u{2702}')), // BLACK SCISSORS
    (0x23, Entry::single('\u{2703}')), // LOWER BLADE SCISSORS
    (0x24, Entry::single('\u{2704}')), // WHITE SCISSORS
    (0x25, Entry::single('\u{260E}')), // BLACK TELEPHONE
    (0x26, Entry::single('\u{2706}')), // TELEPHONE LOCATION SIGN
    (0x27, Entry::single('\u{2707}')), // TAPE DRIVE
    (0x28, Entry::single('\u{2708}')), // AIRPLANE
    (0x29, Entry::single('\u{2709}')), // ENVELOPE
    (0x2A, Entry::single('\u{261B}')), // BLACK RIGHT POINTING INDEX
    (0x2B, Entry::single('\u{261E}')), // WHITE RIGHT POINTING INDEX
    (0x2C, Entry::single('\u{270C}')), // VICTORY HAND
    (0x2D, Entry::single('\u{270D}')), // WRITING HAND
    (0x2E, Entry::single('\u{270E}')), // LOWER RIGHT PENCIL
    (0x2F, Entry::single('\u{270F}')), // PENCIL
    (0x30, Entry::single('\u{2710}')), // UPPER RIGHT PENCIL
    (0x31, Entry::single('\u{2711}')), // WHITE NIB
    (0x32, Entry::single('\u{2712}')), // BLACK NIB
    (0x33, Entry::single('\u{2713}')), // CHECK MARK
    (0x34, Entry::single('\u{2714}')), // HEAVY CHECK MARK
    (0x35, Entry::single('\u{2715}')), // MULTIPLICATION X
    (0x36, Entry::single('\u{2716}')), // HEAVY MULTIPLICATION X
    (0x37, Entry::single('\u{2717}')), // BALLOT X
    (0x38, Entry::single('\u{2718}')), // HEAVY BALLOT X
    (0x39, Entry::single('\u{2719}')), // OUTLINED GREEK CROSS
    (0x3A, Entry::single('\u{271A}')), // HEAVY GREEK CROSS
    (0x3B, Entry::single('\u{271B}')), // OPEN CENTRE CROSS
    (0x3C, Entry::single('\u{271C}')), // HEAVY OPEN CENTRE CROSS
    (0x3D, Entry::single('\u{271D}')), // LATIN CROSS
    (0x3E, Entry::single('\u{271E}')), // SHADOWED WHITE LATIN CROSS
    (0x3F, Entry::single('\u{271F}')), // OUTLINED LATIN CROSS
    (0x40, Entry::single('\u{2720}')), // MALTESE CROSS
    (0x41, Entry::single('\u{2721}')), // STAR OF DAVID
    (0x42, Entry::single('\u{2722}')), // FOUR TEARDROP-SPOKED ASTERISK
    (0x43, Entry::single('\u{2723}')), // FOUR BALLOON-SPOKED ASTERISK
    (0x44, Entry::single('\u{2724}')), // HEAVY FOUR BALLOON-SPOKED ASTERISK
    (0x45, Entry::single('\u{2725}')), // FOUR CLUB-SPOKED ASTERISK
    (0x46, Entry::single('\u{2726}')), // BLACK FOUR POINTED STAR
    (0x47, Entry::single('\u{2727}')), // WHITE FOUR POINTED STAR
    (0x48, Entry::single('\u{2605}')), // BLACK STAR
    (0x49, Entry::single('\u{2729}')), // STRESS OUTLINED WHITE STAR
    (0x4A, Entry::single('\u{272A}')), // CIRCLED WHITE STAR
    (0x4B, Entry::single('\u{272B}')), // OPEN CENTRE BLACK STAR
    (0x4C, Entry::single('\u{272C}')), // BLACK CENTRE WHITE STAR
    (0x4D, Entry::single('\u{272D}')), // OUTLINED BLACK STAR
    (0x4E, Entry::single('\u{272E}')), // HEAVY OUTLINED BLACK STAR
    (0x4F, Entry::single('\u{272F}')), // PINWHEEL STAR
    (0x50, Entry::single('\u{2730}')), // SHADOWED WHITE STAR
    (0x51, Entry::single('\u{2731}')), // HEAVY ASTERISK
    (0x52, Entry::single('\u{2732}')), // OPEN CENTRE ASTERISK
    (0x53, Entry::single('\u{2733}')), // EIGHT SPOKED ASTERISK
    (0x54, Entry::single('\u{2734}')), // EIGHT POINTED BLACK STAR
    (0x55, Entry::single('\u{2735}')), // EIGHT POINTED PINWHEEL STAR
    (0x56, Entry::single('\u{2736}')), // SIX POINTED BLACK STAR
    (0x57, Entry::single('\u{2737}')), // EIGHT POINTED RECTILINEAR BLACK STAR
    (0x58, Entry::single('\u{2738}')), // HEAVY EIGHT POINTED RECTILINEAR BLACK STAR
    (0x59, Entry::single('\u{2739}')), // TWELVE POINTED BLACK STAR
    (0x5A, Entry::single('\u{273A}')), // SIXTEEN POINTED ASTERISK
    (0x5B, Entry::single('\u{273B}')), // TEARDROP-SPOKED ASTERISK
    (0x5C, Entry::single('\u{273C}')), // OPEN CENTRE TEARDROP-SPOKED ASTERISK
    (0x5D, Entry::single('\u{273D}')), // HEAVY TEARDROP-SPOKED ASTERISK
    (0x5E, Entry::single('\u{273E}')), // SIX PETALLED BLACK AND WHITE FLORETTE
    (0x5F, Entry::single('\u{273F}')), // BLACK FLORETTE
    (0x60, Entry::single('\u{2740}')), // WHITE FLORETTE
    (0x61, Entry::single('\u{2741}')), // EIGHT PETALLED OUTLINED BLACK FLORETTE
    (0x62, Entry::single('\u{2742}')), // CIRCLED OPEN CENTRE EIGHT POINTED STAR
    (0x63, Entry::single('\u{2743}')), // HEAVY TEARDROP-SPOKED PINWHEEL ASTERISK
    (0x64, Entry::single('\u{2744}')), // SNOWFLAKE
    (0x65, Entry::single('\u{2745}')), // TIGHT TRIFOLIATE SNOWFLAKE
    (0x66, Entry::single('\u{2746}')), // HEAVY CHEVRON SNOWFLAKE
    (0x67, Entry::single('\u{2747}')), // SPARKLE
    (0x68, Entry::single('\u{2748}')), // HEAVY SPARKLE
    (0x69, Entry::single('\u{2749}')), // BALLOON-SPOKED ASTERISK
    (0x6A, Entry::single('\u{274A}')), // EIGHT TEARDROP-SPOKED PROPELLER ASTERISK
    (0x6B, Entry::single('\u{274B}')), // HEAVY EIGHT TEARDROP-SPOKED PROPELLER ASTERISK
    (0x6C, Entry::single('\u{25CF}')), // BLACK CIRCLE
    (0x6D, Entry::single('\u{274D}')), // SHADOWED WHITE CIRCLE
    (0x6E, Entry::single('\u{25A0}')), // BLACK SQUARE
    (0x6F, Entry::single('\u{274F}')), // LOWER RIGHT DROP-SHADOWED WHITE SQUARE
    (0x70, Entry::single('\u{2750}')), // UPPER RIGHT DROP-SHADOWED WHITE SQUARE
    (0x71, Entry::single('\u{2751}')), // LOWER RIGHT SHADOWED WHITE SQUARE
    (0x72, Entry::single('\u{2752}')), // UPPER RIGHT SHADOWED WHITE SQUARE
    (0x73, Entry::single('\u{25B2}')), // BLACK UP-POINTING TRIANGLE
    (0x74, Entry::single('\u{25BC}')), // BLACK DOWN-POINTING TRIANGLE
    (0x75, Entry::single('\u{25C6}')), // BLACK DIAMOND
    (0x76, Entry::single('\u{2756}')), // BLACK DIAMOND MINUS WHITE X
    (0x77, Entry::single('\u{25D7}')), // RIGHT HALF BLACK CIRCLE
    (0x78, Entry::single('\u{2758}')), // LIGHT VERTICAL BAR
    (0x79, Entry::single('\u{2759}')), // MEDIUM VERTICAL BAR
    (0x7A, Entry::single('\u{275A}')), // HEAVY VERTICAL BAR
    (0x7B, Entry::single('\u{275B}')), // HEAVY SINGLE TURNED COMMA QUOTATION MARK ORNAMENT
    (0x7C, Entry::single('\u{275C}')), // HEAVY SINGLE COMMA QUOTATION MARK ORNAMENT
    (0x7D, Entry::single('\u{275D}')), // HEAVY DOUBLE TURNED COMMA QUOTATION MARK ORNAMENT
    (0x7E, Entry::single('\u{275E}')), // HEAVY DOUBLE COMMA QUOTATION MARK ORNAMENT
    (0x80, Entry::single('\u{2768}')), // MEDIUM LEFT PARENTHESIS ORNAMENT: for Unicode 3.2 and later
    (0x81, Entry::single('\u{2769}')), // MEDIUM RIGHT PARENTHESIS ORNAMENT: for Unicode 3.2 and later
    (0x82, Entry::single('\u{276A}')), // MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT: for Unicode 3.2 and later
    (0x83, Entry::single('\u{276B}')), // MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT: for Unicode 3.2 and later
    (0x84, Entry::single('\u{276C}')), // MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x85, Entry::single('\u{276D}')), // MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x86, Entry::single('\u{276E}')), // HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT: for Unicode 3.2 and later
    (0x87, Entry::single('\u{276F}')), // HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT: for Unicode 3.2 and later
    (0x88, Entry::single('\u{2770}')), // HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x89, Entry::single('\u{2771}')), // HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x8A, Entry::single('\u{2772}')), // LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x8B, Entry::single('\u{2773}')), // LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x8C, Entry::single('\u{2774}')), // MEDIUM LEFT CURLY BRACKET ORNAMENT: for Unicode 3.2 and later
    (0x8D, Entry::single('\u{2775}')), // MEDIUM RIGHT CURLY BRACKET ORNAMENT: for Unicode 3.2 and later
    (0xA1, Entry::single('\u{2761}')), // CURVED STEM PARAGRAPH SIGN ORNAMENT
    (0xA2, Entry::single('\u{2762}')), // HEAVY EXCLAMATION MARK ORNAMENT
    (0xA3, Entry::single('\u{2763}')), // HEAVY HEART EXCLAMATION MARK ORNAMENT
    (0xA4, Entry::single('\u{2764}')), // HEAVY BLACK HEART
    (0xA5, Entry::single('\u{2765}')), // ROTATED HEAVY BLACK HEART BULLET
    (0xA6, Entry::single('\u{2766}')), // FLORAL HEART
    (0xA7, Entry::single('\u{2767}')), // ROTATED FLORAL HEART BULLET
    (0xA8, Entry::single('\u{2663}')), // BLACK CLUB SUIT
    (0xA9, Entry::single('\u{2666}')), // BLACK DIAMOND SUIT
    (0xAA, Entry::single('\u{2665}')), // BLACK HEART SUIT
    (0xAB, Entry::single('\u{2660}')), // BLACK SPADE SUIT
    (0xAC, Entry::single('\u{2460}')), // CIRCLED DIGIT ONE
    (0xAD, Entry::single('\u{2461}')), // CIRCLED DIGIT TWO
    (0xAE, Entry::single('\u{2462}')), // CIRCLED DIGIT THREE
    (0xAF, Entry::single('\u{2463}')), // CIRCLED DIGIT FOUR
    (0xB0, Entry::single('\u{2464}')), // CIRCLED DIGIT FIVE
    (0xB1, Entry::single('\u{2465}')), // CIRCLED DIGIT SIX
    (0xB2, Entry::single('\u{2466}')), // CIRCLED DIGIT SEVEN
    (0xB3, Entry::single('\u{2467}')), // CIRCLED DIGIT EIGHT
    (0xB4, Entry::single('\u{2468}')), // CIRCLED DIGIT NINE
    (0xB5, Entry::single('\u{2469}')), // CIRCLED NUMBER TEN
    (0xB6, Entry::single('\u{2776}')), // DINGBAT NEGATIVE CIRCLED DIGIT ONE
    (0xB7, Entry::single('\u{2777}')), // DINGBAT NEGATIVE CIRCLED DIGIT TWO
    (0xB8, Entry::single('\u{2778}')), // DINGBAT NEGATIVE CIRCLED DIGIT THREE
    (0xB9, Entry::single('\u{2779}')), // DINGBAT NEGATIVE CIRCLED DIGIT FOUR
    (0xBA, Entry::single('\u{277A}')), // DINGBAT NEGATIVE CIRCLED DIGIT FIVE
    (0xBB, Entry::single('\u{277B}')), // DINGBAT NEGATIVE CIRCLED DIGIT SIX
    (0xBC, Entry::single('\u{277C}')), // DINGBAT NEGATIVE CIRCLED DIGIT SEVEN
    (0xBD, Entry::single('\u{277D}')), // DINGBAT NEGATIVE CIRCLED DIGIT EIGHT
    (0xBE, Entry::single('\u{277E}')), // DINGBAT NEGATIVE CIRCLED DIGIT NINE
    (0xBF, Entry::single('\u{277F}')), // DINGBAT NEGATIVE CIRCLED NUMBER TEN
    (0xC0, Entry::single('\u{2780}')), // DINGBAT CIRCLED SANS-SERIF DIGIT ONE
    (0xC1, Entry::single('\u{2781}')), // DINGBAT CIRCLED SANS-SERIF DIGIT TWO
    (0xC2, Entry::single('\u{2782}')), // DINGBAT CIRCLED SANS-SERIF DIGIT THREE
    (0xC3, Entry::single('\u{2783}')), // DINGBAT CIRCLED SANS-SERIF DIGIT FOUR
    (0xC4, Entry::single('\u{2784}')), // DINGBAT CIRCLED SANS-SERIF DIGIT FIVE
    (0xC5, Entry::single('\u{2785}')), // DINGBAT CIRCLED SANS-SERIF DIGIT SIX
    (0xC6, Entry::single('\u{2786}')), // DINGBAT CIRCLED SANS-SERIF DIGIT SEVEN
    (0xC7, Entry::single('\u{2787}')), // DINGBAT CIRCLED SANS-SERIF DIGIT EIGHT
    (0xC8, Entry::single('\u{2788}')), // DINGBAT CIRCLED SANS-SERIF DIGIT NINE
    (0xC9, Entry::single('\u{2789}')), // DINGBAT CIRCLED SANS-SERIF NUMBER TEN
    (0xCA, Entry::single('\u{278A}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ONE
    (0xCB, Entry::single('\u{278B}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT TWO
    (0xCC, Entry::single('\u{278C}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT THREE
    (0xCD, Entry::single('\u{278D}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FOUR
    (0xCE, Entry::single('\u{278E}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FIVE
    (0xCF, Entry::single('\u{278F}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SIX
    (0xD0, Entry::single('\u{2790}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SEVEN
    (0xD1, Entry::single('\u{2791}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT EIGHT
    (0xD2, Entry::single('\u{2792}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT NINE
    (0xD3, Entry::single('\u{2793}')), // DINGBAT NEGATIVE CIRCLED SANS-SERIF NUMBER TEN
    (0xD4, Entry::single('\u{2794}')), // HEAVY WIDE-HEADED RIGHTWARDS ARROW
    (0xD5, Entry::single('\u{2192}')), // RIGHTWARDS ARROW
    (0xD6, Entry::single('\u{2194}')), // LEFT RIGHT ARROW
    (0xD7, Entry::single('\u{2195}')), // UP DOWN ARROW
    (0xD8, Entry::single('\u{2798}')), // HEAVY SOUTH EAST ARROW
    (0xD9, Entry::single('\u{2799}')), // HEAVY RIGHTWARDS ARROW
    (0xDA, Entry::single('\u{279A}')), // HEAVY NORTH EAST ARROW
    (0xDB, Entry::single('\u{279B}')), // DRAFTING POINT RIGHTWARDS ARROW
    (0xDC, Entry::single('\u{279C}')), // HEAVY ROUND-TIPPED RIGHTWARDS ARROW
    (0xDD, Entry::single('\u{279D}')), // TRIANGLE-HEADED RIGHTWARDS ARROW
    (0xDE, Entry::single('\u{279E}')), // HEAVY TRIANGLE-HEADED RIGHTWARDS ARROW
    (0xDF, Entry::single('\u{279F}')), // DASHED TRIANGLE-HEADED RIGHTWARDS ARROW
    (0xE0, Entry::single('\u{27A0}')), // HEAVY DASHED TRIANGLE-HEADED RIGHTWARDS ARROW
    (0xE1, Entry::single('\u{27A1}')), // BLACK RIGHTWARDS ARROW
    (0xE2, Entry::single('\u{27A2}')), // THREE-D TOP-LIGHTED RIGHTWARDS ARROWHEAD
    (0xE3, Entry::single('\u{27A3}')), // THREE-D BOTTOM-LIGHTED RIGHTWARDS ARROWHEAD
    (0xE4, Entry::single('\u{27A4}')), // BLACK RIGHTWARDS ARROWHEAD
    (0xE5, Entry::single('\u{27A5}')), // HEAVY BLACK CURVED DOWNWARDS AND RIGHTWARDS ARROW
    (0xE6, Entry::single('\u{27A6}')), // HEAVY BLACK CURVED UPWARDS AND RIGHTWARDS ARROW
    (0xE7, Entry::single('\u{27A7}')), // SQUAT BLACK RIGHTWARDS ARROW
    (0xE8, Entry::single('\u{27A8}')), // HEAVY CONCAVE-POINTED BLACK RIGHTWARDS ARROW
    (0xE9, Entry::single('\u{27A9}')), // RIGHT-SHADED WHITE RIGHTWARDS ARROW
    (0xEA, Entry::single('\u{27AA}')), // LEFT-SHADED WHITE RIGHTWARDS ARROW
    (0xEB, Entry::single('\u{27AB}')), // BACK-TILTED SHADOWED WHITE RIGHTWARDS ARROW
    (0xEC, Entry::single('\u{27AC}')), // FRONT-TILTED SHADOWED WHITE RIGHTWARDS ARROW
    (0xED, Entry::single('\u{27AD}')), // HEAVY LOWER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW
    (0xEE, Entry::single('\u{27AE}')), // HEAVY UPPER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW
    (0xEF, Entry::single('\u{27AF}')), // NOTCHED LOWER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW
    (0xF1, Entry::single('\u{27B1}')), // NOTCHED UPPER RIGHT-SHADOWED WHITE RIGHTWARDS ARROW
    (0xF2, Entry::single('\u{27B2}')), // CIRCLED HEAVY WHITE RIGHTWARDS ARROW
    (0xF3, Entry::single('\u{27B3}')), // WHITE-FEATHERED RIGHTWARDS ARROW
    (0xF4, Entry::single('\u{27B4}')), // BLACK-FEATHERED SOUTH EAST ARROW
    (0xF5, Entry::single('\u{27B5}')), // BLACK-FEATHERED RIGHTWARDS ARROW
    (0xF6, Entry::single('\u{27B6}')), // BLACK-FEATHERED NORTH EAST ARROW
    (0xF7, Entry::single('\u{27B7}')), // HEAVY BLACK-FEATHERED SOUTH EAST ARROW
    (0xF8, Entry::single('\u{27B8}')), // HEAVY BLACK-FEATHERED RIGHTWARDS ARROW
    (0xF9, Entry::single('\u{27B9}')), // HEAVY BLACK-FEATHERED NORTH EAST ARROW
    (0xFA, Entry::single('\u{27BA}')), // TEARDROP-BARBED RIGHTWARDS ARROW
    (0xFB, Entry::single('\u{27BB}')), // HEAVY TEARDROP-SHANKED RIGHTWARDS ARROW
    (0xFC, Entry::single('\u{27BC}')), // WEDGE-TAILED RIGHTWARDS ARROW
    (0xFD, Entry::single('\u{27BD}')), // HEAVY WEDGE-TAILED RIGHTWARDS ARROW
    (0xFE, Entry::single('\u{27BE}')), // OPEN-OUTLINED RIGHTWARDS ARROW
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_codes() {
        for (code, entry) in DINGBATS.iter() {
            let defined = matches!(code, 0x20..=0x7E | 0x80..=0x8D | 0xA1..=0xEF | 0xF1..=0xFE);
            assert_eq!(entry.is_defined(), defined, "code {code:#04X}");
        }
    }

    #[test]
    fn all_single_and_round_trip() {
        for (code, entry) in DINGBATS.defined() {
            assert!(entry.as_char().is_some(), "code {code:#04X}");
            assert!(entry.is_round_trip(), "code {code:#04X}");
        }
    }

    #[test]
    fn samples() {
        assert_eq!(DINGBATS.lookup(0x20).as_char(), Some(' '));
        assert_eq!(DINGBATS.lookup(0x21).as_char(), Some('\u{2701}'));
        assert_eq!(DINGBATS.lookup(0x48).as_char(), Some('\u{2605}'));
        assert_eq!(DINGBATS.lookup(0x80).as_char(), Some('\u{2768}'));
        assert_eq!(DINGBATS.lookup(0xD5).as_char(), Some('\u{2192}'));
        assert_eq!(DINGBATS.lookup(0xFE).as_char(), Some('\u{27BE}'));
    }
}
