//! Checks that the round-trip entries of every table can be reversed, and
//! that one-way entries cannot.

use mac_encodings::{CodeTable, Encoding, Entry, KEYBOARD};
use rustc_hash::FxHashMap;

/// Build the Unicode-to-legacy table from the round-trip entries, checking
/// that no two of them share the same text.
fn inverse(table: &CodeTable) -> FxHashMap<Vec<char>, u8> {
    let mut map = FxHashMap::default();

    for (code, entry) in table.defined() {
        if let Entry::RoundTrip(mapping) = entry {
            let previous = map.insert(mapping.as_chars().to_vec(), code);
            assert_eq!(previous, None, "{:?} is mapped twice", mapping);
        }
    }

    map
}

#[test]
fn round_trip_entries_reverse_to_their_code() {
    for encoding in Encoding::ALL {
        let table = encoding.table();
        let inverse = inverse(table);

        for (code, entry) in table.defined().filter(|(_, e)| e.is_round_trip()) {
            assert_eq!(
                inverse.get(entry.as_chars()),
                Some(&code),
                "{} code {code:#04X}",
                encoding.name()
            );
        }
    }
}

#[test]
fn one_way_entries_do_not_reverse() {
    for encoding in Encoding::ALL {
        let table = encoding.table();
        let inverse = inverse(table);

        for (code, entry) in table.defined().filter(|(_, e)| !e.is_round_trip()) {
            assert_ne!(
                inverse.get(entry.as_chars()),
                Some(&code),
                "{} code {code:#04X}",
                encoding.name()
            );
        }
    }
}

#[test]
fn keyboard_one_way_targets() {
    let inverse = inverse(&KEYBOARD);

    // The space key shares its text with the blank key.
    assert_eq!(inverse.get(&['\u{2423}'][..]), Some(&0x61));
    // Mac OS X-only additions have no way back at all.
    for code in 0x8D..=0x8F {
        assert_eq!(inverse.get(KEYBOARD.lookup(code).as_chars()), None);
    }
}

#[test]
fn round_trip_counts() {
    let count = |table: &CodeTable| table.defined().filter(|(_, e)| e.is_round_trip()).count();

    assert_eq!(count(Encoding::Keyboard.table()), 68);
    assert_eq!(count(Encoding::Dingbats.table()), 202);
    assert_eq!(count(Encoding::Thai.table()), 217);
}

#[test]
fn hints_are_well_formed() {
    use mac_encodings::Mapping;
    use mac_encodings::hint::{HintKind, TranscodingHint};

    for encoding in Encoding::ALL {
        for (code, entry) in encoding.table().defined() {
            let Some(Mapping::Sequence(seq)) = entry.mapping() else {
                continue;
            };
            let chars = seq.as_chars();

            for (i, c) in chars.iter().enumerate() {
                let Some(hint) = TranscodingHint::classify(*c) else {
                    continue;
                };

                match hint.kind() {
                    HintKind::Grouping => {
                        assert_eq!(i, 0, "code {code:#04X}");
                        assert_eq!(hint.group_len(), Some(chars.len() - 1));
                    }
                    HintKind::VariantTag => {
                        assert_eq!(i, chars.len() - 1, "code {code:#04X}");
                    }
                }
            }
        }
    }
}
