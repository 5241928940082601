//! Property: the scanner terminates on arbitrary input and its token
//! stream stays well-formed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use sql_scanner::scan_text;

proptest! {
    #[test]
    fn arbitrary_input_scans_cleanly(text in "[a-zA-Z0-9_$'\"(){}\\[\\];:,.<>=+*/%|&!~#? \t\n-]{0,120}") {
        let Ok(scanned) = scan_text(&text, 1, 0) else {
            // Unbalanced extended state is the only hard failure.
            return Ok(());
        };
        let mut last_end = 0;
        for token in &scanned.tokens {
            prop_assert!(token.location.offset >= last_end, "overlap in {text:?}");
            prop_assert!(token.location.end() as usize <= text.len());
            last_end = token.location.end();
        }
        // Every name entry reads back through the dictionary.
        for (id, text_entry, _) in scanned.names.iter() {
            prop_assert!(!text_entry.is_empty() || scanned.names.location(id).is_some());
        }
    }

    #[test]
    fn sqlish_input_scans_cleanly(
        words in prop::collection::vec(
            prop_oneof![
                Just("select"), Just("from"), Just("where"), Just("x"), Just("tbl"),
                Just("'s'"), Just("1.5"), Just("$1"), Just(";"), Just("--c\n"),
                Just("/*b*/"), Just("$$q$$"), Just("\"Q\""),
            ],
            0..40,
        )
    ) {
        let text = words.join(" ");
        let scanned = scan_text(&text, 1, 0);
        prop_assert!(scanned.is_ok());
    }
}
