//! Property: the node-layout invariants hold for arbitrary input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use sql_ast::NO_PARENT;
use sql_scanner::scan_text;

fn sql_soup() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("select".to_owned()),
        Just("from".to_owned()),
        Just("where".to_owned()),
        Just("create".to_owned()),
        Just("table".to_owned()),
        Just("join".to_owned()),
        Just("on".to_owned()),
        Just("and".to_owned()),
        Just("int".to_owned()),
        Just("t".to_owned()),
        Just("a".to_owned()),
        Just("x".to_owned()),
        Just("*".to_owned()),
        Just("(".to_owned()),
        Just(")".to_owned()),
        Just(",".to_owned()),
        Just(";".to_owned()),
        Just(".".to_owned()),
        Just("=".to_owned()),
        Just("1".to_owned()),
        Just("'s'".to_owned()),
    ];
    prop::collection::vec(word, 0..40).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn layout_invariants_hold(text in sql_soup()) {
        let Ok(scanned) = scan_text(&text, 1, 0) else {
            // Unbalanced extended state fails the stage, nothing to parse.
            return Ok(());
        };
        // Token locations are non-overlapping and sorted.
        let mut last_end = 0;
        for token in &scanned.tokens {
            prop_assert!(token.location.offset >= last_end);
            last_end = token.location.end();
        }

        let parsed = sql_parser::parse(&scanned);
        for (index, node) in parsed.nodes.iter().enumerate() {
            if node.parent != NO_PARENT {
                prop_assert!((node.parent as usize) > index);
            }
            let range = node.children_range();
            if !range.is_empty() {
                prop_assert!(range.end <= index);
                for child in range {
                    prop_assert_eq!(parsed.nodes[child].parent as usize, index);
                }
            }
        }
        // Statement roots are in source order.
        for pair in parsed.statements.windows(2) {
            prop_assert!(pair[0].root_node < pair[1].root_node);
        }
    }
}
