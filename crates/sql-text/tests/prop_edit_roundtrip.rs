//! Property: reading the whole buffer equals replaying the edit sequence
//! against a plain String.

use proptest::prelude::*;
use sql_text::TextBuffer;

#[derive(Debug, Clone)]
enum Edit {
    Insert(usize, String),
    Erase(usize, usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..64, "[a-zö€ ]{0,8}").prop_map(|(at, text)| Edit::Insert(at, text)),
        (0usize..64, 0usize..16).prop_map(|(at, len)| Edit::Erase(at, len)),
    ]
}

/// Replay an edit against a String with the same snapping rules.
fn apply_model(model: &mut String, edit: &Edit) {
    let snap = |s: &String, mut pos: usize| {
        pos = pos.min(s.len());
        while pos > 0 && !s.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    };
    match edit {
        Edit::Insert(at, text) => {
            let at = snap(model, *at);
            model.insert_str(at, text);
        }
        Edit::Erase(at, len) => {
            let begin = snap(model, *at);
            let end = snap(model, at.saturating_add(*len));
            if begin < end {
                model.replace_range(begin..end, "");
            }
        }
    }
}

proptest! {
    #[test]
    fn buffer_matches_model(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut buffer = TextBuffer::new();
        let mut model = String::new();
        for edit in &edits {
            match edit {
                Edit::Insert(at, text) => {
                    buffer.insert_text_at(*at, text);
                }
                Edit::Erase(at, len) => {
                    buffer.erase_text_at(*at, *len);
                }
            }
            apply_model(&mut model, edit);
            prop_assert_eq!(buffer.to_text(), model.clone());
        }
        let mut scratch = String::new();
        prop_assert_eq!(buffer.read(0, buffer.len_bytes(), &mut scratch), model.as_str());
    }
}
