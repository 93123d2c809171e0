// Property-based tests using proptest
// Random rows and random key sequences, checked against the row and document invariants

use lite::buffer::Document;
use lite::config::Config;
use lite::editor::Editor;
use lite::keys::{Key, BACKSPACE, ENTER};
use lite::row::{render, Row};
use lite::syntax::{self, LANGUAGES};
use lite::types::Pos;
use proptest::prelude::*;

/// Bytes that show up in source files, with tabs weighted up.
fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => (b' '..=b'~'),
            1 => Just(b'\t'),
            1 => Just(b'"'),
        ],
        0..40,
    )
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => (b'a'..=b'z').prop_map(Key::Char),
        1 => Just(Key::Char(b'\t')),
        1 => Just(Key::Char(ENTER)),
        2 => Just(Key::Char(BACKSPACE)),
        1 => Just(Key::Delete),
        1 => Just(Key::ArrowLeft),
        1 => Just(Key::ArrowRight),
        1 => Just(Key::ArrowUp),
        1 => Just(Key::ArrowDown),
        1 => Just(Key::Home),
        1 => Just(Key::End),
    ]
}

fn document(lines: &[Vec<u8>], tab_stop: usize) -> Document {
    let mut doc = Document::new(tab_stop);
    for line in lines {
        doc.insert_row(doc.num_rows(), line);
    }
    doc.dirty = 0;
    doc
}

fn contents(doc: &Document) -> Vec<Vec<u8>> {
    doc.rows.iter().map(|r| r.chars.clone()).collect()
}

proptest! {
    #[test]
    fn prop_render_expands_tabs_to_stops(chars in line_strategy(), tab_stop in 1usize..9) {
        let out = render(&chars, tab_stop);
        prop_assert!(!out.contains(&b'\t'));
        let row = Row::new(chars.clone(), tab_stop, None);
        prop_assert_eq!(out.len(), row.cx_to_rx(chars.len(), tab_stop));
        prop_assert_eq!(row.render.len(), row.hl.len());
    }

    #[test]
    fn prop_column_mapping_round_trips(chars in line_strategy(), tab_stop in 1usize..9) {
        let row = Row::new(chars.clone(), tab_stop, None);
        let mut prev = 0;
        for cx in 0..=chars.len() {
            let rx = row.cx_to_rx(cx, tab_stop);
            prop_assert!(cx == 0 || rx > prev);
            prop_assert_eq!(row.rx_to_cx(rx, tab_stop), cx);
            prev = rx;
        }
    }

    #[test]
    fn prop_highlight_covers_every_rendered_byte(chars in line_strategy(), lang in 0usize..3) {
        let row = Row::new(chars, 8, Some(&LANGUAGES[lang]));
        prop_assert_eq!(row.hl.len(), row.render.len());
        prop_assert_eq!(syntax::highlight(&row.render, None).len(), row.render.len());
    }

    #[test]
    fn prop_insert_then_delete_restores(
        lines in prop::collection::vec(line_strategy(), 1..6),
        y in 0usize..6,
        x in 0usize..40,
        c in b' '..=b'~',
    ) {
        let mut doc = document(&lines, 8);
        let before = contents(&doc);
        let y = y % lines.len();
        let x = x.min(doc.row_len(y));
        let after = doc.insert_char(Pos { y, x }, c);
        prop_assert_eq!(after, Pos { y, x: x + 1 });
        prop_assert_eq!(doc.rows[y].chars[x], c);
        let back = doc.delete_char(after);
        prop_assert_eq!(back, Pos { y, x });
        prop_assert_eq!(contents(&doc), before);
        prop_assert!(doc.dirty > 0);
    }

    #[test]
    fn prop_split_then_join_restores(
        lines in prop::collection::vec(line_strategy(), 1..6),
        y in 0usize..6,
        x in 0usize..40,
    ) {
        let mut doc = document(&lines, 8);
        let before = contents(&doc);
        let y = y % lines.len();
        let x = x.min(doc.row_len(y));
        let split = doc.split_row(Pos { y, x });
        prop_assert_eq!(split, Pos { y: y + 1, x: 0 });
        prop_assert_eq!(doc.num_rows(), before.len() + 1);
        let joined = doc.delete_char(split);
        prop_assert_eq!(joined, Pos { y, x });
        prop_assert_eq!(contents(&doc), before);
    }

    #[test]
    fn prop_key_sequences_keep_invariants(
        lines in prop::collection::vec(line_strategy(), 0..5),
        keys in prop::collection::vec(key_strategy(), 0..60),
        tab_stop in 1usize..9,
    ) {
        let config = Config {
            tab_stop,
            ..Config::default()
        };
        let mut editor = Editor::new(config, document(&lines, tab_stop));
        editor.set_window_size(10, 20);
        for key in keys {
            prop_assert!(!editor.handle_key(key).unwrap());
            editor.scroll();

            let doc = &editor.doc;
            prop_assert!(editor.cursor.y <= doc.num_rows());
            prop_assert!(editor.cursor.x <= doc.row_len(editor.cursor.y));
            for row in &doc.rows {
                prop_assert_eq!(&row.render, &render(&row.chars, tab_stop));
                prop_assert_eq!(row.hl.len(), row.render.len());
            }
            let vp = editor.viewport;
            let (y, rx) = (editor.cursor.y, editor.rx);
            prop_assert!(y >= vp.row_offset && y < vp.row_offset + vp.rows);
            prop_assert!(rx >= vp.col_offset && rx < vp.col_offset + vp.cols);
        }
    }
}
