// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drawing and character editing: wrap semantics, widths, combining marks,
//! insert mode, ICH/DCH/ECH.

use pretty_assertions::assert_eq;

use super::fixtures::{assert_consistency, screen_with};
use crate::{
    ByteStream, Screen, Stream,
    mode::{DECAWM, IRM, LNM},
};

#[test]
fn test_draw_with_autowrap() {
    // DECAWM on (default).
    let mut screen = Screen::new(3, 3);
    screen.set_mode(&[LNM.code], false);
    assert!(screen.has_mode(DECAWM));

    for ch in ["a", "b", "c"] {
        screen.draw(ch);
    }

    assert_eq!(screen.display(), ["abc", "   ", "   "]);
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 3));
    assert_consistency(&screen);

    // One more character - now we got a linefeed!
    screen.draw("a");
    assert_eq!((screen.cursor().y, screen.cursor().x), (1, 1));
    assert_consistency(&screen);
}

#[test]
fn test_draw_without_autowrap() {
    let mut screen = Screen::new(3, 3);
    screen.reset_mode(&[DECAWM.code], true);

    screen.draw("abc");
    assert_eq!(screen.display(), ["abc", "   ", "   "]);
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 3));

    // No linefeed is issued on the end of the line.
    screen.draw("a");
    assert_eq!(screen.display(), ["aba", "   ", "   "]);
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 3));
    assert_consistency(&screen);
}

#[test]
fn test_draw_with_irm() {
    let mut screen = Screen::new(3, 3);
    screen.reset_mode(&[DECAWM.code], true);
    screen.draw("aba");

    // IRM on: new characters move the old ones instead of replacing them.
    screen.set_mode(&[IRM.code], false);
    screen.cursor_position(0, 0);
    screen.draw("x");
    assert_eq!(screen.display(), ["xab", "   ", "   "]);

    screen.cursor_position(0, 0);
    screen.draw("y");
    assert_eq!(screen.display(), ["yxa", "   ", "   "]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_multiple_chars() {
    let mut screen = Screen::new(10, 1);
    screen.draw("foobar");
    assert_eq!(screen.cursor().x, 6);
    assert_eq!(screen.display(), ["foobar    "]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_russian() {
    let mut screen = Screen::new(20, 1);
    let mut stream = Stream::new();
    stream.feed("Нерусский текст", &mut screen);
    assert_eq!(screen.display(), ["Нерусский текст     "]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_utf8_through_byte_stream() {
    let mut screen = Screen::new(1, 1);
    let mut stream = ByteStream::new();
    stream.feed(b"\xe2\x80\x9d", &mut screen);
    assert_eq!(screen.display(), ["”"]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_width2() {
    let mut screen = Screen::new(10, 1);
    screen.draw("コンニチハ");
    assert_eq!(screen.cursor().x, screen.columns());
    assert_eq!(screen.display(), ["コンニチハ"]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_width2_line_end() {
    // The trailing wide character does not fit in the last cell.
    let mut screen = Screen::new(10, 1);
    screen.draw(" コンニチハ");
    assert_eq!(screen.cursor().x, screen.columns());
    assert_consistency(&screen);
}

#[test]
fn test_draw_width2_stub() {
    let mut screen = Screen::new(4, 1);
    screen.draw("コx");
    let view = screen.buffer();
    assert_eq!(view.line(0).char_at(0).data.as_str(), "コ");
    assert_eq!(view.line(0).char_at(0).width, 2);
    // The stub after a wide cell holds no data.
    assert_eq!(view.line(0).char_at(1).data.as_str(), "");
    assert_eq!(view.line(0).char_at(1).width, 0);
    assert_eq!(view.line(0).char_at(2).data.as_str(), "x");
    assert_consistency(&screen);
}

#[test]
fn test_draw_width0_combining() {
    let mut screen = Screen::new(4, 2);

    // a) no previous character: the mark has nothing to attach to.
    screen.draw("\u{308}");
    assert_eq!(screen.display(), ["    ", "    "]);

    screen.draw("bad");

    // b) previous character is on the same line.
    screen.draw("\u{308}");
    assert_eq!(screen.display(), ["bad\u{308} ", "    "]);

    // c) previous character is on the previous line.
    screen.draw("!");
    screen.draw("\u{308}");
    assert_eq!(screen.display(), ["bad\u{308}!\u{308}", "    "]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_width0_irm() {
    let mut screen = Screen::new(10, 1);
    screen.set_mode(&[IRM.code], false);

    // Unprintables must not insert any blanks.
    screen.draw("\u{200b}");
    screen.draw("\u{7}");
    assert_eq!(screen.display(), [" ".repeat(10)]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_width0_decawm_off() {
    let mut screen = Screen::new(10, 1);
    screen.reset_mode(&[DECAWM.code], true);
    screen.draw(" コンニチハ");
    assert_eq!(screen.cursor().x, screen.columns());

    // The following must not advance the cursor.
    screen.draw("\u{200b}");
    screen.draw("\u{7}");
    assert_eq!(screen.cursor().x, screen.columns());
    assert_consistency(&screen);
}

#[test]
fn test_draw_width2_decawm_off_clamps_to_make_room() {
    // A pending-wrap cursor with autowrap off clamps back to
    // columns - width before the write.
    let mut screen = Screen::new(4, 1);
    screen.reset_mode(&[DECAWM.code], true);
    screen.draw("abcd");
    assert_eq!(screen.cursor().x, 4);

    screen.draw("コ");
    assert_eq!(screen.display(), ["abコ"]);
    assert_eq!(screen.cursor().x, 4);
    assert_consistency(&screen);
}

#[test]
fn test_draw_cp437() {
    let mut screen = Screen::new(5, 1);
    let mut stream = ByteStream::new();
    // Designate IBM-PC for G0 and switch to single-byte input.
    stream.feed(b"\x1b%@\x1b(U", &mut screen);
    // "alpha space plus-minus space epsilon" in cp437.
    stream.feed(b"\xe0 \xf1 \xee", &mut screen);

    assert_eq!(screen.display(), ["α ± ε"]);
    assert_consistency(&screen);
}

#[test]
fn test_draw_with_carriage_return() {
    let line = "ipcs -s | grep nobody |awk '{print$2}'|xargs -n1 i\
                pcrm sem ;ps aux|grep -P 'httpd|fcgi'|grep -v grep\
                |awk '{print$2 \u{d}}'|xargs kill -9;/etc/init.d/ht\
                tpd startssl";

    let mut screen = Screen::new(50, 3);
    let mut stream = Stream::new();
    stream.feed(line, &mut screen);

    assert_eq!(
        screen.display(),
        [
            "ipcs -s | grep nobody |awk '{print$2}'|xargs -n1 i",
            "pcrm sem ;ps aux|grep -P 'httpd|fcgi'|grep -v grep",
            "}'|xargs kill -9;/etc/init.d/httpd startssl       ",
        ]
    );
    assert_consistency(&screen);
}

#[test]
fn test_hello_world() {
    let mut screen = Screen::new(80, 24);
    let mut stream = Stream::new();
    stream.feed("Hello, world!", &mut screen);
    assert_eq!(&screen.display()[0][0..13], "Hello, world!");
    assert_eq!((screen.cursor().x, screen.cursor().y), (13, 0));
}

#[test]
fn test_autowrap_3x2() {
    let mut screen = Screen::new(3, 2);
    let mut stream = Stream::new();
    stream.feed("abcd", &mut screen);
    assert_eq!(screen.display(), ["abc", "d  "]);
    assert_eq!((screen.cursor().x, screen.cursor().y), (1, 1));
}

#[test]
fn test_insert_characters() {
    let mut screen = screen_with(3, 4, &["sam", "is ", "foo", "bar"]);

    // a) normal case.
    screen.cursor_position(1, 1);
    screen.insert_characters(2);
    assert_eq!(screen.display()[0], "  s");
    // The cursor does not move.
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 0));

    // b) count greater than what's available: the suffix empties.
    screen.cursor_position(2, 2);
    screen.insert_characters(10);
    assert_eq!(screen.display()[1], "i  ");

    // c) zero is treated as one.
    screen.cursor_position(3, 1);
    screen.insert_characters(0);
    assert_eq!(screen.display()[2], " fo");
    assert_consistency(&screen);
}

#[test]
fn test_insert_characters_on_empty_line() {
    // Inserting into an absent line moves nothing and stores nothing.
    let mut screen = Screen::new(3, 3);
    screen.insert_characters(2);
    assert!(screen.buffer.get(0).is_none());
    assert_eq!(screen.display(), ["   "; 3]);
}

#[test]
fn test_delete_characters() {
    let mut screen = screen_with(3, 3, &["sam", "is ", "foo"]);

    screen.cursor_position(1, 1);
    screen.delete_characters(2);
    assert_eq!(screen.display()[0], "m  ");
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 0));

    screen.cursor_position(2, 2);
    screen.delete_characters(10);
    assert_eq!(screen.display()[1], "i  ");

    screen.cursor_position(3, 2);
    screen.delete_characters(0);
    assert_eq!(screen.display()[2], "fo ");
    assert_consistency(&screen);
}

#[test]
fn test_delete_characters_sparse_gap() {
    // Cells jump over a gap and keep their attributes.
    let mut screen = Screen::new(10, 1);
    screen.draw("ab");
    screen.cursor_to_column(10);
    screen.draw("z");
    screen.cursor_position(1, 2);
    screen.delete_characters(3);
    assert_eq!(screen.display(), ["a     z   "]);
    assert_consistency(&screen);
}

#[test]
fn test_erase_characters() {
    let mut screen = screen_with(3, 3, &["sam", "is ", "foo"]);

    screen.cursor_position(1, 1);
    screen.erase_characters(2);
    assert_eq!(screen.display()[0], "  m");
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 0));

    screen.cursor_position(2, 3);
    screen.erase_characters(10);
    assert_eq!(screen.display()[1], "is ");

    screen.cursor_position(3, 1);
    screen.erase_characters(0);
    assert_eq!(screen.display()[2], " oo");
    assert_consistency(&screen);
}

#[test]
fn test_erase_characters_with_default_attrs_stays_sparse() {
    // Erasing with default cursor attributes removes entries instead of
    // writing explicit spaces; a fully erased line vanishes from the buffer.
    let mut screen = Screen::new(5, 1);
    screen.draw("abc");
    assert_eq!(screen.buffer.get(0).map(crate::Line::len), Some(3));

    screen.cursor_position(1, 1);
    screen.erase_characters(5);
    assert!(screen.buffer.get(0).is_none());
    assert_eq!(screen.display(), ["     "]);
}

#[test]
fn test_erase_characters_with_styled_cursor_densifies() {
    let mut screen = Screen::new(5, 1);
    screen.draw("abc");
    screen.select_graphic_rendition(&[41]); // Red background.
    screen.cursor_position(1, 1);
    screen.erase_characters(2);

    let line = screen.buffer.get(0).expect("line stays");
    assert_eq!(line.get(0).unwrap().data.as_str(), " ");
    assert_eq!(
        line.get(0).unwrap().style.bg,
        crate::Color::Named(crate::NamedColor::Red)
    );
    assert_eq!(line.get(2).unwrap().data.as_str(), "c");
    assert_consistency(&screen);
}
