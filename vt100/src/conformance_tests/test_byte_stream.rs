// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte decoding: incremental UTF-8, replacement, and the `ESC % @`
//! single-byte mode.

use pretty_assertions::assert_eq;

use super::fixtures::assert_consistency;
use crate::{ByteStream, CharsetTable, Screen};

#[test]
fn test_utf8_input() {
    let mut screen = Screen::new(4, 2);
    let mut stream = ByteStream::new();
    stream.feed("тест".as_bytes(), &mut screen);
    assert_eq!(screen.display(), ["тест", "    "]);
    assert_consistency(&screen);
}

#[test]
fn test_multibyte_sequence_split_across_feeds() {
    let mut screen = Screen::new(4, 1);
    let mut stream = ByteStream::new();

    let bytes = "中".as_bytes();
    stream.feed(&bytes[..1], &mut screen);
    assert_eq!(screen.display(), ["    "]); // Nothing decoded yet.

    stream.feed(&bytes[1..], &mut screen);
    assert_eq!(screen.display(), ["中  "]);
    assert_consistency(&screen);
}

#[test]
fn test_escape_sequence_split_across_feeds() {
    let mut screen = Screen::new(10, 10);
    let mut stream = ByteStream::new();

    stream.feed(b"\x1b[5", &mut screen);
    assert_eq!(screen.cursor().y, 0);

    stream.feed(b"B", &mut screen);
    assert_eq!(screen.cursor().y, 5);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut screen = Screen::new(4, 1);
    let mut stream = ByteStream::new();
    stream.feed(b"a\x80b", &mut screen);
    assert_eq!(screen.display(), ["a\u{fffd}b "]);
    assert_consistency(&screen);
}

#[test]
fn test_byte_level_chunking_is_invariant() {
    // Splitting the same byte sequence at any boundary yields the same
    // final screen as a single feed.
    let input = "пре\u{1b}[1;31mти\u{1b}[2Jпочё中".as_bytes();

    let mut reference = Screen::new(10, 3);
    ByteStream::new().feed(input, &mut reference);

    for split in 0..=input.len() {
        let mut screen = Screen::new(10, 3);
        let mut stream = ByteStream::new();
        stream.feed(&input[..split], &mut screen);
        stream.feed(&input[split..], &mut screen);
        assert_eq!(screen, reference, "diverged when split at byte {split}");
    }
}

#[test]
fn test_select_other_charset() {
    let mut screen = Screen::new(3, 3);
    let mut stream = ByteStream::new();
    assert!(stream.is_utf8()); // On by default.

    // a) disable UTF-8.
    stream.feed(b"\x1b%@", &mut screen);
    assert!(!stream.is_utf8());

    // b) unknown code: noop.
    stream.feed(b"\x1b%X", &mut screen);
    assert!(!stream.is_utf8());

    // c) enable UTF-8 again.
    stream.feed(b"\x1b%G", &mut screen);
    assert!(stream.is_utf8());
}

#[test]
fn test_single_byte_mode_passes_high_bytes_through() {
    let mut screen = Screen::new(4, 1);
    let mut stream = ByteStream::new();
    stream.feed(b"\x1b%@", &mut screen);

    // 0xE9 is "é" in Latin-1; in UTF-8 it would be a malformed lead byte.
    stream.feed(b"\xe9t\xe9", &mut screen);
    assert_eq!(screen.display(), ["été "]);
    assert_consistency(&screen);
}

#[test]
fn test_define_charset_works_in_single_byte_mode() {
    let mut screen = Screen::new(3, 3);
    let mut stream = ByteStream::new();
    stream.feed(b"\x1b%@", &mut screen);

    stream.feed(b"\x1b(0", &mut screen);
    assert_eq!(screen.g0_charset, CharsetTable::Vt100Graphics);
    stream.feed(b"q", &mut screen);
    assert_eq!(screen.display()[0], "\u{2500}  ");

    // Unknown designation codes leave the charset alone.
    stream.feed(b"\x1b(Z", &mut screen);
    assert_eq!(screen.g0_charset, CharsetTable::Vt100Graphics);
}

#[test]
fn test_shifts_work_in_single_byte_mode() {
    let mut screen = Screen::new(4, 1);
    let mut stream = ByteStream::new();
    stream.feed(b"\x1b%@", &mut screen);

    // G1 holds the graphics set by default; SO selects it, SI goes back.
    stream.feed(b"q\x0eq\x0fq", &mut screen);
    assert_eq!(screen.display(), ["q\u{2500}q "]);
    assert_consistency(&screen);
}

#[test]
fn test_switch_back_to_utf8_resets_decoder() {
    let mut screen = Screen::new(6, 1);
    let mut stream = ByteStream::new();

    // The dangling lead byte turns into a replacement character once the
    // switch arrives behind it; the switch itself resets the decoder, so
    // later UTF-8 input starts from a clean state.
    stream.feed(b"\xe4", &mut screen);
    stream.feed(b"\x1b%@", &mut screen);
    stream.feed(b"ab", &mut screen);
    stream.feed(b"\x1b%G", &mut screen);
    stream.feed("中".as_bytes(), &mut screen);
    assert_eq!(screen.display(), ["\u{fffd}ab中 "]);
}
