// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index / reverse index scrolling within margins, and DECSTBM itself.

use pretty_assertions::assert_eq;

use super::fixtures::{assert_consistency, screen_with};
use crate::{Margins, Screen, Stream, mode::LNM};

#[test]
fn test_index_moves_down_within_region() {
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);
    screen.cursor_position(1, 1);

    screen.index();
    assert_eq!((screen.cursor().y, screen.cursor().x), (1, 0));
    assert_eq!(screen.display(), ["bo", "sh", "th", "er", "oh"]);
    assert_consistency(&screen);
}

#[test]
fn test_index_scrolls_at_bottom() {
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);
    screen.cursor.y = 4;

    screen.index();
    assert_eq!(screen.cursor().y, 4);
    assert_eq!(screen.display(), ["sh", "th", "er", "oh", "  "]);
    assert_consistency(&screen);

    screen.index();
    assert_eq!(screen.display(), ["th", "er", "oh", "  ", "  "]);
    assert_consistency(&screen);
}

#[test]
fn test_index_respects_margins() {
    // Only rows 2..=4 rotate; everything outside the region stays put.
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);
    screen.set_margins(Some(2), Some(4));
    screen.cursor_position(4, 1);

    screen.index();
    screen.index();
    assert_eq!(screen.display(), ["bo", "er", "  ", "  ", "oh"]);
    assert_consistency(&screen);
}

#[test]
fn test_reverse_index_moves_up() {
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);
    screen.cursor.y = 1;

    screen.reverse_index();
    assert_eq!(screen.cursor().y, 0);
    assert_eq!(screen.display(), ["bo", "sh", "th", "er", "oh"]);
}

#[test]
fn test_reverse_index_scrolls_at_top() {
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);

    screen.reverse_index();
    assert_eq!(screen.cursor().y, 0);
    assert_eq!(screen.display(), ["  ", "bo", "sh", "th", "er"]);
    assert_consistency(&screen);

    screen.reverse_index();
    assert_eq!(screen.display(), ["  ", "  ", "bo", "sh", "th"]);
    assert_consistency(&screen);
}

#[test]
fn test_reverse_index_respects_margins() {
    let mut screen = screen_with(2, 5, &["bo", "sh", "th", "er", "oh"]);
    screen.set_margins(Some(2), Some(4));
    screen.cursor_position(2, 1);

    screen.reverse_index();
    screen.reverse_index();
    assert_eq!(screen.display(), ["bo", "  ", "  ", "sh", "oh"]);
    assert_consistency(&screen);
}

#[test]
fn test_linefeed() {
    let mut screen = screen_with(2, 2, &["bo", "sh"]);
    screen.cursor.x = 1;
    screen.cursor.y = 0;

    // Without LNM the column survives the line feed.
    screen.linefeed();
    assert_eq!((screen.cursor().y, screen.cursor().x), (1, 1));

    // With LNM a carriage return is implied.
    screen.set_mode(&[LNM.code], false);
    screen.cursor.x = 1;
    screen.cursor.y = 0;
    screen.linefeed();
    assert_eq!((screen.cursor().y, screen.cursor().x), (1, 0));
}

#[test]
fn test_linefeed_margins() {
    // The cursor above the scroll region just moves down, no scrolling.
    let mut screen = Screen::new(80, 24);
    screen.set_margins(Some(3), Some(27));
    screen.cursor_position(0, 0);
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 0));

    screen.linefeed();
    assert_eq!((screen.cursor().y, screen.cursor().x), (1, 0));
}

#[test]
fn test_set_margins() {
    let mut screen = Screen::new(10, 10);
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 9 });

    // a) ok-case.
    screen.set_margins(Some(1), Some(5));
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 4 });

    // b) out-of-bounds margins collapse and are ignored.
    screen.set_margins(Some(100), Some(10));
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 4 });

    // c) no margins at all reset to the full screen.
    screen.set_margins(None, None);
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 9 });
}

#[test]
fn test_set_margins_zero() {
    let mut screen = Screen::new(80, 24);
    screen.set_margins(Some(1), Some(5));
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 4 });

    // CSI 0 r means "reset", like CSI r.
    screen.set_margins(Some(0), None);
    assert_eq!(screen.margins(), Margins { top: 0, bottom: 23 });
}

#[test]
fn test_set_margins_homes_cursor() {
    let mut screen = Screen::new(10, 10);
    screen.cursor_position(6, 6);
    screen.set_margins(Some(2), Some(8));
    assert_eq!((screen.cursor().y, screen.cursor().x), (0, 0));
}

#[test]
fn test_scrolling_through_stream() {
    let mut screen = Screen::new(2, 4);
    let mut stream = Stream::new();
    stream.feed("ab\r\ncd\r\nef\r\ngh\r\nij\r\nkl", &mut screen);
    assert_eq!(screen.display(), ["ef", "gh", "ij", "kl"]);
    assert_consistency(&screen);
}
