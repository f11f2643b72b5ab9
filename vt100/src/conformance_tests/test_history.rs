// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scrollback history capture and pagination.

use pretty_assertions::assert_eq;

use crate::{HistoryError, HistoryScreen, Line, mode::LNM};

/// Render history queue entries the way `display` renders live rows.
fn chars(lines: &std::collections::VecDeque<Line>, columns: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            (0..columns)
                .map(|x| {
                    line.get(x)
                        .map_or_else(|| " ".to_string(), |cell| cell.data.to_string())
                })
                .collect()
        })
        .collect()
}

/// Fill the screen with `count` numbered lines, each followed by a line
/// feed, the way a program would scroll output past the screen.
fn fill_numbered(screen: &mut HistoryScreen, count: usize) {
    screen.set_mode(&[LNM.code], false);
    for idx in 0..count {
        screen.draw(&idx.to_string());
        screen.linefeed();
    }
}

#[test]
fn test_invalid_ratio_is_rejected() {
    assert_eq!(
        HistoryScreen::new(5, 5, 50, 0.0).unwrap_err(),
        HistoryError::InvalidRatio(0.0)
    );
    assert!(HistoryScreen::new(5, 5, 50, 1.5).is_err());
    assert!(HistoryScreen::new(5, 5, 50, 1.0).is_ok());
}

#[test]
fn test_index_saves_top_history() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();

    // Filling the screen with line numbers, so it's easier to track
    // history contents.
    for idx in 0..screen.lines() {
        screen.draw(&idx.to_string());
        if idx != screen.lines() - 1 {
            screen.linefeed();
        }
    }

    assert!(screen.history().top.is_empty());
    assert!(screen.history().bottom.is_empty());

    // a) first index, expecting the top history to be updated.
    screen.index();
    assert_eq!(screen.history().top.len(), 1);
    assert_eq!(chars(&screen.history().top, 5)[0], "0    ");

    // b) second index.
    screen.index();
    assert_eq!(screen.history().top.len(), 2);
    assert_eq!(chars(&screen.history().top, 5)[1], "1    ");

    // c) rotation: the queue stays bounded.
    for _ in 0..screen.history().size * 2 {
        screen.index();
    }
    assert_eq!(screen.history().top.len(), 50);
}

#[test]
fn test_reverse_index_saves_bottom_history() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    for idx in 0..screen.lines() {
        screen.draw(&idx.to_string());
        if idx != screen.lines() - 1 {
            screen.linefeed();
        }
    }
    screen.cursor_position(0, 0);

    // a) first reverse index, expecting the bottom history to be updated.
    screen.reverse_index();
    assert_eq!(screen.history().bottom.len(), 1);
    assert_eq!(chars(&screen.history().bottom, 5)[0], "4    ");

    // b) second reverse index.
    screen.reverse_index();
    assert_eq!(screen.history().bottom.len(), 2);
    assert_eq!(chars(&screen.history().bottom, 5)[1], "3    ");

    // c) rotation.
    for _ in 0..screen.history().size * 2 {
        screen.reverse_index();
    }
    assert_eq!(screen.history().bottom.len(), 50);
}

#[test]
fn test_prev_page() {
    let mut screen = HistoryScreen::new(4, 4, 40, 0.5).unwrap();
    assert_eq!(screen.history().position, 40);

    fill_numbered(&mut screen, 40);

    assert!(!screen.history().top.is_empty());
    assert!(screen.history().bottom.is_empty());
    assert_eq!(screen.history().position, 40);
    assert_eq!(screen.display(), ["37  ", "38  ", "39  ", "    "]);

    let top = chars(&screen.history().top, 4);
    assert_eq!(&top[top.len() - 4..], ["33  ", "34  ", "35  ", "36  "]);

    // a) first page up.
    screen.prev_page();
    assert_eq!(screen.history().position, 38);
    assert_eq!(screen.display(), ["35  ", "36  ", "37  ", "38  "]);

    let top = chars(&screen.history().top, 4);
    assert_eq!(&top[top.len() - 4..], ["31  ", "32  ", "33  ", "34  "]);
    assert_eq!(chars(&screen.history().bottom, 4), ["39  ", "    "]);

    // b) second page up.
    screen.prev_page();
    assert_eq!(screen.history().position, 36);
    assert_eq!(screen.display(), ["33  ", "34  ", "35  ", "36  "]);
    assert_eq!(
        chars(&screen.history().bottom, 4),
        ["37  ", "38  ", "39  ", "    "]
    );
}

#[test]
fn test_prev_page_odd_lines() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 50);

    assert_eq!(screen.history().position, 50);
    assert_eq!(
        screen.display(),
        ["46   ", "47   ", "48   ", "49   ", "     "]
    );

    screen.prev_page();
    assert_eq!(screen.history().position, 47);
    assert_eq!(
        screen.display(),
        ["43   ", "44   ", "45   ", "46   ", "47   "]
    );
    assert_eq!(
        chars(&screen.history().bottom, 5),
        ["48   ", "49   ", "     "]
    );
}

#[test]
fn test_prev_page_other_ratio() {
    let mut screen = HistoryScreen::new(4, 4, 40, 0.75).unwrap();
    fill_numbered(&mut screen, 40);

    assert_eq!(screen.display(), ["37  ", "38  ", "39  ", "    "]);

    screen.prev_page();
    assert_eq!(screen.history().position, 37);
    assert_eq!(screen.display(), ["34  ", "35  ", "36  ", "37  "]);
    assert_eq!(chars(&screen.history().bottom, 4), ["38  ", "39  ", "    "]);
}

#[test]
fn test_page_all_the_way_up_and_back() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 50);

    while screen.history().position > screen.lines() {
        screen.prev_page();
    }

    assert_eq!(screen.history().position, screen.lines());
    assert_eq!(
        screen.display(),
        ["1    ", "2    ", "3    ", "4    ", "5    "]
    );

    while screen.history().position < screen.history().size {
        screen.next_page();
    }

    assert_eq!(screen.history().position, screen.history().size);
    assert_eq!(
        screen.display(),
        ["46   ", "47   ", "48   ", "49   ", "     "]
    );
}

#[test]
fn test_next_page() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 25);

    assert_eq!(screen.history().position, 50);
    assert_eq!(
        screen.display(),
        ["21   ", "22   ", "23   ", "24   ", "     "]
    );

    // a) page up then page down is an identity.
    screen.prev_page();
    screen.next_page();
    assert!(!screen.history().top.is_empty());
    assert!(screen.history().bottom.is_empty());
    assert_eq!(screen.history().position, 50);
    assert_eq!(
        screen.display(),
        ["21   ", "22   ", "23   ", "24   ", "     "]
    );

    // b) double page up, one page down.
    screen.prev_page();
    screen.prev_page();
    screen.next_page();
    assert_eq!(screen.history().position, 47);
    assert_eq!(
        chars(&screen.history().bottom, 5),
        ["23   ", "24   ", "     "]
    );
    assert_eq!(
        screen.display(),
        ["18   ", "19   ", "20   ", "21   ", "22   "]
    );

    // c) double page up, double page down.
    screen.prev_page();
    screen.prev_page();
    screen.next_page();
    screen.next_page();
    assert_eq!(screen.history().position, 47);
    assert_eq!(
        screen.display(),
        ["18   ", "19   ", "20   ", "21   ", "22   "]
    );
}

#[test]
fn test_not_enough_lines() {
    let mut screen = HistoryScreen::new(5, 5, 6, 0.5).unwrap();
    fill_numbered(&mut screen, 5);

    assert_eq!(screen.history().top.len(), 1);
    assert!(screen.history().bottom.is_empty());
    assert_eq!(screen.history().position, 6);
    assert_eq!(
        screen.display(),
        ["1    ", "2    ", "3    ", "4    ", "     "]
    );

    screen.prev_page();
    assert!(screen.history().top.is_empty());
    assert_eq!(screen.history().bottom.len(), 1);
    assert_eq!(chars(&screen.history().bottom, 5), ["     "]);
    assert_eq!(
        screen.display(),
        ["0    ", "1    ", "2    ", "3    ", "4    "]
    );

    screen.next_page();
    assert_eq!(screen.history().top.len(), 1);
    assert!(screen.history().bottom.is_empty());
    assert_eq!(
        screen.display(),
        ["1    ", "2    ", "3    ", "4    ", "     "]
    );
}

#[test]
fn test_prev_page_noop_when_history_shorter_than_screen() {
    // position <= lines means there is nothing above to page to.
    let mut screen = HistoryScreen::new(5, 5, 4, 0.5).unwrap();
    fill_numbered(&mut screen, 10);
    let before = screen.display();

    screen.prev_page();
    assert_eq!(screen.history().position, 4);
    assert_eq!(screen.display(), before);
}

#[test]
fn test_ensure_width_after_shrink() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    screen.set_mode(&[LNM.code], false);
    for idx in 0..25 {
        screen.draw(&format!("{idx:04}"));
        screen.linefeed();
    }

    assert_eq!(
        screen.display(),
        ["0021 ", "0022 ", "0023 ", "0024 ", "     "]
    );

    // Shrinking truncates the live rows; paging truncates the restored
    // ones.
    screen.resize(5, 3);
    screen.prev_page();

    for line in &screen.history().bottom {
        assert!(line.columns_in(3..).is_empty());
    }
    assert_eq!(screen.display(), ["001", "001", "002", "002", "002"]);
}

#[test]
fn test_draw_snaps_back_to_live_view() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 25);

    // Page up twice, page down once - then draw. The write must land on
    // the live frame, not on the scrolled-back view.
    screen.prev_page();
    screen.prev_page();
    screen.next_page();
    screen.draw("x");

    assert_eq!(
        screen.display(),
        ["21   ", "22   ", "23   ", "24   ", "x    "]
    );
}

#[test]
fn test_cursor_is_hidden_while_scrolled_back() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 25);
    assert!(!screen.cursor().hidden);

    screen.prev_page();
    assert!(screen.cursor().hidden);
    screen.prev_page();
    assert!(screen.cursor().hidden);
    screen.next_page();
    assert!(screen.cursor().hidden);
    screen.next_page();
    assert!(!screen.cursor().hidden);
}

#[test]
fn test_erase_in_display_3_wipes_history() {
    let mut screen = HistoryScreen::new(5, 5, 6, 0.5).unwrap();
    fill_numbered(&mut screen, 5);
    screen.prev_page();

    screen.erase_in_display(3, false);
    assert!(screen.history().top.is_empty());
    assert!(screen.history().bottom.is_empty());
    assert_eq!(screen.history().position, screen.history().size);
}

#[test]
fn test_reset_wipes_history() {
    let mut screen = HistoryScreen::new(5, 5, 50, 0.5).unwrap();
    fill_numbered(&mut screen, 25);
    assert!(!screen.history().top.is_empty());

    screen.reset();
    assert!(screen.history().top.is_empty());
    assert!(screen.history().bottom.is_empty());
    assert_eq!(screen.history().position, 50);
}
