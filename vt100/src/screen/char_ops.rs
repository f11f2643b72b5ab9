// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drawing text and the character-editing sequences (ICH, DCH, ECH).
//!
//! The interesting part is `draw`: character set translation, display-width
//! handling (wide cells get a zero-width stub, combining marks accrete onto
//! the previous cell), the pending-wrap state at the right edge, and insert
//! mode. The editing operations are sparse shifts: only occupied columns are
//! touched, absent columns stay absent.

use unicode_normalization::{UnicodeNormalization, char::canonical_combining_class};

use super::Screen;
use crate::{
    mode::{DECAWM, IRM},
    wcwidth::wcwidth,
};

impl Screen {
    /// Display decoded characters at the cursor position, advancing the
    /// cursor.
    ///
    /// Character width is taken into account: zero-width combining marks
    /// attach to the previously drawn cell, full-width characters occupy two
    /// consecutive cells (the second holds a zero-width stub), and
    /// unprintable characters stop the run. When the cursor is in the
    /// pending-wrap state (`x == columns`), DECAWM decides between wrapping
    /// to the next line and overwriting the last column.
    pub fn draw(&mut self, data: &str) {
        let table = if self.charset == 1 {
            self.g1_charset
        } else {
            self.g0_charset
        };

        // Constant for the duration of the call.
        let columns = self.columns;
        let is_irm_set = self.mode.contains(&IRM);
        let is_autowrap_set = self.mode.contains(&DECAWM);
        let style = self.cursor.attrs.style;
        let default = self.default_char();

        let mut cursor_x = self.cursor.x;
        let mut cursor_y = self.cursor.y;
        let mut utf8_buf = [0u8; 4];

        for ch in data.chars() {
            let ch = table.translate(ch);
            let char_width = wcwidth(ch);

            // If this was the last column in a line and auto wrap mode is
            // enabled, move the cursor to the beginning of the next line,
            // otherwise replace characters already displayed with newly
            // entered.
            if cursor_x >= columns {
                if is_autowrap_set {
                    self.dirty.add(cursor_y);
                    self.cursor.x = cursor_x;
                    self.cursor.y = cursor_y;
                    self.carriage_return();
                    self.linefeed();
                    cursor_x = 0;
                    cursor_y = self.cursor.y;
                } else if char_width > 0 {
                    // Move back enough to make room for the new char. This
                    // also brings a cursor_x > columns back onto the screen.
                    cursor_x = columns.saturating_sub(char_width as usize);
                } else {
                    cursor_x = columns;
                }
            }

            // In insert mode new characters shift old characters to the
            // right; in replace mode they overwrite.
            if is_irm_set && char_width > 0 {
                self.cursor.x = cursor_x;
                self.cursor.y = cursor_y;
                self.insert_characters(char_width as u16);
            }

            if char_width == 1 {
                let line = self.buffer.line_at(cursor_y, default.clone());
                line.write(cursor_x, ch.encode_utf8(&mut utf8_buf), 1, style);
            } else if char_width == 2 {
                // A two-cell character has a stub slot after it.
                let line = self.buffer.line_at(cursor_y, default.clone());
                line.write(cursor_x, ch.encode_utf8(&mut utf8_buf), 2, style);
                if cursor_x + 1 < columns {
                    line.write(cursor_x + 1, "", 0, style);
                }
            } else if char_width == 0 && canonical_combining_class(ch) != 0 {
                // A zero-cell combining mark attaches to the previous
                // character, either on this line or at the end of the
                // preceding one. Width stays unchanged.
                let target = if cursor_x > 0 {
                    Some((cursor_y, cursor_x - 1))
                } else if cursor_y > 0 {
                    Some((cursor_y - 1, columns - 1))
                } else {
                    None
                };
                if let Some((y, x)) = target {
                    let last = self.buffer.line_at(y, default.clone()).char_at(x);
                    let normalized: String =
                        last.data.chars().chain([ch]).nfc().collect();
                    last.data.clear();
                    last.data.push_str(&normalized);
                }
            } else {
                // Unprintable character or doesn't advance the cursor.
                break;
            }

            // cursor_x may transiently overshoot `columns`; the next
            // iteration or the clamp below brings it back.
            cursor_x += char_width.max(0) as usize;
        }

        self.dirty.add(cursor_y);
        self.cursor.x = cursor_x.min(columns);
        self.cursor.y = cursor_y;
    }

    /// ICH: insert blank characters at the cursor. The cursor does not move;
    /// cells from the cursor on shift right, cells pushed past the right
    /// edge are lost.
    pub fn insert_characters(&mut self, count: u16) {
        self.dirty.add(self.cursor.y);
        let count = usize::from(count.max(1));

        // An absent or empty line only moves emptiness around.
        let cursor_x = self.cursor.x;
        let columns = self.columns;
        let Some(line) = self.buffer.get_mut(self.cursor.y) else {
            return;
        };
        if line.is_empty() {
            return;
        }

        let keep_below = columns.saturating_sub(count);
        let mut moved = Vec::new();
        for x in line.columns_in(cursor_x..) {
            let cell = line.remove(x).expect("column from snapshot");
            if x < keep_below {
                moved.push((x + count, cell));
            }
        }
        for (x, cell) in moved {
            line.insert(x, cell);
        }
    }

    /// DCH: delete characters starting at the cursor; the remainder of the
    /// line shifts left, attributes travel with their cells.
    pub fn delete_characters(&mut self, count: u16) {
        self.dirty.add(self.cursor.y);
        let count = usize::from(count.max(1));

        let cursor_x = self.cursor.x;
        let Some(line) = self.buffer.get_mut(self.cursor.y) else {
            return;
        };
        if line.is_empty() {
            return;
        }

        let mut moved = Vec::new();
        for x in line.columns_in(cursor_x..) {
            let cell = line.remove(x).expect("column from snapshot");
            if x >= cursor_x + count {
                moved.push((x - count, cell));
            }
        }
        for (x, cell) in moved {
            line.insert(x, cell);
        }
    }

    /// ECH: overwrite characters from the cursor on with the cursor
    /// attributes. The cursor does not move.
    ///
    /// When the cursor attributes equal the line default this degenerates to
    /// removing sparse entries (and the line itself, once empty) instead of
    /// densifying the row with explicit spaces.
    pub fn erase_characters(&mut self, count: u16) {
        self.dirty.add(self.cursor.y);
        let count = usize::from(count.max(1));

        let cursor_x = self.cursor.x;
        let columns = self.columns;
        let cursor_attrs = self.cursor.attrs.clone();
        let default = self.default_char();

        let line = self.buffer.line_at(self.cursor.y, default);
        if line.default == cursor_attrs {
            for x in line.columns_in(cursor_x..cursor_x + count) {
                line.remove(x);
            }
            if line.is_empty() {
                self.buffer.remove(self.cursor.y);
            }
        } else {
            // A full range scan is required, not a sparse one: we were asked
            // to write on the whole range.
            for x in cursor_x..(cursor_x + count).min(columns) {
                line.write(x, &cursor_attrs.data, cursor_attrs.width, cursor_attrs.style);
            }
        }
    }
}
