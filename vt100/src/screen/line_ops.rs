// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line insertion/deletion (IL, DL) and the erase family (EL, ED, DECALN).
//!
//! Erasure writes the *cursor's* attributes, not the default - a terminal
//! erases a cell the way a typewriter would, by typing over it. When the
//! cursor attributes happen to equal the line default, erasing degenerates
//! to dropping sparse entries.

use super::Screen;
use crate::grid::Style;

impl Screen {
    /// IL: insert blank lines at the cursor row; lines at and below it move
    /// down, lines pushed past the bottom margin are lost. Ignored when the
    /// cursor is outside the scroll region. Ends with a carriage return.
    pub fn insert_lines(&mut self, count: u16) {
        let count = usize::from(count.max(1));
        let (top, bottom) = (self.margins.top, self.margins.bottom);

        if (top..=bottom).contains(&self.cursor.y) {
            self.dirty.extend(self.cursor.y..self.lines);

            let cursor_y = self.cursor.y;
            let mut moved = Vec::new();
            for y in self.buffer.rows_in(cursor_y..=bottom) {
                let line = self.buffer.remove(y).expect("row from snapshot");
                if y + count <= bottom {
                    moved.push((y + count, line));
                }
            }
            for (y, line) in moved {
                self.buffer.insert(y, line);
            }

            self.carriage_return();
        }
    }

    /// DL: delete lines starting at the cursor row; lines below move up and
    /// empty rows enter from the bottom margin. Ignored when the cursor is
    /// outside the scroll region. Ends with a carriage return.
    pub fn delete_lines(&mut self, count: u16) {
        let count = usize::from(count.max(1));
        let (top, bottom) = (self.margins.top, self.margins.bottom);

        if (top..=bottom).contains(&self.cursor.y) {
            self.dirty.extend(self.cursor.y..self.lines);

            let cursor_y = self.cursor.y;
            let mut moved = Vec::new();
            for y in self.buffer.rows_in(cursor_y..=bottom) {
                let line = self.buffer.remove(y).expect("row from snapshot");
                if y >= cursor_y + count {
                    moved.push((y - count, line));
                }
            }
            for (y, line) in moved {
                self.buffer.insert(y, line);
            }

            self.carriage_return();
        }
    }

    /// EL: erase part of the cursor row with the cursor attributes.
    /// `how` 0 erases `[x, columns)`, 1 erases `[0, x]`, 2 the whole row.
    ///
    /// The `private` ("erasable only", DECSEL) flavor is accepted and
    /// ignored.
    pub fn erase_in_line(&mut self, how: u16, _private: bool) {
        let (low, high) = match how {
            0 => (self.cursor.x, self.columns),
            1 => (0, self.cursor.x + 1),
            2 => (0, self.columns),
            _ => return,
        };
        self.dirty.add(self.cursor.y);

        let cursor_attrs = self.cursor.attrs.clone();
        let cursor_y = self.cursor.y;
        let default = self.default_char();
        let line = self.buffer.line_at(cursor_y, default);

        if line.default == cursor_attrs {
            // Erasing with default attributes just removes sparse entries.
            for x in line.columns_in(low..high) {
                line.remove(x);
            }
            if line.is_empty() {
                self.buffer.remove(cursor_y);
            }
        } else {
            // A full range scan is required, not a sparse one: we were asked
            // to write on the whole range.
            for x in low..high.min(self.columns) {
                line.write(x, &cursor_attrs.data, cursor_attrs.width, cursor_attrs.style);
            }
        }
    }

    /// ED: erase part of the display with the cursor attributes.
    /// `how` 0 erases from the cursor to the end of the screen, 1 from the
    /// start of the screen through the cursor, 2 and 3 the whole display.
    ///
    /// Extra parameters are tolerated - some `clear` implementations send
    /// `CSI 2;J`. On a [`crate::HistoryScreen`], `how == 3` also wipes the
    /// scrollback.
    pub fn erase_in_display(&mut self, how: u16, private: bool) {
        let (top, bottom) = match how {
            0 => (self.cursor.y + 1, self.lines),
            1 => (0, self.cursor.y),
            2 | 3 => (0, self.lines),
            _ => return,
        };

        self.dirty.extend(top..bottom);

        let default = self.default_char();
        if default == self.cursor.attrs {
            if how == 2 || how == 3 {
                // Clearing everything with default attributes is dropping
                // the whole sparse buffer.
                self.buffer.clear();
                return;
            }
            for y in self.buffer.rows_in(top..bottom) {
                self.buffer.remove(y);
            }
        } else {
            let cursor_attrs = self.cursor.attrs.clone();
            for y in top..bottom {
                let line = self.buffer.line_at(y, default.clone());
                for x in 0..self.columns {
                    line.write(x, &cursor_attrs.data, cursor_attrs.width, cursor_attrs.style);
                }
            }
        }

        if how == 0 || how == 1 {
            self.erase_in_line(how, private);
        }
    }

    /// DECALN: fill the screen with uppercase `E`s, for screen focus and
    /// alignment.
    pub fn alignment_display(&mut self) {
        self.mark_all_dirty();
        let style = Style::default();
        for y in 0..self.lines {
            let default = self.default_char();
            let line = self.buffer.line_at(y, default);
            for x in 0..self.columns {
                line.write(x, "E", 1, style);
            }
        }
    }
}
