// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement, absolute positioning and the DECSC/DECRC save stack.
//!
//! Relative movement clamps against the scroll margins vertically and the
//! screen horizontally. Absolute positioning is 1-based on the wire; with
//! DECOM set, line numbers are relative to the top margin and the cursor is
//! confined to the scroll region.

use super::{Savepoint, Screen};
use crate::mode::{DECAWM, DECOM};

impl Screen {
    /// Move the cursor to the beginning of the current line.
    pub fn carriage_return(&mut self) {
        self.cursor.x = 0;
    }

    /// Move the cursor left one column, stopping at the left edge.
    pub fn backspace(&mut self) {
        self.cursor_back(1);
    }

    /// Move to the next tab stop right of the cursor, or to the last column
    /// when none is left.
    pub fn tab(&mut self) {
        let next = self
            .tabstops
            .range(self.cursor.x + 1..)
            .next()
            .copied();
        self.cursor.x = next.unwrap_or_else(|| self.columns.saturating_sub(1));
    }

    /// Clamp the cursor column into the screen.
    pub(crate) fn ensure_hbounds(&mut self) {
        self.cursor.x = self.cursor.x.min(self.columns.saturating_sub(1));
    }

    /// Clamp the cursor row into the screen, or into the margins when
    /// requested or when DECOM is set.
    pub(crate) fn ensure_vbounds(&mut self, use_margins: bool) {
        let (top, bottom) = if use_margins || self.mode.contains(&DECOM) {
            (self.margins.top, self.margins.bottom)
        } else {
            (0, self.lines.saturating_sub(1))
        };
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    /// CUU: move up, stopping at the top margin.
    pub fn cursor_up(&mut self, count: u16) {
        let count = usize::from(count.max(1));
        self.cursor.y = self
            .cursor
            .y
            .saturating_sub(count)
            .max(self.margins.top);
    }

    /// CPL: move up, then to column 1. Stops at the top margin.
    pub fn cursor_up1(&mut self, count: u16) {
        self.cursor_up(count);
        self.carriage_return();
    }

    /// CUD: move down, stopping at the bottom margin.
    pub fn cursor_down(&mut self, count: u16) {
        let count = usize::from(count.max(1));
        self.cursor.y = (self.cursor.y + count).min(self.margins.bottom);
    }

    /// CNL: move down, then to column 1. Stops at the bottom margin.
    pub fn cursor_down1(&mut self, count: u16) {
        self.cursor_down(count);
        self.carriage_return();
    }

    /// CUB: move left, stopping at the left edge. A pending-wrap cursor
    /// (`x == columns`) is first treated as sitting in the last column.
    pub fn cursor_back(&mut self, count: u16) {
        if self.cursor.x == self.columns {
            self.cursor.x -= 1;
        }
        self.cursor.x = self.cursor.x.saturating_sub(usize::from(count.max(1)));
        self.ensure_hbounds();
    }

    /// CUF: move right, stopping at the right edge.
    pub fn cursor_forward(&mut self, count: u16) {
        self.cursor.x += usize::from(count.max(1));
        self.ensure_hbounds();
    }

    /// CUP / HVP: move to a 1-based `line` and `column` (`0` reads as `1`).
    ///
    /// With DECOM set, `line` is relative to the top margin and a target
    /// outside the scroll region ignores the call.
    pub fn cursor_position(&mut self, line: u16, column: u16) {
        let column = usize::from(column.max(1)) - 1;
        let mut line = usize::from(line.max(1)) - 1;

        if self.mode.contains(&DECOM) {
            line += self.margins.top;

            // Cursor is not allowed to move out of the scrolling region.
            if !(self.margins.top..=self.margins.bottom).contains(&line) {
                return;
            }
        }

        self.cursor.x = column;
        self.cursor.y = line;
        self.ensure_hbounds();
        self.ensure_vbounds(false);
    }

    /// CHA / HPA: move to a 1-based column in the current line.
    pub fn cursor_to_column(&mut self, column: u16) {
        self.cursor.x = usize::from(column.max(1)) - 1;
        self.ensure_hbounds();
    }

    /// VPA: move to a 1-based line in the current column. With DECOM set the
    /// line is relative to the top margin.
    pub fn cursor_to_line(&mut self, line: u16) {
        self.cursor.y = usize::from(line.max(1)) - 1;

        if self.mode.contains(&DECOM) {
            self.cursor.y += self.margins.top;
        }

        self.ensure_vbounds(false);
    }

    /// DECSC: push cursor, charsets and the origin/autowrap modes onto the
    /// save stack.
    pub fn save_cursor(&mut self) {
        self.savepoints.push(Savepoint {
            cursor: self.cursor.clone(),
            g0_charset: self.g0_charset,
            g1_charset: self.g1_charset,
            charset: self.charset,
            origin: self.mode.contains(&DECOM),
            wrap: self.mode.contains(&DECAWM),
        });
    }

    /// DECRC: pop and apply the most recent save point. With an empty stack
    /// this resets origin mode and homes the cursor instead.
    pub fn restore_cursor(&mut self) {
        if let Some(savepoint) = self.savepoints.pop() {
            self.g0_charset = savepoint.g0_charset;
            self.g1_charset = savepoint.g1_charset;
            self.charset = savepoint.charset;

            if savepoint.origin {
                self.set_mode(&[DECOM.code], true);
            }
            if savepoint.wrap {
                self.set_mode(&[DECAWM.code], true);
            }

            self.cursor = savepoint.cursor;
            self.ensure_hbounds();
            self.ensure_vbounds(true);
        } else {
            self.reset_mode(&[DECOM.code], true);
            self.cursor_position(0, 0);
        }
    }
}
