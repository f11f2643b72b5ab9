// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index / reverse index scrolling and the DECSTBM scroll region.
//!
//! Scrolling only ever rotates the lines between `margins.top` and
//! `margins.bottom` (inclusive); lines outside the region never move. The
//! rotation is sparse: only occupied rows are relocated, the line falling
//! out of the region is dropped and the freed row simply stays absent.

use super::{Margins, Screen};
use crate::mode::LNM;

impl Screen {
    /// IND: move the cursor down one line in the same column. At the bottom
    /// margin the region scrolls up instead: the top line of the region is
    /// lost and the bottom row comes up empty.
    pub fn index(&mut self) {
        let Margins { top, bottom } = self.margins;

        if self.cursor.y == bottom {
            if self.record_scrolled {
                let line = self.clone_line(top);
                self.scrolled_off_top.push(line);
            }
            self.buffer.remove(top);
            for y in self.buffer.rows_in(top + 1..=bottom) {
                let line = self.buffer.remove(y).expect("row from snapshot");
                self.buffer.insert(y - 1, line);
            }
            self.mark_all_dirty();
        } else {
            self.cursor_down(1);
        }
    }

    /// RI: move the cursor up one line in the same column. At the top margin
    /// the region scrolls down instead: the bottom line of the region is
    /// lost and the top row comes up empty.
    pub fn reverse_index(&mut self) {
        let Margins { top, bottom } = self.margins;

        if self.cursor.y == top {
            if self.record_scrolled {
                let line = self.clone_line(bottom);
                self.scrolled_off_bottom.push(line);
            }
            self.buffer.remove(bottom);
            for y in self
                .buffer
                .rows_in(top..bottom)
                .into_iter()
                .rev()
            {
                let line = self.buffer.remove(y).expect("row from snapshot");
                self.buffer.insert(y + 1, line);
            }
            self.mark_all_dirty();
        } else {
            self.cursor_up(1);
        }
    }

    /// LF: an [`Screen::index`], plus a carriage return when LNM is set.
    pub fn linefeed(&mut self) {
        self.index();

        if self.mode.contains(&LNM) {
            self.carriage_return();
        }
    }

    /// DECSTBM: select the scroll region.
    ///
    /// Arguments are 1-based; no arguments (or `top == 0` with no bottom)
    /// reset the region to the whole screen. Regions of fewer than two lines
    /// are ignored - VT102/VT220 say to ignore them and programs like
    /// `aptitude` rely on it. A successful change homes the cursor, honoring
    /// DECOM.
    pub fn set_margins(&mut self, top: Option<u16>, bottom: Option<u16>) {
        if matches!(top, None | Some(0)) && bottom.is_none() {
            self.margins = Margins {
                top: 0,
                bottom: self.lines.saturating_sub(1),
            };
            return;
        }

        let last_line = self.lines.saturating_sub(1);
        // Arguments are 1-based while margins are 0-based, so decrement,
        // bounding both into the screen.
        let top = top.map_or(self.margins.top, |value| {
            usize::from(value).saturating_sub(1).min(last_line)
        });
        let bottom = bottom.map_or(self.margins.bottom, |value| {
            usize::from(value).saturating_sub(1).min(last_line)
        });

        if bottom > top {
            self.margins = Margins { top, bottom };
            tracing::trace!("CSI r (DECSTBM): scroll region rows {top}..={bottom}");

            // The cursor moves to the home position when the margins change.
            self.cursor_position(0, 0);
        } else {
            tracing::trace!("CSI r (DECSTBM): region of {top}..={bottom} ignored");
        }
    }
}
