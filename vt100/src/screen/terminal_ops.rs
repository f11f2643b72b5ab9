// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole-terminal operations: reset (RIS), resize, the OSC title/icon
//! strings, and the bell/debug sinks.

use super::{Cursor, Margins, Screen};
use crate::{
    charsets::CharsetTable,
    event::Unhandled,
    mode::{DECAWM, DECTCEM},
};

impl Screen {
    /// RIS: reset the terminal to its initial state.
    ///
    /// Margins back to screen boundaries, modes to `{DECAWM, DECTCEM}`,
    /// charsets to G0=Latin-1 / G1=graphics with G0 active, tab stops every
    /// eight columns, buffer cleared, save stack emptied, cursor homed with
    /// default attributes, every row marked dirty.
    ///
    /// Neither the VT220 nor the VT102 manual mentions that modes and
    /// tabstops should be reset as well, thanks to `xterm` we now know that.
    pub fn reset(&mut self) {
        self.mark_all_dirty();
        self.buffer.clear();
        self.margins = Margins {
            top: 0,
            bottom: self.lines.saturating_sub(1),
        };

        self.mode.clear();
        self.mode.insert(DECAWM);
        self.mode.insert(DECTCEM);

        self.title.clear();
        self.icon_name.clear();

        self.charset = 0;
        self.g0_charset = CharsetTable::Latin1;
        self.g1_charset = CharsetTable::Vt100Graphics;

        // From `man terminfo` -- "... hardware tabs are initially set every
        // `n` spaces when the terminal is powered up". We aim for VT102 /
        // VT220 / linux, so n = 8.
        self.tabstops = (8..self.columns).step_by(8).collect();

        self.savepoints.clear();
        self.saved_columns = None;

        self.cursor = Cursor {
            x: 0,
            y: 0,
            hidden: false,
            attrs: self.default_char(),
        };
        self.cursor_position(0, 0);

        self.reply_buf.clear();
        self.scrolled_off_top.clear();
        self.scrolled_off_bottom.clear();
    }

    /// Resize the screen.
    ///
    /// Shrinking vertically clips rows at the top (the cursor is parked at
    /// home around a `delete_lines` of the difference and then restored);
    /// shrinking horizontally clips cells at the right. Growth just extends
    /// the logical bounds - the buffer is sparse. The margins reset to the
    /// full screen. Passing the current size is a complete noop.
    pub fn resize(&mut self, lines: usize, columns: usize) {
        let lines = if lines == 0 { self.lines } else { lines };
        let columns = if columns == 0 { self.columns } else { columns };

        if lines == self.lines && columns == self.columns {
            return; // No changes.
        }

        self.dirty.extend(0..lines);

        if lines < self.lines {
            self.save_cursor();
            self.cursor_position(0, 0);
            let dropped = u16::try_from(self.lines - lines).unwrap_or(u16::MAX);
            self.delete_lines(dropped); // Drop from the top.
            self.restore_cursor();
        }

        if columns < self.columns {
            for (_, line) in self.buffer.iter_mut() {
                line.truncate_columns(columns);
            }
        }

        self.lines = lines;
        self.columns = columns;
        self.set_margins(None, None);
    }

    /// OSC 0/2: set the terminal title.
    pub fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
    }

    /// OSC 0/1: set the icon name.
    pub fn set_icon_name(&mut self, icon_name: &str) {
        self.icon_name.clear();
        self.icon_name.push_str(icon_name);
    }

    /// BEL. A stub - ringing is the consumer's business.
    pub fn bell(&mut self) {}

    /// Endpoint for unrecognized escape sequences. Traces and moves on; an
    /// unknown sequence is never an error.
    pub fn debug(&mut self, unhandled: Unhandled<'_>) {
        tracing::debug!(?unhandled, "unhandled escape sequence");
    }
}
