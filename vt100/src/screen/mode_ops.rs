// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mode setting and resetting (SM / RM).
//!
//! Most modes are pure set membership; four private modes have immediate
//! side effects:
//!
//! - **DECCOLM**: switch to 132 columns (saving the old width), clear the
//!   screen, home the cursor. Resetting restores the saved width.
//! - **DECOM**: home the cursor (VT520 behavior).
//! - **DECSCNM**: flip `reverse` on every stored cell *and* every line
//!   default, and fold reverse into the cursor attributes, so the whole
//!   frame inverts and un-inverts losslessly per cell.
//! - **DECTCEM**: cursor visibility.
//!
//! Unknown codes are stored verbatim: they only have membership semantics.

use super::Screen;
use crate::mode::{DECCOLM, DECOM, DECSCNM, DECTCEM, Mode};

impl Screen {
    /// SM: set (enable) the given mode codes. `private` marks the DEC `?`
    /// namespace.
    pub fn set_mode(&mut self, modes: &[u16], private: bool) {
        let scnm_toggled =
            private && modes.contains(&DECSCNM.code) && !self.mode.contains(&DECSCNM);
        if private && modes.contains(&DECSCNM.code) {
            self.mark_all_dirty();
        }

        for &code in modes {
            self.mode.insert(Mode { code, private });
        }

        if !private {
            return;
        }

        // When DECCOLM mode is set, the screen is erased and the cursor
        // moves to the home position.
        if modes.contains(&DECCOLM.code) {
            self.saved_columns = Some(self.columns);
            self.resize(self.lines, 132);
            self.erase_in_display(2, false);
            self.cursor_position(0, 0);
        }

        // According to the VT520 manual, DECOM should also home the cursor.
        if modes.contains(&DECOM.code) {
            self.cursor_position(0, 0);
        }

        // Invert the whole frame. Flipping (rather than overwriting) keeps
        // each cell's own reverse bit recoverable when the mode is reset.
        if modes.contains(&DECSCNM.code) {
            if scnm_toggled {
                for (_, line) in self.buffer.iter_mut() {
                    line.default.style.reverse = !line.default.style.reverse;
                    for cell in line.cells_mut() {
                        cell.style.reverse = !cell.style.reverse;
                    }
                }
            }
            self.select_graphic_rendition(&[7]);
        }

        if modes.contains(&DECTCEM.code) {
            self.cursor.hidden = false;
        }
    }

    /// RM: reset (disable) the given mode codes. Mirrors
    /// [`Screen::set_mode`].
    pub fn reset_mode(&mut self, modes: &[u16], private: bool) {
        let scnm_toggled =
            private && modes.contains(&DECSCNM.code) && self.mode.contains(&DECSCNM);
        if private && modes.contains(&DECSCNM.code) {
            self.mark_all_dirty();
        }

        for &code in modes {
            self.mode.remove(&Mode { code, private });
        }

        if !private {
            return;
        }

        if modes.contains(&DECCOLM.code) {
            if self.columns == 132 {
                if let Some(saved_columns) = self.saved_columns.take() {
                    self.resize(self.lines, saved_columns);
                }
            }
            self.erase_in_display(2, false);
            self.cursor_position(0, 0);
        }

        if modes.contains(&DECOM.code) {
            self.cursor_position(0, 0);
        }

        if modes.contains(&DECSCNM.code) {
            if scnm_toggled {
                for (_, line) in self.buffer.iter_mut() {
                    line.default.style.reverse = !line.default.style.reverse;
                    for cell in line.cells_mut() {
                        cell.style.reverse = !cell.style.reverse;
                    }
                }
            }
            self.select_graphic_rendition(&[27]);
        }

        if modes.contains(&DECTCEM.code) {
            self.cursor.hidden = true;
        }
    }
}
