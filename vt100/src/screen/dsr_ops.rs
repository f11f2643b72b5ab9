// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Device reports (DA, DSR) and the pending reply queue.
//!
//! Reports do not change the screen; they produce text the emulated process
//! expects to read back on its stdin. The screen queues that text and the
//! consumer drains it with [`Screen::take_process_input`] and forwards it to
//! the process, closing the loop.

use super::Screen;
use crate::{codes::c0, mode::DECOM};

impl Screen {
    /// DA: report terminal identity.
    ///
    /// Only primary DA (`mode == 0`, non-private) is answered - with
    /// `CSI ?6c`, "I am a VT102", the id the Linux console reports.
    /// Secondary DA (`>` prefixed) is not supported.
    pub fn report_device_attributes(&mut self, mode: u16, private: bool) {
        if mode == 0 && !private {
            let reply = format!("{}?6c", c0::CSI);
            self.write_process_input(&reply);
        }
    }

    /// DSR: report terminal status (`mode == 5`, always "OK") or the cursor
    /// position (`mode == 6`, 1-based, DECOM-relative when origin mode is
    /// set). Anything else is a noop.
    pub fn report_device_status(&mut self, mode: u16) {
        match mode {
            5 => {
                let reply = format!("{}0n", c0::CSI);
                self.write_process_input(&reply);
            }
            6 => {
                let x = self.cursor.x + 1;
                let mut y = self.cursor.y + 1;

                // "Origin mode (DECOM) selects line numbering."
                if self.mode.contains(&DECOM) {
                    y -= self.margins.top;
                }
                let reply = format!("{}{y};{x}R", c0::CSI);
                self.write_process_input(&reply);
            }
            _ => {}
        }
    }

    /// Queue reply text for the process driving the terminal.
    pub(crate) fn write_process_input(&mut self, data: &str) {
        self.reply_buf.push_str(data);
    }

    /// Drain everything queued for the process since the last call. Empty
    /// when no report was requested.
    pub fn take_process_input(&mut self) -> String {
        std::mem::take(&mut self.reply_buf)
    }
}
