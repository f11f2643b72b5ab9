// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Event disassembly: a [`Handler`] that records instead of rendering.
//!
//! Useful for seeing what a byte stream actually says:
//!
//! ```
//! use r3bl_vt100::{EventLog, Stream};
//!
//! let mut log = EventLog::new(Vec::new());
//! let mut stream = Stream::new();
//! stream.feed("\u{1b}[1;24r\u{1b}[4l", &mut log);
//! let lines = String::from_utf8(log.into_inner()).unwrap();
//! assert_eq!(
//!     lines.lines().next().unwrap(),
//!     r#"{"set_margins":{"top":1,"bottom":24}}"#
//! );
//! ```

use std::io::Write;

use crate::event::{Event, Handler};

/// Writes one JSON line per received event to an injected writer.
///
/// The writer is supplied at construction; nothing is global. I/O failures
/// are traced and swallowed - a disassembler must never derail the stream
/// that feeds it.
#[derive(Debug)]
pub struct EventLog<W: Write> {
    to: W,
}

impl<W: Write> EventLog<W> {
    pub fn new(to: W) -> Self {
        Self { to }
    }

    /// Hand back the writer (and whatever it collected).
    pub fn into_inner(self) -> W {
        self.to
    }
}

impl<W: Write> Handler for EventLog<W> {
    fn handle(&mut self, event: Event<'_>) {
        match serde_json::to_string(&event) {
            Ok(json) => {
                if let Err(error) = writeln!(self.to, "{json}") {
                    tracing::warn!(%error, "event log write failed");
                }
            }
            Err(error) => tracing::warn!(%error, "event not serializable"),
        }
    }
}
