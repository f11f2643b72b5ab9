// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # In-memory VT100/VT220/VT520 terminal emulator core
//!
//! This crate implements the subset of the VT100/VT220/VT520 specifications
//! colloquially known as `TERM=linux`: a pure function from a byte or
//! character stream to a rectangular grid of styled cells plus a cursor and
//! modal state. It renders nothing and opens no PTYs - it is the piece that
//! *understands* terminal output, for multiplexers, test harnesses, screen
//! scrapers and recording tools to build on.
//!
//! ```text
//! ╭─────────────────╮   ╭────────────────────╮   ╭──────────────────────╮
//! │ PTY master      │──▶│ ByteStream         │──▶│ Screen /             │
//! │ (byte stream)   │   │ decode + parse     │   │ HistoryScreen        │
//! ╰─────────────────╯   ╰────────────────────╯   ╰──────────────────────╯
//!                              `Event`s           display/buffer/cursor
//!                                                 /dirty read back
//! ```
//!
//! ## Quick start
//!
//! ```
//! use r3bl_vt100::{ByteStream, Screen};
//!
//! let mut screen = Screen::new(80, 24);
//! let mut stream = ByteStream::new();
//! stream.feed(b"Hello, \x1b[1;31mworld\x1b[0m!", &mut screen);
//!
//! assert_eq!(&screen.display()[0][0..13], "Hello, world!");
//! assert!(screen.buffer().line(0).char_at(7).style.bold);
//! ```
//!
//! ## The pieces
//!
//! - [`Stream`] / [`ByteStream`]: the control-sequence parser (plus the
//!   incremental UTF-8 / single-byte decoding layer), emitting [`Event`]s.
//! - [`Screen`]: the screen model - sparse cell matrix, cursor, scroll
//!   margins, character sets, tab stops, modes, save points, dirty-row
//!   tracking, DA/DSR replies.
//! - [`HistoryScreen`]: a [`Screen`] with bounded scrollback and pagination.
//! - [`EventLog`]: a recording [`Handler`], for disassembling streams.
//!
//! Anything implementing [`Handler`] can sit behind a stream; the parser
//! does not know what a screen is.

pub mod charsets;
pub mod codes;
pub mod color;
pub mod debug_log;
pub mod event;
pub mod grid;
pub mod history;
pub mod mode;
pub mod parser;
pub mod screen;
pub mod wcwidth;


pub use charsets::CharsetTable;
pub use color::{Color, NamedColor, ansi_256_to_color};
pub use debug_log::EventLog;
pub use event::{Event, Handler, Unhandled};
pub use grid::{Buffer, BufferView, Cell, Line, LineView, Style};
pub use history::{History, HistoryError, HistoryScreen};
pub use mode::Mode;
pub use parser::{ByteStream, Stream};
pub use screen::{Cursor, Dirty, Margins, Screen, ScreenOptions};
pub use wcwidth::{wcswidth, wcwidth};
