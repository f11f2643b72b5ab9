// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The event contract between the parser and the screen.
//!
//! [`crate::Stream`] decodes a character stream into a sequence of
//! [`Event`]s and pushes them, in input order, into a [`Handler`]. The stock
//! handlers are [`crate::Screen`], [`crate::HistoryScreen`] and
//! [`crate::EventLog`]; anything implementing [`Handler`] can sit on the
//! receiving end (a recorder, a filter, a fan-out).
//!
//! Parameter conventions follow the wire protocol: CSI parameters are
//! unsigned, a missing parameter arrives as `0`, and the screen treats `0`
//! as 1 where the protocol says so. Events that can carry a DEC `?` prefix
//! have a `private` flag.

use serde::Serialize;

/// A decoded terminal instruction.
///
/// Borrowed payloads (`Draw` runs, parameter slices, OSC strings) point into
/// the parser's buffers and are only valid for the duration of the
/// [`Handler::handle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Event<'a> {
    /// A run of printable text.
    Draw(&'a str),

    // C0 controls.
    Bell,
    Backspace,
    Tab,
    Linefeed,
    CarriageReturn,
    /// SO: select G1.
    ShiftOut,
    /// SI: select G0.
    ShiftIn,

    // ESC sequences.
    /// RIS: full reset.
    Reset,
    /// IND: cursor down, scrolling at the bottom margin.
    Index,
    /// RI: cursor up, scrolling at the top margin.
    ReverseIndex,
    /// HTS: set a tab stop at the cursor column.
    SetTabStop,
    /// DECSC.
    SaveCursor,
    /// DECRC.
    RestoreCursor,
    /// DECALN: fill the screen with `E`.
    AlignmentDisplay,
    /// `ESC ( code` / `ESC ) code`: designate G0/G1. `mode` is `'('` or
    /// `')'`.
    DefineCharset { code: char, mode: char },

    // CSI sequences.
    /// ICH.
    InsertCharacters(u16),
    /// CUU.
    CursorUp(u16),
    /// CUD / VPR.
    CursorDown(u16),
    /// CUF / HPR.
    CursorForward(u16),
    /// CUB.
    CursorBack(u16),
    /// CNL: down then column 1.
    CursorDown1(u16),
    /// CPL: up then column 1.
    CursorUp1(u16),
    /// CHA / HPA: 1-based column.
    CursorToColumn(u16),
    /// VPA: 1-based line.
    CursorToLine(u16),
    /// CUP / HVP: 1-based line and column.
    CursorPosition { line: u16, column: u16 },
    /// ED.
    EraseInDisplay { how: u16, private: bool },
    /// EL.
    EraseInLine { how: u16, private: bool },
    /// IL.
    InsertLines(u16),
    /// DL.
    DeleteLines(u16),
    /// DCH.
    DeleteCharacters(u16),
    /// ECH.
    EraseCharacters(u16),
    /// TBC: 0 = at cursor, 3 = all.
    ClearTabStop(u16),
    /// SM.
    SetMode { modes: &'a [u16], private: bool },
    /// RM.
    ResetMode { modes: &'a [u16], private: bool },
    /// SGR.
    SelectGraphicRendition(&'a [u16]),
    /// DA.
    ReportDeviceAttributes { mode: u16, private: bool },
    /// DSR: 5 = status, 6 = cursor position.
    ReportDeviceStatus(u16),
    /// DECSTBM. `bottom` is `None` when the parameter was not given at all.
    SetMargins { top: u16, bottom: Option<u16> },

    // OSC sequences.
    SetTitle(&'a str),
    SetIconName(&'a str),

    /// Catch-all for sequences with unknown final characters. Never an
    /// error: the stream stays in sync and the screen's `debug` sink gets
    /// the pieces.
    Debug(Unhandled<'a>),
}

/// The unrecognized sequence behind an [`Event::Debug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unhandled<'a> {
    /// `ESC finalizer` with an unknown final character.
    Escape { finalizer: char },
    /// `ESC # finalizer` other than DECALN.
    Sharp { finalizer: char },
    /// A CSI sequence with an unknown final character.
    Csi {
        params: &'a [u16],
        private: bool,
        finalizer: char,
    },
}

/// A sink for decoded terminal instructions.
pub trait Handler {
    /// Apply one event. Dispatch is synchronous; events arrive in input
    /// order.
    fn handle(&mut self, event: Event<'_>);
}
