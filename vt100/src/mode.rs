// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal mode identifiers.
//!
//! Modes arrive over the wire as numeric codes in `CSI ... h` / `CSI ... l`,
//! in two disjoint namespaces: ANSI modes (`CSI 4h`) and DEC private modes
//! (`CSI ?7h`). A [`Mode`] carries the code together with the namespace flag,
//! so the two spaces can never collide. Codes we do not know are stored
//! verbatim; they only gain meaning if listed below.

use serde::Serialize;

/// A terminal mode: a wire code plus the DEC-private namespace flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Mode {
    /// Numeric code as sent on the wire.
    pub code: u16,
    /// `true` for DEC private modes (`?` prefixed in CSI).
    pub private: bool,
}

impl Mode {
    /// An ANSI (non-private) mode.
    #[must_use]
    pub const fn ansi(code: u16) -> Self {
        Self {
            code,
            private: false,
        }
    }

    /// A DEC private mode.
    #[must_use]
    pub const fn private(code: u16) -> Self {
        Self {
            code,
            private: true,
        }
    }
}

/// *Line Feed/New Line Mode*: when set, a line feed implies a carriage
/// return.
pub const LNM: Mode = Mode::ansi(20);

/// *Insert/Replace Mode*: when set, drawn characters shift existing cells to
/// the right instead of overwriting them.
pub const IRM: Mode = Mode::ansi(4);

/// *Cursor Key Mode*: stored for completeness; cursor key encoding is input
/// direction and outside this crate.
pub const DECCKM: Mode = Mode::private(1);

/// *Column Mode*: when set, the screen switches to 132 columns and clears.
pub const DECCOLM: Mode = Mode::private(3);

/// *Screen Mode*: reverse-video for the whole screen.
pub const DECSCNM: Mode = Mode::private(5);

/// *Origin Mode*: cursor addressing becomes relative to the scroll region.
pub const DECOM: Mode = Mode::private(6);

/// *Autowrap Mode*: drawing past the last column wraps to the next line.
pub const DECAWM: Mode = Mode::private(7);

/// *Text Cursor Enable Mode*: cursor visibility.
pub const DECTCEM: Mode = Mode::private(25);
