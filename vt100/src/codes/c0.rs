// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters and C1 introducers.
//!
//! Everything here is a `char` because the stream machine operates on decoded
//! characters; the byte layer ([`crate::ByteStream`]) has already mapped raw
//! bytes into the `0x00..=0xFF` code point range (or through UTF-8).

/// Null byte. Dropped by the parser in ground state.
pub const NUL: char = '\u{00}';

/// Bell.
pub const BEL: char = '\u{07}';

/// Backspace.
pub const BS: char = '\u{08}';

/// Horizontal tab.
pub const HT: char = '\u{09}';

/// Line feed.
pub const LF: char = '\u{0a}';

/// Vertical tab. Treated as a line feed.
pub const VT: char = '\u{0b}';

/// Form feed. Treated as a line feed.
pub const FF: char = '\u{0c}';

/// Carriage return.
pub const CR: char = '\u{0d}';

/// Shift out: select the G1 character set.
pub const SO: char = '\u{0e}';

/// Shift in: select the G0 character set.
pub const SI: char = '\u{0f}';

/// Cancel: aborts an escape sequence in progress.
pub const CAN: char = '\u{18}';

/// Substitute: aborts an escape sequence in progress, like [`CAN`].
pub const SUB: char = '\u{1a}';

/// Escape.
pub const ESC: char = '\u{1b}';

/// Delete. Dropped by the parser in ground state.
pub const DEL: char = '\u{7f}';

/// Space.
pub const SP: char = ' ';

/// Control Sequence Introducer, 8-bit C1 form. The 7-bit form is `ESC [`.
pub const CSI_C1: char = '\u{9b}';

/// String Terminator, 8-bit C1 form. The 7-bit form is `ESC \`.
pub const ST_C1: char = '\u{9c}';

/// Operating System Command introducer, 8-bit C1 form. The 7-bit form is
/// `ESC ]`.
pub const OSC_C1: char = '\u{9d}';

/// The `CSI` prefix used when composing replies (DA, DSR).
pub const CSI: &str = "\u{1b}[";
