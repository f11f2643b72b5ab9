// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Direct ESC (Escape) codes for terminal control.
//!
//! ESC sequences are simple, non-parameterized terminal control codes that
//! predate the more advanced CSI sequences.
//!
//! ## Structure
//! - Single character: `ESC character` (e.g. `ESC c` for reset)
//! - With intermediate: `ESC intermediate final` (e.g. `ESC ( B` for charset
//!   selection, `ESC # 8` for the alignment pattern)

// Terminal Control

/// ESC c (RIS): Reset to Initial State.
/// Performs a full terminal reset, clearing the screen and resetting all
/// modes, tab stops, charsets and save points.
pub const RIS_RESET: char = 'c';

// Line / Scrolling Operations

/// ESC D (IND): Index - move cursor down one line.
/// If at the bottom of the scroll region, scrolls the region up.
pub const IND_INDEX: char = 'D';

/// ESC E (NEL): Next Line. Treated as a line feed.
pub const NEL_NEXT_LINE: char = 'E';

/// ESC M (RI): Reverse Index - move cursor up one line.
/// If at the top of the scroll region, scrolls the region down.
pub const RI_REVERSE_INDEX: char = 'M';

// Tab Stops

/// ESC H (HTS): Horizontal Tab Set at the current cursor column.
pub const HTS_SET_TAB_STOP: char = 'H';

// Cursor Save/Restore

/// ESC 7 (DECSC): Save cursor position, attributes, charsets and the
/// origin/autowrap modes onto the save-point stack.
pub const DECSC_SAVE_CURSOR: char = '7';

/// ESC 8 (DECRC): Restore the most recent save point.
pub const DECRC_RESTORE_CURSOR: char = '8';

// Intermediates

/// ESC # - screen alignment / double-size intermediate.
pub const SHARP: char = '#';

/// ESC # 8 (DECALN): fill the screen with uppercase `E`s.
pub const DECALN_ALIGNMENT: char = '8';

/// ESC % - select other coding system intermediate.
pub const PERCENT: char = '%';

/// ESC % @: switch the byte decoder to single-byte (pass-through) mode.
pub const CODING_DEFAULT: char = '@';

/// ESC % G: switch the byte decoder to UTF-8.
pub const CODING_UTF8: char = 'G';

/// ESC % 8: obsolete alias of `ESC % G`, kept for Linux console
/// compatibility.
pub const CODING_UTF8_OBSOLETE: char = '8';

/// ESC ( - G0 character set designation intermediate.
pub const G0_CHARSET: char = '(';

/// ESC ) - G1 character set designation intermediate.
pub const G1_CHARSET: char = ')';
