// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Control Sequence Introducer (CSI) codes.
//!
//! CSI sequences follow the pattern `CSI P1;P2;...;Pn final` where `final` is
//! a single character that determines the operation. Parameters are unsigned
//! decimal integers; a missing parameter reads as `0` and values above `9999`
//! are clamped (see [`crate::Stream`]).
//!
//! ## Examples
//! - `ESC[2J` - Clear entire screen
//! - `ESC[1;5H` - Move cursor to row 1, column 5
//! - `ESC[31m` - Set text color to red

// Cursor Movement

/// CSI @: Insert Character (ICH).
pub const ICH_INSERT_CHARACTERS: char = '@';

/// CSI A: Cursor Up (CUU).
pub const CUU_CURSOR_UP: char = 'A';

/// CSI B: Cursor Down (CUD).
pub const CUD_CURSOR_DOWN: char = 'B';

/// CSI C: Cursor Forward (CUF).
pub const CUF_CURSOR_FORWARD: char = 'C';

/// CSI D: Cursor Backward (CUB).
pub const CUB_CURSOR_BACK: char = 'D';

/// CSI E: Cursor Next Line (CNL) - cursor down then column 1.
pub const CNL_CURSOR_DOWN_1: char = 'E';

/// CSI F: Cursor Previous Line (CPL) - cursor up then column 1.
pub const CPL_CURSOR_UP_1: char = 'F';

/// CSI G: Cursor Horizontal Absolute (CHA) - move to 1-based column.
pub const CHA_CURSOR_TO_COLUMN: char = 'G';

/// CSI H: Cursor Position (CUP) - move to 1-based row and column.
pub const CUP_CURSOR_POSITION: char = 'H';

/// CSI f: Horizontal and Vertical Position (HVP). Same as CUP.
pub const HVP_CURSOR_POSITION: char = 'f';

/// CSI a: Horizontal Position Relative (HPR). Same as CUF.
pub const HPR_CURSOR_FORWARD: char = 'a';

/// CSI d: Vertical Position Absolute (VPA) - move to 1-based line.
pub const VPA_CURSOR_TO_LINE: char = 'd';

/// CSI e: Vertical Position Relative (VPR). Same as CUD.
pub const VPR_CURSOR_DOWN: char = 'e';

/// CSI `: Horizontal Position Absolute (HPA). Same as CHA.
pub const HPA_CURSOR_TO_COLUMN: char = '`';

// Editing

/// CSI J: Erase in Display (ED).
/// 0 = cursor to end of screen, 1 = start of screen to cursor,
/// 2 = entire screen, 3 = entire screen plus scrollback history.
pub const ED_ERASE_IN_DISPLAY: char = 'J';

/// CSI K: Erase in Line (EL).
/// 0 = cursor to end of line, 1 = start of line to cursor, 2 = entire line.
pub const EL_ERASE_IN_LINE: char = 'K';

/// CSI L: Insert Line (IL).
pub const IL_INSERT_LINES: char = 'L';

/// CSI M: Delete Line (DL).
pub const DL_DELETE_LINES: char = 'M';

/// CSI P: Delete Character (DCH).
pub const DCH_DELETE_CHARACTERS: char = 'P';

/// CSI X: Erase Character (ECH).
pub const ECH_ERASE_CHARACTERS: char = 'X';

// Tab Stops

/// CSI g: Tab Clear (TBC). 0 = at cursor column, 3 = all.
pub const TBC_CLEAR_TAB_STOP: char = 'g';

// Modes

/// CSI h: Set Mode (SM). With a `?` prefix, sets DEC private modes.
pub const SM_SET_MODE: char = 'h';

/// CSI l: Reset Mode (RM). With a `?` prefix, resets DEC private modes.
pub const RM_RESET_MODE: char = 'l';

// Graphics

/// CSI m: Select Graphic Rendition (SGR).
pub const SGR_SELECT_GRAPHIC_RENDITION: char = 'm';

// Reports

/// CSI c: Device Attributes (DA).
pub const DA_DEVICE_ATTRIBUTES: char = 'c';

/// CSI n: Device Status Report (DSR). 5 = status, 6 = cursor position.
pub const DSR_DEVICE_STATUS: char = 'n';

// Margins

/// CSI r: Set Top and Bottom Margins (DECSTBM).
pub const DECSTBM_SET_MARGINS: char = 'r';

// SGR Parameters

/// Reset all attributes.
pub const SGR_RESET: u16 = 0;

/// Bold.
pub const SGR_BOLD: u16 = 1;

/// Italics.
pub const SGR_ITALICS: u16 = 3;

/// Underscore.
pub const SGR_UNDERSCORE: u16 = 4;

/// Slow blink.
pub const SGR_BLINK: u16 = 5;

/// Reverse video.
pub const SGR_REVERSE: u16 = 7;

/// Strikethrough.
pub const SGR_STRIKETHROUGH: u16 = 9;

/// Reset bold.
pub const SGR_RESET_BOLD: u16 = 22;

/// Reset italics.
pub const SGR_RESET_ITALICS: u16 = 23;

/// Reset underscore.
pub const SGR_RESET_UNDERSCORE: u16 = 24;

/// Reset blink.
pub const SGR_RESET_BLINK: u16 = 25;

/// Reset reverse video.
pub const SGR_RESET_REVERSE: u16 = 27;

/// Reset strikethrough.
pub const SGR_RESET_STRIKETHROUGH: u16 = 29;

/// First of the basic foreground colors (30 = black .. 37 = white).
pub const SGR_FG_FIRST: u16 = 30;

/// Last of the basic foreground colors.
pub const SGR_FG_LAST: u16 = 37;

/// Extended foreground color introducer (`38;5;n` or `38;2;r;g;b`).
pub const SGR_FG_EXTENDED: u16 = 38;

/// Default foreground color.
pub const SGR_FG_DEFAULT: u16 = 39;

/// First of the basic background colors (40 = black .. 47 = white).
pub const SGR_BG_FIRST: u16 = 40;

/// Last of the basic background colors.
pub const SGR_BG_LAST: u16 = 47;

/// Extended background color introducer (`48;5;n` or `48;2;r;g;b`).
pub const SGR_BG_EXTENDED: u16 = 48;

/// Default background color.
pub const SGR_BG_DEFAULT: u16 = 49;

/// First aixterm bright foreground color (90 .. 97).
pub const SGR_FG_BRIGHT_FIRST: u16 = 90;

/// Last aixterm bright foreground color.
pub const SGR_FG_BRIGHT_LAST: u16 = 97;

/// First aixterm bright background color (100 .. 107).
pub const SGR_BG_BRIGHT_FIRST: u16 = 100;

/// Last aixterm bright background color.
pub const SGR_BG_BRIGHT_LAST: u16 = 107;

/// Extended color sub-introducer selecting the 256-color palette.
pub const SGR_EXTENDED_256: u16 = 5;

/// Extended color sub-introducer selecting 24-bit RGB.
pub const SGR_EXTENDED_RGB: u16 = 2;
