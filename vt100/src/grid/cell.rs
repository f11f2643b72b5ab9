// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A single styled on-screen cell.

use smallstr::SmallString;

use crate::color::Color;

/// Inline storage for a cell's grapheme cluster. One base code point plus a
/// few combining marks fits without spilling to the heap.
pub type CellText = SmallString<[u8; 8]>;

/// The display attributes of a [`Cell`]: colors plus the boolean SGR flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italics: bool,
    pub underscore: bool,
    pub strikethrough: bool,
    pub reverse: bool,
    pub blink: bool,
}

/// A single styled on-screen cell: one grapheme cluster (base code point plus
/// any combining marks), its display width, and its [`Style`].
///
/// Invariants: `width` is fixed by the leading code point of `data` and is
/// `0`, `1` or `2`; the trailing code points of `data` are zero-width.
/// Treat cells obtained from a view as read-only snapshots - modifying the
/// screen happens through [`crate::Screen`] methods only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub data: CellText,
    pub width: u8,
    pub style: Style,
}

impl Cell {
    /// A cell holding `data` as-is. The caller vouches for `width`.
    #[must_use]
    pub fn new(data: &str, width: u8, style: Style) -> Self {
        Self {
            data: CellText::from_str(data),
            width,
            style,
        }
    }

    /// A single-width space cell, the shape every screen default takes.
    #[must_use]
    pub fn space(style: Style) -> Self {
        Self::new(" ", 1, style)
    }

    /// The zero-width placeholder written into the column right of a
    /// width-2 cell.
    #[must_use]
    pub fn stub(style: Style) -> Self {
        Self::new("", 0, style)
    }
}
