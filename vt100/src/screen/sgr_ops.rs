// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition): display attributes of the cursor.
//!
//! The attributes set here ride along on every cell subsequently drawn or
//! erased. Basic and aixterm colors resolve to named colors; `38;5;n` /
//! `48;5;n` resolve through the xterm 256-color palette and `38;2;r;g;b` /
//! `48;2;r;g;b` to 24-bit RGB. A malformed extended-color subsequence is
//! dropped without disturbing the attributes accumulated so far; unknown
//! codes are ignored.

use super::Screen;
use crate::{
    codes::csi_codes,
    color::{Color, NamedColor, ansi_256_to_color},
};

impl Screen {
    /// Apply a list of SGR attributes to the cursor.
    ///
    /// No attributes, a single `0`, or a screen constructed with
    /// `disable_display_graphic` reset the cursor attributes to the current
    /// default character.
    pub fn select_graphic_rendition(&mut self, attrs: &[u16]) {
        // Fast path for resetting all attributes.
        if attrs.is_empty() || attrs == [0] || self.disable_display_graphic {
            self.cursor.attrs = self.default_char();
            return;
        }

        let mut style = self.cursor.attrs.style;
        let mut iter = attrs.iter().copied();

        while let Some(attr) = iter.next() {
            match attr {
                csi_codes::SGR_RESET => style = self.default_char().style,
                csi_codes::SGR_BOLD => style.bold = true,
                csi_codes::SGR_ITALICS => style.italics = true,
                csi_codes::SGR_UNDERSCORE => style.underscore = true,
                csi_codes::SGR_BLINK => style.blink = true,
                csi_codes::SGR_REVERSE => style.reverse = true,
                csi_codes::SGR_STRIKETHROUGH => style.strikethrough = true,
                csi_codes::SGR_RESET_BOLD => style.bold = false,
                csi_codes::SGR_RESET_ITALICS => style.italics = false,
                csi_codes::SGR_RESET_UNDERSCORE => style.underscore = false,
                csi_codes::SGR_RESET_BLINK => style.blink = false,
                csi_codes::SGR_RESET_REVERSE => style.reverse = false,
                csi_codes::SGR_RESET_STRIKETHROUGH => style.strikethrough = false,
                csi_codes::SGR_FG_FIRST..=csi_codes::SGR_FG_LAST => {
                    style.fg = Color::Named(
                        NamedColor::BASIC[usize::from(attr - csi_codes::SGR_FG_FIRST)],
                    );
                }
                csi_codes::SGR_FG_DEFAULT => style.fg = Color::Default,
                csi_codes::SGR_BG_FIRST..=csi_codes::SGR_BG_LAST => {
                    style.bg = Color::Named(
                        NamedColor::BASIC[usize::from(attr - csi_codes::SGR_BG_FIRST)],
                    );
                }
                csi_codes::SGR_BG_DEFAULT => style.bg = Color::Default,
                csi_codes::SGR_FG_BRIGHT_FIRST..=csi_codes::SGR_FG_BRIGHT_LAST => {
                    style.fg = Color::Named(
                        NamedColor::BRIGHT
                            [usize::from(attr - csi_codes::SGR_FG_BRIGHT_FIRST)],
                    );
                }
                csi_codes::SGR_BG_BRIGHT_FIRST..=csi_codes::SGR_BG_BRIGHT_LAST => {
                    style.bg = Color::Named(
                        NamedColor::BRIGHT
                            [usize::from(attr - csi_codes::SGR_BG_BRIGHT_FIRST)],
                    );
                }
                csi_codes::SGR_FG_EXTENDED | csi_codes::SGR_BG_EXTENDED => {
                    if let Some(color) = parse_extended_color(&mut iter) {
                        if attr == csi_codes::SGR_FG_EXTENDED {
                            style.fg = color;
                        } else {
                            style.bg = color;
                        }
                    }
                }
                _ => {} // Ignore unsupported SGR codes.
            }
        }

        self.cursor.attrs.style = style;
    }
}

/// Consume a `5;n` (256-color) or `2;r;g;b` (24-bit) subsequence from an SGR
/// parameter list. Returns `None` - consuming only what it read - when the
/// subsequence is malformed; the caller then leaves the style untouched and
/// goes on with the remaining parameters.
fn parse_extended_color(iter: &mut impl Iterator<Item = u16>) -> Option<Color> {
    match iter.next()? {
        csi_codes::SGR_EXTENDED_256 => ansi_256_to_color(iter.next()?),
        csi_codes::SGR_EXTENDED_RGB => {
            let r = u8::try_from(iter.next()?).ok()?;
            let g = u8::try_from(iter.next()?).ok()?;
            let b = u8::try_from(iter.next()?).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        _ => None,
    }
}
