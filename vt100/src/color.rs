// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cell colors and the xterm 256-color palette.
//!
//! The wire protocol talks about colors in three forms: the eight named ANSI
//! colors (plus their aixterm "bright" variants), indices into the standard
//! xterm 256-color palette, and 24-bit RGB triples. On the consumer side the
//! conventional textual forms are the lowercase color name (`"red"`,
//! `"brightblue"`) and the lowercase 6-hex-digit string (`"rrggbb"`); those
//! are exactly what [`Color`]'s `Display` and `FromStr` speak.

use std::{fmt, str::FromStr};

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The eight ANSI colors and their aixterm bright variants.
///
/// `33` maps to *brown*, not yellow - this follows the Linux console
/// tradition the `TERM=linux` subset emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightBrown,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// The basic (non-bright) colors in SGR order, `30 + i` / `40 + i`.
    pub const BASIC: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Brown,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// The aixterm bright colors in SGR order, `90 + i` / `100 + i`.
    pub const BRIGHT: [Self; 8] = [
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightBrown,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];
}

/// A foreground or background color of a [`crate::Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Color {
    /// The terminal's configured default for the ground it is applied to.
    #[default]
    Default,
    /// One of the named ANSI colors.
    Named(NamedColor),
    /// A 24-bit color, also the form every 256-palette index resolves to.
    Rgb { r: u8, g: u8, b: u8 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Rgb { r, g, b } => write!(f, "{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Rejected color strings. The screen operations never surface this: an
/// unparseable color specification is silently ignored and the style is left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `"default"`, a color name, or a lowercase `rrggbb` hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Self::Default);
        }
        if let Ok(name) = NamedColor::from_str(s) {
            return Ok(Self::Named(name));
        }
        if s.len() == 6 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ParseColorError)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ParseColorError)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ParseColorError)?;
            return Ok(Self::Rgb { r, g, b });
        }
        Err(ParseColorError)
    }
}

/// The first 16 entries of the xterm palette as RGB triples. Indices 16..=231
/// are the 6x6x6 color cube and 232..=255 the grayscale ramp, both computed.
const PALETTE_BASE: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00),
    (0x80, 0x00, 0x00),
    (0x00, 0x80, 0x00),
    (0x80, 0x80, 0x00),
    (0x00, 0x00, 0x80),
    (0x80, 0x00, 0x80),
    (0x00, 0x80, 0x80),
    (0xc0, 0xc0, 0xc0),
    (0x80, 0x80, 0x80),
    (0xff, 0x00, 0x00),
    (0x00, 0xff, 0x00),
    (0xff, 0xff, 0x00),
    (0x00, 0x00, 0xff),
    (0xff, 0x00, 0xff),
    (0x00, 0xff, 0xff),
    (0xff, 0xff, 0xff),
];

/// Channel values used by the 6x6x6 color cube.
const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Resolve an index of the standard xterm 256-color palette.
#[must_use]
pub fn ansi_256_to_color(index: u16) -> Option<Color> {
    let index = usize::from(index);
    match index {
        0..=15 => {
            let (r, g, b) = PALETTE_BASE[index];
            Some(Color::Rgb { r, g, b })
        }
        16..=231 => {
            let i = index - 16;
            Some(Color::Rgb {
                r: CUBE_STEPS[i / 36],
                g: CUBE_STEPS[(i / 6) % 6],
                b: CUBE_STEPS[i % 6],
            })
        }
        232..=255 => {
            let v = 8 + (index - 232) as u8 * 10;
            Some(Color::Rgb { r: v, g: v, b: v })
        }
        _ => None,
    }
}
