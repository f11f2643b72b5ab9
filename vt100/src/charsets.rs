// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! G0/G1 character set translation tables.
//!
//! A VT terminal holds two designated character sets, G0 and G1, selected by
//! `ESC ( <code>` and `ESC ) <code>` and activated with SI/SO. Each set maps
//! the characters the application sends to the characters that end up on
//! screen. The `TERM=linux` subset designates four tables:
//!
//! | code  | table |
//! |-------|-------|
//! | `B`   | Latin-1 (identity) |
//! | `0`   | DEC Special Graphics (VT100 line drawing) |
//! | `U`   | IBM-PC (cp437) |
//! | `K`   | "user" - treated as Latin-1 |

/// A designated character set table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetTable {
    /// `B` - ISO 8859-1, an identity mapping.
    Latin1,
    /// `0` - DEC Special Graphics, the VT100 line-drawing set.
    Vt100Graphics,
    /// `U` - IBM-PC code page 437.
    IbmPc,
    /// `K` - user-defined set; user-defined charsets are not supported, so
    /// this behaves as Latin-1.
    User,
}

impl CharsetTable {
    /// Resolve a designation code (`B`, `0`, `U`, `K`) to its table.
    /// Returns `None` for codes outside the supported set; the caller
    /// ignores the designation in that case.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Self::Latin1),
            '0' => Some(Self::Vt100Graphics),
            'U' => Some(Self::IbmPc),
            'K' => Some(Self::User),
            _ => None,
        }
    }

    /// Translate one character through this table.
    #[must_use]
    pub fn translate(self, ch: char) -> char {
        match self {
            Self::Latin1 | Self::User => ch,
            Self::Vt100Graphics => translate_dec_graphics(ch),
            Self::IbmPc => translate_ibmpc(ch),
        }
    }
}

/// Translate DEC Special Graphics characters to Unicode.
/// Used when the active table is [`CharsetTable::Vt100Graphics`]
/// (after `ESC ( 0`).
#[must_use]
pub fn translate_dec_graphics(c: char) -> char {
    match c {
        '_' => ' ',
        '`' => '◆', // Diamond
        'a' => '▒', // Checkerboard
        'b' => '␉', // HT symbol
        'c' => '␌', // FF symbol
        'd' => '␍', // CR symbol
        'e' => '␊', // LF symbol
        'f' => '°',
        'g' => '±',
        'h' => '␤', // NL symbol
        'i' => '␋', // VT symbol
        'j' => '┘', // Lower right corner
        'k' => '┐', // Upper right corner
        'l' => '┌', // Upper left corner
        'm' => '└', // Lower left corner
        'n' => '┼', // Crossing lines
        'o' => '⎺', // Scan line 1
        'p' => '⎻', // Scan line 3
        'q' => '─', // Horizontal line
        'r' => '⎼', // Scan line 7
        's' => '⎽', // Scan line 9
        't' => '├', // Left "T"
        'u' => '┤', // Right "T"
        'v' => '┴', // Bottom "T"
        'w' => '┬', // Top "T"
        'x' => '│', // Vertical line
        'y' => '≤',
        'z' => '≥',
        '{' => 'π',
        '|' => '≠',
        '}' => '£',
        '~' => '·',
        _ => c, // Pass through unmapped characters
    }
}

/// cp437 glyphs for code points `0x00..=0xFF`, from
/// `linux/drivers/char/cp437.uni`. Indexed by the low byte of the incoming
/// character; characters above `0xFF` pass through untranslated.
const CP437: [char; 256] = [
    '\u{0}', '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼', //
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼', //
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', //
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', //
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', //
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_', //
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', //
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '⌂', //
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Translate through the IBM-PC (cp437) table.
#[must_use]
pub fn translate_ibmpc(c: char) -> char {
    let o = c as u32;
    if o < 256 { CP437[o as usize] } else { c }
}
