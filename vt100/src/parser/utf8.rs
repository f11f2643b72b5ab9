// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental UTF-8 decoding with replacement.
//!
//! UTF-8 uses bit pattern matching to identify byte types: the high bits are
//! structural markers, the remaining bits carry the code point.
//!
//! ```text
//! Byte Pattern   Meaning              Detection
//! ──────────────────────────────────────────────────
//! 0xxxxxxx       ASCII (1-byte)       byte & 0x80 == 0x00
//! 110xxxxx       2-byte start         byte & 0xE0 == 0xC0
//! 1110xxxx       3-byte start         byte & 0xF0 == 0xE0
//! 11110xxx       4-byte start         byte & 0xF8 == 0xF0
//! 10xxxxxx       Continuation         byte & 0xC0 == 0x80
//! ```
//!
//! The decoder is *incremental*: a multibyte sequence split across two
//! `decode` calls picks up where it left off. It is also *replacing*:
//! malformed input turns into U+FFFD, one replacement per maximal invalid
//! subsequence, and the byte that broke a sequence is reconsidered as the
//! start of the next one. Overlong encodings, surrogates and code points
//! past U+10FFFF are rejected at the second byte via per-sequence bounds.

const REPLACEMENT: char = '\u{fffd}';

/// Bounds on an ordinary continuation byte.
const CONT_LOWER: u8 = 0x80;
const CONT_UPPER: u8 = 0xbf;

/// Streaming UTF-8 decoder.
#[derive(Debug, Clone)]
pub(crate) struct Utf8Decoder {
    /// Continuation bytes still expected; 0 means "between characters".
    need: u8,
    /// Code point bits accumulated so far.
    codepoint: u32,
    /// Valid range for the next continuation byte. Tighter than the default
    /// right after E0/ED/F0/F4 lead bytes, which is what rejects overlongs
    /// and surrogates early.
    lower: u8,
    upper: u8,
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Decoder {
    pub(crate) fn new() -> Self {
        Self {
            need: 0,
            codepoint: 0,
            lower: CONT_LOWER,
            upper: CONT_UPPER,
        }
    }

    /// Forget any partially accumulated sequence.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Decode `input` into `out`, buffering a trailing partial sequence for
    /// the next call.
    pub(crate) fn decode(&mut self, input: &[u8], out: &mut String) {
        for &byte in input {
            // A broken continuation re-enters the match as a potential start
            // byte, hence the loop.
            loop {
                if self.need == 0 {
                    self.start_byte(byte, out);
                    break;
                }

                if (self.lower..=self.upper).contains(&byte) {
                    self.codepoint = (self.codepoint << 6) | u32::from(byte & 0x3f);
                    self.lower = CONT_LOWER;
                    self.upper = CONT_UPPER;
                    self.need -= 1;
                    if self.need == 0 {
                        // The bounds above guarantee validity.
                        match char::from_u32(self.codepoint) {
                            Some(c) => out.push(c),
                            None => out.push(REPLACEMENT),
                        }
                        self.codepoint = 0;
                    }
                    break;
                }

                // The sequence so far is a maximal invalid subsequence; the
                // offending byte gets another look as a start byte.
                self.reset();
                out.push(REPLACEMENT);
            }
        }
    }

    fn start_byte(&mut self, byte: u8, out: &mut String) {
        match byte {
            0x00..=0x7f => out.push(char::from(byte)),
            0xc2..=0xdf => {
                self.need = 1;
                self.codepoint = u32::from(byte & 0x1f);
            }
            0xe0..=0xef => {
                self.need = 2;
                self.codepoint = u32::from(byte & 0x0f);
                if byte == 0xe0 {
                    self.lower = 0xa0; // Reject overlong three-byte forms.
                } else if byte == 0xed {
                    self.upper = 0x9f; // Reject surrogates.
                }
            }
            0xf0..=0xf4 => {
                self.need = 3;
                self.codepoint = u32::from(byte & 0x07);
                if byte == 0xf0 {
                    self.lower = 0x90; // Reject overlong four-byte forms.
                } else if byte == 0xf4 {
                    self.upper = 0x8f; // Reject code points past U+10FFFF.
                }
            }
            // Stray continuations, overlong two-byte leads (C0/C1) and
            // impossible leads (F5..FF).
            _ => out.push(REPLACEMENT),
        }
    }
}
