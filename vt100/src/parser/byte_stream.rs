// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The byte-oriented stream: what you feed PTY output into.
//!
//! Bytes are decoded to characters before parsing - by default through the
//! incremental UTF-8 decoder, or, after the application sends `ESC % @`,
//! through a lossless one-to-one mapping of `0x00..=0xFF` onto
//! `U+0000..=U+00FF` (the G0/G1 tables then give the bytes their meaning).
//! `ESC % G` (or the obsolete `ESC % 8`) switches back to UTF-8 and resets
//! the decoder.
//!
//! A fed chunk is decoded as a whole before it is parsed, so a coding switch
//! inside a chunk takes effect from the next `feed` call on.

use super::{Stream, utf8::Utf8Decoder};
use crate::event::Handler;

/// A [`Stream`] that takes bytes as input.
///
/// ```
/// use r3bl_vt100::{ByteStream, Screen};
///
/// let mut screen = Screen::new(80, 24);
/// let mut stream = ByteStream::new();
/// stream.feed("Привет!".as_bytes(), &mut screen);
/// assert_eq!(screen.display()[0].trim_end(), "Привет!");
/// ```
#[derive(Debug, Clone)]
pub struct ByteStream {
    stream: Stream,
    decoder: Utf8Decoder,
    /// Scratch buffer for the decoded chunk, reused across feeds.
    text: String,
}

impl Default for ByteStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteStream {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stream: Stream::with_coding_switch(),
            decoder: Utf8Decoder::new(),
            text: String::new(),
        }
    }

    /// Whether input is currently decoded as UTF-8 (as opposed to the
    /// single-byte pass-through selected by `ESC % @`).
    #[must_use]
    pub fn is_utf8(&self) -> bool {
        self.stream.is_utf8()
    }

    /// Consume a chunk of bytes. Split escape sequences and split multibyte
    /// UTF-8 sequences across calls are handled.
    pub fn feed<H: Handler>(&mut self, data: &[u8], handler: &mut H) {
        self.text.clear();
        let was_utf8 = self.stream.is_utf8();

        if was_utf8 {
            self.decoder.decode(data, &mut self.text);
        } else {
            // Lossless byte-to-character pass-through.
            self.text.extend(data.iter().map(|&byte| char::from(byte)));
        }

        self.stream.feed(&self.text, handler);

        // `ESC % @` arrived: drop whatever partial UTF-8 sequence the
        // decoder was holding.
        if was_utf8 && !self.stream.is_utf8() {
            self.decoder.reset();
        }
    }
}
