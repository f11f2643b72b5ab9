// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The control-sequence parser: characters in, [`Event`]s out.
//!
//! ```text
//! Application sends "ESC[3;7H" (move cursor)
//!         ↓
//!     Stream::feed() - one state step per character
//!         ↓
//!     CSI state: params [3, 7], final 'H'
//!         ↓
//!     handler.handle(Event::CursorPosition { line: 3, column: 7 })
//! ```
//!
//! The machine is an explicit state tag plus one `match` per state. In the
//! ground state `feed` takes a fast path: it scans ahead for the next
//! special character and hands the whole preceding run to the handler as a
//! single [`Event::Draw`], so plain text costs one event per run instead of
//! one per character.
//!
//! Split input is never a problem: state survives across `feed` calls, so a
//! sequence chopped at any character boundary decodes identically.

pub mod byte_stream;
pub mod utf8;

pub use byte_stream::ByteStream;

use smallvec::SmallVec;

use crate::{
    codes::{c0, csi_codes, esc_codes},
    event::{Event, Handler, Unhandled},
};

/// Parser state tag. `Ground` is where printable text flows; every other
/// state is inside some escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    /// Right after `ESC`.
    Escape,
    /// After `ESC #`.
    Sharp,
    /// After `ESC %`.
    Percent,
    /// After `ESC (` or `ESC )`; the payload is the designation mode.
    Charset(char),
    /// Inside `CSI ...`.
    Csi,
    /// After a `$` inside a CSI: the sequence is an xterm extension we do
    /// not support; its final character is swallowed.
    CsiIgnore,
    /// Right after the OSC introducer, expecting the code character.
    OscCode,
    /// Collecting the OSC string. `escape_seen` marks a pending `ESC` that
    /// may start the `ESC \` terminator.
    OscParam { escape_seen: bool },
}

/// Characters the ground-state fast path must stop at: sequence introducers,
/// the dropped NUL/DEL, and every one-byte control with an event of its own.
fn is_special(c: char) -> bool {
    matches!(
        c,
        c0::ESC
            | c0::CSI_C1
            | c0::OSC_C1
            | c0::NUL
            | c0::DEL
            | c0::BEL
            | c0::BS
            | c0::HT
            | c0::LF
            | c0::VT
            | c0::FF
            | c0::CR
            | c0::SO
            | c0::SI
    )
}

/// A state machine that parses a stream of terminal characters and
/// dispatches [`Event`]s to a [`Handler`].
///
/// ```
/// use r3bl_vt100::{Screen, Stream};
///
/// let mut screen = Screen::new(80, 24);
/// let mut stream = Stream::new();
/// stream.feed("\u{1b}[5B", &mut screen); // Move the cursor down 5 rows.
/// assert_eq!(screen.cursor().y, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Stream {
    state: State,
    /// Accumulated CSI parameters.
    params: SmallVec<[u16; 16]>,
    /// Digits of the parameter currently being read.
    current: u32,
    /// Set by a `?` anywhere in the CSI.
    private: bool,
    osc_code: char,
    osc_param: String,
    use_utf8: bool,
    /// `ESC %` coding switches only mean something on a byte-oriented
    /// stream; a plain character stream swallows them.
    coding_switch_enabled: bool,
}

impl Default for Stream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream {
    /// A parser for character input (already decoded). `ESC % ...` coding
    /// switches are recognized but have no effect; in this (UTF-8) regime
    /// SI/SO and G0/G1 designations are ignored as well, following the
    /// Linux console's rule that shifts don't mix with UTF-8.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            params: SmallVec::new(),
            current: 0,
            private: false,
            osc_code: '\0',
            osc_param: String::new(),
            use_utf8: true,
            coding_switch_enabled: false,
        }
    }

    /// A parser whose `ESC % @` / `ESC % G` switches are live. Used by
    /// [`crate::ByteStream`], which owns the byte decoder the switch
    /// controls.
    pub(crate) fn with_coding_switch() -> Self {
        Self {
            coding_switch_enabled: true,
            ..Self::new()
        }
    }

    /// Whether the stream currently assumes UTF-8 input.
    #[must_use]
    pub fn is_utf8(&self) -> bool {
        self.use_utf8
    }

    /// Force the input regime. Feeding pre-decoded single-byte text through
    /// a plain [`Stream`] needs `use_utf8 = false` for SI/SO shifts and
    /// G0/G1 designations to take effect.
    pub fn set_utf8_mode(&mut self, use_utf8: bool) {
        self.use_utf8 = use_utf8;
    }

    /// Consume `data`, advancing the state machine and dispatching events.
    /// Runs synchronously to completion; events reach `handler` in input
    /// order.
    pub fn feed<H: Handler>(&mut self, data: &str, handler: &mut H) {
        let mut offset = 0;

        while offset < data.len() {
            let rest = &data[offset..];

            if self.state == State::Ground {
                // Fast path: hand over the whole printable run at once.
                match rest.char_indices().find(|&(_, c)| is_special(c)) {
                    Some((0, c)) => {
                        self.advance(c, handler);
                        offset += c.len_utf8();
                    }
                    Some((index, _)) => {
                        handler.handle(Event::Draw(&rest[..index]));
                        offset += index;
                    }
                    None => {
                        handler.handle(Event::Draw(rest));
                        break;
                    }
                }
            } else {
                let c = rest.chars().next().expect("offset is a char boundary");
                self.advance(c, handler);
                offset += c.len_utf8();
            }
        }
    }

    /// One state step.
    fn advance<H: Handler>(&mut self, c: char, handler: &mut H) {
        match self.state {
            State::Ground => self.advance_ground(c, handler),
            State::Escape => self.advance_escape(c, handler),
            State::Sharp => {
                self.state = State::Ground;
                if c == esc_codes::DECALN_ALIGNMENT {
                    handler.handle(Event::AlignmentDisplay);
                } else {
                    handler.handle(Event::Debug(Unhandled::Sharp { finalizer: c }));
                }
            }
            State::Percent => {
                self.state = State::Ground;
                self.select_other_charset(c);
            }
            State::Charset(mode) => {
                self.state = State::Ground;
                // Designations are only honored outside UTF-8: see
                // https://www.cl.cam.ac.uk/~mgk25/unicode.html#term for the
                // why on the UTF-8 restriction.
                if !self.use_utf8 {
                    handler.handle(Event::DefineCharset { code: c, mode });
                }
            }
            State::Csi => self.advance_csi(c, handler),
            State::CsiIgnore => self.state = State::Ground,
            State::OscCode => match c {
                'R' | 'P' => {
                    // Palette reset/set. Not implemented.
                    self.state = State::Ground;
                }
                _ => {
                    self.osc_code = c;
                    self.osc_param.clear();
                    self.state = State::OscParam { escape_seen: false };
                }
            },
            State::OscParam { escape_seen } => self.advance_osc(c, escape_seen, handler),
        }
    }

    fn advance_ground<H: Handler>(&mut self, c: char, handler: &mut H) {
        match c {
            c0::ESC => self.state = State::Escape,
            c0::CSI_C1 => self.enter_csi(),
            c0::OSC_C1 => self.state = State::OscCode,
            c0::SI | c0::SO if self.use_utf8 => {
                // Shifts don't mix with UTF-8; ignore them.
            }
            c0::BEL | c0::BS | c0::HT | c0::LF | c0::VT | c0::FF | c0::CR | c0::SI
            | c0::SO => dispatch_basic(c, handler),
            c0::NUL | c0::DEL => {}
            _ => {
                let mut buf = [0u8; 4];
                handler.handle(Event::Draw(c.encode_utf8(&mut buf)));
            }
        }
    }

    fn advance_escape<H: Handler>(&mut self, c: char, handler: &mut H) {
        self.state = State::Ground;
        match c {
            '[' => self.enter_csi(),
            ']' => self.state = State::OscCode,
            esc_codes::SHARP => self.state = State::Sharp,
            esc_codes::PERCENT => self.state = State::Percent,
            esc_codes::G0_CHARSET | esc_codes::G1_CHARSET => {
                self.state = State::Charset(c);
            }
            esc_codes::RIS_RESET => handler.handle(Event::Reset),
            esc_codes::IND_INDEX => handler.handle(Event::Index),
            esc_codes::NEL_NEXT_LINE => handler.handle(Event::Linefeed),
            esc_codes::RI_REVERSE_INDEX => handler.handle(Event::ReverseIndex),
            esc_codes::HTS_SET_TAB_STOP => handler.handle(Event::SetTabStop),
            esc_codes::DECSC_SAVE_CURSOR => handler.handle(Event::SaveCursor),
            esc_codes::DECRC_RESTORE_CURSOR => handler.handle(Event::RestoreCursor),
            _ => handler.handle(Event::Debug(Unhandled::Escape { finalizer: c })),
        }
    }

    fn enter_csi(&mut self) {
        self.state = State::Csi;
        self.params.clear();
        self.current = 0;
        self.private = false;
    }

    fn advance_csi<H: Handler>(&mut self, c: char, handler: &mut H) {
        match c {
            '?' => self.private = true,
            // These controls are executed inline and do not end the
            // sequence.
            c0::BEL | c0::BS | c0::HT | c0::LF | c0::VT | c0::FF | c0::CR => {
                dispatch_basic(c, handler);
            }
            c0::SP | '>' => {
                // Secondary DA is not supported.
            }
            '$' => {
                // XTerm-specific CSI ... $ <c> sequences are not supported.
                self.state = State::CsiIgnore;
            }
            c0::CAN | c0::SUB => {
                // The current sequence is aborted; the terminal displays
                // the substitute character itself.
                let mut buf = [0u8; 4];
                handler.handle(Event::Draw(c.encode_utf8(&mut buf)));
                self.state = State::Ground;
            }
            '0'..='9' => {
                self.current = self
                    .current
                    .saturating_mul(10)
                    .saturating_add(u32::from(c) - u32::from('0'));
            }
            ';' => self.push_param(),
            _ => {
                self.push_param();
                self.dispatch_csi(c, handler);
                self.state = State::Ground;
            }
        }
    }

    /// Close out the parameter under accumulation. Any parameter greater
    /// than 9999 is set to 9999; an empty one reads as 0.
    fn push_param(&mut self) {
        self.params.push(self.current.min(9999) as u16);
        self.current = 0;
    }

    fn dispatch_csi<H: Handler>(&self, finalizer: char, handler: &mut H) {
        let param = |n: usize| self.params.get(n).copied().unwrap_or(0);

        let event = match finalizer {
            csi_codes::ICH_INSERT_CHARACTERS => Event::InsertCharacters(param(0)),
            csi_codes::CUU_CURSOR_UP => Event::CursorUp(param(0)),
            csi_codes::CUD_CURSOR_DOWN | csi_codes::VPR_CURSOR_DOWN => {
                Event::CursorDown(param(0))
            }
            csi_codes::CUF_CURSOR_FORWARD | csi_codes::HPR_CURSOR_FORWARD => {
                Event::CursorForward(param(0))
            }
            csi_codes::CUB_CURSOR_BACK => Event::CursorBack(param(0)),
            csi_codes::CNL_CURSOR_DOWN_1 => Event::CursorDown1(param(0)),
            csi_codes::CPL_CURSOR_UP_1 => Event::CursorUp1(param(0)),
            csi_codes::CHA_CURSOR_TO_COLUMN | csi_codes::HPA_CURSOR_TO_COLUMN => {
                Event::CursorToColumn(param(0))
            }
            csi_codes::CUP_CURSOR_POSITION | csi_codes::HVP_CURSOR_POSITION => {
                Event::CursorPosition {
                    line: param(0),
                    column: param(1),
                }
            }
            csi_codes::ED_ERASE_IN_DISPLAY => Event::EraseInDisplay {
                how: param(0),
                private: self.private,
            },
            csi_codes::EL_ERASE_IN_LINE => Event::EraseInLine {
                how: param(0),
                private: self.private,
            },
            csi_codes::IL_INSERT_LINES => Event::InsertLines(param(0)),
            csi_codes::DL_DELETE_LINES => Event::DeleteLines(param(0)),
            csi_codes::DCH_DELETE_CHARACTERS => Event::DeleteCharacters(param(0)),
            csi_codes::ECH_ERASE_CHARACTERS => Event::EraseCharacters(param(0)),
            csi_codes::TBC_CLEAR_TAB_STOP => Event::ClearTabStop(param(0)),
            csi_codes::SM_SET_MODE => Event::SetMode {
                modes: &self.params,
                private: self.private,
            },
            csi_codes::RM_RESET_MODE => Event::ResetMode {
                modes: &self.params,
                private: self.private,
            },
            csi_codes::SGR_SELECT_GRAPHIC_RENDITION => {
                Event::SelectGraphicRendition(&self.params)
            }
            csi_codes::DA_DEVICE_ATTRIBUTES => Event::ReportDeviceAttributes {
                mode: param(0),
                private: self.private,
            },
            csi_codes::DSR_DEVICE_STATUS => Event::ReportDeviceStatus(param(0)),
            csi_codes::DECSTBM_SET_MARGINS => Event::SetMargins {
                top: param(0),
                bottom: self.params.get(1).copied(),
            },
            _ => Event::Debug(Unhandled::Csi {
                params: &self.params,
                private: self.private,
                finalizer,
            }),
        };

        handler.handle(event);
    }

    fn advance_osc<H: Handler>(&mut self, c: char, escape_seen: bool, handler: &mut H) {
        if escape_seen {
            if c == '\\' {
                // ST, 7-bit form.
                self.dispatch_osc(handler);
                self.state = State::Ground;
            } else {
                // Not a terminator after all; both characters belong to the
                // string.
                self.osc_param.push(c0::ESC);
                self.osc_param.push(c);
                self.state = State::OscParam { escape_seen: false };
            }
            return;
        }

        match c {
            c0::ESC => self.state = State::OscParam { escape_seen: true },
            c0::ST_C1 | c0::BEL => {
                self.dispatch_osc(handler);
                self.state = State::Ground;
            }
            _ => self.osc_param.push(c),
        }
    }

    fn dispatch_osc<H: Handler>(&mut self, handler: &mut H) {
        // Drop the `;` separating the code from the string.
        let mut chars = self.osc_param.chars();
        chars.next();
        let param = chars.as_str();

        if matches!(self.osc_code, '0' | '1') {
            handler.handle(Event::SetIconName(param));
        }
        if matches!(self.osc_code, '0' | '2') {
            handler.handle(Event::SetTitle(param));
        }
    }

    /// `ESC % c`: select another coding system. Only meaningful on a
    /// byte-oriented stream; we follow `TERM=linux` and use this solely to
    /// switch between ISO 8859-1 and UTF-8.
    fn select_other_charset(&mut self, code: char) {
        if !self.coding_switch_enabled {
            return;
        }
        match code {
            esc_codes::CODING_DEFAULT => {
                tracing::trace!("ESC % @: switching to single-byte input");
                self.use_utf8 = false;
            }
            esc_codes::CODING_UTF8 | esc_codes::CODING_UTF8_OBSOLETE => {
                tracing::trace!("ESC % {code}: switching to UTF-8 input");
                self.use_utf8 = true;
            }
            _ => {}
        }
    }
}

fn dispatch_basic<H: Handler>(c: char, handler: &mut H) {
    let event = match c {
        c0::BEL => Event::Bell,
        c0::BS => Event::Backspace,
        c0::HT => Event::Tab,
        c0::LF | c0::VT | c0::FF => Event::Linefeed,
        c0::CR => Event::CarriageReturn,
        c0::SO => Event::ShiftOut,
        c0::SI => Event::ShiftIn,
        _ => unreachable!("not a basic control: {c:?}"),
    };
    handler.handle(event);
}
