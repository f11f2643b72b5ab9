// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The screen model: a sparse cell matrix plus cursor, margins, modes,
//! charsets, tab stops and save points.
//!
//! ```text
//! ╭─────────────────╮    ╭──────────────╮    ╭─────────────────╮
//! │ Child process   │───▶│ ByteStream / │───▶│ Screen          │
//! │ (vim, bash...)  │    │ Stream       │    │ (this module)   │
//! ╰─────────────────╯    ╰──────────────╯    ╰─────────────────╯
//!                      bytes → `Event`s    events → cell matrix
//! ```
//!
//! The operations are split across one file per concern, the way the wire
//! protocol groups them:
//!
//! - [`char_ops`]: drawing text, ICH / DCH / ECH
//! - [`line_ops`]: IL / DL, EL, ED, DECALN
//! - [`cursor_ops`]: movement, CUP, tab, backspace, DECSC / DECRC
//! - [`scroll_ops`]: IND / RI / NEL, DECSTBM margins
//! - [`mode_ops`]: SM / RM, including the DECSCNM repaint and DECCOLM resize
//! - [`sgr_ops`]: SGR, including 256-color and 24-bit extensions
//! - [`charset_ops`]: SI / SO and G0/G1 designation
//! - [`tab_ops`]: HTS / TBC
//! - [`terminal_ops`]: RIS, resize, title / icon name, bell, debug sink
//! - [`dsr_ops`]: DA / DSR reports and the pending reply queue

pub mod char_ops;
pub mod charset_ops;
pub mod cursor_ops;
pub mod dsr_ops;
pub mod line_ops;
pub mod mode_ops;
pub mod scroll_ops;
pub mod sgr_ops;
pub mod tab_ops;
pub mod terminal_ops;

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::{
    charsets::CharsetTable,
    event::{Event, Handler},
    grid::{Buffer, BufferView, Cell, Line, Style},
    mode::{DECSCNM, Mode},
};

/// The screen cursor.
///
/// `x` may transiently equal `columns` - the "pending wrap" state entered by
/// drawing in the last column; the next draw or an explicit move resolves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    /// 0-based column, `0..=columns`.
    pub x: usize,
    /// 0-based row, `0..lines`.
    pub y: usize,
    /// Visibility, toggled by DECTCEM (and by history paging).
    pub hidden: bool,
    /// The cell written by `draw` and used for erasure.
    pub attrs: Cell,
}

/// The scroll region: 0-based inclusive top and bottom row indices.
/// Invariant: `top < bottom`, both within the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
}

/// One entry of the DECSC/DECRC stack.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Savepoint {
    pub cursor: Cursor,
    pub g0_charset: CharsetTable,
    pub g1_charset: CharsetTable,
    pub charset: usize,
    pub origin: bool,
    pub wrap: bool,
}

/// The set of rows whose content changed since the consumer last cleared it.
/// When tracking is disabled the set is a no-op sink and stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Dirty {
    enabled: bool,
    rows: FxHashSet<usize>,
}

impl Dirty {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            rows: FxHashSet::default(),
        }
    }

    pub(crate) fn add(&mut self, y: usize) {
        if self.enabled {
            self.rows.insert(y);
        }
    }

    pub(crate) fn extend(&mut self, rows: impl IntoIterator<Item = usize>) {
        if self.enabled {
            self.rows.extend(rows);
        }
    }

    /// The consumer is responsible for calling this once changes have been
    /// applied.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[must_use]
    pub fn contains(&self, y: usize) -> bool {
        self.rows.contains(&y)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Construction knobs for [`Screen`]. Both default to the full-featured
/// behavior; turning them off trades features for cycles.
#[derive(Debug, Clone, Copy)]
pub struct ScreenOptions {
    /// Keep the [`Screen::dirty`] row set up to date. Off means `dirty` is
    /// always empty.
    pub track_dirty_lines: bool,
    /// Turn `select_graphic_rendition` into a cursor-attribute reset,
    /// ignoring its parameters. For consumers that never look at styling.
    pub disable_display_graphic: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            track_dirty_lines: true,
            disable_display_graphic: false,
        }
    }
}

/// An in-memory terminal screen: the `TERM=linux` subset of VT100/VT220/VT520.
///
/// A screen can be driven by a [`crate::Stream`]/[`crate::ByteStream`], or
/// given explicit commands through its methods. Consumers read back through
/// [`Screen::display`], [`Screen::buffer`], [`Screen::cursor`] and
/// [`Screen::dirty`].
///
/// ```
/// use r3bl_vt100::{Screen, Stream};
///
/// let mut screen = Screen::new(80, 24);
/// let mut stream = Stream::new();
/// stream.feed("Hello, world!", &mut screen);
/// assert_eq!(&screen.display()[0][0..13], "Hello, world!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub(crate) columns: usize,
    pub(crate) lines: usize,
    pub(crate) buffer: Buffer,
    /// Rows changed since the consumer last cleared the set.
    pub dirty: Dirty,
    pub(crate) cursor: Cursor,
    pub(crate) margins: Margins,
    pub(crate) mode: FxHashSet<Mode>,
    pub(crate) title: String,
    pub(crate) icon_name: String,
    /// Active charset: 0 selects G0, 1 selects G1.
    pub(crate) charset: usize,
    pub(crate) g0_charset: CharsetTable,
    pub(crate) g1_charset: CharsetTable,
    pub(crate) tabstops: BTreeSet<usize>,
    pub(crate) savepoints: Vec<Savepoint>,
    pub(crate) saved_columns: Option<usize>,
    pub(crate) disable_display_graphic: bool,
    pub(crate) reply_buf: String,
    /// When set (by the history screen), lines evicted by scrolling are
    /// moved into the queues below instead of being dropped.
    pub(crate) record_scrolled: bool,
    /// Lines scrolled off the top margin since the last drain.
    pub(crate) scrolled_off_top: Vec<Line>,
    /// Lines scrolled off the bottom margin since the last drain.
    pub(crate) scrolled_off_bottom: Vec<Line>,
}

impl Screen {
    /// A `columns x lines` screen with default options.
    #[must_use]
    pub fn new(columns: usize, lines: usize) -> Self {
        Self::with_options(columns, lines, ScreenOptions::default())
    }

    /// A `columns x lines` screen with explicit [`ScreenOptions`].
    #[must_use]
    pub fn with_options(columns: usize, lines: usize, options: ScreenOptions) -> Self {
        let mut screen = Self {
            columns,
            lines,
            buffer: Buffer::new(),
            dirty: Dirty::new(options.track_dirty_lines),
            cursor: Cursor {
                x: 0,
                y: 0,
                hidden: false,
                attrs: Cell::space(Style::default()),
            },
            margins: Margins {
                top: 0,
                bottom: lines.saturating_sub(1),
            },
            mode: FxHashSet::default(),
            title: String::new(),
            icon_name: String::new(),
            charset: 0,
            g0_charset: CharsetTable::Latin1,
            g1_charset: CharsetTable::Vt100Graphics,
            tabstops: BTreeSet::new(),
            savepoints: Vec::new(),
            saved_columns: None,
            disable_display_graphic: options.disable_display_graphic,
            reply_buf: String::new(),
            record_scrolled: false,
            scrolled_off_top: Vec::new(),
            scrolled_off_bottom: Vec::new(),
        };
        screen.reset();
        screen
    }

    /// Screen width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Screen height.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// The cursor: position, visibility, attributes.
    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The scroll region.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Whether a mode is currently set.
    #[must_use]
    pub fn has_mode(&self, mode: Mode) -> bool {
        self.mode.contains(&mode)
    }

    /// Last title set through OSC 0/2.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last icon name set through OSC 0/1.
    #[must_use]
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    /// The cell absent coordinates represent: a space in the current default
    /// style, reversed while DECSCNM is active.
    #[must_use]
    pub fn default_char(&self) -> Cell {
        let style = Style {
            reverse: self.mode.contains(&DECSCNM),
            ..Style::default()
        };
        Cell::space(style)
    }

    pub(crate) fn default_line(&self) -> Line {
        Line::new(self.default_char())
    }

    /// A read-only view of the cell matrix; absent coordinates synthesize
    /// the defaults.
    #[must_use]
    pub fn buffer(&self) -> BufferView<'_> {
        BufferView::new(&self.buffer, self.lines, self.default_char())
    }

    /// The visible frame as `lines` strings.
    ///
    /// Gaps and absent rows are filled with spaces; the zero-width stub that
    /// follows a width-2 cell is skipped, so a row holding wide characters
    /// renders fewer `char`s than `columns` while still spanning `columns`
    /// display cells.
    #[must_use]
    pub fn display(&self) -> Vec<String> {
        (0..self.lines).map(|y| self.render_row(y)).collect()
    }

    fn render_row(&self, y: usize) -> String {
        let Some(line) = self.buffer.get(y) else {
            return " ".repeat(self.columns);
        };

        let mut out = String::with_capacity(self.columns);
        let mut next_x = 0;
        let mut is_wide_char = false;
        for (x, cell) in line.iter() {
            if x >= self.columns {
                break;
            }
            for _ in next_x..x {
                out.push(' ');
            }
            next_x = x + 1;

            if is_wide_char {
                // Skip the stub cell.
                is_wide_char = false;
                continue;
            }
            is_wide_char = cell.width == 2;
            out.push_str(&cell.data);
        }
        for _ in next_x..self.columns {
            out.push(' ');
        }
        out
    }

    /// [`Screen::display`] with optional whitespace compression: strip each
    /// row on the left/right, and drop all-blank rows from the top/bottom of
    /// the frame.
    #[must_use]
    pub fn compressed_display(
        &self,
        tfilter: bool,
        bfilter: bool,
        lstrip: bool,
        rstrip: bool,
    ) -> Vec<String> {
        let mut rows: Vec<String> = self
            .display()
            .into_iter()
            .map(|row| {
                let stripped = match (lstrip, rstrip) {
                    (true, true) => row.trim(),
                    (true, false) => row.trim_start(),
                    (false, true) => row.trim_end(),
                    (false, false) => row.as_str(),
                };
                stripped.to_string()
            })
            .collect();

        if bfilter {
            while rows.last().is_some_and(|row| row.trim().is_empty()) {
                rows.pop();
            }
        }
        if tfilter {
            let keep = rows
                .iter()
                .position(|row| !row.trim().is_empty())
                .unwrap_or(rows.len());
            rows.drain(..keep);
        }
        rows
    }

    /// The line at `y` as an owned value: a clone of the stored line, or an
    /// empty line with the current default. Used by the history screen when
    /// a row is about to scroll away.
    pub(crate) fn clone_line(&self, y: usize) -> Line {
        self.buffer
            .get(y)
            .cloned()
            .unwrap_or_else(|| self.default_line())
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        self.dirty.extend(0..self.lines);
    }
}

impl Handler for Screen {
    /// The static binding from decoded events to screen operations.
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Draw(data) => self.draw(data),
            Event::Bell => self.bell(),
            Event::Backspace => self.backspace(),
            Event::Tab => self.tab(),
            Event::Linefeed => self.linefeed(),
            Event::CarriageReturn => self.carriage_return(),
            Event::ShiftOut => self.shift_out(),
            Event::ShiftIn => self.shift_in(),
            Event::Reset => self.reset(),
            Event::Index => self.index(),
            Event::ReverseIndex => self.reverse_index(),
            Event::SetTabStop => self.set_tab_stop(),
            Event::SaveCursor => self.save_cursor(),
            Event::RestoreCursor => self.restore_cursor(),
            Event::AlignmentDisplay => self.alignment_display(),
            Event::DefineCharset { code, mode } => self.define_charset(code, mode),
            Event::InsertCharacters(count) => self.insert_characters(count),
            Event::CursorUp(count) => self.cursor_up(count),
            Event::CursorDown(count) => self.cursor_down(count),
            Event::CursorForward(count) => self.cursor_forward(count),
            Event::CursorBack(count) => self.cursor_back(count),
            Event::CursorDown1(count) => self.cursor_down1(count),
            Event::CursorUp1(count) => self.cursor_up1(count),
            Event::CursorToColumn(column) => self.cursor_to_column(column),
            Event::CursorToLine(line) => self.cursor_to_line(line),
            Event::CursorPosition { line, column } => self.cursor_position(line, column),
            Event::EraseInDisplay { how, private } => self.erase_in_display(how, private),
            Event::EraseInLine { how, private } => self.erase_in_line(how, private),
            Event::InsertLines(count) => self.insert_lines(count),
            Event::DeleteLines(count) => self.delete_lines(count),
            Event::DeleteCharacters(count) => self.delete_characters(count),
            Event::EraseCharacters(count) => self.erase_characters(count),
            Event::ClearTabStop(how) => self.clear_tab_stop(how),
            Event::SetMode { modes, private } => self.set_mode(modes, private),
            Event::ResetMode { modes, private } => self.reset_mode(modes, private),
            Event::SelectGraphicRendition(attrs) => self.select_graphic_rendition(attrs),
            Event::ReportDeviceAttributes { mode, private } => {
                self.report_device_attributes(mode, private);
            }
            Event::ReportDeviceStatus(mode) => self.report_device_status(mode),
            Event::SetMargins { top, bottom } => self.set_margins(Some(top), bottom),
            Event::SetTitle(title) => self.set_title(title),
            Event::SetIconName(name) => self.set_icon_name(name),
            Event::Debug(unhandled) => self.debug(unhandled),
        }
    }
}
