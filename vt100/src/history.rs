// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scrollback history and pagination on top of [`Screen`].
//!
//! Two bounded queues flank the live screen:
//!
//! ```text
//!      [ 1: .......]
//!      [ 2: .......]  <- top history
//!      [ 3: .......]
//!      ------------
//!      [ 4: .......]  l
//!      [ 5: .......]  i
//!      [ 6: .......]  v
//!      [ 7: .......]  e
//!      ------------
//!      [ 8: .......]
//!      [ 9: .......]  <- bottom history
//! ```
//!
//! A line scrolled off the top margin lands in the top queue; paging with
//! [`HistoryScreen::prev_page`] / [`HistoryScreen::next_page`] rotates lines
//! between the queues and the live buffer. `history.position` tracks the
//! view: `position == size` is the live screen, anything lower means the
//! view is scrolled back and the cursor is hidden regardless of DECTCEM.
//!
//! Every event flowing through [`Handler::handle`] first snaps the view back
//! to the live screen, so writes always land against reality, not against a
//! scrolled-back page.

use std::{
    collections::VecDeque,
    ops::{Deref, DerefMut},
};

use crate::{
    event::{Event, Handler},
    grid::Line,
    mode::DECTCEM,
    screen::{Screen, ScreenOptions},
};

/// Errors constructing a [`HistoryScreen`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HistoryError {
    /// The pagination ratio must lie in `(0, 1]`.
    #[error("history ratio must be within (0, 1], got {0}")]
    InvalidRatio(f32),
}

/// The scrollback state of a [`HistoryScreen`].
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Lines above the live screen, oldest at the front. Bounded by `size`.
    pub top: VecDeque<Line>,
    /// Lines below the live screen (only non-empty while scrolled back),
    /// nearest the screen at the front. Bounded by `size`.
    pub bottom: VecDeque<Line>,
    /// Fraction of the screen height each page step moves.
    pub ratio: f32,
    /// Maximum length of each queue.
    pub size: usize,
    /// View offset; `position == size` means the live screen is shown.
    pub position: usize,
}

/// A [`Screen`] that keeps a bounded scrollback and supports pagination.
///
/// Reads pass through to the inner screen via `Deref`. Mutation should go
/// through [`Handler::handle`] (that is, through a stream) or the methods on
/// this type: those run the history hooks. Methods reached through
/// `DerefMut` mutate the raw screen without the hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryScreen {
    screen: Screen,
    history: History,
}

impl Deref for HistoryScreen {
    type Target = Screen;

    fn deref(&self) -> &Screen {
        &self.screen
    }
}

impl DerefMut for HistoryScreen {
    fn deref_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }
}

impl HistoryScreen {
    /// A `columns x lines` screen keeping at most `history` lines in each
    /// queue and paging by `ceil(lines * ratio)` rows at a time.
    ///
    /// # Errors
    ///
    /// [`HistoryError::InvalidRatio`] unless `0 < ratio <= 1`.
    pub fn new(
        columns: usize,
        lines: usize,
        history: usize,
        ratio: f32,
    ) -> Result<Self, HistoryError> {
        Self::with_options(columns, lines, history, ratio, ScreenOptions::default())
    }

    /// [`HistoryScreen::new`] with explicit [`ScreenOptions`].
    ///
    /// # Errors
    ///
    /// [`HistoryError::InvalidRatio`] unless `0 < ratio <= 1`.
    pub fn with_options(
        columns: usize,
        lines: usize,
        history: usize,
        ratio: f32,
        options: ScreenOptions,
    ) -> Result<Self, HistoryError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(HistoryError::InvalidRatio(ratio));
        }
        let mut screen = Screen::with_options(columns, lines, options);
        screen.record_scrolled = true;
        Ok(Self {
            screen,
            history: History {
                top: VecDeque::new(),
                bottom: VecDeque::new(),
                ratio,
                size: history,
                position: history,
            },
        })
    }

    /// The scrollback state.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Page the view back until the live screen shows. Writes must always
    /// land against the live view, so every handled event runs this first.
    fn snap_to_live(&mut self) {
        while self.history.position < self.history.size && !self.history.bottom.is_empty()
        {
            self.next_page();
        }
    }

    /// The cursor is hidden while scrolled back, and otherwise follows
    /// DECTCEM.
    fn update_cursor_visibility(&mut self) {
        self.screen.cursor.hidden = !(self.history.position == self.history.size
            && self.screen.has_mode(DECTCEM));
    }

    /// Paging can resurrect lines recorded at a wider screen; cut every row
    /// back to the current width.
    fn truncate_lines(&mut self) {
        let columns = self.screen.columns;
        for (_, line) in self.screen.buffer.iter_mut() {
            line.truncate_columns(columns);
        }
    }

    fn reset_history(&mut self) {
        self.history.top.clear();
        self.history.bottom.clear();
        self.history.position = self.history.size;
    }

    /// Move the lines the screen scrolled out of its margins into the
    /// bounded queues. Scrolling happens inside `index`/`reverse_index`,
    /// which also run from `linefeed` and from autowrapped `draw`s - the
    /// screen records the evicted lines and this picks them up afterwards.
    fn drain_scrolled(&mut self) {
        for line in self.screen.scrolled_off_top.drain(..) {
            push_back_bounded(&mut self.history.top, line, self.history.size);
        }
        for line in self.screen.scrolled_off_bottom.drain(..) {
            push_back_bounded(&mut self.history.bottom, line, self.history.size);
        }
    }

    /// Run one screen operation with the history hooks around it: snap the
    /// view to the live screen first, then collect whatever scrolled out,
    /// then recompute cursor visibility.
    fn wrapped(&mut self, operation: impl FnOnce(&mut Screen)) {
        self.snap_to_live();
        operation(&mut self.screen);
        self.drain_scrolled();
        self.update_cursor_visibility();
    }

    /// [`Screen::index`]; a line scrolled off the top margin lands in the
    /// top queue.
    pub fn index(&mut self) {
        self.wrapped(Screen::index);
    }

    /// [`Screen::reverse_index`]; a line scrolled off the bottom margin
    /// lands in the bottom queue.
    pub fn reverse_index(&mut self) {
        self.wrapped(Screen::reverse_index);
    }

    /// [`Screen::linefeed`] with the history hooks.
    pub fn linefeed(&mut self) {
        self.wrapped(Screen::linefeed);
    }

    /// [`Screen::draw`] with the history hooks; autowrap may scroll any
    /// number of lines into the top queue.
    pub fn draw(&mut self, data: &str) {
        self.wrapped(|screen| screen.draw(data));
    }

    /// [`Screen::erase_in_display`]; `how == 3` also wipes the scrollback.
    pub fn erase_in_display(&mut self, how: u16, private: bool) {
        self.wrapped(|screen| screen.erase_in_display(how, private));
        if how == 3 {
            self.reset_history();
            self.update_cursor_visibility();
        }
    }

    /// [`Screen::reset`], also emptying both queues and returning the view
    /// to the live screen.
    pub fn reset(&mut self) {
        self.wrapped(Screen::reset);
        self.reset_history();
        self.update_cursor_visibility();
    }

    /// Move the view one page up through the history. Page size is
    /// `ceil(lines * ratio)`, so `ratio = 0.5` restores half a screen per
    /// step. A noop at the top of the history, or when fewer than a full
    /// screen of lines has ever scrolled off.
    pub fn prev_page(&mut self) {
        let lines = self.screen.lines;
        let size = self.history.size;

        if self.history.position > lines && !self.history.top.is_empty() {
            let mid = self
                .history
                .top
                .len()
                .min((lines as f32 * self.history.ratio).ceil() as usize);

            // The bottom `mid` rows of the live view go to the front of the
            // bottom queue, preserving top-to-bottom order.
            for y in (lines - mid..lines).rev() {
                let line = self.screen.clone_line(y);
                push_front_bounded(&mut self.history.bottom, line, size);
            }
            self.history.position -= mid;

            // Shift the surviving rows down; rows that would fall off the
            // bottom were just saved above.
            let old = self.screen.buffer.take_lines();
            for (y, line) in old {
                if y + mid < lines {
                    self.screen.buffer.insert(y + mid, line);
                }
            }

            // Restore rows [0, mid) from the top queue, newest first. Empty
            // lines stay absent - that is what absence means.
            for y in (0..mid).rev() {
                let line = self.history.top.pop_back().expect("mid <= top.len()");
                if !line.is_empty() {
                    self.screen.buffer.insert(y, line);
                }
            }

            self.screen.dirty.clear();
            self.screen.mark_all_dirty();
        }

        self.truncate_lines();
        self.update_cursor_visibility();
    }

    /// Move the view one page down through the history, the inverse of
    /// [`HistoryScreen::prev_page`]. A noop when the live screen is already
    /// shown.
    pub fn next_page(&mut self) {
        let lines = self.screen.lines;
        let size = self.history.size;

        if self.history.position < self.history.size && !self.history.bottom.is_empty() {
            let mid = self
                .history
                .bottom
                .len()
                .min((lines as f32 * self.history.ratio).ceil() as usize);

            // The top `mid` rows of the view go back to the top queue, in
            // row order.
            for y in 0..mid {
                let line = self.screen.clone_line(y);
                push_back_bounded(&mut self.history.top, line, size);
            }
            self.history.position += mid;

            // Shift the surviving rows up.
            let old = self.screen.buffer.take_lines();
            for (y, line) in old {
                if y >= mid {
                    self.screen.buffer.insert(y - mid, line);
                }
            }

            // Restore rows [lines - mid, lines) from the bottom queue.
            for y in lines - mid..lines {
                let line = self
                    .history
                    .bottom
                    .pop_front()
                    .expect("mid <= bottom.len()");
                if !line.is_empty() {
                    self.screen.buffer.insert(y, line);
                }
            }

            self.screen.dirty.clear();
            self.screen.mark_all_dirty();
        }

        self.truncate_lines();
        self.update_cursor_visibility();
    }
}

impl Handler for HistoryScreen {
    /// Route events through the history interceptions; everything else goes
    /// to the inner screen between the snap-to-live and visibility hooks.
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Reset => self.reset(),
            Event::EraseInDisplay { how, private } => self.erase_in_display(how, private),
            other => self.wrapped(|screen| screen.handle(other)),
        }
    }
}

/// Append to the back, evicting the front entry once `maxlen` is reached.
fn push_back_bounded(deque: &mut VecDeque<Line>, line: Line, maxlen: usize) {
    if maxlen == 0 {
        return;
    }
    if deque.len() >= maxlen {
        deque.pop_front();
    }
    deque.push_back(line);
}

/// Prepend to the front, evicting the back entry once `maxlen` is reached.
fn push_front_bounded(deque: &mut VecDeque<Line>, line: Line, maxlen: usize) {
    if maxlen == 0 {
        return;
    }
    if deque.len() >= maxlen {
        deque.pop_back();
    }
    deque.push_front(line);
}
