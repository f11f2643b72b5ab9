// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The sparse 2D matrix of screen rows, and its read-only view.

use std::collections::BTreeMap;

use super::{
    cell::Cell,
    line::{Line, LineView},
};

/// Sparse matrix of the screen: row index to [`Line`]. Absent rows logically
/// contain `columns` copies of the screen's current default cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buffer {
    lines: BTreeMap<usize, Line>,
}

impl Buffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The line at `y`, materializing an empty line with the given default
    /// first if the row is absent.
    pub fn line_at(&mut self, y: usize, default: Cell) -> &mut Line {
        self.lines.entry(y).or_insert_with(|| Line::new(default))
    }

    #[must_use]
    pub fn get(&self, y: usize) -> Option<&Line> {
        self.lines.get(&y)
    }

    pub fn get_mut(&mut self, y: usize) -> Option<&mut Line> {
        self.lines.get_mut(&y)
    }

    pub fn insert(&mut self, y: usize, line: Line) {
        self.lines.insert(y, line);
    }

    pub fn remove(&mut self, y: usize) -> Option<Line> {
        self.lines.remove(&y)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Occupied rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().map(|(&y, line)| (y, line))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Line)> {
        self.lines.iter_mut().map(|(&y, line)| (y, line))
    }

    /// Occupied rows in `range`, ascending. Snapshot for the vertical shift
    /// algorithms.
    pub(crate) fn rows_in(&self, range: impl std::ops::RangeBounds<usize>) -> Vec<usize> {
        self.lines.range(range).map(|(&y, _)| y).collect()
    }

    pub(crate) fn take_lines(&mut self) -> BTreeMap<usize, Line> {
        std::mem::take(&mut self.lines)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A read-only view of the whole screen matrix.
///
/// ```
/// use r3bl_vt100::Screen;
///
/// let mut screen = Screen::new(80, 24);
/// screen.draw("hi");
/// let view = screen.buffer();
/// assert_eq!(view.line(0).char_at(0).data.as_str(), "h");
/// assert_eq!(view.line(0).char_at(79).data.as_str(), " "); // Synthesized.
/// ```
#[derive(Debug)]
pub struct BufferView<'a> {
    buffer: &'a Buffer,
    lines: usize,
    default: Cell,
}

impl<'a> BufferView<'a> {
    pub(crate) fn new(buffer: &'a Buffer, lines: usize, default: Cell) -> Self {
        Self {
            buffer,
            lines,
            default,
        }
    }

    /// A view of row `y`. Rows the buffer does not hold read as all-default.
    #[must_use]
    pub fn line(&self, y: usize) -> LineView<'a> {
        LineView::new(self.buffer.get(y), self.default.clone())
    }

    /// Screen height in rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}
