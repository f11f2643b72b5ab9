// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A sparse screen row.

use std::collections::BTreeMap;

use super::cell::{Cell, Style};

/// A sparse row of the screen: column index to [`Cell`], plus the `default`
/// cell that absent columns stand for.
///
/// Space characters may either be absent (the default is a space) or
/// explicitly present - they will be when written through a cursor whose
/// attributes differ from the line default.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    cells: BTreeMap<usize, Cell>,
    pub default: Cell,
}

impl Line {
    #[must_use]
    pub fn new(default: Cell) -> Self {
        Self {
            cells: BTreeMap::new(),
            default,
        }
    }

    /// Create or overwrite the cell at `x`.
    pub fn write(&mut self, x: usize, data: &str, width: u8, style: Style) {
        match self.cells.get_mut(&x) {
            Some(cell) => {
                cell.data.clear();
                cell.data.push_str(data);
                cell.width = width;
                cell.style = style;
            }
            None => {
                self.cells.insert(x, Cell::new(data, width, style));
            }
        }
    }

    /// The cell at `x`, materializing a copy of the line default first if the
    /// column is absent.
    pub fn char_at(&mut self, x: usize) -> &mut Cell {
        self.cells.entry(x).or_insert_with(|| self.default.clone())
    }

    #[must_use]
    pub fn get(&self, x: usize) -> Option<&Cell> {
        self.cells.get(&x)
    }

    pub fn insert(&mut self, x: usize, cell: Cell) {
        self.cells.insert(x, cell);
    }

    pub fn remove(&mut self, x: usize) -> Option<Cell> {
        self.cells.remove(&x)
    }

    /// Occupied columns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().map(|(&x, cell)| (x, cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.values_mut()
    }

    /// Occupied columns in `range`, ascending. The shift algorithms of
    /// insert/delete walk these snapshots.
    pub(crate) fn columns_in(
        &self,
        range: impl std::ops::RangeBounds<usize>,
    ) -> Vec<usize> {
        self.cells.range(range).map(|(&x, _)| x).collect()
    }

    /// Drop every cell at `columns` or beyond (shrinking resize, history
    /// page restore).
    pub(crate) fn truncate_columns(&mut self, columns: usize) {
        self.cells.split_off(&columns);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A read-only view of one row. Absent columns read as the row's default
/// cell (or the screen default, for a row the buffer does not hold at all).
#[derive(Debug)]
pub struct LineView<'a> {
    line: Option<&'a Line>,
    default: Cell,
}

impl<'a> LineView<'a> {
    pub(crate) fn new(line: Option<&'a Line>, screen_default: Cell) -> Self {
        let default = line.map_or(screen_default, |line| line.default.clone());
        Self { line, default }
    }

    /// The cell at column `x`, synthesized from the default when absent.
    #[must_use]
    pub fn char_at(&self, x: usize) -> Cell {
        self.line
            .and_then(|line| line.get(x))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}
