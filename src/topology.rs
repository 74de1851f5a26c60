//! This module contains the definition of the grid [Topology], which derives
//! the fixed partition of cell indices into rows, columns, and boxes from a
//! single box dimension.

use crate::error::{SudokuError, SudokuResult};
use crate::util;

use std::collections::BTreeSet;

/// The three kinds of groups a grid is partitioned into. Every cell belongs to
/// exactly one group of each kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GroupKind {

    /// A horizontal line of cells.
    Row,

    /// A vertical line of cells.
    Col,

    /// A square block of cells with the side length of the box size.
    Box
}

/// The immutable topology of a square grid, computed once at construction and
/// shared read-only afterwards. For a box size `n`, the grid has `n²` values
/// per group and `n⁴` cells in total, indexed row-major. A classic Sudoku grid
/// has box size 3:
///
/// ```text
/// 00 01 02   03 04 05   06 07 08
/// 09 10 11   12 13 14   15 16 17
/// 18 19 20   21 22 23   24 25 26
///
/// 27 28 29   30 31 32   33 34 35
/// 36 37 38   39 40 41   42 43 44
/// 45 46 47   48 49 50   51 52 53
///
/// 54 55 56   57 58 59   60 61 62
/// 63 64 65   66 67 68   69 70 71
/// 72 73 74   75 76 77   78 79 80
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topology {
    box_size: usize,
    size: usize,
    cell_count: usize,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
    boxes: Vec<Vec<usize>>,
    peers: Vec<Vec<usize>>
}

impl Topology {

    /// Computes the topology for the given box size. This is a deterministic,
    /// pure function of `box_size`.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDimensions` if `box_size` is zero or so large that
    /// the value domain `[1, box_size²]` does not fit into a
    /// [ValueSet](../util/struct.ValueSet.html).
    pub fn new(box_size: usize) -> SudokuResult<Topology> {
        if box_size == 0 || box_size * box_size > util::MAX_VALUE {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_size * box_size;
        let cell_count = size * size;
        let rows: Vec<Vec<usize>> = (0..size)
            .map(|i| (i * size..(i + 1) * size).collect())
            .collect();
        let cols: Vec<Vec<usize>> = (0..size)
            .map(|j| (0..size).map(|i| j + i * size).collect())
            .collect();
        let boxes: Vec<Vec<usize>> = (0..size)
            .map(|b| {
                let box_row = b / box_size;
                let box_col = b % box_size;
                let corner = box_row * box_size * size + box_col * box_size;
                (0..box_size)
                    .flat_map(|i| {
                        let start = corner + i * size;
                        start..start + box_size
                    })
                    .collect()
            })
            .collect();
        let mut topology = Topology {
            box_size,
            size,
            cell_count,
            rows,
            cols,
            boxes,
            peers: Vec::new()
        };
        topology.peers = (0..cell_count)
            .map(|index| {
                let mut peers: BTreeSet<usize> = BTreeSet::new();
                peers.extend(&topology.rows[topology.row_of(index)]);
                peers.extend(&topology.cols[topology.col_of(index)]);
                peers.extend(&topology.boxes[topology.box_of(index)]);
                peers.remove(&index);
                peers.into_iter().collect()
            })
            .collect();

        Ok(topology)
    }

    /// Gets the side length of one box of the grid, e.g. 3 for classic Sudoku.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the number of cells in each row, column, and box, which is also
    /// the number of different values a cell can hold. This is the square of
    /// [Topology::box_size].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the total number of cells in the grid, i.e. the square of
    /// [Topology::size].
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Gets the row partition: `size` disjoint, ascending lists of `size` cell
    /// indices each, covering every cell exactly once.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Gets the column partition, analogous to [Topology::rows].
    pub fn cols(&self) -> &[Vec<usize>] {
        &self.cols
    }

    /// Gets the box partition, analogous to [Topology::rows]. Cells within a
    /// box are enumerated row-major.
    pub fn boxes(&self) -> &[Vec<usize>] {
        &self.boxes
    }

    /// Gets the partition of the given [GroupKind].
    pub fn groups(&self, kind: GroupKind) -> &[Vec<usize>] {
        match kind {
            GroupKind::Row => &self.rows,
            GroupKind::Col => &self.cols,
            GroupKind::Box => &self.boxes
        }
    }

    /// Gets the index of the row containing the given cell.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.size
    }

    /// Gets the index of the column containing the given cell.
    pub fn col_of(&self, index: usize) -> usize {
        index % self.size
    }

    /// Gets the index of the box containing the given cell.
    pub fn box_of(&self, index: usize) -> usize {
        let box_row = index / (self.box_size * self.size);
        let box_col = (index % self.size) / self.box_size;
        box_row * self.box_size + box_col
    }

    /// Gets the index of the group of the given [GroupKind] containing the
    /// given cell.
    pub fn group_of(&self, kind: GroupKind, index: usize) -> usize {
        match kind {
            GroupKind::Row => self.row_of(index),
            GroupKind::Col => self.col_of(index),
            GroupKind::Box => self.box_of(index)
        }
    }

    /// Gets the precomputed, ascending list of all other cell indices that
    /// share a row, column, or box with the given cell. For box sizes of at
    /// least 2 this contains at most `3 · (size − 1)` entries.
    pub fn peers(&self, index: usize) -> &[usize] {
        &self.peers[index]
    }
}
