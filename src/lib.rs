// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a constraint-propagation engine for
//! Latin-square-type grid puzzles (Sudoku). Unlike a backtracking solver, it
//! never guesses: it only prunes the candidate sets of cells by logical
//! deduction and stops once no deduction applies anymore. If the configured
//! algorithms are insufficient for a puzzle, the result is a partial,
//! multi-valued grid rather than a wrong answer.
//!
//! The key pieces are:
//!
//! * A [Topology](topology::Topology) deriving the row/column/box partitions
//! of the grid from a single box dimension
//! * [Cells](cell::Cell) holding candidate-value sets, with freeze and
//! exclude mutations that cascade to peer cells
//! * A propagation [engine] that re-examines only the groups touched since
//! the last round, until a fixed point is reached
//! * Pluggable deduction [rules] (naked subsets by size, hidden singles, and
//! line-crossing-box elimination), each independently toggleable
//!
//! # Loading and solving a puzzle
//!
//! Puzzles are loaded from a simple text format: one row per
//! whitespace-separated token, one character per cell, where digits are given
//! clues and any other character (conventionally `*`) is an unknown cell.
//!
//! ```
//! use sudoku_deduction::Sudoku;
//!
//! let mut sudoku = Sudoku::new(3).unwrap();
//! sudoku.load("\
//!     **5****4*\n\
//!     **2***8**\n\
//!     *7812**59\n\
//!     ****43***\n\
//!     **9*6*4**\n\
//!     ***51****\n\
//!     96**8571*\n\
//!     **4***5**\n\
//!     *1****9**").unwrap();
//! sudoku.resolve().unwrap();
//!
//! assert!(sudoku.is_solved());
//! ```
//!
//! # Reading cell state
//!
//! After propagation, each cell reports its state for display: its value if
//! it is decided, the remaining candidates if it is merely narrowed.
//!
//! ```
//! use sudoku_deduction::Sudoku;
//!
//! let mut sudoku = Sudoku::new(2).unwrap();
//! sudoku.load("12**\n****\n****\n****").unwrap();
//! sudoku.resolve().unwrap();
//!
//! // The remaining cells of the first row can only hold 3 or 4.
//! assert_eq!("3/4", sudoku.cells()[2].display_value(4));
//! ```
//!
//! # Failure modes
//!
//! Malformed puzzle text is rejected before any cell is touched, while
//! contradictory clues surface during propagation:
//!
//! ```
//! use sudoku_deduction::Sudoku;
//! use sudoku_deduction::error::ValidationError;
//!
//! let mut sudoku = Sudoku::new(3).unwrap();
//! assert_eq!(Err(ValidationError::WrongRowCount(2)),
//!     sudoku.load("too short"));
//! ```

pub mod cell;
pub mod engine;
pub mod error;
pub mod rules;
pub mod topology;
pub mod util;

use cell::Cell;
use error::{
    LoadResult,
    SolveResult,
    SudokuError,
    SudokuResult,
    ValidationError
};
use rules::Algorithms;
use topology::Topology;
use util::ValueSet;

use std::fmt::{self, Display, Error, Formatter};

/// A Sudoku puzzle being solved by deduction. It owns the grid
/// [Topology](topology::Topology), one [Cell](cell::Cell) per grid position,
/// and the [Algorithms](rules::Algorithms) configuration applied by
/// [Sudoku::resolve].
///
/// A single instance is not safe for concurrent mutation; callers must
/// serialize `load`/`resolve`/`exclude` calls on one instance.
#[derive(Clone)]
pub struct Sudoku {
    topology: Topology,
    cells: Vec<Cell>,
    algorithms: Algorithms
}

fn to_char(cell: &Cell) -> char {
    if let Some(value) = cell.candidates().as_single() {
        ('0' as u8 + value as u8) as char
    }
    else if cell.candidates().is_empty() {
        'x'
    }
    else {
        ' '
    }
}

fn line(sudoku: &Sudoku, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = sudoku.topology.size();
    let box_size = sudoku.topology.box_size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(sudoku: &Sudoku) -> String {
    line(sudoku, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(sudoku: &Sudoku) -> String {
    line(sudoku, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(sudoku: &Sudoku) -> String {
    line(sudoku, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(sudoku: &Sudoku) -> String {
    line(sudoku, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(sudoku: &Sudoku, y: usize) -> String {
    let size = sudoku.topology.size();
    line(sudoku, '║', '║', '│', |x| to_char(&sudoku.cells[y * size + x]), ' ',
        '║', true)
}

impl Display for Sudoku {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.topology.size();
        let box_size = self.topology.box_size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % box_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl Sudoku {

    /// Creates a new, empty Sudoku for the given box size, with all cells
    /// unconstrained and the default [Algorithms](rules::Algorithms)
    /// configuration. For classic Sudoku, the box size is 3.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDimensions` if `box_size` is invalid (see
    /// [Topology::new](topology::Topology::new)).
    pub fn new(box_size: usize) -> SudokuResult<Sudoku> {
        let topology = Topology::new(box_size)?;
        let cells = vec![Cell::new(topology.size()); topology.cell_count()];

        Ok(Sudoku {
            topology,
            cells,
            algorithms: Algorithms::default()
        })
    }

    /// Gets the [Topology](topology::Topology) of this puzzle's grid.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Gets the cells of this puzzle in row-major order, i.e. left-to-right,
    /// top-to-bottom.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at the given index.
    ///
    /// # Errors
    ///
    /// `SudokuError::OutOfBounds` if `index` is not less than the total
    /// number of cells.
    pub fn cell(&self, index: usize) -> SudokuResult<&Cell> {
        self.cells.get(index).ok_or(SudokuError::OutOfBounds)
    }

    /// Gets the configuration of deduction algorithms applied by
    /// [Sudoku::resolve].
    pub fn algorithms(&self) -> &Algorithms {
        &self.algorithms
    }

    /// Gets a mutable reference to the configuration of deduction algorithms.
    /// Changes take effect on the next call to [Sudoku::resolve].
    pub fn algorithms_mut(&mut self) -> &mut Algorithms {
        &mut self.algorithms
    }

    /// Replaces the configuration of deduction algorithms. Changes take
    /// effect on the next call to [Sudoku::resolve].
    pub fn set_algorithms(&mut self, algorithms: Algorithms) {
        self.algorithms = algorithms;
    }

    /// Marks the cell at the given index as given with the provided value.
    /// The cell's candidate set collapses to exactly that value, but no
    /// exclusions are propagated to peers; that happens during the next
    /// [Sudoku::resolve].
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` if `index` is not less than the total
    /// number of cells.
    /// * `SudokuError::InvalidNumber` if `value` is not in the range
    /// `[1, size]`.
    pub fn set_origin(&mut self, index: usize, value: usize)
            -> SudokuResult<()> {
        if index >= self.cells.len() {
            return Err(SudokuError::OutOfBounds);
        }

        if value == 0 || value > self.topology.size() {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index].set_origin(value);
        Ok(())
    }

    /// Loads a puzzle from its text representation: whitespace-separated
    /// rows, one character per cell. A character that parses as a digit in
    /// `[1, size]` becomes a given clue via [Sudoku::set_origin]; any other
    /// character leaves the cell unchanged. Since each cell is encoded by a
    /// single character, only grids up to size 9 can be expressed.
    ///
    /// Loading does not run propagation; callers invoke [Sudoku::resolve]
    /// afterwards. Cells retain their prior state, so a fresh load after a
    /// previous puzzle should be preceded by [Sudoku::reset].
    ///
    /// # Errors
    ///
    /// `ValidationError` if the text does not have exactly `size` rows of
    /// `size` characters each. In that case, no cell state is mutated.
    pub fn load(&mut self, text: &str) -> LoadResult<()> {
        let size = self.topology.size();
        let rows: Vec<&str> = text.split_whitespace().collect();

        if rows.len() != size {
            return Err(ValidationError::WrongRowCount(rows.len()));
        }

        for (row_index, row) in rows.iter().enumerate() {
            let len = row.chars().count();

            if len != size {
                return Err(ValidationError::WrongRowLength(row_index, len));
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, c) in row.chars().enumerate() {
                if let Some(digit) = c.to_digit(10) {
                    let value = digit as usize;

                    if value >= 1 && value <= size {
                        self.cells[row_index * size + col_index]
                            .set_origin(value);
                    }
                }
            }
        }

        Ok(())
    }

    /// Runs constraint propagation to a fixed point, applying the enabled
    /// deduction algorithms to every group that still needs examination (see
    /// [engine::resolve]). Calling this again without intervening changes is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// `Contradiction` if the clues admit no solution. The cells are left
    /// as-mutated; use [Sudoku::restore] to return to the loaded clues.
    pub fn resolve(&mut self) -> SolveResult<()> {
        engine::resolve(&mut self.cells, &self.topology, &self.algorithms)
    }

    /// Fixes the cell at the given index to the provided value and
    /// immediately removes that value from the candidate sets of all peers
    /// (see [cell::freeze]). Group changes caused by this are picked up by
    /// the next [Sudoku::resolve], which re-examines all groups.
    ///
    /// # Errors
    ///
    /// `Contradiction` if a peer's candidate set is emptied.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds or `value` is not in `[1, size]`.
    pub fn freeze(&mut self, index: usize, value: usize) -> SolveResult<()> {
        assert!(value >= 1 && value <= self.topology.size());

        let mut affected = engine::AffectedGroups::new();
        cell::freeze(&mut self.cells, &self.topology, index, value,
            &mut affected)
    }

    /// Removes the given values from the candidate set of the cell at the
    /// given index (see [cell::exclude]). Cells with an origin are not
    /// changed.
    ///
    /// # Errors
    ///
    /// `Contradiction` if the cell's candidate set is emptied.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn exclude(&mut self, index: usize, values: ValueSet)
            -> SolveResult<()> {
        let mut affected = engine::AffectedGroups::new();
        cell::exclude(&mut self.cells, &self.topology, index, values,
            &mut affected)
    }

    /// Clears the entire puzzle: all origins are removed and every cell's
    /// candidate set is restored to the full value domain.
    pub fn reset(&mut self) {
        let size = self.topology.size();

        for cell in &mut self.cells {
            cell.reset(size);
        }
    }

    /// Discards every deduction while preserving the given clues: cells with
    /// an origin return to exactly that value, all other cells to the full
    /// candidate set.
    pub fn restore(&mut self) {
        let size = self.topology.size();

        for cell in &mut self.cells {
            cell.restore(size);
        }
    }

    /// Indicates whether every cell is decided, i.e. has exactly one
    /// candidate left. Note that this does not re-verify the group
    /// constraints; the deduction algorithms never violate them.
    pub fn is_solved(&self) -> bool {
        self.cells.iter()
            .all(|cell| cell.candidates().len() == 1)
    }
}
