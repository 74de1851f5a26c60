//! This module contains some error and result definitions used in this crate.

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). Failures of the solving process itself are
/// represented by [Contradiction](struct.Contradiction.html) instead.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the box size specified for a created Sudoku is invalid.
    /// This is the case if it is zero or so large that the candidate values of
    /// a cell no longer fit into a [ValueSet](../util/struct.ValueSet.html).
    InvalidDimensions,

    /// Indicates that some value is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that a cell index lies outside the grid in question, that is,
    /// it is greater than or equal to the total number of cells.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when loading a puzzle from its
/// text representation. These are input-shape problems, which are recovered
/// locally: loading aborts without mutating any cell state, so the caller may
/// re-prompt. They are distinct from a
/// [Contradiction](struct.Contradiction.html), which is a logical
/// impossibility discovered while solving.
#[derive(Debug, Eq, PartialEq)]
pub enum ValidationError {

    /// Indicates that the puzzle text does not contain exactly one row per
    /// grid row. Carries the number of rows that were found.
    WrongRowCount(usize),

    /// Indicates that some row of the puzzle text does not contain exactly one
    /// character per column. Carries the index of the offending row and the
    /// number of characters it holds.
    WrongRowLength(usize, usize)
}

/// Syntactic sugar for `Result<V, ValidationError>`.
pub type LoadResult<V> = Result<V, ValidationError>;

/// The error raised when a cell's candidate set becomes empty during
/// propagation. This means the loaded clues, together with all deductions made
/// so far, admit no solution. The solver's state is left as it was at the
/// point the contradiction was discovered; callers wanting a clean slate must
/// restore the puzzle before retrying.
#[derive(Debug, Eq, PartialEq)]
pub struct Contradiction {

    /// The index of the cell whose candidate set was emptied.
    pub cell: usize
}

/// Syntactic sugar for `Result<V, Contradiction>`.
pub type SolveResult<V> = Result<V, Contradiction>;
