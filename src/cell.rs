//! This module contains the definition of a grid [Cell] together with the
//! `freeze` and `exclude` mutations, which operate on the full cell slice of a
//! puzzle since they propagate to peer cells.

use crate::engine::AffectedGroups;
use crate::error::{Contradiction, SolveResult};
use crate::topology::Topology;
use crate::util::ValueSet;

/// A single cell of a puzzle grid. It holds the set of candidate values the
/// cell could still take and, if the cell was given as a clue, its origin
/// value.
///
/// Two invariants hold for every consistent puzzle: the candidate set is never
/// empty (emptiness signals a contradiction and aborts propagation), and a
/// cell with an origin has exactly that value as its only candidate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    origin: Option<usize>,
    candidates: ValueSet
}

impl Cell {

    /// Creates a new cell with no origin and the full candidate set
    /// `[1, size]`.
    pub(crate) fn new(size: usize) -> Cell {
        Cell {
            origin: None,
            candidates: ValueSet::full(size)
        }
    }

    /// Gets the origin value of this cell, that is, the value it was given as
    /// a clue at load time, or `None` if the cell was not given. UI
    /// collaborators use this to style given cells differently from deduced
    /// ones.
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    /// Gets the set of values this cell could still hold, consistent with all
    /// deductions applied so far.
    pub fn candidates(&self) -> ValueSet {
        self.candidates
    }

    /// Indicates whether this cell is fixed, i.e. has at most one candidate
    /// left. Both origin cells and cells whose value was deduced count as
    /// fixed.
    pub fn is_fixed(&self) -> bool {
        self.candidates.len() <= 1
    }

    /// Clears the origin and restores the full candidate set `[1, size]`.
    /// Peers are not affected.
    pub(crate) fn reset(&mut self, size: usize) {
        self.origin = None;
        self.candidates = ValueSet::full(size);
    }

    /// Marks this cell as given with the provided value, collapsing the
    /// candidate set to exactly that value. This does not propagate any
    /// exclusion to peers; propagation is the engine's job and is invoked
    /// separately after load.
    pub(crate) fn set_origin(&mut self, value: usize) {
        self.origin = Some(value);
        self.candidates = ValueSet::singleton(value);
    }

    /// Discards every deduction made on this cell: the candidate set becomes
    /// the origin value if the cell was given, or the full set `[1, size]`
    /// otherwise.
    pub(crate) fn restore(&mut self, size: usize) {
        match self.origin {
            Some(value) => self.candidates = ValueSet::singleton(value),
            None => self.candidates = ValueSet::full(size)
        }
    }

    /// Renders the state of this cell for display: `"x"` if the candidate set
    /// is empty (the contradiction marker), the empty string if no deduction
    /// has narrowed the cell yet (all `size` values remain), and otherwise the
    /// remaining candidates in ascending order joined by `/`.
    pub fn display_value(&self, size: usize) -> String {
        if self.candidates.is_empty() {
            return String::from("x");
        }

        if self.candidates.len() == size {
            return String::new();
        }

        self.candidates.iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join("/")
    }
}

/// Fixes the cell at `index` to the given value and removes that value from
/// the candidate set of every peer that still admits it. Every such removal
/// records the peer's row, column, and box in `affected` so the next
/// propagation round re-examines them.
///
/// # Errors
///
/// `Contradiction` carrying the offending peer's index if a removal empties a
/// peer's candidate set. In particular, a peer given as a clue with this very
/// value has only that value left, so conflicting clues surface here.
pub fn freeze(cells: &mut [Cell], topology: &Topology, index: usize,
        value: usize, affected: &mut AffectedGroups) -> SolveResult<()> {
    cells[index].candidates = ValueSet::singleton(value);

    for &peer in topology.peers(index) {
        if !cells[peer].candidates.remove(value) {
            continue;
        }

        if cells[peer].candidates.is_empty() {
            return Err(Contradiction { cell: peer });
        }

        affected.mark_cell(topology, peer);
    }

    Ok(())
}

/// Removes the given values from the candidate set of the cell at `index`.
/// Cells with an origin are never changed, and neither is a cell whose
/// candidate set does not intersect `values`. If exactly one candidate
/// remains, the cell is frozen to it instead, which cascades to its peers (see
/// [freeze]). Otherwise the narrowed cell's own row, column, and box are
/// recorded in `affected`.
///
/// # Errors
///
/// `Contradiction` carrying this cell's index if the removal would empty its
/// candidate set, or a propagated contradiction from [freeze].
pub fn exclude(cells: &mut [Cell], topology: &Topology, index: usize,
        values: ValueSet, affected: &mut AffectedGroups) -> SolveResult<()> {
    if cells[index].origin.is_some() {
        return Ok(());
    }

    let remaining = cells[index].candidates - values;

    if remaining == cells[index].candidates {
        return Ok(());
    }

    if remaining.is_empty() {
        return Err(Contradiction { cell: index });
    }

    if let Some(value) = remaining.as_single() {
        return freeze(cells, topology, index, value, affected);
    }

    cells[index].candidates = remaining;
    affected.mark_cell(topology, index);
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::set;

    fn fresh_grid(box_size: usize) -> (Topology, Vec<Cell>) {
        let topology = Topology::new(box_size).unwrap();
        let cells = vec![Cell::new(topology.size()); topology.cell_count()];
        (topology, cells)
    }

    #[test]
    fn new_cell_is_unconstrained() {
        let cell = Cell::new(4);

        assert_eq!(None, cell.origin());
        assert_eq!(ValueSet::full(4), cell.candidates());
        assert!(!cell.is_fixed());
    }

    #[test]
    fn origin_cell_has_singleton_candidates() {
        let mut cell = Cell::new(4);
        cell.set_origin(3);

        assert_eq!(Some(3), cell.origin());
        assert_eq!(set!(3), cell.candidates());
        assert!(cell.is_fixed());
    }

    #[test]
    fn restore_keeps_origin_and_clears_deductions() {
        let mut given = Cell::new(4);
        given.set_origin(2);
        given.restore(4);
        assert_eq!(set!(2), given.candidates());

        let mut open = Cell::new(4);
        open.candidates = set!(1, 3);
        open.restore(4);
        assert_eq!(ValueSet::full(4), open.candidates());
    }

    #[test]
    fn display_values() {
        let mut cell = Cell::new(9);
        assert_eq!("", cell.display_value(9));

        cell.candidates = set!(7, 2, 5);
        assert_eq!("2/5/7", cell.display_value(9));

        cell.candidates = set!(4);
        assert_eq!("4", cell.display_value(9));

        cell.candidates = ValueSet::empty();
        assert_eq!("x", cell.display_value(9));
    }

    #[test]
    fn freeze_prunes_peers() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();

        freeze(&mut cells, &topology, 0, 1, &mut affected).unwrap();

        assert_eq!(set!(1), cells[0].candidates());
        assert_eq!(set!(2, 3, 4), cells[1].candidates());
        assert_eq!(set!(2, 3, 4), cells[4].candidates());
        assert_eq!(set!(2, 3, 4), cells[5].candidates());
        // Cell 6 shares no group with cell 0.
        assert_eq!(ValueSet::full(4), cells[6].candidates());
        assert!(!affected.is_empty());
    }

    #[test]
    fn freeze_detects_conflicting_clue() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();
        cells[1].set_origin(3);

        let result = freeze(&mut cells, &topology, 0, 3, &mut affected);

        assert_eq!(Err(Contradiction { cell: 1 }), result);
    }

    #[test]
    fn exclude_is_noop_on_origin_cells() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();
        cells[0].set_origin(2);

        exclude(&mut cells, &topology, 0, set!(2), &mut affected).unwrap();

        assert_eq!(set!(2), cells[0].candidates());
        assert!(affected.is_empty());
    }

    #[test]
    fn exclude_is_noop_without_overlap() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();
        cells[0].candidates = set!(1, 2);

        exclude(&mut cells, &topology, 0, set!(3, 4), &mut affected).unwrap();

        assert_eq!(set!(1, 2), cells[0].candidates());
        assert!(affected.is_empty());
    }

    #[test]
    fn exclude_narrows_and_marks_own_groups() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();

        exclude(&mut cells, &topology, 5, set!(1, 2), &mut affected).unwrap();

        assert_eq!(set!(3, 4), cells[5].candidates());
        assert!(!affected.is_empty());
        // No peer was touched.
        assert_eq!(ValueSet::full(4), cells[4].candidates());
    }

    #[test]
    fn exclude_to_single_candidate_freezes() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();

        exclude(&mut cells, &topology, 0, set!(1, 2, 3), &mut affected)
            .unwrap();

        assert_eq!(set!(4), cells[0].candidates());
        assert!(cells[0].is_fixed());
        assert_eq!(set!(1, 2, 3), cells[1].candidates());
    }

    #[test]
    fn exclude_to_empty_is_contradiction() {
        let (topology, mut cells) = fresh_grid(2);
        let mut affected = AffectedGroups::new();
        cells[5].candidates = set!(1, 2);

        let result =
            exclude(&mut cells, &topology, 5, set!(1, 2), &mut affected);

        assert_eq!(Err(Contradiction { cell: 5 }), result);
    }
}
