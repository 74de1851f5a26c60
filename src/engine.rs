//! This module contains the propagation engine: the [AffectedGroups]
//! accumulator tracking which groups still need re-examination, and the
//! [resolve] loop which applies the deduction algorithms round by round until
//! a fixed point is reached.

use crate::cell::Cell;
use crate::error::SolveResult;
use crate::rules::{self, Algorithms};
use crate::topology::{GroupKind, Topology};

use std::collections::BTreeSet;
use std::mem;

/// The group kinds in the order in which dirty groups are processed within a
/// round. This order is a design choice, not guaranteed-optimal, but it is
/// kept stable so that propagation is deterministic.
pub(crate) const KIND_ORDER: [GroupKind; 3] =
    [GroupKind::Row, GroupKind::Col, GroupKind::Box];

/// Three deduplicated, ordered sets of dirty group indices, one per
/// [GroupKind]. Deduction algorithms append the groups they touched here;
/// the engine drains the accumulator to build the work list of the next
/// propagation round.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AffectedGroups {
    rows: BTreeSet<usize>,
    cols: BTreeSet<usize>,
    boxes: BTreeSet<usize>
}

impl AffectedGroups {

    /// Creates a new, empty accumulator.
    pub fn new() -> AffectedGroups {
        AffectedGroups::default()
    }

    /// Creates an accumulator in which every group of every kind is dirty,
    /// each exactly once. This is the initial state of [resolve].
    pub fn all(size: usize) -> AffectedGroups {
        AffectedGroups {
            rows: (0..size).collect(),
            cols: (0..size).collect(),
            boxes: (0..size).collect()
        }
    }

    /// Marks the group with the given index of the given kind as dirty.
    /// Marking a group twice has no further effect.
    pub fn mark(&mut self, kind: GroupKind, index: usize) {
        match kind {
            GroupKind::Row => self.rows.insert(index),
            GroupKind::Col => self.cols.insert(index),
            GroupKind::Box => self.boxes.insert(index)
        };
    }

    /// Marks the row, column, and box containing the given cell as dirty.
    pub fn mark_cell(&mut self, topology: &Topology, index: usize) {
        for &kind in &KIND_ORDER {
            self.mark(kind, topology.group_of(kind, index));
        }
    }

    /// Gets the dirty group indices of the given kind in ascending order.
    pub fn indices(&self, kind: GroupKind) -> impl Iterator<Item = usize> + '_ {
        match kind {
            GroupKind::Row => self.rows.iter().copied(),
            GroupKind::Col => self.cols.iter().copied(),
            GroupKind::Box => self.boxes.iter().copied()
        }
    }

    /// Indicates whether no group of any kind is dirty. This is the terminal
    /// state of [resolve].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty() && self.boxes.is_empty()
    }
}

/// Runs constraint propagation over the given cells to a fixed point.
///
/// Starting from a state in which every row, column, and box is dirty, each
/// round processes the dirty groups in a fixed order (rows, then columns, then
/// boxes, each ascending), running every enabled deduction algorithm against
/// each group. Algorithms mutate cells and mark further groups dirty for the
/// next round; the loop terminates once a round leaves no group dirty.
///
/// Convergence is guaranteed: every mutation strictly shrinks some cell's
/// candidate set, which is bounded below, so only finitely many rounds are
/// possible.
///
/// # Errors
///
/// `Contradiction` if any cell's candidate set is emptied, carrying the index
/// of that cell. The cells are left as they were at the point the
/// contradiction was discovered.
pub fn resolve(cells: &mut [Cell], topology: &Topology,
        algorithms: &Algorithms) -> SolveResult<()> {
    let mut dirty = AffectedGroups::all(topology.size());

    while !dirty.is_empty() {
        let round = mem::take(&mut dirty);

        for &kind in &KIND_ORDER {
            for group_index in round.indices(kind) {
                let group = &topology.groups(kind)[group_index];
                rules::apply_all(cells, topology, kind, group, algorithms,
                    &mut dirty)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::set;
    use crate::util::ValueSet;

    #[test]
    fn new_accumulator_is_empty() {
        let affected = AffectedGroups::new();

        assert!(affected.is_empty());
        assert_eq!(0, affected.indices(GroupKind::Row).count());
    }

    #[test]
    fn all_marks_every_group_once() {
        let affected = AffectedGroups::all(4);

        for &kind in &KIND_ORDER {
            let indices: Vec<usize> = affected.indices(kind).collect();
            assert_eq!(vec![0, 1, 2, 3], indices);
        }
    }

    #[test]
    fn marking_deduplicates_and_sorts() {
        let mut affected = AffectedGroups::new();
        affected.mark(GroupKind::Col, 5);
        affected.mark(GroupKind::Col, 2);
        affected.mark(GroupKind::Col, 5);

        let indices: Vec<usize> = affected.indices(GroupKind::Col).collect();
        assert_eq!(vec![2, 5], indices);
        assert_eq!(0, affected.indices(GroupKind::Row).count());
    }

    #[test]
    fn mark_cell_marks_all_three_kinds() {
        let topology = Topology::new(3).unwrap();
        let mut affected = AffectedGroups::new();
        affected.mark_cell(&topology, 40);

        assert_eq!(vec![4usize],
            affected.indices(GroupKind::Row).collect::<Vec<usize>>());
        assert_eq!(vec![4usize],
            affected.indices(GroupKind::Col).collect::<Vec<usize>>());
        assert_eq!(vec![4usize],
            affected.indices(GroupKind::Box).collect::<Vec<usize>>());
    }

    #[test]
    fn resolve_terminates_on_empty_grid() {
        let topology = Topology::new(2).unwrap();
        let mut cells = vec![Cell::new(topology.size());
            topology.cell_count()];

        resolve(&mut cells, &topology, &Algorithms::default()).unwrap();

        assert!(cells.iter()
            .all(|cell| cell.candidates() == ValueSet::full(4)));
    }

    #[test]
    fn resolve_propagates_single_clue() {
        let topology = Topology::new(2).unwrap();
        let mut cells = vec![Cell::new(topology.size());
            topology.cell_count()];
        cells[0].set_origin(1);

        resolve(&mut cells, &topology, &Algorithms::default()).unwrap();

        assert_eq!(set!(1), cells[0].candidates());
        assert_eq!(set!(2, 3, 4), cells[1].candidates());
        assert_eq!(set!(2, 3, 4), cells[12].candidates());
        assert_eq!(ValueSet::full(4), cells[10].candidates());
    }

    #[test]
    fn resolve_cascades_across_groups() {
        // Three clues in the first row force the fourth cell, whose value
        // must then be excluded from its column and box as well.
        let topology = Topology::new(2).unwrap();
        let mut cells = vec![Cell::new(topology.size());
            topology.cell_count()];
        cells[0].set_origin(1);
        cells[1].set_origin(2);
        cells[2].set_origin(3);

        resolve(&mut cells, &topology, &Algorithms::default()).unwrap();

        assert_eq!(set!(4), cells[3].candidates());
        assert!(!cells[7].candidates().contains(4));
        assert!(!cells[15].candidates().contains(4));
    }
}
