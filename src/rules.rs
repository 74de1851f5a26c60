//! This module contains the deduction algorithms applied by the propagation
//! engine to one group at a time, as well as the [Algorithms] configuration
//! that toggles them.
//!
//! All algorithms are monotone: they only ever narrow candidate sets. The
//! order in which they run within a group therefore only affects how quickly a
//! fixed point is reached, never the correctness of the result.

use crate::cell::{self, Cell};
use crate::engine::{AffectedGroups, KIND_ORDER};
use crate::error::SolveResult;
use crate::topology::{GroupKind, Topology};
use crate::util::ValueSet;

use serde::{Deserialize, Serialize};

/// The configuration of the deduction algorithms the propagation engine
/// applies to each dirty group. Every algorithm can be toggled independently;
/// changes take effect on the next resolve.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Algorithms {

    /// The maximum subset size considered by the group exclusion algorithm
    /// (naked subsets). Size 1 is the sole-candidate base case which
    /// propagates already-fixed cells to their peers. A value of 0 disables
    /// the algorithm entirely.
    pub group_exclude_max_size: usize,

    /// Enables the sole-cell-for-value algorithm (hidden singles): a cell
    /// holding the only occurrence of a candidate value within a group is
    /// fixed to that value.
    pub only_cell_for_value: bool,

    /// Enables line-crossing-box elimination (pointing pairs/triples and
    /// box-line reduction): a value confined to cells that also share a group
    /// of another kind is excluded from the rest of that other group.
    pub line_cross_box: bool
}

impl Default for Algorithms {

    /// The default configuration enables all algorithms, with naked subsets
    /// considered up to size 3.
    fn default() -> Algorithms {
        Algorithms {
            group_exclude_max_size: 3,
            only_cell_for_value: true,
            line_cross_box: true
        }
    }
}

/// Runs every algorithm enabled in `algorithms` against the given group,
/// recording touched groups in `affected`.
///
/// # Errors
///
/// Any `Contradiction` raised by an algorithm, which aborts the remaining
/// algorithms for this group.
pub(crate) fn apply_all(cells: &mut [Cell], topology: &Topology,
        kind: GroupKind, group: &[usize], algorithms: &Algorithms,
        affected: &mut AffectedGroups) -> SolveResult<()> {
    for size in 1..=algorithms.group_exclude_max_size {
        group_exclude_of_size(cells, topology, group, size, affected)?;
    }

    if algorithms.only_cell_for_value {
        only_cell_for_value(cells, topology, group, affected)?;
    }

    if algorithms.line_cross_box {
        line_cross_box(cells, topology, kind, group, affected)?;
    }

    Ok(())
}

/// The naked subset rule for one subset size: if some `size` cells of the
/// group together admit exactly `size` values, no other cell of the group can
/// hold any of those values.
///
/// Size 1 is the sole-candidate base case: every fixed cell is frozen, which
/// propagates its value's exclusion to all peers.
///
/// For larger sizes there are two search paths. If exactly `size` cells are
/// small enough to participate, their combined candidates are checked
/// directly (the locked set case). With more participants, each one is
/// checked against its compatible peers within the group, which avoids
/// enumerating all subsets. Both paths produce identical exclusions; only the
/// search strategy differs.
pub(crate) fn group_exclude_of_size(cells: &mut [Cell], topology: &Topology,
        group: &[usize], size: usize, affected: &mut AffectedGroups)
        -> SolveResult<()> {
    if size == 1 {
        for &index in group {
            if let Some(value) = cells[index].candidates().as_single() {
                cell::freeze(cells, topology, index, value, affected)?;
            }
        }

        return Ok(());
    }

    let participants: Vec<usize> = group.iter()
        .copied()
        .filter(|&index| {
            let len = cells[index].candidates().len();
            len > 1 && len <= size
        })
        .collect();

    if participants.len() < size {
        return Ok(());
    }

    if participants.len() == size {
        let union = participants.iter()
            .fold(ValueSet::empty(),
                |union, &index| union | cells[index].candidates());

        if union.len() == size {
            for &other in group {
                if !participants.contains(&other) {
                    cell::exclude(cells, topology, other, union, affected)?;
                }
            }
        }

        return Ok(());
    }

    // More participants than the subset size: scan each participant for
    // compatible peers instead of enumerating all subsets.
    for &candidate in &participants {
        let candidate_set = cells[candidate].candidates();
        let saturated = candidate_set.len() == size;
        let mut members = vec![candidate];
        let mut union = candidate_set;

        for &peer in &participants {
            if peer == candidate {
                continue;
            }

            let peer_set = cells[peer].candidates();
            // A saturated participant can only absorb subsets of its own
            // candidates; an unsaturated one needs peers that contribute a
            // value it lacks, otherwise the exact path above covers the set.
            let compatible = if saturated {
                peer_set.is_subset(&candidate_set)
            }
            else {
                !(peer_set - candidate_set).is_empty()
            };

            if compatible && (peer_set | candidate_set).len() <= size {
                members.push(peer);
                union |= peer_set;
            }
        }

        if members.len() == size && union.len() == size {
            for &other in group {
                if !members.contains(&other) {
                    cell::exclude(cells, topology, other, union, affected)?;
                }
            }
        }
    }

    Ok(())
}

/// The hidden single rule: a not-yet-fixed cell holding a candidate value
/// that appears in no other cell of the group must take that value and is
/// frozen to it.
pub(crate) fn only_cell_for_value(cells: &mut [Cell], topology: &Topology,
        group: &[usize], affected: &mut AffectedGroups) -> SolveResult<()> {
    for &index in group {
        if cells[index].is_fixed() {
            continue;
        }

        let others = group.iter()
            .copied()
            .filter(|&other| other != index)
            .fold(ValueSet::empty(),
                |union, other| union | cells[other].candidates());
        let unique = cells[index].candidates() - others;

        if let Some(value) = unique.iter().next() {
            cell::freeze(cells, topology, index, value, affected)?;
        }
    }

    Ok(())
}

/// The line-crossing-box rule: for each domain value, if every group cell
/// still admitting the value also lies in a single group of a different kind,
/// the value can be excluded from all other cells of that crossing group.
/// This covers pointing pairs/triples and box-line reduction uniformly.
pub(crate) fn line_cross_box(cells: &mut [Cell], topology: &Topology,
        kind: GroupKind, group: &[usize], affected: &mut AffectedGroups)
        -> SolveResult<()> {
    for value in 1..=topology.size() {
        let admitting: Vec<usize> = group.iter()
            .copied()
            .filter(|&index| cells[index].candidates().contains(value))
            .collect();

        if admitting.is_empty() {
            continue;
        }

        for &cross_kind in &KIND_ORDER {
            if cross_kind == kind {
                continue;
            }

            if let Some(cross_index) =
                    shared_group(topology, cross_kind, &admitting) {
                for &other in &topology.groups(cross_kind)[cross_index] {
                    if !admitting.contains(&other) {
                        cell::exclude(cells, topology, other,
                            ValueSet::singleton(value), affected)?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// If all given cells lie in the same group of the given kind, returns that
/// group's index, otherwise `None`. `indices` must not be empty.
fn shared_group(topology: &Topology, kind: GroupKind, indices: &[usize])
        -> Option<usize> {
    let first = topology.group_of(kind, indices[0]);

    if indices[1..].iter().all(|&i| topology.group_of(kind, i) == first) {
        Some(first)
    }
    else {
        None
    }
}
