//! The best-first search loop over open and closed node sets.

use log::debug;
use waypath_core::Grid;

use crate::annotate;
use crate::distance::euclidean;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::nodeset::{NodeSet, SearchNode};

/// Terminal result of one search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The target was extracted from the frontier; carries the final
    /// annotated board snapshot.
    Succeeded(Grid),
    /// The frontier emptied before the target was reached: no route exists.
    Exhausted,
    /// A node-set invariant was violated mid-run; the search stopped.
    Failed(SearchError),
}

/// Run a search over `grid` from its start cell to its target cell.
///
/// The grid is annotated in place: every expanded cell except the start is
/// stamped as route. See [`run_search_with`] to observe each step.
pub fn run_search(grid: &mut Grid) -> SearchOutcome {
    run_search_with(grid, |_| {})
}

/// Run a search over `grid`, invoking `on_step` with the annotated board
/// after every completed step and once more when the target is reached.
///
/// The search expands the frontier entry with the lowest priority (step
/// count so far plus straight-line estimate to the target), one cell per
/// step, over 8-connected neighbors with uniform step cost. A frontier
/// coordinate rediscovered at a cost that is not strictly worse than the
/// existing entry is inserted alongside it rather than merged, so the open
/// set may briefly hold several entries for one cell.
pub fn run_search_with<F>(grid: &mut Grid, mut on_step: F) -> SearchOutcome
where
    F: FnMut(&Grid),
{
    let capacity = grid.cell_count();
    let start = grid.start();
    let target = grid.target();

    let mut open = NodeSet::with_capacity(capacity);
    let mut closed = NodeSet::with_capacity(capacity);
    let mut neighbors = Neighbors::new();

    if let Err(err) = open.insert(SearchNode {
        pos: start,
        cost: 0.0,
        priority: euclidean(start, target),
    }) {
        return SearchOutcome::Failed(err);
    }

    while !open.is_empty() {
        let extracted = match open.extract_min() {
            Ok(node) => node,
            Err(err) => return SearchOutcome::Failed(err),
        };

        if extracted.pos == target {
            debug!(
                "target {} reached with cost {}, {} cells expanded",
                target,
                extracted.cost,
                closed.len()
            );
            let explored = closed.iter().map(|node| node.pos).chain([extracted.pos]);
            annotate::stamp(grid, explored);
            on_step(grid);
            return SearchOutcome::Succeeded(grid.clone());
        }

        for &n in neighbors.passable(extracted.pos, grid) {
            if closed.contains(n).is_some() {
                continue;
            }
            let cost = extracted.cost + 1.0;
            let priority = cost + euclidean(n, target);
            if let Some(idx) = open.contains(n) {
                // Keep the existing entry when it is strictly cheaper; a
                // rediscovery at equal or better cost goes in alongside it.
                if open.get(idx).is_some_and(|existing| existing.cost < cost) {
                    continue;
                }
            }
            if let Err(err) = open.insert(SearchNode {
                pos: n,
                cost,
                priority,
            }) {
                return SearchOutcome::Failed(err);
            }
        }

        if let Err(err) = closed.insert(extracted) {
            return SearchOutcome::Failed(err);
        }
        debug!(
            "expanded {}, open {} closed {}",
            extracted.pos,
            open.len(),
            closed.len()
        );

        annotate::stamp(grid, closed.iter().map(|node| node.pos));
        on_step(grid);
    }

    debug!("frontier exhausted, no route to {}", target);
    SearchOutcome::Exhausted
}
