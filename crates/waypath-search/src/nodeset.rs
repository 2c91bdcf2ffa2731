//! Fixed-capacity node storage for the open and closed sets.

use waypath_core::Point;

use crate::error::SearchError;

/// A frontier or explored entry: a position with its accumulated cost and
/// extraction priority.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    /// Accumulated step count from the start cell (g). Diagonal and
    /// orthogonal steps both cost 1.
    pub cost: f64,
    /// Extraction key (f): cost plus the straight-line estimate to the
    /// target.
    pub priority: f64,
}

/// An unordered bag of [`SearchNode`]s with a fixed capacity.
///
/// Storage is a slot array scanned left to right. Inserts take the
/// lowest-index free slot and freed slots are immediately reusable, so slot
/// order is insertion order among entries that have not been displaced. One
/// search uses two of these: the open set (frontier) and the closed set
/// (already expanded), each sized to the board's cell count.
///
/// The same coordinate may be live in more than one slot; membership checks
/// only ever report the first match in scan order.
#[derive(Debug, Clone)]
pub struct NodeSet {
    slots: Vec<Option<SearchNode>>,
    live: usize,
}

impl NodeSet {
    /// Create an empty set that can hold up to `capacity` live entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            live: 0,
        }
    }

    /// Maximum number of live entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no entries are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Store `node` in the lowest-index free slot.
    ///
    /// Fails with [`SearchError::CapacityExceeded`] when every slot is live.
    pub fn insert(&mut self, node: SearchNode) -> Result<(), SearchError> {
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none()) else {
            return Err(SearchError::CapacityExceeded);
        };
        *slot = Some(node);
        self.live += 1;
        Ok(())
    }

    /// Remove and return the live entry with the smallest priority.
    ///
    /// Ties resolve to the first entry found in a left-to-right slot scan.
    /// Fails with [`SearchError::EmptyCollection`] when no entry is live.
    pub fn extract_min(&mut self) -> Result<SearchNode, SearchError> {
        let mut best: Option<usize> = None;
        let mut best_priority = f64::INFINITY;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(node) = slot {
                if node.priority < best_priority {
                    best = Some(i);
                    best_priority = node.priority;
                }
            }
        }
        match best.and_then(|i| self.slots[i].take()) {
            Some(node) => {
                self.live -= 1;
                Ok(node)
            }
            None => Err(SearchError::EmptyCollection),
        }
    }

    /// Slot index of the first live entry at `pos`, comparing positions only.
    pub fn contains(&self, pos: Point) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|node| node.pos == pos))
    }

    /// The live entry in slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SearchNode> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Free the slot of the first live entry at `pos` and return it.
    ///
    /// Fails with [`SearchError::NotFound`] when no live entry matches.
    pub fn remove(&mut self, pos: Point) -> Result<SearchNode, SearchError> {
        let idx = self.contains(pos).ok_or(SearchError::NotFound)?;
        match self.slots[idx].take() {
            Some(node) => {
                self.live -= 1;
                Ok(node)
            }
            None => Err(SearchError::NotFound),
        }
    }

    /// Iterate over live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}
