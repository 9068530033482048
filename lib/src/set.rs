//! The live-cell set.
//!
//! An open-addressed, linear-probing hash set storing [`Point`]s directly
//! in a flat slot array. There are no tombstones: deletion repairs the
//! probe chains in place, and growth rehashes the whole table with the
//! same relocation pass.

use crate::point::Point;

/// Number of slots a set starts with, unless overridden.
const INITIAL_SLOTS: usize = 16384;

/// Occupancy threshold that triggers doubling, as the fraction
/// `LOAD_NUM / LOAD_DEN`.
const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

/// Where a probe for a point ended up.
enum Probe {
    /// The point is stored at this index.
    Found(usize),
    /// The point is absent; this is the first empty slot in its chain.
    Vacant(usize),
    /// The probe cycled through a completely full table without a match.
    Full,
}

/// How far a relocation pass scans.
#[derive(Clone, Copy, PartialEq)]
enum Relayout {
    /// Scan forward (wrapping) and stop at the first empty slot after the
    /// start. Used after a deletion opens a hole.
    StopAtGap,
    /// Visit every slot from the start to the end of the table. Used after
    /// growth, when any entry may have a new home.
    FullScan,
}

/// A sparse set of live cells.
///
/// Lookups, insertions and removals are expected O(1). The set keeps its
/// occupancy at or below 3/4 by doubling its slot array, so a probe always
/// terminates at an empty slot.
///
/// Slot storage is owned exclusively by the set; [`to_vec`](Self::to_vec)
/// hands out independent copies, never views into the table.
#[derive(Clone, Debug)]
pub struct PointSet {
    /// The slot array; `None` is an empty slot.
    slots: Vec<Option<Point>>,
    /// Number of occupied slots.
    len: usize,
}

impl PointSet {
    /// Creates an empty set with the default number of slots.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_SLOTS)
    }

    /// Creates an empty set with at least one slot.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            slots: vec![None; slots.max(1)],
            len: 0,
        }
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empties the set without shrinking its slot array.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }

    /// Whether `p` is in the set.
    pub fn contains(&self, p: &Point) -> bool {
        matches!(self.probe(p), Probe::Found(_))
    }

    /// Inserts `p`, returning `false` if it was already present.
    ///
    /// Doubles the slot array first whenever the insertion would push the
    /// occupancy above 3/4.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.contains(&p) {
            return false;
        }
        if (self.len + 1) * LOAD_DEN > self.slots.len() * LOAD_NUM {
            self.grow();
        }
        match self.probe(&p) {
            Probe::Found(_) => false,
            Probe::Vacant(i) => {
                self.slots[i] = Some(p);
                self.len += 1;
                true
            }
            // Growth keeps at least a quarter of the slots empty.
            Probe::Full => false,
        }
    }

    /// Removes `p`, returning `false` if it was absent.
    ///
    /// The freed slot may have interrupted the probe chains of entries
    /// stored after it; a stop-at-gap relayout repairs them.
    pub fn remove(&mut self, p: &Point) -> bool {
        match self.probe(p) {
            Probe::Found(i) => {
                self.slots[i] = None;
                self.relayout(i, Relayout::StopAtGap);
                self.len -= 1;
                true
            }
            Probe::Vacant(_) | Probe::Full => false,
        }
    }

    /// An independent snapshot of all members, in slot order.
    pub fn to_vec(&self) -> Vec<Point> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Probes for `p` from its home slot, stepping +1 with wraparound.
    fn probe(&self, p: &Point) -> Probe {
        let cap = self.slots.len();
        let start = (p.hash() % cap as u64) as usize;
        let mut i = start;
        loop {
            match &self.slots[i] {
                None => return Probe::Vacant(i),
                Some(q) if q == p => return Probe::Found(i),
                Some(_) => {}
            }
            i += 1;
            if i == cap {
                i = 0;
            }
            if i == start {
                return Probe::Full;
            }
        }
    }

    /// Doubles the slot array and rehashes every entry in place.
    fn grow(&mut self) {
        let doubled = self.slots.len() * 2;
        self.slots.resize(doubled, None);
        self.relayout(0, Relayout::FullScan);
    }

    /// Relocates entries whose probe chain no longer reaches them.
    ///
    /// Each occupied slot from `start` onward is re-probed from its own
    /// home; an entry cut off by an empty slot is moved into that slot,
    /// vacating its old one. `mode` decides whether the scan stops at the
    /// first gap (deletion) or covers the whole table (growth).
    fn relayout(&mut self, start: usize, mode: Relayout) {
        let cap = self.slots.len();
        let mut i = start;
        for _ in 0..cap {
            match self.slots[i] {
                Some(p) => {
                    if let Probe::Vacant(home) = self.probe(&p) {
                        self.slots[home] = Some(p);
                        self.slots[i] = None;
                    }
                }
                None => {
                    if mode == Relayout::StopAtGap && i != start {
                        break;
                    }
                }
            }
            i += 1;
            if i == cap {
                if mode == Relayout::FullScan {
                    break;
                }
                i = 0;
            }
        }
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}
