//! # Basic and non basic columns
//!
//! Partition of the column indices into the included (basic) and excluded (non basic) columns.
//! Toggling a column is constant time, listing either part is linear in its size.

/// Where a column can be found.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Slot {
    Included(usize),
    Excluded(usize),
}

/// Partition of `0..len` in two sets.
///
/// Each index is in exactly one of the two sets. Both sets are kept as a list, the position of
/// each index in its list is remembered such that it can be removed with a `swap_remove`.
///
/// Two selectors are equal when they include the same indices; the order of the lists depends on
/// the history of changes and is not compared.
#[derive(Debug, Clone)]
pub struct IndexSelector {
    slots: Vec<Slot>,
    included: Vec<usize>,
    excluded: Vec<usize>,
}

impl IndexSelector {
    /// Create a selector in which all indices are excluded.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(Slot::Excluded).collect(),
            included: Vec::new(),
            excluded: (0..len).collect(),
        }
    }

    /// Move an index to the included set. Does nothing if it was included already.
    pub fn include(&mut self, index: usize) {
        debug_assert!(index < self.len());

        if let Slot::Excluded(position) = self.slots[index] {
            Self::remove_at(&mut self.slots, &mut self.excluded, position);
            self.slots[index] = Slot::Included(self.included.len());
            self.included.push(index);
        }
    }

    /// Move an index to the excluded set. Does nothing if it was excluded already.
    pub fn exclude(&mut self, index: usize) {
        debug_assert!(index < self.len());

        if let Slot::Included(position) = self.slots[index] {
            Self::remove_at(&mut self.slots, &mut self.included, position);
            self.slots[index] = Slot::Excluded(self.excluded.len());
            self.excluded.push(index);
        }
    }

    fn remove_at(slots: &mut [Slot], list: &mut Vec<usize>, position: usize) {
        list.swap_remove(position);
        if let Some(&moved) = list.get(position) {
            slots[moved] = match slots[moved] {
                Slot::Included(_) => Slot::Included(position),
                Slot::Excluded(_) => Slot::Excluded(position),
            };
        }
    }

    /// Whether an index is in the included set.
    pub fn is_included(&self, index: usize) -> bool {
        debug_assert!(index < self.len());

        matches!(self.slots[index], Slot::Included(_))
    }

    /// The included indices, in no particular order.
    pub fn included(&self) -> &[usize] {
        &self.included
    }

    /// The excluded indices, in no particular order.
    pub fn excluded(&self) -> &[usize] {
        &self.excluded
    }

    /// Size of the included set.
    pub fn count_included(&self) -> usize {
        self.included.len()
    }

    /// Size of the excluded set.
    pub fn count_excluded(&self) -> usize {
        self.excluded.len()
    }

    /// Number of indices that are partitioned.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no indices at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl PartialEq for IndexSelector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && (0..self.len()).all(|index| self.is_included(index) == other.is_included(index))
    }
}
