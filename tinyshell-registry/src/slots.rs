//! Index-stable slot storage
//!
//! Growth policy:
//! - `insert` fills the lowest free slot; when every slot is occupied it
//!   grows the table by exactly one slot.
//! - `resize` sets the slot count explicitly. Growing adds free slots at the
//!   end, shrinking drops trailing slots and whatever they hold.
//! - Existing slots never move, so an index stays valid until a truncation
//!   removes it.
//! - An optional limit caps the slot count. Exceeding it, or failing to
//!   allocate, is a `Capacity` error and leaves the table unchanged.

use tinyshell_core::ShellError;

#[derive(Debug)]
pub struct SlotTable<T> {
    slots: Vec<Option<T>>,
    limit: Option<usize>,
}

impl<T> SlotTable<T> {
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { slots: Vec::new(), limit }
    }

    /// Number of slots, free ones included
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    /// Index of the first occupied slot matching `pred`
    pub fn position<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, item)| pred(item)).map(|(i, _)| i)
    }

    /// Store `item` in the next free slot and return its index
    pub fn insert(&mut self, item: T) -> Result<usize, ShellError> {
        if let Some(free) = self.slots.iter().position(Option::is_none) {
            self.slots[free] = Some(item);
            return Ok(free);
        }

        let len = self.slots.len();
        if self.limit.is_some_and(|limit| len >= limit) {
            return Err(ShellError::Capacity { len });
        }
        self.slots
            .try_reserve_exact(1)
            .map_err(|_| ShellError::Capacity { len })?;
        self.slots.push(Some(item));
        Ok(len)
    }

    /// Set the slot count to `new_len`, keeping the order of retained slots
    pub fn resize(&mut self, new_len: usize) -> Result<(), ShellError> {
        let len = self.slots.len();
        if new_len > len {
            if self.limit.is_some_and(|limit| new_len > limit) {
                return Err(ShellError::Capacity { len });
            }
            self.slots
                .try_reserve_exact(new_len - len)
                .map_err(|_| ShellError::Capacity { len })?;
            self.slots.resize_with(new_len, || None);
        } else {
            self.slots.truncate(new_len);
        }
        Ok(())
    }
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_grows_by_one() {
        let mut table = SlotTable::new();
        assert_eq!(table.insert("a").unwrap(), 0);
        assert_eq!(table.slot_count(), 1);
        assert_eq!(table.insert("b").unwrap(), 1);
        assert_eq!(table.slot_count(), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_fills_free_slots_first() {
        let mut table = SlotTable::new();
        table.resize(3).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.insert("a").unwrap(), 0);
        assert_eq!(table.insert("b").unwrap(), 1);
        assert_eq!(table.insert("c").unwrap(), 2);
        assert_eq!(table.insert("d").unwrap(), 3);
        assert_eq!(table.slot_count(), 4);
    }

    #[test]
    fn test_truncate_drops_trailing_entries() {
        let mut table = SlotTable::new();
        for item in ["a", "b", "c"] {
            table.insert(item).unwrap();
        }
        table.resize(2).unwrap();
        let items: Vec<_> = table.iter().map(|(_, s)| *s).collect();
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn test_limit_is_capacity_error() {
        let mut table = SlotTable::with_limit(Some(1));
        table.insert(1).unwrap();
        assert_eq!(table.insert(2), Err(ShellError::Capacity { len: 1 }));
        assert_eq!(table.resize(5), Err(ShellError::Capacity { len: 1 }));
        assert_eq!(table.len(), 1);
    }
}
