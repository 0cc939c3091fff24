//! Fixed-capacity slot zones.
//!
//! A `SlotZone` is an ordered array of optional entries. A slot is either
//! empty or holds exactly one entry; moving an entry between zones is a
//! `take` followed by a `place`, never a copy.
//!
//! Free-slot search always picks the lowest empty index.

use serde::{Deserialize, Serialize};

/// Fixed-capacity array of optional entries.
///
/// ## Usage
///
/// ```
/// use mana_ccg::zones::SlotZone;
///
/// let mut zone: SlotZone<u32> = SlotZone::with_capacity(3);
///
/// assert_eq!(zone.place_first_empty(10), Ok(0));
/// assert_eq!(zone.place_first_empty(11), Ok(1));
///
/// assert_eq!(zone.take(0), Some(10));
/// assert_eq!(zone.place_first_empty(12), Ok(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotZone<T> {
    slots: Vec<Option<T>>,
}

impl<T> SlotZone<T> {
    /// Create a zone with `capacity` empty slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get the entry in a slot. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Get a mutable entry in a slot.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Put an entry into a slot, returning the entry it replaced.
    ///
    /// Panics if `index` is outside the zone.
    pub fn place(&mut self, index: usize, entry: T) -> Option<T> {
        assert!(
            index < self.slots.len(),
            "Slot {} out of bounds for zone of capacity {}",
            index,
            self.slots.len()
        );
        self.slots[index].replace(entry)
    }

    /// Vacate a slot, returning its entry.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Lowest empty slot index, or `None` if the zone is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Place an entry into the lowest empty slot.
    ///
    /// Returns the slot index, or gives the entry back if the zone is full.
    pub fn place_first_empty(&mut self, entry: T) -> Result<usize, T> {
        match self.first_empty() {
            Some(index) => {
                self.slots[index] = Some(entry);
                Ok(index)
            }
            None => Err(entry),
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupied slots in increasing index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (i, e)))
    }

    /// Indices of occupied slots in increasing order.
    pub fn occupied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupied().map(|(i, _)| i)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zone_is_empty() {
        let zone: SlotZone<u32> = SlotZone::with_capacity(5);
        assert_eq!(zone.capacity(), 5);
        assert!(zone.is_empty());
        assert_eq!(zone.occupied_count(), 0);
        assert_eq!(zone.first_empty(), Some(0));
    }

    #[test]
    fn test_lowest_empty_slot_wins() {
        let mut zone = SlotZone::with_capacity(4);
        zone.place(0, 'a');
        zone.place(1, 'b');
        zone.place(3, 'd');

        assert_eq!(zone.first_empty(), Some(2));
        assert_eq!(zone.place_first_empty('c'), Ok(2));

        zone.take(1);
        assert_eq!(zone.first_empty(), Some(1));
    }

    #[test]
    fn test_full_zone_returns_entry() {
        let mut zone = SlotZone::with_capacity(1);
        assert_eq!(zone.place_first_empty(7), Ok(0));
        assert!(zone.is_full());
        assert_eq!(zone.place_first_empty(8), Err(8));
        assert_eq!(zone.get(0), Some(&7));
    }

    #[test]
    fn test_take_is_transfer() {
        let mut hand = SlotZone::with_capacity(3);
        let mut board = SlotZone::with_capacity(3);
        hand.place(2, "card");

        let card = hand.take(2).unwrap();
        board.place_first_empty(card).unwrap();

        assert!(!hand.is_occupied(2));
        assert_eq!(board.get(0), Some(&"card"));
        assert_eq!(hand.take(2), None);
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let mut zone: SlotZone<u8> = SlotZone::with_capacity(2);
        assert_eq!(zone.get(10), None);
        assert_eq!(zone.take(10), None);
        assert!(!zone.is_occupied(2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_place_out_of_range_panics() {
        let mut zone = SlotZone::with_capacity(2);
        zone.place(2, 1u8);
    }

    #[test]
    fn test_occupied_in_index_order() {
        let mut zone = SlotZone::with_capacity(6);
        zone.place(4, 40);
        zone.place(1, 10);
        zone.place(5, 50);

        let entries: Vec<_> = zone.occupied().collect();
        assert_eq!(entries, vec![(1, &10), (4, &40), (5, &50)]);
        assert_eq!(zone.occupied_indices().collect::<Vec<_>>(), vec![1, 4, 5]);

        zone.clear();
        assert!(zone.is_empty());
    }
}
