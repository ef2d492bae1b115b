//! Specialized collection types

pub use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle to a display object owned by a [`crate::world::World`]
    pub struct ObjectId;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<ObjectId, T>;

/// Ordered list of object handles (draw and update order)
///
/// Index 0 is the back of the list; the last entry is drawn on top.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    order: Vec<ObjectId>,
}

impl DisplayList {
    /// Create an empty display list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handle on top of the list
    pub fn push(&mut self, id: ObjectId) {
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    /// Remove a handle, returning whether it was present
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Position of a handle within the list
    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Move a handle to the top of the list
    pub fn bring_to_top(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.order.len() => {
                let id = self.order.remove(index);
                self.order.push(id);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Move a handle to the bottom of the list
    pub fn send_to_back(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                let id = self.order.remove(index);
                self.order.insert(0, id);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Swap a handle with the one directly above it
    pub fn move_up(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.order.len() => {
                self.order.swap(index, index + 1);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Swap a handle with the one directly below it
    pub fn move_down(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                self.order.swap(index, index - 1);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Number of handles in the list
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate handles back to front
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.order.iter().copied()
    }

    /// Snapshot of the current order
    pub fn to_vec(&self) -> Vec<ObjectId> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> (DisplayList, [ObjectId; 3]) {
        let mut map: HandleMap<()> = HandleMap::with_key();
        let ids = [map.insert(()), map.insert(()), map.insert(())];
        let mut list = DisplayList::new();
        for id in ids {
            list.push(id);
        }
        (list, ids)
    }

    #[test]
    fn test_bring_to_top_and_send_to_back() {
        let (mut list, [a, b, c]) = three();

        assert!(list.bring_to_top(a));
        assert_eq!(list.to_vec(), vec![b, c, a]);

        assert!(list.send_to_back(c));
        assert_eq!(list.to_vec(), vec![c, b, a]);
    }

    #[test]
    fn test_move_up_and_down_at_edges() {
        let (mut list, [a, b, c]) = three();

        assert!(list.move_up(c));
        assert_eq!(list.to_vec(), vec![a, b, c]);

        assert!(list.move_down(c));
        assert_eq!(list.to_vec(), vec![a, c, b]);

        assert!(list.move_down(a));
        assert_eq!(list.to_vec(), vec![a, c, b]);
    }

    #[test]
    fn test_unknown_handle() {
        let (mut list, [a, ..]) = three();
        list.remove(a);

        assert!(!list.bring_to_top(a));
        assert_eq!(list.len(), 2);
        assert!(list.index_of(a).is_none());
    }
}
