//! Ordered record of committed canvas items.

use crate::draw::ItemId;

/// Stack of committed item handles, oldest first.
///
/// Only grows at the end and only shrinks by popping the newest entry, so
/// undo always removes items in reverse commit order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<ItemId>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly committed item.
    pub fn push(&mut self, id: ItemId) {
        self.entries.push(id);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<ItemId> {
        self.entries.pop()
    }

    /// Newest entry without removing it.
    #[cfg(test)]
    pub fn last(&self) -> Option<ItemId> {
        self.entries.last().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[cfg(test)]
    pub fn entries(&self) -> &[ItemId] {
        &self.entries
    }
}
