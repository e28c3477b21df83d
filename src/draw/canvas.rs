//! Retained item store backing the drawing area.

use super::shape::Shape;
use std::fmt;

/// Opaque handle to an item placed on a [`Canvas`].
///
/// Handles are never reused within one canvas, so a stale handle cannot
/// accidentally refer to a newer item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Container for every item currently drawn on the canvas.
///
/// Items are kept in creation order (first = bottom, last = top), which is
/// also the order they are rendered in.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    items: Vec<(ItemId, Shape)>,
    next_id: u64,
}

impl Canvas {
    /// Creates an empty canvas of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Places a shape on top of the existing items and returns its handle.
    pub fn create(&mut self, shape: Shape) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push((id, shape));
        id
    }

    /// Removes an item, returning its shape if the handle was still live.
    pub fn delete(&mut self, id: ItemId) -> Option<Shape> {
        let index = self.items.iter().position(|(item, _)| *item == id)?;
        Some(self.items.remove(index).1)
    }

    /// Looks up the shape behind a handle.
    pub fn get(&self, id: ItemId) -> Option<&Shape> {
        self.items
            .iter()
            .find(|(item, _)| *item == id)
            .map(|(_, shape)| shape)
    }

    /// Returns whether the handle refers to a live item.
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates items bottom to top.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Shape)> {
        self.items.iter().map(|(id, shape)| (*id, shape))
    }

    /// Handles of all live items, bottom to top.
    #[cfg(test)]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    fn dot(x: i32) -> Shape {
        Shape::Point {
            x,
            y: 0,
            color: BLACK,
            thick: 3,
        }
    }

    #[test]
    fn create_appends_on_top() {
        let mut canvas = Canvas::new(600, 400);
        let first = canvas.create(dot(1));
        let second = canvas.create(dot(2));

        assert_eq!(canvas.item_ids(), vec![first, second]);
        assert_eq!(canvas.get(second), Some(&dot(2)));
    }

    #[test]
    fn delete_removes_only_the_named_item() {
        let mut canvas = Canvas::new(600, 400);
        let first = canvas.create(dot(1));
        let second = canvas.create(dot(2));
        let third = canvas.create(dot(3));

        assert_eq!(canvas.delete(second), Some(dot(2)));
        assert_eq!(canvas.item_ids(), vec![first, third]);
        assert!(!canvas.contains(second));
    }

    #[test]
    fn deleted_handles_are_not_reused() {
        let mut canvas = Canvas::new(600, 400);
        let first = canvas.create(dot(1));
        canvas.delete(first);
        let next = canvas.create(dot(1));

        assert_ne!(first, next);
        assert_eq!(canvas.delete(first), None);
        assert_eq!(canvas.len(), 1);
    }
}
