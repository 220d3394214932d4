//! The tripled display sequence.
//!
//! Derived on demand from the item slice: slot `i` of `3N` always shows item
//! `i % N`, so the order can never drift from the source list.

use std::ops::Range;

/// Number of back-to-back copies rendered for wraparound.
pub const COPIES: usize = 3;

/// One rendered frame of the display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySlot<'a, T> {
    /// Position within the `3N` sequence.
    pub display_index: usize,
    /// Position within the source item list.
    pub item_index: usize,
    /// Which copy (0, 1 or 2) the slot belongs to.
    pub copy: usize,
    pub item: &'a T,
}

#[derive(Debug)]
pub struct DisplaySequence<'a, T> {
    items: &'a [T],
}

impl<T> Clone for DisplaySequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DisplaySequence<'_, T> {}

impl<'a, T> DisplaySequence<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len() * COPIES
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, display_index: usize) -> Option<DisplaySlot<'a, T>> {
        if display_index >= self.len() {
            return None;
        }
        let n = self.items.len();
        let item_index = display_index % n;
        Some(DisplaySlot {
            display_index,
            item_index,
            copy: display_index / n,
            item: &self.items[item_index],
        })
    }

    pub fn iter(self) -> impl Iterator<Item = DisplaySlot<'a, T>> + 'a {
        self.slots(0..self.len())
    }

    /// Slots within `range`, clipped to the sequence length.
    pub fn slots(
        self,
        range: Range<usize>,
    ) -> impl Iterator<Item = DisplaySlot<'a, T>> + 'a {
        let end = range.end.min(self.len());
        (range.start..end).filter_map(move |idx| self.get(idx))
    }
}
