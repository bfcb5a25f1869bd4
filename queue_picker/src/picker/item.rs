// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Deref;

use crate::format_label;

/// One pickable entry. The label is made once from the identifier and never changes.
///
/// Not [Clone]. An item lives in exactly one [`ItemList`] at a time and is moved (not
/// copied) when it changes lists.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    identifier: String,
    label: String,
}

impl Item {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let label = format_label(&identifier);
        Self { identifier, label }
    }

    #[must_use]
    pub fn identifier(&self) -> &str { &self.identifier }

    #[must_use]
    pub fn label(&self) -> &str { &self.label }
}

/// An ordered list of [Item]s. The order is meaningful: for the queue it is the play
/// order, for the source it is what is left over.
///
/// Read access is via [Deref] to a slice. Mutations are limited to the ones that the
/// picker needs, which all preserve the set of items except for the explicit
/// [`ItemList::remove`] and [`ItemList::push`] pair used to move an item.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: identifiers.into_iter().map(Item::new).collect(),
        }
    }

    /// Take the item at `index` out of the list, shifting later items up by one.
    /// Returns [None] if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: Item) { self.items.push(item); }

    /// Exchange two items in place. Out of bounds indices are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.items.len() && b < self.items.len() {
            self.items.swap(a, b);
        }
    }

    /// The identifiers, in list order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|it| it.identifier().to_string())
            .collect()
    }

    /// Consume the list and return the identifiers, in list order.
    #[must_use]
    pub fn into_identifiers(self) -> Vec<String> {
        self.items.into_iter().map(|it| it.identifier).collect()
    }
}

impl Deref for ItemList {
    type Target = [Item];
    fn deref(&self) -> &Self::Target { &self.items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_item_label_is_made_from_identifier() {
        let item = Item::new("Hey_Jude.mp3");
        assert_eq2!(item.identifier(), "Hey_Jude.mp3");
        assert_eq2!(item.label(), "Hey Jude");
    }

    #[test]
    fn test_remove_and_push_moves_item() {
        let mut from = ItemList::from_identifiers(["a", "b", "c"]);
        let mut to = ItemList::new();

        let item = from.remove(1).unwrap();
        to.push(item);

        assert_eq2!(from.identifiers(), vec!["a", "c"]);
        assert_eq2!(to.identifiers(), vec!["b"]);
        assert!(from.remove(5).is_none());
    }

    #[test]
    fn test_swap() {
        let mut list = ItemList::from_identifiers(["a", "b", "c"]);
        list.swap(0, 2);
        assert_eq2!(list.identifiers(), vec!["c", "b", "a"]);
        list.swap(0, 9);
        assert_eq2!(list.identifiers(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_deref_to_slice() {
        let list = ItemList::from_identifiers(["x_1.ogg", "x_2.ogg"]);
        assert_eq2!(list.len(), 2);
        let labels = list.iter().map(Item::label).collect::<Vec<_>>();
        assert_eq2!(labels, vec!["x 1", "x 2"]);
        assert_eq2!(list.into_identifiers(), vec!["x_1.ogg", "x_2.ogg"]);
    }
}
