//! Character Selection Basket
//!
//! The ordered working set of character ids chosen for the forum being
//! composed. Order is selection order, duplicates are disallowed, and the
//! basket is the single source for every post editor's character options.

/// Ordered, duplicate-free set of character ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBasket {
    ids: Vec<String>,
}

impl SelectionBasket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id if present, otherwise append it. Toggling twice in a
    /// row restores the previous basket; an odd number of toggles leaves
    /// the id selected.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Rebuild the basket from an id sequence, keeping first-occurrence
    /// order and dropping duplicates. Used when reconstructing the
    /// selection from an existing forum's posts.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut basket = Self::new();
        for id in ids {
            let id = id.into();
            if !basket.contains(&id) {
                basket.ids.push(id);
            }
        }
        basket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut basket = SelectionBasket::new();
        basket.toggle("a");
        assert!(basket.contains("a"));
        basket.toggle("a");
        assert!(!basket.contains("a"));
        assert!(basket.is_empty());
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut basket = SelectionBasket::from_ids(["a", "b", "c"]);
        let before = basket.clone();
        basket.toggle("d");
        basket.toggle("d");
        assert_eq!(basket, before);

        // Removing and re-adding an existing id keeps it selected but
        // moves it to the end: the basket tracks selection order, not the
        // original position.
        basket.toggle("b");
        basket.toggle("b");
        assert_eq!(basket.ids(), ["a", "c", "b"]);
    }

    #[test]
    fn toggle_parity() {
        let mut basket = SelectionBasket::new();
        for _ in 0..5 {
            basket.toggle("a");
        }
        assert!(basket.contains("a"), "odd toggle count selects");
        for _ in 0..4 {
            basket.toggle("b");
        }
        assert!(!basket.contains("b"), "even toggle count deselects");
    }

    #[test]
    fn preserves_selection_order() {
        let mut basket = SelectionBasket::new();
        basket.toggle("c");
        basket.toggle("a");
        basket.toggle("b");
        assert_eq!(basket.ids(), ["c", "a", "b"]);
    }

    #[test]
    fn from_ids_dedupes_keeping_first_occurrence() {
        let basket = SelectionBasket::from_ids(["x", "y", "x", "z", "y"]);
        assert_eq!(basket.ids(), ["x", "y", "z"]);
        assert_eq!(basket.len(), 3);
    }
}
