//! The page the carousel lives in.
//!
//! A carousel never owns its slides or dots. It looks them up by class name on
//! every call and only toggles a marker class on them, so anything that can
//! answer "how many elements carry this class" and "add/remove a class on the
//! n-th one" can host a carousel: the browser DOM, or the in-memory [`Scene`]
//! used by the desktop viewer and the tests.

use std::collections::BTreeSet;

/// Live, order-preserving lookup of elements by class name.
///
/// Indices are positions within the current lookup result, in document order.
/// Out-of-range indices are ignored by implementations.
pub trait ElementTree {
    fn count_by_class(&self, class: &str) -> usize;
    fn add_class(&mut self, class: &str, index: usize, name: &str);
    fn remove_class(&mut self, class: &str, index: usize, name: &str);
}

/// In-memory element tree: a flat, ordered list of elements and their classes.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    elements: Vec<BTreeSet<String>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element carrying `classes` and returns its position in the scene.
    pub fn push<I, S>(&mut self, classes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.push(classes.into_iter().map(Into::into).collect());
        self.elements.len() - 1
    }

    /// Appends `count` elements that carry only `class`.
    pub fn push_many(&mut self, class: &str, count: usize) {
        for _ in 0..count {
            self.push([class]);
        }
    }

    fn find_by_class(&self, class: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, classes)| classes.contains(class))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the `index`-th element carrying `class` also carries `name`.
    pub fn has_class(&self, class: &str, index: usize, name: &str) -> bool {
        self.nth_by_class(class, index)
            .is_some_and(|element| self.elements[element].contains(name))
    }

    /// Lookup-relative indices of the `class` elements that carry `name`.
    pub fn marked(&self, class: &str, name: &str) -> Vec<usize> {
        self.find_by_class(class)
            .into_iter()
            .enumerate()
            .filter(|(_, element)| self.elements[*element].contains(name))
            .map(|(i, _)| i)
            .collect()
    }

    fn nth_by_class(&self, class: &str, index: usize) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, classes)| classes.contains(class))
            .nth(index)
            .map(|(i, _)| i)
    }
}

impl ElementTree for Scene {
    fn count_by_class(&self, class: &str) -> usize {
        self.elements.iter().filter(|classes| classes.contains(class)).count()
    }

    fn add_class(&mut self, class: &str, index: usize, name: &str) {
        if let Some(element) = self.nth_by_class(class, index) {
            self.elements[element].insert(name.to_string());
        }
    }

    fn remove_class(&mut self, class: &str, index: usize, name: &str) {
        if let Some(element) = self.nth_by_class(class, index) {
            self.elements[element].remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(["carousel-slide"]);
        scene.push(["dot"]);
        scene.push(["carousel-slide", "hero"]);
        scene.push(["dot"]);
        scene
    }

    #[test]
    fn lookup_counts_only_matching_elements() {
        let scene = mixed_scene();
        assert_eq!(scene.count_by_class("carousel-slide"), 2);
        assert_eq!(scene.count_by_class("dot"), 2);
        assert_eq!(scene.count_by_class("hero"), 1);
        assert_eq!(scene.count_by_class("missing"), 0);
    }

    #[test]
    fn indices_are_relative_to_the_lookup() {
        let mut scene = mixed_scene();
        scene.add_class("carousel-slide", 1, "active");

        assert!(scene.has_class("carousel-slide", 1, "active"));
        assert!(!scene.has_class("carousel-slide", 0, "active"));
        assert!(scene.marked("dot", "active").is_empty());
        assert_eq!(scene.marked("carousel-slide", "active"), vec![1]);
        // The second slide is the element that also carries "hero"
        assert!(scene.has_class("hero", 0, "active"));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut scene = mixed_scene();
        scene.add_class("dot", 5, "active");
        scene.remove_class("dot", 5, "active");
        assert!(scene.marked("dot", "active").is_empty());
    }

    #[test]
    fn remove_then_add_toggles_marker() {
        let mut scene = mixed_scene();
        scene.add_class("dot", 0, "active");
        scene.remove_class("dot", 0, "active");
        assert!(!scene.has_class("dot", 0, "active"));
    }
}
