//! Disjoint Set (Union-Find) over dense integer ids.
//!
//! Parent pointers live in `Cell<usize>` so `find` can compress paths through
//! a shared reference. There is no rank or size balancing: `union(x, y)` always
//! hangs the root of `x` under the root of `y`. Path compression alone keeps
//! the amortized cost logarithmic, which is plenty for Kruskal.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers. A root is its own parent.
    parent: Vec<Cell<usize>>,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the id of the new element, which is also its representative.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// The returned root is its own parent, and every node on the walked path
    /// points straight at it afterwards.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].replace(root);
            curr = next;
        }

        root
    }

    /// Unites the sets containing `x` and `y`.
    ///
    /// Returns `true` if they were in different sets, in which case the root of
    /// `x` now points at the root of `y`.
    ///
    /// # Panics
    /// Panics if either id is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        self.parent[root_x].set(root_y);
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Panics
    /// Panics if either id is out of range.
    pub fn same_set(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(id, parent)| parent.get() == *id)
            .count()
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new(0);

        let a = ds.make_set();
        let b = ds.make_set();
        let c = ds.make_set();

        assert_eq!(ds.find(a), a);
        assert_eq!(ds.find(b), b);

        assert!(ds.union(a, b));
        assert_eq!(ds.find(a), ds.find(b));
        assert_ne!(ds.find(a), ds.find(c));

        assert!(ds.union(b, c));
        assert_eq!(ds.find(a), ds.find(c));

        // Already united
        assert!(!ds.union(a, c));
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn union_hangs_first_root_under_second() {
        let mut ds = DisjointSet::new(2);
        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), 1);
        assert_eq!(ds.find(1), 1);
    }

    #[test]
    fn find_compresses_the_whole_path() {
        let mut ds = DisjointSet::new(5);
        // Chain 0 -> 1 -> 2 -> 3 -> 4.
        for i in 0..4 {
            ds.union(i, i + 1);
        }
        assert_eq!(ds.find(0), 4);
        for i in 0..5 {
            assert_eq!(ds.parent[i].get(), 4);
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut ds = DisjointSet::new(6);
        ds.union(0, 3);
        ds.union(3, 5);
        ds.union(1, 2);
        for x in 0..6 {
            let root = ds.find(x);
            assert_eq!(ds.find(root), root);
            assert_eq!(ds.find(x), root);
        }
        assert_eq!(ds.set_count(), 3);
        assert!(ds.same_set(0, 5));
        assert!(!ds.same_set(0, 4));
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let ds = DisjointSet::new(2);
        ds.find(2);
    }
}
