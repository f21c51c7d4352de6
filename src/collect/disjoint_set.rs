//! Union-find over vertex elements, keyed by equality/hash.
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

/// Outcome of a [`DisjointSet::union`] call.
///
/// The two variants carry the original inverted-boolean contract by name:
/// `Merged` is the old `false` ("different sets, merge performed — accept
/// this edge"), `AlreadyConnected` is the old `true` ("same set, nothing
/// merged — the edge would form a cycle").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionOutcome {
    Merged,
    AlreadyConnected,
}

impl UnionOutcome {
    pub fn is_cycle(self) -> bool {
        matches!(self, UnionOutcome::AlreadyConnected)
    }
}

/// A partition of elements into disjoint sets, stored as an element →
/// parent table. Iteration order of the table is insertion order.
pub struct DisjointSet<T> {
    parents: IndexMap<T, T>,
}

impl<T> DisjointSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Seeds the partition with singleton sets, each element its own parent.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let parents = elements
            .into_iter()
            .map(|element| (element.clone(), element))
            .collect();
        Self { parents }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Chases parents until the root (an element that is its own parent).
    /// Compresses the traversed chain onto the root as it goes; the
    /// compression is not observable from outside.
    pub fn find(&mut self, element: &T) -> T {
        let mut root = element.clone();
        while let Some(parent) = self.parents.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut current = element.clone();
        while current != root {
            let parent = match self.parents.get(&current) {
                Some(parent) => parent.clone(),
                None => break,
            };
            self.parents.insert(current, root.clone());
            current = parent;
        }

        root
    }

    /// Merges the sets of `a` and `b` if they differ: the second root is
    /// re-parented onto the first, and the call reports [`UnionOutcome::Merged`].
    /// If both already share a root nothing changes and the call reports
    /// [`UnionOutcome::AlreadyConnected`].
    pub fn union(&mut self, a: &T, b: &T) -> UnionOutcome {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return UnionOutcome::AlreadyConnected;
        }

        self.parents.insert(root_b, root_a);
        UnionOutcome::Merged
    }

    fn root_of<'a>(&'a self, element: &'a T) -> &'a T {
        let mut current = element;
        while let Some(parent) = self.parents.get(current) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }
}

impl<T> fmt::Display for DisjointSet<T>
where
    T: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|Element\t|Root\t|")?;
        for element in self.parents.keys() {
            writeln!(f, "|{} \t|{}\t|", element, self.root_of(element))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> DisjointSet<&'static str> {
        DisjointSet::new(["A", "B", "C", "D"])
    }

    #[test]
    fn singletons_are_their_own_roots() {
        let mut set = set();
        assert_eq!(set.len(), 4);
        for element in ["A", "B", "C", "D"] {
            assert_eq!(set.find(&element), element);
        }
    }

    #[test]
    fn union_of_distinct_sets_merges_and_reports_merged() {
        let mut set = set();
        let outcome = set.union(&"A", &"B");
        assert_eq!(outcome, UnionOutcome::Merged);
        assert!(!outcome.is_cycle());
        assert_eq!(set.find(&"A"), set.find(&"B"));
        // 第二个根被挂到第一个根之下
        assert_eq!(set.find(&"B"), "A");
    }

    #[test]
    fn union_within_a_set_reports_already_connected_and_changes_nothing() {
        let mut set = set();
        assert_eq!(set.union(&"A", &"B"), UnionOutcome::Merged);
        assert_eq!(set.union(&"B", &"C"), UnionOutcome::Merged);

        let outcome = set.union(&"A", &"C");
        assert_eq!(outcome, UnionOutcome::AlreadyConnected);
        assert!(outcome.is_cycle());
        assert_eq!(set.find(&"A"), "A");
        assert_eq!(set.find(&"C"), "A");
        assert_eq!(set.find(&"D"), "D");
    }

    #[test]
    fn roots_table_renders_current_partition() {
        let mut set = set();
        set.union(&"C", &"D");
        let table = set.to_string();
        assert!(table.contains("|C \t|C\t|"));
        assert!(table.contains("|D \t|C\t|"));
    }
}
