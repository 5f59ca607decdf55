/// Disjoint sets over linear cell indices.
///
/// An entry is the index of the parent, or a negative number for the root of a set.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<isize>,
}

impl UnionFind {
    /// Every element starts in its own singleton set.
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![-1; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the set containing `idx`.
    ///
    /// Path halving shortens the chain on the way up, the root itself never changes.
    pub fn find(&mut self, idx: usize) -> usize {
        let mut current = idx;
        while self.parent[current] >= 0 {
            let parent = self.parent[current] as usize;
            if self.parent[parent] >= 0 {
                self.parent[current] = self.parent[parent];
            }
            current = parent;
        }
        current
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets of `a` and `b`, the root of `a` is linked under the root of `b`.
    ///
    /// Returns `false` if they already were in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        self.parent[root_a] = root_b as isize;
        true
    }

    pub fn is_root(&self, idx: usize) -> bool {
        self.parent[idx] < 0
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|&&p| p < 0).count()
    }
}
