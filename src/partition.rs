//! Disjoint-set partition over a fixed universe.
//!
//! [`Partition`] is the union-find structure the manifold classifier uses
//! to glue corners across regular edges. It is built fresh per
//! classification, sized to the corner count, and discarded once the
//! per-vertex part counts have been extracted.

/// A union-find partition of the elements `[0, n)`.
///
/// Uses path compression on `find` and union by size on `join`.
#[derive(Debug, Clone)]
pub struct Partition {
    parent: Vec<u32>,
    size: Vec<u32>,
    parts: usize,
}

impl Partition {
    /// Create a partition of `n` singleton elements.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            parts: n,
        }
    }

    /// Get the universe size.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Get the current number of parts.
    #[inline]
    pub fn num_parts(&self) -> usize {
        self.parts
    }

    /// Find the representative of the part containing `i`.
    ///
    /// # Panics
    /// Panics if `i` is outside the universe.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        // Path compression: repoint everything on the walk at the root.
        let mut walk = i;
        while walk != root {
            let next = self.parent[walk] as usize;
            self.parent[walk] = root as u32;
            walk = next;
        }
        root
    }

    /// Merge the parts containing `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a` or `b` is outside the universe.
    pub fn join(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra as u32;
        self.size[ra] += self.size[rb];
        self.parts -= 1;
    }

    /// Check whether `a` and `b` belong to the same part.
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut p = Partition::new(4);
        assert_eq!(p.len(), 4);
        assert_eq!(p.num_parts(), 4);
        for i in 0..4 {
            assert_eq!(p.find(i), i);
        }
    }

    #[test]
    fn test_join_and_same() {
        let mut p = Partition::new(5);
        p.join(0, 1);
        p.join(3, 4);
        assert!(p.same(0, 1));
        assert!(p.same(4, 3));
        assert!(!p.same(1, 2));
        assert_eq!(p.num_parts(), 3);
    }

    #[test]
    fn test_join_is_transitive() {
        let mut p = Partition::new(6);
        p.join(0, 1);
        p.join(1, 2);
        p.join(2, 3);
        assert!(p.same(0, 3));
        assert_eq!(p.num_parts(), 3);

        // Joining elements already in the same part is a no-op.
        p.join(3, 0);
        assert_eq!(p.num_parts(), 3);
    }

    #[test]
    fn test_representative_is_stable() {
        let mut p = Partition::new(8);
        p.join(2, 5);
        p.join(5, 7);
        let rep = p.find(2);
        assert_eq!(p.find(5), rep);
        assert_eq!(p.find(7), rep);
    }

    #[test]
    fn test_empty_universe() {
        let p = Partition::new(0);
        assert!(p.is_empty());
        assert_eq!(p.num_parts(), 0);
    }
}
