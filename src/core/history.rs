use serde::{Deserialize, Serialize};

/// An append-only, ordered record of a value across iterations.
///
/// Index 0 is the value at iteration 0 (for positions and velocities, the pre-optimization
/// initial state). Entries are never overwritten or removed; there is deliberately no
/// `DerefMut` and [`History::push`] is crate-private, so consumers outside the optimizer get a
/// strictly read-only view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T>(Vec<T>);

// A derived impl would require `T: Default`; an empty history needs no such bound.
impl<T> Default for History<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> History<T> {
    /// Appends one value to the history.
    pub(crate) fn push(&mut self, value: T) {
        self.0.push(value);
    }
    /// Returns the most recently appended value, if any value has been recorded.
    pub fn latest(&self) -> Option<&T> {
        self.0.last()
    }
    /// Returns the number of recorded values.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Checks whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> std::ops::Deref for History<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut h = History::default();
        assert!(h.is_empty());
        assert_eq!(h.latest(), None);
        h.push(1.0);
        h.push(2.0);
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest(), Some(&2.0));
    }

    #[test]
    fn test_reads_are_restartable() {
        let mut h = History::default();
        for i in 0..5 {
            h.push(i);
        }
        let first: Vec<i32> = h.iter().copied().collect();
        let second: Vec<i32> = h.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_default_needs_no_element_default() {
        struct NoDefault(#[allow(dead_code)] u8);
        let h = History::<NoDefault>::default();
        assert!(h.is_empty());
        let h = History::<crate::core::Point>::default();
        assert_eq!(h.latest(), None);
    }

    #[test]
    fn test_indexing_by_iteration() {
        let mut h = History::default();
        h.push("a");
        h.push("b");
        assert_eq!(h[0], "a");
        assert_eq!(h[1], "b");
    }
}
