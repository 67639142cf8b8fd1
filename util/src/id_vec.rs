use std::marker::PhantomData;

/// Vec wrapper that uses typed indexes.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct IdVec<K, V> {
    vec: Vec<V>,
    _phantom: PhantomData<K>,
}

// derived Default would require K: Default.
impl<K, V> Default for IdVec<K, V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K, V> IdVec<K, V> {
    fn new(vec: Vec<V>) -> Self {
        Self {
            vec,
            _phantom: PhantomData,
        }
    }

    /// Create a new `IdVec` with the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self::new(Vec::with_capacity(cap))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Iterate through immutable references to values
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vec.iter()
    }
}

impl<K, V: Clone> IdVec<K, V> {
    /// Create a new `IdVec`, filled with `len` copies of `val`.
    pub fn fill(val: V, len: usize) -> Self {
        Self::new(vec![val; len])
    }
}

impl<K: Into<usize>, V> IdVec<K, V> {
    /// Get the value with id `k`. Panics if `k` was never assigned;
    /// ids are only handed out by the owner of the vec, so this is a logic error.
    #[inline]
    pub fn get(&self, k: K) -> &V {
        &self.vec[k.into()]
    }

    /// Get the value with id `k`, or `None` if it's out of bounds.
    #[inline]
    pub fn try_get(&self, k: K) -> Option<&V> {
        self.vec.get(k.into())
    }

    /// Get a mutable reference to value with id `k`.
    #[inline]
    pub fn get_mut(&mut self, k: K) -> &mut V {
        &mut self.vec[k.into()]
    }
}

impl<K: From<usize>, V> IdVec<K, V> {
    /// Iterate through (id, value) pairs in id order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (K, &V)> {
        self.vec.iter().enumerate().map(|(i, v)| (i.into(), v))
    }
}

impl<K: Into<usize>, V: Default> IdVec<K, V> {
    /// Insert value `v` at position `k`.
    /// The underlying vec will be extended if `k` is beyond its current length,
    /// and new entries will be filled with a default value.
    pub fn insert(&mut self, k: K, v: V) {
        let k = k.into();
        if k >= self.vec.len() {
            self.vec.resize_with(k + 1, V::default);
        }
        self.vec[k] = v;
    }
}

#[cfg(test)]
mod test {
    use super::IdVec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Id(usize);

    impl From<Id> for usize {
        fn from(id: Id) -> usize {
            id.0
        }
    }

    impl From<usize> for Id {
        fn from(val: usize) -> Id {
            Id(val)
        }
    }

    #[test]
    fn test_get() {
        let mut v: IdVec<Id, &str> = IdVec::with_capacity(2);
        v.insert(Id(0), "a");
        v.insert(Id(1), "b");
        assert_eq!("b", *v.get(Id(1)));
        *v.get_mut(Id(0)) = "c";
        assert_eq!(Some(&"c"), v.try_get(Id(0)));
        assert_eq!(None, v.try_get(Id(2)));
    }

    #[test]
    fn test_insert_past_end_fills_default() {
        let mut v: IdVec<Id, u8> = IdVec::default();
        v.insert(Id(3), 7);
        assert_eq!(4, v.len());
        assert_eq!(vec![0, 0, 0, 7], v.iter().copied().collect::<Vec<_>>());
        v.insert(Id(1), 2);
        assert_eq!(2, *v.get(Id(1)));
        assert_eq!(4, v.len());
    }

    #[test]
    fn test_iter_with_ids() {
        let v: IdVec<Id, char> = IdVec::fill('x', 2);
        let pairs: Vec<_> = v.iter_with_ids().collect();
        assert_eq!(vec![(Id(0), &'x'), (Id(1), &'x')], pairs);
    }
}
