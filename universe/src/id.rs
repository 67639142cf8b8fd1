//! Ids for use in typed collections.

macro_rules! id {
    ($name:ident, $ty:ty) => {
        #[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name($ty);

        impl From<$name> for usize {
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        // saturates, so an index that doesn't fit stays out of range
        // instead of wrapping around to a real id.
        impl From<usize> for $name {
            fn from(val: usize) -> $name {
                Self(<$ty>::try_from(val).unwrap_or(<$ty>::MAX))
            }
        }

        impl From<$name> for $ty {
            fn from(id: $name) -> $ty {
                id.0
            }
        }

        impl From<$ty> for $name {
            fn from(val: $ty) -> $name {
                Self(val)
            }
        }
    };
}

// u32 so that large generated task graphs still fit.
id!(TaskId, u32);

#[cfg(test)]
mod test {
    use super::TaskId;

    #[test]
    fn test_oversized_index_saturates() {
        assert_eq!(TaskId::from(7u32), TaskId::from(7usize));
        assert_eq!(TaskId::from(u32::MAX), TaskId::from(u32::MAX as usize + 1));
        assert_eq!(TaskId::from(u32::MAX), TaskId::from(usize::MAX));
    }
}
