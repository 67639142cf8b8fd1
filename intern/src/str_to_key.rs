use hashbrown::hash_map::{HashMap, RawEntryMut};
use std::hash::BuildHasher;

use crate::{Error, GetStr, InternStr};

/// Internals used for keeping track of interned string ids.
/// Uses a HashMap with no value (w/ `()` as the value parameter) internally.
/// This acts as a mapping from string hash -> Key, w/o double-storing the
/// actual contents of the string.
#[derive(Debug)]
pub struct StrToKey<Key = u32, H = crate::Hasher> {
    map: HashMap<Key, (), ()>,
    hasher: H,
}

impl<Key, H: Default> StrToKey<Key, H> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, ()),
            hasher: H::default(),
        }
    }
}

impl<Key: Copy, H: BuildHasher> StrToKey<Key, H> {
    /// Return the existing key for `s`, or use `key_to_str` to assign a new one.
    pub fn intern<T>(&mut self, s: &str, key_to_str: &mut T) -> Result<Key, Error>
    where
        T: GetStr<Key> + InternStr<Key>,
    {
        let hash = self.hasher.hash_one(s);
        // the entry's key is the id we use to look up the string in `key_to_str`:
        let entry = self
            .map
            .raw_entry_mut()
            .from_hash(hash, |colliding_key| s == key_to_str.get(*colliding_key));

        match entry {
            RawEntryMut::Occupied(entry) => Ok(*entry.into_key()),
            RawEntryMut::Vacant(entry) => {
                let new_k = key_to_str.intern(s)?;
                let hasher = &self.hasher;
                entry.insert_with_hasher(hash, new_k, (), |colliding_key| {
                    hasher.hash_one(key_to_str.get(*colliding_key))
                });
                Ok(new_k)
            }
        }
    }

    /// Look up the key for `s` without interning it.
    pub fn find<T>(&self, s: &str, key_to_str: &T) -> Option<Key>
    where
        T: GetStr<Key>,
    {
        let hash = self.hasher.hash_one(s);
        self.map
            .raw_entry()
            .from_hash(hash, |colliding_key| s == key_to_str.get(*colliding_key))
            .map(|(k, _)| *k)
    }
}
