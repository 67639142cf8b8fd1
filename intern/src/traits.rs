use crate::Error;

/// Trait for interners that can retrieve an interned string based on some key `K`.
pub trait GetStr<K> {
    /// Get the string associated with key `k`.
    fn get(&self, k: K) -> &str;

    /// Total number of strings interned.
    fn len(&self) -> usize;

    /// true if len is 0.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of interned strings.
    fn str_len(&self) -> usize;
}

/// Trait for interners that can intern a string and return a key `K`
/// used to retrieve it later.
pub trait InternStr<K> {
    /// Intern string `s` and return a key that can be used to retrieve it later.
    fn intern<T: AsRef<str>>(&mut self, s: T) -> Result<K, Error>;
}

/// Trait for interners that can look up the key of an already-interned string
/// without interning it.
pub trait FindStr<K> {
    /// Key of `s`, if it has been interned.
    fn find(&self, s: &str) -> Option<K>;
}
