/// Interner that checks for duplicates and only stores each unique string once.
mod packed;
pub use packed::PackedInterner;

/// Internals for mapping keys to interned strings.
mod key_to_str;
use key_to_str::KeyToStr;

/// Internals for mapping interned strings to keys.
mod str_to_key;
use str_to_key::StrToKey;

/// Wrapper around interners that uses typed keys.
mod typed;
pub use typed::TypedInterner;

mod traits;
pub use traits::{FindStr, GetStr, InternStr};

type Hasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Interner is full: key type can't represent more than {0} strings")]
    OutOfKeys(usize),
    #[error("String storage exceeded its index type at {0} bytes")]
    OutOfStrIndices(usize),
}
