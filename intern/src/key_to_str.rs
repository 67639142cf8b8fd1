use std::marker::PhantomData;

use crate::{Error, GetStr, InternStr};

/// Internals used by the interner: every string is appended to one buffer,
/// and each key maps to the start offset of its string.
#[derive(Debug)]
pub struct KeyToStr<Key = u32, Idx = usize> {
    key_to_str: Vec<Idx>,
    strings: String,
    _phantom: PhantomData<Key>,
}

impl<Key, Idx> KeyToStr<Key, Idx> {
    pub fn with_capacity_and_avg_len(cap: usize, avg_len: usize) -> Self {
        Self {
            key_to_str: Vec::with_capacity(cap),
            strings: String::with_capacity(cap * avg_len),
            _phantom: PhantomData,
        }
    }
}

// GetStr ////////////////////
impl<Key, Idx> GetStr<Key> for KeyToStr<Key, Idx>
where
    Key: TryInto<usize>,
    Idx: Into<usize> + Copy,
{
    fn get(&self, k: Key) -> &str {
        // keys are only created from usize lengths, so they always convert back:
        let k = k.try_into().unwrap_or(usize::MAX);
        let (start, end) = self.get_start_and_end(k);
        &self.strings[start..end]
    }

    fn len(&self) -> usize {
        self.key_to_str.len()
    }

    fn str_len(&self) -> usize {
        self.strings.len()
    }
}

// InternStr ///////////////////
impl<Key, Idx> InternStr<Key> for KeyToStr<Key, Idx>
where
    Key: TryFrom<usize>,
    Idx: TryFrom<usize>,
{
    fn intern<T: AsRef<str>>(&mut self, s: T) -> Result<Key, Error> {
        let start = self.strings.len();
        let k = Key::try_from(self.key_to_str.len())
            .map_err(|_| Error::OutOfKeys(self.key_to_str.len()))?;
        let start_idx = Idx::try_from(start).map_err(|_| Error::OutOfStrIndices(start))?;

        self.key_to_str.push(start_idx);
        self.strings.push_str(s.as_ref());

        Ok(k)
    }
}

impl<Key, Idx> KeyToStr<Key, Idx>
where
    Idx: Into<usize> + Copy,
{
    fn get_start_and_end(&self, k: usize) -> (usize, usize) {
        let start = self.key_to_str[k].into();
        let end = match self.key_to_str.get(k + 1) {
            Some(next) => (*next).into(),
            None => self.strings.len(),
        };
        (start, end)
    }
}
