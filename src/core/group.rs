//! Repeating groups
//!
//! Layout: `[GroupSize (3 bytes)][entry 0][entry 1]...`, semua entry
//! berukuran `GroupSize::block_length`. Entry adalah view tanpa copy.

use std::fmt;
use std::marker::PhantomData;
use std::slice::{ChunksExact, ChunksExactMut};

use super::header::{GroupSize, SchemaVersion, GROUP_SIZE_ENCODING_SIZE};

/// A group entry flyweight constructible over a slice of the entry bytes.
pub trait SbeEntry<B>: Sized {
    fn wrap(data: B, version: SchemaVersion) -> Self;
}

/// Returns `(entry_size, len, start, end)` of the entries behind a group
/// dimension header, clamped to the bytes actually present.
fn entries_layout(data: &[u8]) -> (usize, usize, usize, usize) {
    let Some(size) = GroupSize::from_bytes(data) else {
        return (0, 0, data.len(), data.len());
    };
    let entry_size = size.block_length as usize;
    let start = GROUP_SIZE_ENCODING_SIZE;
    let available = data.len() - start;
    let len = match entry_size {
        0 => 0,
        n => (size.num_in_group as usize).min(available / n),
    };
    (entry_size, len, start, start + entry_size * len)
}

/// Read-only view of a repeating group.
pub struct Group<'a, E> {
    entries: &'a [u8],
    entry_size: usize,
    len: usize,
    version: SchemaVersion,
    _entry: PhantomData<fn() -> E>,
}

impl<'a, E: SbeEntry<&'a [u8]>> Group<'a, E> {
    /// `data` starts at the group dimension header and was validated by
    /// the owning message.
    pub(crate) fn new(data: &'a [u8], version: SchemaVersion) -> Self {
        let (entry_size, len, start, end) = entries_layout(data);
        Self {
            entries: &data[start..end],
            entry_size,
            len,
            version,
            _entry: PhantomData,
        }
    }

    /// Jumlah entry
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Encoded size of a single entry.
    #[inline(always)]
    pub fn entry_size(&self) -> usize {
        self.entry_size
    }

    pub fn get(&self, index: usize) -> Option<E> {
        if index >= self.len {
            return None;
        }
        let start = index * self.entry_size;
        let entries = self.entries;
        Some(E::wrap(&entries[start..start + self.entry_size], self.version))
    }

    pub fn iter(&self) -> GroupIter<'a, E> {
        GroupIter {
            chunks: self.entries.chunks_exact(self.entry_size.max(1)),
            version: self.version,
            _entry: PhantomData,
        }
    }
}

impl<'a, E: SbeEntry<&'a [u8]>> IntoIterator for Group<'a, E> {
    type Item = E;
    type IntoIter = GroupIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E: SbeEntry<&'a [u8]> + fmt::Debug> fmt::Debug for Group<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over group entries.
pub struct GroupIter<'a, E> {
    chunks: ChunksExact<'a, u8>,
    version: SchemaVersion,
    _entry: PhantomData<fn() -> E>,
}

impl<'a, E: SbeEntry<&'a [u8]>> Iterator for GroupIter<'a, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.chunks.next().map(|chunk| E::wrap(chunk, self.version))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a, E: SbeEntry<&'a [u8]>> ExactSizeIterator for GroupIter<'a, E> {}

/// Mutable view of a repeating group.
///
/// Entries borrow disjoint slices, so all of them can be edited at once:
///
/// ```ignore
/// let mut sides = msg.setup_sides(2)?.into_iter();
/// ```
pub struct GroupMut<'a, E> {
    entries: &'a mut [u8],
    entry_size: usize,
    len: usize,
    version: SchemaVersion,
    _entry: PhantomData<fn() -> E>,
}

impl<'a, E: SbeEntry<&'a mut [u8]>> GroupMut<'a, E> {
    pub(crate) fn new(data: &'a mut [u8], version: SchemaVersion) -> Self {
        let (entry_size, len, start, end) = entries_layout(data);
        Self {
            entries: &mut data[start..end],
            entry_size,
            len,
            version,
            _entry: PhantomData,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consumes the view, returning the entry at `index`.
    pub fn into_entry(self, index: usize) -> Option<E> {
        if index >= self.len {
            return None;
        }
        let start = index * self.entry_size;
        let entries = self.entries;
        Some(E::wrap(
            &mut entries[start..start + self.entry_size],
            self.version,
        ))
    }
}

impl<'a, E: SbeEntry<&'a mut [u8]>> IntoIterator for GroupMut<'a, E> {
    type Item = E;
    type IntoIter = GroupIterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        GroupIterMut {
            chunks: self.entries.chunks_exact_mut(self.entry_size.max(1)),
            version: self.version,
            _entry: PhantomData,
        }
    }
}

/// Iterator over mutable group entries.
pub struct GroupIterMut<'a, E> {
    chunks: ChunksExactMut<'a, u8>,
    version: SchemaVersion,
    _entry: PhantomData<fn() -> E>,
}

impl<'a, E: SbeEntry<&'a mut [u8]>> Iterator for GroupIterMut<'a, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.chunks.next().map(|chunk| E::wrap(chunk, self.version))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a, E: SbeEntry<&'a mut [u8]>> ExactSizeIterator for GroupIterMut<'a, E> {}
