//! Memory-Mapped Frame Journal
//!
//! Append-only capture dari encoded frames, di-mmap langsung:
//! - Zero-copy read: record dibaca langsung dari page cache
//! - Persistence: isi journal tetap ada setelah reopen
//!
//! Layout:
//! ┌──────────────────────────────────────────────┐
//! │ Header (32 bytes): magic, version, capacity, │
//! │                    write_pos                 │
//! ├──────────────────────────────────────────────┤
//! │ [u32 len][bytes] [u32 len][bytes] ...        │
//! └──────────────────────────────────────────────┘

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use memmap2::{MmapMut, MmapOptions};
use tracing::{info, warn};

use super::error::{Error, Result};
use super::primitive::Primitive;

const MAGIC: u64 = 0x4233_424F_455F_4A31; // "B3BOE_J1"
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 32;
const RECORD_PREFIX_SIZE: usize = 4;

const MAGIC_OFFSET: usize = 0;
const VERSION_OFFSET: usize = 8;
const CAPACITY_OFFSET: usize = 12;
const WRITE_POS_OFFSET: usize = 16;

/// Mmap-backed append-only journal of encoded frames.
pub struct FrameJournal {
    mmap: MmapMut,
    capacity: usize,
}

impl FrameJournal {
    /// Membuat atau membuka journal
    ///
    /// # Arguments
    /// * `path` - Path ke file journal
    /// * `capacity` - Kapasitas data dalam bytes (tanpa header)
    ///
    /// Capacity yang tersimpan di header dibatasi ke ukuran file sebenarnya.
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> io::Result<Self> {
        let stored_capacity = u32::try_from(capacity).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("journal capacity {capacity} exceeds {}", u32::MAX),
            )
        })?;
        let total_size = HEADER_SIZE + capacity;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.as_ref())?;

        let existing = file.metadata()?.len() as usize;
        file.set_len(total_size.max(existing) as u64)?;

        // SAFETY: file dibuka read/write dan tidak di-truncate selama mapping hidup
        let mut mmap = unsafe { MmapOptions::new().map_mut(&file)? };

        let mut journal = if u64::read_le(&mmap[MAGIC_OFFSET..]) == MAGIC {
            let mut stored = u32::read_le(&mmap[CAPACITY_OFFSET..]) as usize;
            let mapped = mmap.len() - HEADER_SIZE;
            if stored > mapped {
                warn!(stored, mapped, "journal capacity exceeds the file, clamping");
                stored = mapped.min(u32::MAX as usize);
                (stored as u32).write_le(&mut mmap[CAPACITY_OFFSET..]);
            }
            let journal = Self {
                mmap,
                capacity: stored,
            };
            info!(
                path = %path.as_ref().display(),
                capacity = stored,
                used = journal.used(),
                "journal recovered"
            );
            journal
        } else {
            MAGIC.write_le(&mut mmap[MAGIC_OFFSET..]);
            VERSION.write_le(&mut mmap[VERSION_OFFSET..]);
            stored_capacity.write_le(&mut mmap[CAPACITY_OFFSET..]);
            0u64.write_le(&mut mmap[WRITE_POS_OFFSET..]);
            info!(path = %path.as_ref().display(), capacity, "journal created");
            Self { mmap, capacity }
        };

        if journal.used() > journal.capacity {
            warn!(
                used = journal.used(),
                capacity = journal.capacity,
                "journal write position is corrupt, resetting"
            );
            journal.clear();
        }

        Ok(journal)
    }

    /// Bytes of records written so far.
    #[inline(always)]
    pub fn used(&self) -> usize {
        u64::read_le(&self.mmap[WRITE_POS_OFFSET..]) as usize
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity - self.used()
    }

    /// Menulis record ke journal (zero-copy write ke mmap region)
    ///
    /// Returns offset record di dalam area data.
    pub fn append(&mut self, record: &[u8]) -> Result<usize> {
        let offset = self.used();
        let required = RECORD_PREFIX_SIZE + record.len();
        if required > self.available() {
            return Err(Error::NotEnoughSpace {
                required,
                available: self.available(),
            });
        }

        let start = HEADER_SIZE + offset;
        (record.len() as u32).write_le(&mut self.mmap[start..]);
        self.mmap[start + RECORD_PREFIX_SIZE..start + required].copy_from_slice(record);
        ((offset + required) as u64).write_le(&mut self.mmap[WRITE_POS_OFFSET..]);

        Ok(offset)
    }

    /// Iterates all records (zero-copy).
    pub fn records(&self) -> Records<'_> {
        Records {
            data: &self.mmap[HEADER_SIZE..HEADER_SIZE + self.used()],
            pos: 0,
        }
    }

    /// Forgets all records; the file keeps its size.
    pub fn clear(&mut self) {
        0u64.write_le(&mut self.mmap[WRITE_POS_OFFSET..]);
    }

    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }
}

/// Iterator over journal records.
pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos + RECORD_PREFIX_SIZE > self.data.len() {
            return None;
        }
        let len = u32::read_le(&self.data[self.pos..]) as usize;
        let start = self.pos + RECORD_PREFIX_SIZE;
        let record = self.data.get(start..start + len)?;
        self.pos = start + len;
        Some(record)
    }
}
