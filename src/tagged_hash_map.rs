//! TaggedHashMap: bucket array over a slot arena, chains linked by slot
//! keys, resize policy driven by the load factor.

use crate::key_ops;
use crate::scalar::{Scalar, ScalarKind};
use core::cmp::Ordering;
use slotmap::{DefaultKey, SlotMap};
use std::fmt;

/// Load factor above which an insert doubles the bucket count.
pub const MAX_LOAD_FACTOR: f64 = 0.75;
/// Load factor below which a remove shrinks the bucket count to 3/4.
pub const MIN_LOAD_FACTOR: f64 = 0.125;
/// Automatic shrink never takes the bucket count below this floor.
pub const SHRINK_FLOOR: usize = 20;

const DEFAULT_BUCKETS: usize = 16;

/// Errors reported by table construction and mutation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MapError {
    /// Construction or resize was asked for a zero-bucket table.
    ZeroBuckets,
    /// A key's kind differs from the table's declared key kind.
    KeyKindMismatch {
        expected: ScalarKind,
        found: ScalarKind,
    },
    /// A batch operation was handed an empty key slice.
    EmptyBatch,
    /// Batch insert key and value slices disagree in length.
    LengthMismatch { keys: usize, values: usize },
    /// Strict batch removal: this many keys were not present.
    MissingKeys { missing: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::ZeroBuckets => write!(f, "a table must have at least one bucket"),
            MapError::KeyKindMismatch { expected, found } => {
                write!(f, "key kind mismatch: table holds {expected} keys, got {found}")
            }
            MapError::EmptyBatch => write!(f, "batch operation over an empty slice"),
            MapError::LengthMismatch { keys, values } => {
                write!(f, "batch insert with {keys} keys but {values} values")
            }
            MapError::MissingKeys { missing } => {
                write!(f, "strict batch removal: {missing} key(s) not present")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: Scalar,
    pub(crate) value: Scalar,
    /// Cached at insert; resize always rehashes from this, never from
    /// the key itself.
    hash: u64,
    next: Option<DefaultKey>,
}

/// A chained hash table keyed by one fixed scalar kind.
///
/// Buckets hold the heads of singly linked chains; the links are slot
/// keys into an entry arena, so an entry is relinked (never copied)
/// when the table resizes. Chains are most-recently-inserted-first.
pub struct TaggedHashMap {
    // Invariant: every key linked from `buckets` is live in `entries`,
    // each live entry is linked from exactly one chain, and
    // `buckets.len() > 0`.
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry>,
    key_kind: ScalarKind,
}

/// Borrowed view of a live entry, returned by [`TaggedHashMap::find`].
/// The borrow ties it to the table; any mutation ends its lifetime.
#[derive(Copy, Clone, Debug)]
pub struct EntryRef<'a> {
    key: &'a Scalar,
    value: &'a Scalar,
}

impl<'a> EntryRef<'a> {
    pub fn key(&self) -> &'a Scalar {
        self.key
    }
    pub fn value(&self) -> &'a Scalar {
        self.value
    }
}

impl TaggedHashMap {
    /// A table with the default initial bucket count.
    pub fn new(key_kind: ScalarKind) -> Self {
        Self::with_bucket_count(key_kind, DEFAULT_BUCKETS)
            .expect("default bucket count is nonzero")
    }

    /// A table with an explicit initial bucket count. Fails with
    /// [`MapError::ZeroBuckets`] when `bucket_count` is zero.
    pub fn with_bucket_count(key_kind: ScalarKind, bucket_count: usize) -> Result<Self, MapError> {
        if bucket_count == 0 {
            return Err(MapError::ZeroBuckets);
        }
        Ok(Self {
            buckets: vec![None; bucket_count],
            entries: SlotMap::with_key(),
            key_kind,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_kind(&self) -> ScalarKind {
        self.key_kind
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.buckets.len() as f64
    }

    pub(crate) fn check_key_kind(&self, found: ScalarKind) -> Result<(), MapError> {
        if found == self.key_kind {
            Ok(())
        } else {
            Err(MapError::KeyKindMismatch {
                expected: self.key_kind,
                found,
            })
        }
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Insert or update. On update the old value is returned and the
    /// stored key is left untouched, so a float key that is
    /// epsilon-equal but bit-different never replaces the one already
    /// in the table. Grows the table when the load factor passes
    /// [`MAX_LOAD_FACTOR`].
    pub fn insert(&mut self, key: Scalar, value: Scalar) -> Result<Option<Scalar>, MapError> {
        self.check_key_kind(key.kind())?;
        let hash = key_ops::hash_scalar(&key);
        let idx = self.bucket_of(hash);

        let mut cur = self.buckets[idx];
        while let Some(slot) = cur {
            cur = self.entries[slot].next;
            if key_ops::compare_scalars(&self.entries[slot].key, &key) == Ordering::Equal {
                let old = std::mem::replace(&mut self.entries[slot].value, value);
                return Ok(Some(old));
            }
        }

        let head = self.buckets[idx];
        let slot = self.entries.insert(Entry {
            key,
            value,
            hash,
            next: head,
        });
        self.buckets[idx] = Some(slot);

        if self.load_factor() > MAX_LOAD_FACTOR {
            let grown = self.buckets.len() * 2;
            self.rebucket(grown);
        }
        Ok(None)
    }

    /// Look up an entry. Absent keys, and keys of the wrong kind, both
    /// come back as `None`.
    pub fn find(&self, key: &Scalar) -> Option<EntryRef<'_>> {
        if key.kind() != self.key_kind {
            return None;
        }
        let idx = self.bucket_of(key_ops::hash_scalar(key));
        self.chain_at(idx)
            .find(|e| key_ops::compare_scalars(&e.key, key) == Ordering::Equal)
            .map(|e| EntryRef {
                key: &e.key,
                value: &e.value,
            })
    }

    /// [`find`](Self::find) reduced to the value.
    pub fn get(&self, key: &Scalar) -> Option<&Scalar> {
        self.find(key).map(|e| e.value)
    }

    /// [`find`](Self::find) reduced to a boolean.
    pub fn contains_key(&self, key: &Scalar) -> bool {
        self.find(key).is_some()
    }

    /// Remove a key's entry, returning its key and value. `Ok(None)`
    /// when absent. Shrinks the table when the load factor falls below
    /// [`MIN_LOAD_FACTOR`] and the bucket count is at least
    /// [`SHRINK_FLOOR`].
    pub fn remove(&mut self, key: &Scalar) -> Result<Option<(Scalar, Scalar)>, MapError> {
        self.check_key_kind(key.kind())?;
        let idx = self.bucket_of(key_ops::hash_scalar(key));

        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(slot) = cur {
            let next = self.entries[slot].next;
            if key_ops::compare_scalars(&self.entries[slot].key, key) == Ordering::Equal {
                match prev {
                    None => self.buckets[idx] = next,
                    Some(p) => self.entries[p].next = next,
                }
                let entry = self
                    .entries
                    .remove(slot)
                    .expect("chain links only reference live slots");
                self.maybe_shrink();
                return Ok(Some((entry.key, entry.value)));
            }
            prev = Some(slot);
            cur = next;
        }
        Ok(None)
    }

    fn maybe_shrink(&mut self) {
        if self.load_factor() < MIN_LOAD_FACTOR && self.buckets.len() >= SHRINK_FLOOR {
            let target = (self.buckets.len() * 3 / 4).max(SHRINK_FLOOR);
            if target < self.buckets.len() {
                self.rebucket(target);
            }
        }
    }

    /// Rehash every entry into `new_bucket_count` buckets. Entries are
    /// relinked in place using their cached hashes; no key or value
    /// data moves. Fails with [`MapError::ZeroBuckets`] when asked for
    /// zero buckets.
    pub fn resize(&mut self, new_bucket_count: usize) -> Result<(), MapError> {
        if new_bucket_count == 0 {
            return Err(MapError::ZeroBuckets);
        }
        self.rebucket(new_bucket_count);
        Ok(())
    }

    fn rebucket(&mut self, new_bucket_count: usize) {
        debug_assert!(new_bucket_count > 0);
        let old = std::mem::replace(&mut self.buckets, vec![None; new_bucket_count]);
        for mut cur in old {
            while let Some(slot) = cur {
                cur = self.entries[slot].next;
                let idx = (self.entries[slot].hash % new_bucket_count as u64) as usize;
                self.entries[slot].next = self.buckets[idx];
                self.buckets[idx] = Some(slot);
            }
        }
    }

    /// Drop every entry but keep the bucket array and its size.
    pub fn clear(&mut self) {
        self.entries.clear();
        for head in &mut self.buckets {
            *head = None;
        }
    }

    /// Iterate one bucket's chain in chain order.
    pub(crate) fn chain_at(&self, idx: usize) -> ChainIter<'_> {
        ChainIter {
            entries: &self.entries,
            cur: self.buckets[idx],
        }
    }

    /// Iterate every live entry in bucket-traversal order.
    pub(crate) fn iter_entries(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flat_map(|&head| ChainIter {
            entries: &self.entries,
            cur: head,
        })
    }
}

impl fmt::Debug for TaggedHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedHashMap")
            .field("key_kind", &self.key_kind)
            .field("key_count", &self.len())
            .field("bucket_count", &self.bucket_count())
            .field("load_factor", &self.load_factor())
            .finish_non_exhaustive()
    }
}

pub(crate) struct ChainIter<'a> {
    entries: &'a SlotMap<DefaultKey, Entry>,
    cur: Option<DefaultKey>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let slot = self.cur?;
        let entry = &self.entries[slot];
        self.cur = entry.next;
        Some(entry)
    }
}
