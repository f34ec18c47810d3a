//! Diagnostics: a summary of the table's shape and a full dump of its
//! buckets and entries, both rendered through `Display`.

use crate::tagged_hash_map::TaggedHashMap;
use std::fmt;

/// Summary of a table's shape at one point in time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableStats {
    pub bucket_count: usize,
    pub key_count: usize,
    pub load_factor: f64,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bucket count: {}", self.bucket_count)?;
        writeln!(f, "key count: {}", self.key_count)?;
        write!(f, "load factor: {:.2}", self.load_factor)
    }
}

/// Full human-readable dump of every non-empty bucket, borrowed from
/// the table by [`TaggedHashMap::dump`].
pub struct Dump<'a> {
    map: &'a TaggedHashMap,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.map.stats())?;
        for idx in 0..self.map.bucket_count() {
            let entries: Vec<_> = self.map.chain_at(idx).collect();
            if entries.is_empty() {
                continue;
            }
            writeln!(f, "bucket[{idx}]: {} entries", entries.len())?;
            for entry in entries {
                writeln!(f, "  {} => {} ({})", entry.key, entry.value, entry.value.kind())?;
            }
        }
        Ok(())
    }
}

impl TaggedHashMap {
    pub fn stats(&self) -> TableStats {
        TableStats {
            bucket_count: self.bucket_count(),
            key_count: self.len(),
            load_factor: self.load_factor(),
        }
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump { map: self }
    }
}
