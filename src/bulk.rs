//! Whole-table snapshots and batch insert/remove over typed slices.

use crate::scalar::{Scalar, ScalarSlice};
use crate::tagged_hash_map::{MapError, TaggedHashMap};

impl TaggedHashMap {
    /// A newly owned snapshot of every key, in bucket-traversal order.
    /// Text is deep-copied, so the snapshot outlives the table.
    pub fn keys(&self) -> Vec<Scalar> {
        self.iter_entries().map(|e| e.key.clone()).collect()
    }

    /// A newly owned snapshot of every value, in bucket-traversal
    /// order. Text is deep-copied, so the snapshot outlives the table.
    pub fn values(&self) -> Vec<Scalar> {
        self.iter_entries().map(|e| e.value.clone()).collect()
    }

    /// Convert both slices and insert the pairs in order.
    ///
    /// The key slice must be non-empty, match the value slice in
    /// length, and carry the table's key kind; all three are checked
    /// before any insertion. Each converted pair is consumed by its own
    /// insertion attempt, and pairs inserted before a failure stay in
    /// the table.
    pub fn batch_insert(
        &mut self,
        keys: ScalarSlice<'_>,
        values: ScalarSlice<'_>,
    ) -> Result<(), MapError> {
        if keys.is_empty() {
            return Err(MapError::EmptyBatch);
        }
        if keys.len() != values.len() {
            return Err(MapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        self.check_key_kind(keys.kind())?;

        for (key, value) in keys.to_scalars().into_iter().zip(values.to_scalars()) {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Convert the slice and remove each key in order.
    ///
    /// In strict mode, keys that were not present make the call report
    /// [`MapError::MissingKeys`], but removal of the remaining keys
    /// still proceeds: the failure is aggregated, never
    /// short-circuited.
    pub fn batch_remove(&mut self, keys: ScalarSlice<'_>, strict: bool) -> Result<(), MapError> {
        if keys.is_empty() {
            return Err(MapError::EmptyBatch);
        }
        self.check_key_kind(keys.kind())?;

        let mut missing = 0usize;
        for key in keys.to_scalars() {
            if self.remove(&key)?.is_none() {
                missing += 1;
            }
        }
        if strict && missing > 0 {
            Err(MapError::MissingKeys { missing })
        } else {
            Ok(())
        }
    }
}
