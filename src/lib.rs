//! tagged-hashmap: a single-threaded chained hash table whose keys are
//! tagged scalars of one fixed kind per table, and whose values may mix
//! scalar kinds freely within the same table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a classic buckets-and-chains table with an explicit,
//!   observable resize policy, built from safe, separately verifiable
//!   pieces.
//! - Layers:
//!   - Scalar / ScalarKind / ScalarSlice: the closed key/value domain
//!     (int, text, float32, float64) as a sum type, so the discriminant
//!     and payload can never disagree.
//!   - key_ops: per-kind hash and compare, selected by pattern match on
//!     the discriminant. Text hashes with the djb2 recurrence; floats
//!     hash by bit pattern but compare with a per-width epsilon.
//!   - TaggedHashMap: the bucket array plus an entry arena. Chains are
//!     slot keys into the arena instead of owning pointers; a resize
//!     relinks entries without moving key or value data.
//!   - Bulk operations: whole-table key/value snapshots and batch
//!     insert/remove over typed slices.
//!   - Stats / Dump: summary and full-table diagnostics as `Display`
//!     adapters.
//!
//! Constraints
//! - Single-threaded, synchronous; no operation suspends or blocks.
//! - One key kind per table, fixed at construction and checked on every
//!   keyed operation. Values are unconstrained within the scalar domain.
//! - Load factor is kept within [0.125, 0.75] by doubling on growth and
//!   shrinking to 3/4, with a 20-bucket floor for automatic shrink.
//!   Violations are transient within a single insert or remove.
//! - Chains are most-recently-inserted-first; an update replaces the
//!   value in place and never touches the stored key.
//!
//! Hashing invariants
//! - Each entry caches its key's hash at insert and rehashing on resize
//!   always uses the cached hash, so a resize never recomputes or
//!   reinterprets keys.
//! - Float keys hash by raw bit pattern while comparing with epsilon
//!   tolerance. Two epsilon-equal floats with different bit patterns can
//!   therefore land in different buckets and will not find each other.
//!   This matches the behavior the table has always had; see `key_ops`
//!   for the tests that pin it down.
//!
//! Notes and non-goals
//! - No persistence, no internal locking, no iteration cursors: the only
//!   whole-table reads are the `keys()` / `values()` snapshots and the
//!   diagnostic dumps.
//! - `find` borrows into the table; the borrow checker enforces that no
//!   entry reference outlives a subsequent mutation.
//! - Destruction is `Drop`: entries, owned text, and the bucket array
//!   are released together, and a moved-out table cannot be destroyed
//!   twice.

mod bulk;
mod key_ops;
mod scalar;
mod stats;
mod tagged_hash_map;

// Public surface
pub use scalar::{Scalar, ScalarKind, ScalarSlice};
pub use stats::{Dump, TableStats};
pub use tagged_hash_map::{
    EntryRef, MapError, TaggedHashMap, MAX_LOAD_FACTOR, MIN_LOAD_FACTOR, SHRINK_FLOOR,
};
