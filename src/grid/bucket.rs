//! Cell buckets.

use super::CellHash;
use rustc_hash::FxHashMap;

/// Point ids grouped by the cell they hash into.
///
/// Built once from the per-point hashes and read-only afterwards. Every id
/// lands in exactly one bucket, and ids within a bucket stay in ascending
/// order. Looking up a cell without points yields an empty slice.
#[derive(Debug, Clone, Default)]
pub struct BucketIndex {
    buckets: FxHashMap<CellHash, Vec<usize>>,
}

impl BucketIndex {
    /// Group point ids by hash, where `hashes[i]` is the cell of point `i`.
    ///
    /// Ids are sorted by hash and the sorted run is cut wherever the hash
    /// changes; the stable sort keeps ids ascending inside each run.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridhash::grid::BucketIndex;
    ///
    /// let buckets = BucketIndex::from_hashes(&[7, 3, 7, 1]);
    /// assert_eq!(buckets.get(7), &[0, 2]);
    /// assert_eq!(buckets.get(3), &[1]);
    /// assert!(buckets.get(4).is_empty());
    /// ```
    pub fn from_hashes(hashes: &[CellHash]) -> Self {
        let mut order: Vec<usize> = (0..hashes.len()).collect();
        order.sort_by_key(|&i| hashes[i]);

        let mut buckets =
            FxHashMap::with_capacity_and_hasher(hashes.len().min(1024), Default::default());
        for run in order.chunk_by(|&a, &b| hashes[a] == hashes[b]) {
            buckets.insert(hashes[run[0]], run.to_vec());
        }

        Self { buckets }
    }

    /// Ids in cell `hash`; empty when the cell holds no points.
    pub fn get(&self, hash: CellHash) -> &[usize] {
        self.buckets.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_cell(&self, hash: CellHash) -> bool {
        self.buckets.contains_key(&hash)
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn point_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellHash, &[usize])> {
        self.buckets.iter().map(|(&hash, ids)| (hash, ids.as_slice()))
    }
}
