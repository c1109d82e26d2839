use serde::{Deserialize, Serialize};

/// Outcome of one radius query.
///
/// `candidates_examined` counts every point the exact-distance filter looked
/// at, so `indices.len() / candidates_examined` measures how selective the
/// index was for this query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborResult {
    /// Neighbor ids in ascending order
    pub indices: Vec<usize>,
    pub candidates_examined: usize,
}

impl NeighborResult {
    pub fn new(indices: Vec<usize>, candidates_examined: usize) -> Self {
        Self {
            indices,
            candidates_examined,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, point_id: usize) -> bool {
        self.indices.binary_search(&point_id).is_ok()
    }

    /// Fraction of examined candidates that were true neighbors.
    ///
    /// A query that examined nothing is perfectly selective.
    pub fn selectivity(&self) -> f64 {
        if self.candidates_examined == 0 {
            1.0
        } else {
            self.indices.len() as f64 / self.candidates_examined as f64
        }
    }
}

/// Totals accumulated over many queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub queries: usize,
    pub neighbors_found: usize,
    pub candidates_examined: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &NeighborResult) {
        self.queries += 1;
        self.neighbors_found += result.indices.len();
        self.candidates_examined += result.candidates_examined;
    }

    pub fn selectivity(&self) -> f64 {
        if self.candidates_examined == 0 {
            1.0
        } else {
            self.neighbors_found as f64 / self.candidates_examined as f64
        }
    }

    pub fn mean_candidates(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.candidates_examined as f64 / self.queries as f64
        }
    }
}

impl<'a> FromIterator<&'a NeighborResult> for SearchStats {
    fn from_iter<I: IntoIterator<Item = &'a NeighborResult>>(iter: I) -> Self {
        let mut stats = Self::new();
        for result in iter {
            stats.record(result);
        }
        stats
    }
}
