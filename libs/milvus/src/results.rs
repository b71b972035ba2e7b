use std::collections::HashMap;
use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::ErrorCode;
use crate::schema::CollectionSchema;
use crate::types::{CompactionState, ConsistencyLevel, IndexState, SegmentState};

/// A single primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Int(v) => write!(f, "{}", v),
            Id::Str(v) => f.write_str(v),
        }
    }
}

/// Primary keys as returned by the server, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ids {
    Int(Vec<i64>),
    Str(Vec<String>),
}

impl Default for Ids {
    fn default() -> Self {
        Ids::Int(Vec::new())
    }
}

impl Ids {
    pub fn len(&self) -> usize {
        match self {
            Ids::Int(v) => v.len(),
            Ids::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Id> {
        match self {
            Ids::Int(v) => v.get(index).copied().map(Id::Int),
            Ids::Str(v) => v.get(index).cloned().map(Id::Str),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|id| id.to_string()).collect()
    }
}

/// Outcome of an insert or delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    pub insert_count: i64,
    pub delete_count: i64,
    pub upsert_count: i64,
    pub ids: Ids,
    pub success_index: Vec<u32>,
    pub error_index: Vec<u32>,
    /// Hybrid timestamp of the mutation
    pub timestamp: u64,
}

/// Columnar result of a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<Column>,
}

impl QueryResult {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}

/// One ranked match of one query vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: Id,
    pub score: f32,
    /// Row of this hit in `SearchResult::columns`
    pub row: usize,
}

/// Search outcome. Hits of all queries are concatenated; `top_ks` holds
/// how many belong to each query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub collection_name: String,
    pub num_queries: i64,
    pub top_k: i64,
    pub ids: Ids,
    pub scores: Vec<f32>,
    pub columns: Vec<Column>,
    pub top_ks: Vec<i64>,
    pub output_fields: Vec<String>,
}

impl SearchResult {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    fn range(&self, query: usize) -> Option<Range<usize>> {
        let count = usize::try_from(*self.top_ks.get(query)?).ok()?;
        let start: usize = self.top_ks[..query]
            .iter()
            .map(|k| usize::try_from(*k).unwrap_or(0))
            .sum();
        Some(start..start + count)
    }

    /// Hits of the given query, in server order.
    pub fn hits(&self, query: usize) -> Vec<SearchHit> {
        let Some(range) = self.range(query) else {
            return Vec::new();
        };
        range
            .filter_map(|row| {
                Some(SearchHit {
                    id: self.ids.get(row)?,
                    score: *self.scores.get(row)?,
                    row,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDescription {
    pub collection_id: i64,
    pub collection_name: String,
    pub schema: CollectionSchema,
    pub shards_num: i32,
    pub consistency_level: ConsistencyLevel,
    pub aliases: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub virtual_channel_names: Vec<String>,
    pub physical_channel_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub id: i64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    /// -1 when the server did not report it
    pub in_memory_percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionInfo {
    pub id: i64,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    /// -1 when the server did not report it
    pub in_memory_percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescription {
    pub index_name: String,
    pub index_id: i64,
    pub field_name: String,
    pub params: HashMap<String, String>,
    pub indexed_rows: i64,
    pub total_rows: i64,
    pub state: IndexState,
    pub fail_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBuildProgress {
    pub indexed_rows: i64,
    pub total_rows: i64,
}

impl IndexBuildProgress {
    pub fn is_complete(&self) -> bool {
        self.indexed_rows >= self.total_rows
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlushResult {
    /// Segment ids per collection
    pub segment_ids: HashMap<String, Vec<i64>>,
    pub flushed_segment_ids: HashMap<String, Vec<i64>>,
    pub seal_times: HashMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentSegmentInfo {
    pub segment_id: i64,
    pub collection_id: i64,
    pub partition_id: i64,
    pub num_rows: i64,
    pub state: SegmentState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySegmentInfo {
    pub segment_id: i64,
    pub collection_id: i64,
    pub partition_id: i64,
    pub mem_size: i64,
    pub num_rows: i64,
    pub index_name: String,
    pub index_id: i64,
    pub node_ids: Vec<i64>,
    pub state: SegmentState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthState {
    pub is_healthy: bool,
    pub reasons: Vec<String>,
    /// Set when the server reported a non-success status with the health check
    pub error_code: Option<ErrorCode>,
}

impl HealthState {
    pub fn healthy() -> Self {
        Self {
            is_healthy: true,
            reasons: Vec::new(),
            error_code: None,
        }
    }

    pub fn unhealthy(reasons: Vec<String>, error_code: Option<ErrorCode>) -> Self {
        Self {
            is_healthy: false,
            reasons,
            error_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionMerge {
    pub sources: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionPlans {
    pub state: CompactionState,
    pub merge_infos: Vec<CompactionMerge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// JSON document produced by the server
    pub response: String,
    pub component_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistanceValues {
    /// Hamming distances
    Int(Vec<i32>),
    Float(Vec<f32>),
}

/// Row-major `left x right` distance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    pub columns: usize,
    pub values: DistanceValues,
}

impl DistanceMatrix {
    pub fn get(&self, left: usize, right: usize) -> Option<f64> {
        if right >= self.columns {
            return None;
        }
        let index = left * self.columns + right;
        match &self.values {
            DistanceValues::Int(v) => v.get(index).map(|d| f64::from(*d)),
            DistanceValues::Float(v) => v.get(index).map(|d| f64::from(*d)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_query_result() -> SearchResult {
        SearchResult {
            num_queries: 2,
            top_k: 2,
            ids: Ids::Str(vec!["a".into(), "b".into(), "c".into()]),
            scores: vec![0.9, 0.5, 0.7],
            columns: vec![Column::varchar(
                "metadata",
                vec!["ma".into(), "mb".into(), "mc".into()],
            )],
            top_ks: vec![2, 1],
            ..Default::default()
        }
    }

    #[test]
    fn test_hits_are_sliced_per_query() {
        let result = two_query_result();
        let first = result.hits(0);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, Id::Str("a".into()));
        assert_eq!(first[1].row, 1);

        let second = result.hits(1);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, Id::Str("c".into()));
        assert_eq!(second[0].row, 2);
        assert!((second[0].score - 0.7).abs() < f32::EPSILON);

        assert!(result.hits(2).is_empty());
    }

    #[test]
    fn test_ids_to_strings() {
        assert_eq!(Ids::Int(vec![1, 2]).to_strings(), vec!["1", "2"]);
        assert!(Ids::default().is_empty());
    }

    #[test]
    fn test_distance_matrix_lookup() {
        let matrix = DistanceMatrix {
            columns: 2,
            values: DistanceValues::Float(vec![0.0, 1.0, 2.0, 3.0]),
        };
        assert_eq!(matrix.get(1, 0), Some(2.0));
        assert_eq!(matrix.get(0, 2), None);
    }
}
