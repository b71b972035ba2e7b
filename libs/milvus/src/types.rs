use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use protos::milvus::proto::{common as proto_common, milvus as proto_milvus, schema as proto_schema};
use serde::{Deserialize, Serialize};

use crate::error::{MilvusError, MilvusResult};

/// Read consistency relative to prior writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsistencyLevel {
    Strong,
    #[default]
    Session,
    Bounded,
    Eventually,
    Customized,
}

impl ConsistencyLevel {
    pub fn as_i32(self) -> i32 {
        self.to_proto() as i32
    }

    pub fn to_proto(self) -> proto_common::ConsistencyLevel {
        match self {
            ConsistencyLevel::Strong => proto_common::ConsistencyLevel::Strong,
            ConsistencyLevel::Session => proto_common::ConsistencyLevel::Session,
            ConsistencyLevel::Bounded => proto_common::ConsistencyLevel::Bounded,
            ConsistencyLevel::Eventually => proto_common::ConsistencyLevel::Eventually,
            ConsistencyLevel::Customized => proto_common::ConsistencyLevel::Customized,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => ConsistencyLevel::Strong,
            2 => ConsistencyLevel::Bounded,
            3 => ConsistencyLevel::Eventually,
            4 => ConsistencyLevel::Customized,
            _ => ConsistencyLevel::Session,
        }
    }
}

/// Similarity metric. Rendered as the upper-case name Milvus expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricType {
    L2,
    IP,
    Cosine,
    Jaccard,
    Tanimoto,
    Hamming,
    Superstructure,
    Substructure,
}

impl MetricType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::L2 => "L2",
            MetricType::IP => "IP",
            MetricType::Cosine => "COSINE",
            MetricType::Jaccard => "JACCARD",
            MetricType::Tanimoto => "TANIMOTO",
            MetricType::Hamming => "HAMMING",
            MetricType::Superstructure => "SUPERSTRUCTURE",
            MetricType::Substructure => "SUBSTRUCTURE",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = MilvusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L2" => Ok(MetricType::L2),
            "IP" => Ok(MetricType::IP),
            "COSINE" => Ok(MetricType::Cosine),
            "JACCARD" => Ok(MetricType::Jaccard),
            "TANIMOTO" => Ok(MetricType::Tanimoto),
            "HAMMING" => Ok(MetricType::Hamming),
            "SUPERSTRUCTURE" => Ok(MetricType::Superstructure),
            "SUBSTRUCTURE" => Ok(MetricType::Substructure),
            other => Err(MilvusError::validation(format!("Unknown metric type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexType {
    Flat,
    IvfFlat,
    IvfSq8,
    IvfPq,
    Hnsw,
    Annoy,
    DiskAnn,
    AutoIndex,
    BinFlat,
    BinIvfFlat,
}

impl IndexType {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexType::Flat => "FLAT",
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::IvfSq8 => "IVF_SQ8",
            IndexType::IvfPq => "IVF_PQ",
            IndexType::Hnsw => "HNSW",
            IndexType::Annoy => "ANNOY",
            IndexType::DiskAnn => "DISKANN",
            IndexType::AutoIndex => "AUTOINDEX",
            IndexType::BinFlat => "BIN_FLAT",
            IndexType::BinIvfFlat => "BIN_IVF_FLAT",
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexType {
    type Err = MilvusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FLAT" => Ok(IndexType::Flat),
            "IVF_FLAT" => Ok(IndexType::IvfFlat),
            "IVF_SQ8" => Ok(IndexType::IvfSq8),
            "IVF_PQ" => Ok(IndexType::IvfPq),
            "HNSW" => Ok(IndexType::Hnsw),
            "ANNOY" => Ok(IndexType::Annoy),
            "DISKANN" => Ok(IndexType::DiskAnn),
            "AUTOINDEX" => Ok(IndexType::AutoIndex),
            "BIN_FLAT" => Ok(IndexType::BinFlat),
            "BIN_IVF_FLAT" => Ok(IndexType::BinIvfFlat),
            other => Err(MilvusError::validation(format!("Unknown index type: {}", other))),
        }
    }
}

/// Which collections `show_collections` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowType {
    #[default]
    All,
    /// Only loaded collections, with their in-memory percentage.
    InMemory,
}

impl ShowType {
    pub fn as_i32(self) -> i32 {
        match self {
            ShowType::All => proto_milvus::ShowType::All as i32,
            ShowType::InMemory => proto_milvus::ShowType::InMemory as i32,
        }
    }
}

/// Index build state.
///
/// The server's `Unissued` and `Retry` are reported as `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexState {
    None,
    InProgress,
    Finished,
    Failed,
}

impl IndexState {
    pub fn from_i32(value: i32) -> Self {
        match proto_common::IndexState::try_from(value) {
            Ok(proto_common::IndexState::Unissued)
            | Ok(proto_common::IndexState::InProgress)
            | Ok(proto_common::IndexState::Retry) => IndexState::InProgress,
            Ok(proto_common::IndexState::Finished) => IndexState::Finished,
            Ok(proto_common::IndexState::Failed) => IndexState::Failed,
            Ok(proto_common::IndexState::None) | Err(_) => IndexState::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompactionState {
    Undefined,
    Executing,
    Completed,
}

impl CompactionState {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => CompactionState::Executing,
            2 => CompactionState::Completed,
            _ => CompactionState::Undefined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentState {
    None,
    NotExist,
    Growing,
    Sealed,
    Flushed,
    Flushing,
    Dropped,
    Importing,
}

impl SegmentState {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => SegmentState::NotExist,
            2 => SegmentState::Growing,
            3 => SegmentState::Sealed,
            4 => SegmentState::Flushed,
            5 => SegmentState::Flushing,
            6 => SegmentState::Dropped,
            7 => SegmentState::Importing,
            _ => SegmentState::None,
        }
    }
}

/// Field data type, with Milvus' wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    VarChar,
    BinaryVector,
    FloatVector,
}

impl DataType {
    pub fn code(self) -> i32 {
        let data_type = match self {
            DataType::Bool => proto_schema::DataType::Bool,
            DataType::Int8 => proto_schema::DataType::Int8,
            DataType::Int16 => proto_schema::DataType::Int16,
            DataType::Int32 => proto_schema::DataType::Int32,
            DataType::Int64 => proto_schema::DataType::Int64,
            DataType::Float => proto_schema::DataType::Float,
            DataType::Double => proto_schema::DataType::Double,
            DataType::String => proto_schema::DataType::String,
            DataType::VarChar => proto_schema::DataType::VarChar,
            DataType::BinaryVector => proto_schema::DataType::BinaryVector,
            DataType::FloatVector => proto_schema::DataType::FloatVector,
        };
        data_type as i32
    }

    pub fn from_code(code: i32) -> MilvusResult<Self> {
        match proto_schema::DataType::try_from(code) {
            Ok(proto_schema::DataType::Bool) => Ok(DataType::Bool),
            Ok(proto_schema::DataType::Int8) => Ok(DataType::Int8),
            Ok(proto_schema::DataType::Int16) => Ok(DataType::Int16),
            Ok(proto_schema::DataType::Int32) => Ok(DataType::Int32),
            Ok(proto_schema::DataType::Int64) => Ok(DataType::Int64),
            Ok(proto_schema::DataType::Float) => Ok(DataType::Float),
            Ok(proto_schema::DataType::Double) => Ok(DataType::Double),
            Ok(proto_schema::DataType::String) => Ok(DataType::String),
            Ok(proto_schema::DataType::VarChar) => Ok(DataType::VarChar),
            Ok(proto_schema::DataType::BinaryVector) => Ok(DataType::BinaryVector),
            Ok(proto_schema::DataType::FloatVector) => Ok(DataType::FloatVector),
            Ok(proto_schema::DataType::None) | Err(_) => Err(MilvusError::Transport(format!(
                "Unsupported data type code {}",
                code
            ))),
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(self, DataType::BinaryVector | DataType::FloatVector)
    }
}

/// Milvus hybrid timestamp: physical milliseconds shifted past 18 logical bits.
pub fn to_hybrid_timestamp(time: DateTime<Utc>) -> u64 {
    (time.timestamp_millis().max(0) as u64) << 18
}

pub fn from_hybrid_timestamp(ts: u64) -> Option<DateTime<Utc>> {
    if ts == 0 {
        return None;
    }
    DateTime::from_timestamp_millis((ts >> 18) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_hybrid_timestamp() {
        let time = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        let ts = to_hybrid_timestamp(time);
        assert_eq!(ts, (time.timestamp_millis() as u64) << 18);
        assert_eq!(from_hybrid_timestamp(ts), Some(time));
        assert_eq!(from_hybrid_timestamp(0), None);
    }

    #[test]
    fn test_index_state_folds_unissued_and_retry() {
        assert_eq!(IndexState::from_i32(0), IndexState::None);
        assert_eq!(IndexState::from_i32(1), IndexState::InProgress);
        assert_eq!(IndexState::from_i32(2), IndexState::InProgress);
        assert_eq!(IndexState::from_i32(3), IndexState::Finished);
        assert_eq!(IndexState::from_i32(4), IndexState::Failed);
        assert_eq!(IndexState::from_i32(5), IndexState::InProgress);
    }

    #[test]
    fn test_metric_and_index_names() {
        assert_eq!(MetricType::IP.to_string(), "IP");
        assert_eq!("cosine".parse::<MetricType>().unwrap(), MetricType::Cosine);
        assert_eq!(IndexType::IvfFlat.as_str(), "IVF_FLAT");
        assert_eq!("AUTOINDEX".parse::<IndexType>().unwrap(), IndexType::AutoIndex);
        assert!("SPHERE".parse::<IndexType>().is_err());
    }

    #[test]
    fn test_data_type_codes() {
        assert_eq!(DataType::VarChar.code(), 21);
        assert_eq!(DataType::FloatVector.code(), 101);
        assert_eq!(DataType::from_code(5).unwrap(), DataType::Int64);
        assert!(DataType::from_code(0).is_err());
    }
}
