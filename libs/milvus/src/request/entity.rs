use std::collections::HashMap;

use chrono::{DateTime, Utc};
use prost::Message;
use protos::milvus::proto::common as proto_common;
use protos::milvus::proto::milvus as proto;
use protos::milvus::proto::schema as proto_schema;
use reqwest::Method;
use serde_json::json;

use super::{
    MilvusRequest, RestRequest, Validate, combine_params, key_value, key_values_json, require_name,
    require_names, require_positive,
};
use crate::column::{Column, VectorData, validate_columns};
use crate::error::{MilvusError, MilvusResult};
use crate::grpc::convert::vector_field;
use crate::rest::wire::{column_json, vector_rows_json};
use crate::types::{ConsistencyLevel, MetricType, to_hybrid_timestamp};

fn hybrid(time: Option<DateTime<Utc>>) -> u64 {
    time.map(to_hybrid_timestamp).unwrap_or(0)
}

/// Column-oriented insert. All columns must carry the same number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRequest {
    pub collection_name: String,
    pub partition_name: Option<String>,
    pub columns: Vec<Column>,
}

impl InsertRequest {
    pub fn new(collection_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: None,
            columns,
        }
    }

    pub fn with_partition(mut self, partition_name: impl Into<String>) -> Self {
        self.partition_name = Some(partition_name.into());
        self
    }

    fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}

impl Validate for InsertRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        if let Some(partition) = &self.partition_name {
            require_name("partition_name", partition)?;
        }
        validate_columns(&self.columns).map(|_| ())
    }
}

impl MilvusRequest for InsertRequest {
    type Grpc = proto::InsertRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::InsertRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_name: self.partition_name.clone().unwrap_or_default(),
            fields_data: self.columns.iter().map(proto_schema::FieldData::from).collect(),
            num_rows: self.num_rows() as u32,
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        let fields: Vec<_> = self.columns.iter().map(column_json).collect();
        RestRequest::new(
            Method::POST,
            "/entities",
            json!({
                "collection_name": self.collection_name,
                "partition_name": self.partition_name.clone().unwrap_or_default(),
                "fields_data": fields,
                "num_rows": self.num_rows(),
                "db_name": db_name,
            }),
        )
    }
}

/// Deletes every entity matching a boolean expression, e.g. `id in [1, 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub collection_name: String,
    pub expr: String,
    pub partition_name: Option<String>,
}

impl DeleteRequest {
    pub fn new(collection_name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            expr: expr.into(),
            partition_name: None,
        }
    }

    pub fn with_partition(mut self, partition_name: impl Into<String>) -> Self {
        self.partition_name = Some(partition_name.into());
        self
    }
}

impl Validate for DeleteRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("expr", &self.expr)?;
        if let Some(partition) = &self.partition_name {
            require_name("partition_name", partition)?;
        }
        Ok(())
    }
}

impl MilvusRequest for DeleteRequest {
    type Grpc = proto::DeleteRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::DeleteRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_name: self.partition_name.clone().unwrap_or_default(),
            expr: self.expr.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::DELETE,
            "/entities",
            json!({
                "collection_name": self.collection_name,
                "partition_name": self.partition_name.clone().unwrap_or_default(),
                "expr": self.expr,
                "db_name": db_name,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub collection_name: String,
    pub expr: String,
    pub output_fields: Vec<String>,
    pub partition_names: Vec<String>,
    pub consistency_level: ConsistencyLevel,
    pub travel_timestamp: Option<DateTime<Utc>>,
    pub guarantee_timestamp: Option<DateTime<Utc>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl QueryRequest {
    pub fn new(collection_name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            expr: expr.into(),
            output_fields: Vec::new(),
            partition_names: Vec::new(),
            consistency_level: ConsistencyLevel::default(),
            travel_timestamp: None,
            guarantee_timestamp: None,
            offset: None,
            limit: None,
        }
    }

    pub fn with_output_fields(mut self, fields: Vec<String>) -> Self {
        self.output_fields = fields;
        self
    }

    pub fn with_partitions(mut self, partitions: Vec<String>) -> Self {
        self.partition_names = partitions;
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    pub fn with_travel_timestamp(mut self, time: DateTime<Utc>) -> Self {
        self.travel_timestamp = Some(time);
        self
    }

    pub fn with_guarantee_timestamp(mut self, time: DateTime<Utc>) -> Self {
        self.guarantee_timestamp = Some(time);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn query_params(&self) -> Vec<proto_common::KeyValuePair> {
        let mut params = Vec::new();
        if let Some(offset) = self.offset {
            params.push(key_value("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(key_value("limit", limit.to_string()));
        }
        params
    }
}

impl Validate for QueryRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("expr", &self.expr)?;
        if self.offset.is_some_and(|offset| offset < 0) {
            return Err(MilvusError::validation("offset cannot be negative"));
        }
        if let Some(limit) = self.limit {
            require_positive("limit", limit)?;
        }
        Ok(())
    }
}

impl MilvusRequest for QueryRequest {
    type Grpc = proto::QueryRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::QueryRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            expr: self.expr.clone(),
            output_fields: self.output_fields.clone(),
            partition_names: self.partition_names.clone(),
            travel_timestamp: hybrid(self.travel_timestamp),
            guarantee_timestamp: hybrid(self.guarantee_timestamp),
            query_params: self.query_params(),
            consistency_level: self.consistency_level.as_i32(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/query",
            json!({
                "collection_name": self.collection_name,
                "expr": self.expr,
                "output_fields": self.output_fields,
                "partition_names": self.partition_names,
                "travel_timestamp": hybrid(self.travel_timestamp),
                "guarantee_timestamp": hybrid(self.guarantee_timestamp),
                "query_params": key_values_json(&self.query_params()),
                "consistency_level": self.consistency_level.as_i32(),
                "db_name": db_name,
            }),
        )
    }
}

/// Approximate nearest-neighbour search over one vector field.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub collection_name: String,
    pub vector_field: String,
    /// One query per row
    pub vectors: VectorData,
    pub top_k: i64,
    pub metric_type: MetricType,
    /// Index search parameters such as `nprobe`
    pub params: HashMap<String, String>,
    pub consistency_level: ConsistencyLevel,
    pub partition_names: Vec<String>,
    /// Boolean filter applied before ranking
    pub expr: Option<String>,
    pub output_fields: Vec<String>,
    /// Digits kept in scores, -1 keeps all
    pub round_decimal: i32,
    pub ignore_growing: bool,
    pub travel_timestamp: Option<DateTime<Utc>>,
    pub guarantee_timestamp: Option<DateTime<Utc>>,
    pub offset: i64,
}

impl SearchRequest {
    pub fn new(
        collection_name: impl Into<String>,
        vector_field: impl Into<String>,
        vectors: VectorData,
        top_k: i64,
        metric_type: MetricType,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            vector_field: vector_field.into(),
            vectors,
            top_k,
            metric_type,
            params: HashMap::new(),
            consistency_level: ConsistencyLevel::default(),
            partition_names: Vec::new(),
            expr: None,
            output_fields: Vec::new(),
            round_decimal: -1,
            ignore_growing: false,
            travel_timestamp: None,
            guarantee_timestamp: None,
            offset: 0,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn with_output_fields(mut self, fields: Vec<String>) -> Self {
        self.output_fields = fields;
        self
    }

    pub fn with_partitions(mut self, partitions: Vec<String>) -> Self {
        self.partition_names = partitions;
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    pub fn with_round_decimal(mut self, round_decimal: i32) -> Self {
        self.round_decimal = round_decimal;
        self
    }

    pub fn with_ignore_growing(mut self, ignore_growing: bool) -> Self {
        self.ignore_growing = ignore_growing;
        self
    }

    pub fn with_travel_timestamp(mut self, time: DateTime<Utc>) -> Self {
        self.travel_timestamp = Some(time);
        self
    }

    pub fn with_guarantee_timestamp(mut self, time: DateTime<Utc>) -> Self {
        self.guarantee_timestamp = Some(time);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    fn search_params(&self) -> Vec<proto_common::KeyValuePair> {
        vec![
            key_value("anns_field", self.vector_field.as_str()),
            key_value("topk", self.top_k.to_string()),
            key_value("metric_type", self.metric_type.as_str()),
            key_value("params", combine_params(&self.params)),
            key_value("round_decimal", self.round_decimal.to_string()),
            key_value("offset", self.offset.to_string()),
            key_value("ignore_growing", self.ignore_growing.to_string()),
        ]
    }

    fn placeholder_group(&self) -> proto_common::PlaceholderGroup {
        let (kind, values) = match &self.vectors {
            VectorData::Float(rows) => (
                proto_common::PlaceholderType::FloatVector,
                rows.iter()
                    .map(|row| row.iter().flat_map(|v| v.to_le_bytes()).collect())
                    .collect(),
            ),
            VectorData::Binary(rows) => (proto_common::PlaceholderType::BinaryVector, rows.clone()),
        };
        proto_common::PlaceholderGroup {
            placeholders: vec![proto_common::PlaceholderValue {
                tag: "$0".to_string(),
                r#type: kind as i32,
                values,
            }],
        }
    }
}

impl Validate for SearchRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("collection_name", &self.collection_name)?;
        require_name("vector_field", &self.vector_field)?;
        self.vectors.validate("search vectors")?;
        require_positive("top_k", self.top_k)?;
        if self.round_decimal < -1 {
            return Err(MilvusError::validation("round_decimal must be -1 or greater"));
        }
        if self.offset < 0 {
            return Err(MilvusError::validation("offset cannot be negative"));
        }
        if let Some(expr) = &self.expr {
            require_name("expr", expr)?;
        }
        Ok(())
    }
}

impl MilvusRequest for SearchRequest {
    type Grpc = proto::SearchRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::SearchRequest {
            db_name: db_name.to_string(),
            collection_name: self.collection_name.clone(),
            partition_names: self.partition_names.clone(),
            dsl: self.expr.clone().unwrap_or_default(),
            placeholder_group: self.placeholder_group().encode_to_vec(),
            dsl_type: proto_common::DslType::BoolExprV1 as i32,
            output_fields: self.output_fields.clone(),
            search_params: self.search_params(),
            travel_timestamp: hybrid(self.travel_timestamp),
            guarantee_timestamp: hybrid(self.guarantee_timestamp),
            nq: self.vectors.len() as i64,
            consistency_level: self.consistency_level.as_i32(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/search",
            json!({
                "collection_name": self.collection_name,
                "partition_names": self.partition_names,
                "dsl": self.expr.clone().unwrap_or_default(),
                "dsl_type": proto_common::DslType::BoolExprV1 as i32,
                "output_fields": self.output_fields,
                "search_params": key_values_json(&self.search_params()),
                "vectors": vector_rows_json(&self.vectors),
                "travel_timestamp": hybrid(self.travel_timestamp),
                "guarantee_timestamp": hybrid(self.guarantee_timestamp),
                "nq": self.vectors.len(),
                "consistency_level": self.consistency_level.as_i32(),
                "db_name": db_name,
            }),
        )
    }
}

/// Pairwise distances between two vector sets, computed server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcDistanceRequest {
    pub left: VectorData,
    pub right: VectorData,
    pub metric_type: MetricType,
}

impl CalcDistanceRequest {
    pub fn new(left: VectorData, right: VectorData, metric_type: MetricType) -> Self {
        Self {
            left,
            right,
            metric_type,
        }
    }
}

impl Validate for CalcDistanceRequest {
    fn validate(&self) -> MilvusResult<()> {
        self.left.validate("left vectors")?;
        self.right.validate("right vectors")?;
        if self.left.dimension() != self.right.dimension() {
            return Err(MilvusError::validation(format!(
                "Vector dimensions differ: {} vs {}",
                self.left.dimension(),
                self.right.dimension()
            )));
        }
        Ok(())
    }
}

impl MilvusRequest for CalcDistanceRequest {
    type Grpc = proto::CalcDistanceRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        let array = |data: &VectorData| proto::VectorsArray {
            array: Some(proto::vectors_array::Array::DataArray(vector_field(data))),
        };
        proto::CalcDistanceRequest {
            op_left: Some(array(&self.left)),
            op_right: Some(array(&self.right)),
            params: vec![key_value("metric", self.metric_type.as_str())],
            ..Default::default()
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        let array = |data: &VectorData| {
            json!({
                "dim": data.dimension(),
                "vectors": vector_rows_json(data),
            })
        };
        RestRequest::new(
            Method::POST,
            "/distance",
            json!({
                "op_left": array(&self.left),
                "op_right": array(&self.right),
                "params": [{ "key": "metric", "value": self.metric_type.as_str() }],
            }),
        )
    }
}

/// Seals the growing segments of the given collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushRequest {
    pub collection_names: Vec<String>,
}

impl FlushRequest {
    pub fn new(collection_names: Vec<String>) -> Self {
        Self { collection_names }
    }
}

impl Validate for FlushRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_names("collection_names", &self.collection_names)
    }
}

impl MilvusRequest for FlushRequest {
    type Grpc = proto::FlushRequest;

    fn to_grpc(&self, db_name: &str) -> Self::Grpc {
        proto::FlushRequest {
            db_name: db_name.to_string(),
            collection_names: self.collection_names.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/persist",
            json!({
                "collection_names": self.collection_names,
                "db_name": db_name,
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFlushStateRequest {
    pub segment_ids: Vec<i64>,
}

impl GetFlushStateRequest {
    pub fn new(segment_ids: Vec<i64>) -> Self {
        Self { segment_ids }
    }
}

impl Validate for GetFlushStateRequest {
    fn validate(&self) -> MilvusResult<()> {
        if self.segment_ids.is_empty() {
            return Err(MilvusError::validation("segment_ids cannot be empty"));
        }
        Ok(())
    }
}

impl MilvusRequest for GetFlushStateRequest {
    type Grpc = proto::GetFlushStateRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::GetFlushStateRequest {
            segment_i_ds: self.segment_ids.clone(),
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::GET,
            "/persist/state",
            json!({ "segmentIDs": self.segment_ids }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;

    fn columns() -> Vec<Column> {
        vec![
            Column::int64("book_id", vec![1, 2]),
            Column::float_vector("book_intro", vec![vec![0.1, 0.2], vec![0.3, 0.4]]),
        ]
    }

    #[test]
    fn test_insert_grpc() {
        let grpc = InsertRequest::new("books", columns())
            .with_partition("novels")
            .build_grpc("default")
            .unwrap();

        assert_eq!(grpc.num_rows, 2);
        assert_eq!(grpc.partition_name, "novels");
        assert_eq!(grpc.fields_data.len(), 2);
        assert_eq!(grpc.fields_data[0].field_name, "book_id");
        assert_eq!(grpc.fields_data[1].r#type, DataType::FloatVector.code());
    }

    #[test]
    fn test_insert_rejects_ragged_columns() {
        let request = InsertRequest::new(
            "books",
            vec![
                Column::int64("book_id", vec![1, 2, 3]),
                Column::float_vector("book_intro", vec![vec![0.1, 0.2], vec![0.3, 0.4]]),
            ],
        );
        assert!(matches!(request.build_grpc("default"), Err(MilvusError::Validation(_))));
        assert!(InsertRequest::new("books", vec![]).validate().is_err());
    }

    #[test]
    fn test_insert_rest_body() {
        let rest = InsertRequest::new("books", columns()).build_rest("default").unwrap();
        assert_eq!(rest.path, "/entities");
        assert_eq!(rest.body["num_rows"], 2);
        assert_eq!(rest.body["fields_data"][0]["field_name"], "book_id");
        assert_eq!(rest.body["fields_data"][0]["field"][1], 2);
        assert_eq!(rest.body["fields_data"][1]["type"], 101);
    }

    #[test]
    fn test_delete_needs_expression() {
        assert!(DeleteRequest::new("books", "").validate().is_err());
        let grpc = DeleteRequest::new("books", "book_id in [1]").build_grpc("default").unwrap();
        assert_eq!(grpc.expr, "book_id in [1]");
        assert_eq!(grpc.partition_name, "");
    }

    #[test]
    fn test_query_pagination_params() {
        let grpc = QueryRequest::new("books", "book_id > 0")
            .with_offset(10)
            .with_limit(5)
            .build_grpc("default")
            .unwrap();
        let params: Vec<(&str, &str)> = grpc
            .query_params
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
            .collect();
        assert_eq!(params, vec![("offset", "10"), ("limit", "5")]);

        assert!(QueryRequest::new("books", "book_id > 0").with_limit(0).validate().is_err());
    }

    #[test]
    fn test_search_grpc_placeholder() {
        let request = SearchRequest::new(
            "books",
            "book_intro",
            VectorData::Float(vec![vec![1.0, 2.0]]),
            3,
            MetricType::L2,
        )
        .with_param("nprobe", "10")
        .with_expr("book_id > 0");
        let grpc = request.build_grpc("default").unwrap();

        assert_eq!(grpc.nq, 1);
        assert_eq!(grpc.dsl, "book_id > 0");
        assert_eq!(grpc.dsl_type, 1);
        let group =
            proto_common::PlaceholderGroup::decode(grpc.placeholder_group.as_slice()).unwrap();
        assert_eq!(group.placeholders[0].tag, "$0");
        assert_eq!(group.placeholders[0].r#type, 101);
        let bytes: Vec<u8> = [1.0f32, 2.0].iter().flat_map(|v| v.to_le_bytes()).collect();
        assert_eq!(group.placeholders[0].values[0], bytes);

        let params: HashMap<_, _> = grpc
            .search_params
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
            .collect();
        assert_eq!(params["anns_field"], "book_intro");
        assert_eq!(params["topk"], "3");
        assert_eq!(params["params"], r#"{"nprobe":10}"#);
        assert_eq!(params["round_decimal"], "-1");
    }

    #[test]
    fn test_search_validation() {
        let empty =
            SearchRequest::new("books", "book_intro", VectorData::Float(vec![]), 3, MetricType::L2);
        assert!(empty.validate().is_err());

        let ragged = SearchRequest::new(
            "books",
            "book_intro",
            VectorData::Float(vec![vec![1.0, 2.0], vec![1.0]]),
            3,
            MetricType::L2,
        );
        assert!(ragged.validate().is_err());

        let no_k = SearchRequest::new(
            "books",
            "book_intro",
            VectorData::Float(vec![vec![1.0]]),
            0,
            MetricType::L2,
        );
        assert!(no_k.validate().is_err());
    }

    #[test]
    fn test_search_rest_body() {
        let rest = SearchRequest::new(
            "books",
            "book_intro",
            VectorData::Float(vec![vec![1.0, 2.0]]),
            3,
            MetricType::IP,
        )
        .with_output_fields(vec!["book_id".to_string()])
        .build_rest("default")
        .unwrap();

        assert_eq!(rest.path, "/search");
        assert_eq!(rest.body["vectors"][0][1], 2.0);
        assert_eq!(rest.body["dsl_type"], 1);
        assert_eq!(rest.body["output_fields"][0], "book_id");
        assert_eq!(rest.body["search_params"][2]["value"], "IP");
    }

    #[test]
    fn test_calc_distance_dimension_check() {
        let request = CalcDistanceRequest::new(
            VectorData::Float(vec![vec![1.0, 2.0]]),
            VectorData::Float(vec![vec![1.0, 2.0, 3.0]]),
            MetricType::L2,
        );
        assert!(request.validate().is_err());

        let request = CalcDistanceRequest::new(
            VectorData::Float(vec![vec![1.0, 2.0]]),
            VectorData::Float(vec![vec![3.0, 4.0], vec![5.0, 6.0]]),
            MetricType::L2,
        );
        let grpc = request.build_grpc("default").unwrap();
        assert_eq!(grpc.params[0].key, "metric");
        assert!(grpc.op_right.is_some());
    }

    #[test]
    fn test_flush_requests() {
        assert!(FlushRequest::new(vec![]).validate().is_err());
        let rest = GetFlushStateRequest::new(vec![7, 8]).build_rest("default").unwrap();
        assert_eq!(rest.body["segmentIDs"][1], 8);
    }
}
