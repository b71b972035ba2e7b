//! JSON shapes of the v1 HTTP API.
//!
//! Requests are written in the proxy's own wrapper format: columns as plain
//! value arrays, vectors as nested arrays. Responses are the JSON rendering
//! of the protobuf messages, so they are decoded into the prost types and
//! share the conversions of the gRPC transport.

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use protos::milvus::proto::common as proto_common;
use protos::milvus::proto::milvus as proto;
use protos::milvus::proto::schema as proto_schema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::column::{Column, ScalarData, VectorData};
use crate::error::{MilvusError, MilvusResult};
use crate::schema::CollectionSchema;

pub(crate) fn schema_json(schema: &CollectionSchema) -> Value {
    let fields: Vec<Value> = schema
        .fields
        .iter()
        .map(|field| {
            let type_params: Vec<Value> = field
                .type_params()
                .into_iter()
                .map(|(key, value)| json!({ "key": key, "value": value }))
                .collect();
            json!({
                "name": field.name,
                "description": field.description,
                "data_type": field.data_type.code(),
                "is_primary_key": field.is_primary_key,
                "autoID": field.auto_id,
                "type_params": type_params,
            })
        })
        .collect();

    json!({
        "name": schema.name,
        "description": schema.description,
        "autoID": schema.auto_id,
        "fields": fields,
    })
}

pub(crate) fn vector_rows_json(data: &VectorData) -> Value {
    match data {
        VectorData::Float(rows) => json!(rows),
        VectorData::Binary(rows) => {
            Value::Array(rows.iter().map(|row| Value::String(STANDARD.encode(row))).collect())
        }
    }
}

pub(crate) fn column_json(column: &Column) -> Value {
    let values = match column {
        Column::Scalar(c) => match &c.data {
            ScalarData::Bool(v) => json!(v),
            ScalarData::Int8(v) => json!(v),
            ScalarData::Int16(v) => json!(v),
            ScalarData::Int32(v) => json!(v),
            ScalarData::Int64(v) => json!(v),
            ScalarData::Float(v) => json!(v),
            ScalarData::Double(v) => json!(v),
            ScalarData::VarChar(v) => json!(v),
        },
        Column::Vector(c) => vector_rows_json(&c.data),
    };
    json!({
        "field_name": column.name(),
        "type": column.data_type().code(),
        "field": values,
    })
}

/// Status embedded in a response body: either under `status`, or the
/// whole body for operations that answer with a bare status.
pub(crate) fn embedded_status(body: &Value) -> MilvusResult<Option<proto_common::Status>> {
    let candidate = match body.get("status") {
        Some(status @ Value::Object(_)) => status,
        _ if body.get("error_code").is_some() || body.get("reason").is_some() => body,
        _ => return Ok(None),
    };
    let status: WireStatus = serde_json::from_value(candidate.clone())?;
    Ok(Some(status.into()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireStatus {
    error_code: i32,
    reason: String,
    code: i32,
}

impl From<WireStatus> for proto_common::Status {
    fn from(status: WireStatus) -> Self {
        proto_common::Status {
            error_code: status.error_code,
            reason: status.reason,
            code: status.code,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireArray<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireKeyValue {
    pub key: String,
    pub value: String,
}

impl From<WireKeyValue> for proto_common::KeyValuePair {
    fn from(kv: WireKeyValue) -> Self {
        proto_common::KeyValuePair {
            key: kv.key,
            value: kv.value,
        }
    }
}

fn decode_base64(what: &str, encoded: &str) -> MilvusResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| MilvusError::Transport(format!("{} is not valid base64: {}", what, e)))
}

#[derive(Debug, Deserialize)]
enum WireScalarData {
    BoolData(WireArray<bool>),
    IntData(WireArray<i32>),
    LongData(WireArray<i64>),
    FloatData(WireArray<f32>),
    DoubleData(WireArray<f64>),
    StringData(WireArray<String>),
    BytesData(WireArray<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireScalarField {
    #[serde(rename = "Data")]
    data: Option<WireScalarData>,
}

#[derive(Debug, Deserialize)]
enum WireVectorData {
    FloatVector(WireArray<f32>),
    BinaryVector(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireVectorField {
    dim: i64,
    #[serde(rename = "Data")]
    data: Option<WireVectorData>,
}

#[derive(Debug, Deserialize)]
enum WireField {
    Scalars(WireScalarField),
    Vectors(WireVectorField),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireFieldData {
    #[serde(rename = "type")]
    data_type: i32,
    field_name: String,
    #[serde(rename = "fieldID")]
    field_id: i64,
    #[serde(rename = "Field")]
    field: Option<WireField>,
}

impl TryFrom<WireFieldData> for proto_schema::FieldData {
    type Error = MilvusError;

    fn try_from(wire: WireFieldData) -> MilvusResult<Self> {
        use proto_schema::field_data::Field;
        use proto_schema::scalar_field::Data as ScalarPayload;
        use proto_schema::vector_field::Data as VectorPayload;

        let field = match wire.field {
            Some(WireField::Scalars(scalars)) => {
                let data = match scalars.data {
                    Some(WireScalarData::BoolData(a)) => {
                        Some(ScalarPayload::BoolData(proto_schema::BoolArray { data: a.data }))
                    }
                    Some(WireScalarData::IntData(a)) => {
                        Some(ScalarPayload::IntData(proto_schema::IntArray { data: a.data }))
                    }
                    Some(WireScalarData::LongData(a)) => {
                        Some(ScalarPayload::LongData(proto_schema::LongArray { data: a.data }))
                    }
                    Some(WireScalarData::FloatData(a)) => {
                        Some(ScalarPayload::FloatData(proto_schema::FloatArray { data: a.data }))
                    }
                    Some(WireScalarData::DoubleData(a)) => {
                        Some(ScalarPayload::DoubleData(proto_schema::DoubleArray { data: a.data }))
                    }
                    Some(WireScalarData::StringData(a)) => {
                        Some(ScalarPayload::StringData(proto_schema::StringArray { data: a.data }))
                    }
                    Some(WireScalarData::BytesData(a)) => {
                        let data = a
                            .data
                            .iter()
                            .map(|b| decode_base64(&wire.field_name, b))
                            .collect::<MilvusResult<Vec<_>>>()?;
                        Some(ScalarPayload::BytesData(proto_schema::BytesArray { data }))
                    }
                    None => None,
                };
                Some(Field::Scalars(proto_schema::ScalarField { data }))
            }
            Some(WireField::Vectors(vectors)) => {
                let data = match vectors.data {
                    Some(WireVectorData::FloatVector(a)) => {
                        Some(VectorPayload::FloatVector(proto_schema::FloatArray { data: a.data }))
                    }
                    Some(WireVectorData::BinaryVector(encoded)) => Some(VectorPayload::BinaryVector(
                        decode_base64(&wire.field_name, &encoded)?,
                    )),
                    None => None,
                };
                Some(Field::Vectors(proto_schema::VectorField {
                    dim: vectors.dim,
                    data,
                }))
            }
            None => None,
        };

        Ok(proto_schema::FieldData {
            r#type: wire.data_type,
            field_name: wire.field_name,
            field_id: wire.field_id,
            field,
        })
    }
}

pub(crate) fn fields_to_proto(
    fields: Vec<WireFieldData>,
) -> MilvusResult<Vec<proto_schema::FieldData>> {
    fields.into_iter().map(proto_schema::FieldData::try_from).collect()
}

#[derive(Debug, Deserialize)]
enum WireIdField {
    IntId(WireArray<i64>),
    StrId(WireArray<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireIds {
    #[serde(rename = "IdField")]
    id_field: Option<WireIdField>,
}

impl From<WireIds> for proto_schema::Ids {
    fn from(ids: WireIds) -> Self {
        use proto_schema::ids::IdField;

        let id_field = ids.id_field.map(|field| match field {
            WireIdField::IntId(a) => IdField::IntId(proto_schema::LongArray { data: a.data }),
            WireIdField::StrId(a) => IdField::StrId(proto_schema::StringArray { data: a.data }),
        });
        proto_schema::Ids { id_field }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireFieldSchema {
    #[serde(rename = "fieldID")]
    field_id: i64,
    name: String,
    is_primary_key: bool,
    description: String,
    data_type: i32,
    type_params: Vec<WireKeyValue>,
    #[serde(rename = "autoID")]
    auto_id: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireCollectionSchema {
    name: String,
    description: String,
    #[serde(rename = "autoID")]
    auto_id: bool,
    fields: Vec<WireFieldSchema>,
}

impl From<WireCollectionSchema> for proto_schema::CollectionSchema {
    fn from(schema: WireCollectionSchema) -> Self {
        proto_schema::CollectionSchema {
            name: schema.name,
            description: schema.description,
            auto_id: schema.auto_id,
            fields: schema
                .fields
                .into_iter()
                .map(|f| proto_schema::FieldSchema {
                    field_id: f.field_id,
                    name: f.name,
                    is_primary_key: f.is_primary_key,
                    description: f.description,
                    data_type: f.data_type,
                    type_params: f.type_params.into_iter().map(Into::into).collect(),
                    index_params: Vec::new(),
                    auto_id: f.auto_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BoolResponse {
    pub value: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DescribeCollectionResponse {
    schema: Option<WireCollectionSchema>,
    #[serde(rename = "collectionID")]
    collection_id: i64,
    virtual_channel_names: Vec<String>,
    physical_channel_names: Vec<String>,
    created_timestamp: u64,
    shards_num: i32,
    aliases: Vec<String>,
    consistency_level: i32,
    collection_name: String,
}

impl From<DescribeCollectionResponse> for proto::DescribeCollectionResponse {
    fn from(r: DescribeCollectionResponse) -> Self {
        proto::DescribeCollectionResponse {
            schema: r.schema.map(Into::into),
            collection_id: r.collection_id,
            virtual_channel_names: r.virtual_channel_names,
            physical_channel_names: r.physical_channel_names,
            created_timestamp: r.created_timestamp,
            shards_num: r.shards_num,
            aliases: r.aliases,
            consistency_level: r.consistency_level,
            collection_name: r.collection_name,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StatisticsResponse {
    pub stats: Vec<WireKeyValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ShowCollectionsResponse {
    pub collection_names: Vec<String>,
    pub collection_ids: Vec<i64>,
    pub created_timestamps: Vec<u64>,
    #[serde(rename = "inMemory_percentages")]
    pub in_memory_percentages: Vec<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ShowPartitionsResponse {
    pub partition_names: Vec<String>,
    #[serde(rename = "partitionIDs")]
    pub partition_ids: Vec<i64>,
    pub created_timestamps: Vec<u64>,
    #[serde(rename = "inMemory_percentages")]
    pub in_memory_percentages: Vec<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LoadingProgressResponse {
    pub progress: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireIndexDescription {
    index_name: String,
    #[serde(rename = "indexID")]
    index_id: i64,
    params: Vec<WireKeyValue>,
    field_name: String,
    indexed_rows: i64,
    total_rows: i64,
    state: i32,
    index_state_fail_reason: String,
}

impl From<WireIndexDescription> for proto::IndexDescription {
    fn from(d: WireIndexDescription) -> Self {
        proto::IndexDescription {
            index_name: d.index_name,
            index_id: d.index_id,
            params: d.params.into_iter().map(Into::into).collect(),
            field_name: d.field_name,
            indexed_rows: d.indexed_rows,
            total_rows: d.total_rows,
            state: d.state,
            index_state_fail_reason: d.index_state_fail_reason,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DescribeIndexResponse {
    pub index_descriptions: Vec<WireIndexDescription>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IndexBuildProgressResponse {
    pub indexed_rows: i64,
    pub total_rows: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IndexStateResponse {
    pub state: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MutationResponse {
    #[serde(rename = "IDs")]
    ids: Option<WireIds>,
    succ_index: Vec<u32>,
    err_index: Vec<u32>,
    insert_cnt: i64,
    delete_cnt: i64,
    upsert_cnt: i64,
    timestamp: u64,
}

impl From<MutationResponse> for proto::MutationResult {
    fn from(r: MutationResponse) -> Self {
        proto::MutationResult {
            i_ds: r.ids.map(Into::into),
            succ_index: r.succ_index,
            err_index: r.err_index,
            insert_cnt: r.insert_cnt,
            delete_cnt: r.delete_cnt,
            upsert_cnt: r.upsert_cnt,
            timestamp: r.timestamp,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireSearchResultData {
    num_queries: i64,
    top_k: i64,
    fields_data: Vec<WireFieldData>,
    scores: Vec<f32>,
    ids: Option<WireIds>,
    topks: Vec<i64>,
    output_fields: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchResponse {
    results: Option<WireSearchResultData>,
    collection_name: String,
}

impl TryFrom<SearchResponse> for proto::SearchResults {
    type Error = MilvusError;

    fn try_from(r: SearchResponse) -> MilvusResult<Self> {
        let results = match r.results {
            Some(data) => Some(proto_schema::SearchResultData {
                num_queries: data.num_queries,
                top_k: data.top_k,
                fields_data: fields_to_proto(data.fields_data)?,
                scores: data.scores,
                ids: data.ids.map(Into::into),
                topks: data.topks,
                output_fields: data.output_fields,
            }),
            None => None,
        };
        Ok(proto::SearchResults {
            status: None,
            results,
            collection_name: r.collection_name,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QueryResponse {
    pub fields_data: Vec<WireFieldData>,
}

#[derive(Debug, Deserialize)]
pub(crate) enum DistanceArray {
    IntDist(WireArray<i32>),
    FloatDist(WireArray<f32>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CalcDistanceResponse {
    #[serde(rename = "Array")]
    pub array: Option<DistanceArray>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FlushResponse {
    #[serde(rename = "coll_segIDs")]
    pub segment_ids: HashMap<String, WireArray<i64>>,
    #[serde(rename = "flush_coll_segIDs")]
    pub flushed_segment_ids: HashMap<String, WireArray<i64>>,
    pub coll_seal_times: HashMap<String, i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FlushStateResponse {
    pub flushed: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WirePersistentSegmentInfo {
    #[serde(rename = "segmentID")]
    segment_id: i64,
    #[serde(rename = "collectionID")]
    collection_id: i64,
    #[serde(rename = "partitionID")]
    partition_id: i64,
    num_rows: i64,
    state: i32,
}

impl From<WirePersistentSegmentInfo> for proto::PersistentSegmentInfo {
    fn from(i: WirePersistentSegmentInfo) -> Self {
        proto::PersistentSegmentInfo {
            segment_id: i.segment_id,
            collection_id: i.collection_id,
            partition_id: i.partition_id,
            num_rows: i.num_rows,
            state: i.state,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireQuerySegmentInfo {
    #[serde(rename = "segmentID")]
    segment_id: i64,
    #[serde(rename = "collectionID")]
    collection_id: i64,
    #[serde(rename = "partitionID")]
    partition_id: i64,
    mem_size: i64,
    num_rows: i64,
    index_name: String,
    #[serde(rename = "indexID")]
    index_id: i64,
    #[serde(rename = "nodeID")]
    node_id: i64,
    state: i32,
    #[serde(rename = "nodeIds")]
    node_ids: Vec<i64>,
}

impl From<WireQuerySegmentInfo> for proto::QuerySegmentInfo {
    fn from(i: WireQuerySegmentInfo) -> Self {
        proto::QuerySegmentInfo {
            segment_id: i.segment_id,
            collection_id: i.collection_id,
            partition_id: i.partition_id,
            mem_size: i.mem_size,
            num_rows: i.num_rows,
            index_name: i.index_name,
            index_id: i.index_id,
            node_id: i.node_id,
            state: i.state,
            node_ids: i.node_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SegmentInfoResponse<T> {
    #[serde(default = "Vec::new")]
    pub infos: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListUsersResponse {
    pub usernames: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct HealthResponse {
    #[serde(rename = "isHealthy")]
    pub is_healthy: bool,
    pub reasons: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct VersionResponse {
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MetricsResponse {
    pub response: String,
    pub component_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ManualCompactionResponse {
    #[serde(rename = "compactionID")]
    pub compaction_id: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CompactionStateResponse {
    pub state: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireMergeInfo {
    pub sources: Vec<i64>,
    pub target: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CompactionPlansResponse {
    pub state: i32,
    #[serde(rename = "mergeInfos")]
    pub merge_infos: Vec<WireMergeInfo>,
}
