//! Conversions between the typed model and the prost messages.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use protos::milvus::proto::common as proto_common;
use protos::milvus::proto::milvus as proto;
use protos::milvus::proto::schema as proto_schema;
use protos::milvus::proto::schema::field_data::Field;
use protos::milvus::proto::schema::scalar_field::Data as ScalarPayload;
use protos::milvus::proto::schema::vector_field::Data as VectorPayload;

use crate::column::{Column, ScalarColumn, ScalarData, VectorColumn, VectorData};
use crate::error::{MilvusError, MilvusResult};
use crate::results::{
    CollectionDescription, Ids, IndexDescription, MutationResult, PersistentSegmentInfo,
    QuerySegmentInfo, SearchResult,
};
use crate::schema::{CollectionSchema, FieldSchema};
use crate::types::{ConsistencyLevel, DataType, IndexState, SegmentState, from_hybrid_timestamp};

pub(crate) fn schema_to_proto(schema: &CollectionSchema) -> proto_schema::CollectionSchema {
    proto_schema::CollectionSchema {
        name: schema.name.clone(),
        description: schema.description.clone(),
        auto_id: schema.auto_id,
        fields: schema.fields.iter().map(field_to_proto).collect(),
    }
}

fn field_to_proto(field: &FieldSchema) -> proto_schema::FieldSchema {
    proto_schema::FieldSchema {
        field_id: field.field_id,
        name: field.name.clone(),
        is_primary_key: field.is_primary_key,
        description: field.description.clone(),
        data_type: field.data_type.code(),
        type_params: field
            .type_params()
            .into_iter()
            .map(|(key, value)| proto_common::KeyValuePair { key, value })
            .collect(),
        index_params: Vec::new(),
        auto_id: field.auto_id,
    }
}

pub(crate) fn schema_from_proto(
    schema: proto_schema::CollectionSchema,
) -> MilvusResult<CollectionSchema> {
    let fields = schema
        .fields
        .into_iter()
        .map(|field| {
            let mut converted = FieldSchema {
                field_id: field.field_id,
                name: field.name,
                data_type: DataType::from_code(field.data_type)?,
                is_primary_key: field.is_primary_key,
                auto_id: field.auto_id,
                description: field.description,
                max_length: None,
                dimension: None,
            };
            for kv in &field.type_params {
                converted.apply_type_param(&kv.key, &kv.value);
            }
            Ok(converted)
        })
        .collect::<MilvusResult<Vec<_>>>()?;

    Ok(CollectionSchema {
        name: schema.name,
        description: schema.description,
        auto_id: schema.auto_id,
        fields,
    })
}

pub(crate) fn vector_field(data: &VectorData) -> proto_schema::VectorField {
    let payload = match data {
        VectorData::Float(rows) => VectorPayload::FloatVector(proto_schema::FloatArray {
            data: rows.concat(),
        }),
        VectorData::Binary(rows) => VectorPayload::BinaryVector(rows.concat()),
    };
    proto_schema::VectorField {
        dim: data.dimension(),
        data: Some(payload),
    }
}

impl From<&Column> for proto_schema::FieldData {
    fn from(column: &Column) -> Self {
        let field = match column {
            Column::Scalar(c) => {
                let payload = match &c.data {
                    ScalarData::Bool(v) => {
                        ScalarPayload::BoolData(proto_schema::BoolArray { data: v.clone() })
                    }
                    ScalarData::Int8(v) => ScalarPayload::IntData(proto_schema::IntArray {
                        data: v.iter().map(|x| i32::from(*x)).collect(),
                    }),
                    ScalarData::Int16(v) => ScalarPayload::IntData(proto_schema::IntArray {
                        data: v.iter().map(|x| i32::from(*x)).collect(),
                    }),
                    ScalarData::Int32(v) => {
                        ScalarPayload::IntData(proto_schema::IntArray { data: v.clone() })
                    }
                    ScalarData::Int64(v) => {
                        ScalarPayload::LongData(proto_schema::LongArray { data: v.clone() })
                    }
                    ScalarData::Float(v) => {
                        ScalarPayload::FloatData(proto_schema::FloatArray { data: v.clone() })
                    }
                    ScalarData::Double(v) => {
                        ScalarPayload::DoubleData(proto_schema::DoubleArray { data: v.clone() })
                    }
                    ScalarData::VarChar(v) => {
                        ScalarPayload::StringData(proto_schema::StringArray { data: v.clone() })
                    }
                };
                Field::Scalars(proto_schema::ScalarField { data: Some(payload) })
            }
            Column::Vector(c) => {
                let payload = match &c.data {
                    VectorData::Float(_) => VectorPayload::FloatVector(proto_schema::FloatArray {
                        data: c.flat_float(),
                    }),
                    VectorData::Binary(_) => VectorPayload::BinaryVector(c.flat_binary()),
                };
                Field::Vectors(proto_schema::VectorField {
                    dim: c.dimension,
                    data: Some(payload),
                })
            }
        };

        proto_schema::FieldData {
            r#type: column.data_type().code(),
            field_name: column.name().to_string(),
            field_id: 0,
            field: Some(field),
        }
    }
}

fn empty_column(name: String, data_type: DataType) -> Column {
    let data = match data_type {
        DataType::Bool => ScalarData::Bool(Vec::new()),
        DataType::Int8 => ScalarData::Int8(Vec::new()),
        DataType::Int16 => ScalarData::Int16(Vec::new()),
        DataType::Int32 => ScalarData::Int32(Vec::new()),
        DataType::Int64 => ScalarData::Int64(Vec::new()),
        DataType::Float => ScalarData::Float(Vec::new()),
        DataType::Double => ScalarData::Double(Vec::new()),
        DataType::String | DataType::VarChar => ScalarData::VarChar(Vec::new()),
        DataType::FloatVector => {
            return Column::Vector(VectorColumn {
                name,
                dimension: 0,
                data: VectorData::Float(Vec::new()),
            });
        }
        DataType::BinaryVector => {
            return Column::Vector(VectorColumn {
                name,
                dimension: 0,
                data: VectorData::Binary(Vec::new()),
            });
        }
    };
    Column::Scalar(ScalarColumn { name, data })
}

fn narrow<T: TryFrom<i32>>(name: &str, values: Vec<i32>) -> MilvusResult<Vec<T>> {
    values
        .into_iter()
        .map(|v| {
            T::try_from(v).map_err(|_| {
                MilvusError::Transport(format!("Value {} out of range for field {}", v, name))
            })
        })
        .collect()
}

impl TryFrom<proto_schema::FieldData> for Column {
    type Error = MilvusError;

    fn try_from(field: proto_schema::FieldData) -> MilvusResult<Self> {
        let data_type = DataType::from_code(field.r#type)?;
        let name = field.field_name;

        let column = match field.field {
            Some(Field::Scalars(proto_schema::ScalarField { data: Some(payload) })) => {
                let data = match payload {
                    ScalarPayload::BoolData(a) => ScalarData::Bool(a.data),
                    ScalarPayload::IntData(a) => match data_type {
                        DataType::Int8 => ScalarData::Int8(narrow(&name, a.data)?),
                        DataType::Int16 => ScalarData::Int16(narrow(&name, a.data)?),
                        _ => ScalarData::Int32(a.data),
                    },
                    ScalarPayload::LongData(a) => ScalarData::Int64(a.data),
                    ScalarPayload::FloatData(a) => ScalarData::Float(a.data),
                    ScalarPayload::DoubleData(a) => ScalarData::Double(a.data),
                    ScalarPayload::StringData(a) => ScalarData::VarChar(a.data),
                    ScalarPayload::BytesData(_) => {
                        return Err(MilvusError::Transport(format!(
                            "Field {} carries bytes, which are not supported",
                            name
                        )));
                    }
                };
                Column::Scalar(ScalarColumn { name, data })
            }
            Some(Field::Vectors(vectors)) => match vectors.data {
                Some(VectorPayload::FloatVector(a)) => {
                    Column::Vector(VectorColumn::from_flat_float(name, vectors.dim, a.data)?)
                }
                Some(VectorPayload::BinaryVector(bytes)) => {
                    Column::Vector(VectorColumn::from_flat_binary(name, vectors.dim, bytes)?)
                }
                None => empty_column(name, data_type),
            },
            Some(Field::Scalars(_)) | None => empty_column(name, data_type),
        };
        Ok(column)
    }
}

pub(crate) fn columns_from_proto(
    fields: Vec<proto_schema::FieldData>,
) -> MilvusResult<Vec<Column>> {
    fields.into_iter().map(Column::try_from).collect()
}

pub(crate) fn ids_from_proto(ids: Option<proto_schema::Ids>) -> Ids {
    match ids.and_then(|ids| ids.id_field) {
        Some(proto_schema::ids::IdField::IntId(a)) => Ids::Int(a.data),
        Some(proto_schema::ids::IdField::StrId(a)) => Ids::Str(a.data),
        None => Ids::default(),
    }
}

pub(crate) fn key_value_map(pairs: Vec<proto_common::KeyValuePair>) -> HashMap<String, String> {
    pairs.into_iter().map(|kv| (kv.key, kv.value)).collect()
}

/// Zips the parallel arrays of a show-collections/partitions response.
/// Missing percentages are reported as -1.
pub(crate) fn zip_listing(
    names: Vec<String>,
    ids: Vec<i64>,
    created: Vec<u64>,
    in_memory: Vec<i64>,
) -> Vec<(String, i64, Option<DateTime<Utc>>, i64)> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            (
                name,
                ids.get(i).copied().unwrap_or_default(),
                created.get(i).copied().and_then(from_hybrid_timestamp),
                in_memory.get(i).copied().unwrap_or(-1),
            )
        })
        .collect()
}

impl From<proto::MutationResult> for MutationResult {
    fn from(result: proto::MutationResult) -> Self {
        MutationResult {
            insert_count: result.insert_cnt,
            delete_count: result.delete_cnt,
            upsert_count: result.upsert_cnt,
            ids: ids_from_proto(result.i_ds),
            success_index: result.succ_index,
            error_index: result.err_index,
            timestamp: result.timestamp,
        }
    }
}

pub(crate) fn search_result_from_proto(
    results: proto::SearchResults,
) -> MilvusResult<SearchResult> {
    let Some(data) = results.results else {
        return Ok(SearchResult {
            collection_name: results.collection_name,
            ..Default::default()
        });
    };
    Ok(SearchResult {
        collection_name: results.collection_name,
        num_queries: data.num_queries,
        top_k: data.top_k,
        ids: ids_from_proto(data.ids),
        scores: data.scores,
        columns: columns_from_proto(data.fields_data)?,
        top_ks: data.topks,
        output_fields: data.output_fields,
    })
}

pub(crate) fn description_from_proto(
    response: proto::DescribeCollectionResponse,
) -> MilvusResult<CollectionDescription> {
    let schema = match response.schema {
        Some(schema) => schema_from_proto(schema)?,
        None => CollectionSchema::new(response.collection_name.clone(), Vec::new()),
    };
    Ok(CollectionDescription {
        collection_id: response.collection_id,
        collection_name: if response.collection_name.is_empty() {
            schema.name.clone()
        } else {
            response.collection_name
        },
        schema,
        shards_num: response.shards_num,
        consistency_level: ConsistencyLevel::from_i32(response.consistency_level),
        aliases: response.aliases,
        created_at: from_hybrid_timestamp(response.created_timestamp),
        virtual_channel_names: response.virtual_channel_names,
        physical_channel_names: response.physical_channel_names,
    })
}

impl From<proto::IndexDescription> for IndexDescription {
    fn from(index: proto::IndexDescription) -> Self {
        IndexDescription {
            index_name: index.index_name,
            index_id: index.index_id,
            field_name: index.field_name,
            params: key_value_map(index.params),
            indexed_rows: index.indexed_rows,
            total_rows: index.total_rows,
            state: IndexState::from_i32(index.state),
            fail_reason: index.index_state_fail_reason,
        }
    }
}

impl From<proto::PersistentSegmentInfo> for PersistentSegmentInfo {
    fn from(info: proto::PersistentSegmentInfo) -> Self {
        PersistentSegmentInfo {
            segment_id: info.segment_id,
            collection_id: info.collection_id,
            partition_id: info.partition_id,
            num_rows: info.num_rows,
            state: SegmentState::from_i32(info.state),
        }
    }
}

impl From<proto::QuerySegmentInfo> for QuerySegmentInfo {
    fn from(info: proto::QuerySegmentInfo) -> Self {
        let node_ids = if info.node_ids.is_empty() && info.node_id != 0 {
            vec![info.node_id]
        } else {
            info.node_ids
        };
        QuerySegmentInfo {
            segment_id: info.segment_id,
            collection_id: info.collection_id,
            partition_id: info.partition_id,
            mem_size: info.mem_size,
            num_rows: info.num_rows,
            index_name: info.index_name,
            index_id: info.index_id,
            node_ids,
            state: SegmentState::from_i32(info.state),
        }
    }
}
