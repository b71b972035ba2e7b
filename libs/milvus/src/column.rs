//! Typed column containers.
//!
//! Milvus moves data column by column. A `Column` is decoded once at the
//! transport boundary, so callers match on the variant instead of probing
//! types.

use serde::{Deserialize, Serialize};

use crate::error::{MilvusError, MilvusResult};
use crate::types::DataType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarData {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    VarChar(Vec<String>),
}

impl ScalarData {
    pub fn len(&self) -> usize {
        match self {
            ScalarData::Bool(v) => v.len(),
            ScalarData::Int8(v) => v.len(),
            ScalarData::Int16(v) => v.len(),
            ScalarData::Int32(v) => v.len(),
            ScalarData::Int64(v) => v.len(),
            ScalarData::Float(v) => v.len(),
            ScalarData::Double(v) => v.len(),
            ScalarData::VarChar(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            ScalarData::Bool(_) => DataType::Bool,
            ScalarData::Int8(_) => DataType::Int8,
            ScalarData::Int16(_) => DataType::Int16,
            ScalarData::Int32(_) => DataType::Int32,
            ScalarData::Int64(_) => DataType::Int64,
            ScalarData::Float(_) => DataType::Float,
            ScalarData::Double(_) => DataType::Double,
            ScalarData::VarChar(_) => DataType::VarChar,
        }
    }

    fn value(&self, row: usize) -> Option<FieldValue> {
        match self {
            ScalarData::Bool(v) => v.get(row).copied().map(FieldValue::Bool),
            ScalarData::Int8(v) => v.get(row).map(|x| FieldValue::Int(i64::from(*x))),
            ScalarData::Int16(v) => v.get(row).map(|x| FieldValue::Int(i64::from(*x))),
            ScalarData::Int32(v) => v.get(row).map(|x| FieldValue::Int(i64::from(*x))),
            ScalarData::Int64(v) => v.get(row).copied().map(FieldValue::Int),
            ScalarData::Float(v) => v.get(row).map(|x| FieldValue::Double(f64::from(*x))),
            ScalarData::Double(v) => v.get(row).copied().map(FieldValue::Double),
            ScalarData::VarChar(v) => v.get(row).cloned().map(FieldValue::String),
        }
    }

    fn take(&self, rows: &[usize]) -> Self {
        fn pick<T: Clone>(values: &[T], rows: &[usize]) -> Vec<T> {
            rows.iter().filter_map(|r| values.get(*r).cloned()).collect()
        }
        match self {
            ScalarData::Bool(v) => ScalarData::Bool(pick(v, rows)),
            ScalarData::Int8(v) => ScalarData::Int8(pick(v, rows)),
            ScalarData::Int16(v) => ScalarData::Int16(pick(v, rows)),
            ScalarData::Int32(v) => ScalarData::Int32(pick(v, rows)),
            ScalarData::Int64(v) => ScalarData::Int64(pick(v, rows)),
            ScalarData::Float(v) => ScalarData::Float(pick(v, rows)),
            ScalarData::Double(v) => ScalarData::Double(pick(v, rows)),
            ScalarData::VarChar(v) => ScalarData::VarChar(pick(v, rows)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarColumn {
    pub name: String,
    pub data: ScalarData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VectorData {
    Float(Vec<Vec<f32>>),
    /// One byte per 8 dimensions
    Binary(Vec<Vec<u8>>),
}

impl VectorData {
    pub fn len(&self) -> usize {
        match self {
            VectorData::Float(v) => v.len(),
            VectorData::Binary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension implied by the first row.
    pub fn dimension(&self) -> i64 {
        match self {
            VectorData::Float(v) => v.first().map_or(0, |r| r.len() as i64),
            VectorData::Binary(v) => v.first().map_or(0, |r| r.len() as i64 * 8),
        }
    }

    /// Rejects empty input and rows of differing length.
    pub fn validate(&self, what: &str) -> MilvusResult<()> {
        let lengths: Vec<usize> = match self {
            VectorData::Float(v) => v.iter().map(Vec::len).collect(),
            VectorData::Binary(v) => v.iter().map(Vec::len).collect(),
        };
        match lengths.first() {
            None | Some(0) => Err(MilvusError::validation(format!("{} cannot be empty", what))),
            Some(first) if lengths.iter().any(|l| l != first) => Err(MilvusError::validation(
                format!("All {} must have the same dimension", what),
            )),
            Some(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorColumn {
    pub name: String,
    pub dimension: i64,
    pub data: VectorData,
}

impl VectorColumn {
    /// Rebuilds rows from the flat layout used on the wire.
    pub(crate) fn from_flat_float(
        name: String,
        dimension: i64,
        flat: Vec<f32>,
    ) -> MilvusResult<Self> {
        let rows = chunk_rows(&name, dimension, dimension, flat)?;
        Ok(Self {
            name,
            dimension,
            data: VectorData::Float(rows),
        })
    }

    pub(crate) fn from_flat_binary(
        name: String,
        dimension: i64,
        flat: Vec<u8>,
    ) -> MilvusResult<Self> {
        let rows = chunk_rows(&name, dimension, dimension / 8, flat)?;
        Ok(Self {
            name,
            dimension,
            data: VectorData::Binary(rows),
        })
    }

    pub(crate) fn flat_float(&self) -> Vec<f32> {
        match &self.data {
            VectorData::Float(rows) => rows.concat(),
            VectorData::Binary(_) => Vec::new(),
        }
    }

    pub(crate) fn flat_binary(&self) -> Vec<u8> {
        match &self.data {
            VectorData::Binary(rows) => rows.concat(),
            VectorData::Float(_) => Vec::new(),
        }
    }
}

fn chunk_rows<T: Clone>(
    name: &str,
    dimension: i64,
    width: i64,
    flat: Vec<T>,
) -> MilvusResult<Vec<Vec<T>>> {
    if flat.is_empty() {
        return Ok(Vec::new());
    }
    let width = usize::try_from(width).unwrap_or(0);
    if width == 0 || flat.len() % width != 0 {
        return Err(MilvusError::Transport(format!(
            "Vector field {} holds {} values, not a multiple of dimension {}",
            name,
            flat.len(),
            dimension
        )));
    }
    Ok(flat.chunks(width).map(<[T]>::to_vec).collect())
}

/// A single cell, for row-wise access to decoded results.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    FloatVector(Vec<f32>),
    BinaryVector(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Scalar(ScalarColumn),
    Vector(VectorColumn),
}

impl Column {
    pub fn scalar(name: impl Into<String>, data: ScalarData) -> Self {
        Column::Scalar(ScalarColumn {
            name: name.into(),
            data,
        })
    }

    pub fn bool(name: impl Into<String>, values: Vec<bool>) -> Self {
        Self::scalar(name, ScalarData::Bool(values))
    }

    pub fn int32(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self::scalar(name, ScalarData::Int32(values))
    }

    pub fn int64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::scalar(name, ScalarData::Int64(values))
    }

    pub fn float(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self::scalar(name, ScalarData::Float(values))
    }

    pub fn double(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::scalar(name, ScalarData::Double(values))
    }

    pub fn varchar(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::scalar(name, ScalarData::VarChar(values))
    }

    /// Dimension is taken from the first row.
    pub fn float_vector(name: impl Into<String>, rows: Vec<Vec<f32>>) -> Self {
        let dimension = rows.first().map_or(0, |r| r.len() as i64);
        Column::Vector(VectorColumn {
            name: name.into(),
            dimension,
            data: VectorData::Float(rows),
        })
    }

    pub fn binary_vector(name: impl Into<String>, dimension: i64, rows: Vec<Vec<u8>>) -> Self {
        Column::Vector(VectorColumn {
            name: name.into(),
            dimension,
            data: VectorData::Binary(rows),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Column::Scalar(c) => &c.name,
            Column::Vector(c) => &c.name,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Scalar(c) => c.data.len(),
            Column::Vector(c) => c.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Column::Scalar(c) => c.data.data_type(),
            Column::Vector(VectorColumn {
                data: VectorData::Float(_),
                ..
            }) => DataType::FloatVector,
            Column::Vector(VectorColumn {
                data: VectorData::Binary(_),
                ..
            }) => DataType::BinaryVector,
        }
    }

    pub fn as_varchar(&self) -> Option<&[String]> {
        match self {
            Column::Scalar(ScalarColumn {
                data: ScalarData::VarChar(v),
                ..
            }) => Some(v),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<&[i64]> {
        match self {
            Column::Scalar(ScalarColumn {
                data: ScalarData::Int64(v),
                ..
            }) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_vectors(&self) -> Option<&[Vec<f32>]> {
        match self {
            Column::Vector(VectorColumn {
                data: VectorData::Float(v),
                ..
            }) => Some(v),
            _ => None,
        }
    }

    pub fn value(&self, row: usize) -> Option<FieldValue> {
        match self {
            Column::Scalar(c) => c.data.value(row),
            Column::Vector(c) => match &c.data {
                VectorData::Float(v) => v.get(row).cloned().map(FieldValue::FloatVector),
                VectorData::Binary(v) => v.get(row).cloned().map(FieldValue::BinaryVector),
            },
        }
    }

    /// New column holding only the given rows, in the given order.
    pub fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Scalar(c) => Column::Scalar(ScalarColumn {
                name: c.name.clone(),
                data: c.data.take(rows),
            }),
            Column::Vector(c) => {
                let data = match &c.data {
                    VectorData::Float(v) => {
                        VectorData::Float(rows.iter().filter_map(|r| v.get(*r).cloned()).collect())
                    }
                    VectorData::Binary(v) => {
                        VectorData::Binary(rows.iter().filter_map(|r| v.get(*r).cloned()).collect())
                    }
                };
                Column::Vector(VectorColumn {
                    name: c.name.clone(),
                    dimension: c.dimension,
                    data,
                })
            }
        }
    }

    pub fn validate(&self) -> MilvusResult<()> {
        if self.name().trim().is_empty() {
            return Err(MilvusError::validation("Column name cannot be empty"));
        }
        let Column::Vector(column) = self else {
            return Ok(());
        };
        if column.dimension <= 0 {
            return Err(MilvusError::validation(format!(
                "Vector column {} needs a positive dimension",
                column.name
            )));
        }
        // one bit per dimension, packed into whole bytes
        if matches!(column.data, VectorData::Binary(_)) && column.dimension % 8 != 0 {
            return Err(MilvusError::validation(format!(
                "Binary vector column {} needs a dimension divisible by 8, got {}",
                column.name, column.dimension
            )));
        }
        let expected = match column.data {
            VectorData::Float(_) => column.dimension as usize,
            VectorData::Binary(_) => column.dimension as usize / 8,
        };
        let mismatch = match &column.data {
            VectorData::Float(rows) => rows.iter().position(|r| r.len() != expected),
            VectorData::Binary(rows) => rows.iter().position(|r| r.len() != expected),
        };
        if let Some(row) = mismatch {
            return Err(MilvusError::validation(format!(
                "Row {} of vector column {} does not match dimension {}",
                row, column.name, column.dimension
            )));
        }
        Ok(())
    }
}

/// Checks a set of columns written together and returns their row count.
pub fn validate_columns(columns: &[Column]) -> MilvusResult<usize> {
    let Some(first) = columns.first() else {
        return Err(MilvusError::validation("At least one column is required"));
    };
    let rows = first.len();
    if rows == 0 {
        return Err(MilvusError::validation("Columns cannot be empty"));
    }
    for (i, column) in columns.iter().enumerate() {
        column.validate()?;
        if column.len() != rows {
            return Err(MilvusError::validation(format!(
                "Column {} has {} rows, expected {}",
                column.name(),
                column.len(),
                rows
            )));
        }
        if columns[..i].iter().any(|c| c.name() == column.name()) {
            return Err(MilvusError::validation(format!(
                "Column {} appears twice",
                column.name()
            )));
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_columns_row_count() {
        let columns = vec![
            Column::varchar("id", vec!["a".into(), "b".into()]),
            Column::float_vector("embedding", vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        ];
        assert_eq!(validate_columns(&columns).unwrap(), 2);

        let columns = vec![
            Column::varchar("id", vec!["a".into(), "b".into()]),
            Column::float_vector("embedding", vec![vec![1.0, 2.0]]),
        ];
        assert!(matches!(validate_columns(&columns), Err(MilvusError::Validation(_))));
    }

    #[test]
    fn test_ragged_vectors_are_rejected() {
        let column = Column::float_vector("embedding", vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(column.validate().is_err());
    }

    #[test]
    fn test_binary_vector_row_width() {
        let column = Column::binary_vector("bits", 16, vec![vec![0xff, 0x00]]);
        assert!(column.validate().is_ok());
        let column = Column::binary_vector("bits", 16, vec![vec![0xff]]);
        assert!(column.validate().is_err());
    }

    #[test]
    fn test_binary_dimension_must_fill_whole_bytes() {
        let column = Column::binary_vector("bits", 12, vec![vec![0xff, 0x0f], vec![0x00, 0x01]]);
        assert!(matches!(
            column.validate(),
            Err(MilvusError::Validation(msg)) if msg.contains("divisible by 8")
        ));

        // the accepted layout decodes back to the same rows
        let column = Column::binary_vector("bits", 16, vec![vec![0xff, 0x0f], vec![0x00, 0x01]]);
        assert!(column.validate().is_ok());
        let Column::Vector(vector) = column else {
            unreachable!()
        };
        let decoded =
            VectorColumn::from_flat_binary("bits".to_string(), 16, vector.flat_binary()).unwrap();
        assert_eq!(decoded.data, vector.data);
    }

    #[test]
    fn test_empty_and_duplicate_columns() {
        assert!(validate_columns(&[]).is_err());
        let columns = vec![Column::int64("id", vec![1]), Column::int64("id", vec![2])];
        assert!(validate_columns(&columns).is_err());
    }

    #[test]
    fn test_take_and_value() {
        let column = Column::int64("id", vec![10, 20, 30]);
        let picked = column.take(&[2, 0]);
        assert_eq!(picked.as_int64().unwrap(), &[30, 10]);
        assert_eq!(column.value(1), Some(FieldValue::Int(20)));
        assert_eq!(column.value(3), None);
        assert_eq!(column.data_type(), DataType::Int64);
    }
}
