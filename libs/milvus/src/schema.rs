use serde::{Deserialize, Serialize};

use crate::error::{MilvusError, MilvusResult};
use crate::types::DataType;

/// One typed column definition of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field_id: i64,
    pub name: String,
    pub data_type: DataType,
    pub is_primary_key: bool,
    pub auto_id: bool,
    pub description: String,
    /// Only meaningful for `VarChar`
    pub max_length: Option<i32>,
    /// Only meaningful for vector fields
    pub dimension: Option<i64>,
}

impl FieldSchema {
    fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            field_id: 0,
            name: name.into(),
            data_type,
            is_primary_key: false,
            auto_id: false,
            description: String::new(),
            max_length: None,
            dimension: None,
        }
    }

    pub fn scalar(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type)
    }

    pub fn varchar(name: impl Into<String>, max_length: i32) -> Self {
        let mut field = Self::new(name, DataType::VarChar);
        field.max_length = Some(max_length);
        field
    }

    pub fn float_vector(name: impl Into<String>, dimension: i64) -> Self {
        let mut field = Self::new(name, DataType::FloatVector);
        field.dimension = Some(dimension);
        field
    }

    pub fn binary_vector(name: impl Into<String>, dimension: i64) -> Self {
        let mut field = Self::new(name, DataType::BinaryVector);
        field.dimension = Some(dimension);
        field
    }

    pub fn primary_key(mut self, auto_id: bool) -> Self {
        self.is_primary_key = true;
        self.auto_id = auto_id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// `type_params` as Milvus encodes them.
    pub fn type_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(dim) = self.dimension {
            params.push(("dim".to_string(), dim.to_string()));
        }
        if let Some(max_length) = self.max_length {
            params.push(("max_length".to_string(), max_length.to_string()));
        }
        params
    }

    /// Inverse of `type_params`.
    pub fn apply_type_param(&mut self, key: &str, value: &str) {
        match key {
            "dim" => self.dimension = value.parse().ok(),
            "max_length" => self.max_length = value.parse().ok(),
            _ => {}
        }
    }

    pub fn validate(&self) -> MilvusResult<()> {
        if self.name.trim().is_empty() {
            return Err(MilvusError::validation("Field name cannot be empty"));
        }
        if self.data_type.is_vector() {
            match self.dimension {
                Some(dim) if dim > 0 => {}
                _ => {
                    return Err(MilvusError::validation(format!(
                        "Vector field {} needs a positive dimension",
                        self.name
                    )));
                }
            }
        }
        if self.data_type == DataType::VarChar {
            match self.max_length {
                Some(len) if len > 0 => {}
                _ => {
                    return Err(MilvusError::validation(format!(
                        "VarChar field {} needs a positive max length",
                        self.name
                    )));
                }
            }
        }
        if self.is_primary_key && !matches!(self.data_type, DataType::Int64 | DataType::VarChar) {
            return Err(MilvusError::validation(format!(
                "Primary key {} must be Int64 or VarChar",
                self.name
            )));
        }
        Ok(())
    }
}

/// Schema of a collection. Immutable once the collection exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub description: String,
    pub auto_id: bool,
    pub fields: Vec<FieldSchema>,
}

impl CollectionSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        let auto_id = fields.iter().any(|f| f.is_primary_key && f.auto_id);
        Self {
            name: name.into(),
            description: String::new(),
            auto_id,
            fields,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn primary_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.is_primary_key)
    }

    pub fn vector_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.data_type.is_vector())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn validate(&self) -> MilvusResult<()> {
        if self.name.trim().is_empty() {
            return Err(MilvusError::validation("Collection name cannot be empty"));
        }
        if self.fields.is_empty() {
            return Err(MilvusError::validation("Schema needs at least one field"));
        }
        for field in &self.fields {
            field.validate()?;
        }

        let primary_keys = self.fields.iter().filter(|f| f.is_primary_key).count();
        if primary_keys != 1 {
            return Err(MilvusError::validation(format!(
                "Schema needs exactly one primary key, found {}",
                primary_keys
            )));
        }

        let vectors = self.fields.iter().filter(|f| f.data_type.is_vector()).count();
        if vectors > 1 {
            return Err(MilvusError::validation(format!(
                "Schema allows at most one vector field, found {}",
                vectors
            )));
        }

        let mut names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(MilvusError::validation("Field names must be unique"));
        }
        Ok(())
    }
}
