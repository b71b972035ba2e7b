//! Lazy, single-pass views over one already-received columnar response.
//!
//! Columns are matched by field name, never by position. Each row is
//! decoded when the iterator reaches it; a row with unreadable metadata
//! yields an error item without ending the sequence.

use std::mem;

use milvus_client::{Column, ScalarColumn, ScalarData, SearchHit, VectorColumn, VectorData};

use crate::error::{MemoryError, MemoryResult};
use crate::record::MemoryRecord;
use crate::store::{EMBEDDING_FIELD, METADATA_FIELD};

/// Owned metadata and embedding columns of a response.
#[derive(Debug, Default)]
struct RowSource {
    metadata: Vec<String>,
    embeddings: Option<Vec<Vec<f32>>>,
}

impl RowSource {
    fn from_columns(
        columns: Vec<Column>,
        rows: usize,
        with_embeddings: bool,
    ) -> MemoryResult<Self> {
        let mut metadata = None;
        let mut embeddings = None;

        for column in columns {
            match column {
                Column::Scalar(ScalarColumn {
                    name,
                    data: ScalarData::VarChar(values),
                }) if name == METADATA_FIELD => metadata = Some(values),
                Column::Vector(VectorColumn {
                    name,
                    data: VectorData::Float(values),
                    ..
                }) if name == EMBEDDING_FIELD => embeddings = Some(values),
                _ => {}
            }
        }

        if rows == 0 {
            return Ok(Self::default());
        }
        let metadata = metadata.ok_or_else(|| {
            MemoryError::Metadata(format!("response has no '{}' column", METADATA_FIELD))
        })?;
        if with_embeddings && embeddings.is_none() {
            return Err(MemoryError::Metadata(format!(
                "response has no '{}' column",
                EMBEDDING_FIELD
            )));
        }

        Ok(Self {
            metadata,
            embeddings: if with_embeddings { embeddings } else { None },
        })
    }

    /// Takes the row out of the source; each row is read at most once.
    fn take(&mut self, row: usize) -> MemoryResult<MemoryRecord> {
        let json = self
            .metadata
            .get_mut(row)
            .map(mem::take)
            .ok_or_else(|| MemoryError::Metadata(format!("row {} has no metadata", row)))?;
        let embedding = match self.embeddings.as_mut() {
            Some(embeddings) => Some(embeddings.get_mut(row).map(mem::take).ok_or_else(|| {
                MemoryError::Metadata(format!("row {} has no embedding", row))
            })?),
            None => None,
        };
        MemoryRecord::from_json_metadata(&json, embedding)
    }
}

/// Records decoded from a query response, in server order.
#[derive(Debug, Default)]
pub struct MemoryRecords {
    source: RowSource,
    next_row: usize,
    rows: usize,
}

impl MemoryRecords {
    pub(crate) fn from_columns(columns: Vec<Column>, with_embeddings: bool) -> MemoryResult<Self> {
        let rows = columns
            .iter()
            .find(|c| c.name() == METADATA_FIELD)
            .or_else(|| columns.first())
            .map_or(0, Column::len);
        Ok(Self {
            source: RowSource::from_columns(columns, rows, with_embeddings)?,
            next_row: 0,
            rows,
        })
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }
}

impl Iterator for MemoryRecords {
    type Item = MemoryResult<MemoryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.rows {
            return None;
        }
        let row = self.next_row;
        self.next_row += 1;
        Some(self.source.take(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MemoryRecords {}

/// Search hits that passed the relevance cut, with their scores, in the
/// order the server ranked them.
#[derive(Debug, Default)]
pub struct MemoryMatches {
    source: RowSource,
    hits: std::vec::IntoIter<SearchHit>,
}

impl MemoryMatches {
    pub(crate) fn new(
        columns: Vec<Column>,
        hits: Vec<SearchHit>,
        with_embeddings: bool,
    ) -> MemoryResult<Self> {
        Ok(Self {
            source: RowSource::from_columns(columns, hits.len(), with_embeddings)?,
            hits: hits.into_iter(),
        })
    }
}

impl Iterator for MemoryMatches {
    type Item = MemoryResult<(MemoryRecord, f64)>;

    fn next(&mut self) -> Option<Self::Item> {
        let hit = self.hits.next()?;
        Some(
            self.source
                .take(hit.row)
                .map(|record| (record, f64::from(hit.score))),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hits.size_hint()
    }
}

impl ExactSizeIterator for MemoryMatches {}

#[cfg(test)]
mod tests {
    use super::*;
    use milvus_client::Id;

    fn metadata_json(id: &str) -> String {
        format!("{{\"id\":\"{}\",\"text\":\"t-{}\"}}", id, id)
    }

    #[test]
    fn test_records_decode_by_name_regardless_of_order() {
        let columns = vec![
            Column::float_vector(EMBEDDING_FIELD, vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
            Column::varchar(METADATA_FIELD, vec![metadata_json("a"), metadata_json("b")]),
        ];
        let records: Vec<_> = MemoryRecords::from_columns(columns, true)
            .unwrap()
            .collect::<MemoryResult<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].key(), "b");
        assert_eq!(records[1].embedding, Some(vec![0.0, 1.0]));
    }

    #[test]
    fn test_embedding_dropped_when_not_requested() {
        let columns = vec![
            Column::varchar(METADATA_FIELD, vec![metadata_json("a")]),
            Column::float_vector(EMBEDDING_FIELD, vec![vec![1.0]]),
        ];
        let mut records = MemoryRecords::from_columns(columns, false).unwrap();
        assert!(records.next().unwrap().unwrap().embedding.is_none());
        assert!(records.next().is_none());
    }

    #[test]
    fn test_empty_response_yields_nothing() {
        let records = MemoryRecords::from_columns(Vec::new(), true).unwrap();
        assert_eq!(records.len(), 0);
    }

    #[test]
    fn test_missing_embedding_column_is_an_error() {
        let columns = vec![Column::varchar(METADATA_FIELD, vec![metadata_json("a")])];
        assert!(matches!(
            MemoryRecords::from_columns(columns, true),
            Err(MemoryError::Metadata(_))
        ));
    }

    #[test]
    fn test_bad_row_does_not_end_the_sequence() {
        let columns = vec![Column::varchar(
            METADATA_FIELD,
            vec!["{".to_string(), metadata_json("b")],
        )];
        let mut records = MemoryRecords::from_columns(columns, false).unwrap();
        assert!(records.next().unwrap().is_err());
        assert_eq!(records.next().unwrap().unwrap().key(), "b");
    }

    #[test]
    fn test_matches_follow_hit_rows() {
        let columns = vec![Column::varchar(
            METADATA_FIELD,
            vec![metadata_json("x"), metadata_json("y"), metadata_json("z")],
        )];
        let hits = vec![
            SearchHit { id: Id::Str("z".into()), score: 9.0, row: 2 },
            SearchHit { id: Id::Str("x".into()), score: 3.0, row: 0 },
        ];
        let matches: Vec<_> = MemoryMatches::new(columns, hits, false)
            .unwrap()
            .collect::<MemoryResult<_>>()
            .unwrap();

        assert_eq!(matches[0].0.key(), "z");
        assert_eq!(matches[0].1, 9.0);
        assert_eq!(matches[1].0.key(), "x");
    }
}
