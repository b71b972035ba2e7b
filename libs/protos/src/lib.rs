//! Checked-in prost and tonic bindings for the Milvus v2.2 proto API.

pub mod milvus {
    pub mod proto {
        pub mod common {
            include!("generated/milvus/milvus.proto.common.rs");
        }

        pub mod schema {
            include!("generated/milvus/milvus.proto.schema.rs");
        }

        /// `MilvusService` messages and the generated client.
        /// The tonic client is included by `milvus.proto.milvus.rs`.
        pub mod milvus {
            include!("generated/milvus/milvus.proto.milvus.rs");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use prost::Message;

    use super::milvus::proto::milvus::FlushResponse;
    use super::milvus::proto::schema::LongArray;

    #[test]
    fn test_flush_response_segment_maps_decode() {
        let response = FlushResponse {
            db_name: "default".to_string(),
            coll_seg_i_ds: HashMap::from([(
                "books".to_string(),
                LongArray { data: vec![11, 12] },
            )]),
            flush_coll_seg_i_ds: HashMap::from([(
                "books".to_string(),
                LongArray { data: vec![11] },
            )]),
            coll_seal_times: HashMap::from([("books".to_string(), 1_700_000_000)]),
            ..Default::default()
        };

        let decoded = FlushResponse::decode(response.encode_to_vec().as_slice()).unwrap();

        assert_eq!(decoded.coll_seg_i_ds["books"].data, vec![11, 12]);
        assert_eq!(decoded.flush_coll_seg_i_ds["books"].data, vec![11]);
        assert_eq!(decoded.coll_seal_times["books"], 1_700_000_000);
    }
}
