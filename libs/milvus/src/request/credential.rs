//! Credential management. Passwords travel base64-encoded on both transports.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use protos::milvus::proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

use super::{MilvusRequest, RestRequest, Validate, require_name};
use crate::error::MilvusResult;

fn encode_password(password: &str) -> String {
    STANDARD.encode(password)
}

#[derive(Clone, PartialEq, Eq)]
pub struct CreateCredentialRequest {
    pub username: String,
    pub password: String,
}

impl CreateCredentialRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateCredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateCredentialRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Validate for CreateCredentialRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("username", &self.username)?;
        require_name("password", &self.password)
    }
}

impl MilvusRequest for CreateCredentialRequest {
    type Grpc = proto::CreateCredentialRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::CreateCredentialRequest {
            username: self.username.clone(),
            password: encode_password(&self.password),
            ..Default::default()
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::POST,
            "/credential",
            json!({
                "username": self.username,
                "password": encode_password(&self.password),
            }),
        )
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct UpdateCredentialRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

impl UpdateCredentialRequest {
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

impl std::fmt::Debug for UpdateCredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateCredentialRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Validate for UpdateCredentialRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("username", &self.username)?;
        require_name("old_password", &self.old_password)?;
        require_name("new_password", &self.new_password)
    }
}

impl MilvusRequest for UpdateCredentialRequest {
    type Grpc = proto::UpdateCredentialRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::UpdateCredentialRequest {
            username: self.username.clone(),
            old_password: encode_password(&self.old_password),
            new_password: encode_password(&self.new_password),
            ..Default::default()
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::PATCH,
            "/credential",
            json!({
                "username": self.username,
                "oldPassword": encode_password(&self.old_password),
                "newPassword": encode_password(&self.new_password),
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCredentialRequest {
    pub username: String,
}

impl DeleteCredentialRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl Validate for DeleteCredentialRequest {
    fn validate(&self) -> MilvusResult<()> {
        require_name("username", &self.username)
    }
}

impl MilvusRequest for DeleteCredentialRequest {
    type Grpc = proto::DeleteCredentialRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::DeleteCredentialRequest {
            username: self.username.clone(),
            ..Default::default()
        }
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(
            Method::DELETE,
            "/credential",
            json!({ "username": self.username }),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCredUsersRequest;

impl Validate for ListCredUsersRequest {
    fn validate(&self) -> MilvusResult<()> {
        Ok(())
    }
}

impl MilvusRequest for ListCredUsersRequest {
    type Grpc = proto::ListCredUsersRequest;

    fn to_grpc(&self, _db_name: &str) -> Self::Grpc {
        proto::ListCredUsersRequest::default()
    }

    fn to_rest(&self, _db_name: &str) -> RestRequest {
        RestRequest::new(Method::GET, "/credential/users", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_are_base64() {
        let grpc = CreateCredentialRequest::new("alice", "milvus").build_grpc("default").unwrap();
        assert_eq!(grpc.username, "alice");
        assert_eq!(grpc.password, "bWlsdnVz");

        let rest = UpdateCredentialRequest::new("alice", "milvus", "secret")
            .build_rest("default")
            .unwrap();
        assert_eq!(rest.method, Method::PATCH);
        assert_eq!(rest.body["oldPassword"], "bWlsdnVz");
        assert_eq!(rest.body["newPassword"], "c2VjcmV0");
    }

    #[test]
    fn test_debug_hides_password() {
        let request = CreateCredentialRequest::new("alice", "milvus");
        assert!(!format!("{:?}", request).contains("milvus"));
    }

    #[test]
    fn test_credential_validation() {
        assert!(CreateCredentialRequest::new("", "milvus").validate().is_err());
        assert!(UpdateCredentialRequest::new("alice", "", "x").validate().is_err());
        assert!(DeleteCredentialRequest::new(" ").validate().is_err());
        assert!(ListCredUsersRequest.validate().is_ok());
    }
}
