//! Search service client and the denormalized record it accepts

use super::SearchIndex;
use crate::error::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Location of a file in the hierarchy: under a parent, or at the root.
/// Exactly one shape is ever serialized, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchLocation {
    Parent { parent: String },
    Root { root: bool },
}

impl SearchLocation {
    pub fn root() -> Self {
        Self::Root { root: true }
    }
}

/// Denormalized file projection pushed to the search index.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub key: String,
    pub bucket: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub description: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    pub size: i64,
    /// Epoch seconds
    pub created_at: i64,
    /// Epoch seconds
    pub updated_at: i64,
    pub location: SearchLocation,
    pub children: Vec<String>,
}

pub struct SearchServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SearchIndex for SearchServiceClient {
    async fn create_file(&self, record: &SearchRecord) -> Result<(), ClientError> {
        let resp = self
            .client
            .post(format!("{}/api/search/files", self.base_url))
            .json(record)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ClientError::Status {
                service: "search-service",
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}
