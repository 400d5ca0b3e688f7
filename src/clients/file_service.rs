//! File service client

use super::FileLookup;
use crate::error::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// File record as returned by the file service. Only the owner is consumed
/// here; the rest rides along.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFile {
    pub id: String,
    #[serde(rename = "ownerID")]
    pub owner_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

pub struct FileServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl FileServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl FileLookup for FileServiceClient {
    async fn file_by_id(&self, id: &str) -> Result<RemoteFile, ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/files/{}", self.base_url, id))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ClientError::Status {
                service: "file-service",
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp.json().await?)
    }
}
