/// Bed-management API transport
///
/// Endpoints:
/// - `GET  {server_url}/bed-management/bed-wards?hospital_id={id}`
/// - `POST {server_url}/bed-management/bed-wards` (upsert by classification)
///
/// [`WardStore`] is the seam the sync controller talks to; [`HttpWardStore`]
/// is the production implementation over `reqwest`.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult, SyncStage};
use async_trait::async_trait;
use bed_ledger::WardUpsert;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const BED_WARDS_PATH: &str = "/bed-management/bed-wards";

/// Response of the ward list endpoint.
///
/// Ward rows are kept as raw JSON so one malformed row is skipped on its
/// own instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardListResponse {
    pub success: bool,
    #[serde(default)]
    pub wards: Vec<serde_json::Value>,
}

/// Optional acknowledgement body of the upsert endpoint.
#[derive(Debug, Deserialize)]
struct UpsertAck {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WardStore: Send + Sync {
    /// Fetch every ward row recorded for a hospital
    async fn fetch_wards(&self, hospital_id: i64) -> SyncResult<WardListResponse>;

    /// Create or update one ward row
    async fn upsert_ward(&self, ward: &WardUpsert) -> SyncResult<()>;
}

/// HTTP implementation of [`WardStore`]
pub struct HttpWardStore {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpWardStore {
    pub fn new(config: &SyncConfig) -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SyncError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.server_url.trim_end_matches('/'), BED_WARDS_PATH),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder, stage: SyncStage) -> SyncResult<Response> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SyncError::Status {
                stage,
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl WardStore for HttpWardStore {
    async fn fetch_wards(&self, hospital_id: i64) -> SyncResult<WardListResponse> {
        debug!(hospital_id, endpoint = %self.endpoint, "fetching bed wards");
        let req = self
            .client
            .get(&self.endpoint)
            .query(&[("hospital_id", hospital_id)]);

        let response = self.send(req, SyncStage::Load).await?;
        response
            .json::<WardListResponse>()
            .await
            .map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    async fn upsert_ward(&self, ward: &WardUpsert) -> SyncResult<()> {
        let req = self.client.post(&self.endpoint).json(ward);
        let response = self.send(req, SyncStage::Save).await?;

        // Bodies are optional; only an explicit `success: false` is a rejection.
        let body = response.text().await?;
        if let Ok(ack) = serde_json::from_str::<UpsertAck>(&body) {
            if ack.success == Some(false) {
                return Err(SyncError::Rejected {
                    stage: SyncStage::Save,
                    message: ack
                        .message
                        .unwrap_or_else(|| "backend reported failure".to_string()),
                });
            }
        }
        Ok(())
    }
}
