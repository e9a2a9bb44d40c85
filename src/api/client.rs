use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::{ArchiveEntry, BulkToggle, RandomRequest, Word, WordDraft, WordFilter};
use super::{ApiError, ApiResult, PromptApi};
use crate::engine::config::ApiConfig;
use crate::engine::PromptRecord;

/// Blocking HTTP implementation of `PromptApi`
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder, what: &str) -> ApiResult<Response> {
        debug!(request = what, "sending request");
        let response = request.send()?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(request = what, "unauthorized");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(request = what, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn admin(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token)
    }
}

impl PromptApi for HttpApi {
    fn daily(&self) -> ApiResult<PromptRecord> {
        let response = self.send(self.client.get(self.url("/api/daily")), "daily")?;
        Self::decode(response)
    }

    fn random(&self, request: &RandomRequest) -> ApiResult<PromptRecord> {
        let response = self.send(
            self.client.post(self.url("/api/random")).json(request),
            "random",
        )?;
        Self::decode(response)
    }

    fn archive(&self) -> ApiResult<Vec<ArchiveEntry>> {
        let response = self.send(self.client.get(self.url("/api/archive")), "archive")?;
        Self::decode(response)
    }

    fn list_words(&self, token: &str, filter: &WordFilter) -> ApiResult<Vec<Word>> {
        let request = self
            .client
            .get(self.url("/api/admin/words"))
            .query(&filter.query());
        let response = self.send(self.admin(request, token), "list_words")?;
        Self::decode(response)
    }

    fn get_word(&self, token: &str, id: i64) -> ApiResult<Word> {
        let request = self.client.get(self.url(&format!("/api/admin/words/{}", id)));
        let response = self.send(self.admin(request, token), "get_word")?;
        Self::decode(response)
    }

    fn create_word(&self, token: &str, draft: &WordDraft) -> ApiResult<()> {
        let request = self.client.post(self.url("/api/admin/words")).json(draft);
        self.send(self.admin(request, token), "create_word")?;
        Ok(())
    }

    fn update_word(&self, token: &str, id: i64, draft: &WordDraft) -> ApiResult<()> {
        let request = self
            .client
            .put(self.url(&format!("/api/admin/words/{}", id)))
            .json(draft);
        self.send(self.admin(request, token), "update_word")?;
        Ok(())
    }

    fn delete_word(&self, token: &str, id: i64) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("/api/admin/words/{}", id)));
        self.send(self.admin(request, token), "delete_word")?;
        Ok(())
    }

    fn bulk_toggle(&self, token: &str, ids: &[i64], active: bool) -> ApiResult<()> {
        let body = BulkToggle {
            ids: ids.to_vec(),
            active,
        };
        let request = self
            .client
            .post(self.url("/api/admin/words/bulk-toggle"))
            .json(&body);
        self.send(self.admin(request, token), "bulk_toggle")?;
        Ok(())
    }
}
