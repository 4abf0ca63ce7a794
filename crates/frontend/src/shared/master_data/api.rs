//! REST access for one collection: `{base}/all`, `/add`, `/edit/{id}`,
//! `/delete/{id}`.

use async_trait::async_trait;
use contracts::domain::common::{MasterRecord, RecordId};
use contracts::shared::lookups::Lookups;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use std::marker::PhantomData;

use super::error::ApiError;

#[async_trait(?Send)]
pub trait RecordApi<R: MasterRecord> {
    async fn fetch_all(&self) -> Result<Vec<R>, ApiError>;

    /// The ack may echo the generated id, see [`MasterRecord::created_id`].
    async fn create(&self, payload: &R::Payload) -> Result<Value, ApiError>;

    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<Value, ApiError>;

    /// 400 comes back as [`ApiError::InUse`].
    async fn remove(&self, id: RecordId) -> Result<Value, ApiError>;

    async fn fetch_lookups(&self) -> Result<Lookups, ApiError> {
        Ok(Lookups::default())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// [`RecordApi`] over `gloo-net`.
pub struct HttpRecordApi<R> {
    api_base: String,
    lookups_path: Option<&'static str>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpRecordApi<R> {
    fn clone(&self) -> Self {
        Self {
            api_base: self.api_base.clone(),
            lookups_path: self.lookups_path,
            _record: PhantomData,
        }
    }
}

impl<R: MasterRecord> HttpRecordApi<R> {
    pub fn new(api_base: impl Into<String>, lookups_path: Option<&'static str>) -> Self {
        Self {
            api_base: api_base.into(),
            lookups_path,
            _record: PhantomData,
        }
    }

    fn url(&self, tail: &str) -> String {
        format!("{}/api/{}/{}", self.api_base, R::collection_name(), tail)
    }

    fn id_url(&self, action: &str, id: RecordId) -> String {
        self.url(&format!(
            "{}/{}",
            action,
            urlencoding::encode(&id.as_string())
        ))
    }
}

/// `message` or `error` out of a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

async fn error_for(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: server_message(&body),
    }
}

async fn ack(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(error_for(response).await);
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<R: MasterRecord> RecordApi<R> for HttpRecordApi<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, ApiError> {
        let url = self.url("all");
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await?;
        if !response.ok() {
            return Err(error_for(response).await);
        }
        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, payload: &R::Payload) -> Result<Value, ApiError> {
        let url = self.url("add");
        log::debug!("POST {}", url);
        let response = Request::post(&url).json(payload)?.send().await?;
        ack(response).await
    }

    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<Value, ApiError> {
        let url = self.id_url("edit", id);
        log::debug!("PUT {}", url);
        let response = Request::put(&url).json(payload)?.send().await?;
        ack(response).await
    }

    async fn remove(&self, id: RecordId) -> Result<Value, ApiError> {
        let url = self.id_url("delete", id);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url).send().await?;
        if response.status() == 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::InUse {
                message: server_message(&body),
            });
        }
        ack(response).await
    }

    async fn fetch_lookups(&self) -> Result<Lookups, ApiError> {
        let Some(path) = self.lookups_path else {
            return Ok(Lookups::default());
        };
        let url = format!("{}{}", self.api_base, path);
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(error_for(response).await);
        }
        let value = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Lookups::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_party::aggregate::Party;

    #[test]
    fn test_server_message_keys() {
        assert_eq!(
            server_message(r#"{"message": "Brand in use"}"#).as_deref(),
            Some("Brand in use")
        );
        assert_eq!(
            server_message(r#"{"message": "", "error": "duplicate key"}"#).as_deref(),
            Some("duplicate key")
        );
        assert_eq!(server_message("Internal Server Error"), None);
    }

    #[test]
    fn test_collection_urls() {
        let api: HttpRecordApi<Party> = HttpRecordApi::new("http://localhost:5000", None);
        assert_eq!(api.url("all"), "http://localhost:5000/api/party/all");
        assert_eq!(
            api.id_url("delete", RecordId(12)),
            "http://localhost:5000/api/party/delete/12"
        );
    }
}
