use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, RequestBuilder, Response, Url,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::dto::{PostgrestErrorDto, StudyLogBody};
use crate::api::{RemoteError, StudyLogGateway, STUDY_LOGS_TABLE};
use crate::types::{StudyLogEntry, StudyLogInput};

const REST_PATH: &str = "rest/v1/";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
/// Makes PostgREST answer with a single object instead of a one-element array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Gateway speaking the PostgREST dialect used by hosted Postgres backends.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    table_url: Url,
}

impl RestGateway {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, RemoteError> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| RemoteError::Config(format!("invalid API URL {base_url}: {e}")))?;
        let table_url = base_url
            .join(REST_PATH)
            .and_then(|rest| rest.join(STUDY_LOGS_TABLE))
            .map_err(|e| RemoteError::Config(format!("failed to build table URL: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, header_value(api_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {api_key}"))?);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RemoteError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, table_url })
    }

    fn list_request(&self) -> RequestBuilder {
        self.client
            .get(self.table_url.clone())
            .query(&[("select", "*")])
    }

    fn create_request(&self, input: &StudyLogInput) -> RequestBuilder {
        self.client
            .post(self.table_url.clone())
            .query(&[("select", "*")])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&StudyLogBody::from(input))
    }

    fn update_request(&self, id: i64, input: &StudyLogInput) -> RequestBuilder {
        self.client
            .patch(self.table_url.clone())
            .query(&[("id", id_filter(id))])
            .json(&StudyLogBody::from(input))
    }

    fn delete_request(&self, id: i64) -> RequestBuilder {
        self.client
            .delete(self.table_url.clone())
            .query(&[("id", id_filter(id))])
    }

    async fn send(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<Response, RemoteError> {
        debug!(call, "sending request");
        let response = request
            .send()
            .await
            .map_err(|source| RemoteError::Transport { call, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PostgrestErrorDto>(&body)
            .ok()
            .and_then(|dto| dto.describe())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body
                }
            });

        warn!(call, status = status.as_u16(), %message, "store rejected request");
        Err(RemoteError::Status {
            call,
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<T, RemoteError> {
        let response = self.send(request, call).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| RemoteError::Decode { call, source })
    }

    async fn send_without_body(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<(), RemoteError> {
        let response = self.send(request, call).await?;
        if let Err(e) = response.bytes().await {
            debug!(call, error = %e, "failed to drain response body");
        }
        Ok(())
    }
}

#[async_trait]
impl StudyLogGateway for RestGateway {
    async fn list_all(&self) -> Result<Vec<StudyLogEntry>, RemoteError> {
        self.get_json(self.list_request(), "GET study-logs").await
    }

    async fn create(&self, input: &StudyLogInput) -> Result<StudyLogEntry, RemoteError> {
        self.get_json(self.create_request(input), "POST study-logs")
            .await
    }

    async fn update(&self, id: i64, input: &StudyLogInput) -> Result<(), RemoteError> {
        self.send_without_body(self.update_request(id, input), "PATCH study-logs")
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        self.send_without_body(self.delete_request(id), "DELETE study-logs")
            .await
    }
}

fn id_filter(id: i64) -> String {
    format!("eq.{id}")
}

fn header_value(value: &str) -> Result<HeaderValue, RemoteError> {
    HeaderValue::from_str(value)
        .map_err(|_| RemoteError::Config("API key contains invalid header characters".into()))
}
