use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use shared::{
    abstract_trait::{
        ApiReply, ApiRequest, DynHttpTransport, DynTokenSource, HttpMethod, HttpTransportTrait,
    },
    domain::{
        requests::PaginationParams,
        responses::{ApiResponse, ApiResponsePagination},
    },
    errors::ClientError,
    utils::{paginated_query, query_pairs},
};
use tracing::{debug, error};

/// reqwest-backed transport. One request per call, no retry and no timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("catalog-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl HttpTransportTrait for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ClientError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let url = self.url(&request.endpoint);
        debug!("{} {} {:?}", request.method, url, request.query);

        let mut builder = self.client.request(method, &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Failed to reach {url}: {e}");
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body from {url}: {e}");
            ClientError::Transport(e.to_string())
        })?;

        Ok(ApiReply { status, body })
    }
}

/// Typed wrapper over a transport: builds query strings, attaches the session
/// token and unwraps the `{success, message, data, status}` envelope.
#[derive(Clone)]
pub struct ApiClient {
    transport: DynHttpTransport,
    token_source: Option<DynTokenSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("transport", &"DynHttpTransport")
            .field("token_source", &self.token_source.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(transport: DynHttpTransport) -> Self {
        Self {
            transport,
            token_source: None,
        }
    }

    pub fn with_token_source(mut self, token_source: DynTokenSource) -> Self {
        self.token_source = Some(token_source);
        self
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.execute(ApiRequest::new(HttpMethod::Get, endpoint)).await
    }

    pub async fn get_with<T, P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Get, endpoint).with_query(query_pairs(params)?);
        self.execute(request).await
    }

    pub async fn get_paginated<T, F>(
        &self,
        endpoint: &str,
        pagination: &PaginationParams,
        filters: Option<&F>,
    ) -> Result<ApiResponsePagination<T>, ClientError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Get, endpoint)
            .with_query(paginated_query(pagination, filters)?);

        let reply = self.dispatch(request).await?;
        let value = decode(&reply)?;
        reject_failed(&value, reply.status)?;

        from_value(value)
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Post, endpoint).with_body(to_body(body)?);
        self.execute(request).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Put, endpoint).with_body(to_body(body)?);
        self.execute(request).await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Patch, endpoint).with_body(to_body(body)?);
        self.execute(request).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.execute(ApiRequest::new(HttpMethod::Delete, endpoint)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<T>, ClientError> {
        let reply = self.dispatch(request).await?;
        let value = match decode(&reply)? {
            Value::Null => empty_envelope(reply.status),
            value => value,
        };
        reject_failed(&value, reply.status)?;

        let mut envelope: ApiResponse<T> = from_value(value)?;
        if envelope.status == 0 {
            envelope.status = reply.status;
        }

        Ok(envelope)
    }

    async fn dispatch(&self, mut request: ApiRequest) -> Result<ApiReply, ClientError> {
        if let Some(source) = &self.token_source {
            request.bearer_token = source.bearer_token();
        }

        let method = request.method;
        let endpoint = request.endpoint.clone();
        let reply = self.transport.send(request).await?;

        if !reply.is_success() {
            let message = error_message(&reply.body);
            error!("{method} {endpoint} failed with {}: {message}", reply.status);
            return Err(ClientError::Status {
                status: reply.status,
                message,
            });
        }

        Ok(reply)
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| ClientError::Decode(format!("Failed to encode body: {e}")))
}

/// Empty bodies (`204 No Content`) decode as `null`.
fn decode(reply: &ApiReply) -> Result<Value, ClientError> {
    if reply.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&reply.body).map_err(|e| {
        error!("Failed to decode response ({}): {e}", reply.status);
        ClientError::Decode(e.to_string())
    })
}

/// Successful envelope with no payload, for replies that carry no body.
fn empty_envelope(status: u16) -> Value {
    json!({ "success": true, "message": "", "data": null, "status": status })
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Unexpected response shape: {e}");
        ClientError::Decode(e.to_string())
    })
}

/// A 2xx reply whose envelope says `success: false` is still a failure.
fn reject_failed(value: &Value, reply_status: u16) -> Result<(), ClientError> {
    if value.get("success") != Some(&Value::Bool(false)) {
        return Ok(());
    }

    let status = value
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
        .filter(|s| *s != 0)
        .unwrap_or(reply_status);
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    error!("API reported failure ({status}): {message}");
    Err(ClientError::Api { status, message })
}

/// Best-effort message from an error body: `message`, then `detail`, then the raw text.
fn error_message(body: &str) -> String {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "detail"] {
            match object.get(key) {
                Some(Value::String(msg)) if !msg.is_empty() => return msg.clone(),
                Some(Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}
