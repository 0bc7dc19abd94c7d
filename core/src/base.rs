//! Shared base clients.
//!
//! # Design
//! Resource clients describe each operation as an `ApiRequest` and pass it
//! here. `RequestBuilder` resolves it into a concrete `HttpRequest`
//! (URL, query, auth, content type, per-call overrides). `BaseClient` and
//! `AsyncBaseClient` differ only in how they execute that request, so the
//! two flavours always put identical requests on the wire.
//!
//! Any non-2xx response is surfaced as `ApiError::Api` unmodified.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::form::{to_form_urlencoded, FORM_CONTENT_TYPE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::options::RequestOptions;
use crate::transport::{AsyncTransport, Transport};

/// Body of an outgoing request, already encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Form(String),
}

impl RequestBody {
    fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Form(_) => FORM_CONTENT_TYPE,
        }
    }

    fn into_string(self) -> String {
        match self {
            RequestBody::Form(body) => body,
        }
    }
}

/// One API operation, independent of how it will be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the base URL, parameters already interpolated.
    pub path: String,
    pub auth_names: &'static [&'static str],
    pub body: Option<RequestBody>,
}

/// Turns `ApiRequest`s into `HttpRequest`s for a given configuration.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: ClientConfig,
    credentials: Credentials,
}

impl RequestBuilder {
    pub fn new(config: ClientConfig) -> Self {
        let credentials = Credentials::new(config.api_key().cloned());
        Self {
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build(&self, request: ApiRequest, options: &RequestOptions) -> Result<HttpRequest, ApiError> {
        let mut url = format!("{}{}", self.config.base_url(), request.path);
        if !options.additional_params.is_empty() {
            let query = to_form_urlencoded(&options.additional_params)?;
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = vec![("user-agent".to_string(), self.config.user_agent().to_string())];
        headers.extend(self.credentials.headers_for(request.auth_names));
        if let Some(body) = &request.body {
            headers.push(("content-type".to_string(), body.content_type().to_string()));
        }
        headers.extend(options.additional_headers.iter().cloned());

        Ok(HttpRequest {
            method: request.method,
            url,
            headers,
            body: request.body.map(RequestBody::into_string),
            timeout: options.timeout.or(self.config.timeout()),
        })
    }
}

/// Map non-2xx responses to `ApiError::Api`.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    debug!(status = response.status, bytes = response.body.len(), "received response");
    if response.is_success() {
        return Ok(response);
    }
    warn!(status = response.status, "request failed");
    Err(ApiError::Api {
        status: response.status,
        body: response.body,
    })
}

/// Blocking base client shared by every sync resource client.
#[derive(Clone)]
pub struct BaseClient {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl BaseClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            builder: RequestBuilder::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.builder.config()
    }

    pub fn request(&self, request: ApiRequest, options: Option<RequestOptions>) -> Result<HttpResponse, ApiError> {
        let options = options.unwrap_or_default();
        let request = self.builder.build(request, &options)?;
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        check_status(self.transport.execute(request)?)
    }
}

/// Non-blocking base client shared by every async resource client.
#[derive(Clone)]
pub struct AsyncBaseClient {
    builder: RequestBuilder,
    transport: Arc<dyn AsyncTransport>,
}

impl AsyncBaseClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn AsyncTransport>) -> Self {
        Self {
            builder: RequestBuilder::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.builder.config()
    }

    pub async fn request(&self, request: ApiRequest, options: Option<RequestOptions>) -> Result<HttpResponse, ApiError> {
        let options = options.unwrap_or_default();
        let request = self.builder.build(request, &options)?;
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        check_status(self.transport.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::auth::API_KEY_SCHEME;

    const AUTH: &[&str] = &[API_KEY_SCHEME];

    fn builder() -> RequestBuilder {
        RequestBuilder::new(
            ClientConfig::builder("http://localhost:8080/api/v3/")
                .api_key("special-key")
                .user_agent("tests")
                .build(),
        )
    }

    fn get(path: &str) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            path: path.to_string(),
            auth_names: AUTH,
            body: None,
        }
    }

    #[test]
    fn build_joins_base_url_and_path() {
        let req = builder().build(get("/store/order/1"), &RequestOptions::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/api/v3/store/order/1");
        assert_eq!(req.body, None);
        assert_eq!(req.timeout, None);
    }

    #[test]
    fn build_adds_user_agent_and_auth_headers() {
        let req = builder().build(get("/x"), &RequestOptions::default()).unwrap();
        assert_eq!(
            req.headers,
            vec![
                ("user-agent".to_string(), "tests".to_string()),
                ("api_key".to_string(), "special-key".to_string()),
            ]
        );
    }

    #[test]
    fn build_sets_content_type_for_form_body() {
        let request = ApiRequest {
            method: HttpMethod::Post,
            path: "/store/order".to_string(),
            auth_names: AUTH,
            body: Some(RequestBody::Form("id=1".to_string())),
        };
        let req = builder().build(request, &RequestOptions::default()).unwrap();
        assert_eq!(req.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(req.body.as_deref(), Some("id=1"));
    }

    #[test]
    fn build_applies_request_options() {
        let options = RequestOptions::new()
            .timeout(Duration::from_secs(2))
            .header("x-trace", "abc")
            .param("dry run", "yes&no");
        let req = builder().build(get("/x"), &options).unwrap();
        assert_eq!(req.url, "http://localhost:8080/api/v3/x?dry+run=yes%26no");
        assert_eq!(req.headers.last(), Some(&("x-trace".to_string(), "abc".to_string())));
        assert_eq!(req.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn request_timeout_falls_back_to_config() {
        let builder = RequestBuilder::new(
            ClientConfig::builder("http://h").timeout(Duration::from_secs(9)).build(),
        );
        let req = builder.build(get("/x"), &RequestOptions::default()).unwrap();
        assert_eq!(req.timeout, Some(Duration::from_secs(9)));
        let req = builder
            .build(get("/x"), &RequestOptions::new().timeout(Duration::from_secs(1)))
            .unwrap();
        assert_eq!(req.timeout, Some(Duration::from_secs(1)));
    }

    struct Canned {
        status: u16,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: b"boom".to_vec(),
            })
        }
    }

    #[test]
    fn non_success_status_becomes_api_error() {
        let transport = Arc::new(Canned {
            status: 500,
            seen: Mutex::new(Vec::new()),
        });
        let client = BaseClient::new(ClientConfig::new("http://h"), transport.clone());
        let err = client.request(get("/x"), None).unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
        assert_eq!(err.body_text().as_deref(), Some("boom"));
        assert_eq!(transport.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn success_status_returns_response() {
        let transport = Arc::new(Canned {
            status: 204,
            seen: Mutex::new(Vec::new()),
        });
        let client = BaseClient::new(ClientConfig::new("http://h"), transport);
        let resp = client.request(get("/x"), None).unwrap();
        assert_eq!(resp.status, 204);
    }
}
