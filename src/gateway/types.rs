//! Request and response values passed along the chain

use crate::utils::error::{ClientError, Result, extract_detail};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Distinguishes credential-establishing calls from everything else.
///
/// Authentication calls (login, registration and the identity lookup made
/// while logging in) surface their errors untouched and never trigger the
/// session-expiry redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Authentication,
    Standard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// Outgoing call, relative to the configured API base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// Bearer credential; filled from the store when left empty
    pub bearer: Option<String>,
    pub body: RequestBody,
    pub kind: CallKind,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            bearer: None,
            body: RequestBody::Empty,
            kind: CallKind::Standard,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post_form(path: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let mut request = Self::new(Method::POST, path);
        request.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        request
    }

    pub fn post_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self> {
        let mut request = Self::new(Method::POST, path);
        request.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(request)
    }

    pub fn put_json<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self> {
        let mut request = Self::new(Method::PUT, path);
        request.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(request)
    }

    /// Mark as a login/registration call
    pub fn authentication(mut self) -> Self {
        self.kind = CallKind::Authentication;
        self
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_authentication(&self) -> bool {
        self.kind == CallKind::Authentication
    }
}

/// Raw response; any status is a valid response at this level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Convert a non-success response into the error taxonomy
    pub fn into_error(self) -> ClientError {
        let detail = extract_detail(self.status, &self.body);
        ClientError::from_status(self.status, detail)
    }
}
