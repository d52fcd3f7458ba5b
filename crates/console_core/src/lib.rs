use reqwest::{header, Client, Method};
use serde_json::Value;
use shared::catalog::{template, ApiCall, RouteConvention};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub mod eval;

pub use eval::Reply;

/// The five transient form fields. Everything is kept as the literal text
/// the user typed or the last dispatch wrote; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub method: String,
    pub endpoint: String,
    pub body: String,
    pub token: String,
    pub response: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid server url '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
enum SendFailure {
    #[error("unsupported request method '{0}'")]
    Method(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub struct ConsoleSession {
    http: Client,
    server_url: String,
    convention: RouteConvention,
    pub form: RequestForm,
}

impl ConsoleSession {
    pub fn new(
        server_url: impl Into<String>,
        convention: RouteConvention,
    ) -> Result<ConsoleSession, SessionError> {
        let raw = server_url.into();
        let parsed = Url::parse(&raw).map_err(|err| SessionError::InvalidServerUrl {
            url: raw.clone(),
            reason: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SessionError::InvalidServerUrl {
                    url: raw.clone(),
                    reason: format!("unsupported scheme '{other}', expected http or https"),
                });
            }
        }
        Ok(ConsoleSession {
            http: Client::new(),
            server_url: raw.trim_end_matches('/').to_string(),
            convention,
            form: RequestForm::default(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn convention(&self) -> RouteConvention {
        self.convention
    }

    pub fn set_convention(&mut self, convention: RouteConvention) {
        self.convention = convention;
    }

    /// Dispatches the form as it stands. The response field is wiped before
    /// anything else happens, so a refused dispatch still leaves it blank.
    /// Returns false when the method or endpoint field is empty.
    pub async fn submit(&mut self) -> bool {
        self.form.response.clear();
        if self.form.endpoint.is_empty() || self.form.method.is_empty() {
            return false;
        }
        let endpoint = self.form.endpoint.clone();
        let body = self.form.body.clone();
        let method = self.form.method.clone();
        let token = self.form.token.clone();
        self.send(&endpoint, &body, &method, &token).await;
        true
    }

    /// Issues one request and folds the outcome back into the form. A
    /// non-success status becomes a `"<code>: <reason>"` line above the
    /// pretty-printed body; a transport or parse failure replaces the
    /// response wholesale and leaves the token untouched.
    pub async fn send(&mut self, path: &str, body: &str, method: &str, token: &str) {
        match self.perform(path, body, method, token).await {
            Ok((status_line, data)) => {
                self.form.token = next_token(&data, token);
                let pretty =
                    serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
                self.form.response = match status_line {
                    Some(line) => format!("{line}{pretty}"),
                    None => pretty,
                };
            }
            Err(err) => {
                self.form.response = err.to_string();
            }
        }
    }

    async fn perform(
        &self,
        path: &str,
        body: &str,
        method: &str,
        token: &str,
    ) -> Result<(Option<String>, Value), SendFailure> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| SendFailure::Method(method.to_string()))?;
        let url = if path.contains("://") {
            path.to_string()
        } else {
            format!("{}{path}", self.server_url)
        };
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::AUTHORIZATION, token)
            .header(header::CONTENT_TYPE, "application/json");
        if !body.is_empty() {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        let status_line = if status.is_success() {
            None
        } else {
            Some(format!(
                "{}: {}\n",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            ))
        };
        let data = response.json().await?;
        Ok((status_line, data))
    }

    /// Loads one request into the form without sending it. The response and
    /// token fields are left alone so a pre-fill never destroys state.
    pub fn display_request(&mut self, method: &str, endpoint: &str, payload: Option<&Value>) {
        self.form.method = method.to_string();
        self.form.endpoint = endpoint.to_string();
        self.form.body = match payload {
            Some(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            None => String::new(),
        };
    }

    pub fn prefill(&mut self, call: ApiCall) {
        let template = template(self.convention, call);
        self.display_request(template.method, template.path, template.body.as_ref());
    }
}

/// A non-empty `authToken` string in the response replaces the form token.
/// Otherwise the previous value stays, with "none" backfilled so the field
/// is never blank once a response has parsed.
fn next_token(data: &Value, current: &str) -> String {
    match data.get("authToken").and_then(Value::as_str) {
        Some(fresh) if !fresh.is_empty() => fresh.to_string(),
        _ if !current.is_empty() => current.to_string(),
        _ => "none".to_string(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
