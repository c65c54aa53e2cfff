use crate::config::ServerEndpoint;
use crate::constants;
use crate::engine::descriptor::Descriptor;
use crate::error::Error;
use crate::logging;
use bytes::Bytes;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Outcome of a successful round trip: the status and the raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub status: StatusCode,
    /// Reason phrase sent by the gateway when it differs from the canonical one.
    pub reason: Option<String>,
    pub body: Bytes,
}

impl Exchange {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// Status line as sent by the gateway, e.g. `201 Created`.
    #[must_use]
    pub fn status_line(&self) -> String {
        status_line(self.status, self.reason.as_deref())
    }
}

/// `{code} {reason}`, preferring the reason phrase received on the wire over
/// the canonical one. A code with neither prints bare.
#[must_use]
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.or_else(|| status.canonical_reason()) {
        Some(reason) if !reason.is_empty() => format!("{} {reason}", status.as_u16()),
        _ => status.as_u16().to_string(),
    }
}

fn received_reason(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
}

/// Install the process-wide rustls crypto provider.
///
/// reqwest is built without a bundled provider; installing twice is a no-op.
pub fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();

    let _ = provider.install_default();
}

/// Build HTTP client. No timeout is set; a call lasts as long as the
/// transport allows.
fn build_http_client() -> Result<reqwest::Client, Error> {
    install_crypto_provider();
    reqwest::Client::builder().build().map_err(Error::Transport)
}

/// Maps a response status to the protocol outcome.
///
/// Checked in order: a 404 on an operation with a not-found scope, then any
/// status other than the declared success status.
///
/// # Errors
///
/// Returns [`Error::NotFound`] or [`Error::UnexpectedStatus`].
pub fn classify(
    descriptor: &Descriptor,
    status: StatusCode,
    reason: Option<&str>,
) -> Result<(), Error> {
    if status == StatusCode::NOT_FOUND {
        if let Some(scope) = &descriptor.not_found {
            return Err(Error::NotFound {
                resource: scope.resource,
                id: scope.id.clone(),
            });
        }
    }

    if status != descriptor.success {
        return Err(Error::UnexpectedStatus {
            operation: descriptor.operation_name(),
            status: status_line(status, reason),
        });
    }

    Ok(())
}

/// Performs one round trip against the admin API.
///
/// The body, when given, is sent as JSON with
/// `Content-Type: application/json; charset=UTF-8`. The response body is only
/// read once the status has been classified as success.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the body cannot be serialized,
/// [`Error::Transport`] if no response is received, the classification errors
/// of [`classify`], and [`Error::BodyRead`] if draining the body fails.
pub async fn execute<B>(
    endpoint: &ServerEndpoint,
    descriptor: &Descriptor,
    body: Option<&B>,
) -> Result<Exchange, Error>
where
    B: Serialize + ?Sized,
{
    let url = descriptor.url(endpoint.base_url());
    let client = build_http_client()?;

    let payload = body
        .map(serde_json::to_string)
        .transpose()
        .map_err(Error::Encode)?;

    let mut headers = HeaderMap::new();
    if payload.is_some() {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(constants::CONTENT_TYPE_JSON_UTF8),
        );
    }

    logging::log_request(
        descriptor.method.as_str(),
        &url,
        Some(&headers),
        payload.as_deref(),
    );

    let mut request = client
        .request(descriptor.method.clone(), &url)
        .headers(headers);
    if let Some(payload) = payload {
        request = request.body(payload);
    }

    let started = Instant::now();
    let response = request.send().await.map_err(Error::Transport)?;
    let status = response.status();
    let reason = received_reason(&response);
    let line = status_line(status, reason.as_deref());

    if let Err(e) = classify(descriptor, status, reason.as_deref()) {
        // Drained only for diagnostics; the gateway usually explains a 4xx here.
        let detail = response.text().await.ok();
        logging::log_response(
            &line,
            started.elapsed().as_millis(),
            detail.as_deref(),
            logging::get_max_body_len(),
        );
        debug!(target: "kconf::executor", operation = %descriptor.operation_name(), "{e}");
        return Err(e);
    }

    let body = response.bytes().await.map_err(Error::BodyRead)?;
    logging::log_response(
        &line,
        started.elapsed().as_millis(),
        Some(&String::from_utf8_lossy(&body)),
        logging::get_max_body_len(),
    );

    Ok(Exchange {
        status,
        reason,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::descriptor::{Action, ResourceKind};

    #[test]
    fn test_status_line_format() {
        assert_eq!(status_line(StatusCode::CREATED, None), "201 Created");
        assert_eq!(status_line(StatusCode::BAD_REQUEST, None), "400 Bad Request");
    }

    #[test]
    fn test_status_line_prefers_received_reason() {
        let status = StatusCode::from_u16(499).unwrap();
        assert_eq!(status_line(status, None), "499");
        assert_eq!(
            status_line(status, Some("Client Closed Request")),
            "499 Client Closed Request"
        );
        assert_eq!(status_line(StatusCode::OK, Some("Fine")), "200 Fine");
    }

    #[test]
    fn test_unregistered_status_prints_bare_code() {
        let descriptor = Descriptor::new(Action::Query, ResourceKind::Route, None, Some("r1"));
        let status = StatusCode::from_u16(499).unwrap();
        let err = classify(&descriptor, status, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fail sending query route command to Kong: 499"
        );
    }

    #[test]
    fn test_classify_not_found_before_status_mismatch() {
        let descriptor = Descriptor::new(Action::Query, ResourceKind::Service, None, Some("missing"));
        let err = classify(&descriptor, StatusCode::NOT_FOUND, None).unwrap_err();
        assert_eq!(err.to_string(), "service not found for the id: missing");
    }

    #[test]
    fn test_classify_unscoped_404_is_unexpected_status() {
        let descriptor = Descriptor::new(Action::List, ResourceKind::Service, None, None);
        let err = classify(&descriptor, StatusCode::NOT_FOUND, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fail sending list services command to Kong: 404 Not Found"
        );
    }

    #[test]
    fn test_classify_requires_declared_success() {
        let descriptor = Descriptor::new(Action::Add, ResourceKind::Service, None, None);
        assert!(classify(&descriptor, StatusCode::CREATED, None).is_ok());
        assert!(matches!(
            classify(&descriptor, StatusCode::OK, None),
            Err(Error::UnexpectedStatus { .. })
        ));
    }

    #[test]
    fn test_classify_delete_expects_no_content() {
        let descriptor = Descriptor::new(Action::Delete, ResourceKind::Route, None, Some("r1"));
        assert!(classify(&descriptor, StatusCode::NO_CONTENT, None).is_ok());
        assert!(classify(&descriptor, StatusCode::OK, None).is_err());
    }
}
