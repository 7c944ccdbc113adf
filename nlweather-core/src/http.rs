use reqwest::{Client, Response};
use std::time::Duration;

use crate::error::{QueryError, Upstream};

/// Build the HTTP client shared by the geocoding and forecast clients.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("nlweather/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Wrap a transport failure, keeping the whole source chain
/// ("error sending request: ... tcp connect error: Connection refused").
pub(crate) fn transport_error(service: Upstream, err: reqwest::Error) -> QueryError {
    QueryError::upstream(service, format!("{:#}", anyhow::Error::from(err)))
}

/// Read a response body, turning transport errors and non-2xx statuses into
/// [`QueryError::UpstreamUnavailable`].
pub(crate) async fn read_body(res: Response, service: Upstream) -> Result<String, QueryError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| {
            QueryError::upstream(
                service,
                format!("failed to read response body: {:#}", anyhow::Error::from(e)),
            )
        })?;

    if !status.is_success() {
        return Err(QueryError::upstream(
            service,
            format!("request failed with status {status}: {}", truncate_body(&body)),
        ));
    }

    Ok(body)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_bodies_on_char_boundaries() {
        let long = "é".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn joins_without_double_slashes() {
        assert_eq!(join_url("http://x/", "/v1/search"), "http://x/v1/search");
        assert_eq!(join_url("http://x", "v1/search"), "http://x/v1/search");
    }
}
