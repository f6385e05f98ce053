use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::Config;
use crate::error::{PrbotError, Result};

/// JSON body for `POST /repos/{owner}/{repo}/pulls`.
#[derive(Serialize)]
struct PrCreateRequest<'a> {
    title: &'a str,
    body: &'a str,
    head: String,
    base: &'a str,
}

/// Open a pull request for `branch` against `base` and return its HTML URL.
///
/// Any status other than 201 Created is a failure; the response body is
/// surfaced verbatim so validation errors (duplicate PR, unknown base) can
/// be diagnosed without re-running.
pub fn create_pull_request(
    cfg: &Config,
    owner: &str,
    repo: &str,
    branch: &str,
    base: &str,
    title: &str,
    body: &str,
) -> Result<String> {
    let url = format!("{}/repos/{owner}/{repo}/pulls", cfg.github_api_url);

    let pr = PrCreateRequest {
        title,
        body,
        // GitHub wants the head owner-qualified.
        head: format!("{owner}:{branch}"),
        base,
    };

    let client = Client::builder()
        .user_agent(concat!("prbot/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to build HTTP client");

    log::info!("Opening pull request on {owner}/{repo} ({branch} -> {base})");

    let resp = client
        .post(&url)
        .bearer_auth(&cfg.github_token)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .json(&pr)
        .send()
        .map_err(|e| PrbotError::PublishRequest(e.to_string()))?;

    let status = resp.status();
    if status != StatusCode::CREATED {
        let body = resp.text().unwrap_or_default();
        return Err(PrbotError::Publish {
            status: status.as_u16(),
            body,
        });
    }

    let payload: serde_json::Value = resp
        .json()
        .map_err(|e| PrbotError::PublishPayload(format!("failed to decode response: {e}")))?;

    let pr_url = payload
        .get("html_url")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PrbotError::PublishPayload(payload.to_string()))?
        .to_string();

    log::info!("Created pull request: {pr_url}");

    Ok(pr_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on an ephemeral port and
    /// return the base URL to reach it.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            // Drain the request (headers plus declared body) before
            // answering, or the client may fail mid-write.
            let mut buf = vec![0u8; 16 * 1024];
            let mut read = 0;
            loop {
                let n = stream.read(&mut buf[read..]).unwrap();
                if n == 0 {
                    break;
                }
                read += n;
                let text = String::from_utf8_lossy(&buf[..read]).to_string();
                if let Some(end_of_headers) = text.find("\r\n\r\n") {
                    let content_length = text
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .and_then(|v| v.trim().parse::<usize>().ok())
                        })
                        .unwrap_or(0);
                    if read >= end_of_headers + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n\
                 {body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}")
    }

    fn test_config(github_api_url: String) -> Config {
        Config {
            openai_api_key: "test-key".into(),
            github_token: "test-token".into(),
            model: None,
            api_base_url: "https://api.openai.com".into(),
            github_api_url,
        }
    }

    #[test]
    fn returns_pr_url_on_201() {
        let base = serve_once(
            "201 Created",
            r#"{"html_url":"https://github.com/acme/widget/pull/1"}"#,
        );
        let cfg = test_config(base);

        let url = create_pull_request(
            &cfg, "acme", "widget", "feature/x", "main", "feat: x", "- did a thing",
        )
        .unwrap();
        assert_eq!(url, "https://github.com/acme/widget/pull/1");
    }

    #[test]
    fn surfaces_status_and_body_on_422() {
        let base = serve_once(
            "422 Unprocessable Entity",
            r#"{"message":"Validation Failed"}"#,
        );
        let cfg = test_config(base);

        let err = create_pull_request(
            &cfg, "acme", "widget", "feature/x", "main", "feat: x", "- did a thing",
        )
        .unwrap_err();

        match err {
            PrbotError::Publish { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("Validation Failed"));
            }
            other => panic!("expected Publish error, got {other:?}"),
        }
    }

    #[test]
    fn fails_when_success_payload_lacks_pr_url() {
        let base = serve_once("201 Created", r#"{"number":1}"#);
        let cfg = test_config(base);

        let err = create_pull_request(
            &cfg, "acme", "widget", "feature/x", "main", "feat: x", "- did a thing",
        )
        .unwrap_err();
        assert!(matches!(err, PrbotError::PublishPayload(_)));
    }
}
