//! Line-oriented request handler
//!
//! Reads one JSON credential per line and writes one JSON decision per line.
//! Used by the binary to drive the service over stdin/stdout.

use log::{debug, info};
use serde::Serialize;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::AuthService;
use crate::error::AuthError;
use crate::error::handlers::handle_error;
use crate::identity::{CredentialRequest, Identity};
use crate::store::RecordStore;

const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Outcome of one request line
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Response {
    Decision {
        authenticated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Error {
        error: String,
        fault: &'static str,
    },
}

impl Response {
    fn from_outcome(outcome: Result<Option<Identity>, AuthError>) -> Self {
        match outcome {
            Ok(Some(identity)) => Response::Decision {
                authenticated: true,
                id: Some(identity.id),
                name: Some(identity.name),
            },
            Ok(None) => Response::Decision {
                authenticated: false,
                id: None,
                name: None,
            },
            Err(e) => {
                handle_error(&e);
                Response::Error {
                    error: e.to_string(),
                    fault: e.fault().as_str(),
                }
            }
        }
    }
}

/// Handles a single request line.
pub async fn handle_line<S>(service: &AuthService<S>, line: &str) -> Response
where
    S: RecordStore<Identity>,
{
    let outcome = match serde_json::from_str::<CredentialRequest>(line) {
        Ok(request) => service.authenticate(&request).await,
        Err(e) => Err(AuthError::InvalidRequest(e.to_string())),
    };
    Response::from_outcome(outcome)
}

/// Serves requests from `reader` until end of input. Blank lines are skipped.
///
/// A line longer than the limit or not valid UTF-8 gets a client-fault error
/// response and serving continues with the next line.
pub async fn serve_lines<S, R, W>(
    service: &AuthService<S>,
    mut reader: R,
    mut writer: W,
) -> io::Result<usize>
where
    S: RecordStore<Identity>,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0;

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(MAX_LINE_LENGTH as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await?;
        if read == 0 {
            break;
        }

        let response = if buf.len() > MAX_LINE_LENGTH && buf.last() != Some(&b'\n') {
            skip_line(&mut reader).await?;
            rejected("request too long")
        } else {
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    handle_line(service, line).await
                }
                Err(_) => rejected("request is not valid UTF-8"),
            }
        };
        debug!("Response: {:?}", response);

        let mut out = serde_json::to_string(&response).map_err(io::Error::other)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
        handled += 1;
    }

    info!("Input closed after {} requests", handled);
    Ok(handled)
}

fn rejected(reason: &str) -> Response {
    Response::from_outcome(Err(AuthError::InvalidRequest(reason.into())))
}

/// Discards input up to and including the next newline.
async fn skip_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}
