use crate::changeset::{Content, Update};
use crate::context::SyncContext;
use crate::error::SyncError;
use crate::request::{self, OutboundRequest};
use crate::ui::count;
use crate::{detail, info, status, warning};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// sends a request and reports the HTTP status code
///
/// non-2xx statuses are returned as `Ok`, only transport failures are errors
pub trait Transport {
    fn send(&self, request: &OutboundRequest) -> Result<u16, ureq::Error>;
}

/// blocking transport backed by a ureq agent, with no timeout and no retry
///
/// redirects are not followed: a 3xx answer to the PUT (eg. a login redirect for bad
/// credentials) is reported as-is, re-issuing it as a GET would hide the failed update
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &OutboundRequest) -> Result<u16, ureq::Error> {
        let mut builder = self.agent.put(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        let response = builder.send(request.body.as_str())?;
        Ok(response.status().as_u16())
    }
}

/// what a finished run did
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// requests built and logged
    pub planned: usize,
    /// requests sent and acknowledged with a 2xx status
    pub sent: usize,
}

/// log every update and, in live mode, send it
///
/// updates are processed strictly in order and each request completes before the next
/// one is built; the first failure ends the run, updates already sent stay applied
pub fn send_updates(
    updates: &[Update],
    ctx: &SyncContext,
    transport: &dyn Transport,
) -> Result<Summary, SyncError> {
    let mut summary = Summary::default();

    if updates.is_empty() {
        status!("no file changes detected");
        return Ok(summary);
    }

    info!();
    status!("sending {}:", count(updates.len(), "update"));
    info!("{}", RULE);

    for update in updates {
        let Content::Text(content) = &update.content else {
            warning!("skipping deletion of {} (not supported)", update.path);
            return Err(SyncError::Deletion {
                path: update.path.clone(),
            });
        };

        let request = request::build(&ctx.admin_root, &ctx.credentials, &update.path, content)?;
        summary.planned += 1;

        info!("update: {} → {}", update.path, request.url);
        detail!("  {} {}", request.method, request.url);
        detail!("  body: {}", request.body);
        info!();

        if !ctx.mode.is_live() {
            continue;
        }

        match transport.send(&request) {
            Ok(code) if (200..300).contains(&code) => {
                status!("updated {} → {} (HTTP {})", update.path, request.url, code);
                summary.sent += 1;
            }
            Ok(code) => {
                return Err(SyncError::HttpStatus {
                    path: update.path.clone(),
                    status: code,
                });
            }
            Err(source) => {
                return Err(SyncError::Transport {
                    path: update.path.clone(),
                    source,
                });
            }
        }
    }

    if ctx.mode.is_live() {
        status!("{} sent", count(summary.sent, "update"));
    } else {
        status!("dry run, {} not sent", count(summary.planned, "update"));
    }

    Ok(summary)
}
