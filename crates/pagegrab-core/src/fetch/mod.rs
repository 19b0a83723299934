//! Content fetcher: one HTTP GET, body streamed into a caller-supplied sink.
//!
//! Uses the curl crate (libcurl). Each request is bound to a [`RunContext`]:
//! the transfer timeout is the context's remaining time and a progress
//! callback aborts the transfer once the context is cancelled or expired.

mod error;
mod parse;

pub use error::FetchError;

use crate::control::RunContext;
use crate::url_model::resolve_target;
use std::cell::RefCell;
use std::io::Write;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// GET client settings.
#[derive(Debug, Clone, Copy)]
pub struct Fetcher {
    connect_timeout: Duration,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Fetcher {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }

    /// GETs `href` resolved against `base` and copies the body into `sink`.
    ///
    /// Any status other than exactly 200 is an error; its body is never
    /// written to `sink`. Returns the number of body bytes written.
    pub fn get<W: Write + ?Sized>(
        &self,
        ctx: &RunContext,
        base: &str,
        href: &str,
        sink: &mut W,
    ) -> Result<u64, FetchError> {
        let target = resolve_target(base, href);
        ctx.check()?;
        tracing::debug!(url = %target, "GET");

        let transport = |source: curl::Error| FetchError::Transport {
            url: target.clone(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(&target).map_err(&transport)?;
        easy.follow_location(true).map_err(&transport)?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(&transport)?;
        if let Some(remaining) = ctx.remaining() {
            // curl truncates to whole milliseconds and reads zero as "no timeout".
            easy.timeout(remaining + Duration::from_millis(1))
                .map_err(&transport)?;
        }
        easy.progress(true).map_err(&transport)?;

        let status: RefCell<Option<parse::StatusLine>> = RefCell::new(None);
        let mut write_error: Option<std::io::Error> = None;
        let mut written: u64 = 0;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|line| {
                    if let Some(s) = std::str::from_utf8(line)
                        .ok()
                        .and_then(parse::parse_status_line)
                    {
                        // Redirect hops overwrite earlier lines; the last one wins.
                        *status.borrow_mut() = Some(s);
                    }
                    true
                })
                .map_err(&transport)?;
            transfer
                .write_function(|data| {
                    let ok = status.borrow().as_ref().is_some_and(|s| s.code == 200);
                    if !ok {
                        return Ok(0);
                    }
                    match sink.write_all(data) {
                        Ok(()) => {
                            written += data.len() as u64;
                            Ok(data.len())
                        }
                        Err(e) => {
                            write_error = Some(e);
                            Ok(0)
                        }
                    }
                })
                .map_err(&transport)?;
            let cancel = ctx.cancel_token();
            let deadline = ctx.deadline();
            transfer
                .progress_function(move |_, _, _, _| {
                    !cancel.load(Ordering::Relaxed)
                        && deadline.map_or(true, |d| Instant::now() < d)
                })
                .map_err(&transport)?;
            transfer.perform()
        };

        if let Some(source) = write_error {
            return Err(FetchError::Write {
                url: target,
                source,
            });
        }
        if let Err(e) = performed {
            if e.is_aborted_by_callback() || e.is_operation_timedout() {
                ctx.check()?;
            }
            // A write error without an io error is the rejected non-200 body.
            if !e.is_write_error() {
                return Err(transport(e));
            }
        }

        let (code, text) = match status.into_inner() {
            Some(s) => (s.code, s.text),
            None => {
                let code = easy.response_code().map_err(&transport)?;
                (code, code.to_string())
            }
        };
        if code != 200 {
            return Err(FetchError::Status {
                url: target,
                code,
                status: text,
            });
        }

        tracing::debug!(url = %target, bytes = written, "GET complete");
        Ok(written)
    }
}

/// [`Fetcher::get`] with default settings.
pub fn fetch<W: Write + ?Sized>(
    ctx: &RunContext,
    base: &str,
    href: &str,
    sink: &mut W,
) -> Result<u64, FetchError> {
    Fetcher::default().get(ctx, base, href, sink)
}
