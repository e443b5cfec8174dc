//! SQL tokenization via the native engine.

use prost::Message;
use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};
use crate::proto::ScanResult;

/// Tokenize a SQL string.
///
/// Returns the engine version plus the ordered token sequence; each
/// [`ScanToken`](crate::proto::ScanToken) carries its kind, keyword
/// classification, and `[start, end)` byte span against the UTF-8 input.
pub fn scan(sql: &str) -> Result<ScanResult> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "scan");

    let result = unsafe { (api.scan)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_scan_result);
    bridge::check_error(guard.get().error)?;
    // Safety: decoded before the guard drops and frees the payload.
    let data = unsafe { bridge::binary(&guard.get().pbuf) };
    Ok(ScanResult::decode(data)?)
}
