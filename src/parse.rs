//! SQL parsing via the native engine.

use prost::Message;
use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};
use crate::proto::ParseResult;

/// Parse a SQL string into a protobuf abstract syntax tree.
///
/// Calls the engine's `pg_query_parse_protobuf` and decodes the binary
/// payload into a [`ParseResult`] whose `stmts` hold one entry per
/// statement.
///
/// # Example
///
/// ```no_run
/// let tree = postgast::parse("SELECT id, name FROM users WHERE active = true")?;
/// assert_eq!(tree.stmts.len(), 1);
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn parse(sql: &str) -> Result<ParseResult> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "parse");

    let result = unsafe { (api.parse_protobuf)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_protobuf_parse_result);
    bridge::check_error(guard.get().error)?;
    // Safety: decoded before the guard drops and frees the payload.
    let data = unsafe { bridge::binary(&guard.get().parse_tree) };
    Ok(ParseResult::decode(data)?)
}

/// Parse a SQL string into the engine's JSON parse-tree representation.
///
/// Calls `pg_query_parse`. The JSON shape mirrors the protobuf tree but is
/// untyped; prefer [`parse`] unless the caller specifically wants JSON.
pub fn parse_json(sql: &str) -> Result<serde_json::Value> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "parse_json");

    let result = unsafe { (api.parse)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_parse_result);
    bridge::check_error(guard.get().error)?;
    let text = bridge::owned_text(guard.get().parse_tree)?;
    Ok(serde_json::from_str(&text)?)
}
