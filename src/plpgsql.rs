//! PL/pgSQL function parsing via the native engine.

use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};

/// Parse a `CREATE FUNCTION ... LANGUAGE plpgsql` statement.
///
/// The engine returns this payload as UTF-8 JSON rather than protobuf: the
/// result is a JSON array with one object per parsed function, each keyed by
/// `"PLpgSQL_function"` with nested declarations, statements, and control
/// flow.
pub fn parse_plpgsql(sql: &str) -> Result<serde_json::Value> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "parse_plpgsql");

    let result = unsafe { (api.parse_plpgsql)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_plpgsql_parse_result);
    bridge::check_error(guard.get().error)?;
    let text = bridge::owned_text(guard.get().plpgsql_funcs)?;
    Ok(serde_json::from_str(&text)?)
}
