//! Multi-statement splitting via the native engine.

use tracing::debug;

use crate::error::{Error, Result};
use crate::native::bridge::{self, Scoped};
use crate::native::layout::PgQuerySplitResult;

/// Split a multi-statement SQL string into individual statements.
///
/// Uses the engine's parser-based splitter, which is the most accurate on
/// valid SQL. For malformed input that should still split on a best-effort
/// basis, use [`split_with_scanner`].
///
/// # Example
///
/// ```no_run
/// let stmts = postgast::split("SELECT 1; SELECT 2;")?;
/// assert_eq!(stmts, ["SELECT 1", " SELECT 2"]);
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn split(sql: &str) -> Result<Vec<String>> {
    let api = crate::native::api()?;
    split_with(sql, api.split_with_parser, "split")
}

/// Split using the engine's scanner-based splitter.
///
/// Faster and tolerant of statements that do not parse, at the cost of some
/// edge-case accuracy.
pub fn split_with_scanner(sql: &str) -> Result<Vec<String>> {
    let api = crate::native::api()?;
    split_with(sql, api.split_with_scanner, "split_with_scanner")
}

fn split_with(
    sql: &str,
    entry: unsafe extern "C" fn(*const std::os::raw::c_char) -> PgQuerySplitResult,
    op: &'static str,
) -> Result<Vec<String>> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "{op}");

    let result = unsafe { (entry)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_split_result);
    bridge::check_error(guard.get().error)?;

    // Each entry is a pointer to an (offset, length) record denoting a byte
    // range into the encoded input buffer, which the truncation in
    // `encoded` keeps identical to what the native side saw.
    let bytes = input.as_bytes();
    let n = usize::try_from(guard.get().n_stmts).unwrap_or(0);
    let mut stmts = Vec::with_capacity(n);
    for i in 0..n {
        // Safety: the native side guarantees n_stmts valid entries, each a
        // non-null pointer, alive until the guard frees the result.
        let stmt = unsafe { &**guard.get().stmts.add(i) };
        let start = usize::try_from(stmt.stmt_location)
            .map_err(|_| Error::domain("native split returned a negative statement offset"))?;
        let len = usize::try_from(stmt.stmt_len)
            .map_err(|_| Error::domain("native split returned a negative statement length"))?;
        let range = bytes
            .get(start..start + len)
            .ok_or_else(|| Error::domain("native split range exceeds the input buffer"))?;
        stmts.push(std::str::from_utf8(range)?.to_owned());
    }
    Ok(stmts)
}
