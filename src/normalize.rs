//! SQL normalization via the native engine.

use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};

/// Replace literal constants with positional placeholders (`$1`, `$2`, ...).
///
/// Useful for grouping structurally equivalent queries, e.g. when
/// aggregating query logs.
///
/// # Example
///
/// ```no_run
/// let normalized = postgast::normalize("SELECT * FROM users WHERE id = 42")?;
/// assert_eq!(normalized, "SELECT * FROM users WHERE id = $1");
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn normalize(sql: &str) -> Result<String> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "normalize");

    let result = unsafe { (api.normalize)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_normalize_result);
    bridge::check_error(guard.get().error)?;
    bridge::owned_text(guard.get().normalized_query)
}
