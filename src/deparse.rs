//! SQL deparsing via the native engine.

use prost::Message;
use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};
use crate::native::layout::PgQueryProtobuf;
use crate::proto::ParseResult;

/// Convert a protobuf parse tree back into SQL text.
///
/// The inverse of [`parse`](crate::parse): the tree is re-encoded and handed
/// to `pg_query_deparse_protobuf` as a length-prefixed binary payload. The
/// output is canonicalized by the engine and may differ from the original
/// query in whitespace, casing, or parenthesization while staying
/// semantically equivalent.
///
/// # Example
///
/// ```no_run
/// let tree = postgast::parse("select   id   from users")?;
/// assert_eq!(postgast::deparse(&tree)?, "SELECT id FROM users");
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn deparse(tree: &ParseResult) -> Result<String> {
    let api = crate::native::api()?;
    let payload = tree.encode_to_vec();
    debug!(bytes = payload.len(), "deparse");

    // The payload buffer outlives the call; the native side reads it only
    // for the duration of deparse_protobuf.
    let pbuf = PgQueryProtobuf {
        len: payload.len(),
        data: payload.as_ptr() as *mut _,
    };
    let result = unsafe { (api.deparse_protobuf)(pbuf) };
    let guard = Scoped::new(result, api.free_deparse_result);
    bridge::check_error(guard.get().error)?;
    bridge::owned_text(guard.get().query)
}
