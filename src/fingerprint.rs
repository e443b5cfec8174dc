//! Structural query fingerprinting via the native engine.

use tracing::debug;

use crate::error::Result;
use crate::native::bridge::{self, Scoped};

/// A structural hash of a statement, ignoring literal values.
///
/// Two statements fingerprint equal when they differ only in literals.
/// The hash is validated against the engine's test corpus, not proven
/// collision-resistant — do not treat it as a cryptographic digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// The numeric 64-bit hash.
    pub value: u64,
    /// Hexadecimal string form of the hash.
    pub hex: String,
}

/// Compute the structural fingerprint of a SQL query.
///
/// # Example
///
/// ```no_run
/// let a = postgast::fingerprint("SELECT * FROM users WHERE id = 1")?;
/// let b = postgast::fingerprint("SELECT * FROM users WHERE id = 2")?;
/// assert_eq!(a, b);
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn fingerprint(sql: &str) -> Result<Fingerprint> {
    let api = crate::native::api()?;
    let input = bridge::encoded(sql);
    debug!(bytes = input.as_bytes().len(), "fingerprint");

    let result = unsafe { (api.fingerprint)(input.as_ptr()) };
    let guard = Scoped::new(result, api.free_fingerprint_result);
    bridge::check_error(guard.get().error)?;
    Ok(Fingerprint {
        value: guard.get().fingerprint,
        hex: bridge::owned_text(guard.get().fingerprint_str)?,
    })
}
