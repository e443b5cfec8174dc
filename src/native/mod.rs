//! Process-wide handle to the libpg_query shared library.
//!
//! The handle is resolved lazily, exactly once, and is immutable for the
//! rest of the process lifetime. Callers that manage library discovery
//! themselves can hand over a pre-opened [`libloading::Library`] via
//! [`init_with_library`] before the first operation; otherwise the first
//! bridge call probes `POSTGAST_LIBRARY` and the platform default name.
//! Failure to resolve surfaces as [`Error::Library`] — there is no implicit
//! re-initialization on later calls beyond `OnceCell` retrying a failed
//! first attempt.

pub(crate) mod bridge;
pub(crate) mod layout;

use std::os::raw::c_char;

use libloading::Library;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{Error, Result};
use layout::{
    PgQueryDeparseResult, PgQueryFingerprintResult, PgQueryNormalizeResult, PgQueryParseResult,
    PgQueryPlpgsqlParseResult, PgQueryProtobuf, PgQueryProtobufParseResult, PgQueryScanResult,
    PgQuerySplitResult,
};

/// Environment variable naming an explicit library path.
const LIBRARY_ENV: &str = "POSTGAST_LIBRARY";

#[cfg(target_os = "macos")]
const DEFAULT_LIBRARY: &str = "libpg_query.dylib";
#[cfg(target_os = "windows")]
const DEFAULT_LIBRARY: &str = "pg_query.dll";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_LIBRARY: &str = "libpg_query.so";

/// Resolved entry points. One field per native operation and one per free
/// function; the `Library` rides along to keep every pointer valid.
pub(crate) struct Api {
    _lib: Library,
    pub parse: unsafe extern "C" fn(*const c_char) -> PgQueryParseResult,
    pub parse_protobuf: unsafe extern "C" fn(*const c_char) -> PgQueryProtobufParseResult,
    pub normalize: unsafe extern "C" fn(*const c_char) -> PgQueryNormalizeResult,
    pub fingerprint: unsafe extern "C" fn(*const c_char) -> PgQueryFingerprintResult,
    pub scan: unsafe extern "C" fn(*const c_char) -> PgQueryScanResult,
    pub split_with_scanner: unsafe extern "C" fn(*const c_char) -> PgQuerySplitResult,
    pub split_with_parser: unsafe extern "C" fn(*const c_char) -> PgQuerySplitResult,
    pub deparse_protobuf: unsafe extern "C" fn(PgQueryProtobuf) -> PgQueryDeparseResult,
    pub parse_plpgsql: unsafe extern "C" fn(*const c_char) -> PgQueryPlpgsqlParseResult,
    pub free_parse_result: unsafe extern "C" fn(PgQueryParseResult),
    pub free_protobuf_parse_result: unsafe extern "C" fn(PgQueryProtobufParseResult),
    pub free_normalize_result: unsafe extern "C" fn(PgQueryNormalizeResult),
    pub free_fingerprint_result: unsafe extern "C" fn(PgQueryFingerprintResult),
    pub free_scan_result: unsafe extern "C" fn(PgQueryScanResult),
    pub free_split_result: unsafe extern "C" fn(PgQuerySplitResult),
    pub free_deparse_result: unsafe extern "C" fn(PgQueryDeparseResult),
    pub free_plpgsql_parse_result: unsafe extern "C" fn(PgQueryPlpgsqlParseResult),
}

static API: OnceCell<Api> = OnceCell::new();

/// Copy one symbol out of the library. The returned pointer stays valid for
/// as long as the `Library` lives, which `Api` guarantees by owning it.
unsafe fn symbol<T: Copy>(lib: &Library, name: &[u8]) -> Result<T> {
    let sym = lib.get::<T>(name).map_err(|e| {
        Error::Library(format!(
            "missing symbol {}: {e}",
            String::from_utf8_lossy(&name[..name.len() - 1])
        ))
    })?;
    Ok(*sym)
}

impl Api {
    fn from_library(lib: Library) -> Result<Self> {
        unsafe {
            Ok(Self {
                parse: symbol(&lib, b"pg_query_parse\0")?,
                parse_protobuf: symbol(&lib, b"pg_query_parse_protobuf\0")?,
                normalize: symbol(&lib, b"pg_query_normalize\0")?,
                fingerprint: symbol(&lib, b"pg_query_fingerprint\0")?,
                scan: symbol(&lib, b"pg_query_scan\0")?,
                split_with_scanner: symbol(&lib, b"pg_query_split_with_scanner\0")?,
                split_with_parser: symbol(&lib, b"pg_query_split_with_parser\0")?,
                deparse_protobuf: symbol(&lib, b"pg_query_deparse_protobuf\0")?,
                parse_plpgsql: symbol(&lib, b"pg_query_parse_plpgsql\0")?,
                free_parse_result: symbol(&lib, b"pg_query_free_parse_result\0")?,
                free_protobuf_parse_result: symbol(&lib, b"pg_query_free_protobuf_parse_result\0")?,
                free_normalize_result: symbol(&lib, b"pg_query_free_normalize_result\0")?,
                free_fingerprint_result: symbol(&lib, b"pg_query_free_fingerprint_result\0")?,
                free_scan_result: symbol(&lib, b"pg_query_free_scan_result\0")?,
                free_split_result: symbol(&lib, b"pg_query_free_split_result\0")?,
                free_deparse_result: symbol(&lib, b"pg_query_free_deparse_result\0")?,
                free_plpgsql_parse_result: symbol(&lib, b"pg_query_free_plpgsql_parse_result\0")?,
                _lib: lib,
            })
        }
    }

    fn load_default() -> Result<Self> {
        let candidates = match std::env::var(LIBRARY_ENV) {
            Ok(path) => vec![path],
            Err(_) => vec![DEFAULT_LIBRARY.to_string()],
        };

        let mut last_err = None;
        for candidate in &candidates {
            // Library::new is unsafe because arbitrary initializers run on
            // load; libpg_query has none beyond the C runtime.
            match unsafe { Library::new(candidate) } {
                Ok(lib) => {
                    debug!(library = %candidate, "loaded libpg_query");
                    return Self::from_library(lib);
                }
                Err(e) => last_err = Some(format!("{candidate}: {e}")),
            }
        }
        Err(Error::Library(last_err.unwrap_or_else(|| {
            "no library candidates to try".to_string()
        })))
    }
}

/// Install a caller-opened library as the process-wide handle.
///
/// Must be called before the first operation; once any bridge call has
/// resolved the handle it is immutable and this returns a
/// [`Error::Library`].
pub fn init_with_library(lib: Library) -> Result<()> {
    let api = Api::from_library(lib)?;
    API.set(api)
        .map_err(|_| Error::Library("native library handle already initialized".to_string()))
}

/// The resolved handle, loading it on first use.
pub(crate) fn api() -> Result<&'static Api> {
    API.get_or_try_init(Api::load_default)
}

/// Whether a native library handle can be (or already has been) resolved.
///
/// Useful for tests and callers that want to degrade gracefully on systems
/// without libpg_query installed.
pub fn available() -> bool {
    api().is_ok()
}
