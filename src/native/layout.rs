//! Byte-exact mirrors of libpg_query's result structs.
//!
//! Every struct here must match `pg_query.h` field-for-field: same order,
//! same widths, same pointer semantics. A mismatch is not a catchable error —
//! it is silent memory corruption — so nothing in this file may be
//! reordered or "cleaned up" without checking the native header.
//!
//! All structs are `Copy` because the native functions return them by value
//! and the matching free function takes them back by value.

use std::os::raw::{c_char, c_int};

/// Mirrors `PgQueryError`. Reached through the `error` pointer of every
/// result struct; string fields are NUL-terminated C strings owned by the
/// native side.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryError {
    pub message: *mut c_char,
    pub funcname: *mut c_char,
    pub filename: *mut c_char,
    pub lineno: c_int,
    pub cursorpos: c_int,
    pub context: *mut c_char,
}

/// Mirrors `PgQueryProtobuf`: a length-delimited binary payload.
///
/// `data` is **not** a C string — protobuf payloads contain embedded NUL
/// bytes, so it must always be read as `(data, len)`, never scanned for a
/// terminator.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryProtobuf {
    pub len: usize,
    pub data: *mut c_char,
}

/// Mirrors `PgQueryParseResult` (`pg_query_parse`, JSON tree).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryParseResult {
    pub parse_tree: *mut c_char,
    pub stderr_buffer: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryProtobufParseResult` (`pg_query_parse_protobuf`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryProtobufParseResult {
    pub parse_tree: PgQueryProtobuf,
    pub stderr_buffer: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryNormalizeResult` (`pg_query_normalize`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryNormalizeResult {
    pub normalized_query: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryFingerprintResult` (`pg_query_fingerprint`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryFingerprintResult {
    pub fingerprint: u64,
    pub fingerprint_str: *mut c_char,
    pub stderr_buffer: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryScanResult` (`pg_query_scan`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryScanResult {
    pub pbuf: PgQueryProtobuf,
    pub stderr_buffer: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQuerySplitStmt`: one statement's byte range in the original
/// encoded buffer. `stmt_location`/`stmt_len` are byte offsets and lengths,
/// never character counts.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQuerySplitStmt {
    pub stmt_location: c_int,
    pub stmt_len: c_int,
}

/// Mirrors `PgQuerySplitResult` (`pg_query_split_with_scanner` /
/// `pg_query_split_with_parser`).
///
/// `stmts` is an array of **pointers to** [`PgQuerySplitStmt`] records, not
/// an array of flat integers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQuerySplitResult {
    pub stmts: *mut *mut PgQuerySplitStmt,
    pub n_stmts: c_int,
    pub stderr_buffer: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryDeparseResult` (`pg_query_deparse_protobuf`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryDeparseResult {
    pub query: *mut c_char,
    pub error: *mut PgQueryError,
}

/// Mirrors `PgQueryPlpgsqlParseResult` (`pg_query_parse_plpgsql`, JSON).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct PgQueryPlpgsqlParseResult {
    pub plpgsql_funcs: *mut c_char,
    pub error: *mut PgQueryError,
}
