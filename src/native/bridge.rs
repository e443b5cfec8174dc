//! Shared machinery for every native call.
//!
//! The call pattern is always: encode → call → check error → extract → free.
//! [`Scoped`] guarantees the free on every exit path (success, translated
//! native error, decode failure) by tying it to drop order: the guard is
//! constructed immediately after the native call returns, the error check
//! and payload extraction run while it is alive, and the free fires exactly
//! once when it goes out of scope. Nothing may touch the result after that.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::{Error, NativeError, Result};
use crate::native::layout::{PgQueryError, PgQueryProtobuf};

/// Owns one native result for the duration of a bridge call and frees it
/// exactly once on drop.
pub(crate) struct Scoped<T: Copy> {
    result: T,
    free: unsafe extern "C" fn(T),
}

impl<T: Copy> Scoped<T> {
    pub fn new(result: T, free: unsafe extern "C" fn(T)) -> Self {
        Self { result, free }
    }

    pub fn get(&self) -> &T {
        &self.result
    }
}

impl<T: Copy> Drop for Scoped<T> {
    fn drop(&mut self) {
        // Safety: the result came from the native call matching `free`, and
        // drop runs at most once.
        unsafe { (self.free)(self.result) };
    }
}

/// Translate the result's error slot into a structured error.
///
/// Must run while the owning result is still alive: every string is deep
/// copied out of native memory here, before the guard's free.
pub(crate) fn check_error(error: *mut PgQueryError) -> Result<()> {
    if error.is_null() {
        return Ok(());
    }
    // Safety: a non-null error pointer in a live result struct points at a
    // valid PgQueryError until the result is freed.
    let err = unsafe { &*error };
    Err(Error::Native(NativeError {
        message: copied_string(err.message),
        funcname: copied_string(err.funcname),
        filename: copied_string(err.filename),
        lineno: err.lineno,
        cursorpos: err.cursorpos,
        context: copied_string(err.context),
    }))
}

/// Deep-copy a possibly-null native C string, mapping null to empty and
/// replacing invalid UTF-8 rather than failing the error path.
fn copied_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // Safety: non-null native strings are NUL-terminated.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Copy a NUL-terminated success payload out as owned UTF-8 text.
pub(crate) fn owned_text(ptr: *const c_char) -> Result<String> {
    if ptr.is_null() {
        return Ok(String::new());
    }
    // Safety: success text payloads are NUL-terminated C strings valid until
    // the owning result is freed.
    let text = unsafe { CStr::from_ptr(ptr) }.to_str()?;
    Ok(text.to_owned())
}

/// View a length-delimited binary payload. Reads exactly `(data, len)` —
/// payloads contain embedded NUL bytes, so terminator scanning would
/// truncate them.
///
/// The slice borrows native memory; callers must finish decoding before the
/// owning [`Scoped`] guard drops.
pub(crate) unsafe fn binary(pbuf: &PgQueryProtobuf) -> &[u8] {
    if pbuf.data.is_null() || pbuf.len == 0 {
        return &[];
    }
    std::slice::from_raw_parts(pbuf.data.cast::<u8>(), pbuf.len)
}

/// Encode input for a native entry point that takes a C string.
///
/// An embedded NUL byte truncates the input at that byte — the same place
/// the native side would stop reading — instead of failing.
pub(crate) fn encoded(input: &str) -> CString {
    match CString::new(input) {
        Ok(c) => c,
        Err(err) => {
            let pos = err.nul_position();
            let mut bytes = err.into_vec();
            bytes.truncate(pos);
            // Safety: truncated at the first NUL, so no interior NUL remains.
            unsafe { CString::from_vec_unchecked(bytes) }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::native::layout::PgQueryNormalizeResult;

    static FREED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn counting_free(_result: PgQueryNormalizeResult) {
        FREED.fetch_add(1, Ordering::SeqCst);
    }

    fn null_result() -> PgQueryNormalizeResult {
        PgQueryNormalizeResult {
            normalized_query: std::ptr::null_mut(),
            error: std::ptr::null_mut(),
        }
    }

    #[test]
    fn test_scoped_frees_exactly_once() {
        let before = FREED.load(Ordering::SeqCst);
        {
            let guard = Scoped::new(null_result(), counting_free);
            assert!(guard.get().error.is_null());
        }
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_scoped_frees_on_error_path() {
        let before = FREED.load(Ordering::SeqCst);
        let run = || -> Result<()> {
            let _guard = Scoped::new(null_result(), counting_free);
            Err(Error::domain("forced"))
        };
        assert!(run().is_err());
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_check_error_deep_copies_fields() {
        let message = CString::new("syntax error at or near \"SELEC\"").unwrap();
        let funcname = CString::new("scanner_yyerror").unwrap();
        let mut raw = PgQueryError {
            message: message.into_raw(),
            funcname: funcname.into_raw(),
            filename: std::ptr::null_mut(),
            lineno: 1244,
            cursorpos: 1,
            context: std::ptr::null_mut(),
        };

        let err = check_error(&mut raw).unwrap_err();

        // Reclaim and drop the native-side strings before inspecting the
        // translated error: the copies must not dangle.
        unsafe {
            drop(CString::from_raw(raw.message));
            drop(CString::from_raw(raw.funcname));
        }

        let native = err.as_native().expect("native error expected");
        assert_eq!(native.message, "syntax error at or near \"SELEC\"");
        assert_eq!(native.funcname, "scanner_yyerror");
        assert_eq!(native.filename, "");
        assert_eq!(native.lineno, 1244);
        assert_eq!(native.cursorpos, 1);
    }

    #[test]
    fn test_check_error_null_is_ok() {
        assert!(check_error(std::ptr::null_mut()).is_ok());
    }

    #[test]
    fn test_encoded_truncates_at_embedded_nul() {
        let c = encoded("SELECT 1\0SELECT 2");
        assert_eq!(c.as_bytes(), b"SELECT 1");
    }

    #[test]
    fn test_encoded_plain_input_roundtrips() {
        let c = encoded("SELECT 1");
        assert_eq!(c.as_bytes(), b"SELECT 1");
    }

    #[test]
    fn test_binary_handles_empty_payload() {
        let pbuf = PgQueryProtobuf {
            len: 0,
            data: std::ptr::null_mut(),
        };
        assert!(unsafe { binary(&pbuf) }.is_empty());
    }
}
