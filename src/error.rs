// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in modal-gate return `error::Result<T>`.  An
// unrecognised button code is *not* an error: it resolves to
// `DialogOutcome::None` (see `outcome.rs`).

use thiserror::Error;

/// Every error that modal-gate can produce.
#[derive(Debug, Error)]
pub enum GateError {
    /// The native message-box call failed instead of returning a button.
    ///
    /// Raised when the primitive returns its failure sentinel (`0`) or the
    /// platform reports an error (for example, an invalid owner handle).
    #[error("{function} failed (error {code:#010x})")]
    Invocation {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw platform error code (`GetLastError()` value), or 0 when
        /// the platform did not report one.
        code: u32,
    },

    /// No native message-box backend exists for the current target.
    #[error("native message boxes are not supported on this platform")]
    Unsupported,

    /// A request file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A request file did not contain a valid request.
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
}

// Convert a windows-crate error (HRESULT) directly into a GateError so that
// `?` can be used on `windows::core::Result<T>` in the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for GateError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        Self::Invocation {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GateError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_includes_function_and_code() {
        let e = GateError::Invocation {
            function: "MessageBoxW",
            code: 1400,
        };
        assert_eq!(e.to_string(), "MessageBoxW failed (error 0x00000578)");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let e = GateError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
    }
}
