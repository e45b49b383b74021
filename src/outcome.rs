// ── Result translation ────────────────────────────────────────────────────────
//
// Maps the integer returned by `MessageBoxW` onto a stable domain enum.
// Pure safe Rust; the constants mirror the documented `ID*` values.

use serde::{Deserialize, Serialize};

// ── Native result codes ───────────────────────────────────────────────────────

/// Returned by the native call when it fails; never a button.
pub const FAILURE: i32 = 0;

pub const IDOK: i32 = 1;
pub const IDCANCEL: i32 = 2;
pub const IDABORT: i32 = 3;
pub const IDRETRY: i32 = 4;
pub const IDIGNORE: i32 = 5;
pub const IDYES: i32 = 6;
pub const IDNO: i32 = 7;
/// "Try Again" from `ButtonSet::CancelTryContinue`.
pub const IDTRYAGAIN: i32 = 10;
/// "Continue" from `ButtonSet::CancelTryContinue`.
pub const IDCONTINUE: i32 = 11;

// ── DialogOutcome ─────────────────────────────────────────────────────────────

/// The button the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogOutcome {
    /// The native call returned a code with no known meaning.
    #[default]
    None,
    Ok,
    Cancel,
    Abort,
    Retry,
    Ignore,
    Yes,
    No,
}

impl DialogOutcome {
    /// Short display string, as printed by the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ok => "ok",
            Self::Cancel => "cancel",
            Self::Abort => "abort",
            Self::Retry => "retry",
            Self::Ignore => "ignore",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl std::fmt::Display for DialogOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate a native result code.
///
/// | Code | Outcome |
/// |---|---|
/// | 1 | `Ok` |
/// | 2 | `Cancel` |
/// | 3 | `Abort` |
/// | 4, 10 | `Retry` |
/// | 5, 11 | `Ignore` |
/// | 6 | `Yes` |
/// | 7 | `No` |
/// | anything else | `None` |
///
/// The failure sentinel (0) also lands on `None` here; callers that need to
/// tell the two apart check for [`FAILURE`] first, as `DialogGate` does.
pub fn translate(code: i32) -> DialogOutcome {
    match code {
        IDOK => DialogOutcome::Ok,
        IDCANCEL => DialogOutcome::Cancel,
        IDABORT => DialogOutcome::Abort,
        IDRETRY | IDTRYAGAIN => DialogOutcome::Retry,
        IDIGNORE | IDCONTINUE => DialogOutcome::Ignore,
        IDYES => DialogOutcome::Yes,
        IDNO => DialogOutcome::No,
        _ => DialogOutcome::None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
