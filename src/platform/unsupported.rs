// ── Fallback backend ──────────────────────────────────────────────────────────
//
// Targets without a native message box.  Every call fails with
// `GateError::Unsupported`; the gate still serializes and releases as usual.

use crate::{
    error::{GateError, Result},
    gate::NativeDialog,
    request::{OwnerHandle, Style},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl NativeDialog for Unsupported {
    fn message_box(
        &self,
        _owner: Option<OwnerHandle>,
        _text: &str,
        _caption: &str,
        _style: Style,
    ) -> Result<i32> {
        Err(GateError::Unsupported)
    }
}
