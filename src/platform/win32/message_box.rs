// ── MessageBoxW backend ───────────────────────────────────────────────────────
//
// The real native primitive behind `DialogGate::global()`.  Blocks the calling
// thread (pumping its own modal message loop) until the user dismisses the box.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{GetLastError, HWND},
        UI::WindowsAndMessaging::{MessageBoxW, MESSAGEBOX_STYLE},
    },
};

use crate::{
    error::{GateError, Result},
    gate::NativeDialog,
    request::{OwnerHandle, Style},
};

/// Calls `user32!MessageBoxW`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32MessageBox;

impl NativeDialog for Win32MessageBox {
    fn message_box(
        &self,
        owner: Option<OwnerHandle>,
        text: &str,
        caption: &str,
        style: Style,
    ) -> Result<i32> {
        // Interior NULs end the string early, as they would for any C caller.
        let text_wide = to_wide(text);
        let caption_wide = to_wide(caption);

        let hwnd = owner.map_or(HWND::default(), |h| HWND(h.as_raw() as *mut _));

        // SAFETY: text_wide and caption_wide are valid null-terminated UTF-16
        // strings that remain allocated for the duration of the call.  An
        // invalid or foreign hwnd is rejected by the OS with a zero return,
        // not undefined behaviour.
        let result = unsafe {
            MessageBoxW(
                hwnd,
                PCWSTR(text_wide.as_ptr()),
                PCWSTR(caption_wide.as_ptr()),
                MESSAGEBOX_STYLE(style.bits()),
            )
        };

        if result.0 == 0 {
            // SAFETY: GetLastError only reads thread-local state and is called
            // immediately after the failing API on the same thread.
            let code = unsafe { GetLastError() }.0;
            return Err(GateError::Invocation {
                function: "MessageBoxW",
                code,
            });
        }
        Ok(result.0)
    }
}

/// Encode `s` as null-terminated UTF-16.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
