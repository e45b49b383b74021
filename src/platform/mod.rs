// ── Platform abstraction layer ────────────────────────────────────────────────
//
// Picks the native message-box backend for the current target.  No `unsafe`
// lives here; all Win32 FFI is confined to the `win32` sub-module and never
// leaks outward.

#[cfg(windows)]
pub mod win32;

#[cfg(not(windows))]
mod unsupported;

/// The backend behind `DialogGate::global()` on this target.
#[cfg(windows)]
pub type SystemDialog = win32::message_box::Win32MessageBox;

/// The backend behind `DialogGate::global()` on this target.
#[cfg(not(windows))]
pub type SystemDialog = unsupported::Unsupported;
