// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! A serialized gateway to the operating system's blocking message box.
//!
//! ```no_run
//! use modal_gate::{ButtonSet, DefaultButton, DialogGate, DialogOutcome, Icon};
//!
//! let outcome = DialogGate::global().show_with(
//!     None,
//!     "Proceed?",
//!     "Confirm",
//!     ButtonSet::YesNoCancel,
//!     Icon::Question,
//!     DefaultButton::Second,
//! )?;
//! if outcome == DialogOutcome::Yes {
//!     // ...
//! }
//! # Ok::<(), modal_gate::GateError>(())
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod outcome;
pub mod platform;
pub mod request;

pub use error::{GateError, Result};
pub use gate::{DialogGate, NativeDialog};
pub use outcome::{translate, DialogOutcome};
pub use platform::SystemDialog;
pub use request::{
    compose, ButtonSet, DefaultButton, DialogRequest, Icon, Modality, OwnerHandle, Style,
};
