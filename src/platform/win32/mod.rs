// ── Win32 platform implementation ─────────────────────────────────────────────
//
// The only module in the crate where `unsafe` code is permitted.  Every
// `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.

#![allow(unsafe_code)]

pub mod message_box;
