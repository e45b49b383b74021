// ── Request files ─────────────────────────────────────────────────────────────
//
// A message box can be described in a small JSON file:
//
//   {
//     "text": "Proceed?",
//     "caption": "Confirm",
//     "buttons": "yes_no_cancel",
//     "icon": "question",
//     "default_button": "second"
//   }
//
// Only `text` is required; everything else falls back to the defaults of
// `DialogRequest::new`.  No `unsafe` — pure safe Rust + serde_json.

use std::{fs, path::Path};

use log::debug;

use crate::{error::Result, request::DialogRequest};

/// Parse a request from JSON text.
pub fn parse_request(json: &str) -> Result<DialogRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a request file.
pub fn load_request(path: &Path) -> Result<DialogRequest> {
    let data = fs::read(path)?;
    let request: DialogRequest = serde_json::from_slice(&data)?;
    debug!("loaded request from {}", path.display());
    Ok(request)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
