// modal-gate: show one message box and print the button the user chose.
//
//   modal-gate <request.json>
//   modal-gate --text <message> [--caption <caption>]
//
// Set RUST_LOG=debug to trace the gate.

use std::path::Path;

use modal_gate::{config, DialogGate, DialogRequest, Result};

const USAGE: &str = "usage: modal-gate <request.json> | --text <message> [--caption <caption>]";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(request) = parse_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    match request.and_then(|r| DialogGate::global().show_request(&r)) {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => {
            eprintln!("modal-gate: {e}");
            std::process::exit(1);
        }
    }
}

/// `None` means the arguments are malformed.
fn parse_args(args: &[String]) -> Option<Result<DialogRequest>> {
    match args {
        [flag, text] if flag == "--text" => Some(Ok(DialogRequest::new(text.as_str()))),
        [flag, text, cap_flag, caption] if flag == "--text" && cap_flag == "--caption" => {
            Some(Ok(DialogRequest::new(text.as_str()).caption(caption.as_str())))
        }
        [path] if !path.starts_with("--") => Some(config::load_request(Path::new(path))),
        _ => None,
    }
}
