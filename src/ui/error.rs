use emproj::EmprojError;

use super::json::{emit_event, events::ErrorEvent};
use super::terminal::detect_capabilities;

/// Extra guidance for errors a user can fix directly
fn help_for(err: &EmprojError) -> Option<&'static str> {
    match err {
        EmprojError::MissingToolchain => Some(
            "Set EMCC_DIR to the directory containing emcc (e.g. <emsdk>/upstream/emscripten).",
        ),
        EmprojError::NoProjects { .. } => {
            Some("Add a [[project]] table with at least a `name` to the manifest.")
        }
        EmprojError::UnknownProject { .. } => {
            Some("Run `emproj results` without --project to see every declared project.")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {:#}\n", err);
    if let Some(help) = err.downcast_ref::<EmprojError>().and_then(help_for) {
        out.push_str(&format!("  help: {}\n", help));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let emproj_err = err.downcast_ref::<EmprojError>();

    if json {
        let code = emproj_err.map(EmprojError::code).unwrap_or("error");
        let event = ErrorEvent::new(code, format!("{:#}", err))
            .with_help(emproj_err.and_then(help_for));
        let _ = emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("::error title=emproj::{}", err);
    }

    eprint!("{}", format_error(err));
}
