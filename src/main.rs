//! emproj CLI - builds C source projects to WebAssembly with Emscripten
//!
//! Usage: emproj [--json] [-v] [--manifest PATH] [--project NAME]... <COMMAND>
//!
//! Commands:
//!   build        Compile every .c source with emcc
//!   needs-build  Report whether a build is needed
//!   clean        Remove build outputs (no-op)
//!   results      List declared .wasm results
//!   sources      List compilation units

mod commands;
mod ui;

use clap::Parser;

use emproj::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::dispatch(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
