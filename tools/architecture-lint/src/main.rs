//! Runs the boundary lint over the workspace's `frontend` crate.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use architecture_lint::{LINTED_CRATE, lint_frontend_sources};

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    let Some(root) = workspace_root() else {
        let _ = writeln!(
            stderr,
            "no workspace Cargo.toml found above the current directory or this crate"
        );
        return ExitCode::FAILURE;
    };

    match lint_frontend_sources(&root.join(LINTED_CRATE)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(stderr, "{err}");
            ExitCode::FAILURE
        }
    }
}

/// First directory, searching upwards from `$CARGO_WORKSPACE_DIR`, the
/// current directory, then this crate's manifest directory, whose
/// `Cargo.toml` declares a `[workspace]`.
fn workspace_root() -> Option<PathBuf> {
    let candidates = [
        std::env::var_os("CARGO_WORKSPACE_DIR").map(PathBuf::from),
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|start| start.ancestors().find(|dir| declares_workspace(dir)).map(Path::to_path_buf))
}

fn declares_workspace(dir: &Path) -> bool {
    fs::read_to_string(dir.join("Cargo.toml"))
        .is_ok_and(|contents| contents.lines().any(|line| line.trim() == "[workspace]"))
}
