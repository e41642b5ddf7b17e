//! Unit tests for the architecture lint.

use std::path::PathBuf;

use rstest::{fixture, rstest};

use super::*;

#[derive(Clone, Copy)]
struct LintSingle;

impl LintSingle {
    fn lint(self, file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
        lint_sources(&[LintSource {
            file: PathBuf::from(file),
            contents: contents.to_owned(),
        }])
    }
}

#[fixture]
fn lint_single() -> LintSingle {
    LintSingle
}

#[rstest]
#[case::console_uses_domain(
    "inbound/console/session.rs",
    "use crate::domain::UserManager; fn run() { let _ = UserManager::<()>::new; }",
    true
)]
#[case::console_uses_clap_and_tokio_io(
    "inbound/console/command.rs",
    "use clap::Parser; use tokio::io::AsyncBufReadExt; fn parse() {}",
    true
)]
#[case::console_imports_http_adapter(
    "inbound/console/session.rs",
    "use crate::outbound::usuarios::UsuariosHttpDirectory; fn run() {}",
    false
)]
#[case::console_imports_adapter_via_crate_name(
    "inbound/console/session.rs",
    "use frontend::outbound::memory::InMemoryUserDirectory; fn run() {}",
    false
)]
#[case::console_imports_adapter_via_bare_root(
    "inbound/console/session.rs",
    "use outbound::memory::InMemoryUserDirectory; fn run() {}",
    false
)]
#[case::console_calls_reqwest(
    "inbound/console/session.rs",
    "fn run() { let _ = reqwest::Client::new(); }",
    false
)]
#[case::domain_uses_port_machinery(
    "domain/ports/user_directory.rs",
    "use async_trait::async_trait; use std::sync::Arc; #[tokio::test] async fn t() {}",
    true
)]
#[case::domain_imports_console(
    "domain/user_manager.rs",
    "use crate::inbound::console::RosterView; fn thing() {}",
    false
)]
#[case::domain_reads_settings(
    "domain/user_manager.rs",
    "use super::super::settings::RosterSettings; fn thing() {}",
    false
)]
#[case::domain_prints(
    "domain/reducer.rs",
    "use std::io::Write; fn thing() {}",
    false
)]
#[case::domain_uses_async_io(
    "domain/user_manager.rs",
    "async fn thing() { let _ = tokio::io::stdout(); }",
    false
)]
#[case::domain_decodes_json(
    "domain/user.rs",
    "fn thing() { let _ = serde_json::from_str::<u8>(\"1\"); }",
    false
)]
#[case::adapter_uses_wire_crates(
    "outbound/usuarios/http_directory.rs",
    "use reqwest::Client; use serde_json::Value; use crate::domain::User; fn thing() {}",
    true
)]
#[case::adapter_imports_console(
    "outbound/memory.rs",
    "use crate::inbound::console::parse_line; fn thing() {}",
    false
)]
#[case::adapter_parses_commands(
    "outbound/memory.rs",
    "use clap::Parser; fn thing() {}",
    false
)]
fn detects_boundary_violations(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
fn files_outside_the_layers_are_rejected(lint_single: LintSingle) {
    let result = lint_single.lint("settings.rs", "fn thing() {}");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}

#[rstest]
fn every_violation_in_a_file_is_reported_once(lint_single: LintSingle) {
    let result = lint_single.lint(
        "domain/user.rs",
        "use std::io::Write; use std::io::Read; use reqwest::Client; fn thing() {}",
    );
    let Err(ArchitectureLintError::Violations(violations)) = result else {
        panic!("expected violations, got {result:?}");
    };
    let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "domain module must not depend on external crate `reqwest`",
            "domain module must not use `std::io`",
        ]
    );
}
