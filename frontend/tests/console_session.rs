//! End-to-end console sessions against the in-memory directory.

use std::sync::Arc;

use frontend::domain::{User, UserDraft, UserId, UserManager};
use frontend::inbound::console::run_console;
use frontend::outbound::memory::InMemoryUserDirectory;
use rstest::{fixture, rstest};

fn user(id: &str, name: &str, email: &str) -> User {
    User::new(UserId::new(id).expect("valid id"), name, email)
}

#[fixture]
fn directory() -> Arc<InMemoryUserDirectory> {
    Arc::new(InMemoryUserDirectory::with_users(vec![
        user("u-ana", "Ana", "ana@x.com"),
        user("u-luis", "Luis", "luis@x.com"),
    ]))
}

async fn run_script(
    directory: &Arc<InMemoryUserDirectory>,
    script: &str,
) -> (String, UserManager<InMemoryUserDirectory>) {
    let mut manager = UserManager::new(Arc::clone(directory));
    let mut output = Vec::new();
    run_console(&mut manager, script.as_bytes(), &mut output)
        .await
        .expect("session should run to completion");
    (
        String::from_utf8(output).expect("console output is UTF-8"),
        manager,
    )
}

#[rstest]
#[tokio::test]
async fn start_up_renders_the_fetched_roster(directory: Arc<InMemoryUserDirectory>) {
    let (output, manager) = run_script(&directory, "").await;

    assert!(manager.is_mounted());
    assert!(output.starts_with("== User management ==\n"));
    assert!(output.contains("  1. Ana - ana@x.com [u-ana]\n  2. Luis - luis@x.com [u-luis]\n"));
}

#[rstest]
#[tokio::test]
async fn adding_a_user_appends_it_and_clears_the_form(directory: Arc<InMemoryUserDirectory>) {
    let (_, manager) = run_script(&directory, "name Marta Gómez\nemail marta@x.com\nadd\n").await;

    let state = manager.state();
    assert_eq!(state.roster().len(), 3);
    assert_eq!(state.roster()[2].name(), "Marta Gómez");
    assert_eq!(state.draft(), &UserDraft::default());
    assert_eq!(directory.snapshot().expect("snapshot").len(), 3);
}

#[rstest]
#[tokio::test]
async fn rejected_submissions_show_field_errors(directory: Arc<InMemoryUserDirectory>) {
    let (output, manager) = run_script(&directory, "email nope\nadd\n").await;

    assert!(output.contains("  * name is required\n  * email is invalid\n"));
    assert_eq!(manager.state().draft().email(), "nope");
    assert_eq!(manager.state().roster().len(), 2);
}

#[rstest]
#[tokio::test]
async fn edits_by_position_are_saved(directory: Arc<InMemoryUserDirectory>) {
    let (output, manager) =
        run_script(&directory, "edit 2\nset-name Luis Alberto\nsave\n").await;

    assert!(output.contains("Editing [u-luis]\n  name:  Luis Alberto\n"));
    assert!(!manager.state().edit().is_active());
    assert_eq!(manager.state().roster()[1].name(), "Luis Alberto");
}

#[rstest]
#[tokio::test]
async fn deletes_by_id_refresh_the_roster(directory: Arc<InMemoryUserDirectory>) {
    let (_, manager) = run_script(&directory, "delete u-ana\n").await;

    assert_eq!(manager.state().roster(), [user("u-luis", "Luis", "luis@x.com")]);
}

#[rstest]
#[tokio::test]
async fn unknown_targets_and_bad_lines_stay_local(directory: Arc<InMemoryUserDirectory>) {
    let (output, manager) = run_script(&directory, "edit 9\ndelete ghost\nfrobnicate\nsave\n").await;

    assert!(output.contains("no user at position 9\n"));
    assert!(output.contains("no user with id ghost\n"));
    assert!(output.contains("no edit in progress\n"));
    assert_eq!(manager.state().errors().general(), None);
    assert_eq!(directory.snapshot().expect("snapshot").len(), 2);
}

#[rstest]
#[tokio::test]
async fn quit_stops_reading_input(directory: Arc<InMemoryUserDirectory>) {
    let (_, manager) = run_script(&directory, "\n\nquit\ndelete 1\n").await;

    assert_eq!(manager.state().roster().len(), 2);
    assert_eq!(directory.snapshot().expect("snapshot").len(), 2);
}

#[rstest]
#[tokio::test]
async fn general_errors_persist_until_dismissed(directory: Arc<InMemoryUserDirectory>) {
    let (output, manager) =
        run_script(&directory, "edit 1\nset-email ana.at.x.com\nsave\nlist\n").await;

    assert!(
        output.contains("! Hubo un problema al realizar la solicitud.\n"),
        "rejected updates fall back to the generic message"
    );
    assert_eq!(
        manager.state().errors().general(),
        Some("Hubo un problema al realizar la solicitud.")
    );
    assert!(manager.state().edit().is_active(), "edit stays open for a retry");

    let (output, manager) =
        run_script(&directory, "edit 1\nset-email ana.at.x.com\nsave\ndismiss\n").await;
    let last_screen = output
        .rsplit("== User management ==")
        .next()
        .unwrap_or_default();
    assert!(!last_screen.contains("\n! "));
    assert_eq!(manager.state().errors().general(), None);
}
