//! Text rendering of the view snapshot.

use std::fmt;

use crate::domain::{EditSession, ViewState};

const TITLE: &str = "User management";

/// Display adapter printing a [`ViewState`] as the console screen.
///
/// Rendering reads the snapshot only; it never reaches the service.
///
/// # Examples
/// ```
/// use frontend::domain::ViewState;
/// use frontend::inbound::console::RosterView;
///
/// let screen = RosterView(&ViewState::default()).to_string();
/// assert!(screen.contains("(no users)"));
/// ```
pub struct RosterView<'a>(pub &'a ViewState);

impl fmt::Display for RosterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "== {TITLE} ==")?;
        if let Some(message) = state.errors().general() {
            writeln!(f, "! {message}")?;
        }

        writeln!(f, "New user")?;
        writeln!(f, "  name:  {}", state.draft().name())?;
        writeln!(f, "  email: {}", state.draft().email())?;
        for issue in state.errors().field() {
            writeln!(f, "  * {issue}")?;
        }

        writeln!(f, "Users")?;
        if state.roster().is_empty() {
            writeln!(f, "  (no users)")?;
        }
        for (index, user) in state.roster().iter().enumerate() {
            writeln!(
                f,
                "  {}. {} - {} [{}]",
                index + 1,
                user.name(),
                user.email(),
                user.id()
            )?;
        }

        if let EditSession::Active(user) = state.edit() {
            writeln!(f, "Editing [{}]", user.id())?;
            writeln!(f, "  name:  {}", user.name())?;
            writeln!(f, "  email: {}", user.email())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the console screen layout.

    use super::*;
    use crate::domain::ports::UserDirectoryError;
    use crate::domain::{Action, User, UserId, reduce};

    fn user(id: &str, name: &str, email: &str) -> User {
        User::new(UserId::new(id).expect("valid id"), name, email)
    }

    fn render(state: &ViewState) -> String {
        RosterView(state).to_string()
    }

    #[test]
    fn empty_state_renders_placeholders() {
        let screen = render(&ViewState::default());

        assert_eq!(
            screen,
            "== User management ==\nNew user\n  name:  \n  email: \nUsers\n  (no users)\n"
        );
    }

    #[test]
    fn roster_is_numbered_from_one_in_service_order() {
        let state = reduce(
            ViewState::default(),
            Action::RosterFetched(vec![
                user("u-9", "Zoe", "zoe@x.com"),
                user("u-1", "Ana", "ana@x.com"),
            ]),
        );

        let screen = render(&state);

        assert!(screen.contains("  1. Zoe - zoe@x.com [u-9]\n  2. Ana - ana@x.com [u-1]\n"));
        assert!(!screen.contains("(no users)"));
    }

    #[test]
    fn errors_render_in_their_own_channels() {
        let state = reduce(
            ViewState::default(),
            Action::CreateFailed(UserDirectoryError::rejected(vec![
                "correo inválido".to_owned(),
            ])),
        );
        let state = reduce(
            state,
            Action::RemoveFailed(UserDirectoryError::failed(404_u16, "Usuario no encontrado")),
        );

        let screen = render(&state);

        assert!(screen.starts_with("== User management ==\n! Usuario no encontrado\n"));
        assert!(screen.contains("  email: \n  * correo inválido\nUsers\n"));
    }

    #[test]
    fn edit_form_appears_only_while_editing() {
        let ana = user("u-1", "Ana", "ana@x.com");
        let state = reduce(ViewState::default(), Action::RosterFetched(vec![ana.clone()]));
        assert!(!render(&state).contains("Editing"));

        let editing = reduce(state, Action::EditBegan(ana));
        let editing = reduce(editing, Action::EditNameChanged("Ana María".to_owned()));
        let screen = render(&editing);

        assert!(screen.ends_with("Editing [u-1]\n  name:  Ana María\n  email: ana@x.com\n"));
        assert!(
            screen.contains("  1. Ana - ana@x.com [u-1]"),
            "roster keeps the stored value while editing"
        );
    }
}
