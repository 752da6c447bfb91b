//! Applies UI commands to the roster session, one at a time, on the UI thread.

use roster_core::RosterSession;

use crate::controller::events::{Notice, UiCommand};

/// Runs `cmd` to completion. A rejected command replaces `notice`; the
/// session is left as it was.
pub fn dispatch(session: &mut RosterSession, cmd: UiCommand, notice: &mut Option<Notice>) {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "dispatching ui command");

    let outcome = match cmd {
        UiCommand::AddStudent => session.submit_add().map(|index| {
            tracing::info!(index = index.0, "student added");
        }),
        UiCommand::EditSelected => session.submit_edit().map(|index| {
            tracing::info!(index = index.0, "student updated");
        }),
        UiCommand::DeleteSelected => session.delete_selected().map(|removed| {
            tracing::info!(name = %removed.name, "student deleted");
        }),
        UiCommand::ToggleTheme => {
            session.toggle_theme();
            Ok(())
        }
        UiCommand::SelectRow(display_row) => {
            if session.select_row(display_row).is_none() {
                session.clear_selection();
            }
            Ok(())
        }
        UiCommand::ClearSelection => {
            session.clear_selection();
            Ok(())
        }
        UiCommand::Search(query) => {
            session.set_query(query);
            Ok(())
        }
        UiCommand::SortBy(column) => {
            session.toggle_sort(column);
            Ok(())
        }
        UiCommand::DismissNotice => {
            *notice = None;
            Ok(())
        }
    };

    if let Err(err) = outcome {
        tracing::warn!(command = cmd_name, code = ?err.code(), "{err}");
        *notice = Some(Notice::from(err));
    }
}
