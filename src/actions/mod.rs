mod clipboard;
mod file;
mod movement;
mod search;
mod sidebar;
mod view;

use crate::app::{AppState, Focus};
use anyhow::Result;

// Re-export all public functions from submodules
pub use clipboard::*;
pub use file::*;
pub use movement::*;
pub use search::*;
pub use sidebar::*;
pub use view::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application control
    Quit,
    FocusNext,

    // Movement
    GoUp,
    GoDown,
    GoLeft,
    GoRight,
    GoToRoot,

    // Activation
    Activate,
    ClickAt { column: u16, row: u16 },

    // View control
    Scroll { dx: f64, dy: f64 },
    Recenter,
    ToggleSidebar,
    ToggleTheme,
    Resize { width: u16, height: u16 },

    // Output
    ExportSvg,
    YankUrl,

    // Search
    Search,
    TypeSearchChar(char),
    BackspaceSearch,
    ConfirmSearch,
    CancelSearch,
    NextSearchResult,
    PreviousSearchResult,

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => app.running = false,
        Action::FocusNext => sidebar::focus_next(app),

        // Movement: the sidebar takes vertical moves while it has focus
        Action::GoUp if app.focus == Focus::Sidebar => sidebar::cursor_up(app),
        Action::GoDown if app.focus == Focus::Sidebar => sidebar::cursor_down(app),
        Action::GoUp => movement::go_up(app),
        Action::GoDown => movement::go_down(app),
        Action::GoLeft => movement::go_left(app),
        Action::GoRight => movement::go_right(app),
        Action::GoToRoot => movement::go_to_root(app),

        Action::Activate if app.focus == Focus::Sidebar => sidebar::open_cursor(app),
        Action::Activate => view::activate_selected(app)?,
        Action::ClickAt { column, row } => view::click_at(app, column, row)?,

        // View control
        Action::Scroll { dx, dy } => view::scroll(app, dx, dy),
        Action::Recenter => view::recenter(app),
        Action::ToggleSidebar => sidebar::toggle_sidebar(app),
        Action::ToggleTheme => view::toggle_theme(app),
        Action::Resize { width, height } => view::resize(app, width, height),

        // Output
        Action::ExportSvg => file::export_svg(app)?,
        Action::YankUrl => clipboard::yank_url(app)?,

        // Search
        Action::Search => search::start_search(app),
        Action::TypeSearchChar(c) => search::type_search_char(app, c),
        Action::BackspaceSearch => search::backspace_search(app),
        Action::ConfirmSearch => search::confirm_search(app)?,
        Action::CancelSearch => search::cancel_search(app),
        Action::NextSearchResult => search::next_search_result(app),
        Action::PreviousSearchResult => search::previous_search_result(app),

        // Help
        Action::ShowHelp => view::show_help(app),
        Action::CloseHelp => view::close_help(app),
    }
    Ok(())
}
