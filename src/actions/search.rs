use crate::app::{AppMode, AppState};
use crate::navigation;
use crate::search::search;
use anyhow::Result;

pub fn start_search(app: &mut AppState) {
    app.mode = AppMode::Search {
        query: String::new(),
        results: Vec::new(),
        selected: 0,
    };
}

// Results follow the query on every keystroke.
fn refresh_results(app: &mut AppState) {
    let Some(ref catalog) = app.catalog else {
        return;
    };
    if let AppMode::Search {
        query,
        results,
        selected,
    } = &mut app.mode
    {
        *results = search(catalog, query);
        *selected = 0;
    }
}

pub fn type_search_char(app: &mut AppState, c: char) {
    if let AppMode::Search { query, .. } = &mut app.mode {
        query.push(c);
    }
    refresh_results(app);
}

pub fn backspace_search(app: &mut AppState) {
    if let AppMode::Search { query, .. } = &mut app.mode {
        query.pop();
    }
    refresh_results(app);
}

pub fn confirm_search(app: &mut AppState) -> Result<()> {
    let chosen = match &app.mode {
        AppMode::Search {
            results, selected, ..
        } => results.get(*selected).cloned(),
        _ => None,
    };

    match chosen {
        Some(result) => navigation::activate_result(app, &result)?,
        None => app.mode = AppMode::Normal,
    }
    Ok(())
}

/// Activates the result at `index`, as a click in the dropdown does.
pub fn pick_search_result(app: &mut AppState, index: usize) -> Result<()> {
    if let AppMode::Search {
        results, selected, ..
    } = &mut app.mode
    {
        if index >= results.len() {
            return Ok(());
        }
        *selected = index;
    }
    confirm_search(app)
}

pub fn cancel_search(app: &mut AppState) {
    app.mode = AppMode::Normal;
}

pub fn next_search_result(app: &mut AppState) {
    if let AppMode::Search {
        results, selected, ..
    } = &mut app.mode
    {
        if !results.is_empty() {
            *selected = (*selected + 1) % results.len();
        }
    }
}

pub fn previous_search_result(app: &mut AppState) {
    if let AppMode::Search {
        results, selected, ..
    } = &mut app.mode
    {
        if !results.is_empty() {
            *selected = if *selected == 0 {
                results.len() - 1
            } else {
                *selected - 1
            };
        }
    }
}
