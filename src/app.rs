use crate::catalog::{Catalog, CatalogError};
use crate::config::AppConfig;
use crate::layout::Viewport;
use crate::model::VisualId;
use crate::prefs;
use crate::search::SearchResult;
use crate::session::MapSession;
use crate::theme::Theme;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Delay before the first recenter after a render.
pub const RENDER_RECENTER_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("open_command is empty")]
    NoOpener,
}

#[derive(Debug, Clone)]
pub enum AppMode {
    Normal,
    Search {
        query: String,
        results: Vec<SearchResult>,
        selected: usize,
    },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Map,
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    pub categories: Vec<String>,
    pub active: Option<usize>,
    pub cursor: usize,
    pub collapsed: bool,
}

impl Sidebar {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn activate(&mut self, name: &str) {
        self.active = self.categories.iter().position(|c| c == name);
        if let Some(index) = self.active {
            self.cursor = index;
        }
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.categories.get(i))
            .map(|s| s.as_str())
    }

    pub fn cursor_name(&self) -> Option<&str> {
        self.categories.get(self.cursor).map(|s| s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub config: AppConfig,
    pub catalog: Option<Catalog>,
    /// Inline text shown in place of the map (load errors, unknown category).
    pub notice: Option<String>,
    pub session: MapSession,
    pub selected: Option<VisualId>,
    pub sidebar: Sidebar,
    pub theme: Theme,
    pub viewport: Viewport,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub message: Option<StatusMessage>,
    pub pending_recenter: Option<Instant>,
    pub clipboard: Option<String>,
    pub last_opened: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let session = MapSession::new(config.layout.clone());
        let theme = prefs::saved_theme(config.state_file.as_deref(), config.theme);

        Self {
            running: true,
            mode: AppMode::Normal,
            focus: Focus::Map,
            config,
            catalog: None,
            notice: None,
            session,
            selected: None,
            sidebar: Sidebar::default(),
            theme,
            viewport: Viewport::new(80.0, 20.0),
            terminal_width: 80,
            terminal_height: 24,
            message: None,
            pending_recenter: None,
            clipboard: None,
            last_opened: None,
        }
    }

    /// Builds the state around a catalog load result. A failed load is kept
    /// as an inline notice instead of aborting.
    pub fn with_catalog(config: AppConfig, catalog: Result<Catalog, CatalogError>) -> Self {
        let mut app = Self::new(config);
        match catalog {
            Ok(catalog) => {
                app.sidebar = Sidebar::new(catalog.category_names());
                app.catalog = Some(catalog);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load catalog");
                app.notice = Some(err.placeholder().to_string());
            }
        }
        app
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.set_message_at(msg, Instant::now());
    }

    pub fn set_message_at(&mut self, msg: impl Into<String>, now: Instant) {
        self.message = Some(StatusMessage {
            text: msg.into(),
            expires_at: now + Duration::from_millis(self.config.message_timeout_ms),
        });
    }

    /// Arms a one-shot recenter. A later call just moves the deadline.
    pub fn schedule_recenter(&mut self, delay: Duration, now: Instant) {
        self.pending_recenter = Some(now + delay);
    }

    pub fn recenter(&mut self) -> bool {
        self.session.recenter_root(&self.viewport)
    }

    /// Runs deferred work that is due. Returns `true` when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.pending_recenter.is_some_and(|due| now >= due) {
            self.pending_recenter = None;
            self.recenter();
            changed = true;
        }

        if self.message.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.message = None;
            changed = true;
        }

        changed
    }
}
