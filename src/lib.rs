pub mod app;
pub mod catalog;
pub mod config;
pub mod edges;
pub mod export;
pub mod icons;
pub mod layout;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod prefs;
pub mod search;
pub mod session;
pub mod theme;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppError, AppMode, AppState, Focus};
pub use catalog::{Catalog, CatalogError, NodeKind, TreeNode};
pub use config::AppConfig;
pub use model::{VisualId, VisualNode};
pub use session::{MapSession, RenderError};
