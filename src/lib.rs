//! # Pagetone - light/dark mode and accent color preferences
//!
//! Pagetone manages two independent visual preferences for a page:
//!
//! - the [`ThemeMode`] (light or dark), and
//! - the [`AccentColor`], one of seven named palettes.
//!
//! A [`PreferenceManager`] renders a small set of controls into a
//! [`Document`], applies the current values as root attributes
//! (`data-theme`, `data-color-theme`), writes every explicit change through
//! to a [`PreferenceStore`], and follows the OS color scheme through a
//! [`SchemeSource`] until the user picks a mode.
//!
//! The document, store and system signal are capabilities supplied by the
//! host. In-memory and file-backed implementations are included.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagetone::{MemoryDocument, MemoryStore, OsScheme, PreferenceManager, ThemeMode, UiEvent};
//!
//! let mut manager = PreferenceManager::new(MemoryDocument::new(), MemoryStore::new());
//! manager.initialize(&OsScheme::with_detector(|| ThemeMode::Dark));
//! assert_eq!(manager.current_mode(), ThemeMode::Dark);
//!
//! // A click on the switcher is an explicit choice.
//! let switcher = manager.widgets().unwrap().switcher;
//! manager.handle_event(UiEvent::Click { target: switcher });
//! assert_eq!(manager.current_mode(), ThemeMode::Light);
//!
//! // From now on the system signal is ignored.
//! manager.handle_event(UiEvent::SystemScheme(ThemeMode::Dark));
//! assert_eq!(manager.current_mode(), ThemeMode::Light);
//! ```
//!
//! ## Logging
//!
//! Changes and degraded persistence are reported through `tracing`. The
//! crate never installs a subscriber.

pub mod config;
pub mod document;
pub mod error;
pub mod external;
pub mod manager;
pub mod store;
pub mod theme;

pub use config::{PreferenceConfig, DEFAULT_COLOR_KEY, DEFAULT_THEME_KEY};
pub use document::{ChangeEvent, Document, EventKind, MemoryDocument, NodeId};
pub use error::{ConfigError, ParseError, StoreError};
pub use external::ThemeUtils;
pub use manager::{ControlWidgets, PreferenceManager, UiEvent, COLOR_ATTR, THEME_ATTR};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{AccentColor, FixedScheme, OsScheme, SchemeDetector, SchemeSource, ThemeMode};
