//! The preference manager.
//!
//! [`PreferenceManager`] owns the mode and accent color, reflects them on
//! the document root as `data-theme` / `data-color-theme`, and writes every
//! explicit change through to the store before returning.
//!
//! The system color-scheme signal only drives the mode while the user has
//! not made an explicit choice. A choice is explicit once a valid mode is
//! persisted or the user set one during this session.

mod events;
mod widgets;

pub use events::UiEvent;
pub use widgets::{
    switcher_icon, ControlWidgets, ACTIVE_CLASS, COLOR_DATA_ATTR, COLOR_TOGGLE_CLASS,
    CONTROLS_CLASS, SELECTOR_CLASS, SHOW_CLASS, SWATCHES_CLASS, SWATCH_CLASS, SWITCHER_CLASS,
    TRANSITION_CLASS,
};

use tracing::{debug, trace, warn};

use crate::config::PreferenceConfig;
use crate::document::{ChangeEvent, Document, EventKind, NodeId};
use crate::error::ParseError;
use crate::external::ThemeUtils;
use crate::store::PreferenceStore;
use crate::theme::{AccentColor, SchemeSource, ThemeMode};

/// Root attribute holding the current [`ThemeMode`].
pub const THEME_ATTR: &str = "data-theme";
/// Root attribute holding the current [`AccentColor`].
pub const COLOR_ATTR: &str = "data-color-theme";

/// Owns the mode and accent color for one document.
///
/// # Example
///
/// ```rust
/// use pagetone::{
///     AccentColor, FixedScheme, MemoryDocument, MemoryStore, PreferenceManager, ThemeMode,
/// };
///
/// let mut manager = PreferenceManager::new(MemoryDocument::new(), MemoryStore::new());
/// manager.initialize(&FixedScheme(ThemeMode::Light));
///
/// manager.toggle_mode();
/// manager.set_accent_color(AccentColor::Teal);
///
/// assert_eq!(manager.current_mode(), ThemeMode::Dark);
/// assert_eq!(manager.current_color(), AccentColor::Teal);
/// ```
#[derive(Debug)]
pub struct PreferenceManager<D, S> {
    document: D,
    store: S,
    config: PreferenceConfig,
    widgets: Option<ControlWidgets>,
    explicit_mode: bool,
}

impl<D: Document, S: PreferenceStore> PreferenceManager<D, S> {
    pub fn new(document: D, store: S) -> Self {
        Self::with_config(document, store, PreferenceConfig::default())
    }

    pub fn with_config(document: D, store: S, config: PreferenceConfig) -> Self {
        Self {
            document,
            store,
            config,
            widgets: None,
            explicit_mode: false,
        }
    }

    /// Builds the controls, applies saved (or default) preferences, binds
    /// click listeners and applies the system preference if no explicit
    /// mode exists.
    ///
    /// Only the first call has an effect.
    pub fn initialize(&mut self, system: &dyn SchemeSource) {
        if self.widgets.is_some() {
            debug!("Preference manager already initialized");
            return;
        }

        let widgets = ControlWidgets::build(&mut self.document);
        for node in widgets.click_targets() {
            self.document.add_listener(node, EventKind::Click);
        }
        // Document-wide listener for outside-click dismissal.
        let root = self.document.root();
        self.document.add_listener(root, EventKind::Click);
        self.widgets = Some(widgets);

        self.load_saved_preferences();
        self.handle_system_scheme(system.current());
    }

    pub fn is_initialized(&self) -> bool {
        self.widgets.is_some()
    }

    /// Adds the transition class to the root and body.
    ///
    /// Hosts call this once the initial preferences have painted so the
    /// first render does not animate.
    pub fn enable_transitions(&mut self) {
        let root = self.document.root();
        let body = self.document.body();
        self.document.add_class(root, TRANSITION_CLASS);
        self.document.add_class(body, TRANSITION_CLASS);
    }

    /// Routes a click or system-scheme change. Ignored before [`initialize`](Self::initialize).
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Click { target } => self.handle_click(target),
            UiEvent::SystemScheme(mode) => {
                if self.widgets.is_some() {
                    self.handle_system_scheme(mode);
                }
            }
        }
    }

    fn handle_click(&mut self, target: NodeId) {
        let Some(widgets) = self.widgets.as_ref() else {
            return;
        };
        let switcher = widgets.switcher;
        let color_toggle = widgets.color_toggle;
        let selector = widgets.selector;
        let swatch = widgets.swatch_containing(&self.document, target);

        if self.document.contains(switcher, target) {
            self.toggle_mode();
        } else if self.document.contains(color_toggle, target) {
            self.toggle_color_picker();
        } else if let Some(swatch) = swatch {
            let value = self.document.attribute(swatch, COLOR_DATA_ATTR);
            match value.as_deref().map(str::parse::<AccentColor>) {
                Some(Ok(color)) => self.set_accent_color(color),
                Some(Err(err)) => warn!("Ignoring swatch click: {}", err),
                None => warn!("Ignoring swatch click: {:?} has no color", swatch),
            }
        }

        // Bubbled document-level handler.
        if !self.document.contains(selector, target) && !self.document.contains(color_toggle, target)
        {
            self.document.remove_class(selector, SHOW_CLASS);
        }
    }

    fn handle_system_scheme(&mut self, mode: ThemeMode) {
        if self.has_explicit_mode() {
            trace!("Ignoring system scheme {}: explicit mode set", mode);
            return;
        }
        debug!("Following system scheme: {}", mode);
        self.apply_mode(mode);
        self.document.dispatch(&ChangeEvent::ThemeChange { theme: mode });
    }

    /// Whether a user choice should win over the system signal.
    pub fn has_explicit_mode(&self) -> bool {
        self.explicit_mode || self.saved_mode().is_some()
    }

    fn load_saved_preferences(&mut self) {
        let mode = self.saved_mode().unwrap_or(self.config.default_mode);
        let color = self.saved_color().unwrap_or(self.config.default_color);
        debug!("Loaded preferences: mode={}, color={}", mode, color);
        self.apply_mode(mode);
        self.apply_color(color);
        // Announced like any other change, but not persisted.
        self.document.dispatch(&ChangeEvent::ThemeChange { theme: mode });
        self.document.dispatch(&ChangeEvent::ColorChange { color });
    }

    fn saved_mode(&self) -> Option<ThemeMode> {
        self.read_saved(&self.config.theme_key)
    }

    fn saved_color(&self) -> Option<AccentColor> {
        self.read_saved(&self.config.color_key)
    }

    fn read_saved<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr<Err = ParseError>,
    {
        match self.store.get(key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!("Ignoring persisted {}: {}", key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read {}: {}", key, err);
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("Failed to persist {}={}: {}", key, value, err);
        }
    }

    /// Flips between light and dark.
    pub fn toggle_mode(&mut self) {
        let next = self.current_mode().toggled();
        self.set_mode(next);
    }

    /// Applies `mode`, persists it as an explicit choice and dispatches
    /// `themeChange`.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        debug!("Setting mode: {}", mode);
        self.apply_mode(mode);
        self.explicit_mode = true;
        let key = self.config.theme_key.clone();
        self.persist(&key, mode.as_str());
        self.document.dispatch(&ChangeEvent::ThemeChange { theme: mode });
    }

    fn apply_mode(&mut self, mode: ThemeMode) {
        let root = self.document.root();
        self.document.set_attribute(root, THEME_ATTR, mode.as_str());
        if let Some(switcher) = self.widgets.as_ref().map(|w| w.switcher) {
            self.document.set_inner_html(switcher, switcher_icon(mode));
        }
    }

    /// Applies `color`, persists it, marks its swatch active and dispatches
    /// `colorChange`.
    pub fn set_accent_color(&mut self, color: AccentColor) {
        debug!("Setting accent color: {}", color);
        self.apply_color(color);
        let key = self.config.color_key.clone();
        self.persist(&key, color.as_str());
        self.document.dispatch(&ChangeEvent::ColorChange { color });
    }

    /// Parses `value` and applies it as the accent color.
    ///
    /// Invalid names change nothing.
    pub fn set_accent_color_str(&mut self, value: &str) -> Result<AccentColor, ParseError> {
        let color = value.parse()?;
        self.set_accent_color(color);
        Ok(color)
    }

    fn apply_color(&mut self, color: AccentColor) {
        let root = self.document.root();
        self.document.set_attribute(root, COLOR_ATTR, color.as_str());
        if let Some(widgets) = self.widgets.as_ref() {
            for (swatch_color, node) in &widgets.swatches {
                self.document
                    .set_class(*node, ACTIVE_CLASS, *swatch_color == color);
            }
        }
    }

    /// Shows or hides the accent color panel and returns whether it is now open.
    pub fn toggle_color_picker(&mut self) -> bool {
        match self.widgets.as_ref().map(|w| w.selector) {
            Some(selector) => self.document.toggle_class(selector, SHOW_CLASS),
            None => false,
        }
    }

    pub fn is_color_picker_open(&self) -> bool {
        self.widgets
            .as_ref()
            .is_some_and(|w| self.document.has_class(w.selector, SHOW_CLASS))
    }

    /// The mode on the document root, or the configured default.
    pub fn current_mode(&self) -> ThemeMode {
        self.read_root(THEME_ATTR).unwrap_or(self.config.default_mode)
    }

    /// The accent color on the document root, or the configured default.
    pub fn current_color(&self) -> AccentColor {
        self.read_root(COLOR_ATTR).unwrap_or(self.config.default_color)
    }

    fn read_root<T: std::str::FromStr>(&self, attr: &str) -> Option<T> {
        self.document
            .attribute(self.document.root(), attr)
            .and_then(|raw| raw.parse().ok())
    }

    /// Convenience surface for callers outside the manager.
    pub fn utils(&mut self) -> ThemeUtils<'_, D, S> {
        ThemeUtils::new(self)
    }

    pub fn widgets(&self) -> Option<&ControlWidgets> {
        self.widgets.as_ref()
    }

    pub fn config(&self) -> &PreferenceConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.document, self.store)
    }
}
