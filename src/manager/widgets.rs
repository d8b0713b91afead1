//! The rendered controls.

use crate::document::{Document, NodeId};
use crate::theme::{AccentColor, ThemeMode};

pub const CONTROLS_CLASS: &str = "theme-controls";
pub const SWITCHER_CLASS: &str = "theme-switcher";
pub const COLOR_TOGGLE_CLASS: &str = "color-picker-toggle";
pub const SELECTOR_CLASS: &str = "color-theme-selector";
pub const SWATCHES_CLASS: &str = "color-swatches";
pub const SWATCH_CLASS: &str = "color-swatch";

/// Class on the selector while the palette is open.
pub const SHOW_CLASS: &str = "show";
/// Class on the swatch matching the current accent color.
pub const ACTIVE_CLASS: &str = "active";
/// Class that turns on CSS transitions once the page has settled.
pub const TRANSITION_CLASS: &str = "theme-transition";

pub const COLOR_DATA_ATTR: &str = "data-color";

const PALETTE_ICON: &str = r#"<i class="fa-solid fa-palette"></i>"#;
const SUN_ICON: &str = r#"<i class="fa-solid fa-sun"></i>"#;
const MOON_ICON: &str = r#"<i class="fa-solid fa-moon"></i>"#;

/// Markup for the mode switcher: a sun offers the way out of dark mode,
/// a moon the way into it.
pub fn switcher_icon(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        SUN_ICON
    } else {
        MOON_ICON
    }
}

/// Handles to the control nodes, created once by
/// [`PreferenceManager::initialize`](super::PreferenceManager::initialize).
///
/// Layout:
///
/// ```text
/// body
/// └── div.theme-controls
///     ├── button.theme-switcher
///     ├── button.color-picker-toggle
///     └── div.color-theme-selector
///         └── div.color-swatches
///             └── button.color-swatch.<color>  (one per AccentColor)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlWidgets {
    pub container: NodeId,
    pub switcher: NodeId,
    pub color_toggle: NodeId,
    pub selector: NodeId,
    pub swatch_list: NodeId,
    pub swatches: Vec<(AccentColor, NodeId)>,
}

impl ControlWidgets {
    pub(crate) fn build<D: Document>(doc: &mut D) -> Self {
        let container = doc.create_element("div");
        doc.add_class(container, CONTROLS_CLASS);
        let body = doc.body();
        doc.append_child(body, container);

        let switcher = doc.create_element("button");
        doc.add_class(switcher, SWITCHER_CLASS);
        doc.set_attribute(switcher, "aria-label", "Toggle dark mode");
        doc.append_child(container, switcher);

        let color_toggle = doc.create_element("button");
        doc.add_class(color_toggle, COLOR_TOGGLE_CLASS);
        doc.set_attribute(color_toggle, "aria-label", "Toggle color picker");
        doc.set_inner_html(color_toggle, PALETTE_ICON);
        doc.append_child(container, color_toggle);

        let selector = doc.create_element("div");
        doc.add_class(selector, SELECTOR_CLASS);
        doc.append_child(container, selector);

        let swatch_list = doc.create_element("div");
        doc.add_class(swatch_list, SWATCHES_CLASS);
        doc.append_child(selector, swatch_list);

        let swatches = AccentColor::ALL
            .into_iter()
            .map(|color| {
                let swatch = doc.create_element("button");
                doc.add_class(swatch, SWATCH_CLASS);
                doc.add_class(swatch, color.as_str());
                doc.set_attribute(swatch, COLOR_DATA_ATTR, color.as_str());
                doc.set_attribute(swatch, "aria-label", &format!("{} theme", color));
                doc.set_attribute(swatch, "title", &color.title());
                doc.append_child(swatch_list, swatch);
                (color, swatch)
            })
            .collect();

        Self {
            container,
            switcher,
            color_toggle,
            selector,
            swatch_list,
            swatches,
        }
    }

    /// The swatch node for `color`.
    pub fn swatch(&self, color: AccentColor) -> Option<NodeId> {
        self.swatches
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, node)| *node)
    }

    /// The swatch that is `target` or contains it, if any.
    pub fn swatch_containing<D: Document>(&self, doc: &D, target: NodeId) -> Option<NodeId> {
        self.swatches
            .iter()
            .map(|(_, node)| *node)
            .find(|node| doc.contains(*node, target))
    }

    /// Nodes that receive their own click handler.
    pub(crate) fn click_targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        [self.switcher, self.color_toggle]
            .into_iter()
            .chain(self.swatches.iter().map(|(_, node)| *node))
    }
}
