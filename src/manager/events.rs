use crate::document::NodeId;
use crate::theme::ThemeMode;

/// Input delivered to [`PreferenceManager::handle_event`](super::PreferenceManager::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A click somewhere in the document.
    Click { target: NodeId },
    /// The system color-scheme preference changed.
    SystemScheme(ThemeMode),
}
