//! Raw UI actions and host commands.

/// A user action as it arrives from the UI layer.
///
/// Card and remove-line payloads are raw strings (the DOM hands over
/// data-attributes); [`crate::Storefront::dispatch`] parses them and
/// silently ignores anything malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Search input changed.
    Search(String),
    /// A category filter control was selected ("all" clears it).
    Category(String),
    /// A card action button was pressed: movie id plus action kind
    /// ("rent" or "buy").
    Card { id: String, kind: String },
    /// A remove control was pressed, carrying a composite key
    /// (e.g., "12-rental").
    RemoveLine(String),
    /// The cart open/close control was pressed.
    ToggleCart,
    /// The checkout control was pressed.
    Checkout,
    /// The scroll-to-top control was pressed.
    ScrollToTop,
}

/// Work the engine asks the host to perform.
///
/// Only pure presentation chores cross this seam; all state changes stay
/// inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Scroll the page back to the top.
    ScrollToTop,
}
