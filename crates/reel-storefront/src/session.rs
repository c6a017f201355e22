//! Storefront session state and event wiring.

use crate::action::{HostCommand, UiAction};
use crate::notify::{Notice, Notifier};
use crate::view::{self, CartView, MovieCard};
use reel_commerce::cart::{Cart, CartTotals, LineKey};
use reel_commerce::catalog::{Catalog, Movie};
use reel_commerce::ids::MovieId;
use reel_commerce::search::{CatalogQuery, CategoryFilter};
use reel_commerce::transaction::TransactionType;
use tracing::{debug, info};

/// Delay before the cart panel closes after a successful checkout, in
/// milliseconds. Long enough to let the user see the confirmation.
pub const PANEL_CLOSE_DELAY_MS: i64 = 300;

/// Notification shown when checking out an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";

/// Notification shown on a successful checkout.
pub const CHECKOUT_SUCCESS_MESSAGE: &str =
    "Thanks for your order! Your checkout has been completed.";

/// Cart panel open/closed state plus its single deferred close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CartPanel {
    open: bool,
    close_at: Option<i64>,
}

/// One storefront session.
///
/// Owns the catalog, cart, filter state, notifier, and cart panel; the
/// host creates one at page load and drives it from its event loop. All
/// mutations happen synchronously inside a dispatched action, and the
/// only deferred work is the notice dismiss and the post-checkout panel
/// close, both fired by [`Storefront::tick`].
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    query: CatalogQuery,
    notifier: Notifier,
    panel: CartPanel,
}

impl Storefront {
    /// Start a session over an already-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            query: CatalogQuery::new(),
            notifier: Notifier::new(),
            panel: CartPanel::default(),
        }
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current filter state.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// The visible notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notifier.current()
    }

    /// Whether the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.panel.open
    }

    /// Movies matching the current query, in catalog order.
    pub fn visible_movies(&self) -> Vec<&Movie> {
        self.query.apply(self.catalog.movies())
    }

    /// Cards for the visible movies.
    pub fn catalog_cards(&self) -> Vec<MovieCard> {
        view::movie_cards(&self.visible_movies())
    }

    /// The rendered cart listing with totals.
    pub fn cart_view(&self) -> CartView {
        view::cart_view(&self.cart, &self.catalog)
    }

    /// Cart totals, computed on demand.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(&self.catalog)
    }

    // ------------------------------------------------------------------
    // Typed operations
    // ------------------------------------------------------------------

    /// Update the search term. A non-empty term overrides the category.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
    }

    /// Select a category filter control, clearing the search box (the
    /// two controls are exclusive; choosing a category starts fresh).
    pub fn select_category(&mut self, label: &str) {
        self.query.term.clear();
        self.query.category = CategoryFilter::parse(label);
    }

    /// Add one unit of a movie to the cart and confirm with a notice.
    ///
    /// Unknown ids are ignored: the catalog is static, so a miss means
    /// stale action data, not a user-facing error.
    pub fn add_to_cart(&mut self, id: MovieId, transaction: TransactionType, now_ms: i64) {
        let Some(movie) = self.catalog.get(id) else {
            debug!(movie_id = %id, "add_to_cart: unknown movie id, ignoring");
            return;
        };
        let name = movie.name.clone();
        let price = movie.price_for(transaction);

        self.cart.add(id, price, transaction);
        self.notifier
            .notify(format!("\"{}\" added to cart!", name), now_ms);
    }

    /// Remove a cart line by key. Absent keys are a no-op.
    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        self.cart.remove(key)
    }

    /// Open or close the cart panel. A manual toggle cancels any pending
    /// deferred close.
    pub fn toggle_cart_panel(&mut self) {
        self.panel.open = !self.panel.open;
        self.panel.close_at = None;
    }

    /// Check out the cart.
    ///
    /// An empty cart only produces a notice. Otherwise the cart is
    /// cleared, a success notice is shown, and the panel close is
    /// scheduled shortly after so the confirmation stays visible. A
    /// repeat call supersedes a pending close.
    pub fn checkout(&mut self, now_ms: i64) {
        if self.cart.is_empty() {
            self.notifier.notify(EMPTY_CART_MESSAGE, now_ms);
            return;
        }

        let totals = self.cart_totals();
        info!(
            items = totals.item_count,
            total = %totals.total,
            "checkout complete"
        );

        self.cart.clear();
        self.notifier.notify(CHECKOUT_SUCCESS_MESSAGE, now_ms);
        if self.panel.open {
            self.panel.close_at = Some(now_ms + PANEL_CLOSE_DELAY_MS);
        }
    }

    /// Fire any deferred actions whose deadline has passed.
    pub fn tick(&mut self, now_ms: i64) {
        self.notifier.tick(now_ms);
        if let Some(close_at) = self.panel.close_at {
            if now_ms >= close_at {
                self.panel.open = false;
                self.panel.close_at = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Raw action dispatch
    // ------------------------------------------------------------------

    /// Apply a raw UI action.
    ///
    /// Malformed payloads (unparseable id, unknown action kind, bad
    /// composite key) are silently ignored. Returns a command when the
    /// host has presentation work to do.
    pub fn dispatch(&mut self, action: UiAction, now_ms: i64) -> Option<HostCommand> {
        match action {
            UiAction::Search(term) => self.set_search_term(term),
            UiAction::Category(label) => self.select_category(&label),
            UiAction::Card { id, kind } => {
                match (MovieId::parse(&id), TransactionType::from_str(&kind)) {
                    (Some(id), Some(transaction)) => self.add_to_cart(id, transaction, now_ms),
                    _ => debug!(%id, %kind, "card action: malformed payload, ignoring"),
                }
            }
            UiAction::RemoveLine(raw) => match LineKey::parse(&raw) {
                Some(key) => {
                    self.remove_line(&key);
                }
                None => debug!(key = %raw, "remove action: malformed key, ignoring"),
            },
            UiAction::ToggleCart => self.toggle_cart_panel(),
            UiAction::Checkout => self.checkout(now_ms),
            UiAction::ScrollToTop => return Some(HostCommand::ScrollToTop),
        }
        None
    }
}
