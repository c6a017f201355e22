//! Session state, view models, and UI action wiring for the Reel storefront.
//!
//! This crate is UI-framework agnostic: the host owns the event loop and
//! the DOM (or whatever rendering surface it uses), feeds raw user actions
//! into [`Storefront::dispatch`], drives timers through
//! [`Storefront::tick`], and renders the pure view models from
//! [`view`]. All state lives in one owned [`Storefront`] per session; it
//! is created at page load and dies with it.
//!
//! # Example
//!
//! ```rust
//! use reel_commerce::prelude::*;
//! use reel_storefront::{Storefront, UiAction};
//!
//! let mut dune = Movie::new(1, "Dune", 2021);
//! dune.rental_price = Money::from_decimal(3.99, Currency::USD);
//! let catalog = Catalog::new(vec![dune]).unwrap();
//!
//! let mut store = Storefront::new(catalog);
//! let cmd = store.dispatch(UiAction::Card { id: "1".into(), kind: "rent".into() }, 0);
//! assert!(cmd.is_none());
//!
//! let cart = store.cart_view();
//! assert_eq!(cart.total_display, "$3.99");
//! ```

pub mod action;
pub mod notify;
pub mod session;
pub mod view;

pub use action::{HostCommand, UiAction};
pub use notify::{Notice, Notifier, NOTICE_TTL_MS};
pub use session::{Storefront, PANEL_CLOSE_DELAY_MS};
pub use view::{cart_view, movie_cards, CartLineView, CartView, MovieCard};
