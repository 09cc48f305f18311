//! factdeck — the engine behind a swipeable stack of short content cards.
//!
//! The deck shows a small always-populated window of cards over a backlog of
//! items that arrives asynchronously and unreliably from pluggable content
//! providers. This crate owns the hard parts of that arrangement:
//!
//! - [`content::ContentQueue`] — the in-memory backlog, replenished by timed
//!   batch fetches with cache and seed fallbacks
//! - [`deck::DeckController`] — the visible card window and its replenishment
//!   policy
//! - [`gesture::GestureRecognizer`] — pointer motion interpreted into
//!   commit/cancel decisions on the topmost card
//! - [`clamp::TextClampController`] — per-card text truncation state
//! - [`color`] — random card backgrounds paired with a readable foreground
//!
//! Rendering surfaces, concrete HTTP providers, share sheets and selection
//! menus are external collaborators: they drive these types and project
//! their state, but the engine is the single source of truth.

pub mod clamp;
pub mod color;
pub mod content;
pub mod deck;
pub mod gesture;

pub use clamp::{ClampState, TextClampController, MAX_PREVIEW_LINES};
pub use color::{random_readable_colors, CardColors};
pub use content::{
    CacheStore, Category, ContentProvider, ContentQueue, Item, ProviderError, ProviderRegistry,
    Subject,
};
pub use deck::{Card, CommitTransition, DeckController};
pub use gesture::{DragFrame, GestureRecognizer, GestureRelease, SwipeDirection};

/// Visible window capacity: the deck never mounts more than this many cards.
pub const VISIBLE: usize = 5;
