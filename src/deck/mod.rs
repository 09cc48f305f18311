//! The visible card stack and its replenishment policy.

pub mod card;
pub mod controller;

pub use card::{Card, MAX_FAN_DEPTH};
pub use controller::{CommitTransition, DeckController, REFILL_BATCH};
