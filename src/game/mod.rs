//! Headless game loop.
//!
//! [`Match`] ties a [`GameState`](crate::state::GameState) chain to a seeded
//! [`Dice`](crate::core::Dice) and a [`SearchEngine`](crate::search::SearchEngine).
//! Rendering and input handling are left to the host.

mod driver;

pub use driver::{Match, TurnRecord};
