//! Observable state container primitives.
//!
//! This module provides the base traits and the container for
//! unidirectional data flow in the client core.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a slice of client state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Holds the authoritative state copy and notifies subscribers

mod container;
mod intent;
mod reducer;
mod state;

pub use container::{Store, Subscription};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
