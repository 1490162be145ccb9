//! Static game content and data-file loaders.
//!
//! This crate houses the shipped content the rules crate stays agnostic of:
//! - The canonical gacha technique catalog (built-in and via RON file)
//! - Starting character and world builders
//! - Mock duel opponent content
//!
//! Content is consumed by the runtime and never appears in game state beyond
//! the values copied into it at creation time.

pub mod canon;
pub mod starter;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use canon::{OPPONENT_ACTIONS, builtin_catalog};
pub use starter::{shadow_opponent, starting_character, starting_world};

#[cfg(feature = "loaders")]
pub use loaders::TechniqueLoader;
