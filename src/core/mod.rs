//! Core types: actors, outcomes, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every game.
//! Games configure the match loop via `MatchConfig` rather than globals.

pub mod actor;
pub mod outcome;
pub mod rng;
pub mod config;
pub mod error;

pub use actor::{Actor, ActorMap};
pub use outcome::Outcome;
pub use rng::GameRng;
pub use config::MatchConfig;
pub use error::GameError;
