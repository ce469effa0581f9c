//! The two sides of every game and per-side data storage.
//!
//! ## Actor
//!
//! Every game here is the human at the terminal against the computer
//! (the dealer, in Twenty-One).
//!
//! ## ActorMap
//!
//! One value per actor with O(1) access, indexed by `Actor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The person at the terminal.
    Human,
    /// The computer opponent (the dealer in Twenty-One).
    Computer,
}

impl Actor {
    /// Both actors, human first.
    pub const ALL: [Actor; 2] = [Actor::Human, Actor::Computer];

    /// The opposing actor.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Human => Actor::Computer,
            Actor::Computer => Actor::Human,
        }
    }

    const fn index(self) -> usize {
        match self {
            Actor::Human => 0,
            Actor::Computer => 1,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Human => write!(f, "user"),
            Actor::Computer => write!(f, "computer"),
        }
    }
}

/// Per-actor data storage.
///
/// ## Example
///
/// ```
/// use parlor::core::{Actor, ActorMap};
///
/// let mut marks = ActorMap::new('X', 'O');
/// assert_eq!(marks[Actor::Computer], 'O');
///
/// marks[Actor::Human] = '*';
/// assert_eq!(marks[Actor::Human], '*');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    data: [T; 2],
}

impl<T> ActorMap<T> {
    /// Create a map from the human's and the computer's values.
    pub fn new(human: T, computer: T) -> Self {
        Self { data: [human, computer] }
    }
}

impl<T: Default> Default for ActorMap<T> {
    fn default() -> Self {
        Self::new(T::default(), T::default())
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        &self.data[actor.index()]
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        &mut self.data[actor.index()]
    }
}
