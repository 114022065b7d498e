//! A two-player durak-style card game played by rule-based bots, with
//! optional `no_std` support.
//!
//! A shuffled 52-card deck deals ten cards to each player. Player 1 opens
//! with a random card; afterwards player 1 may only throw in a card whose rank
//! is already on the table, and player 2 must put down a card that beats one
//! on the table. The first player unable to respond loses.
//!
//! # Example
//!
//! ```
//! use durak_sim::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! for turn in game.run() {
//!     for line in turn.lines() {
//!         println!("{line}");
//!     }
//! }
//! assert!(matches!(game.state(), GameState::Finished(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod report;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::TurnError;
pub use game::{Game, GameState, HAND_SIZE, Player};
pub use hand::{Hand, Table};
pub use report::{Move, TurnOutcome, TurnRecord};
