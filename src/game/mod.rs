//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, Table};
use crate::report::TurnRecord;

pub mod state;
mod turn;

pub use state::{GameState, Player};

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 10;

/// A two-player game between the rule-based bots.
///
/// The game owns the remaining deck, both hands, the table, and the random
/// source used for the opening move. Turns are resolved one at a time with
/// [`Game::play_turn`] or all at once with [`Game::run`].
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards left after dealing.
    deck: Deck,
    /// Hands indexed by seat.
    hands: [Hand; 2],
    /// Cards in play this turn.
    table: Table,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use durak_sim::Game;
    ///
    /// let mut game = Game::new(42);
    /// let turns = game.run();
    /// assert!(game.is_over());
    /// assert_eq!(turns.last().and_then(|t| t.winner()), game.winner());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Shuffles a full deck with `rng` and deals both hands from it.
    #[must_use]
    pub fn with_rng(mut rng: R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::from_deck(deck, rng)
    }

    /// Deals both hands from `deck` as it is, player 1 first.
    ///
    /// The deck is not shuffled, which makes the deal fully predictable.
    #[must_use]
    pub fn from_deck(mut deck: Deck, rng: R) -> Self {
        let first = deck.draw(HAND_SIZE);
        let second = deck.draw(HAND_SIZE);
        tracing::debug!(
            first = first.len(),
            second = second.len(),
            remaining = deck.len(),
            "hands dealt"
        );
        Self::assemble(deck, first, second, rng)
    }

    /// Starts a game from explicit hands with nothing left in the deck.
    ///
    /// Hands are sorted the same way dealt hands are.
    #[must_use]
    pub fn from_hands(first: Vec<Card>, second: Vec<Card>, rng: R) -> Self {
        Self::assemble(Deck::from_cards(Vec::new()), first, second, rng)
    }

    fn assemble(deck: Deck, first: Vec<Card>, second: Vec<Card>, rng: R) -> Self {
        Self {
            deck,
            hands: [Hand::dealt(first), Hand::dealt(second)],
            table: Table::new(),
            state: GameState::AwaitingTurn(1),
            rng,
        }
    }

    /// Plays turns until one player cannot respond.
    ///
    /// Returns the records of the turns played by this call; empty if the
    /// game was already over.
    pub fn run(&mut self) -> Vec<TurnRecord> {
        let mut turns = Vec::new();
        while let Ok(record) = self.play_turn() {
            turns.push(record);
        }
        turns
    }
}

impl<R> Game<R> {
    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of the next turn to play, or `None` once the game
    /// is over.
    #[must_use]
    pub const fn turn(&self) -> Option<u32> {
        match self.state {
            GameState::AwaitingTurn(turn) => Some(turn),
            GameState::Finished(_) => None,
        }
    }

    /// Returns the winner, if decided.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Finished(player) => Some(player),
            GameState::AwaitingTurn(_) => None,
        }
    }

    /// Returns whether a winner has been decided.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the cards currently on the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the cards left in the deck after dealing.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
