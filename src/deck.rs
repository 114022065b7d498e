//! The 52-card deck.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::CardList;

/// An ordered deck of cards.
///
/// The deck is built once and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards, top of the deck first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suit by suit, ranks ascending.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck with the cards in exactly the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns up to `count` cards from the top of the deck.
    ///
    /// Asking for more cards than remain returns whatever is left.
    ///
    /// ```
    /// use durak_sim::Deck;
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.draw(10).len(), 10);
    /// assert_eq!(deck.draw(100).len(), 42);
    /// assert!(deck.is_empty());
    /// ```
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats as `Deck[<size>]: <cards>`.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck[{}]:{}", self.cards.len(), CardList(&self.cards))
    }
}
