//! Player hands and the table.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

/// Formats a run of cards, each preceded by a single space.
///
/// Meant to follow a label such as `Deck[2]:`; an empty run prints nothing.
pub(crate) struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, lowest rank first as dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from freshly dealt cards.
    ///
    /// Cards are sorted ascending by rank value only; the sort is stable, so
    /// cards of equal rank keep their dealt order. The hand is never
    /// re-sorted afterwards.
    ///
    /// ```
    /// use durak_sim::{Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::dealt(vec![
    ///     Card::new(Rank::King, Suit::Hearts),
    ///     Card::new(Rank::Five, Suit::Spades),
    ///     Card::new(Rank::Five, Suit::Hearts),
    /// ]);
    /// assert_eq!(hand.to_string(), "5♠ 5♥ K♥");
    /// ```
    #[must_use]
    pub fn dealt(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(|card| card.rank.value());
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Removes the first occurrence of `card`, returning it if present.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|held| held == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.cards.iter();
        if let Some(first) = cards.next() {
            write!(f, "{first}")?;
            for card in cards {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}

/// Cards in play during the current turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Puts a card on the table.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards on the table in the order they were played.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes every card from the table.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
