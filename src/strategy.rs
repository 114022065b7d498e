//! Response heuristics of the two bots.
//!
//! The two players follow different rules: player 1 can only throw in a card
//! matching a rank already on the table, while player 2 must beat a card on
//! the table.

use crate::card::Card;

/// Picks player 1's card: the first card in hand whose rank is already on
/// the table.
///
/// Returns `None` when no rank matches, including when the table is empty.
#[must_use]
pub fn find_card_for_player1(table: &[Card], hand: &[Card]) -> Option<Card> {
    hand.iter()
        .find(|card| table.iter().any(|on_table| on_table.rank == card.rank))
        .copied()
}

/// Picks player 2's card: the first card in hand that beats any card on the
/// table.
///
/// Hand cards are tried in order and each is checked against the table
/// cards in play order.
///
/// ```
/// use durak_sim::strategy::find_card_for_player2;
/// use durak_sim::{Card, Rank, Suit};
///
/// let table = [Card::new(Rank::Nine, Suit::Clubs)];
/// let hand = [
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
/// ];
/// assert_eq!(find_card_for_player2(&table, &hand), Some(hand[1]));
/// ```
#[must_use]
pub fn find_card_for_player2(table: &[Card], hand: &[Card]) -> Option<Card> {
    for card in hand {
        for on_table in table {
            if card.is_greater_than(on_table) {
                return Some(*card);
            }
        }
    }
    None
}
