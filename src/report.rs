//! Per-turn reports and the printed transcript.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Player;
use crate::hand::CardList;

/// What a player did on their part of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The player put this card on the table.
    Played(Card),
    /// The player had no card to put down.
    Passed,
}

impl Move {
    /// Returns the played card, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Played(card) => Some(card),
            Self::Passed => None,
        }
    }

    fn line(self, player: Player) -> String {
        match self {
            Self::Played(card) => format!("{player}: {card}"),
            Self::Passed => format!("{player}: could not throw in"),
        }
    }
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both players played; the game goes on with these hands.
    Continue {
        /// Player 1's remaining cards.
        first_hand: Vec<Card>,
        /// Player 2's remaining cards.
        second_hand: Vec<Card>,
    },
    /// A player could not respond and the other one won.
    Won(Player),
}

/// Record of a single resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Player 1's move.
    pub first: Move,
    /// Player 2's move; `None` when player 1 already lost the turn.
    pub second: Option<Move>,
    /// Result of the turn.
    pub outcome: TurnOutcome,
}

impl TurnRecord {
    /// Returns the winner decided by this turn, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self.outcome {
            TurnOutcome::Won(player) => Some(player),
            TurnOutcome::Continue { .. } => None,
        }
    }

    /// Renders the turn as transcript lines.
    ///
    /// A continuing turn ends with the remaining hands and a blank line; a
    /// final turn ends with the winner announcement.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = alloc::vec![format!("Turn {}", self.turn), self.first.line(Player::First)];

        if let Some(second) = self.second {
            lines.push(second.line(Player::Second));
        }

        lines.push(String::new());

        match &self.outcome {
            TurnOutcome::Continue {
                first_hand,
                second_hand,
            } => {
                lines.push(format!("Player 1 has left:{}", CardList(first_hand)));
                lines.push(format!("Player 2 has left:{}", CardList(second_hand)));
                lines.push(String::new());
            }
            TurnOutcome::Won(player) => lines.push(format!("{player} wins.")),
        }

        lines
    }
}

/// Renders the two freshly dealt hands.
#[must_use]
pub fn deal_lines(first: &[Card], second: &[Card]) -> Vec<String> {
    alloc::vec![
        format!("Dealt to player 1:{}", CardList(first)),
        format!("Dealt to player 2:{}", CardList(second)),
    ]
}

/// Renders a full game: the deals followed by every turn.
#[must_use]
pub fn transcript(first: &[Card], second: &[Card], turns: &[TurnRecord]) -> Vec<String> {
    let mut lines = deal_lines(first, second);
    lines.push(String::new());
    lines.extend(turns.iter().flat_map(TurnRecord::lines));
    lines
}
