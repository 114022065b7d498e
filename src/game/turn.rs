use rand::Rng;

use crate::card::Card;
use crate::error::TurnError;
use crate::report::{Move, TurnOutcome, TurnRecord};
use crate::strategy::{find_card_for_player1, find_card_for_player2};

use super::{Game, GameState, Player};

impl<R: Rng> Game<R> {
    /// Resolves the next turn.
    ///
    /// On the first turn player 1 opens with a random card from their hand.
    /// On later turns player 1 looks for a card matching a rank left on the
    /// table by the previous turn; only then is the table cleared and the
    /// chosen card put down. Player 2 then has to beat a card on the table.
    /// A player with no card to play loses.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] if a winner has already been decided.
    pub fn play_turn(&mut self) -> Result<TurnRecord, TurnError> {
        let GameState::AwaitingTurn(turn) = self.state else {
            return Err(TurnError::GameOver);
        };

        let opening = if turn == 1 {
            self.opening_card()
        } else {
            // Player 1 answers the cards the previous turn left behind.
            let response =
                find_card_for_player1(self.table.cards(), self.hand(Player::First).cards());
            self.table.clear();
            response
        };

        let Some(opening) = opening else {
            return Ok(self.finish(turn, Move::Passed, None, Player::Second));
        };
        self.put_down(Player::First, opening);

        let Some(answer) =
            find_card_for_player2(self.table.cards(), self.hand(Player::Second).cards())
        else {
            return Ok(self.finish(
                turn,
                Move::Played(opening),
                Some(Move::Passed),
                Player::First,
            ));
        };
        self.put_down(Player::Second, answer);

        self.state = GameState::AwaitingTurn(turn + 1);

        Ok(TurnRecord {
            turn,
            first: Move::Played(opening),
            second: Some(Move::Played(answer)),
            outcome: TurnOutcome::Continue {
                first_hand: self.hand(Player::First).cards().to_vec(),
                second_hand: self.hand(Player::Second).cards().to_vec(),
            },
        })
    }

    /// Picks player 1's opening card uniformly at random.
    fn opening_card(&mut self) -> Option<Card> {
        let hand = self.hands[Player::First.index()].cards();
        if hand.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..hand.len());
        hand.get(index).copied()
    }

    /// Moves `card` from the player's hand to the table.
    fn put_down(&mut self, player: Player, card: Card) {
        if self.hands[player.index()].remove(&card).is_some() {
            self.table.push(card);
            tracing::debug!(%player, %card, table = self.table.len(), "card played");
        }
    }

    fn finish(
        &mut self,
        turn: u32,
        first: Move,
        second: Option<Move>,
        winner: Player,
    ) -> TurnRecord {
        self.state = GameState::Finished(winner);
        tracing::info!(turn, %winner, "game over");

        TurnRecord {
            turn,
            first,
            second,
            outcome: TurnOutcome::Won(winner),
        }
    }
}
