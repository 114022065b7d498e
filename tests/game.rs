//! Game integration tests.

use durak_sim::report::{deal_lines, transcript};
use durak_sim::{
    Card, Deck, Game, GameState, Move, Player, Rank, Suit, TurnError, TurnOutcome,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Random source that always yields zero, so player 1 opens with the first
/// card of their hand.
struct ZeroRng;

impl rand::RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(ToString::to_string).collect()
}

fn continuing(turn: u32, first: &str, second: &str, first_left: &str, second_left: &str) -> Vec<String> {
    vec![
        format!("Turn {turn}"),
        format!("Player 1: {first}"),
        format!("Player 2: {second}"),
        String::new(),
        format!("Player 1 has left:{first_left}"),
        format!("Player 2 has left:{second_left}"),
        String::new(),
    ]
}

#[test]
fn player1_wins_on_second_turn() {
    let mut game = Game::from_hands(
        vec![card(Rank::Five, Suit::Hearts), card(Rank::Two, Suit::Spades)],
        vec![card(Rank::Five, Suit::Clubs), card(Rank::Five, Suit::Spades)],
        ZeroRng,
    );
    assert_eq!(game.state(), GameState::AwaitingTurn(1));

    let first = game.play_turn().unwrap();
    assert_eq!(first.first, Move::Played(card(Rank::Two, Suit::Spades)));
    assert_eq!(first.second, Some(Move::Played(card(Rank::Five, Suit::Clubs))));
    assert_eq!(
        first.lines(),
        continuing(1, "2♠", "5♣", " 5♥", " 5♠")
    );
    assert_eq!(game.turn(), Some(2));

    // 5♥ matches the 5♣ left on the table; 5♠ cannot beat it.
    let second = game.play_turn().unwrap();
    assert_eq!(
        second.lines(),
        lines(&[
            "Turn 2",
            "Player 1: 5♥",
            "Player 2: could not throw in",
            "",
            "Player 1 wins.",
        ])
    );
    assert_eq!(second.winner(), Some(Player::First));
    assert_eq!(game.state(), GameState::Finished(Player::First));
    assert_eq!(game.table().cards(), &[card(Rank::Five, Suit::Hearts)]);
}

#[test]
fn player2_wins_when_no_rank_matches() {
    let mut game = Game::from_hands(
        vec![card(Rank::Three, Suit::Hearts), card(Rank::Nine, Suit::Clubs)],
        vec![card(Rank::Four, Suit::Diamonds), card(Rank::Ace, Suit::Spades)],
        ZeroRng,
    );

    let turns = game.run();
    assert_eq!(turns.len(), 2);
    assert_eq!(
        turns[1].lines(),
        lines(&[
            "Turn 2",
            "Player 1: could not throw in",
            "",
            "Player 2 wins.",
        ])
    );
    assert_eq!(turns[1].second, None);
    assert_eq!(game.winner(), Some(Player::Second));
    assert!(game.table().is_empty());
}

#[test]
fn player2_loses_on_opening_turn() {
    let mut game = Game::from_hands(
        vec![card(Rank::Ace, Suit::Hearts)],
        vec![card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)],
        ZeroRng,
    );

    let record = game.play_turn().unwrap();
    assert_eq!(record.second, Some(Move::Passed));
    assert_eq!(record.outcome, TurnOutcome::Won(Player::First));
    assert_eq!(game.hand(Player::Second).len(), 2);
}

#[test]
fn three_turns_before_a_heuristic_fails() {
    let mut game = Game::from_hands(
        vec![
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Three, Suit::Spades),
            card(Rank::Six, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ],
        vec![
            card(Rank::Four, Suit::Clubs),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Two, Suit::Diamonds),
        ],
        ZeroRng,
    );

    assert_eq!(game.hand(Player::First).to_string(), "3♠ 4♠ 6♠ 9♥");
    assert_eq!(game.hand(Player::Second).to_string(), "2♦ 4♣ 6♣ 9♣");

    let expected = [
        continuing(1, "3♠", "4♣", " 4♠ 6♠ 9♥", " 2♦ 6♣ 9♣"),
        continuing(2, "4♠", "6♣", " 6♠ 9♥", " 2♦ 9♣"),
        continuing(3, "6♠", "9♣", " 9♥", " 2♦"),
    ];

    for (turn, expected) in (1..).zip(expected) {
        assert_eq!(game.turn(), Some(turn));
        let record = game.play_turn().unwrap();
        assert_eq!(record.turn, turn);
        assert_eq!(record.lines(), expected);
    }

    let last = game.play_turn().unwrap();
    assert_eq!(
        last.lines(),
        lines(&[
            "Turn 4",
            "Player 1: 9♥",
            "Player 2: could not throw in",
            "",
            "Player 1 wins.",
        ])
    );
    assert!(game.hand(Player::First).is_empty());
    assert_eq!(game.hand(Player::Second).to_string(), "2♦");
}

#[test]
fn full_game_from_unshuffled_deck() {
    let mut game = Game::from_deck(Deck::new(), ZeroRng);
    assert_eq!(game.deck().len(), 32);

    let first_hand = game.hand(Player::First).cards().to_vec();
    let second_hand = game.hand(Player::Second).cards().to_vec();
    assert_eq!(
        deal_lines(&first_hand, &second_hand),
        lines(&[
            "Dealt to player 1: 2♥ 3♥ 4♥ 5♥ 6♥ 7♥ 8♥ 9♥ 10♥ J♥",
            "Dealt to player 2: 2♦ 3♦ 4♦ 5♦ 6♦ 7♦ 8♦ Q♥ K♥ A♥",
        ])
    );

    let turns = game.run();

    let mut expected = deal_lines(&first_hand, &second_hand);
    expected.push(String::new());
    for turn in [
        continuing(1, "2♥", "3♦", " 3♥ 4♥ 5♥ 6♥ 7♥ 8♥ 9♥ 10♥ J♥", " 2♦ 4♦ 5♦ 6♦ 7♦ 8♦ Q♥ K♥ A♥"),
        continuing(2, "3♥", "4♦", " 4♥ 5♥ 6♥ 7♥ 8♥ 9♥ 10♥ J♥", " 2♦ 5♦ 6♦ 7♦ 8♦ Q♥ K♥ A♥"),
        continuing(3, "4♥", "5♦", " 5♥ 6♥ 7♥ 8♥ 9♥ 10♥ J♥", " 2♦ 6♦ 7♦ 8♦ Q♥ K♥ A♥"),
        continuing(4, "5♥", "6♦", " 6♥ 7♥ 8♥ 9♥ 10♥ J♥", " 2♦ 7♦ 8♦ Q♥ K♥ A♥"),
        continuing(5, "6♥", "7♦", " 7♥ 8♥ 9♥ 10♥ J♥", " 2♦ 8♦ Q♥ K♥ A♥"),
        continuing(6, "7♥", "8♦", " 8♥ 9♥ 10♥ J♥", " 2♦ Q♥ K♥ A♥"),
        continuing(7, "8♥", "Q♥", " 9♥ 10♥ J♥", " 2♦ K♥ A♥"),
    ] {
        expected.extend(turn);
    }
    expected.extend(lines(&[
        "Turn 8",
        "Player 1: could not throw in",
        "",
        "Player 2 wins.",
    ]));

    assert_eq!(transcript(&first_hand, &second_hand, &turns), expected);
    assert_eq!(game.winner(), Some(Player::Second));
    assert_eq!(game.deck().len(), 32);
}

#[test]
fn play_after_game_over_is_an_error() {
    let mut game = Game::from_hands(Vec::new(), Vec::new(), ZeroRng);

    let record = game.play_turn().unwrap();
    assert_eq!(record.winner(), Some(Player::Second));
    assert_eq!(game.play_turn().unwrap_err(), TurnError::GameOver);
    assert!(game.run().is_empty());
    assert_eq!(game.turn(), None);
}

#[test]
fn seeded_games_are_reproducible() {
    let mut a = Game::new(2024);
    let mut b = Game::new(2024);

    assert_eq!(a.hand(Player::First), b.hand(Player::First));
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.run(), b.run());
    assert_eq!(a.winner(), b.winner());
}

#[test]
fn seeded_game_always_terminates() {
    for seed in 0..200 {
        let mut game = Game::new(seed);
        let turns = game.run();

        assert!(game.is_over(), "seed {seed} did not finish");
        // Each completed turn costs player 1 a card, so at most eleven turns.
        assert!(turns.len() <= 11);
        assert_eq!(turns.last().and_then(|turn| turn.winner()), game.winner());
        assert!(turns.iter().rev().skip(1).all(|turn| turn.winner().is_none()));
    }
}
