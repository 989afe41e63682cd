//! Round resolution and match integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warrs::names::from_fn;
use warrs::{
    Card, DECK_SIZE, Game, GameOptions, GameState, Hand, PlayedCard, Player, SetupError, Suit,
    TurnError, TurnResult, resolve_round,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn player(index: usize, cards: &[Card]) -> Player {
    Player::with_hand(
        format!("P{index}"),
        index,
        Hand::from_active(cards.iter().copied()),
    )
}

fn ranks(played: &[PlayedCard]) -> Vec<Option<u8>> {
    played.iter().map(|p| p.card.map(|c| c.rank)).collect()
}

fn play_to_end(game: &Game) -> Vec<TurnResult> {
    let mut results = Vec::new();
    while !game.has_ended() {
        assert!(results.len() < 100_000, "match did not finish");
        let result = game.progress_turn().unwrap();
        assert_eq!(game.total_cards(), DECK_SIZE);
        results.push(result);
    }
    results
}

#[test]
fn highest_card_wins_without_war() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(0, &[card(Suit::Spades, 14)]),
        player(1, &[card(Suit::Hearts, 2)]),
    ];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, Some(0));
    assert_eq!(outcome.wars, 0);
    assert_eq!(outcome.played.len(), 2);
    assert_eq!(ranks(&outcome.played), vec![Some(14), Some(2)]);
}

#[test]
fn tied_players_go_to_war() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(0, &[card(Suit::Spades, 10), card(Suit::Spades, 3)]),
        player(1, &[card(Suit::Clubs, 10), card(Suit::Clubs, 5)]),
        player(2, &[card(Suit::Diamonds, 7), card(Suit::Diamonds, 14)]),
    ];

    let outcome = resolve_round(&mut players, &[0, 1, 2], &mut rng);
    // The war winner takes the pot, not the first player to tie.
    assert_eq!(outcome.winner, Some(1));
    assert_eq!(outcome.wars, 1);
    assert_eq!(
        ranks(&outcome.played),
        vec![Some(10), Some(10), Some(7), Some(3), Some(5)]
    );

    let war: Vec<(usize, usize)> = outcome
        .played
        .iter()
        .filter(|p| p.depth == 1)
        .map(|p| (p.player_index, p.depth))
        .collect();
    assert_eq!(war, vec![(0, 1), (1, 1)]);

    // The third player sat the war out.
    assert_eq!(players[2].hand.len(), 1);
    assert_eq!(outcome.cards().count(), 5);
}

#[test]
fn later_high_card_beats_earlier_tie() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(0, &[card(Suit::Spades, 6)]),
        player(1, &[card(Suit::Clubs, 6)]),
        player(2, &[card(Suit::Hearts, 12)]),
    ];

    let outcome = resolve_round(&mut players, &[0, 1, 2], &mut rng);
    assert_eq!(outcome.winner, Some(2));
    assert_eq!(outcome.wars, 0);
    assert_eq!(outcome.played.len(), 3);
}

#[test]
fn wars_cascade_until_broken() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(
            0,
            &[
                card(Suit::Spades, 8),
                card(Suit::Spades, 4),
                card(Suit::Spades, 2),
            ],
        ),
        player(
            1,
            &[
                card(Suit::Hearts, 8),
                card(Suit::Hearts, 4),
                card(Suit::Hearts, 13),
            ],
        ),
    ];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, Some(1));
    assert_eq!(outcome.wars, 2);
    assert_eq!(outcome.played.len(), 6);
    let depths: Vec<usize> = outcome.played.iter().map(|p| p.depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 1, 2, 2]);
}

#[test]
fn empty_hand_plays_nothing_and_cannot_win() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![player(0, &[]), player(1, &[card(Suit::Clubs, 4)])];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, Some(1));
    assert_eq!(
        outcome.played,
        vec![
            PlayedCard {
                player_index: 0,
                card: None,
                depth: 0,
            },
            PlayedCard {
                player_index: 1,
                card: Some(card(Suit::Clubs, 4)),
                depth: 0,
            },
        ]
    );
}

#[test]
fn player_running_out_during_war_loses_it() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(0, &[card(Suit::Spades, 9)]),
        player(1, &[card(Suit::Hearts, 9), card(Suit::Hearts, 2)]),
    ];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, Some(1));
    assert_eq!(ranks(&outcome.played), vec![Some(9), Some(9), None, Some(2)]);
    assert_eq!(outcome.cards().count(), 3);
}

#[test]
fn war_with_no_cards_left_keeps_first_tied_player() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![
        player(0, &[card(Suit::Spades, 9)]),
        player(1, &[card(Suit::Hearts, 9)]),
    ];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, Some(0));
    assert_eq!(outcome.wars, 1);
    assert_eq!(outcome.cards().count(), 2);
}

#[test]
fn round_with_no_cards_has_no_winner() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![player(0, &[]), player(1, &[])];

    let outcome = resolve_round(&mut players, &[0, 1], &mut rng);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.wars, 0);
    assert_eq!(outcome.played.len(), 2);
    assert_eq!(outcome.cards().count(), 0);
}

#[test]
#[should_panic(expected = "not in the roster")]
fn unknown_participant_panics() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut players = vec![player(0, &[card(Suit::Spades, 9)])];
    let _ = resolve_round(&mut players, &[0, 4], &mut rng);
}

#[test]
fn start_deals_whole_deck_into_pending() {
    let game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.state(), GameState::NotStarted);

    game.start(&mut ["Ada", "Grace"][..]).unwrap();
    assert_eq!(game.state(), GameState::InProgress);
    assert!(!game.has_ended());
    assert_eq!(game.active_players(), vec![0, 1]);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.player_name(0).as_deref(), Some("Ada"));
    assert_eq!(game.player_name(1).as_deref(), Some("Grace"));

    assert_eq!(game.player_count(), 2);

    let players = game.players.lock();
    for seat in players.iter() {
        assert_eq!(seat.hand.active_len(), 0);
        assert_eq!(seat.hand.pending_len(), DECK_SIZE / 2);
        assert_eq!(seat.hand.pending().len(), DECK_SIZE / 2);
        assert_eq!(seat.hand.active().count(), 0);
        assert_eq!(seat.games_won, 0);
    }
}

#[test]
fn name_source_can_query_the_match() {
    let game = Game::new(GameOptions::default(), 4);
    game.start(&mut from_fn(|index| {
        format!("{:?}-{index}-{}", game.state(), game.has_ended())
    }))
    .unwrap();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.player_name(0).as_deref(), Some("NotStarted-0-false"));
    assert_eq!(game.player_name(1).as_deref(), Some("NotStarted-1-false"));
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn start_asks_for_each_name_in_seat_order() {
    let game = Game::new(GameOptions::default(), 1);
    let mut asked = Vec::new();
    game.start(&mut from_fn(|index| {
        asked.push(index);
        format!("Seat {index}")
    }))
    .unwrap();

    assert_eq!(asked, vec![0, 1]);
    assert_eq!(game.player(1).unwrap().name, "Seat 1");
}

#[test]
fn missing_names_fall_back_to_numbered_defaults() {
    let game = Game::new(GameOptions::default(), 1);
    game.start(&mut ["Solo"][..]).unwrap();
    assert_eq!(game.player_name(1).as_deref(), Some("Player 2"));
}

#[test]
fn state_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.progress_turn().unwrap_err(), TurnError::InvalidState);

    game.start(&mut ["A", "B"][..]).unwrap();
    assert_eq!(
        game.start(&mut ["A", "B"][..]).unwrap_err(),
        SetupError::InvalidState
    );
}

#[test]
fn player_count_is_validated() {
    let game = Game::new(GameOptions::default().with_players(1), 1);
    assert_eq!(
        game.start(&mut ["A"][..]).unwrap_err(),
        SetupError::TooFewPlayers
    );
    assert_eq!(game.state(), GameState::NotStarted);

    let game = Game::new(GameOptions::default().with_players(DECK_SIZE + 1), 1);
    assert_eq!(
        game.start(&mut ["A"][..]).unwrap_err(),
        SetupError::TooManyPlayers
    );
}

#[test]
fn prepared_roster_is_validated() {
    let options = GameOptions::default();

    let err = Game::with_players(options.clone(), 1, vec![player(0, &[])]).err();
    assert_eq!(err, Some(SetupError::TooFewPlayers));

    let err = Game::with_players(options.clone(), 1, vec![player(0, &[]), player(0, &[])]).err();
    assert_eq!(err, Some(SetupError::DuplicatePlayerIndex(0)));

    let err = Game::with_players(options, 1, vec![player(0, &[]), player(5, &[])]).err();
    assert_eq!(err, Some(SetupError::PlayerIndexOutOfRange(5)));
}

#[test]
fn winner_collects_cards_and_tally() {
    let game = Game::with_players(
        GameOptions::default(),
        3,
        vec![
            player(1, &[card(Suit::Hearts, 2), card(Suit::Clubs, 3)]),
            player(0, &[card(Suit::Spades, 14)]),
        ],
    )
    .unwrap();

    let result = game.progress_turn().unwrap();
    assert_eq!(result.turn, 1);
    assert_eq!(result.winner, Some(0));
    assert_eq!(result.cards_won(), 2);
    assert!(result.eliminated.is_empty());
    assert_eq!(result.match_winner, None);

    let players = game.players.lock();
    assert_eq!(players[0].hand.pending_len(), 2);
    assert_eq!(players[0].games_won, 1);
    assert_eq!(players[1].hand.len(), 1);
    assert_eq!(players[1].games_won, 0);
    drop(players);

    assert_eq!(game.current_player(), 1);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn war_turn_reports_depths_and_ends_match() {
    let game = Game::with_players(
        GameOptions::default(),
        3,
        vec![
            player(0, &[card(Suit::Spades, 10), card(Suit::Spades, 5)]),
            player(1, &[card(Suit::Clubs, 10), card(Suit::Clubs, 3)]),
        ],
    )
    .unwrap();

    let result = game.progress_turn().unwrap();
    assert_eq!(result.wars, 1);
    assert_eq!(result.winner, Some(0));
    assert_eq!(result.cards_won(), 4);
    let depths: Vec<usize> = result.played.iter().map(|p| p.depth).collect();
    assert_eq!(depths, vec![0, 0, 1, 1]);

    assert_eq!(result.eliminated, vec![1]);
    assert_eq!(result.match_winner, Some(0));
    assert!(game.has_ended());

    let winner = game.winner().unwrap();
    assert_eq!(winner.name, "P0");
    assert_eq!(winner.cards, 4);
    assert_eq!(winner.games_won, 1);

    assert_eq!(game.progress_turn().unwrap_err(), TurnError::InvalidState);
    assert!(game.has_ended());
    assert_eq!(game.turns(), 1);
}

#[test]
fn full_match_conserves_cards_and_ends_once() {
    for seed in 0..5 {
        let game = Game::new(GameOptions::default(), seed);
        game.start(&mut ["Ada", "Grace"][..]).unwrap();
        assert_eq!(game.total_cards(), DECK_SIZE);

        let results = play_to_end(&game);
        assert_eq!(game.turns(), results.len());

        let endings: Vec<&TurnResult> = results
            .iter()
            .filter(|result| result.match_winner.is_some())
            .collect();
        assert_eq!(endings.len(), 1);
        assert_eq!(endings[0].turn, results.len());

        let winner = game.winner().unwrap();
        assert_eq!(winner.cards, DECK_SIZE);
        assert_eq!(game.active_players(), vec![winner.index]);

        let standings = game.standings();
        let total_won: usize = standings.iter().map(|s| s.games_won).sum();
        assert_eq!(total_won, results.len());

        assert!(game.progress_turn().is_err());
        assert!(game.has_ended());
    }
}

#[test]
fn same_seed_replays_same_match() {
    let first = Game::new(GameOptions::default(), 9);
    let second = Game::new(GameOptions::default(), 9);
    first.start(&mut ["A", "B"][..]).unwrap();
    second.start(&mut ["A", "B"][..]).unwrap();

    assert_eq!(play_to_end(&first), play_to_end(&second));
    assert_eq!(first.winner(), second.winner());
}

#[test]
fn three_player_match_finishes() {
    let game = Game::new(GameOptions::default().with_players(3), 17);
    game.start(&mut ["A", "B", "C"][..]).unwrap();

    let dealt: Vec<usize> = game.standings().iter().map(|s| s.cards).collect();
    assert_eq!(dealt, vec![18, 17, 17]);

    play_to_end(&game);
    assert_eq!(game.winner().unwrap().cards, DECK_SIZE);
}
