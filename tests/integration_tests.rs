use rand::{rngs::SmallRng, Rng, SeedableRng};
use tic_tac_toe::application::{Command, FrameLoop, GameSession, Layout};
use tic_tac_toe::domain::HISTORY_CAPACITY;
use tic_tac_toe::input::{process_input, FrameInput};
use tic_tac_toe::storage::records;
use tic_tac_toe::ui::{cell_center, create_buttons};
use tic_tac_toe::{FileStore, MemoryStore, Outcome, ScoreTally, Store};

fn fixed_clock() -> u64 {
    1_700_000_000_000
}

/// Play random legal moves until the game ends
fn play_random_game(session: &mut GameSession<impl Store>, rng: &mut SmallRng) {
    while !session.game().outcome().is_terminal() {
        let free: Vec<usize> = (0..9)
            .filter(|&i| session.game().board().get(i).is_some_and(|c| c.is_empty()))
            .collect();
        let index = free[rng.random_range(0..free.len())];
        assert!(session.apply_move(index));
    }
}

fn click_cell(layout: &Layout, index: usize) -> FrameInput {
    let (x, y) = cell_center(index / 3, index % 3);
    FrameInput {
        click: Some(layout.to_screen(x, y)),
        key_commands: Vec::new(),
    }
}

#[test]
fn random_playthroughs_keep_tallies_consistent() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = GameSession::with_clock(MemoryStore::new(), fixed_clock);

    for _ in 0..250 {
        play_random_game(&mut session, &mut rng);
        session.new_game();
    }

    let tally = session.tally();
    assert_eq!(tally.games_played, 250);
    assert_eq!(tally.x_wins + tally.o_wins + tally.draws, tally.games_played);
    assert_eq!(session.history().len(), HISTORY_CAPACITY);
}

#[test]
fn clicks_drive_a_full_game_through_the_frame_loop() {
    let layout = Layout::fit(1280.0, 900.0, 1.0);
    let buttons = create_buttons();
    let mut session = GameSession::with_clock(MemoryStore::new(), fixed_clock);
    let mut frame_loop = FrameLoop::new();
    frame_loop.start();

    // X takes the left column
    for index in [0, 1, 3, 2, 6] {
        let commands = process_input(&click_cell(&layout, index), &layout, &buttons);
        assert_eq!(commands, vec![Command::Move(index)]);
        frame_loop.step(&mut session, &commands);
    }
    assert_eq!(session.game().outcome(), Outcome::Won(tic_tac_toe::Player::X));
    assert_eq!(session.tally().x_wins, 1);

    // clicking after the win changes nothing
    let commands = process_input(&click_cell(&layout, 8), &layout, &buttons);
    frame_loop.step(&mut session, &commands);
    assert_eq!(session.game().board().occupied(), 5);

    let new_game = FrameInput {
        click: None,
        key_commands: vec![Command::NewGame],
    };
    frame_loop.step(&mut session, &process_input(&new_game, &layout, &buttons));
    assert_eq!(session.game().board().occupied(), 0);
    assert_eq!(session.tally().x_wins, 1);
    assert_eq!(frame_loop.frames(), 7);
}

#[test]
fn scores_survive_a_restart_on_disk() {
    let path = std::env::temp_dir().join(format!("ttt-integration-{}.json", std::process::id()));
    let mut rng = SmallRng::seed_from_u64(11);

    let expected = {
        let mut session = GameSession::with_clock(FileStore::open(&path).unwrap(), fixed_clock);
        for _ in 0..5 {
            play_random_game(&mut session, &mut rng);
            session.new_game();
        }
        (*session.tally(), session.history().clone())
    };

    let mut session = GameSession::with_clock(FileStore::open(&path).unwrap(), fixed_clock);
    assert_eq!(*session.tally(), expected.0);
    assert_eq!(*session.history(), expected.1);
    assert!(session.history().iter().all(|record| record.at == fixed_clock()));

    session.reset_scores();
    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(records::load_tally(&reopened).unwrap(), ScoreTally::default());
    assert_eq!(reopened.get(records::HISTORY_KEY).unwrap(), None);

    std::fs::remove_file(&path).unwrap();
}
