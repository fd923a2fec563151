use anyhow::Result;
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Write};

use connect4_engine::{
    game::{Game, GameState},
    player::{Player, PlayerKind},
    PlayerId, SearchConfig,
};

mod display;
use display::display;

fn choose_kind(player: PlayerId) -> Result<PlayerKind> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!(
            "Who controls player {}? [h]uman, [r]andom, [a]lphabeta, [e]xpectimax: ",
            player
        );
        stdout().flush().expect("failed to flush to stdout!");
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow::anyhow!("input closed"));
        }
        match buffer.parse::<PlayerKind>() {
            Ok(kind) => return Ok(kind),
            Err(_) => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SearchConfig::default().with_env_overrides()?;

    println!("Welcome to Connect 4\n");

    let kinds = (choose_kind(PlayerId::One)?, choose_kind(PlayerId::Two)?);
    let mut players: [Box<dyn Player + Send>; 2] = [
        kinds.0.build(PlayerId::One, config, None),
        kinds.1.build(PlayerId::Two, config, None),
    ];
    let watching = kinds.0 != PlayerKind::Human && kinds.1 != PlayerKind::Human;

    let seats = [kinds.0, kinds.1];
    let mut game = Game::new();

    // game loop
    loop {
        display(game.board()).expect("Failed to draw board!");

        match game.state() {
            GameState::Playing => {
                let seat = match game.to_move() {
                    PlayerId::One => 0,
                    PlayerId::Two => 1,
                };
                let player = &mut players[seat];

                let next_move = if seats[seat] == PlayerKind::Human {
                    player.get_move(game.board())?
                } else {
                    // slow down play if nobody is at the keyboard
                    if watching {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message(&format!("{} is thinking...", player.describe()));
                    spinner.enable_steady_tick(100);
                    let next_move = player.get_move(game.board());
                    spinner.finish_and_clear();
                    next_move?
                };

                println!("{} plays column {}", player.describe(), next_move);

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.moves());
    Ok(())
}
