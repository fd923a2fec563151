//! Plays a batch of engine matches in parallel and reports the results
//!
//! Usage: `arena <player-1 kind> <player-2 kind> [games] [seed]`

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::time::Instant;

use connect4_engine::{
    game::{play_match, GameState},
    player::PlayerKind,
    PlayerId, SearchConfig,
};

const DEFAULT_GAMES: usize = 100;
const DEFAULT_SEED: u64 = 0xC0_44EC7;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        return Err(anyhow!(
            "usage: arena <player-1 kind> <player-2 kind> [games] [seed]"
        ));
    }
    let kinds = (args[0].parse::<PlayerKind>()?, args[1].parse::<PlayerKind>()?);
    if kinds.0 == PlayerKind::Human || kinds.1 == PlayerKind::Human {
        return Err(anyhow!("human players cannot play in the arena"));
    }
    let games = match args.get(2) {
        Some(games) => games.parse::<usize>()?,
        None => DEFAULT_GAMES,
    };
    let seed = match args.get(3) {
        Some(seed) => seed.parse::<u64>()?,
        None => DEFAULT_SEED,
    };
    let config = SearchConfig::default().with_env_overrides()?;

    println!(
        "Playing {} games, player 1: {}, player 2: {}",
        games, kinds.0, kinds.1
    );

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({eta})"),
    );

    let start = Instant::now();
    let results = (0..games)
        .into_par_iter()
        .map(|game_index| -> Result<(GameState, usize)> {
            // every game gets its own reproducible random stream per seat
            let game_seed = seed.wrapping_add(2 * game_index as u64);
            let seeds = (game_seed, game_seed.wrapping_add(1));
            let mut player_one = kinds.0.build(PlayerId::One, config, Some(seeds.0));
            let mut player_two = kinds.1.build(PlayerId::Two, config, Some(seeds.1));

            let game = play_match(&mut *player_one, &mut *player_two, |_| {})?;
            progress.inc(1);
            Ok((game.state(), game.moves().len()))
        })
        .collect::<Result<Vec<(GameState, usize)>>>()?;
    progress.finish();

    let count = |state: GameState| results.iter().filter(|(s, _)| *s == state).count();
    let total_moves: usize = results.iter().map(|(_, length)| *length).sum();
    let mean_length = total_moves as f64 / results.len().max(1) as f64;

    println!(
        "Player 1 ({}) wins: {}\nPlayer 2 ({}) wins: {}\nDraws: {}",
        kinds.0,
        count(GameState::PlayerOneWin),
        kinds.1,
        count(GameState::PlayerTwoWin),
        count(GameState::Draw)
    );
    println!(
        "Mean game length: {:.1} moves, total time: {:.2}s",
        mean_length,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
