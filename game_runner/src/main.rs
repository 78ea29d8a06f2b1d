use lib_agents::{MatchConfig, ReversiGame};
use lib_boardgame::GameState;
use lib_printer::out;

const DEFAULT_CONFIG_PATH: &str = "othello.json";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = MatchConfig::load_or_default(&config_path);
    lib_printer::set_quiet(config.quiet);

    let (black, white) = config.build_players()?;
    out!("Black: {:?}, White: {:?}", black.kind(), white.kind());

    let mut game = ReversiGame::create(black, white)?;
    let game_result = game.play_to_end()?;

    let state = game.game_state();
    out!("{}", state.human_friendly());

    // the result line is printed even when quiet
    println!(
        "Result: {} (Black {}, White {})",
        game_result,
        state.black_score(),
        state.white_score()
    );

    Ok(())
}
