use clap::Parser;
use sapper_core::{CellCount, Coord, GameConfig, GameEngine};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Side length of the board
    #[arg(long, default_value_t = sapper_core::DEFAULT_BOARD_SIZE)]
    size: Coord,

    /// How many mines to hide
    #[arg(long, default_value_t = sapper_core::DEFAULT_MINE_COUNT)]
    mines: CellCount,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let config = GameConfig::new(args.size, args.mines).expect("Invalid board arguments");
    let seed = args
        .seed
        .as_deref()
        .map_or_else(utils::js_random_seed, utils::seed_from_str);
    let engine = GameEngine::new_game(config, seed).expect("Could not create game");

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { engine })
        .render();
}
