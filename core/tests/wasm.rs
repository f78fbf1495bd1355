#![cfg(target_arch = "wasm32")]

use sapper_core::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn seeded_game_is_reproducible_in_browser() {
    let a = GameEngine::new_game(GameConfig::default(), 2024).unwrap();
    let b = GameEngine::new_game(GameConfig::default(), 2024).unwrap();

    assert_eq!(a.mine_layout(), b.mine_layout());
    assert_eq!(a.mine_layout().mine_coords().len(), 10);
}

#[wasm_bindgen_test]
fn reveal_and_flag_drive_the_status_line() {
    let layout = MineLayout::from_mine_coords(3, &[(2, 2)]).unwrap();
    let mut engine = GameEngine::new(layout);

    assert_eq!(engine.flag_tile((2, 2)).unwrap(), MarkOutcome::Changed);
    assert_eq!(engine.snapshot().status_line, "Mines left: 0");

    assert_eq!(engine.reveal_tile((0, 0)).unwrap(), RevealOutcome::Won);
    assert_eq!(engine.snapshot().status_line, "You Win!");
}

#[wasm_bindgen_test]
fn mine_hit_exposes_layout() {
    let layout = MineLayout::from_mine_coords(3, &[(0, 0), (2, 2)]).unwrap();
    let mut engine = GameEngine::new(layout);

    assert_eq!(engine.reveal_tile((2, 2)).unwrap(), RevealOutcome::HitMine);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status_line, "You Lose!");
    assert_eq!(snapshot.tile((0, 0)).unwrap().status, TileStatus::ExplodedMine);
    assert_eq!(snapshot.triggered_mine, Some((2, 2)));
}
