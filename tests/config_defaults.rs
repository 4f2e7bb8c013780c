use marbles::core::board::{Board, BoardSettings, ResetControl};
use marbles::core::config::GameConfig;

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn default_board_reserves_hud_band_and_fits_reset() {
    let cfg = GameConfig::default();
    let board = Board::new(BoardSettings::from_config(&cfg));
    let area = board.area();
    assert_eq!(area.max.y, cfg.window.height * 0.5);
    assert_eq!(area.min.y, -cfg.window.height * 0.5 + cfg.board.hud_band);
    assert!(board.grid_capacity() > 100);

    let reset = ResetControl::top_left(&area, cfg.board.reset_size);
    assert!(area.contains(reset.center));
}

#[test]
fn partial_config_keeps_other_defaults() {
    let cfg = GameConfig::from_ron_str("(scoring: (exponent_cap: 10))").expect("partial config");
    assert_eq!(cfg.scoring.exponent_cap, 10);
    assert_eq!(cfg.scoring.min_match, 3);
    assert_eq!(cfg.board, GameConfig::default().board);
}
