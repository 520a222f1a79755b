//! Serialized shape of match state handed to rendering hosts.

use marklines::{Coordinate, Mark, MatchController, MatchStatus, Player};
use serde_json::json;

fn classic() -> MatchController {
    MatchController::new(
        3,
        3,
        vec![Player::new("Ada", Mark::X), Player::new("Bo", Mark::O)],
        3,
    )
    .expect("Valid classic match")
}

#[test]
fn test_in_progress_json() {
    let value = serde_json::to_value(classic().status()).unwrap();
    assert_eq!(value, json!({ "state": "in_progress" }));
}

#[test]
fn test_won_json() {
    let mut game = classic();
    let status = game.replay([
        Coordinate::new(0, 0),
        Coordinate::new(1, 1),
        Coordinate::new(0, 1),
        Coordinate::new(1, 0),
        Coordinate::new(0, 2),
    ]);

    let value = serde_json::to_value(&status).unwrap();
    assert_eq!(
        value,
        json!({
            "state": "won",
            "winner": { "name": "Ada", "mark": "X" },
            "line": {
                "origin": { "row": 0, "col": 2 },
                "start": { "row": 0, "col": 0 },
                "end": { "row": 0, "col": 2 },
                "axis": "horizontal",
                "length": 3
            }
        })
    );

    let back: MatchStatus = serde_json::from_value(value).unwrap();
    assert_eq!(back, status);
}

#[test]
fn test_grid_json() {
    let mut game = MatchController::new(
        1,
        2,
        vec![Player::new("Ada", Mark::X), Player::new("Bo", Mark::O)],
        2,
    )
    .unwrap();
    game.apply_move(Coordinate::new(0, 1));

    let value = serde_json::to_value(game.grid()).unwrap();
    assert_eq!(
        value,
        json!({ "rows": 1, "cols": 2, "cells": ["Empty", { "Marked": "X" }] })
    );
}
