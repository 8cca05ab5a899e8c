use isobattle::{Game, Mode, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;

fn json(game: &Game) -> Value {
    serde_json::from_str(&game.snapshot().to_json().unwrap()).unwrap()
}

#[test]
fn placing_snapshot() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut game = Game::new(&mut rng).unwrap();
    game.place_next(2, 2).unwrap();
    let v = json(&game);

    assert_eq!(v["mode"], "placing");
    assert_eq!(v["placement"]["next_ship_length"], 4);
    assert_eq!(v["placement"]["orientation"], "vertical");
    assert_eq!(v["player"]["remaining_health"], 5);
    assert_eq!(v["player"]["ships"][0]["length"], 5);
    assert_eq!(v["player"]["ships"][0]["hits"], 0);
    assert_eq!(v["player"]["ships"][0]["cells"][0]["col"], 2);
    assert_eq!(v["player"]["ships"][0]["cells"][4]["row"], 6);
    assert_eq!(v["enemy"]["remaining_health"], 17);
    assert_eq!(v["shots"]["player"], 0);
    assert_eq!(v["shots"]["ai"], 0);
    assert!(v["winner"].is_null());
    assert!(v["coordinate_system"].is_string());
    assert_eq!(v["message"], game.message());
}

#[test]
fn enemy_ship_cells_stay_hidden() {
    let mut rng = SmallRng::seed_from_u64(22);
    let mut game = Game::new(&mut rng).unwrap();
    let snapshot = game.snapshot();
    assert!(snapshot.enemy.ships.iter().all(|s| s.cells.is_none()));
    let v = json(&game);
    for ship in v["enemy"]["ships"].as_array().unwrap() {
        assert!(ship.get("cells").is_none());
        assert!(ship["length"].is_u64());
    }

    game.auto_place(&mut rng).unwrap();
    game.start_battle().unwrap();
    let report = game.auto_fire(&mut rng).unwrap();
    let v = json(&game);
    let listed = if report.outcome.is_hit() {
        &v["enemy"]["hit_cells"]
    } else {
        &v["enemy"]["miss_cells"]
    };
    assert_eq!(listed[0]["col"], report.target.col);
    assert_eq!(listed[0]["row"], report.target.row);
    assert!(v["placement"]["next_ship_length"].is_null());
    assert_eq!(v["mode"], "battle");
}

#[test]
fn finished_game_names_winner() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut game = Game::new(&mut rng).unwrap();
    game.auto_place(&mut rng).unwrap();
    game.start_battle().unwrap();
    while game.mode() == Mode::Battle {
        game.auto_fire(&mut rng).unwrap();
    }
    let v = json(&game);
    assert_eq!(v["mode"], "gameover");
    let expected = match game.winner().unwrap() {
        Side::Player => "player",
        Side::Enemy => "enemy",
    };
    assert_eq!(v["winner"], expected);
    assert_eq!(v["shots"]["player"], game.player_shots());
}
