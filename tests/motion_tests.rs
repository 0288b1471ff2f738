mod common;

use common::{enclosed_box, WALL};
use gridcaster::motion::{can_occupy, update, Intents, Key, MotionSettings};
use gridcaster::{Cell, Game, Player, Scene, Vector2};
use std::f64::consts::PI;

fn open_scene_with_walls(width: usize, height: usize, walls: &[(usize, usize)]) -> Scene {
    let mut rows = vec![vec![Cell::Empty; width]; height];
    for &(col, row) in walls {
        rows[row][col] = WALL;
    }
    Scene::new(rows, WALL)
}

fn settings(speed: f64) -> MotionSettings {
    MotionSettings {
        speed,
        size: 0.3,
        turn_step: PI * 0.02,
    }
}

fn forward() -> Intents {
    Intents {
        forward: true,
        ..Intents::default()
    }
}

fn assert_near(actual: Vector2, expected: Vector2) {
    assert!(
        actual.sqr_distance_to(expected) < 1e-18,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_slides_along_wall_when_moving_diagonally() {
    let scene = open_scene_with_walls(5, 5, &[(2, 1)]);
    let mut player = Player::new(Vector2::new(1.5, 1.5), -PI / 4.0);

    update(&mut player, &scene, forward(), 0.4 * 2f64.sqrt(), &settings(1.0));

    // x is blocked by the wall at (2, 1); y keeps its share of the motion
    assert_near(player.position, Vector2::new(1.5, 1.1));
}

#[test]
fn test_moves_freely_in_open_space() {
    let scene = open_scene_with_walls(6, 6, &[]);
    let mut player = Player::new(Vector2::new(2.5, 2.5), 0.0);

    update(&mut player, &scene, forward(), 0.5, &settings(2.0));

    assert_near(player.position, Vector2::new(3.5, 2.5));
}

#[test]
fn test_collision_checks_destination_not_origin() {
    let scene = enclosed_box(5, 5);
    let mut player = Player::new(Vector2::new(3.5, 2.5), 0.0);
    assert!(can_occupy(&scene, player.position, 0.3));

    // Would place the footprint's right edge at 4.0 + 0.2 inside the border
    update(&mut player, &scene, forward(), 0.4, &settings(1.0));
    assert_near(player.position, Vector2::new(3.5, 2.5));

    // Short enough to stay clear of the border
    update(&mut player, &scene, forward(), 0.15, &settings(1.0));
    assert_near(player.position, Vector2::new(3.65, 2.5));
}

#[test]
fn test_backward_moves_against_heading() {
    let scene = enclosed_box(7, 7);
    let mut player = Player::new(Vector2::new(3.5, 3.5), PI / 2.0);
    let intents = Intents {
        backward: true,
        ..Intents::default()
    };

    update(&mut player, &scene, intents, 0.25, &settings(2.0));

    assert_near(player.position, Vector2::new(3.5, 3.0));
}

#[test]
fn test_backward_slides_too() {
    let scene = open_scene_with_walls(5, 5, &[(0, 1)]);
    // Heading down-right, so backward goes up-left into the wall at (0, 1)
    let mut player = Player::new(Vector2::new(1.5, 1.5), PI / 4.0);
    let intents = Intents {
        backward: true,
        ..Intents::default()
    };

    update(&mut player, &scene, intents, 0.4 * 2f64.sqrt(), &settings(1.0));

    assert_near(player.position, Vector2::new(1.5, 1.1));
}

#[test]
fn test_forward_and_backward_cancel() {
    let scene = enclosed_box(7, 7);
    let start = Vector2::new(3.5, 3.5);
    let mut player = Player::new(start, 0.3);
    let intents = Intents {
        forward: true,
        backward: true,
        ..Intents::default()
    };

    update(&mut player, &scene, intents, 0.1, &settings(3.0));

    assert!(player.position.sqr_distance_to(start) < 1e-20);
}

#[test]
fn test_turning_is_per_tick() {
    let scene = enclosed_box(5, 5);
    let motion = settings(1.0);
    let mut player = Player::new(Vector2::new(2.5, 2.5), 0.0);
    let intents = Intents {
        turn_right: true,
        ..Intents::default()
    };

    for dt in [0.0, 0.016, 1.0] {
        update(&mut player, &scene, intents, dt, &motion);
    }
    assert!((player.direction - 3.0 * motion.turn_step).abs() < 1e-12);

    let intents = Intents {
        turn_left: true,
        ..Intents::default()
    };
    for _ in 0..5 {
        update(&mut player, &scene, intents, 0.016, &motion);
    }
    assert!((player.direction + 2.0 * motion.turn_step).abs() < 1e-12);

    // Heading is never wrapped
    for _ in 0..200 {
        update(&mut player, &scene, intents, 0.016, &motion);
    }
    assert!(player.direction < -2.0 * PI);
}

#[test]
fn test_footprint_checks_all_corners() {
    let scene = open_scene_with_walls(4, 4, &[(2, 2)]);

    assert!(can_occupy(&scene, Vector2::new(1.5, 1.5), 0.3));
    assert!(!can_occupy(&scene, Vector2::new(1.75, 1.75), 0.3));
    assert!(!can_occupy(&scene, Vector2::new(2.5, 1.75), 0.3));
    // Outside the map counts as free
    assert!(can_occupy(&scene, Vector2::new(-3.0, 1.5), 0.3));
}

#[test]
fn test_game_first_tick_does_not_move() {
    let scene = enclosed_box(7, 7);
    let start = Vector2::new(3.5, 3.5);
    let mut game = Game::new(Player::new(start, 0.0), settings(2.0));
    game.intents.press(Key::Forward, false);

    assert_eq!(game.tick(&scene, 100.0), 0.0);
    assert_eq!(game.player.position, start);

    let dt = game.tick(&scene, 100.25);
    assert!((dt - 0.25).abs() < 1e-12);
    assert_near(game.player.position, Vector2::new(4.0, 3.5));

    game.intents.release(Key::Forward, false);
    game.tick(&scene, 101.0);
    assert_near(game.player.position, Vector2::new(4.0, 3.5));
}

#[test]
fn test_game_ignores_repeat_release() {
    let scene = enclosed_box(9, 5);
    let mut game = Game::new(Player::new(Vector2::new(2.5, 2.5), 0.0), settings(1.0));

    game.tick(&scene, 0.0);
    game.intents.press(Key::Forward, false);
    game.intents.release(Key::Forward, true);
    game.tick(&scene, 0.5);

    assert_near(game.player.position, Vector2::new(3.0, 2.5));
}
