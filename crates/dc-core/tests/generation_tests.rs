use std::collections::{HashMap, HashSet, VecDeque};

use dc_core::dungeon::{GenerationConfig, Level, Player, TileKind};
use dc_core::{Direction, Game, GameLoopResult, GameRng, MoveOutcome, Point};

fn level(seed: u64) -> Level {
    let mut rng = GameRng::new(seed);
    let mut level = Level::generate(&GenerationConfig::default(), &mut rng).unwrap();
    level.put_player(Player::new(), &mut rng);
    level
}

/// Shortest walkable path between two points, both ends included
fn walk_path(level: &Level, from: Point, to: Point) -> Option<Vec<Point>> {
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    came_from.insert(from, from);

    while let Some(p) = queue.pop_front() {
        if p == to {
            let mut path = vec![p];
            let mut cur = p;
            while cur != from {
                cur = came_from[&cur];
                path.push(cur);
            }
            path.reverse();
            return Some(path);
        }
        for n in p.surrounding() {
            if level.is_walkable(n) && !came_from.contains_key(&n) {
                came_from.insert(n, p);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn test_default_level_shape() {
    let level = level(42);
    assert_eq!(level.rooms().len(), 6);
    assert_eq!(level.corridors().len(), 7);
    assert!(!level.doors().is_empty());
    assert_eq!(level.staircases().len(), 1);
    assert!(!level.staircases()[0].up);

    let pos = level.player_position().unwrap();
    assert!(level.rooms().iter().any(|r| r.is_inner(pos)));
}

#[test]
fn test_rooms_stay_in_their_cells() {
    let config = GenerationConfig::default();
    for seed in 0..50 {
        let level = level(seed);
        for (room, (a, b)) in level.rooms().iter().zip(config.cells()) {
            assert!(room.width >= 3 && room.height >= 3);
            assert!(room.x >= a.x && room.y >= a.y);
            assert!(room.x + room.width < b.x, "seed {seed}: {room:?}");
            assert!(room.y + room.height < b.y, "seed {seed}: {room:?}");
        }
    }
}

#[test]
fn test_every_walkable_point_is_reachable() {
    for seed in 0..30 {
        let level = level(seed);
        let start = level.player_position().unwrap();

        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in p.surrounding() {
                if level.is_walkable(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        for p in level.walkable_points() {
            assert!(seen.contains(&p), "seed {seed}: {p} unreachable");
        }
    }
}

#[test]
fn test_corridors_end_on_their_room_walls() {
    for seed in 0..30 {
        let level = level(seed);
        for corridor in level.corridors() {
            let a = &level.rooms()[corridor.room_a];
            let b = &level.rooms()[corridor.room_b];
            assert!(a.is_wall(corridor.start()));
            assert!(b.is_wall(corridor.end()));
            assert!(
                corridor
                    .points()
                    .windows(2)
                    .all(|w| w[0].is_adjacent(w[1]))
            );
        }
    }
}

#[test]
fn test_doors_cut_walls_along_corridors() {
    for seed in 0..30 {
        let level = level(seed);
        let mut positions = HashSet::new();
        for door in level.doors() {
            assert!(positions.insert(door.pos), "seed {seed}: duplicate door");
            assert_eq!(level.rooms().iter().filter(|r| r.is_wall(door.pos)).count(), 1);
            assert!(!level.rooms().iter().any(|r| r.is_inner(door.pos)));
            assert!(level.corridors().iter().any(|c| c.points().contains(&door.pos)));
            assert!(level.is_walkable(door.pos));
        }
        for corridor in level.corridors() {
            assert!(positions.contains(&corridor.start()));
            assert!(positions.contains(&corridor.end()));
        }
    }
}

#[test]
fn test_walkable_points_have_tiles() {
    for seed in 0..20 {
        let level = level(seed);
        for p in level.walkable_points() {
            assert!(level.in_bounds(p));
            assert_ne!(level.tile_at(p), TileKind::Void, "seed {seed}: {p}");
        }
    }
}

#[test]
fn test_staircase_on_room_floor() {
    for seed in 0..50 {
        let level = level(seed);
        let stairs = level.staircases()[0];
        assert!(level.rooms().iter().any(|r| r.is_inner(stairs.pos)));
        assert!(level.is_walkable(stairs.pos));
        assert!(level.is_staircase(stairs.pos));
    }
}

#[test]
fn test_tiles_match_elements() {
    let level = level(17);
    let player = level.player_position().unwrap();
    let stairs = level.staircases()[0].pos;

    for (i, tile) in level.get_tiles().iter().enumerate() {
        let p = Point::new(i as i32 % level.width(), i as i32 / level.width());
        let expected = if p == player {
            TileKind::Player
        } else if p == stairs {
            TileKind::StaircaseDown
        } else if level.doors().iter().any(|d| d.pos == p) {
            TileKind::Door
        } else if level.corridors().iter().any(|c| c.points().contains(&p)) {
            TileKind::Floor
        } else if level.rooms().iter().any(|r| r.is_inner(p)) {
            TileKind::Floor
        } else if level.rooms().iter().any(|r| r.is_wall(p)) {
            TileKind::Wall
        } else {
            TileKind::Void
        };
        assert_eq!(*tile, expected, "at {p}");
    }
}

#[test]
fn test_queries_do_not_change_state() {
    let level = level(5);
    let first = level.get_tiles();
    let visible = level.get_visible_tiles();
    let _ = level.get_gamepoints();
    let _ = level.walkable_points();
    assert_eq!(level.get_tiles(), first);
    assert_eq!(level.get_visible_tiles(), visible);
}

#[test]
fn test_same_seed_same_level() {
    let a = level(1234);
    let b = level(1234);
    assert_eq!(a.rooms(), b.rooms());
    assert_eq!(a.player_position(), b.player_position());
    assert_eq!(a.get_tiles(), b.get_tiles());

    let c = level(4321);
    assert_ne!(a.get_tiles(), c.get_tiles());
}

#[test]
fn test_blocked_move_keeps_position() {
    let mut game = Game::with_seed(8).unwrap();

    // walk west until something stops us
    let mut guard = 0;
    while game.handle_move(Direction::West) == MoveOutcome::Moved {
        guard += 1;
        assert!(guard < 100);
    }
    let pos = game.player_position();
    assert!(game.level().is_walkable(pos));
    assert!(!game.level().is_walkable(pos + Direction::West.delta()));
    assert_eq!(game.handle_move(Direction::West), MoveOutcome::Blocked);
    assert_eq!(game.player_position(), pos);
}

#[test]
fn test_walk_to_staircase_and_descend() {
    for seed in [3, 21, 99] {
        let mut game = Game::with_seed(seed).unwrap();
        let start = game.player_position();
        let stairs = game.level().staircases()[0].pos;
        let path = walk_path(game.level(), start, stairs).unwrap();

        for step in path.windows(2) {
            let dir = Direction::between(step[0], step[1]).unwrap();
            assert_eq!(game.handle_move(dir), MoveOutcome::Moved);
            assert_eq!(game.player_position(), step[1]);
        }

        assert_eq!(game.request_descend(), MoveOutcome::TransitionRequested);
        assert_eq!(game.handle_user_input('d'), GameLoopResult::Descended);
        assert_eq!(game.depth(), 2);

        let pos = game.player_position();
        assert!(game.level().rooms().iter().any(|r| r.is_inner(pos)));
        assert_eq!(game.level().tile_at(pos), TileKind::Player);
    }
}

#[test]
fn test_use_staircase_regenerates() {
    let mut game = Game::with_seed(77).unwrap();
    let stairs = game.level().staircases()[0].pos;
    let path = walk_path(game.level(), game.player_position(), stairs).unwrap();
    for step in path.windows(2) {
        game.handle_move(Direction::between(step[0], step[1]).unwrap());
    }

    let old_rooms = game.level().rooms().to_vec();
    assert!(game.use_staircase());
    assert_ne!(game.level().rooms(), old_rooms.as_slice());
    assert_eq!(game.level().staircases().len(), 1);
}

#[test]
fn test_many_seeds_generate() {
    for seed in 0..200 {
        let game = Game::with_seed(seed).unwrap();
        let level = game.level();
        assert_eq!(level.rooms().len(), 6);
        assert_eq!(level.staircases().len(), 1);
        assert!(level.doors().len() >= 2);
        assert_eq!(level.tile_at(game.player_position()), TileKind::Player);
    }
}

#[test]
fn test_custom_grid_layout() {
    let config = GenerationConfig {
        width: 40,
        height: 20,
        room_rows: 1,
        room_cols: 2,
        connections: vec![(0, 1)],
    };
    let mut game = Game::new(config, GameRng::new(6)).unwrap();
    assert_eq!(game.level().rooms().len(), 2);
    assert_eq!(game.level().corridors().len(), 1);
    assert_eq!(game.level().get_tiles().len(), 40 * 20);
    game.generate_level();
    assert_eq!(game.level().width(), 40);
}
