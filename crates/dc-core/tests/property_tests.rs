use std::collections::{HashSet, VecDeque};

use dc_core::dungeon::{GenerationConfig, Level, Player, TileKind};
use dc_core::{Direction, Game, GameRng};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn level(seed: u64) -> Level {
    let mut rng = GameRng::new(seed);
    let mut level = Level::generate(&GenerationConfig::default(), &mut rng).unwrap();
    level.put_player(Player::new(), &mut rng);
    level
}

proptest! {
    #[test]
    fn room_floor_is_surrounded_by_room(seed in any::<u64>()) {
        let level = level(seed);
        for room in level.rooms() {
            let points = room.points();
            for p in room.inner_points() {
                prop_assert!(points.contains(&p));
                for n in p.surrounding() {
                    prop_assert!(room.contains(n));
                }
            }
        }
    }

    #[test]
    fn walkable_points_are_connected(seed in any::<u64>()) {
        let level = level(seed);
        let walkable = level.walkable_points();
        let start = walkable[0];

        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in p.surrounding() {
                if level.is_walkable(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        prop_assert!(walkable.iter().all(|p| seen.contains(p)));
        prop_assert!(walkable.iter().all(|&p| level.tile_at(p) != TileKind::Void));
    }

    #[test]
    fn moves_stay_on_walkable_points(
        seed in any::<u64>(),
        steps in prop::collection::vec(0usize..4, 0..200),
    ) {
        let mut game = Game::with_seed(seed).unwrap();
        let dirs: Vec<Direction> = Direction::iter().collect();
        for i in steps {
            let before = game.player_position();
            game.handle_move(dirs[i]);
            let after = game.player_position();
            prop_assert!(game.level().is_walkable(after));
            prop_assert!(after == before || after.is_adjacent(before));
        }
    }

    #[test]
    fn same_seed_same_tiles(seed in any::<u64>()) {
        prop_assert_eq!(level(seed).get_tiles(), level(seed).get_tiles());
    }
}
