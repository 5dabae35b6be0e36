//! Level structure and generation pipeline
//!
//! A level is built in fixed stages (rooms, corridors, doors, staircases,
//! then the player) and afterwards only answers queries and tracks what the
//! player has seen. Tile lookups walk an explicit priority list: the player
//! first, then staircases, doors, corridors and finally rooms, so a door
//! shows over the wall it cuts and a staircase over the floor it sits on.

use strum::Display;

use super::config::GenerationConfig;
use super::corridor::Corridor;
use super::door::{Door, generate_doors};
use super::element::{ElementRef, GamePoint, MapElement, TileKind};
use super::player::Player;
use super::room::Room;
use super::staircase::{Staircase, generate_staircases};
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::rng::GameRng;

/// Progress of a level through the generation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum GenerationStage {
    Empty,
    RoomsGenerated,
    CorridorsGenerated,
    DoorsGenerated,
    StaircasesGenerated,
    PlayerPlaced,
}

/// Complete level structure
#[derive(Debug, Clone)]
pub struct Level {
    width: i32,
    height: i32,
    stage: GenerationStage,

    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    doors: Vec<Door>,
    staircases: Vec<Staircase>,
    player: Option<Player>,

    /// Highest priority first
    elements: Vec<ElementRef>,

    /// Cells the player has seen, row-major
    explored: Vec<bool>,
}

impl Level {
    /// Run the generation pipeline up to (not including) player placement
    pub fn generate(config: &GenerationConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    /// Pipeline body for a config that already passed validation
    pub(crate) fn build(config: &GenerationConfig, rng: &mut GameRng) -> Self {
        let mut level = Self::empty(config.width, config.height);
        level.generate_rooms(config, rng);
        level.generate_corridors(&config.connections);
        level.generate_doors();
        level.generate_staircases(rng);
        level
    }

    fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            stage: GenerationStage::Empty,
            rooms: Vec::new(),
            corridors: Vec::new(),
            doors: Vec::new(),
            staircases: Vec::new(),
            player: None,
            elements: Vec::new(),
            explored: vec![false; width.max(0) as usize * height.max(0) as usize],
        }
    }

    fn advance(&mut self, from: GenerationStage, to: GenerationStage) {
        debug_assert_eq!(self.stage, from, "generation stage out of order");
        self.stage = to;
        log::debug!("level stage: {to}");
    }

    /// Add a block of terrain ahead of all earlier terrain, behind the player
    fn register<I: IntoIterator<Item = ElementRef>>(&mut self, refs: I) {
        let offset = usize::from(self.elements.first() == Some(&ElementRef::Player));
        self.elements.splice(offset..offset, refs);
    }

    fn generate_rooms(&mut self, config: &GenerationConfig, rng: &mut GameRng) {
        self.rooms = config
            .cells()
            .map(|(a, b)| Room::generate(a, b, rng))
            .collect();
        self.register((0..self.rooms.len()).map(ElementRef::Room));
        log::debug!("generated {} rooms", self.rooms.len());
        self.advance(GenerationStage::Empty, GenerationStage::RoomsGenerated);
    }

    fn generate_corridors(&mut self, connections: &[(usize, usize)]) {
        self.corridors = connections
            .iter()
            .map(|&(a, b)| Corridor::generate(&self.rooms, a, b))
            .collect();
        self.register((0..self.corridors.len()).map(ElementRef::Corridor));
        log::debug!("generated {} corridors", self.corridors.len());
        self.advance(
            GenerationStage::RoomsGenerated,
            GenerationStage::CorridorsGenerated,
        );
    }

    fn generate_doors(&mut self) {
        self.doors = generate_doors(&self.rooms, &self.corridors);
        self.register((0..self.doors.len()).map(ElementRef::Door));
        log::debug!("generated {} doors", self.doors.len());
        self.advance(
            GenerationStage::CorridorsGenerated,
            GenerationStage::DoorsGenerated,
        );
    }

    fn generate_staircases(&mut self, rng: &mut GameRng) {
        self.staircases = generate_staircases(&self.rooms, rng);
        self.register((0..self.staircases.len()).map(ElementRef::Staircase));
        if let Some(stairs) = self.staircases.first() {
            log::debug!("staircase at {}", stairs.pos);
        }
        self.advance(
            GenerationStage::DoorsGenerated,
            GenerationStage::StaircasesGenerated,
        );
    }

    /// Drop the player into a random room
    ///
    /// The chosen room is revealed and the player goes to the front of the
    /// priority list. Placing again moves the existing player instead of
    /// adding a second one.
    pub fn put_player(&mut self, mut player: Player, rng: &mut GameRng) {
        let Some(index) = rng.choose_index(self.rooms.len()) else {
            log::warn!("level has no rooms, player not placed");
            return;
        };

        self.mark_room_seen(index);
        player.move_to(self.rooms[index].random_inner_point(rng));
        log::debug!("player placed in room {index} at {}", player.pos);

        self.player = Some(player);
        if self.elements.first() != Some(&ElementRef::Player) {
            self.elements.insert(0, ElementRef::Player);
        }
        self.stage = GenerationStage::PlayerPlaced;
    }

    /// Commit a player move that the caller already validated
    ///
    /// Marks the new cell and its neighbors as seen; stepping onto a room's
    /// floor reveals the whole room.
    pub(crate) fn move_player(&mut self, p: Point) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.move_to(p);

        self.mark_seen(p);
        for n in p.surrounding() {
            self.mark_seen(n);
        }
        if let Some(index) = self.rooms.iter().position(|r| r.is_inner(p)) {
            self.mark_room_seen(index);
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    fn mark_seen(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.explored[i] = true;
        }
    }

    fn mark_room_seen(&mut self, index: usize) {
        for p in self.rooms[index].points() {
            self.mark_seen(p);
        }
    }

    pub fn is_seen(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.explored[i])
    }

    fn resolve(&self, element: ElementRef) -> Option<&dyn MapElement> {
        match element {
            ElementRef::Player => self.player.as_ref().map(|p| p as &dyn MapElement),
            ElementRef::Staircase(i) => self.staircases.get(i).map(|s| s as &dyn MapElement),
            ElementRef::Door(i) => self.doors.get(i).map(|d| d as &dyn MapElement),
            ElementRef::Corridor(i) => self.corridors.get(i).map(|c| c as &dyn MapElement),
            ElementRef::Room(i) => self.rooms.get(i).map(|r| r as &dyn MapElement),
        }
    }

    /// Highest priority element claiming the point
    pub fn occupant_at(&self, p: Point) -> Option<ElementRef> {
        if !self.in_bounds(p) {
            return None;
        }
        self.elements
            .iter()
            .copied()
            .find(|&e| self.resolve(e).is_some_and(|el| el.exists_at(p)))
    }

    /// Tile at a point; `Void` where nothing is, including off the grid
    pub fn tile_at(&self, p: Point) -> TileKind {
        self.occupant_at(p)
            .and_then(|e| self.resolve(e))
            .map_or(TileKind::Void, |el| el.tile_at(p))
    }

    /// Same as [`Level::tile_at`]
    pub fn get_tile(&self, p: Point) -> TileKind {
        self.tile_at(p)
    }

    /// Every tile of the grid, row-major
    pub fn get_tiles(&self) -> Vec<TileKind> {
        self.grid_points().map(|p| self.tile_at(p)).collect()
    }

    /// Renderable state at a point, with the seen flag filled in
    pub fn gamepoint_at(&self, p: Point) -> GamePoint {
        match self.occupant_at(p) {
            Some(ElementRef::Player) => self
                .player
                .as_ref()
                .map_or(GamePoint::void(p), |player| player.gamepoint_at(p)),
            Some(e) => self
                .resolve(e)
                .map_or(GamePoint::void(p), |el| el.gamepoint_at(p))
                .with_seen(self.is_seen(p)),
            None => GamePoint::void(p),
        }
    }

    /// Every game point of the grid, row-major
    pub fn get_gamepoints(&self) -> Vec<GamePoint> {
        self.grid_points().map(|p| self.gamepoint_at(p)).collect()
    }

    /// Tiles as the player knows them: unseen cells are `Void`
    pub fn get_visible_tiles(&self) -> Vec<TileKind> {
        self.grid_points()
            .map(|p| self.gamepoint_at(p).visible_tile())
            .collect()
    }

    fn grid_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// Every cell a character may stand on
    ///
    /// Room floors followed by corridor paths. Doors and staircases are
    /// already among these. Not deduplicated.
    pub fn walkable_points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.rooms.iter().flat_map(Room::inner_points).collect();
        points.extend(self.corridors.iter().flat_map(|c| c.points().iter().copied()));
        points
    }

    /// Membership test equivalent to `walkable_points().contains(&p)`
    pub fn is_walkable(&self, p: Point) -> bool {
        self.rooms.iter().any(|r| r.is_inner(p)) || self.corridors.iter().any(|c| c.exists_at(p))
    }

    pub fn is_staircase(&self, p: Point) -> bool {
        self.staircase_at(p).is_some()
    }

    pub fn staircase_at(&self, p: Point) -> Option<&Staircase> {
        self.staircases.iter().find(|s| s.pos == p)
    }

    /// Index of the room whose rectangle holds the point
    pub fn room_at(&self, p: Point) -> Option<usize> {
        self.rooms.iter().position(|r| r.contains(p))
    }

    pub const fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn stage(&self) -> GenerationStage {
        self.stage
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn staircases(&self) -> &[Staircase] {
        &self.staircases
    }

    pub fn elements(&self) -> &[ElementRef] {
        &self.elements
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_position(&self) -> Option<Point> {
        self.player.map(|p| p.pos)
    }
}
