//! Wall layouts and solvable benchmark maps for
//! [`gridfinder_paths::Grid`].
//!
//! - [`generate_walls`] produces a wall list for one of the [`WallKind`]s;
//!   apply it with [`Grid::apply_walls`](gridfinder_paths::Grid::apply_walls).
//! - [`EndpointLayout`] gives the five canonical start/finish placements.
//! - [`generate_map`] combines both and retries until BFS finds a path.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so seeded
//! generators give reproducible maps.

mod layout;
mod mapgen;
mod walls;

pub use layout::EndpointLayout;
pub use mapgen::{DEFAULT_MAX_ATTEMPTS, GeneratedMap, MapError, generate_all_maps, generate_map};
pub use walls::{
    RANDOM_DENSITY, UnknownWallKind, WallKind, generate_walls, horizontal_walls, random_walls,
    recursive_division, vertical_walls,
};
