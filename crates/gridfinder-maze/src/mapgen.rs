//! Validated map generation.
//!
//! Wall generators know nothing about reachability. The functions here
//! build a grid, place the endpoints, apply a wall layout and keep only
//! maps in which BFS finds a path, retrying otherwise.

use std::fmt;

use gridfinder_core::Pos;
use gridfinder_paths::{Grid, GridError, SearchError};
use rand::Rng;

use crate::layout::EndpointLayout;
use crate::walls::{WallKind, generate_walls};

/// Attempts made by [`generate_map`] callers that have no opinion.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// A solvable map, reset and ready to search.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub kind: WallKind,
    /// 1-based map number within its kind; selects the endpoint layout.
    pub number: usize,
    pub grid: Grid,
    pub start: Pos,
    pub finish: Pos,
    /// How many layouts were generated before this one was accepted.
    pub attempts: usize,
}

impl GeneratedMap {
    /// Identifier such as `random_3`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.kind, self.number)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.grid.nodes().filter(|n| n.is_wall()).count()
    }
}

/// Errors from map generation.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The grid or its endpoints could not be built.
    Grid(GridError),
    /// The validating search rejected the endpoints.
    Search(SearchError),
    /// No generated layout connected start and finish.
    Unsolvable { kind: WallKind, attempts: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Grid(e) => write!(f, "cannot build map grid: {e}"),
            MapError::Search(e) => write!(f, "cannot validate map: {e}"),
            MapError::Unsolvable { kind, attempts } => {
                write!(f, "failed to generate a solvable {kind} map after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Grid(e) => Some(e),
            MapError::Search(e) => Some(e),
            MapError::Unsolvable { .. } => None,
        }
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        MapError::Grid(e)
    }
}

impl From<SearchError> for MapError {
    fn from(e: SearchError) -> Self {
        MapError::Search(e)
    }
}

/// Generate a `rows × cols` map of the given kind whose endpoints follow
/// [`EndpointLayout::for_map`]`(map_number, …)`.
///
/// Each attempt builds a fresh grid, applies new walls and checks with BFS
/// that the finish is reachable. The accepted grid is reset before it is
/// returned.
pub fn generate_map(
    kind: WallKind,
    rows: i32,
    cols: i32,
    map_number: usize,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Result<GeneratedMap, MapError> {
    let EndpointLayout { start, finish } = EndpointLayout::for_map(map_number, rows, cols);

    for attempt in 1..=max_attempts {
        let mut grid = Grid::new(rows, cols)?;
        grid.set_start(start)?;
        grid.set_finish(finish)?;
        let walls = generate_walls(kind, &grid, start, finish, rng);
        grid.apply_walls(&walls);

        grid.bfs(start, finish)?;
        let solvable = grid.path_exists(finish);
        grid.reset();
        if solvable {
            log::debug!("generated {kind} map {map_number} (attempt {attempt})");
            return Ok(GeneratedMap {
                kind,
                number: map_number,
                grid,
                start,
                finish,
                attempts: attempt,
            });
        }
        log::warn!("{kind} map {map_number} has no path, retrying (attempt {attempt}/{max_attempts})");
    }
    Err(MapError::Unsolvable {
        kind,
        attempts: max_attempts,
    })
}

/// `maps_per_type` maps of every [`WallKind`], numbered from 1 within each
/// kind.
pub fn generate_all_maps(
    rows: i32,
    cols: i32,
    maps_per_type: usize,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Result<Vec<GeneratedMap>, MapError> {
    let mut maps = Vec::with_capacity(WallKind::ALL.len() * maps_per_type);
    for kind in WallKind::ALL {
        for number in 1..=maps_per_type {
            maps.push(generate_map(kind, rows, cols, number, rng, max_attempts)?);
        }
        log::info!("generated {maps_per_type} {kind} maps");
    }
    Ok(maps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_kind_and_layout_is_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in WallKind::ALL {
            for number in 1..=EndpointLayout::COUNT {
                let map = generate_map(kind, 25, 50, number, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
                assert_eq!(map.id(), format!("{kind}_{number}"));
                assert!(!map.grid.needs_reset());
                assert!(!map.grid.is_wall(map.start) && !map.grid.is_wall(map.finish));
                assert_eq!(map.grid.start(), Some(map.start));
                assert_eq!(map.grid.finish(), Some(map.finish));
                assert!((1..=DEFAULT_MAX_ATTEMPTS).contains(&map.attempts));

                let mut grid = map.grid.clone();
                grid.bfs(map.start, map.finish).unwrap();
                assert!(grid.path_exists(map.finish), "{}", map.id());
            }
        }
    }

    #[test]
    fn walled_kinds_actually_place_walls() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in WallKind::ALL {
            let map = generate_map(kind, 25, 50, 1, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
            assert!(map.wall_count() > 0, "{kind}");
        }
    }

    #[test]
    fn zero_attempts_is_unsolvable() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_map(WallKind::Random, 25, 50, 1, &mut rng, 0).unwrap_err();
        assert_eq!(
            err,
            MapError::Unsolvable {
                kind: WallKind::Random,
                attempts: 0
            }
        );
        assert!(err.to_string().contains("random"));
    }

    #[test]
    fn degenerate_grids_surface_the_underlying_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_map(WallKind::Random, 0, 10, 1, &mut rng, 3).unwrap_err();
        assert_eq!(err, MapError::Grid(GridError::Empty));

        // Every layout collapses onto one cell.
        let err = generate_map(WallKind::Horizontal, 1, 1, 1, &mut rng, 3).unwrap_err();
        assert_eq!(err, MapError::Search(SearchError::SameEndpoints(Pos::new(0, 0))));
    }

    #[test]
    fn all_maps_are_numbered_per_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let maps = generate_all_maps(15, 30, 2, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
        let ids: Vec<String> = maps.iter().map(GeneratedMap::id).collect();
        assert_eq!(
            ids,
            [
                "random_1",
                "random_2",
                "horizontal_1",
                "horizontal_2",
                "vertical_1",
                "vertical_2",
                "recursive_1",
                "recursive_2"
            ]
        );
    }
}
