//! The simulation engine.

use crate::point::Point;
use crate::set::PointSet;
use std::fmt::Write;

/// Offsets of the eight cells in the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A Game of Life world over the non-negative quadrant.
///
/// The world is unbounded except at the axes: cells with a negative
/// coordinate simply do not exist, so the neighborhood of an axis cell is
/// smaller than eight. The only state is the set of live cells.
#[derive(Clone, Debug, Default)]
pub struct Game {
    /// The cells that are currently alive.
    live: PointSet,
}

impl Game {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a world from an initial set of live cells.
    pub fn with_cells(live: PointSet) -> Self {
        Self { live }
    }

    /// Number of live cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.live.len()
    }

    /// Whether the cell at `p` is alive.
    #[inline]
    pub fn is_alive(&self, p: &Point) -> bool {
        self.live.contains(p)
    }

    /// Brings the cell at `p` to life. Returns `false` if it already was.
    pub fn set_alive(&mut self, p: Point) -> bool {
        self.live.insert(p)
    }

    /// An independent snapshot of all live cells, in storage order.
    pub fn live_cells(&self) -> Vec<Point> {
        self.live.to_vec()
    }

    /// The Moore neighbors of `p` inside the non-negative quadrant, in
    /// offset-table order.
    pub fn neighbors(&self, p: &Point) -> Vec<Point> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let (x, y) = (p.x() + dx, p.y() + dy);
                (x >= 0 && y >= 0).then(|| Point::new(x, y))
            })
            .collect()
    }

    /// How many of `p`'s neighbors are alive, 0 to 8.
    pub fn live_neighbor_count(&self, p: &Point) -> usize {
        self.neighbors(p)
            .iter()
            .filter(|n| self.live.contains(n))
            .count()
    }

    /// Live cells that stay alive in the next generation: those with
    /// exactly two or three live neighbors.
    pub fn survivors(&self) -> Vec<Point> {
        self.live
            .to_vec()
            .into_iter()
            .filter(|p| matches!(self.live_neighbor_count(p), 2 | 3))
            .collect()
    }

    /// Dead cells that come alive in the next generation: those bordering
    /// a live cell with exactly three live neighbors.
    ///
    /// Candidates are staged through a [`PointSet`], so a cell qualified
    /// by several of its live neighbors still appears only once.
    pub fn births(&self) -> Vec<Point> {
        let mut staged = PointSet::new();
        for cell in self.live.to_vec() {
            for n in self.neighbors(&cell) {
                if !self.live.contains(&n) && self.live_neighbor_count(&n) == 3 {
                    staged.insert(n);
                }
            }
        }
        staged.to_vec()
    }

    /// Advances the world by one generation.
    ///
    /// Survivors and births are both computed from the pre-tick state
    /// before the live set is touched, then replace it as a unit.
    pub fn tick(&mut self) {
        let survivors = self.survivors();
        let births = self.births();

        self.live.clear();
        for p in survivors {
            self.live.insert(p);
        }
        for p in births {
            self.live.insert(p);
        }
    }

    /// A plain-text listing of the live cells, one `x y` pair per line.
    pub fn dump_cells(&self) -> String {
        let mut out = String::new();
        for p in self.live.to_vec() {
            let _ = writeln!(out, "{} {}", p.x(), p.y());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(cells: &[(i32, i32)]) -> Game {
        Game::with_cells(cells.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn origin_has_three_neighbors() {
        let game = Game::new();
        let neighbors = game.neighbors(&Point::new(0, 0));
        assert_eq!(neighbors.len(), 3);
        for n in &neighbors {
            assert!(n.x() >= 0 && n.y() >= 0);
        }
    }

    #[test]
    fn axis_cell_has_five_neighbors() {
        let game = Game::new();
        assert_eq!(game.neighbors(&Point::new(5, 0)).len(), 5);
        assert_eq!(game.neighbors(&Point::new(0, 5)).len(), 5);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let game = Game::new();
        assert_eq!(game.neighbors(&Point::new(4, 7)).len(), 8);
    }

    #[test]
    fn neighbor_counting() {
        let game = game_with(&[(5, 5), (6, 5), (7, 5)]);
        assert_eq!(game.live_neighbor_count(&Point::new(6, 5)), 2);
        assert_eq!(game.live_neighbor_count(&Point::new(6, 4)), 3);
        assert_eq!(game.live_neighbor_count(&Point::new(6, 6)), 3);
        assert_eq!(game.live_neighbor_count(&Point::new(0, 0)), 0);
    }

    #[test]
    fn births_are_deduplicated() {
        // (6, 4) and (6, 6) each border all three live cells, but must
        // appear once in the birth list.
        let game = game_with(&[(5, 5), (6, 5), (7, 5)]);
        let births = game.births();
        assert_eq!(births.len(), 2);
        assert!(births.contains(&Point::new(6, 4)));
        assert!(births.contains(&Point::new(6, 6)));
    }

    #[test]
    fn lone_cell_dies() {
        let mut game = game_with(&[(5, 5)]);
        game.tick();
        assert_eq!(game.cell_count(), 0);
    }

    #[test]
    fn empty_world_stays_empty() {
        let mut game = Game::new();
        game.tick();
        assert_eq!(game.cell_count(), 0);
    }
}
