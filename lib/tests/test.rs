use sparselife_lib::{read_bmp, write_bmp, Game, Point, PointSet};
use std::error::Error;

fn game_with(cells: &[(i32, i32)]) -> Game {
    Game::with_cells(cells.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

#[test]
fn block_is_a_still_life() {
    let mut game = game_with(&[(5, 5), (6, 5), (5, 6), (6, 6)]);
    game.tick();
    assert_eq!(game.cell_count(), 4);
    for &(x, y) in &[(5, 5), (6, 5), (5, 6), (6, 6)] {
        assert!(game.is_alive(&Point::new(x, y)));
    }
}

#[test]
fn blinker_oscillates() {
    let mut game = game_with(&[(5, 5), (6, 5), (7, 5)]);

    game.tick();
    assert_eq!(game.cell_count(), 3);
    for &(x, y) in &[(6, 4), (6, 5), (6, 6)] {
        assert!(game.is_alive(&Point::new(x, y)));
    }

    game.tick();
    assert_eq!(game.cell_count(), 3);
    for &(x, y) in &[(5, 5), (6, 5), (7, 5)] {
        assert!(game.is_alive(&Point::new(x, y)));
    }
}

#[test]
fn empty_world_ticks_to_empty() {
    let mut game = Game::new();
    for _ in 0..5 {
        game.tick();
    }
    assert_eq!(game.cell_count(), 0);
}

#[test]
fn origin_cell_never_yields_negative_neighbors() {
    let game = game_with(&[(0, 0)]);
    let neighbors = game.neighbors(&Point::new(0, 0));
    assert!(neighbors.len() < 8);
    for n in &neighbors {
        assert!(n.x() >= 0 && n.y() >= 0);
    }
}

#[test]
fn growth_through_two_doublings_preserves_membership() {
    let mut set = PointSet::with_capacity(64);
    let mut points = Vec::new();
    for x in 0..20 {
        for y in 0..20 {
            points.push(Point::new(x, y));
        }
    }
    for (i, &p) in points.iter().enumerate() {
        assert!(set.insert(p));
        // Everything inserted so far must survive each growth.
        if i % 50 == 0 {
            for &q in &points[..=i] {
                assert!(set.contains(&q));
            }
        }
    }
    assert_eq!(set.len(), 400);
    assert!(set.capacity() >= 256);
    for &p in &points {
        assert!(set.contains(&p));
    }
}

#[test]
fn snapshot_round_trip() -> Result<(), Box<dyn Error>> {
    let game = game_with(&[(3, 4), (10, 2), (7, 7), (0, 0)]);

    let mut buf = Vec::new();
    write_bmp(&game, &mut buf)?;
    let restored = read_bmp(&mut buf.as_slice())?;

    // Reading shifts every cell one row up; see the codec docs.
    assert_eq!(restored.len(), game.cell_count());
    for p in game.live_cells() {
        assert!(restored.contains(&Point::new(p.x(), p.y() + 1)));
    }
    Ok(())
}

#[test]
fn simulated_generations_round_trip() -> Result<(), Box<dyn Error>> {
    // A blinker survives a dump-and-reload between ticks.
    let mut game = game_with(&[(5, 5), (6, 5), (7, 5)]);
    game.tick();

    let mut buf = Vec::new();
    write_bmp(&game, &mut buf)?;
    let mut reloaded = Game::with_cells(read_bmp(&mut buf.as_slice())?);
    assert_eq!(reloaded.cell_count(), 3);

    // The reload shifted the pattern up a row; it still oscillates.
    reloaded.tick();
    for &(x, y) in &[(5, 6), (6, 6), (7, 6)] {
        assert!(reloaded.is_alive(&Point::new(x, y)));
    }
    Ok(())
}
