use conway_life::{update_grid, Grid, Life};

fn shifted(cells: &[(usize, usize)], dr: usize, dc: usize) -> Vec<(usize, usize)> {
    cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
}

#[test]
fn block_is_a_still_life() {
    let block = Grid::parse(
        "
        ....
        .##.
        .##.
        ....
        ",
    )
    .unwrap();

    let mut grid = block.clone();
    for _ in 0..10 {
        grid = update_grid(&grid);
        assert_eq!(grid, block);
    }
}

#[test]
fn block_in_a_corner_is_still_stable() {
    let block = Grid::parse("##.\n##.\n...").unwrap();
    assert_eq!(update_grid(&block), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = Grid::parse(
        "
        .....
        .....
        .###.
        .....
        .....
        ",
    )
    .unwrap();
    let vertical = Grid::parse(
        "
        .....
        ..#..
        ..#..
        ..#..
        .....
        ",
    )
    .unwrap();

    let once = update_grid(&horizontal);
    assert_eq!(once, vertical);
    assert_eq!(update_grid(&once), horizontal);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let glider = Grid::parse(
        "
        ..........
        ..#.......
        ...#......
        .###......
        ..........
        ..........
        ..........
        ..........
        ..........
        ..........
        ",
    )
    .unwrap();
    let start: Vec<_> = glider.live_cells().collect();

    let mut grid = glider;
    for round in 1..=3 {
        for _ in 0..4 {
            grid = update_grid(&grid);
        }
        assert_eq!(grid.population(), 5);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            shifted(&start, round, round),
            "after {} generations",
            round * 4
        );
    }
}

#[test]
fn glider_dies_into_a_block_at_the_edge() {
    // Without wrap-around a glider running into the corner settles into a
    // block instead of reappearing on the other side.
    let glider = Grid::parse(
        "
        .#...
        ..#..
        ###..
        .....
        .....
        ",
    )
    .unwrap();
    let settled = Life::new(glider).nth(40).unwrap();
    assert_eq!(
        settled,
        Grid::parse(
            "
            .....
            .....
            .....
            ...##
            ...##
            ",
        )
        .unwrap()
    );
}

#[test]
fn lonely_cells_die() {
    let grid = Grid::parse("#...#\n.....\n..#..").unwrap();
    assert_eq!(update_grid(&grid).population(), 0);
}
