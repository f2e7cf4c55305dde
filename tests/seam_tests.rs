//! Seam finder tests
//!
//! The Dijkstra finder is checked against the dynamic-programming finder on
//! random grids. The two must agree on total seam energy, though tied seams
//! may differ row by row.

use proptest::prelude::*;
use rust_seam_paths::pathfinding::{DijkstraShortestPathFinder, ShortestPath, ShortestPathFinder};
use rust_seam_paths::seam_graph::{SeamGraph, SeamVertex};
use rust_seam_paths::{
    seam_energy, DijkstraSeamFinder, DynamicProgrammingSeamFinder, EnergyGrid, GridError, SeamError,
    SeamFinder,
};

/// Random grid with integral energies so seam sums compare exactly
fn grid_strategy(max_side: usize) -> impl Strategy<Value = EnergyGrid> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(0u32..1000, cols * rows).prop_map(move |data| {
            let data = data.into_iter().map(f64::from).collect();
            EnergyGrid::from_column_major(cols, rows, data).unwrap()
        })
    })
}

fn assert_seam_shape(seam: &[usize], len: usize, bound: usize) {
    assert_eq!(seam.len(), len);
    assert!(seam.iter().all(|&r| r < bound));
    assert!(seam.windows(2).all(|p| p[0].abs_diff(p[1]) <= 1));
}

#[test]
fn test_single_pixel_seam() {
    let grid = EnergyGrid::from_columns(vec![vec![7.0]]).unwrap();
    let seam = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
    assert_eq!(seam, vec![0]);
}

#[test]
fn test_expensive_middle_row() {
    let grid = EnergyGrid::from_columns(vec![
        vec![1.0, 1.0, 1.0],
        vec![1.0, 100.0, 1.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();

    let seam = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
    assert!(seam == vec![0, 0, 0] || seam == vec![2, 2, 2], "{seam:?}");
    assert_eq!(seam_energy(&grid, &seam), Ok(3.0));
}

#[test]
fn test_path_weight_is_sum_of_visited_pixels() {
    let grid = EnergyGrid::from_fn(4, 3, |c, r| (1 + c * 3 + r) as f64).unwrap();
    let graph = SeamGraph::new(&grid);
    let path = DijkstraShortestPathFinder::new().find_shortest_path(
        &graph,
        &SeamVertex::Source,
        &SeamVertex::Sink,
    );

    let ShortestPath::Success(edges) = &path else {
        panic!("expected a seam path, got {path:?}");
    };
    // Source edge, one edge per column boundary, and the sink edge.
    assert_eq!(edges.len(), grid.cols() + 1);
    assert_eq!(edges.first().map(|e| e.from), Some(SeamVertex::Source));
    assert_eq!(edges.last().map(|e| e.to), Some(SeamVertex::Sink));

    let pixels: f64 = edges
        .iter()
        .filter_map(|e| graph.coordinates(&e.to))
        .map(|(c, r)| grid.energy(c, r))
        .sum();
    assert_eq!(path.total_weight(), Some(pixels));
    // Row 0 is the cheapest row in every column.
    assert_eq!(pixels, 1.0 + 4.0 + 7.0 + 10.0);
}

#[test]
fn test_malformed_grids_fail_fast() {
    assert_eq!(EnergyGrid::from_columns(vec![]), Err(GridError::Empty));
    assert!(matches!(
        EnergyGrid::from_columns(vec![vec![1.0, 2.0], vec![3.0]]),
        Err(GridError::Ragged { column: 1, .. })
    ));

    let err: SeamError = EnergyGrid::from_column_major(0, 0, vec![]).unwrap_err().into();
    assert_eq!(err, SeamError::Grid(GridError::Empty));
}

#[test]
fn test_capacity_hint_does_not_change_result() {
    let grid = EnergyGrid::from_fn(12, 9, |c, r| ((c * 7 + r * 13) % 11) as f64).unwrap();
    let plain = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
    let sized = DijkstraSeamFinder::with_path_finder(DijkstraShortestPathFinder::with_capacity(
        grid.rows() * 3,
    ))
    .find_horizontal_seam(&grid)
    .unwrap();
    assert_eq!(seam_energy(&grid, &plain), seam_energy(&grid, &sized));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_dijkstra_agrees_with_dynamic_programming(grid in grid_strategy(20)) {
        let dijkstra = DijkstraSeamFinder::new().find_horizontal_seam(&grid).unwrap();
        let dynamic = DynamicProgrammingSeamFinder::new().find_horizontal_seam(&grid).unwrap();

        assert_seam_shape(&dijkstra, grid.cols(), grid.rows());
        assert_seam_shape(&dynamic, grid.cols(), grid.rows());
        prop_assert_eq!(seam_energy(&grid, &dijkstra), seam_energy(&grid, &dynamic));
    }

    #[test]
    fn test_vertical_seams_agree(grid in grid_strategy(12)) {
        let dijkstra = DijkstraSeamFinder::new().find_vertical_seam(&grid).unwrap();
        let dynamic = DynamicProgrammingSeamFinder::new().find_vertical_seam(&grid).unwrap();

        assert_seam_shape(&dijkstra, grid.rows(), grid.cols());
        let transposed = grid.transpose();
        prop_assert_eq!(seam_energy(&transposed, &dijkstra), seam_energy(&transposed, &dynamic));
    }

    #[test]
    fn test_vertical_seam_takes_cheapest_column(
        cols in 1usize..15,
        rows in 1usize..15,
        cheap_seed in 0usize..15,
        noise in prop::collection::vec(10u32..100, 225)
    ) {
        let cheap = cheap_seed % cols;
        let grid = EnergyGrid::from_fn(cols, rows, |c, r| {
            if c == cheap { 1.0 } else { f64::from(noise[c * rows + r]) }
        })
        .unwrap();

        let seam = DijkstraSeamFinder::new().find_vertical_seam(&grid).unwrap();
        prop_assert_eq!(seam, vec![cheap; rows]);
    }
}
