use std::collections::VecDeque;

use ds_core::{GridCell, Vec2};

use crate::{AStarPathfinder, FloorLayout, GridError, NavGrid, NavGridBuilder, Path, Pathfinder};

fn reference_grid() -> NavGrid {
    NavGridBuilder::new(&FloorLayout::default())
        .build()
        .unwrap()
}

mod nav {
    use super::*;

    #[test]
    fn boundary_ring_is_blocked_except_carved_openings() {
        let layout = FloorLayout::default();
        let grid = reference_grid();
        // The top row is carved open by the kitchen corridor and the
        // bottom-row table rings force a few cells walkable, so only the
        // side columns and the table-free bottom cells stay blocked.
        for y in 0..grid.height() {
            assert!(!grid.is_walkable(GridCell::new(0, y)));
            assert!(!grid.is_walkable(GridCell::new(grid.width() - 1, y)));
        }
        let bottom = grid.height() - 1;
        for x in 0..grid.width() {
            let in_table_ring = layout
                .table_cells
                .iter()
                .any(|t| t.y == bottom - 1 && (t.x - x).abs() <= 1);
            if !in_table_ring {
                assert!(
                    !grid.is_walkable(GridCell::new(x, bottom)),
                    "bottom cell x={x} should stay blocked"
                );
            }
        }
    }

    #[test]
    fn corridors_are_walkable() {
        let grid = reference_grid();
        for x in 1..9 {
            assert!(grid.is_walkable(GridCell::new(x, 0)), "kitchen row 0, x={x}");
            assert!(grid.is_walkable(GridCell::new(x, 1)), "kitchen row 1, x={x}");
        }
        for x in 3..9 {
            assert!(grid.is_walkable(GridCell::new(x, 2)), "window row, x={x}");
        }
        for y in 2..6 {
            assert!(grid.is_walkable(GridCell::new(1, y)), "queue column, y={y}");
        }
    }

    #[test]
    fn table_cells_blocked_with_walkable_ring() {
        let layout = FloorLayout::default();
        let grid = reference_grid();
        for &table in &layout.table_cells {
            assert!(!grid.is_walkable(table), "table cell {table} must block");
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let ring = table.offset(dx, dy);
                    assert!(grid.is_walkable(ring), "ring cell {ring} around {table}");
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let grid = reference_grid();
        assert!(!grid.is_walkable(GridCell::new(-1, 3)));
        assert!(!grid.is_walkable(GridCell::new(3, -1)));
        assert!(!grid.is_walkable(GridCell::new(grid.width(), 3)));
        assert!(!grid.is_walkable(GridCell::new(3, grid.height())));
    }

    #[test]
    fn world_cell_conversions_round_trip_and_clamp() {
        let grid = reference_grid();
        let cell = GridCell::new(4, 2);
        let center = grid.cell_to_world(cell);
        assert_eq!(center, Vec2::new(360.0, 200.0));
        assert_eq!(grid.world_to_cell(center), cell);

        // Positions off the floor clamp to the nearest edge cell.
        assert_eq!(grid.world_to_cell(Vec2::new(-50.0, -50.0)), GridCell::new(0, 0));
        assert_eq!(
            grid.world_to_cell(Vec2::new(10_000.0, 10_000.0)),
            GridCell::new(9, 6)
        );
    }

    #[test]
    fn builder_rejects_boundary_and_duplicate_tables() {
        let mut layout = FloorLayout::default();
        layout.table_cells.push(GridCell::new(0, 3));
        assert!(matches!(
            NavGridBuilder::new(&layout).build(),
            Err(GridError::InvalidLayout(_))
        ));

        let mut layout = FloorLayout::default();
        layout.table_cells.push(GridCell::new(3, 3));
        assert!(matches!(
            NavGridBuilder::new(&layout).build(),
            Err(GridError::InvalidLayout(_))
        ));
    }

    #[test]
    fn builder_rejects_degenerate_grids() {
        let layout = FloorLayout {
            grid_width: 3,
            grid_height: 3,
            table_cells: vec![],
            ..FloorLayout::default()
        };
        assert!(matches!(
            NavGridBuilder::new(&layout).build(),
            Err(GridError::InvalidLayout(_))
        ));
    }
}

mod path {
    use super::*;

    /// Brute-force BFS shortest-path length, for cross-checking A*.
    fn bfs_len(grid: &NavGrid, start: GridCell, goal: GridCell) -> Option<usize> {
        let mut seen = vec![(start, 0usize)];
        let mut queue = VecDeque::from([(start, 0usize)]);
        while let Some((cell, depth)) = queue.pop_front() {
            if cell == goal {
                return Some(depth + 1);
            }
            for n in cell.neighbors4() {
                if grid.is_walkable(n) && !seen.iter().any(|&(c, _)| c == n) {
                    seen.push((n, depth + 1));
                    queue.push_back((n, depth + 1));
                }
            }
        }
        None
    }

    fn assert_valid(grid: &NavGrid, path: &Path, start: GridCell, goal: GridCell) {
        assert_eq!(path.cells.first(), Some(&start));
        assert_eq!(path.cells.last(), Some(&goal));
        assert_eq!(path.cells.len(), path.waypoints.len());
        for pair in path.cells.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "steps must be orthogonal");
            assert!(grid.is_walkable(pair[1]), "interior cell {} blocked", pair[1]);
        }
        for (&cell, &wp) in path.cells.iter().zip(&path.waypoints) {
            assert_eq!(wp, grid.cell_to_world(cell));
        }
    }

    #[test]
    fn finds_shortest_paths_on_reference_floor() {
        let grid = reference_grid();
        let finder = AStarPathfinder;
        let endpoints = [
            (GridCell::new(1, 2), GridCell::new(6, 1)),
            (GridCell::new(6, 1), GridCell::new(3, 4)),
            (GridCell::new(2, 3), GridCell::new(8, 5)),
            (GridCell::new(1, 5), GridCell::new(8, 1)),
        ];
        for (start, goal) in endpoints {
            let path = finder.find_path(&grid, start, goal).unwrap();
            assert_valid(&grid, &path, start, goal);
            let expected = bfs_len(&grid, start, goal).unwrap();
            assert_eq!(path.len(), expected, "{start} -> {goal}");
        }
    }

    #[test]
    fn start_equals_goal_is_a_single_cell_path() {
        let grid = reference_grid();
        let cell = GridCell::new(4, 4);
        let path = AStarPathfinder.find_path(&grid, cell, cell).unwrap();
        assert_eq!(path.cells, vec![cell]);
    }

    #[test]
    fn blocked_start_may_depart() {
        let grid = reference_grid();
        // The servo station sits on the blocked boundary ring.
        let start = GridCell::new(9, 6);
        assert!(!grid.is_walkable(start));
        let path = AStarPathfinder
            .find_path(&grid, start, GridCell::new(6, 1))
            .unwrap();
        assert_eq!(path.cells.first(), Some(&start));
        for &cell in &path.cells[1..] {
            assert!(grid.is_walkable(cell));
        }
    }

    #[test]
    fn blocked_goal_is_an_error() {
        let grid = reference_grid();
        let table = GridCell::new(3, 3);
        assert!(matches!(
            AStarPathfinder.find_path(&grid, GridCell::new(1, 2), table),
            Err(GridError::BlockedGoal(c)) if c == table
        ));
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let grid = reference_grid();
        assert!(matches!(
            AStarPathfinder.find_path(&grid, GridCell::new(-1, 0), GridCell::new(1, 2)),
            Err(GridError::OutOfBounds(_))
        ));
        assert!(matches!(
            AStarPathfinder.find_path(&grid, GridCell::new(1, 2), GridCell::new(99, 0)),
            Err(GridError::OutOfBounds(_))
        ));
    }

    #[test]
    fn sealed_start_reports_no_path() {
        let grid = reference_grid();
        // The bottom-left corner is blocked and every neighbor of it is
        // also blocked, so departure is impossible even with the blocked-
        // start exemption.
        let start = GridCell::new(0, grid.height() - 1);
        let goal = GridCell::new(1, 2);
        assert!(matches!(
            AStarPathfinder.find_path(&grid, start, goal),
            Err(GridError::NoPath { from, to }) if from == start && to == goal
        ));
    }

    #[test]
    fn deterministic_across_runs() {
        let grid = reference_grid();
        let a = AStarPathfinder
            .find_path(&grid, GridCell::new(1, 2), GridCell::new(8, 5))
            .unwrap();
        let b = AStarPathfinder
            .find_path(&grid, GridCell::new(1, 2), GridCell::new(8, 5))
            .unwrap();
        assert_eq!(a.cells, b.cells);
    }
}
