use super::*;
use crate::core::error::GridError;

fn particles(core: &GridCore) -> Vec<(u32, u32)> {
    core.report().active_particles
}

fn steps(core: &mut GridCore, n: usize) {
    for _ in 0..n {
        core.step();
    }
}

/// xorshift32, for reproducible scatter patterns
fn next_rand(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[test]
fn single_grain_falls_one_row_per_tick() {
    let mut core = GridCore::new(10, 10);
    assert_eq!(core.add_sand(0, 5).ok(), Some(true));

    core.step();
    assert_eq!(particles(&core), vec![(1, 5)]);

    steps(&mut core, 4);
    assert_eq!(particles(&core), vec![(5, 5)]);

    steps(&mut core, 4);
    assert_eq!(particles(&core), vec![(9, 5)]);

    steps(&mut core, 20);
    assert_eq!(particles(&core), vec![(9, 5)]);
}

#[test]
fn stacked_grains_fall_together() {
    let mut core = GridCore::new(10, 10);
    core.add_sand(0, 5).expect("in bounds");
    core.add_sand(1, 5).expect("in bounds");

    core.step();

    assert_eq!(particles(&core), vec![(1, 5), (2, 5)]);
}

#[test]
fn pile_spreads_left_then_right() {
    let mut core = GridCore::new(10, 10);
    for _ in 0..4 {
        core.add_sand(0, 5).expect("in bounds");
        steps(&mut core, 12);
    }
    assert_eq!(particles(&core), vec![(8, 5), (9, 4), (9, 5), (9, 6)]);
}

#[test]
fn right_bias_mirrors_the_pile() {
    let mut core = GridCore::new(10, 10);
    core.set_diagonal_bias(DiagonalBias::Right);
    for _ in 0..2 {
        core.add_sand(0, 5).expect("in bounds");
        steps(&mut core, 12);
    }
    assert_eq!(particles(&core), vec![(9, 5), (9, 6)]);
}

#[test]
fn occupied_add_is_a_no_op() {
    let mut core = GridCore::new(10, 10);
    assert_eq!(core.add_sand(3, 3).ok(), Some(true));
    assert_eq!(core.add_sand(3, 3).ok(), Some(false));
    assert_eq!(core.particle_count(), 1);
}

#[test]
fn out_of_bounds_add_never_writes() {
    let mut core = GridCore::new(10, 10);
    for (row, col) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)] {
        assert!(matches!(
            core.add_sand(row, col),
            Err(GridError::OutOfBounds { .. })
        ));
    }
    assert_eq!(core.particle_count(), 0);
    assert!(particles(&core).is_empty());
}

#[test]
fn open_floor_drains_particles() {
    let mut config = GridConfig::new(10, 10);
    config.floor = FloorMode::Open;
    let mut core = GridCore::with_config(config).expect("valid config");
    core.enable_perf_metrics(true);

    core.add_sand(9, 5).expect("in bounds");
    core.add_sand(0, 2).expect("in bounds");
    core.step();

    assert_eq!(core.get_perf_stats().particles_removed(), 1);
    assert_eq!(particles(&core), vec![(1, 2)]);

    steps(&mut core, 9);
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn switching_to_open_floor_releases_settled_grains() {
    let mut core = GridCore::new(4, 4);
    core.add_sand(3, 1).expect("in bounds");
    steps(&mut core, 5);
    assert_eq!(core.particle_count(), 1);

    core.set_floor(FloorMode::Open);
    core.step();
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn settled_grid_goes_to_sleep() {
    let mut core = GridCore::new(10, 10);
    core.enable_perf_metrics(true);
    core.add_sand(0, 5).expect("in bounds");

    // Lands on tick 9; tick 10 confirms it settled; tick 11 scans nothing.
    steps(&mut core, 11);
    let stats = core.get_perf_stats();
    assert_eq!(stats.active_chunks(), 0);
    assert_eq!(stats.cells_scanned(), 0);
    assert_eq!(particles(&core), vec![(9, 5)]);

    // A new grain wakes it again.
    core.add_sand(0, 5).expect("in bounds");
    core.step();
    assert_eq!(core.get_perf_stats().active_chunks(), 1);
    assert_eq!(particles(&core), vec![(1, 5), (9, 5)]);
}

#[test]
fn removing_support_wakes_the_grain_above() {
    let mut core = GridCore::new(40, 40);
    // Small pile on the floor, straddling the chunk border at col 32
    for row in 37..40 {
        core.add_sand(row, 31).expect("in bounds");
    }
    core.add_sand(38, 30).expect("in bounds");
    core.add_sand(38, 32).expect("in bounds");
    core.add_sand(39, 30).expect("in bounds");
    core.add_sand(39, 32).expect("in bounds");
    steps(&mut core, 4);
    let settled = particles(&core);

    assert_eq!(core.remove_sand(39, 31).ok(), Some(true));
    core.step();
    let after = particles(&core);
    assert_ne!(after, settled);
    assert!(after.contains(&(39, 31)));
}

#[test]
fn sleeping_never_changes_the_outcome() {
    let (rows, cols) = (70, 100);
    let mut sleepy = GridCore::new(rows, cols);
    let mut full = GridCore::new(rows, cols);
    full.set_chunk_sleeping_enabled(false);
    for core in [&mut sleepy, &mut full] {
        core.set_diagonal_bias(DiagonalBias::Alternate);
    }

    let mut seed = 0x1234_5678u32;
    for tick in 0..400 {
        if tick < 250 {
            for _ in 0..6 {
                let row = (next_rand(&mut seed) % (rows / 2)) as i32;
                let col = (next_rand(&mut seed) % cols) as i32;
                let a = sleepy.add_sand(row, col).ok();
                let b = full.add_sand(row, col).ok();
                assert_eq!(a, b);
            }
        }
        if tick % 37 == 0 {
            let row = (next_rand(&mut seed) % rows) as i32;
            let col = (next_rand(&mut seed) % cols) as i32;
            assert_eq!(sleepy.remove_sand(row, col).ok(), full.remove_sand(row, col).ok());
        }
        sleepy.step();
        full.step();
        assert_eq!(sleepy.report(), full.report(), "diverged at tick {tick}");
    }
    assert!(sleepy.particle_count() > 0);
}

#[test]
fn clear_resets_grid_and_frame() {
    let mut core = GridCore::new(10, 10);
    core.add_sand_in_radius(5, 5, 2);
    steps(&mut core, 3);
    core.clear();
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.frame(), 0);
    assert!(particles(&core).is_empty());
}

#[test]
fn brush_clips_to_grid() {
    let mut core = GridCore::new(10, 10);
    // Radius 1 around a corner: only (0,0), (0,1), (1,0) are inside
    assert_eq!(core.add_sand_in_radius(0, 0, 1), 3);
    assert_eq!(core.add_sand_in_radius(5, 5, 0), 1);
    assert_eq!(core.add_sand_in_radius(5, 5, -3), 0);
    assert_eq!(core.add_sand_in_radius(5, 5, i32::MAX), 96);
    assert_eq!(core.particle_count(), 100);
}

#[test]
fn negative_brush_radius_places_nothing() {
    let mut core = GridCore::new(10, 10);
    assert_eq!(core.add_sand_in_radius(5, 5, -50_000), 0);
    assert_eq!(core.add_sand_in_radius(5, 5, i32::MIN), 0);
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn brush_handles_extreme_centres() {
    let mut core = GridCore::new(10, 10);
    // Centre far outside the grid, radius too short to reach it
    assert_eq!(core.add_sand_in_radius(i32::MIN, i32::MIN, 1_000), 0);
    // Reaches down to row -1 and no further
    assert_eq!(core.add_sand_in_radius(i32::MIN, 0, i32::MAX), 0);
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.add_sand_in_radius(5, 5, i32::MAX), 100);
}

#[test]
fn huge_brush_on_a_large_grid_stays_inside_it() {
    let mut core = GridCore::new(64, 16_384);
    // Visits the 64 rows that exist, not the whole bounding box
    assert_eq!(core.add_sand_in_radius(0, 0, 1 << 14), 64 * 16_384);
}

#[test]
fn pixel_adds_floor_divide_by_cell_size() {
    let mut core = GridCore::new(200, 300);
    assert_eq!(core.add_sand_at_pixel(7.9, 4.0).ok(), Some(true));
    assert_eq!(core.cell(1, 1), Some(Cell::Sand));
    assert!(matches!(
        core.add_sand_at_pixel(-0.5, 10.0),
        Err(GridError::OutOfBounds { col: -1, .. })
    ));
    assert!(matches!(
        core.add_sand_at_pixel(f64::NAN, 10.0),
        Err(GridError::NonFinitePixel { .. })
    ));
    assert!(core.add_sand_at_pixel(1e300, 10.0).is_err());
}

#[test]
fn report_matches_count_and_is_row_major() {
    let mut core = GridCore::new(20, 20);
    core.add_sand_in_radius(5, 10, 3);
    steps(&mut core, 6);
    let report = core.report();
    assert_eq!(report.len(), core.particle_count() as usize);
    assert_eq!((report.rows, report.cols, report.frame), (20, 20, 6));
    let mut sorted = report.active_particles.clone();
    sorted.sort();
    assert_eq!(sorted, report.active_particles);
}

#[test]
fn report_json_uses_pair_arrays() {
    let mut core = GridCore::new(4, 4);
    core.add_sand(0, 1).expect("in bounds");
    let json = core.update().to_json();
    assert_eq!(json, r#"{"rows":4,"cols":4,"frame":1,"active_particles":[[1,1]]}"#);
}
