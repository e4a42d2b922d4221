//! End-to-end runs through the public API: the grid the page script drives,
//! the frame loop, and the module-level bridge functions.

use wasm_falling_sand::api::bridge;
use wasm_falling_sand::{
    ActiveParticleReport, DiagonalBias, FloorMode, FrameLoop, GridConfig, GridCore, GridError,
};

fn cells(report: &ActiveParticleReport) -> Vec<(u32, u32)> {
    report.active_particles.clone()
}

#[test]
fn drop_one_grain_and_watch_it_land() {
    let mut core = GridCore::new(10, 10);
    core.add_sand(0, 5).expect("in bounds");

    let mut trail = Vec::new();
    for _ in 0..12 {
        trail.push(cells(&core.update()));
    }

    for (tick, snapshot) in trail.iter().enumerate().take(9) {
        assert_eq!(snapshot, &vec![(tick as u32 + 1, 5)]);
    }
    for snapshot in &trail[9..] {
        assert_eq!(snapshot, &vec![(9, 5)]);
    }
}

#[test]
fn alternate_bias_builds_a_symmetric_pile() {
    let mut core = GridCore::new(10, 10);
    core.set_diagonal_bias(DiagonalBias::Alternate);
    for _ in 0..3 {
        core.add_sand(0, 5).expect("in bounds");
        for _ in 0..12 {
            core.step();
        }
    }
    let report = core.report();
    assert_eq!(report.len(), 3);
    assert!(report.active_particles.contains(&(9, 4)));
    assert!(report.active_particles.contains(&(9, 5)));
    assert!(report.active_particles.contains(&(9, 6)));
}

#[test]
fn json_config_drives_the_grid() {
    let json = r#"{ "rows": 6, "cols": 8, "floor": "open", "diagonalBias": "right" }"#;
    let mut core = GridCore::from_config_json(json).expect("valid config");
    assert_eq!((core.rows(), core.cols()), (6, 8));
    assert_eq!(core.config().floor, FloorMode::Open);

    core.add_sand(0, 0).expect("in bounds");
    for _ in 0..6 {
        core.step();
    }
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn bad_configs_are_rejected() {
    assert!(matches!(
        GridCore::from_config_json(r#"{ "rows": 0, "cols": 8 }"#),
        Err(GridError::InvalidConfig(_))
    ));
    assert!(matches!(
        GridCore::from_config_json("{ rows: 4"),
        Err(GridError::ConfigParse(_))
    ));
    assert!(GridCore::with_config(GridConfig::new(4, u32::MAX)).is_err());
}

#[test]
fn frame_loop_ticks_at_the_configured_rate() {
    let mut config = GridConfig::new(10, 10);
    config.tick_interval_ms = 50.0;
    let mut frame_loop = FrameLoop::with_config(config).expect("valid config");
    frame_loop.core_mut().add_sand(0, 0).expect("in bounds");

    // 60 renders at ~16.7ms apart cover one second: 20 ticks at 50ms
    let ticks = (0..60)
        .map(|i| frame_loop.advance(i as f64 * 1000.0 / 60.0))
        .filter(|&ticked| ticked)
        .count();
    assert_eq!(ticks, 20);

    let latest = frame_loop.latest().expect("published");
    assert_eq!(latest.frame, 20);
    assert_eq!(latest.active_particles, vec![(9, 0)]);
}

#[test]
fn bridge_lifecycle() {
    bridge::bridge_release();
    assert!(matches!(bridge::bridge_update(), Err(GridError::NotInitialized)));

    assert!(bridge::bridge_init(GridConfig::new(10, 10)).expect("valid config"));
    bridge::bridge_add_sand(0, 5).expect("initialized");
    bridge::bridge_add_sand(-4, 99).expect("out of bounds is swallowed");

    let report = bridge::bridge_update().expect("initialized");
    assert_eq!(report.active_particles, vec![(1, 5)]);

    bridge::bridge_clear().expect("initialized");
    let report = bridge::bridge_update().expect("initialized");
    assert!(report.is_empty());

    bridge::bridge_release();
    assert!(!bridge::bridge_initialized());
}
