use wheel_core::*;

const DPS: f64 = 45.0;

fn plan(start: f64, target: f64) -> SpinPlan {
    SpinPlan {
        chosen_index: 0,
        start_angle: start,
        target_angle: target,
        start_timestamp: None,
    }
}

fn expected_ticks(start: f64, target: f64) -> u32 {
    ((target / DPS).floor() - (start / DPS).floor()) as u32
}

// Drive the animator at a fixed frame interval; returns (frames, total ticks).
fn run(anim: &mut SpinAnimator, t0: f64, step_ms: f64) -> (usize, u32, Vec<f64>) {
    let mut frames = 0;
    let mut ticks = 0;
    let mut angles = Vec::new();
    let mut now = t0;
    while let Some(r) = anim.tick(now) {
        frames += 1;
        ticks += r.ticks;
        angles.push(r.angle);
        if r.done {
            break;
        }
        now += step_ms;
        assert!(frames < 100_000, "animation never finished");
    }
    (frames, ticks, angles)
}

#[test]
fn ease_out_cubic_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    // Out of range input is clamped
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_out_cubic(i as f64 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
}

#[test]
fn idle_animator_produces_no_frames() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    assert!(!anim.is_spinning());
    assert!(anim.tick(16.0).is_none());
}

#[test]
fn start_timestamp_is_taken_from_first_frame() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    assert!(anim.start(plan(0.0, 1080.0)));
    assert_eq!(anim.plan().and_then(|p| p.start_timestamp), None);

    let first = anim.tick(5000.0).unwrap();
    assert_eq!(first.angle, 0.0);
    assert_eq!(first.ticks, 0);
    assert!(!first.done);
    assert_eq!(anim.plan().and_then(|p| p.start_timestamp), Some(5000.0));

    // Halfway through the duration the cubic ease has covered 87.5%
    let mid = anim.tick(8000.0).unwrap();
    assert!((mid.angle - 945.0).abs() < 1e-9);
}

#[test]
fn second_start_is_refused_while_spinning() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    assert!(anim.start(plan(0.0, 1080.0)));
    assert!(!anim.start(plan(0.0, 765.0)));
    assert_eq!(anim.plan().map(|p| p.target_angle), Some(1080.0));
}

#[test]
fn finishes_exactly_on_target_after_duration() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    anim.start(plan(12.5, 1035.0));
    anim.tick(100.0);
    let almost = anim.tick(6099.0).unwrap();
    assert!(!almost.done);
    assert!(almost.angle < 1035.0);
    let last = anim.tick(6100.0).unwrap();
    assert!(last.done);
    assert_eq!(last.angle, 1035.0);
    assert!(!anim.is_spinning());
    assert!(anim.tick(6116.0).is_none());
}

#[test]
fn angle_never_moves_backwards() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    anim.start(plan(0.0, 1080.0));
    let (_, _, angles) = run(&mut anim, 0.0, 16.7);
    for pair in angles.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn timestamps_before_start_hold_the_start_angle() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    anim.start(plan(30.0, 1080.0));
    anim.tick(1000.0);
    let r = anim.tick(900.0).unwrap();
    assert_eq!(r.angle, 30.0);
    assert_eq!(r.ticks, 0);
}

#[test]
fn catch_up_reports_every_boundary_crossed() {
    for (start, target) in [(0.0, 1080.0), (10.0, 1000.5), (22.5, 787.5)] {
        for step in [8.0, 16.7, 33.3, 250.0] {
            let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
            anim.start(plan(start, target));
            let (_, ticks, _) = run(&mut anim, 0.0, step);
            assert_eq!(
                ticks,
                expected_ticks(start, target),
                "start={start} target={target} step={step}"
            );
        }
    }
}

#[test]
fn tick_cursor_starts_at_boundary_under_start_angle() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    anim.start(plan(100.0, 1000.0));
    assert_eq!(anim.last_tick_index(), 2);
}

// One tick per frame is the legacy page behavior; on slow frames it
// under-reports. Kept selectable and pinned here.
#[test]
fn single_per_frame_under_reports_on_coarse_frames() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::SinglePerFrame);
    anim.start(plan(0.0, 1080.0));
    let (frames, ticks, _) = run(&mut anim, 0.0, 3000.0);
    assert_eq!(frames, 3);
    assert_eq!(ticks, 2);
    assert!(ticks < expected_ticks(0.0, 1080.0));

    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    anim.start(plan(0.0, 1080.0));
    let (_, ticks, _) = run(&mut anim, 0.0, 3000.0);
    assert_eq!(ticks, 24);
}

#[test]
fn single_per_frame_matches_catch_up_on_fine_frames() {
    // At 1ms frames the wheel never crosses two boundaries in one frame.
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::SinglePerFrame);
    anim.start(plan(0.0, 1080.0));
    let (_, ticks, _) = run(&mut anim, 0.0, 1.0);
    assert_eq!(ticks, expected_ticks(0.0, 1080.0));
}

#[test]
fn catch_up_saturates_instead_of_wrapping() {
    let mut anim = SpinAnimator::new(6000.0, DPS, TickPolicy::CatchUp);
    assert_eq!(anim.duration_ms(), 6000.0);
    anim.start(plan(0.0, 1e12));
    assert_eq!(anim.tick(0.0).unwrap().ticks, 0);
    let last = anim.tick(6000.0).unwrap();
    assert!(last.done);
    assert_eq!(last.ticks, u32::MAX);
}
