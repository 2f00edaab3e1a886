//! Time-driven easing core for the circular progress indicator.
//!
//! Everything here is pure and scheduler-agnostic: callers feed in timestamps
//! (milliseconds on any monotonic clock) and drive ticks themselves, so the
//! whole state machine is testable without a browser or real delays.

use std::f64::consts::PI;

/// Duration of one animation run, in milliseconds.
pub const ANIMATION_DURATION_MS: f64 = 2000.0;

/// Cubic ease-out: starts fast, decelerates into the target.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Named preset mapping to a fixed (diameter, stroke width) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingSize {
    Compact,
    #[default]
    Standard,
    Large,
}

impl RingSize {
    /// Parses a size name; anything unrecognized falls back to `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "compact" => RingSize::Compact,
            "large" => RingSize::Large,
            _ => RingSize::Standard,
        }
    }

    pub fn diameter(self) -> f64 {
        match self {
            RingSize::Compact => 100.0,
            RingSize::Standard => 150.0,
            RingSize::Large => 200.0,
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            RingSize::Compact => 8.0,
            RingSize::Standard => 12.0,
            RingSize::Large => 16.0,
        }
    }
}

/// Ring geometry derived from a size preset. Cheap arithmetic, recomputed
/// every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub diameter: f64,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
}

impl RingGeometry {
    pub fn of(size: RingSize) -> Self {
        let diameter = size.diameter();
        let stroke_width = size.stroke_width();
        let radius = diameter / 2.0 - stroke_width / 2.0;
        RingGeometry {
            diameter,
            stroke_width,
            radius,
            circumference: 2.0 * PI * radius,
        }
    }

    /// Dash offset hiding the unfilled part of the ring: the full
    /// circumference at 0%, zero at 100%.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference * (1.0 - progress / 100.0)
    }
}

/// The value an in-flight run has reached, and whether the run is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub finished: bool,
}

/// One eased interpolation run from `start_value` to `end_value` over a fixed
/// duration. Targets are clamped to [0, 100] so malformed input degrades to a
/// full or empty ring instead of drawing outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    start_time: f64,
    start_value: f64,
    end_value: f64,
    duration: f64,
}

impl AnimationRun {
    pub fn new(start_time: f64, start_value: f64, target: f64) -> Self {
        AnimationRun {
            start_time,
            start_value: start_value.clamp(0.0, 100.0),
            end_value: target.clamp(0.0, 100.0),
            duration: ANIMATION_DURATION_MS,
        }
    }

    pub fn target(&self) -> f64 {
        self.end_value
    }

    /// Value at wall-clock time `now`. The time fraction is clamped to 1, so
    /// once the duration has elapsed this returns exactly `end_value` and
    /// reports the run finished.
    pub fn sample(&self, now: f64) -> Sample {
        let elapsed = (now - self.start_time).max(0.0);
        let t = (elapsed / self.duration).min(1.0);
        Sample {
            value: self.start_value + (self.end_value - self.start_value) * ease_out_cubic(t),
            finished: t >= 1.0,
        }
    }
}

/// Animation driver with a generation counter guarding against stale ticks.
///
/// Each run carries a token; a scheduled callback from a superseded run hands
/// its stale token to [`Animator::tick`], which drops it without mutating
/// anything. Retargeting continues from the value already on screen rather
/// than snapping back to zero.
#[derive(Debug)]
pub struct Animator {
    run: AnimationRun,
    token: u64,
    value: f64,
}

impl Animator {
    pub fn new(now: f64, target: f64) -> Self {
        Animator {
            run: AnimationRun::new(now, 0.0, target),
            token: 0,
            value: 0.0,
        }
    }

    /// Token identifying the current run; ticks must present it back.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Progress value the animation has reached so far.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Target of the current run, after clamping.
    pub fn target(&self) -> f64 {
        self.run.target()
    }

    /// Advances the animation, or returns `None` for a tick belonging to a
    /// superseded run.
    pub fn tick(&mut self, token: u64, now: f64) -> Option<Sample> {
        if token != self.token {
            return None;
        }
        let sample = self.run.sample(now);
        self.value = sample.value;
        Some(sample)
    }

    /// Starts a new run toward `target` from the current value, invalidating
    /// any callbacks still pending from the previous run.
    pub fn retarget(&mut self, now: f64, target: f64) -> u64 {
        self.token += 1;
        self.run = AnimationRun::new(now, self.value, target);
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ease_endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotone_on_unit_interval() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = ease_out_cubic(i as f64 / 1000.0);
            assert!(v >= prev, "ease decreased at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn size_lookup_table() {
        for (size, diameter, stroke) in [
            (RingSize::Compact, 100.0, 8.0),
            (RingSize::Standard, 150.0, 12.0),
            (RingSize::Large, 200.0, 16.0),
        ] {
            let geo = RingGeometry::of(size);
            assert_eq!(geo.diameter, diameter);
            assert_eq!(geo.stroke_width, stroke);
            assert_eq!(geo.radius, diameter / 2.0 - stroke / 2.0);
            assert!((geo.circumference - 2.0 * PI * geo.radius).abs() < EPS);
        }
    }

    #[test]
    fn unknown_size_name_falls_back_to_standard() {
        assert_eq!(RingSize::from_name("compact"), RingSize::Compact);
        assert_eq!(RingSize::from_name("large"), RingSize::Large);
        assert_eq!(RingSize::from_name("standard"), RingSize::Standard);
        assert_eq!(RingSize::from_name("jumbo"), RingSize::Standard);
        assert_eq!(RingSize::from_name(""), RingSize::Standard);
    }

    #[test]
    fn dash_offset_endpoints() {
        let geo = RingGeometry::of(RingSize::Standard);
        assert!((geo.dash_offset(0.0) - geo.circumference).abs() < EPS);
        assert!(geo.dash_offset(100.0).abs() < EPS);
    }

    #[test]
    fn standard_ring_at_75_percent() {
        let geo = RingGeometry::of(RingSize::Standard);
        assert_eq!(geo.radius, 69.0);
        assert!((geo.circumference - 433.53978619).abs() < 1e-6);

        let mut animator = Animator::new(0.0, 75.0);
        let sample = animator
            .tick(animator.token(), ANIMATION_DURATION_MS)
            .unwrap();
        assert!(sample.finished);
        assert_eq!(sample.value, 75.0);
        assert!((geo.dash_offset(sample.value) - geo.circumference * 0.25).abs() < 1e-6);
    }

    #[test]
    fn run_reaches_target_exactly_for_any_percentage() {
        for pct in [0.0, 1.0, 33.3, 50.0, 99.9, 100.0] {
            let run = AnimationRun::new(100.0, 0.0, pct);
            let done = run.sample(100.0 + ANIMATION_DURATION_MS);
            assert!(done.finished);
            assert_eq!(done.value, pct);
            // Late samples stay pinned at the target.
            let later = run.sample(100.0 + ANIMATION_DURATION_MS * 3.0);
            assert_eq!(later.value, pct);
        }
    }

    #[test]
    fn zero_target_stays_at_zero() {
        let run = AnimationRun::new(0.0, 0.0, 0.0);
        assert_eq!(run.sample(1.0).value, 0.0);
        let done = run.sample(ANIMATION_DURATION_MS);
        assert!(done.finished);
        assert_eq!(done.value, 0.0);
        let geo = RingGeometry::of(RingSize::Compact);
        assert!((geo.dash_offset(done.value) - geo.circumference).abs() < EPS);
    }

    #[test]
    fn run_value_stays_within_bounds() {
        let run = AnimationRun::new(0.0, 0.0, 75.0);
        for ms in (0..=2500).step_by(10) {
            let s = run.sample(ms as f64);
            assert!(s.value >= 0.0 && s.value <= 75.0);
        }
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let high = AnimationRun::new(0.0, 0.0, 180.0);
        assert_eq!(high.sample(ANIMATION_DURATION_MS).value, 100.0);
        let low = AnimationRun::new(0.0, 0.0, -20.0);
        assert_eq!(low.sample(ANIMATION_DURATION_MS).value, 0.0);
    }

    #[test]
    fn ease_shape_front_loads_change() {
        // Halfway through the duration the eased value is well past halfway.
        let run = AnimationRun::new(0.0, 0.0, 100.0);
        let mid = run.sample(ANIMATION_DURATION_MS / 2.0);
        assert!((mid.value - 87.5).abs() < EPS); // 1 - 0.5^3
        assert!(!mid.finished);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut animator = Animator::new(0.0, 75.0);
        let before = animator.tick(animator.token(), 500.0).unwrap();
        assert!(before.value > 0.0 && before.value < 75.0);

        let token = animator.retarget(500.0, 40.0);
        // No jump: the new run starts right where the old one left off.
        let at_start = animator.tick(token, 500.0).unwrap();
        assert!((at_start.value - before.value).abs() < EPS);

        let done = animator.tick(token, 500.0 + ANIMATION_DURATION_MS).unwrap();
        assert!(done.finished);
        assert_eq!(done.value, 40.0);
    }

    #[test]
    fn stale_tick_after_supersession_is_dropped() {
        let mut animator = Animator::new(0.0, 75.0);
        let old_token = animator.token();
        animator.tick(old_token, 500.0).unwrap();
        let value_at_supersession = animator.value();

        animator.retarget(500.0, 40.0);

        // A late callback from the superseded run must not mutate state.
        assert!(animator.tick(old_token, 600.0).is_none());
        assert_eq!(animator.value(), value_at_supersession);
    }

    #[test]
    fn animator_exposes_clamped_run_target() {
        let mut animator = Animator::new(0.0, 75.0);
        assert_eq!(animator.target(), 75.0);
        animator.retarget(100.0, 140.0);
        assert_eq!(animator.target(), 100.0);
        animator.retarget(200.0, -5.0);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut animator = Animator::new(0.0, 10.0);
        let t0 = animator.token();
        let t1 = animator.retarget(100.0, 20.0);
        let t2 = animator.retarget(200.0, 30.0);
        assert!(t0 < t1 && t1 < t2);
    }
}
