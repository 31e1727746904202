//! Reveal sequencing and decorative placement.
//!
//! Every animated element has exactly two presentation states, hidden and
//! visible. Sequencing is a declared delay-per-child over the main-loop
//! tick; there is no scheduling, cancellation or failure path.

use rand::Rng;
use std::f64::consts::TAU;

/// Stagger parameters, in ticks: `delay` before the first child shows,
/// `interval` between consecutive children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay: u64,
    pub interval: u64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self { delay: 2, interval: 2 }
    }
}

/// How many of `total` children are visible after `elapsed` ticks.
/// Monotone in `elapsed`, capped at `total`.
pub fn revealed_count(elapsed: u64, total: usize, stagger: Stagger) -> usize {
    if elapsed < stagger.delay {
        return 0;
    }
    let past_delay = elapsed - stagger.delay;
    if stagger.interval == 0 {
        return total;
    }
    let shown = past_delay / stagger.interval + 1;
    (shown as usize).min(total)
}

/// Per-view reveal clock: reset when the view becomes active, advanced by
/// the workbench tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reveal {
    elapsed: u64,
}

impl Reveal {
    pub fn restart(&mut self) {
        self.elapsed = 0;
    }

    /// Returns true while elements are still appearing, so callers keep
    /// redrawing until the sequence settles.
    pub fn tick(&mut self, total: usize, stagger: Stagger) -> bool {
        let before = revealed_count(self.elapsed, total, stagger);
        self.elapsed = self.elapsed.saturating_add(1);
        revealed_count(self.elapsed, total, stagger) != before
    }

    pub fn visible(&self, total: usize, stagger: Stagger) -> usize {
        revealed_count(self.elapsed, total, stagger)
    }
}

/// Angular fan-out offset for the focused category's reveal: skill `index`
/// of `total` sits at `(r·cos(2πi/total), r·sin(2πi/total))`. Deterministic
/// so the layout is reproducible across frames.
pub fn fan_out_offset(index: usize, total: usize, radius: f64) -> (f64, f64) {
    let angle = index as f64 / total as f64 * TAU;
    (radius * angle.cos(), radius * angle.sin())
}

/// Decorative star placement: percent coordinates in `[10, 90)` on both
/// axes. Takes an explicit random source so tests can seed it and assert
/// bounds; no uniqueness or non-overlap guarantee.
pub fn star_position<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    (
        rng.gen::<f64>() * 80.0 + 10.0,
        rng.gen::<f64>() * 80.0 + 10.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::TAU;

    #[test]
    fn test_revealed_count_steps() {
        let stagger = Stagger { delay: 2, interval: 3 };
        assert_eq!(revealed_count(0, 5, stagger), 0);
        assert_eq!(revealed_count(1, 5, stagger), 0);
        assert_eq!(revealed_count(2, 5, stagger), 1);
        assert_eq!(revealed_count(4, 5, stagger), 1);
        assert_eq!(revealed_count(5, 5, stagger), 2);
        assert_eq!(revealed_count(100, 5, stagger), 5);
    }

    #[test]
    fn test_revealed_count_is_monotone_and_capped() {
        let stagger = Stagger::default();
        let mut last = 0;
        for elapsed in 0..64 {
            let now = revealed_count(elapsed, 7, stagger);
            assert!(now >= last);
            assert!(now <= 7);
            last = now;
        }
        assert_eq!(last, 7);
    }

    #[test]
    fn test_zero_interval_shows_everything_after_delay() {
        let stagger = Stagger { delay: 4, interval: 0 };
        assert_eq!(revealed_count(3, 9, stagger), 0);
        assert_eq!(revealed_count(4, 9, stagger), 9);
    }

    #[test]
    fn test_reveal_tick_reports_changes() {
        let stagger = Stagger { delay: 1, interval: 1 };
        let mut reveal = Reveal::default();
        assert!(reveal.tick(2, stagger)); // 0 -> 1 visible
        assert!(reveal.tick(2, stagger)); // 1 -> 2 visible
        assert!(!reveal.tick(2, stagger)); // settled
        assert_eq!(reveal.visible(2, stagger), 2);
    }

    #[test]
    fn test_fan_out_matches_reference_formula() {
        let radius = 130.0;
        for total in 1..=8usize {
            for index in 0..total {
                let (x, y) = fan_out_offset(index, total, radius);
                let angle = index as f64 / total as f64 * TAU;
                assert_eq!(x, radius * angle.cos());
                assert_eq!(y, radius * angle.sin());
            }
        }
    }

    #[test]
    fn test_fan_out_is_reproducible() {
        assert_eq!(fan_out_offset(3, 8, 42.0), fan_out_offset(3, 8, 42.0));
    }

    #[test]
    fn test_star_position_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let (top, left) = star_position(&mut rng);
            assert!((10.0..90.0).contains(&top));
            assert!((10.0..90.0).contains(&left));
        }
    }

    #[test]
    fn test_star_position_deterministic_with_seeded_source() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(star_position(&mut a), star_position(&mut b));
    }
}
