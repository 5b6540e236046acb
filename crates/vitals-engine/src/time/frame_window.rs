use std::collections::VecDeque;

/// Upper bound on retained timestamps per window.
///
/// A window normally spans one report interval (~60-120 callbacks). Frames past
/// the bound are still counted; only their timestamps are dropped.
pub const MAX_TRACKED_FRAMES: usize = 1024;

/// Refresh-callback timestamps recorded since the last reset.
///
/// The window is rotated by its owner at the start of every reporting cycle,
/// so it never mixes frames from two cycles, and is pruned by age so a stall
/// inside a cycle does not inflate the count. Timestamps are taken as given;
/// pruning assumes they arrive in non-decreasing order.
#[derive(Debug, Clone, Default)]
pub struct FrameTimestampWindow {
    frames: VecDeque<f64>,
    /// Frames whose timestamps were evicted by the capacity bound.
    /// All of them are older than the oldest retained timestamp.
    evicted: usize,
}

impl FrameTimestampWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one refresh callback.
    pub fn append(&mut self, timestamp: f64) {
        if self.frames.len() == MAX_TRACKED_FRAMES {
            self.frames.pop_front();
            self.evicted += 1;
        }
        self.frames.push_back(timestamp);
    }

    /// Number of callbacks recorded since the last reset.
    pub fn count(&self) -> usize {
        self.frames.len() + self.evicted
    }

    /// Starts a new, empty window.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.evicted = 0;
    }

    /// Drops frames recorded strictly before `cutoff`.
    pub fn prune_older_than(&mut self, cutoff: f64) {
        let mut pruned = false;
        while self.frames.front().is_some_and(|&t| t < cutoff) {
            self.frames.pop_front();
            pruned = true;
        }
        // Evicted frames predate every retained one, so they go too.
        if pruned {
            self.evicted = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with(timestamps: &[f64]) -> FrameTimestampWindow {
        let mut w = FrameTimestampWindow::new();
        for &t in timestamps {
            w.append(t);
        }
        w
    }

    // ── count / reset ─────────────────────────────────────────────────────

    #[test]
    fn new_window_is_empty() {
        assert_eq!(FrameTimestampWindow::new().count(), 0);
    }

    #[test]
    fn count_tracks_appends() {
        let w = window_with(&[0.0, 0.1, 0.2]);
        assert_eq!(w.count(), 3);
    }

    #[test]
    fn reset_after_count_starts_from_zero() {
        let mut w = window_with(&[0.0, 0.1, 0.2]);
        assert_eq!(w.count(), 3);
        w.reset();
        assert_eq!(w.count(), 0);
        w.append(0.3);
        w.append(0.4);
        assert_eq!(w.count(), 2);
    }

    #[test]
    fn out_of_order_timestamps_are_counted() {
        let w = window_with(&[0.5, 0.2]);
        assert_eq!(w.count(), 2);
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn overflow_still_counts_every_frame() {
        let mut w = FrameTimestampWindow::new();
        let total = MAX_TRACKED_FRAMES + 10;
        for i in 0..total {
            w.append(i as f64);
        }
        assert_eq!(w.count(), total);

        w.reset();
        assert_eq!(w.count(), 0);
    }

    // ── pruning ───────────────────────────────────────────────────────────

    #[test]
    fn prune_drops_only_older_frames() {
        let mut w = window_with(&[1.0, 1.5, 2.0, 2.5]);
        w.prune_older_than(2.0);
        assert_eq!(w.count(), 2);

        w.prune_older_than(0.0);
        assert_eq!(w.count(), 2);
    }

    #[test]
    fn prune_everything_after_a_gap() {
        let mut w = window_with(&[1.0, 1.1, 1.2]);
        w.append(4.5);
        w.prune_older_than(3.5);
        assert_eq!(w.count(), 1);
    }

    #[test]
    fn prune_clears_evicted_frames() {
        let mut w = FrameTimestampWindow::new();
        for i in 0..MAX_TRACKED_FRAMES + 10 {
            w.append(i as f64);
        }
        // Oldest retained frame is 10.0; frames 0..10 were evicted.
        w.prune_older_than(20.0);
        assert_eq!(w.count(), MAX_TRACKED_FRAMES + 10 - 20);
    }

    #[test]
    fn prune_before_retained_keeps_evicted_count() {
        let mut w = FrameTimestampWindow::new();
        for i in 0..MAX_TRACKED_FRAMES + 10 {
            w.append(i as f64);
        }
        w.prune_older_than(5.0);
        assert_eq!(w.count(), MAX_TRACKED_FRAMES + 10);
    }
}
