// src/state/bar_window.rs
use crate::data::{Row, TuitionField};

pub const MAX_BARS: usize = 8;

/// Contiguous slice `[start, start + num_bars)` of the ranked sequence
/// currently shown as full-size bars. Invariants: `start + num_bars <=
/// total` and `num_bars == min(MAX_BARS, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarWindow {
    start: usize,
    num_bars: usize,
    total: usize,
}

impl BarWindow {
    pub fn new(total: usize) -> Self {
        Self {
            start: 0,
            num_bars: total.min(MAX_BARS),
            total,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.num_bars
    }

    pub fn num_bars(&self) -> usize {
        self.num_bars
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    /// Recompute the window from the mover's absolute track position.
    /// Each drag event derives the window from scratch so replaying the
    /// same event stream cannot accumulate rounding error.
    pub fn drag_to(&mut self, pixel_x: f32, track_width: f32) {
        if self.total <= self.num_bars || track_width <= 0.0 {
            self.start = 0;
            return;
        }
        let fraction = (pixel_x / track_width).clamp(0.0, 1.0);
        let start = (fraction * self.total as f32).round() as usize;
        self.start = start.min(self.total - self.num_bars);
    }

    /// Mover geometry over a unit-width track: `(offset, width)`.
    /// Spans the whole track when everything already fits on screen.
    pub fn mover_fractions(&self) -> (f32, f32) {
        if self.total <= self.num_bars {
            return (0.0, 1.0);
        }
        let total = self.total as f32;
        (self.start as f32 / total, self.num_bars as f32 / total)
    }
}

/// Ranked bar-chart data plus its pan window. Rebuilt whenever the bar
/// chart's source changes (filter change, tuition-column change, pin or
/// unpin); a rebuild resets the window to the front of the ranking.
#[derive(Debug, Default)]
pub struct BarState {
    ranked: Vec<Row>,
    window: Option<BarWindow>,
}

impl BarState {
    pub fn rebuild(&mut self, source: &[Row], field: TuitionField) {
        self.ranked = source.to_vec();
        // Stable descending sort, first-come-first-served on ties.
        // total_cmp keeps NaN rows ordered deterministically instead of
        // poisoning the sort.
        self.ranked
            .sort_by(|a, b| field.pay_gap(b).total_cmp(&field.pay_gap(a)));
        self.window = Some(BarWindow::new(self.ranked.len()));
    }

    pub fn ranked(&self) -> &[Row] {
        &self.ranked
    }

    pub fn visible(&self) -> &[Row] {
        match &self.window {
            Some(window) => &self.ranked[window.range()],
            None => &[],
        }
    }

    pub fn window(&self) -> Option<&BarWindow> {
        self.window.as_ref()
    }

    pub fn drag_to(&mut self, pixel_x: f32, track_width: f32) {
        if let Some(window) = &mut self.window {
            window.drag_to(pixel_x, track_width);
        }
    }

    /// Value-axis domain: extent of the pay gap over the FULL ranked
    /// sequence (not just the visible window), widened to include 0 so
    /// the baseline reference is always on-screen.
    pub fn value_domain(&self, field: TuitionField) -> (f64, f64) {
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        for row in &self.ranked {
            let v = field.pay_gap(row);
            // NaN fails both comparisons and is skipped.
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        if min > max {
            return (0.0, 0.0);
        }
        if min > 0.0 {
            min = 0.0;
        }
        if max < 0.0 {
            max = 0.0;
        }
        (min, max)
    }
}
