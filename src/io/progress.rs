//! Terminal progress display for computation and rendering stages

use crate::io::configuration::PROGRESS_THRESHOLD;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one run
///
/// A disabled manager draws nothing, so library code can report
/// progress unconditionally. Rendering only shows a bar when the item
/// count is large enough to take noticeable time.
pub struct ProgressManager {
    enabled: bool,
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to the terminal
    pub fn new() -> Self {
        Self {
            enabled: true,
            bar: ProgressBar::hidden(),
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            bar: ProgressBar::hidden(),
        }
    }

    /// Whether anything will be drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn replace_bar(&mut self, bar: ProgressBar) {
        self.bar.finish_and_clear();
        self.bar = bar;
    }

    /// Show a spinner while the engine computes
    pub fn start_compute(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(spinner);
    }

    /// Switch to a bar counting rendered items
    ///
    /// Small jobs are still counted but not drawn.
    pub fn start_render(&mut self, total: usize) {
        let bar = if self.enabled && total >= PROGRESS_THRESHOLD {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(RENDER_STYLE.clone());
            bar.set_message("Rendering");
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total as u64);
        self.replace_bar(bar);
    }

    /// Count one rendered item
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Current position of the active bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the active stage
    pub fn finish_stage(&self) {
        self.bar.finish_and_clear();
    }
}
