use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::pipeline::StepOutcome;

pub fn new() -> MultiProgress {
    MultiProgress::new()
}

pub fn spinner() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .expect("static progress template is valid")
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}

/// One spinner per pipeline task, stacked in run order.
pub struct StepProgress {
    multi: MultiProgress,
    style: ProgressStyle,
}

impl Default for StepProgress {
    fn default() -> Self {
        Self {
            multi: new(),
            style: spinner(),
        }
    }
}

impl StepProgress {
    /// Draws nothing; for library use and tests.
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            style: spinner(),
        }
    }

    pub fn start(&self, position: usize, total: usize, title: &str) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(self.style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            position,
            total,
            width = total.to_string().len()
        ));
        pb.set_message(title.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Run `f` with the spinners cleared, so log lines don't tear through them.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.multi.suspend(f)
    }
}

pub fn finish(pb: &ProgressBar, title: &str, outcome: StepOutcome, detail: Option<&str>) {
    let message = match (outcome, detail) {
        (StepOutcome::Success, _) => format!("Done: {title}"),
        (StepOutcome::Skipped, Some(detail)) => format!("Skipped: {title} ({detail})"),
        (StepOutcome::Skipped, None) => format!("Skipped: {title}"),
        (StepOutcome::Failed, Some(detail)) => format!("Failed: {title} ({detail})"),
        (StepOutcome::Failed, None) => format!("Failed: {title}"),
    };
    pb.finish_with_message(message);
}
