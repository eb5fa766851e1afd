//! Progress display for organize runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner for the walk and resolve phase. Hidden when `quiet`.
pub(crate) fn scan_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A bounded bar for the copy phase. Hidden when `quiet`.
pub(crate) fn copy_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );
    pb
}
