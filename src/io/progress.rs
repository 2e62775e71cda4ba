//! Progress display for subdivision rounds

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{prefix}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single bar counting subdivision rounds, optionally hidden
pub struct SubdivisionProgress {
    bar: ProgressBar,
}

impl SubdivisionProgress {
    /// Bar over `rounds` rounds; `visible = false` draws nothing
    pub fn new(rounds: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(rounds)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(ROUND_STYLE.clone());
        bar.set_message("subdividing");
        Self { bar }
    }

    /// Record a finished round and the size of its output
    pub fn round_done(&self, round: u32, tiles: usize) {
        self.bar.set_position(u64::from(round));
        self.bar.set_prefix(format!("{tiles} tiles"));
    }

    /// Rounds recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
