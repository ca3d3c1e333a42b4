//! Crawl progress, rendered with indicatif.
//!
//! The total starts at the descriptor count and grows as each descriptor's
//! first page reports how many pages it has.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// A visible bar on stderr.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    /// Tracks counts without drawing anything.
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    /// Grows the total by a descriptor's reported page count.
    pub fn extend(&mut self, pages: u64) {
        self.bar.inc_length(pages);
    }

    /// Records one page fetch.
    pub fn advance(&mut self) {
        self.bar.inc(1);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        let message: String = message.into();
        self.bar.set_message(message);
    }

    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
