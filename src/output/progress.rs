//! Progress reporting functionality
//!
//! Progress reporting for the banner batch with support for quiet and
//! verbose modes.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the banner synchronization batch
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool) -> Self {
        // No progress bar in quiet mode
        let bar = if quiet {
            None
        } else {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(bar)
        };

        Self { quiet, verbose, bar }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
            bar.set_message(message.to_string());
        }

        if self.verbose {
            println!("[{}/{}] {}", current, total, message);
        }
    }

    /// Finish the progress operation
    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }

        if self.verbose {
            println!("Finished: {}", message);
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }
}
