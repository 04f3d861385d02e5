use crate::ui;
use colored::Colorize;
use std::io::{self, Write};

/// Progress indicator for a removal batch
pub struct ProgressBar {
    total: usize,
    current: usize,
    message: String,
    width: usize,
}

impl ProgressBar {
    pub fn new(total: usize, message: &str) -> Self {
        Self {
            total,
            current: 0,
            message: message.to_string(),
            width: 30,
        }
    }

    /// Increment the progress by 1
    pub fn inc(&mut self) {
        if self.current < self.total {
            self.current += 1;
            self.draw();
        }
    }

    /// Update the item label shown next to the bar
    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.draw();
    }

    /// Finish the progress bar
    pub fn finish(self) {
        if ui::quiet() {
            return;
        }
        self.draw();
        println!();
    }

    fn draw(&self) {
        if ui::quiet() {
            return;
        }

        let percent = if self.total > 0 {
            (self.current * 100) / self.total
        } else {
            100
        };

        let filled = if self.total > 0 {
            (self.current * self.width) / self.total
        } else {
            self.width
        };

        let bar = "█".repeat(filled);
        let empty = "░".repeat(self.width.saturating_sub(filled));

        // Use carriage return to overwrite the line
        print!(
            "\r{} {} {} {}/{} {}%",
            "▸".dimmed(),
            self.message.cyan(),
            format!("[{}{}]", bar.green(), empty.dimmed()),
            self.current.to_string().bold(),
            self.total.to_string().dimmed(),
            percent.to_string().bold(),
        );

        io::stdout().flush().unwrap_or(());
    }
}
