use std::time::{Duration, Instant};

/// Utility for keeping track of the time it took to perform some operation.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a new `Timer` starting now.
    pub fn now() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Reset internal timer to now.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Time since the timer was last reset.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Print a message with the elapsed time since the timer was last reset.
    pub fn print_elapsed(&self, label: &str) {
        eprintln!("{} took {:?}", label, self.elapsed());
    }
}
