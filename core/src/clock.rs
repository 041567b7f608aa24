use serde::{Deserialize, Serialize};

/// Elapsed-seconds counter driven by an external 1-second periodic tick.
///
/// Starting and stopping are idempotent, so the engine can stop it on every terminal transition without tracking
/// whether it already did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    elapsed_secs: u32,
    running: bool,
}

impl Clock {
    pub const fn new() -> Self {
        Self {
            elapsed_secs: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("clock started at {}s", self.elapsed_secs);
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("clock stopped at {}s", self.elapsed_secs);
            self.running = false;
        }
    }

    /// Advances one second if running; returns whether the displayed value changed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            true
        } else {
            false
        }
    }

    pub const fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_while_running() {
        let mut clock = Clock::new();
        assert!(!clock.tick());
        clock.start();
        assert!(clock.tick());
        assert!(clock.tick());
        clock.stop();
        assert!(!clock.tick());
        assert_eq!(clock.elapsed_secs(), 2);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut clock = Clock::new();
        clock.start();
        clock.start();
        clock.tick();
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(), 1);
    }
}
