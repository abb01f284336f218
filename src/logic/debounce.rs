//! Debounce timer
//!
//! A restartable single-shot deadline polled from the event loop. Every
//! `poke` cancels the previous deadline and schedules a new one, so a burst
//! of keystrokes produces at most one `fire` per quiet period.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Cancel-and-reschedule: restart the quiet period from now.
    pub fn poke(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed but has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once per elapsed deadline, disarming it.
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_unarmed_never_fires() {
        let mut d = Debouncer::new(Duration::ZERO);
        assert!(!d.is_pending());
        assert!(!d.fire());
    }

    #[test]
    fn test_fires_once_after_delay() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.poke();
        assert!(d.is_pending());
        assert!(d.fire());
        // Disarmed after firing
        assert!(!d.is_pending());
        assert!(!d.fire());
    }

    #[test]
    fn test_poke_restarts_quiet_period() {
        let mut d = Debouncer::new(Duration::from_millis(60));
        d.poke();
        sleep(Duration::from_millis(40));
        assert!(!d.fire());

        // Another keystroke inside the quiet period pushes the deadline out
        d.poke();
        sleep(Duration::from_millis(40));
        assert!(!d.fire());

        sleep(Duration::from_millis(30));
        assert!(d.fire());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.poke();
        d.cancel();
        assert!(!d.fire());
    }
}
