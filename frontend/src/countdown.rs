use std::rc::Rc;

use yew::functional::Reducible;

/// Promo countdown. Counts down one second per tick and stops at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total: total_seconds,
            remaining: total_seconds,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Returns whether the countdown is still running afterwards.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        !self.is_finished()
    }

    pub fn minutes(&self) -> String {
        format!("{:02}", self.remaining / 60)
    }

    pub fn seconds(&self) -> String {
        format!("{:02}", self.remaining % 60)
    }

    pub fn label(&self) -> String {
        format!("{}:{}", self.minutes(), self.seconds())
    }

    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.remaining) / f64::from(self.total) * 100.0
    }
}

pub struct Tick;

impl Reducible for Countdown {
    type Action = Tick;

    fn reduce(self: Rc<Self>, _: Tick) -> Rc<Self> {
        if self.is_finished() {
            return self;
        }
        let mut next = *self;
        next.tick();
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixty_five_seconds() {
        let mut countdown = Countdown::new(65);
        assert_eq!(countdown.label(), "01:05");
        for _ in 0..65 {
            countdown.tick();
        }
        assert_eq!(countdown.label(), "00:00");
        for _ in 0..10 {
            assert!(!countdown.tick());
        }
        assert_eq!(countdown.label(), "00:00");
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn shows_exactly_total_plus_one_values() {
        for total in [0, 1, 59, 60, 61, 600] {
            let mut countdown = Countdown::new(total);
            let mut seen = HashSet::new();
            let mut last = countdown.remaining();
            seen.insert(countdown.label());
            for _ in 0..total + 5 {
                countdown.tick();
                assert!(countdown.remaining() <= last);
                last = countdown.remaining();
                seen.insert(countdown.label());
            }
            assert_eq!(seen.len(), total as usize + 1, "total={total}");
        }
    }

    #[test]
    fn tick_reports_running_until_zero() {
        let mut countdown = Countdown::new(2);
        assert!(countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.is_finished());
    }

    #[test]
    fn progress_tracks_remaining_fraction() {
        let mut countdown = Countdown::new(600);
        assert_eq!(countdown.progress_percent(), 100.0);
        for _ in 0..300 {
            countdown.tick();
        }
        assert_eq!(countdown.progress_percent(), 50.0);
        assert_eq!(Countdown::new(0).progress_percent(), 0.0);
    }

    #[test]
    fn minutes_are_zero_padded() {
        let countdown = Countdown::new(9 * 60 + 7);
        assert_eq!(countdown.minutes(), "09");
        assert_eq!(countdown.seconds(), "07");
    }

    #[test]
    fn finished_countdown_reducer_is_stable() {
        let done = Rc::new(Countdown::new(0));
        assert!(Rc::ptr_eq(&done, &done.clone().reduce(Tick)));
    }
}
