use dto::submission_outcome::SubmissionOutcome;
use rocket::tokio::time::Instant;
use std::time::Duration;

pub mod timer;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    #[default]
    Idle,
    Visible {
        outcome: SubmissionOutcome,
        generation: u64,
        shown_at: Instant,
    },
}

/// Lifecycle of the message telling the user how their last submission went.
///
/// Each shown notification gets a new generation, so that a timer started for a
/// notification that has since been replaced or dismissed can't hide the current one.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Notification,
    last_generation: u64,
}

impl NotificationState {
    #[cfg(test)]
    pub fn current(&self) -> Notification {
        self.current
    }

    pub fn outcome(&self) -> Option<SubmissionOutcome> {
        match self.current {
            Notification::Idle => None,
            Notification::Visible { outcome, .. } => Some(outcome),
        }
    }

    /// How long the visible notification has left before `delay` elapses.
    pub fn remaining(&self, delay: Duration) -> Option<Duration> {
        match self.current {
            Notification::Idle => None,
            Notification::Visible { shown_at, .. } => {
                Some(delay.saturating_sub(shown_at.elapsed()))
            }
        }
    }

    /// Show the outcome, replacing any visible notification.
    /// Returns the generation of the new notification.
    pub fn show(&mut self, outcome: SubmissionOutcome) -> u64 {
        self.last_generation += 1;
        self.current = Notification::Visible {
            outcome,
            generation: self.last_generation,
            shown_at: Instant::now(),
        };
        self.last_generation
    }

    /// Returns whether a visible notification has been hidden.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.current != Notification::Idle;
        self.current = Notification::Idle;
        was_visible
    }

    /// Hide the notification only if it is still the one of that generation.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.current {
            Notification::Visible {
                generation: current_generation,
                ..
            } if current_generation == generation => {
                self.current = Notification::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::submission_outcome::SubmissionOutcome::{NetworkFailure, Rejected, Success};
    use rocket::tokio::time::sleep;

    #[test]
    fn should_start_idle() {
        let state = NotificationState::default();

        assert_eq!(Notification::Idle, state.current());
        assert_eq!(None, state.outcome());
    }

    #[test]
    fn should_show_outcome() {
        let mut state = NotificationState::default();

        let generation = state.show(Success);

        assert!(matches!(
            state.current(),
            Notification::Visible {
                outcome: Success,
                generation: current_generation,
                ..
            } if current_generation == generation
        ));
        assert_eq!(Some(Success), state.outcome());
    }

    #[tokio::test(start_paused = true)]
    async fn should_count_down_from_when_notification_was_shown() {
        let delay = Duration::from_millis(5000);
        let mut state = NotificationState::default();
        assert_eq!(None, state.remaining(delay));

        state.show(NetworkFailure);
        sleep(Duration::from_millis(2000)).await;

        assert_eq!(Some(Duration::from_millis(3000)), state.remaining(delay));

        sleep(Duration::from_millis(4000)).await;
        assert_eq!(Some(Duration::ZERO), state.remaining(delay));
    }

    #[tokio::test(start_paused = true)]
    async fn should_restart_countdown_when_notification_is_replaced() {
        let delay = Duration::from_millis(5000);
        let mut state = NotificationState::default();
        state.show(NetworkFailure);
        sleep(Duration::from_millis(2000)).await;

        state.show(Success);

        assert_eq!(Some(delay), state.remaining(delay));
    }

    #[test]
    fn should_replace_visible_notification() {
        let mut state = NotificationState::default();
        let first_generation = state.show(Success);

        let second_generation = state.show(Rejected { status: 500 });

        assert_ne!(first_generation, second_generation);
        assert_eq!(Some(Rejected { status: 500 }), state.outcome());
    }

    #[test]
    fn should_dismiss_visible_notification() {
        let mut state = NotificationState::default();
        state.show(NetworkFailure);

        assert!(state.dismiss());
        assert_eq!(Notification::Idle, state.current());
    }

    #[test]
    fn should_not_dismiss_when_idle() {
        let mut state = NotificationState::default();

        assert!(!state.dismiss());
    }

    #[test]
    fn should_expire_current_notification() {
        let mut state = NotificationState::default();
        let generation = state.show(Success);

        assert!(state.expire(generation));
        assert_eq!(Notification::Idle, state.current());
    }

    #[test]
    fn should_not_expire_replaced_notification() {
        let mut state = NotificationState::default();
        let first_generation = state.show(Success);
        state.show(NetworkFailure);

        assert!(!state.expire(first_generation));
        assert_eq!(Some(NetworkFailure), state.outcome());
    }

    #[test]
    fn should_not_expire_dismissed_notification() {
        let mut state = NotificationState::default();
        let generation = state.show(Success);
        state.dismiss();

        assert!(!state.expire(generation));
        assert_eq!(Notification::Idle, state.current());
    }

    #[test]
    fn should_cycle_across_submissions() {
        let mut state = NotificationState::default();

        for _ in 0..3 {
            let generation = state.show(Success);
            assert!(state.expire(generation));
        }

        assert_eq!(Notification::Idle, state.current());
    }
}
