//! Unit tests for dc-schedule.

#[cfg(test)]
mod scheduler {
    use dc_core::Millis;

    use crate::{ScheduleError, Scheduler};

    #[test]
    fn zero_interval_rejected() {
        let mut s = Scheduler::new();
        assert!(matches!(
            s.schedule_repeating(0, Millis::ZERO),
            Err(ScheduleError::ZeroInterval)
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn first_fire_is_one_interval_later() {
        let mut s = Scheduler::new();
        let task = s.schedule_repeating(100, Millis(0)).unwrap();
        assert_eq!(s.next_due(), Some(Millis(100)));
        assert_eq!(s.pop_due(Millis(99)), None);
        assert_eq!(s.pop_due(Millis(100)), Some((Millis(100), task)));
    }

    #[test]
    fn repeating_task_rearms() {
        let mut s = Scheduler::new();
        let task = s.schedule_repeating(100, Millis(0)).unwrap();

        let fired: Vec<_> = std::iter::from_fn(|| s.pop_due(Millis(350))).collect();
        assert_eq!(
            fired,
            vec![(Millis(100), task), (Millis(200), task), (Millis(300), task)]
        );
        assert_eq!(s.next_due(), Some(Millis(400)));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let task = s.schedule_repeating(100, Millis(0)).unwrap();
        assert!(s.cancel(task));
        assert!(!s.cancel(task), "cancel is idempotent");
        assert!(!s.is_active(task));
        assert_eq!(s.pop_due(Millis(10_000)), None);
        assert_eq!(s.next_due(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn tasks_interleave_by_due_time() {
        let mut s = Scheduler::new();
        let fast = s.schedule_repeating(100, Millis(0)).unwrap();
        let slow = s.schedule_repeating(250, Millis(0)).unwrap();

        let order: Vec<_> = std::iter::from_fn(|| s.pop_due(Millis(300)))
            .map(|(_, t)| t)
            .collect();
        assert_eq!(order, vec![fast, fast, slow, fast]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn ties_fire_in_arming_order() {
        let mut s = Scheduler::new();
        let a = s.schedule_repeating(100, Millis(0)).unwrap();
        let b = s.schedule_repeating(200, Millis(0)).unwrap();

        // `a` re-arms onto T200 after `b` was queued there; it still fires first.
        let fired: Vec<_> = std::iter::from_fn(|| s.pop_due(Millis(400))).collect();
        assert_eq!(
            fired,
            vec![
                (Millis(100), a),
                (Millis(200), a),
                (Millis(200), b),
                (Millis(300), a),
                (Millis(400), a),
                (Millis(400), b),
            ]
        );
    }

    #[test]
    fn later_armed_task_follows_on_tie() {
        let mut s = Scheduler::new();
        let slow = s.schedule_repeating(300, Millis(0)).unwrap();
        let fast = s.schedule_repeating(100, Millis(200)).unwrap();

        let order: Vec<_> = std::iter::from_fn(|| s.pop_due(Millis(300)))
            .map(|(_, t)| t)
            .collect();
        assert_eq!(order, vec![slow, fast]);
        assert_eq!(s.next_due(), Some(Millis(400)));
    }

    #[test]
    fn task_ids_are_unique() {
        let mut s = Scheduler::new();
        let a = s.schedule_repeating(10, Millis(0)).unwrap();
        s.cancel(a);
        let b = s.schedule_repeating(10, Millis(0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut s = Scheduler::new();
        s.schedule_repeating(10, Millis(0)).unwrap();
        s.schedule_repeating(20, Millis(0)).unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.pop_due(Millis(1_000)), None);
    }
}
