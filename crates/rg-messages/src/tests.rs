//! Unit tests for rg-messages.

use chrono::{TimeDelta, TimeZone, Utc};
use rg_core::{AgentId, CoreError, Message, MessageId, SimTime};
use rg_schedule::{EventScheduler, Scheduler};

use crate::{RegularEventMessage, WakeUpMessage};

fn day0() -> SimTime {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

fn scheduler() -> EventScheduler {
    EventScheduler::new(day0(), Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()).unwrap()
}

// ── RegularEventMessage ───────────────────────────────────────────────────────

#[cfg(test)]
mod regular {
    use super::*;

    #[test]
    fn fixed_id_is_kept() {
        let agent = AgentId::new();
        let id = MessageId::new();
        let m = RegularEventMessage::with_id(agent, id);
        assert_eq!(m.id(), id);
        assert_eq!(m.sender(), agent);
        assert_eq!(m.destination(), agent);
    }

    #[test]
    fn fresh_ids_differ() {
        let agent = AgentId::new();
        let m1 = RegularEventMessage::new(agent);
        let m2 = RegularEventMessage::new(agent);
        assert_ne!(m1.id(), m2.id());
        let c = m1.clone_fresh();
        assert_ne!(c.id(), m1.id());
        assert_eq!(c.destination(), agent);
    }

    #[test]
    fn display_format() {
        let m = RegularEventMessage::new(AgentId::NIL);
        assert_eq!(
            m.to_string(),
            format!(
                "RegularEventMessage(Sender={}, Destination={}, Id={})",
                m.sender(),
                m.destination(),
                m.id()
            )
        );
    }

    #[test]
    fn start_after_end_rejected() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let err = RegularEventMessage::create_and_schedule(
            &p, TimeDelta::days(1), day0() + TimeDelta::days(2), day0() + TimeDelta::days(1), &mut s,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::StartAfterEnd { .. }));
        assert!(s.queue().is_empty());
    }

    #[test]
    fn zero_interval_rejected() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let err = RegularEventMessage::create_and_schedule(
            &p, TimeDelta::zero(), day0(), day0() + TimeDelta::days(1), &mut s,
        )
        .unwrap_err();
        assert_eq!(err, CoreError::ZeroInterval);
    }

    #[test]
    fn negative_interval_rejected() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let err = RegularEventMessage::create_and_schedule(
            &p, TimeDelta::days(-1), day0(), day0() + TimeDelta::days(1), &mut s,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::NegativeInterval(_)));
    }

    #[test]
    fn schedules_one_clone_per_day() {
        let mut s = scheduler();
        let agent = AgentId::new();
        let prototype = RegularEventMessage::new(agent);
        let start = day0() + TimeDelta::days(1);
        let end = start + TimeDelta::days(7) + TimeDelta::minutes(1);

        let n = RegularEventMessage::create_and_schedule(
            &prototype, TimeDelta::days(1), start, end, &mut s,
        )
        .unwrap();
        assert_eq!(n, 8);

        let q = s.queue();
        assert_eq!(q.len(), 8);
        assert_eq!(q.time_count(), 8);
        let times: Vec<SimTime> = q.times().collect();
        let expected: Vec<SimTime> = (0..8).map(|i| start + TimeDelta::days(i)).collect();
        assert_eq!(times, expected);

        let mut ids = std::collections::HashSet::new();
        for (_, m) in q.iter() {
            assert_ne!(m.id(), prototype.id());
            assert_eq!(m.sender(), prototype.sender());
            assert_eq!(m.destination(), prototype.destination());
            assert!(m.is::<RegularEventMessage>());
            ids.insert(m.id());
        }
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn end_is_exclusive() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let start = day0();
        let n = RegularEventMessage::create_and_schedule(
            &p, TimeDelta::days(1), start, start + TimeDelta::days(3), &mut s,
        )
        .unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn empty_range_schedules_nothing() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let n = RegularEventMessage::create_and_schedule(&p, TimeDelta::days(1), day0(), day0(), &mut s)
            .unwrap();
        assert_eq!(n, 0);
        assert!(s.queue().is_empty());
    }

    #[test]
    fn out_of_horizon_has_no_partial_effect() {
        let mut s = scheduler();
        let p = RegularEventMessage::new(AgentId::new());
        let start = s.end_time() - TimeDelta::days(2);
        let err = RegularEventMessage::create_and_schedule(
            &p, TimeDelta::days(1), start, start + TimeDelta::days(5), &mut s,
        )
        .unwrap_err();
        assert!(err.is_range_error());
        assert!(s.queue().is_empty());
    }
}

// ── WakeUpMessage ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod wake_up {
    use super::*;

    #[test]
    fn schedule_places_message_at_wake_time() {
        let mut s = scheduler();
        let agent = AgentId::new();
        let t = day0() + TimeDelta::hours(8);
        let id = WakeUpMessage::schedule(agent, t, &mut s).unwrap();

        let msgs: Vec<&dyn Message> = s.queue().iter_at(t).collect();
        assert_eq!(msgs.len(), 1);
        let wake = msgs[0].downcast_ref::<WakeUpMessage>().unwrap();
        assert_eq!(wake.id(), id);
        assert_eq!(wake.wake_time(), t);
        assert_eq!(wake.sender(), agent);
        assert_eq!(wake.destination(), agent);
    }

    #[test]
    fn schedule_outside_horizon_fails() {
        let mut s = scheduler();
        let err = WakeUpMessage::schedule(AgentId::new(), day0() - TimeDelta::hours(1), &mut s)
            .unwrap_err();
        assert!(matches!(err, CoreError::TimeBeforeStart { .. }));
        assert!(s.queue().is_empty());
    }

    #[test]
    fn display_format() {
        let agent = AgentId::NIL;
        let m = WakeUpMessage::new(agent, day0());
        let s = m.to_string();
        assert!(s.starts_with("WakeUpMessage(Sender=AgentId("), "got {s}");
        assert!(s.contains("WakeTime=2023-01-01 00:00:00 UTC"), "got {s}");
    }
}
