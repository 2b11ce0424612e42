//! Unit tests for rg-core primitives.

use chrono::{TimeZone, Utc};

use crate::SimTime;

fn at(y: i32, m: u32, d: u32) -> SimTime {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[cfg(test)]
mod ids {
    use crate::{Addressable, AgentId, MessageId};

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(AgentId::new(), AgentId::new());
        assert_ne!(MessageId::new(), MessageId::new());
    }

    #[test]
    fn equality_is_by_value() {
        let id = AgentId::new();
        let copy = AgentId::from_uuid(id.as_uuid());
        assert_eq!(id, copy);
    }

    #[test]
    fn default_is_nil_sentinel() {
        assert_eq!(AgentId::default(), AgentId::NIL);
        assert!(AgentId::NIL.is_nil());
        assert!(!AgentId::new().is_nil());
    }

    #[test]
    fn fresh_ids_are_v4() {
        assert_eq!(AgentId::new().as_uuid().get_version_num(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(
            AgentId::NIL.to_string(),
            "AgentId(00000000-0000-0000-0000-000000000000)"
        );
    }

    #[test]
    fn agent_id_is_addressable() {
        let id = AgentId::new();
        assert_eq!(id.id(), id);
        assert_eq!((&id).id(), id);
    }
}

#[cfg(test)]
mod time {
    use chrono::TimeDelta;

    use super::at;
    use crate::{CoreError, SimClock, SimConfig};

    #[test]
    fn clock_starts_at_start() {
        let clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        assert_eq!(clock.current(), at(2023, 1, 1));
        assert!(clock.is_running());
    }

    #[test]
    fn end_before_start_rejected() {
        let err = SimClock::new(at(2025, 1, 1), at(2023, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidHorizon { .. }));
    }

    #[test]
    fn zero_length_horizon_allowed_but_not_running() {
        let clock = SimClock::new(at(2023, 1, 1), at(2023, 1, 1)).unwrap();
        assert!(!clock.is_running());
        assert!(clock.check(at(2023, 1, 1)).is_ok());
    }

    #[test]
    fn check_names_the_violated_bound() {
        let mut clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        assert!(matches!(
            clock.check(at(2022, 12, 31)),
            Err(CoreError::TimeBeforeStart { .. })
        ));
        assert!(matches!(
            clock.check(at(2025, 1, 2)),
            Err(CoreError::TimeAfterEnd { .. })
        ));

        clock.advance_to(at(2024, 1, 1)).unwrap();
        assert!(matches!(
            clock.check(at(2023, 6, 1)),
            Err(CoreError::TimeBeforeCurrent { .. })
        ));
        assert!(clock.check(at(2024, 1, 1)).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        assert!(clock.check(at(2023, 1, 1)).is_ok());
        assert!(clock.check(at(2025, 1, 1)).is_ok());
        assert!(clock.check(at(2025, 1, 1) + TimeDelta::seconds(1)).is_err());
    }

    #[test]
    fn advance_never_goes_backwards() {
        let mut clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        clock.advance_to(at(2024, 1, 1)).unwrap();
        assert!(clock.advance_to(at(2023, 6, 1)).is_err());
        assert_eq!(clock.current(), at(2024, 1, 1));
    }

    #[test]
    fn advancing_to_end_stops_running() {
        let mut clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        clock.advance_to(at(2025, 1, 1)).unwrap();
        assert!(!clock.is_running());
    }

    #[test]
    fn range_error_classification() {
        let clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        assert!(clock.check(at(2020, 1, 1)).unwrap_err().is_range_error());
        assert!(!CoreError::ZeroInterval.is_range_error());
    }

    #[test]
    fn config_validate_and_make_clock() {
        let good = SimConfig::new(at(2023, 1, 1), at(2025, 1, 1));
        assert!(good.validate().is_ok());
        assert_eq!(good.make_clock().unwrap().end(), at(2025, 1, 1));

        let bad = SimConfig::new(at(2025, 1, 1), at(2023, 1, 1));
        assert!(bad.validate().is_err());
        assert!(bad.make_clock().is_err());
    }

    #[test]
    fn clock_display() {
        let clock = SimClock::new(at(2023, 1, 1), at(2025, 1, 1)).unwrap();
        let s = clock.to_string();
        assert!(s.starts_with("SimClock(StartTime=2023-01-01"), "got {s}");
    }
}

#[cfg(test)]
mod rng {
    use crate::IdGenerator;

    #[test]
    fn deterministic_same_seed() {
        let mut g1 = IdGenerator::new(12345);
        let mut g2 = IdGenerator::new(12345);
        for _ in 0..50 {
            assert_eq!(g1.agent_id(), g2.agent_id());
            assert_eq!(g1.message_id(), g2.message_id());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut g1 = IdGenerator::new(1);
        let mut g2 = IdGenerator::new(2);
        assert_ne!(g1.agent_id(), g2.agent_id());
    }

    #[test]
    fn generated_ids_are_v4_shaped() {
        let mut g = IdGenerator::new(7);
        let id = g.spec_id();
        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert!(!id.is_nil());
    }
}

#[cfg(test)]
mod message {
    use std::fmt;

    use crate::{AgentId, Message, MessageId};

    #[derive(Debug)]
    struct Ping {
        id: MessageId,
        to: AgentId,
    }

    impl fmt::Display for Ping {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Ping({})", self.id)
        }
    }

    impl Message for Ping {
        fn id(&self) -> MessageId { self.id }
        fn sender(&self) -> AgentId { self.to }
        fn destination(&self) -> AgentId { self.to }
    }

    #[derive(Debug)]
    struct Pong;

    impl fmt::Display for Pong {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Pong")
        }
    }

    impl Message for Pong {
        fn id(&self) -> MessageId { MessageId::NIL }
        fn sender(&self) -> AgentId { AgentId::NIL }
        fn destination(&self) -> AgentId { AgentId::NIL }
    }

    #[test]
    fn downcast_through_trait_object() {
        let to = AgentId::new();
        let boxed: Box<dyn Message> = Box::new(Ping { id: MessageId::new(), to });
        let msg: &dyn Message = boxed.as_ref();
        assert!(msg.is::<Ping>());
        assert!(!msg.is::<Pong>());
        assert_eq!(msg.downcast_ref::<Ping>().unwrap().to, to);
        assert!(msg.downcast_ref::<Pong>().is_none());
    }
}
