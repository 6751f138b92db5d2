//! Unit tests for wall-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ProfileNumber, SectionNumber, TeamId};

    #[test]
    fn numbered_from_one() {
        assert_eq!(ProfileNumber::from_position(2), Some(ProfileNumber(3)));
        assert_eq!(SectionNumber::from_position(0), Some(SectionNumber(1)));
    }

    #[test]
    fn from_position_overflow() {
        assert_eq!(TeamId::from_position(u32::MAX as usize - 1), Some(TeamId(u32::MAX)));
        assert_eq!(TeamId::from_position(u32::MAX as usize), None);
    }

    #[test]
    fn ordering() {
        assert!(ProfileNumber(1) < ProfileNumber(2));
        assert!(SectionNumber(100) > SectionNumber(99));
    }

    #[test]
    fn display() {
        assert_eq!(TeamId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod day {
    use crate::Day;

    #[test]
    fn next_day() {
        assert_eq!(Day::FIRST, Day(1));
        assert_eq!(Day::FIRST.next(), Day(2));
    }

    #[test]
    fn days_order_and_display() {
        assert!(Day(0) < Day::FIRST);
        assert_eq!(Day(13).to_string(), "13");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{CoreError, WallConfig};

    #[test]
    fn defaults() {
        let c = WallConfig::default();
        assert_eq!(c.target_height, 30);
        assert_eq!(c.ice_per_foot, 195.0);
        assert_eq!(c.cost_per_ice_unit, 1900.0);
        assert_eq!(c.day_pause(), Duration::ZERO);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_teams_rejected() {
        let c = WallConfig { number_of_teams: 0, ..WallConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn negative_price_rejected() {
        let c = WallConfig { cost_per_ice_unit: -1.0, ..WallConfig::default() };
        assert!(c.validate().is_err());
        let c = WallConfig { ice_per_foot: f64::NAN, ..WallConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_threads_rejected() {
        let c = WallConfig { num_threads: Some(0), ..WallConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod layout {
    use crate::{CoreError, ProfileNumber, SectionNumber, WallLayout};

    fn sample() -> WallLayout {
        WallLayout::new(vec![vec![21, 25, 28], vec![17], vec![17, 22, 17, 19, 17]])
    }

    #[test]
    fn counts() {
        let l = sample();
        assert_eq!(l.profile_count(), 3);
        assert_eq!(l.section_count(), 9);
        assert!(!l.is_empty());
        assert!(WallLayout::default().is_empty());
    }

    #[test]
    fn sections_are_numbered_from_one() {
        let l = sample();
        let first: Vec<_> = l.sections().take(4).collect();
        assert_eq!(
            first,
            vec![
                (ProfileNumber(1), SectionNumber(1), 21),
                (ProfileNumber(1), SectionNumber(2), 25),
                (ProfileNumber(1), SectionNumber(3), 28),
                (ProfileNumber(2), SectionNumber(1), 17),
            ]
        );
    }

    #[test]
    fn total_deficit() {
        // (9 + 5 + 2) + 13 + (13 + 8 + 13 + 11 + 13)
        assert_eq!(sample().total_deficit(30), 16 + 13 + 58);
    }

    #[test]
    fn height_above_target_rejected() {
        let l = WallLayout::new(vec![vec![30], vec![12, 31]]);
        assert_eq!(
            l.validate(30),
            Err(CoreError::HeightAboveTarget {
                profile: ProfileNumber(2),
                section: SectionNumber(2),
                height:  31,
                target:  30,
            })
        );
        assert!(sample().validate(30).is_ok());
    }

    #[test]
    fn work_longer_than_day_counter_rejected() {
        // One team on two bare sections would need 2 * u32::MAX days.
        let l = WallLayout::new(vec![vec![0, 0]]);
        assert_eq!(l.validate(u32::MAX), Err(CoreError::TooLarge { what: "feet of work" }));
    }

    #[test]
    fn work_of_exactly_u32_max_feet_accepted() {
        let l = WallLayout::new(vec![vec![0]]);
        assert_eq!(l.total_deficit(u32::MAX), u64::from(u32::MAX));
        assert!(l.validate(u32::MAX).is_ok());
    }
}
