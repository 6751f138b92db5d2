//! Unit tests for wall-inspect.

use wall_core::{Day, ProfileNumber, WallConfig, WallLayout};

use crate::WallInspector;

// ── Helpers ───────────────────────────────────────────────────────────────────

const ICE: f64 = 195.0;
const PRICE: f64 = 1900.0;

/// Three profiles, nine sections, 87 feet to build; the slowest section
/// needs 13 days.
fn sample_layout() -> WallLayout {
    WallLayout::new(vec![vec![21, 25, 28], vec![17], vec![17, 22, 17, 19, 17]])
}

fn inspector(teams: u32, layout: &WallLayout) -> WallInspector {
    let config = WallConfig {
        number_of_teams:   teams,
        ice_per_foot:      ICE,
        cost_per_ice_unit: PRICE,
        ..WallConfig::default()
    };
    WallInspector::new(config, layout).unwrap()
}

// ── CostCalculator ────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use super::*;
    use crate::{CostCalculator, InspectError};

    fn table() -> wall_sim::DayTable {
        // Two teams, two sections one and two feet short.
        inspector(2, &WallLayout::new(vec![vec![29], vec![28]]))
            .day_table(None)
            .unwrap()
    }

    #[test]
    fn conversions() {
        let c = CostCalculator::new(ICE, PRICE);
        assert_eq!(c.ice_for_feet(3), 585.0);
        assert_eq!(c.cost_for_feet(3), 1_111_500.0);
        assert_eq!(c.cost_for_feet(0), 0.0);
    }

    #[test]
    fn from_config() {
        let c = CostCalculator::from_config(&WallConfig::default());
        assert_eq!(c, CostCalculator::new(195.0, 1900.0));
    }

    #[test]
    fn ice_on_day() {
        let c = CostCalculator::new(ICE, PRICE);
        let t = table();
        assert_eq!(c.ice_on_day(&t, ProfileNumber(1), Day(1)).unwrap(), 195.0);
        assert_eq!(c.ice_on_day(&t, ProfileNumber(2), Day(2)).unwrap(), 195.0);
        // Day 2 exists, but profile 1 was finished on day 1.
        assert_eq!(c.ice_on_day(&t, ProfileNumber(1), Day(2)).unwrap(), 0.0);
    }

    #[test]
    fn ice_on_missing_day_is_invalid() {
        let c = CostCalculator::new(ICE, PRICE);
        let t = table();
        assert!(matches!(
            c.ice_on_day(&t, ProfileNumber(1), Day(3)),
            Err(InspectError::InvalidDay(Day(3)))
        ));
        assert!(matches!(
            c.ice_on_day(&t, ProfileNumber(1), Day(0)),
            Err(InspectError::InvalidDay(Day(0)))
        ));
    }

    #[test]
    fn cost_to_day_never_fails() {
        let c = CostCalculator::new(ICE, PRICE);
        let t = table();
        assert_eq!(c.cost_to_day(&t, ProfileNumber(2), Day(1)), 370_500.0);
        assert_eq!(c.cost_to_day(&t, ProfileNumber(2), Day(2)), 741_000.0);
        assert_eq!(c.cost_to_day(&t, ProfileNumber(2), Day(50)), 741_000.0);
        assert_eq!(c.cost_to_day(&t, ProfileNumber(9), Day(2)), 0.0);
    }

    #[test]
    fn total_cost() {
        let c = CostCalculator::new(ICE, PRICE);
        assert_eq!(c.total_cost(&table()), 3.0 * ICE * PRICE);
        assert_eq!(c.total_cost(&wall_sim::DayTable::new()), 0.0);
    }
}

// ── WallInspector ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod inspector {
    use super::*;
    use crate::InspectError;

    #[test]
    fn ice_on_first_day() {
        let w = inspector(20, &sample_layout());
        assert_eq!(w.get_ice_on_day(ProfileNumber(1), Day(1)).unwrap(), 585.0);
        assert_eq!(w.get_ice_on_day(ProfileNumber(2), Day(1)).unwrap(), 195.0);
        assert_eq!(w.get_ice_on_day(ProfileNumber(3), Day(1)).unwrap(), 975.0);
    }

    #[test]
    fn ice_on_last_day() {
        let w = inspector(20, &sample_layout());
        // On day 13 only the four 17-foot sections are still being worked.
        assert_eq!(w.get_ice_on_day(ProfileNumber(1), Day(13)).unwrap(), 0.0);
        assert_eq!(w.get_ice_on_day(ProfileNumber(2), Day(13)).unwrap(), 195.0);
        assert_eq!(w.get_ice_on_day(ProfileNumber(3), Day(13)).unwrap(), 585.0);
    }

    #[test]
    fn ice_after_completion_is_invalid_day() {
        let w = inspector(20, &sample_layout());
        assert!(matches!(
            w.get_ice_on_day(ProfileNumber(1), Day(14)),
            Err(InspectError::InvalidDay(Day(14)))
        ));
    }

    #[test]
    fn nothing_to_build_is_invalid_on_day_one() {
        let w = inspector(5, &WallLayout::new(vec![vec![30], vec![30]]));
        assert!(matches!(
            w.get_ice_on_day(ProfileNumber(1), Day(1)),
            Err(InspectError::InvalidDay(_))
        ));
        assert_eq!(w.get_full_cost(None).unwrap(), 0.0);
    }

    #[test]
    fn profile_cost_to_day() {
        let w = inspector(20, &sample_layout());
        assert_eq!(w.get_profile_cost_to_day(ProfileNumber(1), Day(1)).unwrap(), 1_111_500.0);
        assert_eq!(w.get_profile_cost_to_day(ProfileNumber(1), Day(2)).unwrap(), 2_223_000.0);
        // Past completion the whole profile is counted.
        assert_eq!(
            w.get_profile_cost_to_day(ProfileNumber(1), Day(40)).unwrap(),
            16.0 * ICE * PRICE
        );
    }

    #[test]
    fn full_cost() {
        let w = inspector(20, &sample_layout());
        assert_eq!(w.get_full_cost(Some(Day(1))).unwrap(), 3_334_500.0);
        assert_eq!(w.get_full_cost(None).unwrap(), 32_233_500.0);
        assert_eq!(w.get_full_cost(Some(Day(0))).unwrap(), 0.0);
    }

    #[test]
    fn full_cost_independent_of_team_count() {
        let layout = sample_layout();
        let expected = layout.total_deficit(30) as f64 * ICE * PRICE;
        for teams in [1, 2, 7, 50] {
            assert_eq!(inspector(teams, &layout).get_full_cost(None).unwrap(), expected);
        }
    }

    #[test]
    fn queries_do_not_share_state() {
        let w = inspector(3, &sample_layout());
        let first = w.get_full_cost(Some(Day(4))).unwrap();
        w.get_full_cost(None).unwrap();
        assert_eq!(w.get_full_cost(Some(Day(4))).unwrap(), first);
    }

    #[test]
    fn bad_config_fails_before_any_query() {
        let config = WallConfig { number_of_teams: 0, ..WallConfig::default() };
        assert!(matches!(
            WallInspector::new(config, &sample_layout()),
            Err(InspectError::Sim(_))
        ));
    }
}

// ── Queries and responses ─────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use serde_json::json;

    use super::*;
    use crate::{InspectError, Query, QueryResponse};

    #[test]
    fn parses_routes() {
        assert_eq!(
            "1/days/3/".parse::<Query>().unwrap(),
            Query::IceOnDay { profile: ProfileNumber(1), day: Day(3) }
        );
        assert_eq!(
            "/2/overview/5".parse::<Query>().unwrap(),
            Query::ProfileCost { profile: ProfileNumber(2), day: Day(5) }
        );
        assert_eq!(
            "overview/7/".parse::<Query>().unwrap(),
            Query::FullCost { day: Some(Day(7)) }
        );
        assert_eq!("overview/".parse::<Query>().unwrap(), Query::FullCost { day: None });
    }

    #[test]
    fn rejects_unknown_routes() {
        for route in ["", "1/days", "x/days/1", "1/weeks/2", "overview/-1", "1/days/2/3"] {
            assert!(
                matches!(route.parse::<Query>(), Err(InspectError::UnknownRoute(_))),
                "{route:?} should not parse"
            );
        }
    }

    #[test]
    fn answers_in_client_shape() {
        let w = inspector(20, &sample_layout());
        let ice = w.answer("1/days/1/".parse().unwrap()).unwrap();
        assert_eq!(serde_json::to_value(&ice).unwrap(), json!({"ice_amount": 585.0, "day": 1}));

        let cost = w.answer("1/overview/1/".parse().unwrap()).unwrap();
        assert_eq!(serde_json::to_value(&cost).unwrap(), json!({"cost": 1_111_500.0, "day": 1}));

        let full = w.answer("overview/".parse().unwrap()).unwrap();
        assert_eq!(serde_json::to_value(&full).unwrap(), json!({"cost": 32_233_500.0, "day": null}));
    }

    #[test]
    fn invalid_day_becomes_rejection() {
        let w = inspector(20, &sample_layout());
        let response = w.answer(Query::IceOnDay { profile: ProfileNumber(1), day: Day(20) }).unwrap();
        assert!(response.is_rejected());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Work on wall finished before day 20"})
        );
        assert_eq!(response, QueryResponse::rejected(Day(20)));
    }
}

// ── CSV report ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use super::*;
    use crate::{write_day_table, write_day_table_file};

    fn two_section_table() -> (WallInspector, wall_sim::DayTable) {
        let w = inspector(2, &WallLayout::new(vec![vec![29], vec![28]]));
        let t = w.day_table(None).unwrap();
        (w, t)
    }

    #[test]
    fn rows_in_day_then_profile_order() {
        let (w, t) = two_section_table();
        let mut out = Vec::new();
        write_day_table(&t, w.costs(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "day,profile,feet,ice,cost\n\
             1,1,1,195,370500\n\
             1,2,1,195,370500\n\
             2,2,1,195,370500\n"
        );
    }

    #[test]
    fn empty_table_writes_header_only() {
        let (w, _) = two_section_table();
        let mut out = Vec::new();
        write_day_table(&wall_sim::DayTable::new(), w.costs(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "day,profile,feet,ice,cost\n");
    }

    #[test]
    fn file_report_readable_as_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("days.csv");
        let (w, t) = two_section_table();
        write_day_table_file(&t, w.costs(), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["day", "profile", "feet", "ice", "cost"]);
        assert_eq!(rdr.records().count(), 3);
    }
}
