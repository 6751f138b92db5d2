//! Query routes and client-facing responses.

use std::str::FromStr;

use serde::Serialize;
use wall_core::{Day, ProfileNumber};

use crate::InspectError;

/// One of the three questions the inspector answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// `<profile>/days/<day>/`
    IceOnDay { profile: ProfileNumber, day: Day },
    /// `<profile>/overview/<day>/`
    ProfileCost { profile: ProfileNumber, day: Day },
    /// `overview/<day>/` or `overview/`
    FullCost { day: Option<Day> },
}

impl FromStr for Query {
    type Err = InspectError;

    /// Parse a route such as `"1/days/3/"`.  Leading and trailing slashes
    /// are optional.
    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let unknown = || InspectError::UnknownRoute(route.to_owned());
        let parts: Vec<&str> = route.trim_matches('/').split('/').collect();

        let number = |s: &str| s.parse::<u32>().map_err(|_| unknown());

        match parts.as_slice() {
            ["overview"] => Ok(Query::FullCost { day: None }),
            ["overview", day] => Ok(Query::FullCost { day: Some(Day(number(*day)?)) }),
            [profile, "days", day] => Ok(Query::IceOnDay {
                profile: ProfileNumber(number(*profile)?),
                day:     Day(number(*day)?),
            }),
            [profile, "overview", day] => Ok(Query::ProfileCost {
                profile: ProfileNumber(number(*profile)?),
                day:     Day(number(*day)?),
            }),
            _ => Err(unknown()),
        }
    }
}

/// The payload a client receives.
///
/// Serialized untagged, so the JSON is exactly one of
/// `{"ice_amount": .., "day": ..}`, `{"cost": .., "day": ..}` (with a null
/// day for the finished wall) or `{"message": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Ice { ice_amount: f64, day: Day },
    Cost { cost: f64, day: Option<Day> },
    Rejected { message: String },
}

impl QueryResponse {
    /// The response for a day the simulation never reached.
    pub fn rejected(day: Day) -> Self {
        QueryResponse::Rejected {
            message: InspectError::InvalidDay(day).to_string(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, QueryResponse::Rejected { .. })
    }
}
