//! Goal → measure → indicator tree definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    /// Free-text summary of the measures grouped under this goal.
    pub measures_summary: String,
    #[serde(default)]
    pub children: Vec<Measure>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub children: Vec<Indicator>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicator {
    pub name: String,
}

/// The full navigable tree. Built once at startup and never mutated; all
/// descendant links, no back-pointers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hierarchy {
    pub name: String,
    pub goals: Vec<Goal>,
}

impl Hierarchy {
    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    pub fn goal_index(&self, name: &str) -> Option<usize> {
        self.goals.iter().position(|g| g.name == name)
    }

    /// The standard CMP goal set.
    pub fn standard() -> Self {
        Hierarchy {
            name: "Performance Measures".to_string(),
            goals: vec![
                goal(
                    "Congestion",
                    "Travel Time, Delay, Drive Alone",
                    vec![
                        measure(
                            "Travel Times",
                            "Travel Time",
                            &["Average travel time during AM and PM peak periods"],
                        ),
                        measure(
                            "Delay",
                            "Delay",
                            &["Annual Hours of Peak Hours Excessive Delay (PHED)"],
                        ),
                        measure(
                            "Non-SOV Travel",
                            "Drive Alone",
                            &["Percent of non-Single Occupant Vehicle (SOV) travel"],
                        ),
                    ],
                ),
                goal(
                    "Reliability",
                    "Reliability, Truck Reliability, Miles Traveled (Interstate), \
                     Miles Traveled (Non-Interstate)",
                    vec![
                        measure(
                            "Travel Time Reliability",
                            "Reliability",
                            &["Planning Time Index (95th percentile travel time / free-flow travel time)"],
                        ),
                        measure(
                            "Freight Reliability",
                            "Truck Reliability",
                            &["Average Truck Travel Time Reliability Index (TTTRI)"],
                        ),
                        measure(
                            "Interstate Reliability",
                            "Miles Traveled (Interstate)",
                            &["Percent of person-miles traveled on Interstate system that are reliable"],
                        ),
                        measure(
                            "Non-Interstate Reliability",
                            "Miles Traveled (Non-Interstate)",
                            &["Percent of person-miles traveled on non-Interstate system that are reliable"],
                        ),
                    ],
                ),
                goal(
                    "Access",
                    "Trip Length, EJ-Transit Access, Transit-Job Access, Access",
                    vec![
                        measure("Trip Length", "Trip Length", &["Trip Length"]),
                        measure("EJ Access", "EJ-Transit Access", &["EJ-Transit Access"]),
                        measure("Job Access", "Transit-Job Access", &["Transit-Job Access"]),
                        measure(
                            "Accessibility",
                            "Access",
                            &["Percentage of population within 1/2 mile of transit stops"],
                        ),
                    ],
                ),
                goal(
                    "Safety",
                    "Fatality - Injury",
                    vec![measure("Fatalities", "Fatality - Injury", &["Fatality - Injury"])],
                ),
            ],
        }
    }
}

fn goal(name: &str, measures_summary: &str, children: Vec<Measure>) -> Goal {
    Goal {
        name: name.to_string(),
        measures_summary: measures_summary.to_string(),
        children,
    }
}

fn measure(name: &str, description: &str, indicators: &[&str]) -> Measure {
    Measure {
        name: name.to_string(),
        description: description.to_string(),
        children: indicators
            .iter()
            .map(|n| Indicator { name: n.to_string() })
            .collect(),
    }
}
