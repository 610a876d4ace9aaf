use cmp_model::{Hierarchy, SelectionError, SelectionState};

#[test]
fn starts_on_first_goal_and_measure() {
    let h = Hierarchy::standard();
    let state = SelectionState::new(&h);

    assert_eq!(state.active_goal(), Some("Congestion"));
    assert_eq!(state.active_measure(), Some("Travel Times"));
    assert!(!state.sidebar_open());
}

#[test]
fn select_goal_resets_measure_to_first_child() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    for goal in &h.goals {
        state.select_goal(&h, &goal.name).unwrap();
        assert_eq!(state.active_goal(), Some(goal.name.as_str()));
        let expected = goal.children.first().map(|m| m.name.as_str());
        assert_eq!(state.active_measure(), expected);
    }
}

#[test]
fn select_goal_closes_sidebar() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    state.toggle_sidebar();
    assert!(state.sidebar_open());

    state.select_goal(&h, "Safety").unwrap();
    assert!(!state.sidebar_open());
}

#[test]
fn select_measure_within_active_goal() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    state.select_goal(&h, "Reliability").unwrap();
    state.toggle_sidebar();
    state.select_measure(&h, "Freight Reliability").unwrap();

    assert_eq!(state.active_measure(), Some("Freight Reliability"));
    assert!(!state.sidebar_open());
}

#[test]
fn select_measure_outside_active_goal_fails() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    // Job Access belongs to Access, not Congestion.
    let err = state.select_measure(&h, "Job Access").unwrap_err();
    assert_eq!(
        err,
        SelectionError::MeasureNotInGoal {
            goal: "Congestion".to_string(),
            measure: "Job Access".to_string(),
        }
    );
    assert_eq!(state.active_measure(), Some("Travel Times"));
}

#[test]
fn select_unknown_goal_fails_without_state_change() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    let err = state.select_goal(&h, "Throughput").unwrap_err();
    assert_eq!(err, SelectionError::UnknownGoal("Throughput".to_string()));
    assert_eq!(state.active_goal(), Some("Congestion"));
}

#[test]
fn sidebar_toggle_and_overlay_close() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    state.toggle_sidebar();
    assert!(state.sidebar_open());
    state.toggle_sidebar();
    assert!(!state.sidebar_open());

    state.toggle_sidebar();
    state.close_sidebar_overlay();
    assert!(!state.sidebar_open());
    state.close_sidebar_overlay();
    assert!(!state.sidebar_open());
}

#[test]
fn projections_follow_selection() {
    let h = Hierarchy::standard();
    let mut state = SelectionState::new(&h);

    state.select_goal(&h, "Access").unwrap();
    let measures = state.measures(&h);
    assert_eq!(measures.len(), 4);
    assert_eq!(measures[0].name, "Trip Length");
    assert_eq!(state.goal_index(&h), Some(2));

    state.select_measure(&h, "Accessibility").unwrap();
    let indicators = state.indicators(&h);
    assert_eq!(indicators.len(), 1);
    assert!(indicators[0].name.contains("transit stops"));
}
