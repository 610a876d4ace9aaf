//! Selection state machine: active goal, active measure, sidebar visibility.

use crate::hierarchy::{Hierarchy, Indicator, Measure};
use crate::{SelectionError, SelectionResult};

/// Tracks which goal/measure is active and whether the measures sidebar
/// overlay is open. All transitions happen synchronously on the UI thread;
/// selections are kept by name and resolved against the hierarchy on read,
/// the same way the rest of the app refers to tree entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    active_goal: Option<String>,
    active_measure: Option<String>,
    sidebar_open: bool,
}

impl SelectionState {
    /// Starts on the first goal and its first measure, sidebar closed.
    pub fn new(hierarchy: &Hierarchy) -> Self {
        let active_goal = hierarchy.goals.first().map(|g| g.name.clone());
        let active_measure = hierarchy
            .goals
            .first()
            .and_then(|g| g.children.first())
            .map(|m| m.name.clone());

        Self {
            active_goal,
            active_measure,
            sidebar_open: false,
        }
    }

    pub fn active_goal(&self) -> Option<&str> {
        self.active_goal.as_deref()
    }

    pub fn active_measure(&self) -> Option<&str> {
        self.active_measure.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Activates a goal, resets the active measure to that goal's first child
    /// (or none) and closes the sidebar overlay.
    pub fn select_goal(&mut self, hierarchy: &Hierarchy, name: &str) -> SelectionResult<()> {
        let goal = hierarchy
            .goal(name)
            .ok_or_else(|| SelectionError::UnknownGoal(name.to_string()))?;

        self.active_goal = Some(goal.name.clone());
        self.active_measure = goal.children.first().map(|m| m.name.clone());
        self.sidebar_open = false;
        Ok(())
    }

    /// Activates a measure belonging to the active goal and closes the
    /// sidebar overlay.
    pub fn select_measure(&mut self, hierarchy: &Hierarchy, name: &str) -> SelectionResult<()> {
        let goal_name = self.active_goal.as_deref().ok_or(SelectionError::NoActiveGoal)?;
        let goal = hierarchy
            .goal(goal_name)
            .ok_or_else(|| SelectionError::UnknownGoal(goal_name.to_string()))?;

        let measure = goal
            .children
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| SelectionError::MeasureNotInGoal {
                goal: goal.name.clone(),
                measure: name.to_string(),
            })?;

        self.active_measure = Some(measure.name.clone());
        self.sidebar_open = false;
        Ok(())
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Scrim/overlay tap; idempotent.
    pub fn close_sidebar_overlay(&mut self) {
        self.sidebar_open = false;
    }

    /// Measures of the active goal.
    pub fn measures<'h>(&self, hierarchy: &'h Hierarchy) -> &'h [Measure] {
        self.active_goal
            .as_deref()
            .and_then(|name| hierarchy.goal(name))
            .map(|g| g.children.as_slice())
            .unwrap_or(&[])
    }

    /// Indicators of the active measure.
    pub fn indicators<'h>(&self, hierarchy: &'h Hierarchy) -> &'h [Indicator] {
        self.current_measure(hierarchy)
            .map(|m| m.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_measure<'h>(&self, hierarchy: &'h Hierarchy) -> Option<&'h Measure> {
        let name = self.active_measure.as_deref()?;
        self.measures(hierarchy).iter().find(|m| m.name == name)
    }

    /// Position of the active goal in the goal list, for cyclic color
    /// assignment.
    pub fn goal_index(&self, hierarchy: &Hierarchy) -> Option<usize> {
        self.active_goal
            .as_deref()
            .and_then(|name| hierarchy.goal_index(name))
    }
}
