//! Eisenhower matrix: urgent vs. important.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Task;

/// Cut-offs deciding what counts as urgent and important.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixThresholds {
    /// Due within this many days (overdue included)
    pub urgent_within_days: i64,
    /// Importance at or above this value
    pub min_importance: i32,
}

impl Default for MatrixThresholds {
    fn default() -> Self {
        Self {
            urgent_within_days: 3,
            min_importance: 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Urgent and important
    DoFirst,
    /// Important, not urgent
    Schedule,
    /// Urgent, not important
    Delegate,
    /// Neither
    Eliminate,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn classify(urgent: bool, important: bool) -> Self {
        match (urgent, important) {
            (true, true) => Quadrant::DoFirst,
            (false, true) => Quadrant::Schedule,
            (true, false) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do first",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EisenhowerMatrix {
    pub do_first: Vec<Task>,
    pub schedule: Vec<Task>,
    pub delegate: Vec<Task>,
    pub eliminate: Vec<Task>,
}

impl EisenhowerMatrix {
    pub fn quadrant(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::DoFirst => &self.do_first,
            Quadrant::Schedule => &self.schedule,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Eliminate => &self.eliminate,
        }
    }

    fn quadrant_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Task> {
        match quadrant {
            Quadrant::DoFirst => &mut self.do_first,
            Quadrant::Schedule => &mut self.schedule,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Eliminate => &mut self.eliminate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixReport {
    pub matrix: EisenhowerMatrix,
    pub urgent_threshold_days: i64,
    pub importance_threshold: i32,
}

/// Sorts tasks into quadrants, keeping input order inside each one.
pub fn eisenhower_matrix(
    tasks: &[Task],
    today: NaiveDate,
    thresholds: MatrixThresholds,
) -> MatrixReport {
    let mut matrix = EisenhowerMatrix::default();

    for task in tasks {
        let urgent = task.days_until_due(today) <= thresholds.urgent_within_days;
        let important = task.importance >= thresholds.min_importance;
        matrix
            .quadrant_mut(Quadrant::classify(urgent, important))
            .push(task.clone());
    }

    MatrixReport {
        matrix,
        urgent_threshold_days: thresholds.urgent_within_days,
        importance_threshold: thresholds.min_importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn test_quadrants() {
        let tasks = vec![
            Task::new("1", "Critical bug fix", today()).with_importance(9),
            Task::new("2", "Long-term planning", today() + Duration::days(30)).with_importance(8),
            Task::new("3", "Team meeting", today()).with_importance(5),
            Task::new("4", "Learn new technology", today() + Duration::days(60)).with_importance(6),
        ];
        let report = eisenhower_matrix(&tasks, today(), MatrixThresholds::default());

        let titles = |q: Quadrant| -> Vec<String> {
            report.matrix.quadrant(q).iter().map(|t| t.title.clone()).collect()
        };
        assert_eq!(titles(Quadrant::DoFirst), vec!["Critical bug fix"]);
        assert_eq!(titles(Quadrant::Schedule), vec!["Long-term planning"]);
        assert_eq!(titles(Quadrant::Delegate), vec!["Team meeting"]);
        assert_eq!(titles(Quadrant::Eliminate), vec!["Learn new technology"]);
        assert_eq!(report.urgent_threshold_days, 3);
        assert_eq!(report.importance_threshold, 7);
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = MatrixThresholds::default();
        let tasks = vec![
            Task::new("edge", "edge", today() + Duration::days(3)).with_importance(7),
            Task::new("late", "late", today() - Duration::days(10)).with_importance(1),
            Task::new("later", "later", today() + Duration::days(4)).with_importance(6),
        ];
        let report = eisenhower_matrix(&tasks, today(), t);
        assert_eq!(report.matrix.do_first.len(), 1);
        assert_eq!(report.matrix.delegate[0].id, "late");
        assert_eq!(report.matrix.eliminate[0].id, "later");
    }

    #[test]
    fn test_custom_thresholds() {
        let tasks = vec![Task::new("a", "a", today() + Duration::days(6)).with_importance(5)];
        let report = eisenhower_matrix(
            &tasks,
            today(),
            MatrixThresholds {
                urgent_within_days: 7,
                min_importance: 5,
            },
        );
        assert_eq!(report.matrix.do_first.len(), 1);
    }
}
