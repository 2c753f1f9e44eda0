//! Per-factor heuristics feeding the weighted priority score.
//!
//! Each factor maps one task attribute to a normalized value. Under validated
//! input every factor lies in `[0, 1]`. None of them clamp their input:
//! importance 15 yields 1.5. Range checks belong to ingestion.

use chrono::NaiveDate;

use crate::core::TaskNode;

/// Urgency of a due date relative to `today`.
///
/// | days until due | score |
/// |---|---|
/// | < 0 (overdue) | `0.8 + 0.05 * days_overdue`, capped at 1.0 |
/// | 0 | 0.9 |
/// | 1 | 0.8 |
/// | 2-3 | 0.7 |
/// | 4-7 | 0.5 |
/// | > 7 | `1 / (1 + ln(d - 6))`, floored at 0.1 |
pub fn urgency_score(due_date: NaiveDate, today: NaiveDate) -> f64 {
    urgency_for_days((due_date - today).num_days())
}

/// Urgency for a signed day offset. See [`urgency_score`].
pub fn urgency_for_days(days_until_due: i64) -> f64 {
    match days_until_due {
        d if d < 0 => (0.8 + d.unsigned_abs() as f64 * 0.05).min(1.0),
        0 => 0.9,
        1 => 0.8,
        2..=3 => 0.7,
        4..=7 => 0.5,
        d => (1.0 / (1.0 + ((d - 6) as f64).ln())).max(0.1),
    }
}

/// Maps the 1-10 importance scale onto `[0.1, 1.0]`.
pub fn importance_score(importance: i32) -> f64 {
    f64::from(importance) / 10.0
}

/// Quick wins score higher: short tasks get 1.0, long ones decay with
/// `1 / sqrt(hours)` down to 0.1.
pub fn effort_score(estimated_hours: f64) -> f64 {
    if estimated_hours <= 1.0 {
        1.0
    } else if estimated_hours <= 4.0 {
        0.8
    } else if estimated_hours <= 8.0 {
        0.5
    } else {
        (1.0 / estimated_hours.sqrt()).max(0.1)
    }
}

/// Shared-dependency overlap.
///
/// Counts the tasks in `all_tasks` that list at least one of `dependencies` in
/// their own dependency list (the scored task itself included, when present),
/// then maps that count to `0.5 + 0.2 * count`, capped at 1.0. A task without
/// dependencies is neutral at 0.5.
pub fn dependency_score<T: TaskNode>(dependencies: &[String], all_tasks: &[T]) -> f64 {
    if dependencies.is_empty() {
        return 0.5;
    }

    let blocking_count = all_tasks
        .iter()
        .filter(|task| {
            task.dependency_ids()
                .any(|dep| dependencies.iter().any(|own| own == dep))
        })
        .count();

    (0.5 + blocking_count as f64 * 0.2).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const EPS: f64 = 1e-9;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_urgency_fixed_bands() {
        assert_eq!(urgency_for_days(0), 0.9);
        assert_eq!(urgency_for_days(1), 0.8);
        assert_eq!(urgency_for_days(2), 0.7);
        assert_eq!(urgency_for_days(3), 0.7);
        for d in 4..=7 {
            assert_eq!(urgency_for_days(d), 0.5);
        }
    }

    #[test]
    fn test_urgency_overdue() {
        assert!((urgency_for_days(-1) - 0.85).abs() < EPS);
        assert!((urgency_for_days(-4) - 1.0).abs() < EPS);
        assert_eq!(urgency_for_days(-5), 1.0);
        assert_eq!(urgency_for_days(-365), 1.0);
    }

    #[test]
    fn test_urgency_decay_and_floor() {
        // d = 7 + 1 -> ln(2)
        let expected = 1.0 / (1.0 + 2f64.ln());
        assert!((urgency_for_days(8) - expected).abs() < EPS);
        // the decay starts above the 4-7 band value
        assert!(urgency_for_days(8) > urgency_for_days(7));
        assert!(urgency_for_days(9) < urgency_for_days(8));
        assert_eq!(urgency_for_days(100_000), 0.1);
    }

    #[test]
    fn test_urgency_from_dates() {
        let t = today();
        assert_eq!(urgency_score(t, t), 0.9);
        assert_eq!(urgency_score(t + Duration::days(5), t), 0.5);
        assert!(urgency_score(t - Duration::days(5), t) >= 0.8);
    }

    #[test]
    fn test_importance_normalization() {
        assert_eq!(importance_score(10), 1.0);
        assert_eq!(importance_score(5), 0.5);
        assert_eq!(importance_score(1), 0.1);
    }

    #[test]
    fn test_importance_is_not_clamped() {
        assert_eq!(importance_score(0), 0.0);
        assert_eq!(importance_score(15), 1.5);
    }

    #[test]
    fn test_effort_bands() {
        assert_eq!(effort_score(0.5), 1.0);
        assert_eq!(effort_score(1.0), 1.0);
        assert_eq!(effort_score(4.0), 0.8);
        assert_eq!(effort_score(8.0), 0.5);
        let long = effort_score(20.0);
        assert!(long < 0.3);
        assert!((long - 0.2236).abs() < 1e-4);
        assert_eq!(effort_score(1_000.0), 0.1);
    }

    #[test]
    fn test_dependency_neutral_without_dependencies() {
        let tasks = vec![("1", vec![]), ("2", vec!["1"])];
        assert_eq!(dependency_score(&[], &tasks), 0.5);
    }

    #[test]
    fn test_dependency_counts_shared_dependencies() {
        let tasks = vec![
            ("a", vec!["x"]),
            ("b", vec!["x", "y"]),
            ("c", vec!["z"]),
            ("d", vec![]),
        ];
        // a and b both list "x"
        let score = dependency_score(&["x".to_string()], &tasks);
        assert!((score - 0.9).abs() < EPS);

        // nothing shares "q", not even the scored task
        assert_eq!(dependency_score(&["q".to_string()], &tasks), 0.5);
    }

    #[test]
    fn test_dependency_capped() {
        let tasks: Vec<(String, Vec<String>)> = (0..10)
            .map(|i| (i.to_string(), vec!["root".to_string()]))
            .collect();
        assert_eq!(dependency_score(&["root".to_string()], &tasks), 1.0);
    }
}
