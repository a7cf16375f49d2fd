//! Batch ranking.

use std::cmp::Ordering;

use crate::thread::AnnotatedThread;

/// Sorts threads by priority, then date, both descending.
///
/// Dates are compared as raw strings, so ordering across differing date
/// formats is not chronological. The sort is stable: threads with equal
/// `(priority, date)` keep their input order.
#[must_use]
pub fn rank(mut threads: Vec<AnnotatedThread>) -> Vec<AnnotatedThread> {
    threads.sort_by(rank_order);
    threads
}

/// Ordering used by [`rank`]: `Less` means `a` ranks above `b`.
#[must_use]
pub fn rank_order(a: &AnnotatedThread, b: &AnnotatedThread) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.date.cmp(&a.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;

    fn annotated(id: &str, priority: u8, date: &str) -> AnnotatedThread {
        AnnotatedThread {
            id: id.to_string(),
            subject: String::new(),
            sender: String::new(),
            date: date.to_string(),
            priority,
            category: Category::Awaiting,
            summary: String::new(),
            original_length: 0,
            compressed_length: 0,
            compression_ratio: "0%".to_string(),
        }
    }

    fn ids(threads: &[AnnotatedThread]) -> Vec<&str> {
        threads.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_priority_then_date() {
        let ranked = rank(vec![
            annotated("a", 2, "2025-01-01"),
            annotated("b", 5, "2025-01-01"),
            annotated("c", 2, "2025-03-01"),
            annotated("d", 5, "2025-02-01"),
        ]);
        assert_eq!(ids(&ranked), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let ranked = rank(vec![
            annotated("first", 3, "x"),
            annotated("second", 3, "x"),
            annotated("third", 3, "x"),
        ]);
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dates_compare_as_strings() {
        // "Wed" > "Thu" lexically even though Thursday is later.
        let ranked = rank(vec![
            annotated("thu", 1, "Thu, 13 Feb 2025"),
            annotated("wed", 1, "Wed, 12 Feb 2025"),
        ]);
        assert_eq!(ids(&ranked), vec!["wed", "thu"]);
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
