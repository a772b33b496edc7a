//! Derived View
//!
//! Pure projections of the task list used on every render.

use crate::models::{Filter, Task};

/// Tasks visible under `filter`, in list order
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Active/completed summary counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            active: tasks.len() - completed,
            completed,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

/// Message shown when nothing matches the current filter
pub fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No reminders yet".to_string(),
        other => format!("No {} reminders", other.as_str()),
    }
}

/// Footer summary line
pub fn remaining_label(counts: TaskCounts) -> String {
    format!("{} remaining", counts.active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks;
    use std::collections::HashSet;

    fn ids(tasks: &[Task]) -> HashSet<String> {
        tasks.iter().map(|task| task.id.clone()).collect()
    }

    fn sample() -> Vec<Task> {
        let mut list = Vec::new();
        for text in ["one", "two", "three", "four", "five"] {
            tasks::add_task(&mut list, text);
        }
        let first = list[0].id.clone();
        let third = list[2].id.clone();
        tasks::toggle_task(&mut list, &first);
        tasks::toggle_task(&mut list, &third);
        list
    }

    #[test]
    fn test_filters_partition_list() {
        let list = sample();
        let all = visible_tasks(&list, Filter::All);
        let active = visible_tasks(&list, Filter::Active);
        let completed = visible_tasks(&list, Filter::Completed);

        assert_eq!(all, list);
        assert!(ids(&active).is_disjoint(&ids(&completed)));
        let union: HashSet<String> = ids(&active).union(&ids(&completed)).cloned().collect();
        assert_eq!(union, ids(&list));
        assert!(active.iter().all(|task| !task.completed));
        assert!(completed.iter().all(|task| task.completed));
    }

    #[test]
    fn test_filter_keeps_list_order() {
        let list = sample();
        let active = visible_tasks(&list, Filter::Active);
        let texts: Vec<&str> = active.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["four", "two", "one"]);
    }

    #[test]
    fn test_counts() {
        let list = sample();
        let counts = TaskCounts::from_tasks(&list);
        assert_eq!(counts, TaskCounts { active: 3, completed: 2 });
        assert_eq!(counts.total(), 5);
        assert_eq!(TaskCounts::from_tasks(&[]), TaskCounts::default());
    }

    #[test]
    fn test_footer_visibility() {
        let empty = TaskCounts::from_tasks(&[]);
        assert!(empty.is_empty());
        assert!(!empty.has_completed());

        let mut list = Vec::new();
        tasks::add_task(&mut list, "a");
        let counts = TaskCounts::from_tasks(&list);
        assert!(!counts.is_empty());
        assert!(!counts.has_completed());

        let id = list[0].id.clone();
        tasks::toggle_task(&mut list, &id);
        let counts = TaskCounts::from_tasks(&list);
        assert!(!counts.is_empty());
        assert!(counts.has_completed());
    }

    #[test]
    fn test_labels() {
        assert_eq!(empty_message(Filter::All), "No reminders yet");
        assert_eq!(empty_message(Filter::Active), "No active reminders");
        assert_eq!(empty_message(Filter::Completed), "No completed reminders");
        assert_eq!(remaining_label(TaskCounts { active: 2, completed: 7 }), "2 remaining");
    }
}
