//! Display pipeline: status filter, free-text search, stable sort.
//!
//! Pure functions over a task snapshot. Nothing here touches the service,
//! so it can run on every keystroke.

use crate::model::task::{Task, TaskStatus};

/// Which status slice of the collection to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Done,
}

impl StatusFilter {
    /// Status to pass to `TaskService::list`; `None` means everything.
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Active => Some(TaskStatus::Active),
            Self::Done => Some(TaskStatus::Done),
        }
    }
}

/// Secondary orderings offered next to the default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// High before medium before low.
    #[default]
    Priority,
    /// Earliest due date first; tasks without one go last.
    DueDate,
    /// Active before done.
    Status,
}

/// Search, then sort by priority. This is what the task list shows.
pub fn render(tasks: &[Task], query: &str) -> Vec<Task> {
    render_sorted(tasks, query, SortKey::Priority)
}

pub fn render_sorted(tasks: &[Task], query: &str, key: SortKey) -> Vec<Task> {
    let mut visible = search(tasks, query);
    sort_tasks(&mut visible, key);
    visible
}

/// Keeps tasks whose title or description contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable in-place sort; equal keys keep their input order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        SortKey::DueDate => {
            tasks.sort_by(|a, b| {
                (a.due_date.is_empty(), &a.due_date).cmp(&(b.due_date.is_empty(), &b.due_date))
            });
        }
        SortKey::Status => tasks.sort_by_key(Task::is_done),
    }
}

#[cfg(test)]
mod tests {
    use super::{search, sort_tasks, SortKey};
    use crate::model::task::{Priority, Task};

    fn task(title: &str, due_date: &str) -> Task {
        Task::new(title, "", due_date, Priority::Medium)
    }

    #[test]
    fn search_matches_description_and_non_ascii_case_insensitively() {
        let mut tea = task("Tea", "");
        tea.description = "Купить ЧАЙ".to_string();
        let tasks = vec![tea, task("Coffee", "")];

        let hits = search(&tasks, "  чай ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Tea");
    }

    #[test]
    fn due_date_sort_puts_undated_last_and_is_stable() {
        let mut tasks = vec![
            task("none-1", ""),
            task("late", "2025-03-01"),
            task("none-2", ""),
            task("early", "2025-01-15"),
        ];
        sort_tasks(&mut tasks, SortKey::DueDate);
        let titles = tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["early", "late", "none-1", "none-2"]);
    }
}
