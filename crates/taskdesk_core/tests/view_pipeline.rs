use taskdesk_core::view::{render, render_sorted, search, sort_tasks};
use taskdesk_core::{Priority, SortKey, Task, TaskStatus};

fn task(title: &str, priority: Priority) -> Task {
    Task::new(title, "", "", priority)
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn priority_sort_is_stable() {
    let tasks = vec![
        task("A", Priority::Medium),
        task("B", Priority::High),
        task("C", Priority::Medium),
    ];

    let rendered = render(&tasks, "");
    assert_eq!(titles(&rendered), ["B", "A", "C"]);
}

#[test]
fn unknown_priority_sorts_with_medium_in_input_order() {
    let mut odd = task("odd", Priority::Medium);
    odd.priority = Priority::Unknown("someday".to_string());
    let tasks = vec![
        task("low", Priority::Low),
        task("medium", Priority::Medium),
        odd,
        task("high", Priority::High),
    ];

    let rendered = render(&tasks, "");
    assert_eq!(titles(&rendered), ["high", "medium", "odd", "low"]);
}

#[test]
fn search_is_trimmed_and_case_insensitive() {
    let mut groceries = task("Buy groceries", Priority::Low);
    groceries.description = "Milk, bread".to_string();
    let tasks = vec![groceries, task("Write report", Priority::High)];

    assert_eq!(titles(&search(&tasks, "  MILK ")), ["Buy groceries"]);
    assert_eq!(titles(&search(&tasks, "report")), ["Write report"]);
    assert!(search(&tasks, "nothing matches").is_empty());
}

#[test]
fn blank_query_keeps_everything() {
    let tasks = vec![task("a", Priority::Low), task("b", Priority::Low)];
    assert_eq!(search(&tasks, "   ").len(), 2);
}

#[test]
fn render_searches_then_sorts() {
    let tasks = vec![
        task("report draft", Priority::Low),
        task("groceries", Priority::High),
        task("report final", Priority::High),
    ];

    let rendered = render(&tasks, "report");
    assert_eq!(titles(&rendered), ["report final", "report draft"]);
}

#[test]
fn render_does_not_touch_input() {
    let tasks = vec![task("a", Priority::Low), task("b", Priority::High)];
    let before = tasks.clone();

    let _ = render(&tasks, "a");
    let _ = render(&tasks, "");
    assert_eq!(tasks, before);
}

#[test]
fn status_sort_puts_active_first_stably() {
    let mut first_done = task("done-1", Priority::Medium);
    first_done.status = TaskStatus::Done;
    let mut second_done = task("done-2", Priority::Medium);
    second_done.status = TaskStatus::Done;
    let mut tasks = vec![
        first_done,
        task("active-1", Priority::Medium),
        second_done,
        task("active-2", Priority::Medium),
    ];

    sort_tasks(&mut tasks, SortKey::Status);
    assert_eq!(titles(&tasks), ["active-1", "active-2", "done-1", "done-2"]);
}

#[test]
fn render_sorted_by_due_date() {
    let mut later = task("later", Priority::High);
    later.due_date = "2025-09-01".to_string();
    let mut sooner = task("sooner", Priority::Low);
    sooner.due_date = "2025-02-01".to_string();
    let tasks = vec![task("undated", Priority::High), later, sooner];

    let rendered = render_sorted(&tasks, "", SortKey::DueDate);
    assert_eq!(titles(&rendered), ["sooner", "later", "undated"]);
}
