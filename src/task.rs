use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub due_date: String, // "YYYY-MM-DD"
    pub done: bool,
}

/// What the list shows with respect to completion: everything, only done
/// tasks, or only open ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoneFilter {
    #[default]
    All,
    Done,
    NotDone,
}

impl DoneFilter {
    /// The transition applied on each filter-toggle intent.
    pub fn cycle(self) -> Self {
        match self {
            DoneFilter::All => DoneFilter::Done,
            DoneFilter::Done => DoneFilter::NotDone,
            DoneFilter::NotDone => DoneFilter::All,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            DoneFilter::All => true,
            DoneFilter::Done => task.done,
            DoneFilter::NotDone => !task.done,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DoneFilter::All => "All",
            DoneFilter::Done => "Done",
            DoneFilter::NotDone => "Not Done",
        }
    }
}

pub fn filter_by_done(tasks: Vec<Task>, show_done: DoneFilter) -> Vec<Task> {
    tasks.into_iter().filter(|t| show_done.matches(t)).collect()
}

/// Stable sort by the due-date string; equal dates keep their relative
/// order in both directions.
pub fn sort_by_due_date(mut tasks: Vec<Task>, ascending: bool) -> Vec<Task> {
    tasks.sort_by(|a, b| {
        if ascending {
            a.due_date.cmp(&b.due_date)
        } else {
            b.due_date.cmp(&a.due_date)
        }
    });
    tasks
}

pub fn compute_displayed(tasks: &[Task], show_done: DoneFilter, ascending: bool) -> Vec<Task> {
    sort_by_due_date(filter_by_done(tasks.to_vec(), show_done), ascending)
}

/// Flips `done` on the first task whose id matches. An unknown id is a
/// logged no-op, not an error.
pub fn toggle_done(mut tasks: Vec<Task>, id: u32) -> Vec<Task> {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => task.done = !task.done,
        None => debug!(id, "toggle ignored, no task with this id"),
    }
    tasks
}

/// Appends `task` as-is. The caller assigns the id (see [`next_id`]); a
/// colliding id is logged but the task is still appended.
pub fn add_task(mut tasks: Vec<Task>, task: Task) -> Vec<Task> {
    if tasks.iter().any(|t| t.id == task.id) {
        warn!(id = task.id, "adding a task with an id already in the store");
    }
    tasks.push(task);
    tasks
}

pub fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

const SAMPLE_TASKS: &str = include_str!("../data/sample_tasks.json");

/// Demo tasks the screen starts with. A malformed fixture degrades to an
/// empty list rather than aborting the screen.
pub fn sample_tasks() -> Vec<Task> {
    serde_json::from_str(SAMPLE_TASKS).unwrap_or_else(|err| {
        warn!(%err, "failed to parse the embedded sample tasks");
        Vec::new()
    })
}
