use crate::task::{self, DoneFilter, Task};

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone)]
pub enum Intent {
    ToggleDone(u32),
    CycleFilter,
    FlipSort,
    AddTask(Task),
}

/// Everything the screen retains: the task store plus the two display
/// settings. Advanced one intent at a time through [`ScreenState::reduce`].
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub tasks: Vec<Task>,
    pub show_done: DoneFilter,
    pub ascending: bool,
}

impl ScreenState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            show_done: DoneFilter::All,
            ascending: true,
        }
    }

    /// Consumes the current snapshot and returns the next one. The caller
    /// republishes the result before handling the next intent.
    pub fn reduce(self, intent: Intent) -> Self {
        match intent {
            Intent::ToggleDone(id) => Self {
                tasks: task::toggle_done(self.tasks, id),
                show_done: self.show_done,
                ascending: self.ascending,
            },
            Intent::AddTask(new_task) => Self {
                tasks: task::add_task(self.tasks, new_task),
                show_done: self.show_done,
                ascending: self.ascending,
            },
            Intent::CycleFilter => Self {
                show_done: self.show_done.cycle(),
                ..self
            },
            Intent::FlipSort => Self {
                ascending: !self.ascending,
                ..self
            },
        }
    }

    /// The sequence the view renders under the current settings.
    pub fn displayed(&self) -> Vec<Task> {
        task::compute_displayed(&self.tasks, self.show_done, self.ascending)
    }
}
