use crate::core::tasks::{NoteList, TaskList};
use crate::core::timer::ContractionTimer;

/// Everything that lives only for the duration of one interactive session.
///
/// Created when the session starts and dropped when it ends; nothing here is
/// written to disk.
#[derive(Debug, Default)]
pub struct SessionState {
    pub todos: TaskList,
    pub notes: NoteList,
    pub timer: ContractionTimer,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
