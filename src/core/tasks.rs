//! Session to-do list and notes scratchpad.
//!
//! Both lists hand out a stable id at creation; toggling and deleting go
//! through that id so that a re-rendered list never shifts the target.

use crate::errors::{AppError, AppResult};
use crate::models::todo::{Note, TodoItem};

#[derive(Debug, Default)]
pub struct TaskList {
    items: Vec<TodoItem>,
    next_id: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open task. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.next_id += 1;
        self.items.push(TodoItem {
            id: self.next_id,
            text: text.to_string(),
            done: false,
        });
        Some(self.next_id)
    }

    /// Flip the completion flag. Returns the new state.
    pub fn toggle(&mut self, id: usize) -> AppResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::InvalidIndex(id))?;
        item.done = !item.done;
        Ok(item.done)
    }

    pub fn remove(&mut self, id: usize) -> AppResult<TodoItem> {
        let pos = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or(AppError::InvalidIndex(id))?;
        Ok(self.items.remove(pos))
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct NoteList {
    items: Vec<Note>,
    next_id: usize,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a note at the top (most recent first). Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.next_id += 1;
        self.items.insert(
            0,
            Note {
                id: self.next_id,
                text: text.to_string(),
            },
        );
        Some(self.next_id)
    }

    pub fn remove(&mut self, id: usize) -> AppResult<Note> {
        let pos = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or(AppError::InvalidIndex(id))?;
        Ok(self.items.remove(pos))
    }

    pub fn items(&self) -> &[Note] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_task_is_ignored() {
        let mut list = TaskList::new();
        assert_eq!(list.add("   "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_task_appends_open_item() {
        let mut list = TaskList::new();
        let id = list.add("Buy vitamins").unwrap();

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, id);
        assert_eq!(list.items()[0].text, "Buy vitamins");
        assert!(!list.items()[0].done);
    }

    #[test]
    fn task_text_is_trimmed_and_ordered() {
        let mut list = TaskList::new();
        list.add("  first ");
        list.add("second");
        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn toggle_flips_done() {
        let mut list = TaskList::new();
        let id = list.add("Pack hospital bag").unwrap();
        assert!(list.toggle(id).unwrap());
        assert!(!list.toggle(id).unwrap());
    }

    #[test]
    fn remove_by_id_survives_shifts() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();

        list.remove(a).unwrap();
        assert_eq!(list.remove(c).unwrap().text, "c");
        assert_eq!(list.items()[0].id, b);
    }

    #[test]
    fn unknown_task_id_is_an_error() {
        let mut list = TaskList::new();
        assert!(matches!(list.toggle(3), Err(AppError::InvalidIndex(3))));
        assert!(matches!(list.remove(3), Err(AppError::InvalidIndex(3))));
    }

    #[test]
    fn notes_are_most_recent_first() {
        let mut notes = NoteList::new();
        notes.add("A");
        notes.add("B");
        let texts: Vec<&str> = notes.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A"]);
    }

    #[test]
    fn blank_note_is_ignored_and_remove_works() {
        let mut notes = NoteList::new();
        assert_eq!(notes.add("\t \n"), None);

        let id = notes.add("Ask about iron levels").unwrap();
        assert_eq!(notes.remove(id).unwrap().text, "Ask about iron levels");
        assert!(notes.is_empty());
        assert!(notes.remove(id).is_err());
    }
}
