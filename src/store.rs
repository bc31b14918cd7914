// In-memory task list store

use crate::filter::Filter;
use crate::task::{Task, TaskId};
use tracing::debug;

/// Pending/completed counts for the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub pending: usize,
    pub completed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.pending + self.completed
    }
}

/// Ordered task collection, most recent first
///
/// The list is the only stored state. Pending and completed views are
/// recomputed from it on every query.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a task from raw user input
    ///
    /// Blank input (after trimming) is ignored and returns `None`.
    /// Otherwise the new task becomes the first element.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let Some(task) = Task::new(raw_text) else {
            debug!("Ignoring blank task text");
            return None;
        };

        let id = task.id();
        debug!(%id, text = task.text(), "Adding task");
        self.tasks.insert(0, task);

        Some(id)
    }

    /// Flip a task's completion flag in place
    ///
    /// Returns the new flag, or `None` when no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            debug!(%id, "Toggle on unknown task ignored");
            return None;
        };

        let completed = task.toggle();
        debug!(%id, completed, "Toggled task");
        Some(completed)
    }

    /// Remove a task, keeping the order of the rest
    ///
    /// Callers are expected to have confirmed the deletion already.
    /// Returns the removed task, or `None` when no task has this id.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(pos) = self.tasks.iter().position(|t| t.id() == id) else {
            debug!(%id, "Delete on unknown task ignored");
            return None;
        };

        let task = self.tasks.remove(pos);
        debug!(%id, text = task.text(), "Deleted task");
        Some(task)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Full snapshot in list order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Stable filter over the list
    pub fn view(&self, filter: Filter) -> Vec<&Task> {
        let tasks: Vec<&Task> = self.tasks.iter().filter(|t| filter.matches(t)).collect();
        debug!(%filter, count = tasks.len(), "Derived view");
        tasks
    }

    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.view(Filter::Pending)
    }

    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.view(Filter::Completed)
    }

    pub fn summary(&self) -> Summary {
        let completed = self.tasks.iter().filter(|t| t.is_completed()).count();
        Summary {
            pending: self.tasks.len() - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text().to_string()).collect()
    }

    fn all_texts(list: &TaskList) -> Vec<String> {
        list.tasks().iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn test_add_prepends_trimmed_pending_task() {
        let mut list = TaskList::new();
        list.add("first").unwrap();

        let id = list.add("  Buy milk  ").unwrap();
        assert_eq!(list.len(), 2);

        let head = &list.tasks()[0];
        assert_eq!(head.id(), id);
        assert_eq!(head.text(), "Buy milk");
        assert!(!head.is_completed());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TaskList::new();
        list.add("keep").unwrap();
        let before = list.tasks().to_vec();

        for blank in ["", " ", "\t", "\n  \r\n"] {
            assert!(list.add(blank).is_none());
        }

        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_add_most_recent_first() {
        let mut list = TaskList::new();
        list.add("A");
        list.add("B");
        assert_eq!(all_texts(&list), vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();

        assert_eq!(list.toggle(a), Some(true));
        assert!(list.get(a).unwrap().is_completed());
        assert!(!list.get(b).unwrap().is_completed());
        assert_eq!(all_texts(&list), vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        let before = list.tasks().to_vec();

        list.toggle(a);
        list.toggle(a);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("A");
        let before = list.tasks().to_vec();
        let stranger = TaskId::new();

        assert_eq!(list.toggle(stranger), None);
        assert!(list.delete(stranger).is_none());
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = TaskList::new();
        list.add("A");
        let b = list.add("B").unwrap();
        list.add("C");

        let removed = list.delete(b).unwrap();
        assert_eq!(removed.text(), "B");
        assert_eq!(all_texts(&list), vec!["C", "A"]);
        assert!(list.get(b).is_none());
    }

    #[test]
    fn test_views_partition_list() {
        let mut list = TaskList::new();
        let ids: Vec<TaskId> = ["A", "B", "C", "D", "E"]
            .iter()
            .filter_map(|t| list.add(t))
            .collect();
        list.toggle(ids[1]);
        list.toggle(ids[3]);
        list.delete(ids[0]);
        list.toggle(ids[3]);

        let pending: HashSet<TaskId> = list.pending_tasks().iter().map(|t| t.id()).collect();
        let completed: HashSet<TaskId> = list.completed_tasks().iter().map(|t| t.id()).collect();
        let all: HashSet<TaskId> = list.tasks().iter().map(|t| t.id()).collect();

        assert!(pending.is_disjoint(&completed));
        assert_eq!(pending.union(&completed).copied().collect::<HashSet<_>>(), all);
    }

    #[test]
    fn test_views_keep_list_order() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        list.add("B");
        let c = list.add("C").unwrap();
        list.add("D");
        list.toggle(a);
        list.toggle(c);

        assert_eq!(texts(&list.pending_tasks()), vec!["D", "B"]);
        assert_eq!(texts(&list.completed_tasks()), vec!["C", "A"]);
        assert_eq!(list.view(Filter::All).len(), 4);
    }

    #[test]
    fn test_summary_tracks_toggles() {
        let mut list = TaskList::new();
        assert_eq!(list.summary(), Summary::default());

        let a = list.add("A").unwrap();
        assert_eq!(list.summary(), Summary { pending: 1, completed: 0 });

        list.toggle(a);
        assert_eq!(list.summary(), Summary { pending: 0, completed: 1 });

        list.toggle(a);
        assert_eq!(list.summary(), Summary { pending: 1, completed: 0 });
        assert_eq!(list.summary().total(), 1);
    }
}
