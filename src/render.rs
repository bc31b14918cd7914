// Text rendering of the task board

use crate::filter::Filter;
use crate::store::TaskList;
use crate::task::Task;
use colored::Colorize;
use std::fmt::Write;

pub const EMPTY_STATE: &str = "No tasks yet. Add a task to get started!";

/// Sections in display order
const SECTIONS: [Filter; 2] = [Filter::Pending, Filter::Completed];

/// Accessible name of a task's toggle control
pub fn toggle_label(task: &Task) -> &'static str {
    if task.is_completed() {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    }
}

/// Section header with live count, e.g. "Pending Tasks (3)"
pub fn section_header(filter: Filter, count: usize) -> String {
    format!("{} ({})", filter.title(), count)
}

/// Tasks in the order they are numbered on the board
///
/// Pending section first, then completed, each in list order. Position `n`
/// on screen is index `n - 1` here.
pub fn board_order(list: &TaskList) -> Vec<&Task> {
    SECTIONS.iter().flat_map(|f| list.view(*f)).collect()
}

/// Renders a `TaskList` snapshot as plain or colored text
#[derive(Debug, Clone)]
pub struct Renderer {
    title: String,
    subtitle: String,
    color: bool,
}

impl Renderer {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, color: bool) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            color,
        }
    }

    /// Header block shown once at session start
    pub fn banner(&self) -> String {
        let mut out = String::new();
        if self.color {
            let _ = writeln!(out, "{}", self.title.bold());
            let _ = writeln!(out, "{}", self.subtitle.dimmed());
        } else {
            let _ = writeln!(out, "{}", self.title);
            let _ = writeln!(out, "{}", self.subtitle);
        }
        out
    }

    /// Full board: non-empty sections with counts, or the empty state
    pub fn board(&self, list: &TaskList) -> String {
        let mut out = String::new();

        if list.is_empty() {
            if self.color {
                let _ = writeln!(out, "{}", EMPTY_STATE.italic());
            } else {
                let _ = writeln!(out, "{}", EMPTY_STATE);
            }
            return out;
        }

        let mut position = 0;
        for filter in SECTIONS {
            let tasks = list.view(filter);
            if tasks.is_empty() {
                continue;
            }

            if position > 0 {
                out.push('\n');
            }

            let header = section_header(filter, tasks.len());
            if self.color {
                let _ = writeln!(out, "{}", header.bold().underline());
            } else {
                let _ = writeln!(out, "{}", header);
            }

            for task in tasks {
                position += 1;
                out.push_str(&self.item(position, task));
                out.push('\n');
            }
        }

        out
    }

    fn item(&self, position: usize, task: &Task) -> String {
        let check = if task.is_completed() { "[x]" } else { "[ ]" };
        let label = toggle_label(task);

        if !self.color {
            return format!("{:>3}. {} {}  ({})", position, check, task.text(), label);
        }

        let check = if task.is_completed() {
            check.green().to_string()
        } else {
            check.to_string()
        };
        let text = if task.is_completed() {
            task.text().strikethrough().dimmed().to_string()
        } else {
            task.text().to_string()
        };
        format!("{:>3}. {} {}  {}", position, check, text, format!("({})", label).dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new("Todo List", "Simple task management app", false)
    }

    #[test]
    fn test_empty_board_shows_empty_state() {
        let list = TaskList::new();
        let board = plain().board(&list);
        assert_eq!(board, format!("{}\n", EMPTY_STATE));
        assert!(!board.contains("Pending Tasks"));
        assert!(!board.contains("Completed Tasks"));
    }

    #[test]
    fn test_board_only_pending_section() {
        let mut list = TaskList::new();
        list.add("Buy milk");

        let board = plain().board(&list);
        assert_eq!(board, "Pending Tasks (1)\n  1. [ ] Buy milk  (Mark as complete)\n");
    }

    #[test]
    fn test_board_both_sections_numbered_continuously() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        list.add("B");
        list.add("C");
        list.toggle(a);

        let board = plain().board(&list);
        let expected = "\
Pending Tasks (2)
  1. [ ] C  (Mark as complete)
  2. [ ] B  (Mark as complete)

Completed Tasks (1)
  3. [x] A  (Mark as incomplete)
";
        assert_eq!(board, expected);
    }

    #[test]
    fn test_board_order_matches_numbering() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        list.add("B");
        list.toggle(a);

        let order: Vec<&str> = board_order(&list).iter().map(|t| t.text()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_label() {
        let mut list = TaskList::new();
        let id = list.add("A").unwrap();
        assert_eq!(toggle_label(list.get(id).unwrap()), "Mark as complete");
        list.toggle(id);
        assert_eq!(toggle_label(list.get(id).unwrap()), "Mark as incomplete");
    }

    #[test]
    fn test_section_header() {
        assert_eq!(section_header(Filter::Pending, 3), "Pending Tasks (3)");
        assert_eq!(section_header(Filter::Completed, 0), "Completed Tasks (0)");
    }

    #[test]
    fn test_board_with_colors_forced() {
        // colored disables itself off a TTY unless overridden
        colored::control::set_override(true);

        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        list.add("B");
        list.toggle(a);

        let board = Renderer::new("Todo List", "Simple task management app", true).board(&list);
        assert!(board.contains("\x1b["), "Expected ANSI codes in: {:?}", board);
        assert!(board.contains("Pending Tasks (1)"));
        assert!(board.contains("Completed Tasks (1)"));
    }

    #[test]
    fn test_banner_plain() {
        assert_eq!(plain().banner(), "Todo List\nSimple task management app\n");
    }
}
