// Derived views over the task list

use crate::task::Task;

/// Which tasks a view selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.is_completed(),
            Filter::Completed => task.is_completed(),
        }
    }

    /// Section title used by the board, without the count suffix
    pub fn title(self) -> &'static str {
        match self {
            Filter::All => "All Tasks",
            Filter::Pending => "Pending Tasks",
            Filter::Completed => "Completed Tasks",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Pending => write!(f, "pending"),
            Filter::Completed => write!(f, "completed"),
        }
    }
}
