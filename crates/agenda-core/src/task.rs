use agenda_gui_shared::{Priority, Task, TaskCategory};
use tracing::debug;

use crate::config::DashboardConfig;

/// Badge color for a priority. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Yellow,
    Green,
    Gray,
}

impl BadgeColor {
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::High => BadgeColor::Red,
            Priority::Medium => BadgeColor::Yellow,
            Priority::Low => BadgeColor::Green,
        }
    }

    /// Unknown keys render gray.
    pub fn for_key(key: &str) -> Self {
        Priority::from_key(key)
            .map(Self::for_priority)
            .unwrap_or(BadgeColor::Gray)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    SetTitle(String),
    SetPriority(Priority),
    SetCategory(TaskCategory),
    Add { id: String },
    Toggle(String),
}

/// The dashboard's to-do list plus its input row. Nothing here is
/// persisted; a reload starts from an empty board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub draft_title: String,
    pub selected_priority: Priority,
    pub selected_category: TaskCategory,
}

impl TaskBoard {
    pub fn new(defaults: &DashboardConfig) -> Self {
        Self {
            tasks: Vec::new(),
            draft_title: String::new(),
            selected_priority: defaults.default_priority,
            selected_category: defaults.default_category,
        }
    }

    /// Prepends a task built from the input row and clears the title.
    /// Returns false, leaving everything untouched, when the title is blank.
    #[tracing::instrument(skip(self), fields(count = self.tasks.len()))]
    pub fn add_task(&mut self, id: String) -> bool {
        if self.draft_title.trim().is_empty() {
            debug!("ignoring task with blank title");
            return false;
        }

        let task = Task {
            id,
            title: std::mem::take(&mut self.draft_title),
            description: None,
            priority: self.selected_priority,
            due_date: None,
            completed: false,
            category: self.selected_category,
        };
        debug!(id = %task.id, priority = task.priority.as_key(), "added task");
        self.tasks.insert(0, task);
        true
    }

    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "toggle for unknown task ignored");
            return false;
        };
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "toggled task");
        true
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

pub fn reduce(mut board: TaskBoard, action: TaskAction) -> TaskBoard {
    match action {
        TaskAction::SetTitle(title) => board.draft_title = title,
        TaskAction::SetPriority(priority) => board.selected_priority = priority,
        TaskAction::SetCategory(category) => board.selected_category = category,
        TaskAction::Add { id } => {
            board.add_task(id);
        }
        TaskAction::Toggle(id) => {
            board.toggle_complete(&id);
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(titles: &[&str]) -> TaskBoard {
        titles.iter().enumerate().fold(TaskBoard::default(), |board, (i, title)| {
            let board = reduce(board, TaskAction::SetTitle(title.to_string()));
            reduce(board, TaskAction::Add { id: i.to_string() })
        })
    }

    #[test]
    fn add_prepends_and_clears_title() {
        let board = board_with(&["first", "second"]);

        let titles: Vec<&str> = board.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert!(board.draft_title.is_empty());
        assert!(board.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn blank_title_is_ignored() {
        let board = reduce(TaskBoard::default(), TaskAction::SetTitle("   ".to_string()));
        let board = reduce(board, TaskAction::Add { id: "1".to_string() });

        assert!(board.tasks.is_empty());
        assert_eq!(board.draft_title, "   ");
    }

    #[test]
    fn selections_survive_add() {
        let board = reduce(TaskBoard::default(), TaskAction::SetPriority(Priority::High));
        let board = reduce(board, TaskAction::SetCategory(TaskCategory::Work));
        let board = reduce(board, TaskAction::SetTitle("Relatório".to_string()));
        let board = reduce(board, TaskAction::Add { id: "7".to_string() });

        assert_eq!(board.selected_priority, Priority::High);
        assert_eq!(board.selected_category, TaskCategory::Work);
        assert_eq!(board.tasks[0].priority, Priority::High);
        assert_eq!(board.tasks[0].category, TaskCategory::Work);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let board = board_with(&["a", "b"]);
        let before = board.clone();

        let once = reduce(board, TaskAction::Toggle("0".to_string()));
        assert_eq!(once.completed_count(), 1);
        let twice = reduce(once, TaskAction::Toggle("0".to_string()));

        assert_eq!(twice, before);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let board = board_with(&["a"]);
        let after = reduce(board.clone(), TaskAction::Toggle("missing".to_string()));

        assert_eq!(after, board);
    }

    #[test]
    fn defaults_come_from_config() {
        let board = TaskBoard::new(&DashboardConfig {
            default_priority: Priority::Low,
            default_category: TaskCategory::Study,
        });

        assert_eq!(board.selected_priority, Priority::Low);
        assert_eq!(board.selected_category, TaskCategory::Study);
    }

    #[test]
    fn badge_colors() {
        assert_eq!(BadgeColor::for_priority(Priority::High), BadgeColor::Red);
        assert_eq!(BadgeColor::for_key("medium"), BadgeColor::Yellow);
        assert_eq!(BadgeColor::for_key("low"), BadgeColor::Green);
        assert_eq!(BadgeColor::for_key("urgent"), BadgeColor::Gray);
    }
}
