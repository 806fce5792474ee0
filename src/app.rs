//! Boundary facade.
//!
//! [`App`] is where user intent meets the store: it asks for confirmation
//! before destructive operations, turns validation failures into localized
//! notifications and keeps navigation in step with board creation and
//! deletion.

use crate::{
    domain::{
        validation::{validate_due_date, validate_task_title},
        BoardId, ColumnId, NewTask, SettingsUpdate, Task, TaskId,
    },
    error::{KanbanError, Result},
    navigation::{NavigationOutcome, Navigator, Route},
    store::{DropOutcome, Store},
};
use chrono::{Local, NaiveDate};

/// Blocking user prompts provided by the environment
pub trait Prompter {
    /// Asks a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a message
    fn notify(&mut self, message: &str);
}

pub struct App<P: Prompter> {
    store: Store,
    navigator: Navigator,
    prompter: P,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<P: Prompter> App<P> {
    pub fn new(store: Store, prompter: P) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            prompter,
            today: local_today,
        }
    }

    /// Overrides the calendar used for due-date checks
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn route(&self) -> &Route {
        self.navigator.current_route()
    }

    /// Resets all state and applies the initial route
    pub fn start(&mut self, initial_hash: Option<&str>) -> &Route {
        let outcome = self.navigator.start(&mut self.store, initial_hash);
        self.report_navigation(outcome);
        self.route()
    }

    pub fn hash_changed(&mut self, hash: &str) -> &Route {
        let outcome = self.navigator.hash_changed(&mut self.store, hash);
        self.report_navigation(outcome);
        self.route()
    }

    pub fn navigate(&mut self, route: Route) -> &Route {
        let outcome = self.navigator.navigate(&mut self.store, route);
        self.report_navigation(outcome);
        self.route()
    }

    /// Creates a board and shows it
    pub fn add_board_and_navigate(&mut self, name: &str) -> Option<BoardId> {
        let board = self.surface(|store| store.create_board(name))?;
        self.navigate(Route::Board(board.id.clone()));
        Some(board.id)
    }

    /// Deletes a board after the user confirms. Returns whether it was
    /// deleted.
    pub fn request_delete_board(&mut self, board_id: &BoardId) -> bool {
        let Some(name) = self.store.board(board_id).map(|b| b.name.clone()) else {
            return false;
        };
        let message = self.store.translate("confirmDeleteBoard", &[name.as_str()]);
        if !self.prompter.confirm(&message) {
            return false;
        }
        self.navigator.delete_board(&mut self.store, board_id);
        true
    }

    /// Adds a task after checking its title, then its due date against
    /// today. Only the first failure is reported.
    pub fn add_task(&mut self, board_id: &BoardId, details: NewTask) -> Option<Task> {
        let today = (self.today)();
        self.surface(|store| {
            validate_task_title(&details.title, store.config().min_task_title_length)?;
            validate_due_date(details.due_date, today)?;
            store.add_task(board_id, details)
        })
    }

    pub fn open_task(&mut self, task_id: &TaskId, column_id: &ColumnId) -> bool {
        self.store.open_task_modal(task_id, column_id)
    }

    pub fn close_task(&mut self) {
        self.store.close_task_modal();
    }

    /// Saves the task open in the editing slot. Validation failures are
    /// shown to the user and keep the slot open.
    pub fn save_task(&mut self) -> bool {
        let today = (self.today)();
        let Some(session) = self.store.editing_task() else {
            return false;
        };
        let task_id = session.task_id.clone();
        let column_id = session.column_id.clone();
        let update = session.to_update();
        let title = session.task.title.clone();
        let due_date = session.task.due_date;

        self.surface(|store| {
            validate_task_title(&title, store.config().min_task_title_length)?;
            validate_due_date(due_date, today)?;
            store.save_task_changes(&task_id, &column_id, update)
        })
        .unwrap_or(false)
    }

    /// Deletes the task open in the editing slot after the user confirms
    pub fn request_delete_task(&mut self) -> bool {
        let Some(session) = self.store.editing_task() else {
            return false;
        };
        let task_id = session.task_id.clone();
        let column_id = session.column_id.clone();

        let message = self.store.translate("confirmDeleteTask", &[]);
        if !self.prompter.confirm(&message) {
            return false;
        }
        self.store.delete_task_from_modal(&task_id, &column_id)
    }

    pub fn drag_start(&mut self, task_id: TaskId, original_column_id: ColumnId) {
        self.store.handle_task_drag_start(task_id, original_column_id);
    }

    pub fn drop_on_column(&mut self, target_column_id: &ColumnId) -> DropOutcome {
        self.store.handle_task_drop_on_column(target_column_id)
    }

    pub fn set_filter_query(&mut self, query: &str) {
        self.store.set_filter_query(query);
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        self.store.update_settings(update);
    }

    /// Runs a store operation, notifying the user of any failure
    fn surface<T>(&mut self, op: impl FnOnce(&mut Store) -> Result<T>) -> Option<T> {
        match op(&mut self.store) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(error = %err, "Operation rejected");
                let message = self.store.error_message(&err);
                self.prompter.notify(&message);
                None
            }
        }
    }

    fn report_navigation(&mut self, outcome: NavigationOutcome) {
        if let NavigationOutcome::BoardNotFound { requested } = outcome {
            let err = KanbanError::BoardNotFound {
                id: requested.to_string(),
            };
            let message = self.store.error_message(&err);
            self.prompter.notify(&message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, Priority};
    use std::collections::VecDeque;

    /// Answers confirmations from a script and records notifications
    #[derive(Debug, Default)]
    struct ScriptedPrompter {
        answers: VecDeque<bool>,
        confirmations: Vec<String>,
        notifications: Vec<String>,
    }

    impl ScriptedPrompter {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirmations.push(message.to_string());
            self.answers.pop_front().unwrap_or(false)
        }

        fn notify(&mut self, message: &str) {
            self.notifications.push(message.to_string());
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn app(answers: &[bool]) -> App<ScriptedPrompter> {
        let mut app = App::new(Store::new(), ScriptedPrompter::answering(answers))
            .with_today(fixed_today);
        app.start(None);
        app
    }

    #[test]
    fn test_add_board_navigates_to_it() {
        let mut app = app(&[]);

        let board_id = app.add_board_and_navigate("Roadmap").unwrap();

        assert_eq!(app.route(), &Route::Board(board_id.clone()));
        assert_eq!(app.store().current_board_id(), Some(&board_id));
        assert!(app.prompter().notifications.is_empty());
    }

    #[test]
    fn test_invalid_board_name_is_notified() {
        let mut app = app(&[]);

        assert!(app.add_board_and_navigate("ab").is_none());

        assert_eq!(app.route(), &Route::Boards);
        assert_eq!(
            app.prompter().notifications,
            vec!["Board name must be at least 3 characters long.".to_string()]
        );
    }

    #[test]
    fn test_unknown_board_route_is_notified() {
        let mut app = app(&[]);
        app.store_mut()
            .update_settings(SettingsUpdate::language(Language::Fr));

        app.hash_changed("#board/ghost");

        assert_eq!(app.route(), &Route::Boards);
        assert_eq!(app.prompter().notifications, vec!["Tableau introuvable.".to_string()]);
    }

    #[test]
    fn test_delete_board_requires_confirmation() {
        let mut app = app(&[false, true]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();

        assert!(!app.request_delete_board(&board_id));
        assert_eq!(app.store().boards().len(), 1);

        assert!(app.request_delete_board(&board_id));
        assert!(app.store().boards().is_empty());
        assert_eq!(app.route(), &Route::Boards);
        assert_eq!(
            app.prompter().confirmations[0],
            "Are you sure you want to delete the board \"Roadmap\"?"
        );
    }

    #[test]
    fn test_add_task_rejects_past_due_date() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();

        let task = app.add_task(&board_id, NewTask::new("Late task").with_due_date(yesterday));

        assert!(task.is_none());
        assert_eq!(app.store().board(&board_id).unwrap().task_count(), 0);
        assert_eq!(
            app.prompter().notifications,
            vec!["Due date cannot be in the past.".to_string()]
        );
    }

    #[test]
    fn test_title_is_checked_before_due_date() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();

        let task = app.add_task(&board_id, NewTask::new("ab").with_due_date(yesterday));

        assert!(task.is_none());
        assert_eq!(
            app.prompter().notifications,
            vec!["Task title must be at least 3 characters long.".to_string()]
        );
    }

    #[test]
    fn test_save_reports_title_before_due_date() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let task = app.add_task(&board_id, NewTask::new("Draft")).unwrap();
        let column_id = app.store().board(&board_id).unwrap().columns[0].id.clone();

        app.open_task(&task.id, &column_id);
        let copy = app.store_mut().editing_task_mut().unwrap().task_mut();
        copy.title = "x".to_string();
        copy.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);

        assert!(!app.save_task());
        assert!(app.store().editing_task().is_some());
        assert_eq!(
            app.prompter().notifications,
            vec!["Task title must be at least 3 characters long.".to_string()]
        );
    }

    #[test]
    fn test_add_task_with_today_due_date() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();

        let task = app
            .add_task(
                &board_id,
                NewTask::new("On time")
                    .with_due_date(fixed_today())
                    .with_priority(Priority::Low),
            )
            .unwrap();

        assert_eq!(task.due_date, Some(fixed_today()));
        assert!(app.prompter().notifications.is_empty());
    }

    #[test]
    fn test_edit_and_save_task() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let task = app.add_task(&board_id, NewTask::new("Draft")).unwrap();
        let column_id = app.store().board(&board_id).unwrap().columns[0].id.clone();

        assert!(app.open_task(&task.id, &column_id));
        app.store_mut().editing_task_mut().unwrap().task_mut().title = "Final".to_string();
        assert!(app.save_task());

        let stored = &app.store().board(&board_id).unwrap().columns[0].tasks[0];
        assert_eq!(stored.title, "Final");
        assert_eq!(stored.created_at, task.created_at);
        assert!(app.store().editing_task().is_none());
    }

    #[test]
    fn test_save_with_short_title_keeps_modal_open() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let task = app.add_task(&board_id, NewTask::new("Draft")).unwrap();
        let column_id = app.store().board(&board_id).unwrap().columns[0].id.clone();

        app.open_task(&task.id, &column_id);
        app.store_mut().editing_task_mut().unwrap().task_mut().title = "x".to_string();

        assert!(!app.save_task());
        assert!(app.store().editing_task().is_some());
        assert_eq!(
            app.prompter().notifications,
            vec!["Task title must be at least 3 characters long.".to_string()]
        );
    }

    #[test]
    fn test_delete_task_requires_confirmation() {
        let mut app = app(&[false, true]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let task = app.add_task(&board_id, NewTask::new("Doomed")).unwrap();
        let column_id = app.store().board(&board_id).unwrap().columns[0].id.clone();
        app.open_task(&task.id, &column_id);

        assert!(!app.request_delete_task());
        assert!(app.store().editing_task().is_some());

        assert!(app.request_delete_task());
        assert!(app.store().editing_task().is_none());
        assert_eq!(app.store().board(&board_id).unwrap().task_count(), 0);
    }

    #[test]
    fn test_drag_and_drop_through_app() {
        let mut app = app(&[]);
        let board_id = app.add_board_and_navigate("Roadmap").unwrap();
        let task = app.add_task(&board_id, NewTask::new("Moving")).unwrap();
        let columns: Vec<ColumnId> = app
            .store()
            .board(&board_id)
            .unwrap()
            .columns
            .iter()
            .map(|c| c.id.clone())
            .collect();

        app.drag_start(task.id.clone(), columns[0].clone());
        assert!(matches!(
            app.drop_on_column(&columns[1]),
            DropOutcome::Moved { .. }
        ));
        assert_eq!(app.store().board(&board_id).unwrap().columns[1].tasks[0].id, task.id);
    }
}
