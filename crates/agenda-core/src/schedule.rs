use agenda_gui_shared::{Priority, ScheduleCategory, ScheduleDraft, ScheduleItem, Weekday};
use tracing::{debug, error, info};

use crate::config::ScheduleConfig;
use crate::id::IdGenerator;
use crate::storage::{self, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// A single field change in the "new item" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Description(String),
    Day(Weekday),
    Time(String),
    Duration(Option<u32>),
    Category(ScheduleCategory),
    Priority(Priority),
    Recurring(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleAction {
    OpenModal,
    CancelModal,
    EditDraft(DraftEdit),
    Submit { id: String },
    Delete(String),
    SelectDay(Weekday),
}

impl ScheduleAction {
    /// Whether the action can change the item list, and so needs a save.
    pub fn touches_items(&self) -> bool {
        matches!(self, ScheduleAction::Submit { .. } | ScheduleAction::Delete(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleState {
    pub items: Vec<ScheduleItem>,
    pub selected_day: Weekday,
    pub modal: ModalState,
    pub draft: ScheduleDraft,
    pub defaults: ScheduleConfig,
}

impl ScheduleState {
    pub fn new(items: Vec<ScheduleItem>, defaults: ScheduleConfig) -> Self {
        Self {
            items,
            selected_day: defaults.default_day,
            modal: ModalState::Closed,
            draft: default_draft(&defaults),
            defaults,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Items of the selected day, earliest first.
    pub fn visible_items(&self) -> Vec<&ScheduleItem> {
        items_for_day(&self.items, self.selected_day)
    }

    pub fn count_for_day(&self, day: Weekday) -> usize {
        self.items.iter().filter(|item| item.day == day).count()
    }
}

/// A draft with every field set to its default and an empty title.
pub fn default_draft(defaults: &ScheduleConfig) -> ScheduleDraft {
    ScheduleDraft {
        title: String::new(),
        description: String::new(),
        day: Some(defaults.default_day),
        time: defaults.default_time.clone(),
        duration: Some(defaults.default_duration),
        category: Some(defaults.default_category),
        priority: Some(defaults.default_priority),
        is_recurring: false,
    }
}

/// Turns a draft into an item, filling unset fields from `defaults`.
/// Returns `None` when the title is blank.
///
/// The description is stored exactly as typed, whitespace included; only
/// an empty field is left out of the item.
pub fn commit_draft(
    draft: &ScheduleDraft,
    defaults: &ScheduleConfig,
    id: String,
) -> Option<ScheduleItem> {
    if draft.title.trim().is_empty() {
        return None;
    }

    let time = draft.time.trim();

    Some(ScheduleItem {
        id,
        title: draft.title.clone(),
        description: (!draft.description.is_empty()).then(|| draft.description.clone()),
        day: draft.day.unwrap_or(defaults.default_day),
        time: if time.is_empty() {
            defaults.default_time.clone()
        } else {
            time.to_string()
        },
        duration: draft
            .duration
            .filter(|minutes| *minutes > 0)
            .unwrap_or(defaults.default_duration),
        category: draft.category.unwrap_or(defaults.default_category),
        priority: draft.priority.unwrap_or(defaults.default_priority),
        is_recurring: draft.is_recurring,
    })
}

/// Items on `day`, stably sorted by their `HH:MM` time.
pub fn items_for_day(items: &[ScheduleItem], day: Weekday) -> Vec<&ScheduleItem> {
    let mut out: Vec<&ScheduleItem> = items.iter().filter(|item| item.day == day).collect();
    out.sort_by(|a, b| a.time.cmp(&b.time));
    out
}

fn apply_edit(draft: &mut ScheduleDraft, edit: DraftEdit) {
    match edit {
        DraftEdit::Title(title) => draft.title = title,
        DraftEdit::Description(description) => draft.description = description,
        DraftEdit::Day(day) => draft.day = Some(day),
        DraftEdit::Time(time) => draft.time = time,
        DraftEdit::Duration(duration) => draft.duration = duration,
        DraftEdit::Category(category) => draft.category = Some(category),
        DraftEdit::Priority(priority) => draft.priority = Some(priority),
        DraftEdit::Recurring(recurring) => draft.is_recurring = recurring,
    }
}

pub fn reduce(mut state: ScheduleState, action: ScheduleAction) -> ScheduleState {
    match action {
        ScheduleAction::OpenModal => state.modal = ModalState::Open,
        ScheduleAction::CancelModal => {
            state.modal = ModalState::Closed;
            state.draft = default_draft(&state.defaults);
        }
        ScheduleAction::EditDraft(edit) => apply_edit(&mut state.draft, edit),
        ScheduleAction::Submit { id } => {
            let Some(item) = commit_draft(&state.draft, &state.defaults, id) else {
                debug!("ignoring schedule item with blank title");
                return state;
            };
            debug!(id = %item.id, day = item.day.label(), time = %item.time, "added schedule item");
            state.items.push(item);
            state.modal = ModalState::Closed;
            state.draft = default_draft(&state.defaults);
        }
        ScheduleAction::Delete(id) => {
            match state.items.iter().position(|item| item.id == id) {
                Some(idx) => {
                    state.items.remove(idx);
                    debug!(id = %id, "deleted schedule item");
                }
                None => debug!(id = %id, "delete for unknown item ignored"),
            }
        }
        ScheduleAction::SelectDay(day) => state.selected_day = day,
    }
    state
}

/// Owns the schedule state and writes the full item list back to the
/// store after every action that can change it.
#[derive(Debug, Clone)]
pub struct ScheduleManager<S> {
    state: ScheduleState,
    store: S,
    ids: IdGenerator,
}

impl<S: KeyValueStore> ScheduleManager<S> {
    #[tracing::instrument(skip(store, defaults))]
    pub fn load(store: S, defaults: ScheduleConfig) -> Self {
        let items = storage::load_schedule(&store);
        let ids = IdGenerator::seeded(items.iter().map(|item| item.id.as_str()));
        info!(count = items.len(), "schedule rehydrated");

        Self {
            state: ScheduleState::new(items, defaults),
            store,
            ids,
        }
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    #[tracing::instrument(skip(self))]
    pub fn dispatch(&mut self, action: ScheduleAction) {
        let needs_save = action.touches_items();
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if needs_save && let Err(error) = self.save() {
            error!(error = %format!("{error:#}"), "failed to persist schedule");
        }
    }

    /// Overwrites the persisted list with the in-memory one.
    pub fn save(&mut self) -> anyhow::Result<()> {
        storage::save_schedule(&mut self.store, &self.state.items)
    }

    pub fn open_modal(&mut self) {
        self.dispatch(ScheduleAction::OpenModal);
    }

    pub fn cancel_modal(&mut self) {
        self.dispatch(ScheduleAction::CancelModal);
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        self.dispatch(ScheduleAction::EditDraft(edit));
    }

    /// Commits the current draft. Returns the new item's id, or `None`
    /// when the title was blank and nothing changed.
    pub fn add_item(&mut self) -> Option<String> {
        if self.state.draft.title.trim().is_empty() {
            debug!("ignoring schedule item with blank title");
            return None;
        }
        let id = self.ids.next_id();
        self.dispatch(ScheduleAction::Submit { id: id.clone() });
        Some(id)
    }

    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.state.items.len();
        self.dispatch(ScheduleAction::Delete(id.to_string()));
        self.state.items.len() < before
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.dispatch(ScheduleAction::SelectDay(day));
    }
}

#[cfg(test)]
mod tests {
    use agenda_gui_shared::SCHEDULE_STORAGE_KEY;

    use super::*;
    use crate::storage::MemoryStore;

    fn titled(title: &str) -> ScheduleDraft {
        ScheduleDraft {
            title: title.to_string(),
            ..ScheduleDraft::default()
        }
    }

    fn submit(state: ScheduleState, draft: ScheduleDraft, id: &str) -> ScheduleState {
        let state = ScheduleState { draft, ..state };
        reduce(state, ScheduleAction::Submit { id: id.to_string() })
    }

    #[test]
    fn unset_fields_take_defaults() {
        let item = commit_draft(&titled("Reunião"), &ScheduleConfig::default(), "1".into())
            .expect("item");

        assert_eq!(item.day, Weekday::Monday);
        assert_eq!(item.time, "09:00");
        assert_eq!(item.duration, 60);
        assert_eq!(item.category, ScheduleCategory::Work);
        assert_eq!(item.priority, Priority::Medium);
        assert!(!item.is_recurring);
        assert_eq!(item.description, None);
    }

    #[test]
    fn zero_duration_and_blank_time_are_unset() {
        let draft = ScheduleDraft {
            time: "  ".to_string(),
            duration: Some(0),
            ..titled("Leitura")
        };
        let item = commit_draft(&draft, &ScheduleConfig::default(), "1".into()).expect("item");

        assert_eq!(item.time, "09:00");
        assert_eq!(item.duration, 60);
    }

    #[test]
    fn description_is_kept_as_typed() {
        let defaults = ScheduleConfig::default();
        let spaces = ScheduleDraft {
            description: " ".to_string(),
            ..titled("Leitura")
        };
        let padded = ScheduleDraft {
            description: "  cap. 3 \n".to_string(),
            ..titled("Leitura")
        };

        let item = commit_draft(&spaces, &defaults, "1".into()).expect("item");
        assert_eq!(item.description.as_deref(), Some(" "));

        let item = commit_draft(&padded, &defaults, "2".into()).expect("item");
        assert_eq!(item.description.as_deref(), Some("  cap. 3 \n"));
    }

    #[test]
    fn blank_title_changes_nothing() {
        let state = ScheduleState::new(vec![], ScheduleConfig::default());
        let state = reduce(state, ScheduleAction::OpenModal);
        let after = submit(state.clone(), titled(" \t"), "1");

        assert!(after.items.is_empty());
        assert!(after.is_modal_open());
        assert_eq!(after.draft.title, " \t");
    }

    #[test]
    fn submit_closes_modal_and_resets_draft() {
        let state = ScheduleState::new(vec![], ScheduleConfig::default());
        let state = reduce(state, ScheduleAction::OpenModal);
        let state = reduce(state, ScheduleAction::EditDraft(DraftEdit::Title("Aula".into())));
        let state = reduce(state, ScheduleAction::EditDraft(DraftEdit::Day(Weekday::Thursday)));
        let state = reduce(state, ScheduleAction::Submit { id: "5".into() });

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].day, Weekday::Thursday);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.draft, default_draft(&ScheduleConfig::default()));
    }

    #[test]
    fn cancel_discards_draft() {
        let state = ScheduleState::new(vec![], ScheduleConfig::default());
        let state = reduce(state, ScheduleAction::OpenModal);
        let state = reduce(state, ScheduleAction::EditDraft(DraftEdit::Recurring(true)));
        let state = reduce(state, ScheduleAction::EditDraft(DraftEdit::Title("x".into())));
        let state = reduce(state, ScheduleAction::CancelModal);

        assert!(!state.is_modal_open());
        assert!(state.items.is_empty());
        assert_eq!(state.draft, default_draft(&ScheduleConfig::default()));
    }

    #[test]
    fn open_modal_keeps_typed_draft_across_other_actions() {
        let state = ScheduleState::new(vec![], ScheduleConfig::default());
        let state = reduce(state, ScheduleAction::OpenModal);
        let state = reduce(state, ScheduleAction::EditDraft(DraftEdit::Title("Yoga".into())));
        let state = reduce(
            state,
            ScheduleAction::EditDraft(DraftEdit::Description("tapete".into())),
        );
        let typed = state.draft.clone();

        let state = reduce(state, ScheduleAction::SelectDay(Weekday::Wednesday));
        let state = reduce(state, ScheduleAction::OpenModal);

        assert!(state.is_modal_open());
        assert_eq!(state.draft, typed);
    }

    #[test]
    fn delete_removes_one_match_only() {
        let mut state = ScheduleState::new(vec![], ScheduleConfig::default());
        for (id, title) in [("1", "a"), ("2", "b"), ("3", "c")] {
            state = submit(state, titled(title), id);
        }

        let state = reduce(state, ScheduleAction::Delete("2".into()));
        let ids: Vec<&str> = state.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let again = reduce(state.clone(), ScheduleAction::Delete("2".into()));
        assert_eq!(again, state);
    }

    #[test]
    fn view_filters_by_day_and_sorts_by_time() {
        let mut state = ScheduleState::new(vec![], ScheduleConfig::default());
        let entries = [
            ("1", Weekday::Monday, "14:00"),
            ("2", Weekday::Tuesday, "06:00"),
            ("3", Weekday::Monday, "08:30"),
            ("4", Weekday::Monday, "08:30"),
            ("5", Weekday::Monday, "23:15"),
        ];
        for (id, day, time) in entries {
            let draft = ScheduleDraft {
                day: Some(day),
                time: time.to_string(),
                ..titled(id)
            };
            state = submit(state, draft, id);
        }

        let state = reduce(state, ScheduleAction::SelectDay(Weekday::Monday));
        let visible: Vec<(&str, &str)> = state
            .visible_items()
            .into_iter()
            .map(|i| (i.id.as_str(), i.time.as_str()))
            .collect();

        assert_eq!(
            visible,
            vec![("3", "08:30"), ("4", "08:30"), ("1", "14:00"), ("5", "23:15")]
        );
        assert!(visible.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        assert_eq!(state.count_for_day(Weekday::Tuesday), 1);
        assert_eq!(state.count_for_day(Weekday::Sunday), 0);
    }

    #[test]
    fn select_day_does_not_touch_items() {
        let state = submit(
            ScheduleState::new(vec![], ScheduleConfig::default()),
            titled("a"),
            "1",
        );
        let after = reduce(state.clone(), ScheduleAction::SelectDay(Weekday::Saturday));

        assert_eq!(after.items, state.items);
        assert_eq!(after.selected_day, Weekday::Saturday);
        assert!(after.visible_items().is_empty());
    }

    #[test]
    fn manager_saves_after_add_and_delete() {
        let mut manager = ScheduleManager::load(MemoryStore::new(), ScheduleConfig::default());
        assert!(manager.store().raw(SCHEDULE_STORAGE_KEY).is_none());

        manager.edit_draft(DraftEdit::Title("Yoga".into()));
        let id = manager.add_item().expect("added");
        let stored = storage::load_schedule(manager.store());
        assert_eq!(stored, manager.state().items);

        assert!(manager.delete_item(&id));
        assert!(!manager.delete_item(&id));
        assert_eq!(manager.store().raw(SCHEDULE_STORAGE_KEY), Some("[]"));
    }

    #[test]
    fn manager_does_not_save_view_changes() {
        let mut manager = ScheduleManager::load(MemoryStore::new(), ScheduleConfig::default());
        manager.select_day(Weekday::Sunday);
        manager.open_modal();
        manager.edit_draft(DraftEdit::Title("x".into()));
        manager.cancel_modal();

        assert!(manager.store().is_empty());
    }

    #[test]
    fn manager_ids_are_unique() {
        let mut manager = ScheduleManager::load(MemoryStore::new(), ScheduleConfig::default());
        let mut ids = Vec::new();
        for n in 0..25 {
            manager.edit_draft(DraftEdit::Title(format!("item {n}")));
            ids.push(manager.add_item().expect("added"));
        }

        assert_eq!(manager.state().items.len(), 25);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn initial_day_comes_from_config() {
        let defaults = ScheduleConfig {
            default_day: Weekday::Wednesday,
            ..ScheduleConfig::default()
        };
        let manager = ScheduleManager::load(MemoryStore::new(), defaults);

        assert_eq!(manager.state().selected_day, Weekday::Wednesday);
        assert_eq!(manager.state().draft.day, Some(Weekday::Wednesday));
    }
}
