use std::collections::BTreeMap;

use agenda_gui_shared::{SCHEDULE_STORAGE_KEY, ScheduleItem};
use anyhow::Context;
use tracing::{debug, warn};

/// String-keyed persistent storage, shaped after the browser's
/// `localStorage`. Writes overwrite the whole value.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-process store used off the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the persisted schedule. A missing key, an unreadable store or
/// malformed JSON all yield an empty schedule; the stored value is left
/// as it is until the next save.
#[tracing::instrument(skip(store))]
pub fn load_schedule<S>(store: &S) -> Vec<ScheduleItem>
where
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(SCHEDULE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted schedule; starting empty");
            return Vec::new();
        }
        Err(error) => {
            warn!(%error, "failed reading persisted schedule; starting empty");
            return Vec::new();
        }
    };

    match parse_schedule(&raw) {
        Ok(items) => {
            debug!(count = items.len(), "loaded persisted schedule");
            items
        }
        Err(error) => {
            warn!(%error, "persisted schedule is malformed; starting empty");
            Vec::new()
        }
    }
}

/// Overwrites the persisted schedule with `items`.
#[tracing::instrument(skip(store, items), fields(count = items.len()))]
pub fn save_schedule<S>(store: &mut S, items: &[ScheduleItem]) -> anyhow::Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let serialized = serde_json::to_string(items).context("failed to serialize schedule")?;
    store
        .set_item(SCHEDULE_STORAGE_KEY, &serialized)
        .with_context(|| format!("failed to write {SCHEDULE_STORAGE_KEY}"))?;
    debug!(bytes = serialized.len(), "saved schedule");
    Ok(())
}

fn parse_schedule(raw: &str) -> anyhow::Result<Vec<ScheduleItem>> {
    serde_json::from_str(raw)
        .with_context(|| format!("failed parsing {SCHEDULE_STORAGE_KEY}"))
}
