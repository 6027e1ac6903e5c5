use agenda_core::storage::KeyValueStore;
use anyhow::anyhow;
use gloo::storage::{
  LocalStorage,
  Storage
};
use wasm_bindgen::JsValue;

/// `window.localStorage`, written as
/// raw strings so the stored values stay
/// readable by any other client of the
/// same origin.
#[derive(
  Debug, Clone, Copy, Default, PartialEq,
)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    LocalStorage::raw()
      .get_item(key)
      .map_err(|error| {
        js_error("reading", key, error)
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    LocalStorage::raw()
      .set_item(key, value)
      .map_err(|error| {
        js_error("writing", key, error)
      })
  }
}

fn js_error(
  op: &str,
  key: &str,
  error: JsValue
) -> anyhow::Error {
  anyhow!(
    "localStorage {op} {key} failed: \
     {error:?}"
  )
}
