//! State containers for the agenda
//! client: the login gate, the task
//! dashboard and the weekly schedule.
//!
//! Nothing here touches the browser.
//! Persistence goes through
//! [`storage::KeyValueStore`], which the
//! UI binds to `localStorage` and tests
//! bind to [`storage::MemoryStore`].

pub mod config;
pub mod id;
pub mod login;
pub mod schedule;
pub mod storage;
pub mod task;

pub use agenda_gui_shared as model;
