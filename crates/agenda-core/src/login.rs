//! The password gate in front of the
//! dashboard.
//!
//! This is not access control. The
//! passphrase ships with the client and
//! the flag it sets lives in storage the
//! user can edit; anyone can read one or
//! write the other. A real deployment
//! has to verify credentials on a server.

use std::time::Duration;

use agenda_gui_shared::LOGGED_IN_STORAGE_KEY;
use anyhow::Context;
use tracing::{
  debug,
  info,
  warn
};

use crate::config::LoginConfig;
use crate::storage::KeyValueStore;

/// Message shown after a wrong
/// password.
pub const REJECTED_MESSAGE: &str =
  "Senha incorreta";

const LOGGED_IN_VALUE: &str = "true";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum LoginOutcome {
  Granted,
  Rejected
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
  Input(String),
  Submit,
  Resolve(LoginOutcome)
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct LoginState {
  pub password:   String,
  pub error:      Option<String>,
  pub is_loading: bool
}

impl LoginState {
  pub fn can_submit(&self) -> bool {
    !self.is_loading
  }
}

pub fn reduce(
  mut state: LoginState,
  action: LoginAction
) -> LoginState {
  match action {
    | LoginAction::Input(password) => {
      state.password = password;
    }
    | LoginAction::Submit => {
      if state.can_submit() {
        state.is_loading = true;
        state.error = None;
      }
    }
    | LoginAction::Resolve(
      LoginOutcome::Granted
    ) => {
      // stays busy while the route
      // changes
      state.error = None;
    }
    | LoginAction::Resolve(
      LoginOutcome::Rejected
    ) => {
      state.is_loading = false;
      state.error =
        Some(REJECTED_MESSAGE.to_string());
    }
  }
  state
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGate {
  passphrase: String,
  delay:      Duration
}

impl LoginGate {
  pub fn new(
    passphrase: impl Into<String>,
    delay: Duration
  ) -> Self {
    Self {
      passphrase: passphrase.into(),
      delay
    }
  }

  pub fn from_config(
    cfg: &LoginConfig
  ) -> Self {
    Self::new(
      cfg.passphrase.clone(),
      cfg.delay()
    )
  }

  /// Artificial wait before the
  /// comparison, run by the caller.
  pub fn delay(&self) -> Duration {
    self.delay
  }

  /// Compares `input` with the
  /// passphrase and, on a match, marks
  /// the session as logged in.
  #[tracing::instrument(skip_all)]
  pub fn attempt<S>(
    &self,
    input: &str,
    store: &mut S
  ) -> anyhow::Result<LoginOutcome>
  where
    S: KeyValueStore + ?Sized
  {
    if input != self.passphrase {
      warn!("login rejected");
      return Ok(LoginOutcome::Rejected);
    }

    store
      .set_item(
        LOGGED_IN_STORAGE_KEY,
        LOGGED_IN_VALUE
      )
      .with_context(|| {
        format!(
          "failed to write \
           {LOGGED_IN_STORAGE_KEY}"
        )
      })?;
    info!("login granted");
    Ok(LoginOutcome::Granted)
  }
}

/// Reads the flag written by a granted
/// attempt. No screen checks it yet; it
/// is the read side a future route guard
/// would call before showing a page.
pub fn is_logged_in<S>(store: &S) -> bool
where
  S: KeyValueStore + ?Sized
{
  match store
    .get_item(LOGGED_IN_STORAGE_KEY)
  {
    | Ok(value) => {
      value.as_deref()
        == Some(LOGGED_IN_VALUE)
    }
    | Err(error) => {
      debug!(%error, "could not read login flag");
      false
    }
  }
}
