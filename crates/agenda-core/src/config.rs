use std::time::Duration;

use agenda_gui_shared::{
  Priority,
  ScheduleCategory,
  TaskCategory,
  Weekday
};
use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

const DEFAULT_PASSPHRASE: &str =
  "123456";
const DEFAULT_LOGIN_DELAY_MS: u32 = 500;
const MAX_LOGIN_DELAY_MS: u32 = 10_000;
const DEFAULT_SCHEDULE_TIME: &str =
  "09:00";
const DEFAULT_SCHEDULE_DURATION: u32 =
  60;
const MAX_SCHEDULE_DURATION: u32 =
  24 * 60;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct AgendaConfig {
  #[serde(default)]
  pub login:     LoginConfig,
  #[serde(default)]
  pub dashboard: DashboardConfig,
  #[serde(default)]
  pub schedule:  ScheduleConfig
}

/// Settings of the login screen.
///
/// `passphrase` is a placeholder that
/// ships inside the client bundle. It
/// keeps casual visitors out of the UI
/// and nothing more; anything that needs
/// real access control must check
/// credentials on a server.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct LoginConfig {
  pub passphrase: String,
  pub delay_ms:   u32
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct DashboardConfig {
  pub default_priority: Priority,
  pub default_category: TaskCategory
}

/// Values used for unset draft fields
/// and for the initially selected day.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct ScheduleConfig {
  pub default_day:      Weekday,
  pub default_time:     String,
  pub default_duration: u32,
  pub default_category: ScheduleCategory,
  pub default_priority: Priority
}

impl Default for AgendaConfig {
  fn default() -> Self {
    Self {
      login:     LoginConfig::default(),
      dashboard: DashboardConfig::default(),
      schedule:  ScheduleConfig::default()
    }
  }
}

impl Default for LoginConfig {
  fn default() -> Self {
    Self {
      passphrase: DEFAULT_PASSPHRASE
        .to_string(),
      delay_ms:   DEFAULT_LOGIN_DELAY_MS
    }
  }
}

impl LoginConfig {
  pub fn delay(&self) -> Duration {
    Duration::from_millis(u64::from(
      self.delay_ms
    ))
  }
}

impl Default for ScheduleConfig {
  fn default() -> Self {
    Self {
      default_day:      Weekday::Monday,
      default_time:
        DEFAULT_SCHEDULE_TIME.to_string(),
      default_duration:
        DEFAULT_SCHEDULE_DURATION,
      default_category:
        ScheduleCategory::Work,
      default_priority: Priority::Medium
    }
  }
}

impl AgendaConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: AgendaConfig =
      toml::from_str(text).context(
        "failed to parse agenda config"
      )?;
    cfg.sanitize();
    debug!(
      default_time =
        %cfg.schedule.default_time,
      "parsed agenda config"
    );
    Ok(cfg)
  }

  /// Parses `text`, logging and falling
  /// back to built-in defaults when it is
  /// not a valid config.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          delay_ms = cfg.login.delay_ms,
          default_day = cfg
            .schedule
            .default_day
            .label(),
          "loaded agenda config"
        );
        cfg
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed parsing agenda config; \
           using defaults"
        );
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.login.passphrase.is_empty() {
      warn!(
        "login.passphrase is empty; \
         using default"
      );
      self.login.passphrase =
        DEFAULT_PASSPHRASE.to_string();
    }

    if self.login.delay_ms
      > MAX_LOGIN_DELAY_MS
    {
      warn!(
        delay_ms = self.login.delay_ms,
        max = MAX_LOGIN_DELAY_MS,
        "login.delay_ms too large; \
         clamping"
      );
      self.login.delay_ms =
        MAX_LOGIN_DELAY_MS;
    }

    let time =
      self.schedule.default_time.trim();
    if is_clock_time(time) {
      self.schedule.default_time =
        time.to_string();
    } else {
      warn!(
        value = %self.schedule.default_time,
        "schedule.default_time is not \
         HH:MM; using default"
      );
      self.schedule.default_time =
        DEFAULT_SCHEDULE_TIME.to_string();
    }

    if self.schedule.default_duration == 0
      || self.schedule.default_duration
        > MAX_SCHEDULE_DURATION
    {
      warn!(
        value =
          self.schedule.default_duration,
        "schedule.default_duration out \
         of range; using default"
      );
      self.schedule.default_duration =
        DEFAULT_SCHEDULE_DURATION;
    }
  }
}

/// True for a zero-padded 24h `HH:MM`
/// value. Only such values sort
/// correctly as strings.
pub fn is_clock_time(value: &str) -> bool {
  let Some((hours, minutes)) =
    value.split_once(':')
  else {
    return false;
  };
  if hours.len() != 2
    || minutes.len() != 2
    || !hours
      .bytes()
      .chain(minutes.bytes())
      .all(|b| b.is_ascii_digit())
  {
    return false;
  }
  match (
    hours.parse::<u8>(),
    minutes.parse::<u8>()
  ) {
    | (Ok(h), Ok(m)) => h < 24 && m < 60,
    | _ => false
  }
}
