use chrono::Utc;

/// Issues timestamp ids: the current
/// wall clock in milliseconds, as a
/// decimal string. Ids never repeat
/// within one generator even when the
/// clock stalls or goes backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
  last: i64
}

impl IdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts after the largest numeric
  /// id in `existing`. Non-numeric ids
  /// are ignored.
  pub fn seeded<'a, I>(
    existing: I
  ) -> Self
  where
    I: IntoIterator<Item = &'a str>
  {
    let last = existing
      .into_iter()
      .filter_map(|id| {
        id.trim().parse::<i64>().ok()
      })
      .max()
      .unwrap_or(0);
    Self {
      last
    }
  }

  pub fn next_id(&mut self) -> String {
    self.next_at(
      Utc::now().timestamp_millis()
    )
  }

  pub fn next_at(
    &mut self,
    now_millis: i64
  ) -> String {
    let id = now_millis
      .max(self.last.saturating_add(1));
    self.last = id;
    id.to_string()
  }
}
