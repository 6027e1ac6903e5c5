use serde::{
  Deserialize,
  Serialize
};

/// Local storage key holding the
/// login flag. Only the exact string
/// `"true"` means logged in.
pub const LOGGED_IN_STORAGE_KEY: &str =
  "isLoggedIn";

/// Local storage key holding the JSON
/// array of schedule items.
pub const SCHEDULE_STORAGE_KEY: &str =
  "scheduleItems";

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High
}

impl Priority {
  pub const ALL: [Priority; 3] = [
    Priority::Low,
    Priority::Medium,
    Priority::High
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Priority::Low => "low",
      | Priority::Medium => "medium",
      | Priority::High => "high"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key.trim() {
      | "low" => Some(Priority::Low),
      | "medium" => {
        Some(Priority::Medium)
      }
      | "high" => Some(Priority::High),
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Priority::Low => "Baixa",
      | Priority::Medium => "Média",
      | Priority::High => "Alta"
    }
  }
}

/// The weekday set, in display order.
/// Serialized as the Portuguese day
/// name.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Default,
)]
pub enum Weekday {
  #[serde(rename = "Domingo")]
  Sunday,
  #[default]
  #[serde(rename = "Segunda")]
  Monday,
  #[serde(rename = "Terça")]
  Tuesday,
  #[serde(rename = "Quarta")]
  Wednesday,
  #[serde(rename = "Quinta")]
  Thursday,
  #[serde(rename = "Sexta")]
  Friday,
  #[serde(rename = "Sábado")]
  Saturday
}

impl Weekday {
  pub const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Weekday::Sunday => "Domingo",
      | Weekday::Monday => "Segunda",
      | Weekday::Tuesday => "Terça",
      | Weekday::Wednesday => "Quarta",
      | Weekday::Thursday => "Quinta",
      | Weekday::Friday => "Sexta",
      | Weekday::Saturday => "Sábado"
    }
  }

  pub fn from_label(
    label: &str
  ) -> Option<Self> {
    let label = label.trim();
    Self::ALL
      .into_iter()
      .find(|day| day.label() == label)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum ScheduleCategory {
  #[default]
  #[serde(rename = "Trabalho")]
  Work,
  #[serde(rename = "Estudo")]
  Study,
  #[serde(rename = "Exercício")]
  Exercise,
  #[serde(rename = "Lazer")]
  Leisure,
  #[serde(rename = "Pessoal")]
  Personal,
  #[serde(rename = "Outros")]
  Other
}

impl ScheduleCategory {
  pub const ALL: [ScheduleCategory; 6] = [
    ScheduleCategory::Work,
    ScheduleCategory::Study,
    ScheduleCategory::Exercise,
    ScheduleCategory::Leisure,
    ScheduleCategory::Personal,
    ScheduleCategory::Other
  ];

  pub fn label(self) -> &'static str {
    match self {
      | ScheduleCategory::Work => {
        "Trabalho"
      }
      | ScheduleCategory::Study => {
        "Estudo"
      }
      | ScheduleCategory::Exercise => {
        "Exercício"
      }
      | ScheduleCategory::Leisure => {
        "Lazer"
      }
      | ScheduleCategory::Personal => {
        "Pessoal"
      }
      | ScheduleCategory::Other => {
        "Outros"
      }
    }
  }

  pub fn from_label(
    label: &str
  ) -> Option<Self> {
    let label = label.trim();
    Self::ALL
      .into_iter()
      .find(|category| {
        category.label() == label
      })
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
  #[default]
  Personal,
  Work,
  Study
}

impl TaskCategory {
  pub const ALL: [TaskCategory; 3] = [
    TaskCategory::Personal,
    TaskCategory::Work,
    TaskCategory::Study
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | TaskCategory::Personal => {
        "personal"
      }
      | TaskCategory::Work => "work",
      | TaskCategory::Study => "study"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    let key = key.trim();
    Self::ALL
      .into_iter()
      .find(|category| {
        category.as_key() == key
      })
  }

  pub fn label(self) -> &'static str {
    match self {
      | TaskCategory::Personal => {
        "Pessoal"
      }
      | TaskCategory::Work => {
        "Trabalho"
      }
      | TaskCategory::Study => {
        "Estudos"
      }
    }
  }
}

/// A dashboard to-do entry. Lives in
/// memory only.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:          String,
  pub title:       String,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  pub priority:    Priority,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:    Option<String>,
  #[serde(default)]
  pub completed:   bool,
  pub category:    TaskCategory
}

/// One entry of the weekly schedule,
/// as persisted under
/// [`SCHEDULE_STORAGE_KEY`].
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
  pub id:           String,
  pub title:        String,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description:  Option<String>,
  pub day:          Weekday,
  pub time:         String,
  pub duration:     u32,
  pub category:     ScheduleCategory,
  pub priority:     Priority,
  #[serde(default)]
  pub is_recurring: bool
}

/// Form contents of the "new item"
/// modal. `None`, an empty time and a
/// zero duration all mean "unset".
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
  #[serde(default)]
  pub title:        String,
  #[serde(default)]
  pub description:  String,
  pub day:          Option<Weekday>,
  #[serde(default)]
  pub time:         String,
  pub duration:     Option<u32>,
  pub category:
    Option<ScheduleCategory>,
  pub priority:     Option<Priority>,
  #[serde(default)]
  pub is_recurring: bool
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gym() -> ScheduleItem {
    ScheduleItem {
      id:           "1718000000000"
        .to_string(),
      title:        "Gym".to_string(),
      description:  None,
      day:          Weekday::Monday,
      time:         "07:00".to_string(),
      duration:     45,
      category:
        ScheduleCategory::Exercise,
      priority:     Priority::High,
      is_recurring: true
    }
  }

  #[test]
  fn schedule_item_uses_client_field_names(
  ) {
    let value =
      serde_json::to_value(gym())
        .expect("serialize item");

    assert_eq!(
      value,
      serde_json::json!({
        "id": "1718000000000",
        "title": "Gym",
        "day": "Segunda",
        "time": "07:00",
        "duration": 45,
        "category": "Exercício",
        "priority": "high",
        "isRecurring": true
      })
    );
  }

  #[test]
  fn schedule_item_reads_stored_description(
  ) {
    let raw = r#"{
      "id": "1",
      "title": "Aula",
      "description": "sala 3",
      "day": "Terça",
      "time": "14:30",
      "duration": 90,
      "category": "Estudo",
      "priority": "low",
      "isRecurring": false
    }"#;

    let item: ScheduleItem =
      serde_json::from_str(raw)
        .expect("parse item");

    assert_eq!(
      item.description.as_deref(),
      Some("sala 3")
    );
    assert_eq!(
      item.day,
      Weekday::Tuesday
    );
    assert_eq!(
      item.category,
      ScheduleCategory::Study
    );
    assert!(!item.is_recurring);
  }

  #[test]
  fn unknown_category_is_rejected() {
    let raw = r#"{"id":"1","title":"x","day":"Segunda","time":"09:00","duration":60,"category":"Viagem","priority":"low","isRecurring":false}"#;

    assert!(
      serde_json::from_str::<ScheduleItem>(
        raw
      )
      .is_err()
    );
  }

  #[test]
  fn weekdays_start_on_sunday() {
    let labels: Vec<&str> =
      Weekday::ALL
        .iter()
        .map(|day| day.label())
        .collect();

    assert_eq!(
      labels,
      vec![
        "Domingo", "Segunda", "Terça",
        "Quarta", "Quinta", "Sexta",
        "Sábado"
      ]
    );
    assert_eq!(
      Weekday::default(),
      Weekday::Monday
    );
  }

  #[test]
  fn labels_parse_back() {
    for day in Weekday::ALL {
      assert_eq!(
        Weekday::from_label(day.label()),
        Some(day)
      );
    }
    for category in ScheduleCategory::ALL
    {
      assert_eq!(
        ScheduleCategory::from_label(
          category.label()
        ),
        Some(category)
      );
    }
    assert_eq!(
      Priority::from_key("high"),
      Some(Priority::High)
    );
    assert_eq!(
      TaskCategory::from_key("study"),
      Some(TaskCategory::Study)
    );
    assert_eq!(
      Weekday::from_label("Monday"),
      None
    );
  }

  #[test]
  fn task_serializes_due_date_in_camel_case(
  ) {
    let task = Task {
      id:          "42".to_string(),
      title:       "Ler".to_string(),
      description: None,
      priority:    Priority::Low,
      due_date:    Some(
        "2026-10-19".to_string()
      ),
      completed:   false,
      category:    TaskCategory::Study
    };

    let value =
      serde_json::to_value(&task)
        .expect("serialize task");

    assert_eq!(
      value["dueDate"],
      "2026-10-19"
    );
    assert_eq!(
      value["category"],
      "study"
    );
    assert!(
      value.get("description").is_none()
    );
  }
}
