mod dashboard_page;
mod login_page;
mod nav_bar;
mod schedule_modal;
mod schedule_page;
mod schedule_row;
mod task_row;

use agenda_core::task::BadgeColor;
pub use dashboard_page::DashboardPage;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use schedule_modal::ScheduleModal;
pub use schedule_page::SchedulePage;
pub use schedule_row::ScheduleRow;
pub use task_row::TaskRow;

/// Solid badge used on the dashboard.
pub fn solid_badge_class(
  color: BadgeColor
) -> &'static str {
  match color {
    | BadgeColor::Red => "badge solid red",
    | BadgeColor::Yellow => {
      "badge solid yellow"
    }
    | BadgeColor::Green => {
      "badge solid green"
    }
    | BadgeColor::Gray => "badge solid gray"
  }
}

/// Pale badge used on the schedule.
pub fn soft_badge_class(
  color: BadgeColor
) -> &'static str {
  match color {
    | BadgeColor::Red => "badge soft red",
    | BadgeColor::Yellow => {
      "badge soft yellow"
    }
    | BadgeColor::Green => {
      "badge soft green"
    }
    | BadgeColor::Gray => "badge soft gray"
  }
}
