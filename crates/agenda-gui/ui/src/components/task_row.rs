use agenda_core::task::BadgeColor;
use agenda_gui_shared::Task;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  function_component,
  html
};

use super::solid_badge_class;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      Task,
  pub on_toggle: Callback<String>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let task = &props.task;
  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    let id = task.id.clone();
    Callback::from(move |_: Event| {
      on_toggle.emit(id.clone())
    })
  };
  let title_class = if task.completed {
    "task-title done"
  } else {
    "task-title"
  };
  let priority = task.priority;

  html! {
      <li class="row">
          <input
              type="checkbox"
              checked={task.completed}
              onchange={on_toggle}
          />
          <span class={title_class}>{ &task.title }</span>
          <span class={solid_badge_class(BadgeColor::for_priority(priority))}>
              { priority.as_key() }
          </span>
          <span class="muted small">{ task.category.as_key() }</span>
      </li>
  }
}
