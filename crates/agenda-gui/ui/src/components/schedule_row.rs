use agenda_core::task::BadgeColor;
use agenda_gui_shared::ScheduleItem;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::soft_badge_class;

#[derive(Properties, PartialEq)]
pub struct ScheduleRowProps {
  pub item:      ScheduleItem,
  pub on_delete: Callback<String>
}

#[function_component(ScheduleRow)]
pub fn schedule_row(
  props: &ScheduleRowProps
) -> Html {
  let item = &props.item;
  let on_delete = {
    let on_delete = props.on_delete.clone();
    let id = item.id.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(id.clone())
    })
  };

  html! {
      <div class="row schedule-row">
          <div class="when">
              <span class="clock">{ "🕒" }</span>
              <span>{ &item.time }</span>
              <span class="muted small">{ format!("{}min", item.duration) }</span>
          </div>
          <div class="what">
              <h3>{ &item.title }</h3>
              {
                  match &item.description {
                      Some(description) => html! { <p class="muted small">{ description }</p> },
                      None => html! {},
                  }
              }
              <div class="badges">
                  <span class={soft_badge_class(BadgeColor::for_priority(item.priority))}>
                      { item.priority.as_key() }
                  </span>
                  <span class="badge soft gray">{ item.category.label() }</span>
                  {
                      if item.is_recurring {
                          html! { <span class="badge soft blue">{ "Recorrente" }</span> }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          <button class="btn danger icon" title="Excluir" onclick={on_delete}>{ "🗑" }</button>
      </div>
  }
}
