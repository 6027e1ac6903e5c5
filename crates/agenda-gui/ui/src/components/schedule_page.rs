use agenda_core::schedule::{
  DraftEdit,
  ScheduleManager
};
use agenda_gui_shared::Weekday;
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};

use super::{
  NavBar,
  ScheduleModal,
  ScheduleRow
};
use crate::app::{
  Route,
  ui_debug,
  use_agenda_config
};
use crate::storage::BrowserStorage;

type Manager =
  ScheduleManager<BrowserStorage>;

fn update(
  manager: &UseStateHandle<Manager>,
  apply: impl FnOnce(&mut Manager)
) {
  let mut next = (**manager).clone();
  apply(&mut next);
  manager.set(next);
}

#[function_component(SchedulePage)]
pub fn schedule_page() -> Html {
  let config = use_agenda_config();
  let manager = {
    let defaults = config.schedule.clone();
    use_state(move || {
      ScheduleManager::load(
        BrowserStorage,
        defaults
      )
    })
  };

  let on_open = {
    let manager = manager.clone();
    Callback::from(move |_: MouseEvent| {
      update(&manager, |m| m.open_modal());
    })
  };

  let on_cancel = {
    let manager = manager.clone();
    Callback::from(move |_: MouseEvent| {
      update(&manager, |m| {
        m.cancel_modal()
      });
    })
  };

  let on_submit = {
    let manager = manager.clone();
    Callback::from(move |_: MouseEvent| {
      update(&manager, |m| {
        match m.add_item() {
          | Some(id) => {
            ui_debug("schedule.add", &id)
          }
          | None => ui_debug(
            "schedule.add",
            "blank title; nothing added"
          )
        }
      });
    })
  };

  let on_edit = {
    let manager = manager.clone();
    Callback::from(move |edit: DraftEdit| {
      update(&manager, |m| {
        m.edit_draft(edit)
      });
    })
  };

  let on_delete = {
    let manager = manager.clone();
    Callback::from(move |id: String| {
      update(&manager, |m| {
        if !m.delete_item(&id) {
          tracing::debug!(
            id = %id,
            "item already gone"
          );
        }
      });
    })
  };

  let state = manager.state();
  let day_button = |day: Weekday| {
    let manager = manager.clone();
    let selected = state.selected_day == day;
    let count = state.count_for_day(day);
    let onclick =
      Callback::from(move |_: MouseEvent| {
        update(&manager, |m| {
          m.select_day(day)
        });
      });
    html! {
        <button
            class={classes!("day-button", selected.then_some("active"))}
            onclick={onclick}
        >
            { day.label() }
            {
                if count > 0 {
                    html! { <span class="count">{ count }</span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
  };

  html! {
      <div class="page">
          <NavBar title={"Cronograma Semanal".to_string()} active={Route::Schedule}>
              <button class="btn primary" onclick={on_open}>{ "+ Novo Item" }</button>
          </NavBar>

          <div class="day-selector">
              { for Weekday::ALL.into_iter().map(day_button) }
          </div>

          <main class="content">
              <div class="panel list">
                  {
                      for state.visible_items().into_iter().map(|item| html! {
                          <ScheduleRow
                              key={item.id.clone()}
                              item={item.clone()}
                              on_delete={on_delete.clone()}
                          />
                      })
                  }
              </div>
          </main>

          <ScheduleModal
              open={state.is_modal_open()}
              draft={state.draft.clone()}
              on_edit={on_edit}
              on_cancel={on_cancel}
              on_submit={on_submit}
          />
      </div>
  }
}
