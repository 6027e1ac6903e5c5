use agenda_core::id::IdGenerator;
use agenda_core::task::{
  self,
  TaskAction,
  TaskBoard
};
use agenda_gui_shared::{
  Priority,
  TaskCategory
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use super::{
  NavBar,
  TaskRow
};
use crate::app::{
  Route,
  use_agenda_config
};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
  let config = use_agenda_config();
  let board = {
    let defaults = config.dashboard.clone();
    use_state(move || TaskBoard::new(&defaults))
  };
  let ids = use_mut_ref(IdGenerator::new);

  let apply = {
    let board = board.clone();
    Callback::from(move |action: TaskAction| {
      board.set(task::reduce(
        (*board).clone(),
        action
      ));
    })
  };

  let on_title = {
    let apply = apply.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      apply.emit(TaskAction::SetTitle(
        input.value()
      ));
    })
  };

  let on_priority = {
    let apply = apply.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(priority) =
        Priority::from_key(&select.value())
      {
        apply.emit(
          TaskAction::SetPriority(priority)
        );
      }
    })
  };

  let on_category = {
    let apply = apply.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(category) =
        TaskCategory::from_key(
          &select.value()
        )
      {
        apply.emit(
          TaskAction::SetCategory(category)
        );
      }
    })
  };

  let on_add = {
    let apply = apply.clone();
    Callback::from(move |_: MouseEvent| {
      let id = ids.borrow_mut().next_id();
      apply.emit(TaskAction::Add {
        id
      });
    })
  };

  let on_toggle = {
    let apply = apply.clone();
    Callback::from(move |id: String| {
      apply.emit(TaskAction::Toggle(id));
    })
  };

  html! {
      <div class="page">
          <NavBar title={"Minhas Tarefas".to_string()} active={Route::Dashboard} />

          <main class="content">
              <div class="panel add-row">
                  <input
                      type="text"
                      placeholder="Nova tarefa..."
                      value={board.draft_title.clone()}
                      oninput={on_title}
                  />
                  <select onchange={on_priority}>
                      {
                          for Priority::ALL.iter().map(|priority| html! {
                              <option
                                  value={priority.as_key()}
                                  selected={*priority == board.selected_priority}
                              >
                                  { priority.label() }
                              </option>
                          })
                      }
                  </select>
                  <select onchange={on_category}>
                      {
                          for TaskCategory::ALL.iter().map(|category| html! {
                              <option
                                  value={category.as_key()}
                                  selected={*category == board.selected_category}
                              >
                                  { category.label() }
                              </option>
                          })
                      }
                  </select>
                  <button class="btn primary" onclick={on_add}>{ "+" }</button>
              </div>

              <ul class="panel list">
                  {
                      if board.tasks.is_empty() {
                          html! {}
                      } else {
                          html! {
                              <li class="muted small">
                                  { format!("{} de {} concluídas", board.completed_count(), board.tasks.len()) }
                              </li>
                          }
                      }
                  }
                  {
                      for board.tasks.iter().map(|task| html! {
                          <TaskRow
                              key={task.id.clone()}
                              task={task.clone()}
                              on_toggle={on_toggle.clone()}
                          />
                      })
                  }
              </ul>
          </main>
      </div>
  }
}
