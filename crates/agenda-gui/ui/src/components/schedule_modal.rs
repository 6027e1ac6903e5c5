use agenda_core::schedule::DraftEdit;
use agenda_gui_shared::{
  Priority,
  ScheduleCategory,
  ScheduleDraft,
  Weekday
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
  pub open:      bool,
  pub draft:     ScheduleDraft,
  pub on_edit:   Callback<DraftEdit>,
  pub on_cancel: Callback<MouseEvent>,
  pub on_submit: Callback<MouseEvent>
}

#[function_component(ScheduleModal)]
pub fn schedule_modal(
  props: &ScheduleModalProps
) -> Html {
  if !props.open {
    return html! {};
  }

  let draft = &props.draft;
  let edit_input =
    |make: fn(String) -> DraftEdit| {
      let on_edit = props.on_edit.clone();
      Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_edit.emit(make(input.value()));
      })
    };

  let on_title = edit_input(DraftEdit::Title);
  let on_time = edit_input(DraftEdit::Time);

  let on_description = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_edit.emit(DraftEdit::Description(
        area.value()
      ));
    })
  };

  let on_duration = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let minutes =
        input.value().trim().parse::<u32>().ok();
      on_edit.emit(DraftEdit::Duration(
        minutes
      ));
    })
  };

  let on_day = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(day) =
        Weekday::from_label(&select.value())
      {
        on_edit.emit(DraftEdit::Day(day));
      }
    })
  };

  let on_category = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(category) =
        ScheduleCategory::from_label(
          &select.value()
        )
      {
        on_edit.emit(DraftEdit::Category(
          category
        ));
      }
    })
  };

  let on_priority = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(priority) =
        Priority::from_key(&select.value())
      {
        on_edit.emit(DraftEdit::Priority(
          priority
        ));
      }
    })
  };

  let on_recurring = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_edit.emit(DraftEdit::Recurring(
        input.checked()
      ));
    })
  };

  let duration = draft
    .duration
    .map(|minutes| minutes.to_string())
    .unwrap_or_default();

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">{ "Novo Item no Cronograma" }</div>
              <div class="content">
                  <input
                      type="text"
                      placeholder="Título"
                      value={draft.title.clone()}
                      oninput={on_title}
                  />
                  <textarea
                      placeholder="Descrição (opcional)"
                      rows="3"
                      value={draft.description.clone()}
                      oninput={on_description}
                  />

                  <div class="grid-2">
                      <select onchange={on_day}>
                          {
                              for Weekday::ALL.iter().map(|day| html! {
                                  <option value={day.label()} selected={draft.day == Some(*day)}>
                                      { day.label() }
                                  </option>
                              })
                          }
                      </select>
                      <input type="time" value={draft.time.clone()} oninput={on_time} />
                  </div>

                  <div class="grid-2">
                      <select onchange={on_category}>
                          {
                              for ScheduleCategory::ALL.iter().map(|category| html! {
                                  <option
                                      value={category.label()}
                                      selected={draft.category == Some(*category)}
                                  >
                                      { category.label() }
                                  </option>
                              })
                          }
                      </select>
                      <select onchange={on_priority}>
                          {
                              for Priority::ALL.iter().map(|priority| html! {
                                  <option
                                      value={priority.as_key()}
                                      selected={draft.priority == Some(*priority)}
                                  >
                                      { priority.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>

                  <label class="field">
                      { "Duração (min)" }
                      <input type="number" min="1" step="5" value={duration} oninput={on_duration} />
                  </label>

                  <label class="field inline">
                      <input
                          type="checkbox"
                          checked={draft.is_recurring}
                          onchange={on_recurring}
                      />
                      { "Atividade Recorrente" }
                  </label>

                  <div class="footer">
                      <button type="button" class="btn" onclick={props.on_cancel.clone()}>
                          { "Cancelar" }
                      </button>
                      <button type="button" class="btn primary" onclick={props.on_submit.clone()}>
                          { "Adicionar" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
