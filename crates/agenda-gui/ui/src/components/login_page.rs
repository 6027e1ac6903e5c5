use agenda_core::login::{
  self,
  LoginAction,
  LoginGate,
  LoginOutcome,
  LoginState
};
use gloo::timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::app::{
  Route,
  ui_debug,
  use_agenda_config
};
use crate::storage::BrowserStorage;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
  let config = use_agenda_config();
  let state = use_state(LoginState::default);
  let navigator = use_navigator();

  let on_input = {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      state.set(login::reduce(
        (*state).clone(),
        LoginAction::Input(input.value())
      ));
    })
  };

  let on_submit = {
    let state = state.clone();
    let gate =
      LoginGate::from_config(&config.login);
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if !state.can_submit() {
        return;
      }

      let submitted = login::reduce(
        (*state).clone(),
        LoginAction::Submit
      );
      state.set(submitted.clone());
      ui_debug(
        "login.submit",
        "waiting before passphrase check"
      );

      let state = state.clone();
      let gate = gate.clone();
      let navigator = navigator.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let delay_ms = u32::try_from(
            gate.delay().as_millis()
          )
          .unwrap_or(u32::MAX);
          TimeoutFuture::new(delay_ms).await;

          let mut store = BrowserStorage;
          let outcome = match gate.attempt(
            &submitted.password,
            &mut store
          ) {
            | Ok(outcome) => outcome,
            | Err(error) => {
              tracing::error!(
                error = %format!("{error:#}"),
                "failed recording login"
              );
              LoginOutcome::Rejected
            }
          };

          state.set(login::reduce(
            submitted,
            LoginAction::Resolve(outcome)
          ));

          if outcome == LoginOutcome::Granted
          {
            match navigator {
              | Some(navigator) => {
                navigator
                  .push(&Route::Dashboard);
              }
              | None => {
                tracing::error!(
                  "no router context; \
                   staying on login"
                );
              }
            }
          }
        }
      );
    })
  };

  html! {
      <div class="page centered">
          <div class="panel login">
              <div class="login-icon">{ "🔒" }</div>
              <h1>{ "Área Restrita" }</h1>
              <p class="muted">{ "Digite sua senha para acessar" }</p>

              <form class="login-form" onsubmit={on_submit}>
                  {
                      if let Some(error) = &state.error {
                          html! { <div class="error">{ error }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <input
                      type="password"
                      required=true
                      autofocus=true
                      placeholder="Digite sua senha"
                      value={state.password.clone()}
                      oninput={on_input}
                      disabled={state.is_loading}
                  />
                  <button type="submit" class="btn primary" disabled={state.is_loading}>
                      {
                          if state.is_loading {
                              html! { <span class="spinner"></span> }
                          } else {
                              html! { <span>{ "Entrar" }</span> }
                          }
                      }
                  </button>
              </form>

              <p class="muted small">{ "Acesso exclusivo na rede local" }</p>
          </div>
      </div>
  }
}
