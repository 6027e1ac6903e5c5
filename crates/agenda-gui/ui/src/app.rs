use agenda_core::config::AgendaConfig;
use gloo::console::log;
use yew::{
  ContextProvider,
  Html,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Link,
  Routable,
  Switch
};

use crate::components::{
  DashboardPage,
  LoginPage,
  SchedulePage
};

const AGENDA_CONFIG_TOML: &str = include_str!(
  "../assets/agenda.toml"
);

#[derive(
  Debug, Clone, PartialEq, Routable,
)]
pub enum Route {
  #[at("/")]
  Login,
  #[at("/dashboard")]
  Dashboard,
  #[at("/schedule")]
  Schedule,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_agenda_config);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "router and config initialized"
      );
      || ()
    });
  }

  html! {
      <ContextProvider<AgendaConfig> context={(*config).clone()}>
          <BrowserRouter>
              <Switch<Route> render={switch} />
          </BrowserRouter>
      </ContextProvider<AgendaConfig>>
  }
}

fn switch(route: Route) -> Html {
  tracing::debug!(
    ?route,
    "rendering route"
  );
  match route {
    | Route::Login => {
      html! { <LoginPage /> }
    }
    | Route::Dashboard => {
      html! { <DashboardPage /> }
    }
    | Route::Schedule => {
      html! { <SchedulePage /> }
    }
    | Route::NotFound => {
      html! { <NotFound /> }
    }
  }
}

#[function_component(NotFound)]
fn not_found() -> Html {
  html! {
      <div class="page centered">
          <div class="panel">
              <div class="header">{ "Página não encontrada" }</div>
              <Link<Route> to={Route::Login} classes="btn">{ "Voltar" }</Link<Route>>
          </div>
      </div>
  }
}

/// Config provided to every page. Falls
/// back to built-in defaults outside the
/// provider.
#[hook]
pub fn use_agenda_config() -> AgendaConfig
{
  use_context::<AgendaConfig>()
    .unwrap_or_default()
}

fn load_agenda_config() -> AgendaConfig {
  AgendaConfig::load_or_default(
    AGENDA_CONFIG_TOML
  )
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
