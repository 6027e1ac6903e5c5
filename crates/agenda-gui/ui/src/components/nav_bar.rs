use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
  pub title:    String,
  pub active:   Route,
  #[prop_or_default]
  pub children: Html
}

#[function_component(NavBar)]
pub fn nav_bar(
  props: &NavBarProps
) -> Html {
  let link = |route: Route, label: &str| {
    let class = if props.active == route {
      "nav-link active"
    } else {
      "nav-link"
    };
    html! {
        <Link<Route> to={route} classes={class}>{ label.to_string() }</Link<Route>>
    }
  };

  html! {
      <nav class="nav-bar">
          <h1>{ &props.title }</h1>
          <div class="nav-links">
              { link(Route::Dashboard, "Tarefas") }
              { link(Route::Schedule, "Cronograma") }
          </div>
          <div class="nav-actions">{ props.children.clone() }</div>
      </nav>
  }
}
