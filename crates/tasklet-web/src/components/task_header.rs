use tasklet_core::render::{
  APP_TITLE,
  pending_label
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskHeaderProps {
  pub pending: usize
}

#[function_component(TaskHeader)]
pub fn task_header(
  props: &TaskHeaderProps
) -> Html {
  html! {
      <div class="header">
          <h1>{ APP_TITLE }</h1>
          <p class="subtitle">{ pending_label(props.pending) }</p>
      </div>
  }
}
