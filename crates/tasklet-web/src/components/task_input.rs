use tasklet_core::render::INPUT_PLACEHOLDER;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub value:     String,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  let onkeydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          on_submit.emit(());
        }
      }
    )
  };

  let on_submit = props.on_submit.clone();

  html! {
      <div class="panel input-row">
          <input
              class="task-input"
              value={props.value.clone()}
              placeholder={INPUT_PLACEHOLDER}
              {oninput}
              {onkeydown}
          />
          <button class="btn primary" onclick={move |_| on_submit.emit(())}>
              { "Add" }
          </button>
      </div>
  }
}
