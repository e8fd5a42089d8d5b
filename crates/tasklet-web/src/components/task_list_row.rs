use tasklet_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let done = props.task.completed;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class={classes!("row", done.then_some("done"))}>
          <input
              type="checkbox"
              class="check"
              checked={done}
              onchange={move |_| on_toggle.emit(id)}
          />
          <span class="task-text">{ &props.task.text }</span>
          <button class="btn danger" onclick={move |_| on_delete.emit(id)}>
              { "Delete" }
          </button>
      </div>
  }
}
