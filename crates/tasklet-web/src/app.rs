mod storage;

use std::rc::Rc;

use gloo::console::log;
use tasklet_core::render::{
  self,
  ListBody,
  Summary
};
use tasklet_core::{
  Change,
  Controller,
  Filter,
  SystemClock,
  TaskId,
  TodoState
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use self::storage::{
  BrowserStorage,
  load_config
};
use crate::components::{
  FilterBar,
  SummaryFooter,
  TaskHeader,
  TaskInput,
  TaskList
};

#[function_component(App)]
pub fn app() -> Html {
  let controller = use_mut_ref(|| {
    Controller::new(
      &load_config(),
      Rc::new(BrowserStorage),
      Rc::new(SystemClock)
    )
  });
  let snapshot = {
    let controller = controller.clone();
    use_state(move || {
      controller.borrow().state()
    })
  };

  {
    let controller = controller.clone();
    let snapshot = snapshot.clone();
    use_effect_with((), move |_| {
      let subscription = controller
        .borrow_mut()
        .subscribe(Rc::new(
          move |state: &Rc<TodoState>,
                change: Change| {
            tracing::trace!(
              ?change,
              "state changed"
            );
            snapshot.set(state.clone());
          }
        ));

      let outcome =
        controller.borrow_mut().activate();
      match outcome {
        | Ok(outcome) => ui_debug(
          "app.mounted",
          &format!(
            "stored tasks loaded: \
             {outcome:?}"
          )
        ),
        | Err(error) => {
          tracing::error!(
            error = ?error,
            "failed loading stored \
             tasks; changes will not be \
             saved"
          );
        }
      }

      move || {
        controller
          .borrow_mut()
          .unsubscribe(subscription);
      }
    });
  }

  let on_input = {
    let controller = controller.clone();
    Callback::from(move |value: String| {
      controller
        .borrow_mut()
        .set_input(value);
    })
  };

  let on_submit = {
    let controller = controller.clone();
    Callback::from(move |_: ()| {
      let added = controller
        .borrow_mut()
        .submit_input();
      if let Some(id) = added {
        ui_debug(
          "task.added",
          &id.to_string()
        );
      }
    })
  };

  let on_toggle = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      controller
        .borrow_mut()
        .toggle_completed(id);
    })
  };

  let on_delete = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      if controller
        .borrow_mut()
        .delete_task(id)
      {
        ui_debug(
          "task.deleted",
          &id.to_string()
        );
      }
    })
  };

  let on_filter = {
    let controller = controller.clone();
    Callback::from(move |filter: Filter| {
      controller
        .borrow_mut()
        .set_filter(filter);
    })
  };

  let state = (*snapshot).clone();
  let summary = Summary::of(&state.tasks);

  html! {
      <div class="page">
          <div class="shell">
              <TaskHeader pending={summary.pending} />
              <TaskInput
                  value={state.input.clone()}
                  {on_input}
                  {on_submit}
              />
              <FilterBar active={state.filter} on_select={on_filter} />
              {
                  match render::list_body(&state) {
                      | ListBody::Empty => html! {
                          <div class="empty-state">
                              <p>{ render::EMPTY_STATE_MESSAGE }</p>
                          </div>
                      },
                      | ListBody::Rows(tasks) => html! {
                          <TaskList {tasks} {on_toggle} {on_delete} />
                      }
                  }
              }
              <SummaryFooter footer={render::completion_footer(&state.tasks)} />
          </div>
      </div>
  }
}

fn ui_debug(
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
