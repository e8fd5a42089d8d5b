use std::rc::Rc;

use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::Config;
use crate::datastore::{
  HydrateOutcome,
  KeyValueStore,
  Persistence
};
use crate::datetime::Clock;
use crate::filter::Filter;
use crate::render::Summary;
use crate::store::{
  Change,
  Observer,
  StateStore,
  SubscriptionId,
  TodoState
};
use crate::task::{
  Task,
  TaskId
};

/// Turns user actions into state changes
/// and keeps the stored list in step with
/// the in-memory one.
pub struct Controller {
  store:        StateStore,
  persistence:  Rc<Persistence>,
  clock:        Rc<dyn Clock>,
  reject_blank: bool,
  hydrated:     Option<HydrateOutcome>
}

impl Controller {
  pub fn new(
    cfg: &Config,
    storage: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>
  ) -> Self {
    let filter =
      cfg.default_filter().unwrap_or_else(
        |err| {
          warn!(
            error = %err,
            "falling back to the 'all' filter"
          );
          Filter::All
        }
      );
    let persistence = Rc::new(
      Persistence::new(
        storage,
        cfg.storage_key()
      )
    );

    let mut store =
      StateStore::new(TodoState {
        filter,
        ..TodoState::default()
      });
    store.subscribe(persist_on_change(
      persistence.clone()
    ));

    debug!(
      key = %persistence.key(),
      reject_blank = cfg.reject_blank(),
      %filter,
      "controller ready"
    );

    Self {
      store,
      persistence,
      clock,
      reject_blank: cfg.reject_blank(),
      hydrated: None
    }
  }

  /// Reads the stored list once and opens
  /// the gate for writes. Once that has
  /// succeeded, later calls only report the
  /// first outcome. A failed read leaves
  /// writes closed.
  #[tracing::instrument(skip(self))]
  pub fn activate(
    &mut self
  ) -> anyhow::Result<HydrateOutcome> {
    if let Some(outcome) = &self.hydrated {
      warn!("already activated; ignoring");
      return Ok(outcome.clone());
    }

    let hydrated =
      self.persistence.hydrate()?;
    if hydrated.outcome
      != HydrateOutcome::Missing
    {
      self.store.set_tasks(hydrated.tasks);
    }
    self.store.set_loaded(true);
    info!(
      outcome = ?hydrated.outcome,
      "activation complete"
    );
    self.hydrated =
      Some(hydrated.outcome.clone());
    Ok(hydrated.outcome)
  }

  pub fn state(&self) -> Rc<TodoState> {
    self.store.state()
  }

  pub fn subscribe(
    &mut self,
    observer: Observer
  ) -> SubscriptionId {
    self.store.subscribe(observer)
  }

  pub fn unsubscribe(
    &mut self,
    id: SubscriptionId
  ) -> bool {
    self.store.unsubscribe(id)
  }

  pub fn set_input(
    &mut self,
    input: String
  ) {
    self.store.set_input(input);
  }

  /// Adds the current input as a task.
  pub fn submit_input(
    &mut self
  ) -> Option<TaskId> {
    let input = self.store.state().input.clone();
    self.add_task(&input)
  }

  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self,
    text: &str
  ) -> Option<TaskId> {
    if self.reject_blank
      && text.trim().is_empty()
    {
      debug!("rejected blank task text");
      return None;
    }

    let state = self.store.state();
    let id = state
      .tasks
      .next_id(self.clock.now_millis());
    let tasks = state.tasks.with_task(
      Task::new(id, text.to_string())
    );
    self.store.set_tasks(tasks);
    self.store.set_input(String::new());
    info!(id, "added task");
    Some(id)
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_completed(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(tasks) =
      self.store.state().tasks.toggled(id)
    else {
      debug!("toggle for unknown task");
      return false;
    };
    self.store.set_tasks(tasks);
    info!("toggled task");
    true
  }

  #[tracing::instrument(skip(self))]
  pub fn delete_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(tasks) =
      self.store.state().tasks.without(id)
    else {
      debug!("delete for unknown task");
      return false;
    };
    self.store.set_tasks(tasks);
    info!("deleted task");
    true
  }

  pub fn set_filter(
    &mut self,
    filter: Filter
  ) {
    debug!(%filter, "filter selected");
    self.store.set_filter(filter);
  }

  pub fn filtered_tasks(&self) -> Vec<Task> {
    let state = self.store.state();
    state.filter.apply(&state.tasks)
  }

  pub fn summary(&self) -> Summary {
    Summary::of(&self.store.state().tasks)
  }
}

fn persist_on_change(
  persistence: Rc<Persistence>
) -> Observer {
  Rc::new(
    move |state: &Rc<TodoState>,
          change: Change| {
      if !state.loaded
        || !matches!(
          change,
          Change::Tasks | Change::Loaded
        )
      {
        return;
      }
      if let Err(err) =
        persistence.persist(&state.tasks)
      {
        error!(
          error = ?err,
          "failed persisting task list"
        );
      }
    }
  )
}
