use std::rc::Rc;

use tracing::trace;

use crate::filter::Filter;
use crate::task::TaskList;

/// Snapshot of everything the view reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
  pub tasks:  TaskList,
  pub input:  String,
  /// Set once the stored list has been
  /// read. Writes are held back until then.
  pub loaded: bool,
  pub filter: Filter
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
  Tasks,
  Input,
  Loaded,
  Filter
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub struct SubscriptionId(u64);

pub type Observer =
  Rc<dyn Fn(&Rc<TodoState>, Change)>;

/// Observable holder for [`TodoState`].
/// Setters swap in a fresh snapshot and
/// notify observers in subscription order.
pub struct StateStore {
  state:     Rc<TodoState>,
  observers: Vec<(SubscriptionId, Observer)>,
  next_sub:  u64
}

impl StateStore {
  pub fn new(initial: TodoState) -> Self {
    Self {
      state:     Rc::new(initial),
      observers: Vec::new(),
      next_sub:  0
    }
  }

  pub fn state(&self) -> Rc<TodoState> {
    self.state.clone()
  }

  pub fn subscribe(
    &mut self,
    observer: Observer
  ) -> SubscriptionId {
    let id = SubscriptionId(self.next_sub);
    self.next_sub += 1;
    self.observers.push((id, observer));
    trace!(
      subscription = id.0,
      observers = self.observers.len(),
      "observer subscribed"
    );
    id
  }

  pub fn unsubscribe(
    &mut self,
    id: SubscriptionId
  ) -> bool {
    let before = self.observers.len();
    self
      .observers
      .retain(|(sub, _)| *sub != id);
    before != self.observers.len()
  }

  pub fn set_tasks(
    &mut self,
    tasks: TaskList
  ) {
    if self.state.tasks == tasks {
      return;
    }
    self.replace(
      TodoState {
        tasks,
        ..(*self.state).clone()
      },
      Change::Tasks
    );
  }

  pub fn set_input(
    &mut self,
    input: String
  ) {
    if self.state.input == input {
      return;
    }
    self.replace(
      TodoState {
        input,
        ..(*self.state).clone()
      },
      Change::Input
    );
  }

  pub fn set_loaded(
    &mut self,
    loaded: bool
  ) {
    if self.state.loaded == loaded {
      return;
    }
    self.replace(
      TodoState {
        loaded,
        ..(*self.state).clone()
      },
      Change::Loaded
    );
  }

  pub fn set_filter(
    &mut self,
    filter: Filter
  ) {
    if self.state.filter == filter {
      return;
    }
    self.replace(
      TodoState {
        filter,
        ..(*self.state).clone()
      },
      Change::Filter
    );
  }

  fn replace(
    &mut self,
    next: TodoState,
    change: Change
  ) {
    self.state = Rc::new(next);
    trace!(
      ?change,
      observers = self.observers.len(),
      "state replaced"
    );
    for (_, observer) in &self.observers {
      observer(&self.state, change);
    }
  }
}

impl Default for StateStore {
  fn default() -> Self {
    Self::new(TodoState::default())
  }
}
