use serde::{
  Deserialize,
  Serialize
};

/// Millisecond creation timestamp, unique
/// within one list.
pub type TaskId = u64;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  pub fn new(
    id: TaskId,
    text: String
  ) -> Self {
    Self {
      id,
      text,
      completed: false
    }
  }
}

/// Ordered task sequence. Every mutation
/// hands back a new list and leaves `self`
/// untouched.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Task> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[Task] {
    &self.0
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .0
      .iter()
      .find(|task| task.id == id)
  }

  pub fn pending_count(&self) -> usize {
    self
      .0
      .iter()
      .filter(|task| !task.completed)
      .count()
  }

  pub fn completed_count(
    &self
  ) -> usize {
    self
      .0
      .iter()
      .filter(|task| task.completed)
      .count()
  }

  /// Picks an id for a task created at
  /// `now_ms`. Falls back to one past the
  /// largest existing id when the clock
  /// has not moved past it.
  pub fn next_id(
    &self,
    now_ms: u64
  ) -> TaskId {
    match self
      .0
      .iter()
      .map(|task| task.id)
      .max()
    {
      | Some(max) if now_ms <= max => {
        max.saturating_add(1)
      }
      | _ => now_ms
    }
  }

  pub fn with_task(
    &self,
    task: Task
  ) -> Self {
    let mut next =
      Vec::with_capacity(self.len() + 1);
    next.extend(self.0.iter().cloned());
    next.push(task);
    Self(next)
  }

  /// `None` when no task carries `id`.
  pub fn toggled(
    &self,
    id: TaskId
  ) -> Option<Self> {
    self.get(id)?;
    Some(Self(
      self
        .0
        .iter()
        .map(|task| {
          if task.id == id {
            Task {
              completed: !task
                .completed,
              ..task.clone()
            }
          } else {
            task.clone()
          }
        })
        .collect()
    ))
  }

  /// `None` when no task carries `id`.
  pub fn without(
    &self,
    id: TaskId
  ) -> Option<Self> {
    self.get(id)?;
    Some(Self(
      self
        .0
        .iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect()
    ))
  }
}

impl From<Vec<Task>> for TaskList {
  fn from(tasks: Vec<Task>) -> Self {
    Self(tasks)
  }
}

impl<'a> IntoIterator for &'a TaskList {
  type IntoIter =
    std::slice::Iter<'a, Task>;
  type Item = &'a Task;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
