use crate::store::TodoState;
use crate::task::{
  Task,
  TaskList
};

pub const APP_TITLE: &str = "Task Manager";

pub const INPUT_PLACEHOLDER: &str =
  "What needs to be done?";

pub const EMPTY_STATE_MESSAGE: &str =
  "No tasks yet. Add one to get started!";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Summary {
  pub pending:   usize,
  pub completed: usize,
  pub total:     usize
}

impl Summary {
  pub fn of(tasks: &TaskList) -> Self {
    Self {
      pending:   tasks.pending_count(),
      completed: tasks.completed_count(),
      total:     tasks.len()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
  /// Nothing stored at all.
  Empty,
  /// Rows passing the current filter; may
  /// be empty when the filter hides all.
  Rows(Vec<Task>)
}

pub fn list_body(
  state: &TodoState
) -> ListBody {
  if state.tasks.is_empty() {
    ListBody::Empty
  } else {
    ListBody::Rows(
      state.filter.apply(&state.tasks)
    )
  }
}

pub fn pending_label(
  pending: usize
) -> String {
  let noun =
    if pending == 1 { "task" } else { "tasks" };
  format!("{pending} {noun} pending")
}

pub fn completion_footer(
  tasks: &TaskList
) -> Option<String> {
  if tasks.is_empty() {
    return None;
  }
  let summary = Summary::of(tasks);
  Some(format!(
    "{} of {} completed",
    summary.completed, summary.total
  ))
}

#[cfg(test)]
mod tests {
  use super::{
    ListBody,
    Summary,
    completion_footer,
    list_body,
    pending_label
  };
  use crate::filter::Filter;
  use crate::store::TodoState;
  use crate::task::{
    Task,
    TaskList
  };

  #[test]
  fn pending_label_pluralizes() {
    assert_eq!(
      pending_label(0),
      "0 tasks pending"
    );
    assert_eq!(
      pending_label(1),
      "1 task pending"
    );
    assert_eq!(
      pending_label(3),
      "3 tasks pending"
    );
  }

  #[test]
  fn footer_hidden_for_empty_list() {
    assert!(
      completion_footer(&TaskList::new())
        .is_none()
    );
    let list = TaskList::from(vec![
      Task::new(1, "a".to_string()),
      Task::new(2, "b".to_string()),
    ])
    .toggled(1)
    .unwrap();
    assert_eq!(
      completion_footer(&list).as_deref(),
      Some("1 of 2 completed")
    );
    assert_eq!(Summary::of(&list), Summary {
      pending:   1,
      completed: 1,
      total:     2
    });
  }

  #[test]
  fn empty_state_only_when_nothing_stored() {
    assert_eq!(
      list_body(&TodoState::default()),
      ListBody::Empty
    );

    let state = TodoState {
      tasks: TaskList::from(vec![
        Task::new(1, "a".to_string()),
      ]),
      filter: Filter::Completed,
      ..TodoState::default()
    };
    assert_eq!(
      list_body(&state),
      ListBody::Rows(vec![])
    );
  }
}
