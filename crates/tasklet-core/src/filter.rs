use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use tracing::trace;

use crate::task::{
  Task,
  TaskList
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Filter {
  #[default]
  All,
  Active,
  Completed
}

impl Filter {
  /// Display order of the filter buttons.
  pub const ALL: [Filter; 3] = [
    Filter::All,
    Filter::Active,
    Filter::Completed
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Filter::All => "all",
      | Filter::Active => "active",
      | Filter::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Filter::All => "All",
      | Filter::Active => "Active",
      | Filter::Completed => "Completed"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Filter::All => true,
      | Filter::Active => !task.completed,
      | Filter::Completed => task.completed
    }
  }

  pub fn apply(
    self,
    tasks: &TaskList
  ) -> Vec<Task> {
    let out: Vec<Task> = tasks
      .iter()
      .filter(|task| self.matches(task))
      .cloned()
      .collect();
    trace!(
      filter = self.as_key(),
      total = tasks.len(),
      visible = out.len(),
      "applied filter"
    );
    out
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for Filter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Ok(Filter::All),
      | "active" => Ok(Filter::Active),
      | "completed" => {
        Ok(Filter::Completed)
      }
      | other => Err(anyhow!(
        "unknown filter '{other}'; \
         expected all, active or \
         completed"
      ))
    }
  }
}
