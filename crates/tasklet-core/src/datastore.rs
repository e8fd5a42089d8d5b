use std::cell::{
  Cell,
  RefCell
};
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Context;
use tracing::{
  debug,
  error,
  info
};

use crate::task::TaskList;

/// Flat string key-value storage the task
/// list is mirrored into.
pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RefCell<BTreeMap<String, String>>,
  writes:  Cell<usize>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(
    key: &str,
    value: &str
  ) -> Self {
    let store = Self::new();
    store
      .entries
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    store
  }

  /// Number of `set` calls seen so far.
  pub fn writes(&self) -> usize {
    self.writes.get()
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.raw(key))
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .entries
      .borrow_mut()
      .insert(
        key.to_string(),
        value.to_string()
      );
    self.writes.set(self.writes.get() + 1);
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateOutcome {
  Missing,
  Restored(usize),
  /// Stored value did not parse; a copy
  /// was kept under the backup key.
  Malformed
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hydrated {
  pub tasks:   TaskList,
  pub outcome: HydrateOutcome
}

pub struct Persistence {
  storage: Rc<dyn KeyValueStore>,
  key:     String
}

impl Persistence {
  pub fn new(
    storage: Rc<dyn KeyValueStore>,
    key: impl Into<String>
  ) -> Self {
    Self {
      storage,
      key: key.into()
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn backup_key(&self) -> String {
    format!("{}.corrupt", self.key)
  }

  #[tracing::instrument(skip(self), fields(key = %self.key))]
  pub fn hydrate(
    &self
  ) -> anyhow::Result<Hydrated> {
    let raw = self
      .storage
      .get(&self.key)
      .with_context(|| {
        format!(
          "failed reading stored tasks \
           under '{}'",
          self.key
        )
      })?;

    let Some(raw) =
      raw.filter(|raw| !raw.trim().is_empty())
    else {
      info!("no stored tasks; starting empty");
      return Ok(Hydrated {
        tasks:   TaskList::new(),
        outcome: HydrateOutcome::Missing
      });
    };

    match serde_json::from_str::<TaskList>(
      &raw
    ) {
      | Ok(tasks) => {
        info!(
          count = tasks.len(),
          "restored stored tasks"
        );
        let count = tasks.len();
        Ok(Hydrated {
          tasks,
          outcome: HydrateOutcome::Restored(
            count
          )
        })
      }
      | Err(err) => {
        error!(
          error = %err,
          backup = %self.backup_key(),
          "stored tasks are malformed; \
           starting empty"
        );
        self
          .storage
          .set(&self.backup_key(), &raw)
          .context(
            "failed backing up malformed \
             task list"
          )?;
        Ok(Hydrated {
          tasks:   TaskList::new(),
          outcome: HydrateOutcome::Malformed
        })
      }
    }
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
  pub fn persist(
    &self,
    tasks: &TaskList
  ) -> anyhow::Result<()> {
    let json = serde_json::to_string(tasks)
      .context(
        "failed serializing task list"
      )?;
    self
      .storage
      .set(&self.key, &json)
      .with_context(|| {
        format!(
          "failed writing tasks under \
           '{}'",
          self.key
        )
      })?;
    debug!(
      bytes = json.len(),
      "persisted task list"
    );
    Ok(())
  }
}
