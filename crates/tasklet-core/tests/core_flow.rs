use std::rc::Rc;

use anyhow::anyhow;
use tasklet_core::datastore::KeyValueStore;
use tasklet_core::{
  Config,
  Controller,
  Filter,
  HydrateOutcome,
  ManualClock,
  MemoryStore,
  TaskList
};

fn texts(ctl: &Controller) -> Vec<String> {
  ctl
    .filtered_tasks()
    .into_iter()
    .map(|task| task.text)
    .collect()
}

fn id_of(
  ctl: &Controller,
  text: &str
) -> u64 {
  ctl
    .state()
    .tasks
    .iter()
    .find(|task| task.text == text)
    .map(|task| task.id)
    .expect("task present")
}

fn activated(
  storage: Rc<MemoryStore>,
  clock: Rc<ManualClock>
) -> Controller {
  let mut ctl = Controller::new(
    &Config::default(),
    storage,
    clock
  );
  ctl.activate().expect("activate");
  ctl
}

#[test]
fn milk_and_dog_walkthrough() {
  let storage = Rc::new(MemoryStore::new());
  let clock =
    Rc::new(ManualClock::new(1_700_000_000_000));
  let mut ctl =
    activated(storage.clone(), clock.clone());

  ctl.add_task("Buy milk").expect("added");
  clock.advance(250);
  ctl.add_task("Walk dog").expect("added");
  assert!(
    ctl.toggle_completed(id_of(&ctl, "Buy milk"))
  );

  ctl.set_filter(Filter::Active);
  assert_eq!(texts(&ctl), vec!["Walk dog"]);

  ctl.set_filter(Filter::Completed);
  assert_eq!(texts(&ctl), vec!["Buy milk"]);

  assert!(
    ctl.delete_task(id_of(&ctl, "Walk dog"))
  );
  ctl.set_filter(Filter::All);
  let visible = ctl.filtered_tasks();
  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].text, "Buy milk");
  assert!(visible[0].completed);
}

#[test]
fn adds_keep_call_order_and_skip_blanks() {
  let clock = Rc::new(ManualClock::new(5));
  let mut ctl = activated(
    Rc::new(MemoryStore::new()),
    clock.clone()
  );

  let inputs =
    ["first", "", "second", "   ", "third"];
  let accepted = inputs
    .iter()
    .filter_map(|text| ctl.add_task(text))
    .count();

  assert_eq!(accepted, 3);
  assert_eq!(
    texts(&ctl),
    vec!["first", "second", "third"]
  );
}

#[test]
fn same_millisecond_adds_get_distinct_ids() {
  let mut ctl = activated(
    Rc::new(MemoryStore::new()),
    Rc::new(ManualClock::new(42))
  );
  let a = ctl.add_task("a").expect("a");
  let b = ctl.add_task("b").expect("b");
  let c = ctl.add_task("c").expect("c");
  assert_eq!((a, b, c), (42, 43, 44));
}

#[test]
fn unknown_ids_change_nothing() {
  let storage = Rc::new(MemoryStore::new());
  let mut ctl = activated(
    storage.clone(),
    Rc::new(ManualClock::new(1))
  );
  ctl.add_task("only");
  let before = ctl.state().tasks.clone();
  let writes = storage.writes();

  assert!(!ctl.toggle_completed(999));
  assert!(!ctl.delete_task(999));

  assert_eq!(ctl.state().tasks, before);
  assert_eq!(storage.writes(), writes);
}

#[test]
fn every_list_change_writes_one_snapshot() {
  let storage = Rc::new(MemoryStore::new());
  let mut ctl = activated(
    storage.clone(),
    Rc::new(ManualClock::new(1))
  );
  let after_load = storage.writes();

  let id = ctl.add_task("x").expect("added");
  assert_eq!(storage.writes(), after_load + 1);

  ctl.set_filter(Filter::Completed);
  ctl.set_input("draft".to_string());
  assert_eq!(storage.writes(), after_load + 1);

  ctl.toggle_completed(id);
  ctl.delete_task(id);
  assert_eq!(storage.writes(), after_load + 3);
  assert_eq!(
    storage.raw("allofthem").as_deref(),
    Some("[]")
  );
}

#[test]
fn restart_restores_the_last_list() {
  let storage = Rc::new(MemoryStore::new());
  let clock = Rc::new(ManualClock::new(10));

  let before = {
    let mut ctl =
      activated(storage.clone(), clock.clone());
    ctl.add_task("one");
    clock.advance(1);
    let two = ctl.add_task("two").expect("two");
    clock.advance(1);
    ctl.add_task("three");
    ctl.toggle_completed(two);
    ctl.delete_task(id_of(&ctl, "one"));
    ctl.state().tasks.clone()
  };

  let mut fresh = Controller::new(
    &Config::default(),
    storage.clone(),
    clock
  );
  assert_eq!(
    fresh.activate().expect("activate"),
    HydrateOutcome::Restored(2)
  );
  assert_eq!(fresh.state().tasks, before);
  assert_eq!(
    serde_json::from_str::<TaskList>(
      &storage
        .raw("allofthem")
        .expect("stored")
    )
    .expect("parse"),
    before
  );
}

#[test]
fn malformed_storage_starts_empty_and_keeps_a_copy()
 {
  let storage = Rc::new(
    MemoryStore::with_entry("allofthem", "not json")
  );
  let mut ctl = Controller::new(
    &Config::default(),
    storage.clone(),
    Rc::new(ManualClock::new(1))
  );
  assert_eq!(
    ctl.activate().expect("activate"),
    HydrateOutcome::Malformed
  );
  assert!(ctl.state().tasks.is_empty());
  assert_eq!(
    storage.raw("allofthem.corrupt").as_deref(),
    Some("not json")
  );
  assert_eq!(
    storage.raw("allofthem").as_deref(),
    Some("[]")
  );
}

struct UnreadableStore {
  inner: MemoryStore
}

impl KeyValueStore for UnreadableStore {
  fn get(
    &self,
    _key: &str
  ) -> anyhow::Result<Option<String>> {
    Err(anyhow!("storage access denied"))
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.inner.set(key, value)
  }
}

#[test]
fn read_failure_keeps_writes_closed() {
  let storage = Rc::new(UnreadableStore {
    inner: MemoryStore::new()
  });
  let mut ctl = Controller::new(
    &Config::default(),
    storage.clone(),
    Rc::new(ManualClock::new(1))
  );

  let err = ctl.activate().unwrap_err();
  assert!(
    format!("{err:#}").contains("access denied")
  );
  assert!(!ctl.state().loaded);

  ctl.add_task("unsaved");
  assert_eq!(storage.inner.writes(), 0);
}
