//! Task list state, filtering and
//! key-value persistence, independent of
//! the page that renders it.

pub mod config;
pub mod controller;
pub mod datastore;
pub mod datetime;
pub mod filter;
pub mod render;
pub mod store;
pub mod task;

pub use config::Config;
pub use controller::Controller;
pub use datastore::{
  HydrateOutcome,
  KeyValueStore,
  MemoryStore
};
pub use datetime::{
  Clock,
  ManualClock,
  SystemClock
};
pub use filter::Filter;
pub use store::{
  Change,
  SubscriptionId,
  TodoState
};
pub use task::{
  Task,
  TaskId,
  TaskList
};
