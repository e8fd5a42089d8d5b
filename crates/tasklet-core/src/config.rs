use std::collections::HashMap;

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  trace
};

use crate::filter::Filter;

pub const DEFAULT_STORAGE_KEY: &str =
  "allofthem";

/// taskrc-style `key = value` settings.
#[derive(Debug, Clone)]
pub struct Config {
  map: HashMap<String, String>
}

impl Default for Config {
  fn default() -> Self {
    let mut map = HashMap::new();
    map.insert(
      "storage.key".to_string(),
      DEFAULT_STORAGE_KEY.to_string()
    );
    map.insert(
      "input.reject_blank".to_string(),
      "on".to_string()
    );
    map.insert(
      "filter.default".to_string(),
      Filter::All.as_key().to_string()
    );
    Self { map }
  }
}

impl Config {
  /// Defaults overlaid with the settings in
  /// `text`.
  #[tracing::instrument(skip(text))]
  pub fn parse(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg = Self::default();

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if let Some((before, _)) =
        line.split_once('#')
      {
        line = before.trim();
      }

      if line.is_empty() {
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line {}: {}",
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      if key.is_empty() {
        return Err(anyhow!(
          "empty config key on line {}",
          line_num + 1
        ));
      }
      trace!(key = %key, value = %value, "loaded config key");
      cfg.map.insert(key, value);
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_bool(
    &self,
    key: &str
  ) -> Option<bool> {
    self
      .map
      .get(key)
      .map(|v| parse_bool(v))
  }

  pub fn storage_key(&self) -> String {
    self
      .get("storage.key")
      .filter(|key| !key.trim().is_empty())
      .unwrap_or_else(|| {
        DEFAULT_STORAGE_KEY.to_string()
      })
  }

  pub fn reject_blank(&self) -> bool {
    self
      .get_bool("input.reject_blank")
      .unwrap_or(true)
  }

  pub fn default_filter(
    &self
  ) -> anyhow::Result<Filter> {
    match self.get("filter.default") {
      | Some(raw) => raw
        .parse::<Filter>()
        .context(
          "invalid filter.default setting"
        ),
      | None => Ok(Filter::All)
    }
  }
}

fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}
