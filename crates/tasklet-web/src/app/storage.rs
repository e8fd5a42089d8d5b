use anyhow::anyhow;
use tasklet_core::{
  Config,
  KeyValueStore
};
use wasm_bindgen::JsValue;

const EMBEDDED_CONFIG: &str =
  include_str!("../../tasklet.rc");

/// `window.localStorage`, looked up on
/// every call so a denied or missing store
/// surfaces as an error instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
      .ok_or_else(|| {
        anyhow!("no browser window")
      })?
      .local_storage()
      .map_err(js_error)?
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })
  }
}

impl KeyValueStore for BrowserStorage {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(key)
      .map_err(js_error)
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(js_error)
  }
}

/// Embedded `tasklet.rc` with any
/// `?rc.<key>=<value>` query overrides.
pub(crate) fn load_config() -> Config {
  let mut cfg =
    match Config::parse(EMBEDDED_CONFIG) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        tracing::error!(
          error = %error,
          "failed parsing embedded \
           tasklet.rc; using defaults"
        );
        Config::default()
      }
    };

  let search = web_sys::window()
    .and_then(|window| {
      window.location().search().ok()
    })
    .unwrap_or_default();
  let overrides = query_overrides(&search);
  if !overrides.is_empty() {
    tracing::debug!(
      count = overrides.len(),
      "applying query overrides"
    );
    cfg.apply_overrides(overrides);
  }
  cfg
}

fn query_overrides(
  search: &str
) -> Vec<(String, String)> {
  rc_pairs(search)
    .into_iter()
    .filter_map(|(key, value)| {
      Some((decode(key)?, decode(value)?))
    })
    .collect()
}

/// Raw `rc.*` pairs of a `?a=b&c=d` query,
/// still URI-encoded.
fn rc_pairs(
  search: &str
) -> Vec<(&str, &str)> {
  search
    .trim_start_matches('?')
    .split('&')
    .filter_map(|pair| pair.split_once('='))
    .filter(|(key, _)| {
      key.starts_with("rc.")
    })
    .collect()
}

fn decode(raw: &str) -> Option<String> {
  js_sys::decode_uri_component(
    &raw.replace('+', " ")
  )
  .ok()
  .map(String::from)
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!(
    "browser storage error: {value:?}"
  )
}

#[cfg(test)]
mod tests {
  use super::rc_pairs;

  #[test]
  fn keeps_only_rc_pairs_in_order() {
    assert_eq!(
      rc_pairs(
        "?rc.storage.key=mine&debug=1&rc.filter.default=active"
      ),
      vec![
        ("rc.storage.key", "mine"),
        ("rc.filter.default", "active")
      ]
    );
  }

  #[test]
  fn skips_pairs_without_a_value() {
    assert_eq!(
      rc_pairs("?rc.input.reject_blank&rc.x="),
      vec![("rc.x", "")]
    );
  }

  #[test]
  fn empty_query_yields_nothing() {
    assert!(rc_pairs("").is_empty());
    assert!(rc_pairs("?").is_empty());
  }
}
