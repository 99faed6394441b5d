//! The generated configuration map and its merge rule

use serde_json::{Map, Value};

/// Mapping from setting id to its resolved default value.
///
/// Backed by an insertion-ordered JSON object so the written `config.json`
/// follows schema order.
pub type WidgetConfiguration = Map<String, Value>;

/// Merge `source` into `target`, key by key in source order.
///
/// Keys already present in `target` are overwritten (last write wins). The
/// merge is shallow: a nested object under a colliding key is replaced, not
/// combined.
pub fn merge_configuration(target: &mut WidgetConfiguration, source: WidgetConfiguration) {
    for (key, value) in source {
        target.insert(key, value);
    }
}
