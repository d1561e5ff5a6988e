//! Intra-document `$ref` resolution.
//!
//! Pointers are `/`-separated paths like `#/defs/foo`, resolved by plain
//! key lookups against the schema document. The leading segment (`#`, or
//! whatever precedes the first `/`) is discarded. RFC 6901 escaping
//! (`~0`/`~1`) is deliberately not supported; schema authors targeting
//! this tool use plain keys.

use serde_json::Value;

/// Resolves a schema-relative pointer to the sub-schema it names.
///
/// Returns `None` if any path segment is absent or the walk steps into a
/// non-object. Callers treat `None` as an empty schema node, so a broken
/// reference degrades to a field with no discoverable type rather than an
/// error.
#[must_use]
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Option<&'a Value> {
    let mut node: &Value = root;
    for segment in pointer.split('/').skip(1) {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}
