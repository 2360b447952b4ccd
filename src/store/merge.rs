use super::Document;

/// Shallow merge: top-level fields of `patch` replace those of `base`.
/// The `id` field is never taken from the patch.
pub(super) fn shallow_merge(base: &Document, patch: Document) -> Document {
    let mut merged = base.clone();
    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        merged.insert(key, value);
    }
    merged
}
