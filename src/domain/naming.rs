// SPDX-License-Identifier: MPL-2.0
//! Default labels for new canvases.

/// Returns `base` if no existing label uses it, otherwise the first free
/// numbered variant (`"Untitled 2"`, `"Untitled 3"`, ...).
pub fn unique_label<'a>(base: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: Vec<&str> = existing.into_iter().collect();
    if !taken.contains(&base) {
        return base.to_string();
    }

    (2..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}
