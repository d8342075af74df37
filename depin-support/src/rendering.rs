//! Text rendering utilities for diagnostics.
//!
//! Type names coming out of [`std::any::type_name`] are fully qualified and
//! noisy. These helpers turn them into something readable in panic messages,
//! `Debug` output and log fields.

/// Shortens a fully qualified type name for display.
///
/// Every path segment is reduced to its last component, including the ones
/// nested inside generic arguments.
///
/// ```
/// use depin_support::rendering::shorten_type_name;
///
/// let short = shorten_type_name("party::clowns::ClownManagerKey");
/// assert_eq!(short, "ClownManagerKey");
///
/// let short = shorten_type_name("alloc::sync::Arc<dyn party::clowns::ClownManager>");
/// assert_eq!(short, "Arc<dyn ClownManager>");
/// ```
pub fn shorten_type_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut chars = full_name.chars().peekable();
    let mut current_segment = String::new();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                current_segment.clear();
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '&' | '[' | ']' | ';' => {
                result.push_str(&current_segment);
                result.push(ch);
                current_segment.clear();
            }
            _ => current_segment.push(ch),
        }
    }

    result.push_str(&current_segment);
    result
}

/// Renders a set of type names as a sorted, shortened, brace-delimited list.
///
/// Sorting keeps the output stable regardless of hash map iteration order.
///
/// ```
/// use depin_support::rendering::render_key_list;
///
/// let rendered = render_key_list(&["party::HonkDeviceKey", "party::ClownManagerKey"]);
/// assert_eq!(rendered, "{ClownManagerKey, HonkDeviceKey}");
/// ```
pub fn render_key_list(names: &[impl AsRef<str>]) -> String {
    let mut short: Vec<String> = names
        .iter()
        .map(|name| shorten_type_name(name.as_ref()))
        .collect();
    short.sort();
    format!("{{{}}}", short.join(", "))
}
