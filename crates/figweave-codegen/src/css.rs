//! CSS rule serializer.
//!
//! Pure formatting, no decisions: one declaration set becomes one rule
//! targeting the node's generated class.

use crate::style::Declarations;

/// Render `.class{key:value;key:value;}`. Entries with empty values are
/// dropped; property order follows the declaration set's own order.
pub fn rule(class: &str, declarations: &Declarations) -> String {
    let mut out = String::new();
    out.push('.');
    out.push_str(class);
    out.push('{');
    for (property, value) in declarations.entries() {
        if value.is_empty() {
            continue;
        }
        out.push_str(property.name());
        out.push(':');
        out.push_str(value);
        out.push(';');
    }
    out.push('}');
    out
}
