//! HTML generator.
//!
//! Drives a pre-order walk of the node tree, assigning each surviving
//! node a class name, computing its declaration set, and building the
//! markup in lockstep. Rules accumulate on the context as a side channel
//! in first-visit order.

use crate::css;
use crate::style::compute_style;
use crate::RenderContext;
use figweave_schema::Node;

/// Generate the markup for a tree, pushing one rule per surviving node
/// onto the context.
pub fn generate(root: &Node, ctx: &mut RenderContext) -> String {
    visit(root, None, ctx).unwrap_or_default()
}

/// Render one node. Hidden nodes contribute nothing — no class, no rule,
/// no descent into the subtree.
fn visit(node: &Node, parent: Option<&Node>, ctx: &mut RenderContext) -> Option<String> {
    if !node.visible {
        return None;
    }

    let class = ctx.assign_class();
    let declarations = compute_style(node, parent);
    ctx.rules.push(css::rule(&class, &declarations));

    // TEXT nodes are leaves; their characters become escaped content.
    if node.is_text() {
        let text = escape_text(node.characters.as_deref().unwrap_or(""));
        return Some(format!("<p class=\"{class}\">{text}</p>"));
    }

    let children: Vec<String> = node
        .children
        .iter()
        .filter_map(|child| visit(child, Some(node), ctx))
        .collect();
    Some(format!(
        "<div class=\"{class}\">{}</div>",
        children.join("\n")
    ))
}

/// Only `<` and `>` are escaped; no other entities are treated specially.
fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
