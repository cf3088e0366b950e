//! Figweave Code Generator
//!
//! Turns one Figma node tree into two correlated artifacts: an HTML
//! fragment and an ordered list of CSS rules. Each visited node gets a
//! generated class name (`n1`, `n2`, …) in pre-order visit order; the
//! class is the join key between a markup fragment and its rule.
//!
//! ```text
//! Node tree → render() → RenderOutput { html, rules }
//! ```
//!
//! Rendering is infallible: absent or malformed design attributes yield
//! no declarations rather than errors, so a conversion either fully
//! succeeds or its caller fails before invoking it.

pub mod css;
pub mod html;
pub mod style;

use figweave_schema::Node;

/// The rendered output for one root node.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// The container/text tree rooted at the chosen node.
    pub html: String,
    /// One rule per surviving node, in visit order.
    pub rules: Vec<String>,
}

impl RenderOutput {
    /// The rules joined into one stylesheet text.
    pub fn stylesheet(&self) -> String {
        self.rules.join("\n")
    }
}

/// Shared state threaded through the tree walk: the class-name sequence
/// and the rules collected so far. Keeping the counter here (instead of
/// process-global state) makes each conversion independent.
#[derive(Default)]
pub struct RenderContext {
    next_class: usize,
    pub rules: Vec<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next class name. Monotonic within one context, never
    /// reused; allocation order is purely a function of traversal order.
    pub fn assign_class(&mut self) -> String {
        self.next_class += 1;
        format!("n{}", self.next_class)
    }
}

/// Render a node tree into HTML plus per-node CSS rules.
pub fn render(root: &Node) -> RenderOutput {
    let mut ctx = RenderContext::new();
    let html_output = html::generate(root, &mut ctx);
    RenderOutput {
        html: html_output,
        rules: ctx.rules,
    }
}
