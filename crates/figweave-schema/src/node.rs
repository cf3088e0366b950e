//! Design node types.
//!
//! Mirrors the subset of Figma's node document the generator reads:
//! geometry, paints, effects, auto-layout attributes, and text styling.
//! Field names follow the wire format (`camelCase`), kinds follow the
//! API's `SCREAMING_SNAKE_CASE` discriminators.

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn default_alpha() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// One element of the document tree: a frame, group, shape, or text run.
///
/// `absoluteBoundingBox` is expressed in the global coordinate space shared
/// by every node in one tree, so a child's offset inside its parent is the
/// plain coordinate difference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    /// Hidden nodes (and their subtrees) produce no output at all.
    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default)]
    pub children: Vec<Node>,

    pub absolute_bounding_box: Option<Rect>,

    #[serde(default)]
    pub fills: Vec<Paint>,

    #[serde(default)]
    pub strokes: Vec<Paint>,

    pub stroke_weight: Option<f64>,

    pub corner_radius: Option<f64>,

    /// Per-corner radii in TL, TR, BR, BL order; preferred over
    /// `cornerRadius` when present.
    pub rectangle_corner_radii: Option<Vec<f64>>,

    #[serde(default)]
    pub effects: Vec<Effect>,

    // Auto-layout container attributes
    #[serde(default)]
    pub layout_mode: LayoutMode,
    pub item_spacing: Option<f64>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub primary_axis_align_items: Option<AxisAlign>,
    pub counter_axis_align_items: Option<AxisAlign>,

    // Attributes of a child inside an auto-layout parent
    pub layout_grow: Option<f64>,
    pub layout_align: Option<LayoutAlign>,

    // TEXT-only attributes
    pub characters: Option<String>,
    pub style: Option<TypeStyle>,
    pub text_align_horizontal: Option<TextAlign>,
}

impl Node {
    /// TEXT nodes are leaves by contract; the visitor never recurses into
    /// their children.
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Whether this node lays out its children with auto-layout
    /// (flow/flex semantics) rather than absolute coordinates.
    pub fn is_auto_layout(&self) -> bool {
        matches!(self.layout_mode, LayoutMode::Horizontal | LayoutMode::Vertical)
    }
}

/// The node discriminator. Kinds the generator has no special handling for
/// fall into `Other` and render as plain containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    RegularPolygon,
    BooleanOperation,
    Slice,
    #[default]
    #[serde(other)]
    Other,
}

/// Auto-layout direction. `None` means the node positions children by
/// absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Axis alignment of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    #[serde(other)]
    Unsupported,
}

/// Cross-axis self-alignment of a child inside an auto-layout parent.
/// `Inherit` (and anything unrecognized) leaves the container default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlign {
    Min,
    Center,
    Max,
    Stretch,
    Inherit,
    #[serde(other)]
    Unsupported,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Unsupported,
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Absolute position and size in the tree's shared coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D offset (used by shadow effects).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Paints
// ---------------------------------------------------------------------------

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,

    #[serde(default = "default_true")]
    pub visible: bool,

    /// Paint color for `Solid`; gradient paints carry stops instead.
    pub color: Option<Color>,

    /// Paint-level opacity, applied as the alpha of a solid color.
    pub opacity: Option<f64>,

    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
}

/// Paint discriminator. Only `Solid` and `GradientLinear` are mapped to
/// CSS; every other kind is silently ignored (explicit fidelity non-goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Unsupported,
}

/// An RGBA color with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

/// One gradient stop; `position` is a unit-interval offset along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    #[serde(default)]
    pub position: f64,
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// A visual effect attached to a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,

    #[serde(default = "default_true")]
    pub visible: bool,

    pub color: Option<Color>,
    pub offset: Option<Vector>,
    pub radius: Option<f64>,
}

/// Effect discriminator; only `DropShadow` is mapped to CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unsupported,
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// Typography attributes of a TEXT node.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_decoration: Option<TextDecoration>,
    pub text_case: Option<TextCase>,
}

/// Text decoration; only `Underline` is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    Underline,
    Strikethrough,
    #[serde(other)]
    Unsupported,
}

/// Text case transformation; only `Upper` is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // Defaults and defensive deserialization
    // =========================================================================

    #[test]
    fn test_minimal_node() {
        let n = node(r#"{"type": "FRAME"}"#);
        assert_eq!(n.kind, NodeKind::Frame);
        assert!(n.visible);
        assert!(n.children.is_empty());
        assert_eq!(n.absolute_bounding_box, None);
        assert_eq!(n.layout_mode, LayoutMode::None);
    }

    #[test]
    fn test_visible_false() {
        let n = node(r#"{"type": "GROUP", "visible": false}"#);
        assert!(!n.visible);
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let n = node(r#"{"type": "WASHING_MACHINE"}"#);
        assert_eq!(n.kind, NodeKind::Other);
    }

    #[test]
    fn test_missing_kind_is_other() {
        let n = node(r#"{"name": "untyped"}"#);
        assert_eq!(n.kind, NodeKind::Other);
    }

    #[test]
    fn test_bounding_box() {
        let n = node(
            r#"{"type": "RECTANGLE",
                "absoluteBoundingBox": {"x": 10.0, "y": -4.5, "width": 120.0, "height": 32.0}}"#,
        );
        let bb = n.absolute_bounding_box.unwrap();
        assert_eq!(bb.x, 10.0);
        assert_eq!(bb.y, -4.5);
        assert_eq!(bb.width, 120.0);
        assert_eq!(bb.height, 32.0);
    }

    // =========================================================================
    // Paints and effects
    // =========================================================================

    #[test]
    fn test_solid_paint() {
        let n = node(
            r#"{"type": "FRAME",
                "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}, "opacity": 0.5}]}"#,
        );
        let paint = &n.fills[0];
        assert_eq!(paint.kind, PaintKind::Solid);
        assert!(paint.visible);
        assert_eq!(paint.opacity, Some(0.5));
        // Color alpha defaults to 1 when the wire format omits it
        assert_eq!(paint.color.unwrap().a, 1.0);
    }

    #[test]
    fn test_unknown_paint_kind() {
        let n = node(r#"{"type": "FRAME", "fills": [{"type": "EMOJI"}]}"#);
        assert_eq!(n.fills[0].kind, PaintKind::Unsupported);
    }

    #[test]
    fn test_gradient_paint() {
        let n = node(
            r#"{"type": "FRAME",
                "fills": [{"type": "GRADIENT_LINEAR", "gradientStops": [
                    {"color": {"r": 0, "g": 0, "b": 0, "a": 1}, "position": 0},
                    {"color": {"r": 1, "g": 1, "b": 1, "a": 0.5}, "position": 1}
                ]}]}"#,
        );
        let paint = &n.fills[0];
        assert_eq!(paint.kind, PaintKind::GradientLinear);
        assert_eq!(paint.gradient_stops.len(), 2);
        assert_eq!(paint.gradient_stops[1].position, 1.0);
    }

    #[test]
    fn test_drop_shadow_effect() {
        let n = node(
            r#"{"type": "FRAME",
                "effects": [{"type": "DROP_SHADOW",
                             "color": {"r": 0, "g": 0, "b": 0, "a": 0.25},
                             "offset": {"x": 0, "y": 4}, "radius": 8}]}"#,
        );
        let fx = &n.effects[0];
        assert_eq!(fx.kind, EffectKind::DropShadow);
        assert_eq!(fx.offset.unwrap().y, 4.0);
        assert_eq!(fx.radius, Some(8.0));
    }

    // =========================================================================
    // Auto-layout and text
    // =========================================================================

    #[test]
    fn test_auto_layout_container() {
        let n = node(
            r#"{"type": "FRAME", "layoutMode": "VERTICAL", "itemSpacing": 8,
                "paddingLeft": 16, "paddingRight": 16,
                "primaryAxisAlignItems": "SPACE_BETWEEN",
                "counterAxisAlignItems": "CENTER"}"#,
        );
        assert!(n.is_auto_layout());
        assert_eq!(n.item_spacing, Some(8.0));
        assert_eq!(n.primary_axis_align_items, Some(AxisAlign::SpaceBetween));
        assert_eq!(n.counter_axis_align_items, Some(AxisAlign::Center));
    }

    #[test]
    fn test_layout_mode_none_is_not_auto() {
        let n = node(r#"{"type": "FRAME", "layoutMode": "NONE"}"#);
        assert!(!n.is_auto_layout());
    }

    #[test]
    fn test_text_node() {
        let n = node(
            r#"{"type": "TEXT", "characters": "Sign in",
                "textAlignHorizontal": "CENTER",
                "style": {"fontFamily": "Inter", "fontSize": 16, "fontWeight": 600,
                          "lineHeightPx": 19.36, "textCase": "UPPER",
                          "textDecoration": "UNDERLINE"}}"#,
        );
        assert!(n.is_text());
        assert_eq!(n.characters.as_deref(), Some("Sign in"));
        assert_eq!(n.text_align_horizontal, Some(TextAlign::Center));
        let style = n.style.unwrap();
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.font_weight, Some(600.0));
        assert_eq!(style.text_case, Some(TextCase::Upper));
        assert_eq!(style.text_decoration, Some(TextDecoration::Underline));
    }

    #[test]
    fn test_layout_align_inherit() {
        let n = node(r#"{"type": "TEXT", "layoutAlign": "INHERIT", "layoutGrow": 1}"#);
        assert_eq!(n.layout_align, Some(LayoutAlign::Inherit));
        assert_eq!(n.layout_grow, Some(1.0));
    }

    #[test]
    fn test_nested_children() {
        let n = node(
            r#"{"type": "FRAME", "children": [
                {"type": "GROUP", "children": [{"type": "TEXT", "characters": "hi"}]}
            ]}"#,
        );
        assert_eq!(n.children.len(), 1);
        assert_eq!(n.children[0].children[0].kind, NodeKind::Text);
    }
}
