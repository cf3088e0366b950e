//! Figweave Schema
//!
//! Typed model of a Figma document tree, deserialized from the REST API's
//! `/v1/files/:key` JSON. Every field the generator consumes is optional or
//! defaulted: an absent or unrecognized attribute becomes `None`/empty and
//! the downstream style mapping simply emits nothing for it.
//!
//! Unknown node kinds, paint kinds, and effect kinds land in explicit
//! catch-all variants so unsupported-attribute handling stays an
//! exhaustively-matched default arm rather than a parse failure.

pub mod file;
pub mod node;

pub use file::{File, TopFrame};
pub use node::{
    AxisAlign, Color, ColorStop, Effect, EffectKind, LayoutAlign, LayoutMode, Node, NodeKind,
    Paint, PaintKind, Rect, TextAlign, TextCase, TextDecoration, TypeStyle, Vector,
};
