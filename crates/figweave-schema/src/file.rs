//! File-level types.
//!
//! The `/v1/files/:key` payload: a `document` root whose children are the
//! pages (CANVAS nodes), each holding the top-level frames.

use crate::node::{Node, NodeKind};
use serde::Deserialize;

/// A fetched Figma file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct File {
    #[serde(default)]
    pub name: String,
    pub document: Node,
}

/// A frame-like node directly under a page, eligible as a render root.
#[derive(Debug, Clone, Copy)]
pub struct TopFrame<'doc> {
    pub page: &'doc str,
    pub id: &'doc str,
    pub name: &'doc str,
    pub node: &'doc Node,
}

impl File {
    /// List every frame-like node directly under each page, in document
    /// order. The caller picks one of these as the render root (by name,
    /// or the first by default).
    pub fn top_frames(&self) -> Vec<TopFrame<'_>> {
        let mut frames = Vec::new();
        for page in &self.document.children {
            for node in &page.children {
                if matches!(
                    node.kind,
                    NodeKind::Frame | NodeKind::Group | NodeKind::Component | NodeKind::Instance
                ) {
                    frames.push(TopFrame {
                        page: &page.name,
                        id: &node.id,
                        name: &node.name,
                        node,
                    });
                }
            }
        }
        frames
    }
}
