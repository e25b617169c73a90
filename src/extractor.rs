use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{LocalName, ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::ParseError;

/// Parses raw page bytes into a DOM. Invalid UTF-8 is replaced, not rejected.
///
/// Scripting is off so `<noscript>` children are parsed as elements instead
/// of one raw-text node full of markup.
pub fn get_dom(html: &[u8]) -> Result<RcDom, ParseError> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut std::io::Cursor::new(html))?;
    Ok(dom)
}

/// Elements whose text content never reaches the reader. `<template>` needs no
/// entry: its contents live outside `children` in the rcdom tree.
pub fn is_hidden(local: &LocalName) -> bool {
    matches!(&**local, "script" | "style")
}

/// Collects text nodes in document order. Navigation, headers and other page
/// chrome are kept; only non-rendered elements and comments are skipped.
pub fn walk_html(handle: &Handle, out: &mut Vec<String>) {
    match &handle.data {
        NodeData::Text { contents } => {
            out.push(contents.borrow().to_string());
        }
        NodeData::Element { name, .. } => {
            if is_hidden(&name.local) {
                return;
            }
            for child in handle.children.borrow().iter() {
                walk_html(child, out);
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
        _ => {
            for child in handle.children.borrow().iter() {
                walk_html(child, out);
            }
        }
    }
}

/// All visible text of an html document, one text node per line, trimmed as a
/// whole. Lines are not individually normalized; see [`crate::cleaner`].
pub fn extract_text(html: &[u8]) -> Result<String, ParseError> {
    let dom = get_dom(html)?;
    let mut nodes = Vec::new();
    walk_html(&dom.document, &mut nodes);
    Ok(nodes.join("\n").trim().to_string())
}
