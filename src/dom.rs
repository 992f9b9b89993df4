/*
 *  md-site-builder generate a static site from markdown files
 *  Copyright (C) 2022 Fionn Langhans
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 */
use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::error::SiteError;

/// A parsed HTML fragment: a sequence of sibling nodes without a document
/// around them.
///
/// The parser hangs the siblings below a synthetic `<html>` element, which
/// is never part of [`Fragment::nodes`].
#[derive(Clone)]
pub struct Fragment {
    html: Html,
}

impl Fragment {
    /// Parses `source` as a fragment in `<body>` context
    pub fn parse(source: &str) -> Self {
        Fragment {
            html: Html::parse_fragment(source),
        }
    }

    /// Returns the top-level nodes of the fragment in document order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, Node>> + '_ {
        let container = *self.html.root_element();
        container.children()
    }

    /// Returns the concatenated text of every node in the fragment
    #[cfg(test)]
    pub fn text(&self) -> String {
        extract_text(*self.html.root_element())
    }
}

/// Parses `source` as a complete HTML document
pub fn parse_document(source: &str) -> Html {
    Html::parse_document(source)
}

fn has_id(node: &NodeRef<'_, Node>, id: &str) -> bool {
    node.value()
        .as_element()
        .and_then(|element| element.attr("id"))
        .map_or(false, |value| value == id)
}

fn has_tag(node: &NodeRef<'_, Node>, tag: &str) -> bool {
    node.value()
        .as_element()
        .map_or(false, |element| element.name() == tag)
}

/// Finds the first element below `root` whose `id` attribute equals `id`.
///
/// Pre-order traversal in document order; `root` itself is not a candidate.
pub fn find_element_by_id<'a>(root: NodeRef<'a, Node>, id: &str) -> Option<NodeRef<'a, Node>> {
    root.descendants().skip(1).find(|node| has_id(node, id))
}

/// Like [`find_element_by_id`], but a missing element is an error
pub fn require_element_by_id<'a>(
    root: NodeRef<'a, Node>,
    id: &str,
) -> Result<NodeRef<'a, Node>, SiteError> {
    find_element_by_id(root, id).ok_or_else(|| SiteError::MissingElementId(id.to_string()))
}

/// Concatenates the character data of all text nodes below `node`
pub fn extract_text(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        if let Some(data) = descendant.value().as_text() {
            text.push_str(data);
        }
    }

    text
}

/// Returns the first element named `tag` across `roots`.
///
/// The roots are searched in order, each one depth-first including the root
/// node itself.
pub fn find_first_by_tag<'a, I>(tag: &str, roots: I) -> Option<NodeRef<'a, Node>>
where
    I: IntoIterator<Item = NodeRef<'a, Node>>,
{
    roots
        .into_iter()
        .flat_map(|root| root.descendants())
        .find(|node| has_tag(node, tag))
}

/// Returns the value of attribute `name` if `node` is an element carrying it
pub fn attribute<'a>(node: NodeRef<'a, Node>, name: &str) -> Option<&'a str> {
    node.value().as_element().and_then(|element| element.attr(name))
}
