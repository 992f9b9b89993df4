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
use crate::dom::{self, Fragment};

use anyhow::Context;
use ego_tree::{NodeMut, NodeRef};
use scraper::{Html, Node};
use std::{fs, path::Path};

/// Reads and parses the page template at `path`
pub fn load_template(path: &Path) -> anyhow::Result<Html> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed reading template {}", path.display()))?;

    Ok(dom::parse_document(&source))
}

/// Copies `source` and its subtree as the new last child of `parent`
fn adopt(parent: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    let mut copy = parent.append(source.value().clone());
    for child in source.children() {
        adopt(&mut copy, child);
    }
}

/// Appends the nodes of `content` as the last children of the element with
/// id `anchor_id`.
///
/// Not idempotent: filling the same document twice repeats the content, so
/// callers fill a fresh clone of the template per page. The fragment is
/// consumed, its nodes end up in `document` only.
pub fn fill(document: &mut Html, anchor_id: &str, content: Fragment) -> anyhow::Result<()> {
    let anchor = dom::require_element_by_id(document.tree.root(), anchor_id)?.id();
    let mut anchor = document
        .tree
        .get_mut(anchor)
        .context("Anchor element vanished from the template")?;

    for node in content.nodes() {
        adopt(&mut anchor, node);
    }

    Ok(())
}
