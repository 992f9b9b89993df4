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
use crate::content;
use crate::error::SiteError;
use crate::index;
use crate::markdown::MarkdownParser;
use crate::template;

use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub static DEFAULT_ANCHOR: &str = "content";
pub static INDEX_FILE: &str = "index.html";

/// Where a site's inputs are read from and its pages are written to
#[derive(Clone, Debug)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Id of the template element receiving the article
    pub anchor_id: String,
}

impl SiteLayout {
    /// Standard layout below `root`: `content/`, `template/template.html`
    /// and `_out/`
    pub fn from_root(root: &Path) -> Self {
        SiteLayout {
            content_dir: root.join("content"),
            template_path: root.join("template").join("template.html"),
            output_dir: root.join("_out"),
            anchor_id: DEFAULT_ANCHOR.to_string(),
        }
    }

    pub fn with_anchor(mut self, anchor_id: impl Into<String>) -> Self {
        self.anchor_id = anchor_id.into();
        self
    }
}

/// What a finished build wrote
#[derive(Debug, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub index: PathBuf,
}

fn reset_output_dir(output_dir: &Path) -> anyhow::Result<()> {
    if output_dir.exists() {
        log::debug!("Removing previous output {}", output_dir.display());
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed removing {}", output_dir.display()))?;
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed creating {}", output_dir.display()))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed writing {}", path.display()))
}

/// Builds the whole site described by `layout`.
///
/// The output directory is deleted and recreated, then filled with one page
/// per markdown file and the index. Every article is checked for its publish
/// date, and no page may be named like the index, before anything is deleted
/// or written.
pub fn build_site(
    layout: &SiteLayout,
    parser: &mut dyn MarkdownParser,
) -> anyhow::Result<BuildSummary> {
    let template = template::load_template(&layout.template_path)?;

    log::info!("Reading content dir {}", layout.content_dir.display());
    let content = content::load_content(&layout.content_dir, parser)?;

    if content.contains_key(INDEX_FILE) {
        return Err(SiteError::ReservedName(INDEX_FILE.to_string()).into());
    }

    let articles = index::extract_articles(&content)?;

    reset_output_dir(&layout.output_dir)?;

    let pages = content.len();
    for (filename, fragment) in content {
        let mut page = template.clone();
        template::fill(&mut page, &layout.anchor_id, fragment)?;

        log::info!("Writing path {}", filename);
        write_file(&layout.output_dir.join(&filename), &page.html())?;
    }

    let index_path = layout.output_dir.join(INDEX_FILE);
    let index_page = index::build_index_document(articles);

    log::info!("Writing index at {}", INDEX_FILE);
    write_file(&index_path, &index_page.into_string())?;

    Ok(BuildSummary {
        pages,
        index: index_path,
    })
}
