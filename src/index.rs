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
use crate::content::ContentMap;
use crate::dom::{self, Fragment};
use crate::error::SiteError;
use crate::ui;

use maud::Markup;

/// Index entry for one article
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Output file name, used as link target
    pub path: String,
    pub title: String,
    /// Value of the `datetime` attribute of the article's `<time>` element
    pub published: String,
}

fn extract_title(content: &Fragment) -> String {
    dom::find_first_by_tag("title", content.nodes())
        .or_else(|| dom::find_first_by_tag("h1", content.nodes()))
        .map(dom::extract_text)
        .unwrap_or_default()
}

/// Builds the index entry for the article rendered to `path`.
///
/// The title comes from the first `<title>` element, falling back to the
/// first `<h1>`, and is empty if neither exists. A missing `<time>` element
/// or an empty `datetime` attribute is an error.
pub fn extract_article(path: &str, content: &Fragment) -> Result<ArticleRecord, SiteError> {
    let published = dom::find_first_by_tag("time", content.nodes())
        .and_then(|time| dom::attribute(time, "datetime"))
        .filter(|datetime| !datetime.is_empty())
        .ok_or_else(|| SiteError::MissingTime {
            path: path.to_string(),
        })?;

    Ok(ArticleRecord {
        path: path.to_string(),
        title: extract_title(content),
        published: published.to_string(),
    })
}

/// Builds the index entries of all articles in `content`
pub fn extract_articles(content: &ContentMap) -> Result<Vec<ArticleRecord>, SiteError> {
    content
        .iter()
        .map(|(path, fragment)| extract_article(path, fragment))
        .collect()
}

/// Builds the index document (`html > body > ul > li > a`) listing
/// `articles` ordered by publish date.
///
/// Dates are compared as strings, so they have to share one format
/// (ISO-8601). Articles with equal dates keep their relative order.
pub fn build_index_document(mut articles: Vec<ArticleRecord>) -> Markup {
    articles.sort_by(|a, b| a.published.cmp(&b.published));

    ui::render_index(&articles)
}
