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
use maud::{html, Markup};

use crate::index::ArticleRecord;

/// Renders the article list, one link per article in the given order
fn render_article_list(articles: &[ArticleRecord]) -> Markup {
    html! {
        ul {
            @for article in articles {
                li {
                    a href=(article.path) {
                        (article.title)
                    }
                }
            }
        }
    }
}

/// Renders the index page
pub fn render_index(articles: &[ArticleRecord]) -> Markup {
    html! {
        html {
            body {
                (render_article_list(articles))
            }
        }
    }
}
