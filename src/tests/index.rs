use maud::Markup;
use pretty_assertions::assert_eq;

use crate::content::ContentMap;
use crate::dom::{self, Fragment};
use crate::error::SiteError;
use crate::index::*;

fn article(path: &str, title: &str, published: &str) -> ArticleRecord {
    ArticleRecord {
        path: path.to_string(),
        title: title.to_string(),
        published: published.to_string(),
    }
}

fn listed_links(index: &Markup) -> Vec<(String, String)> {
    let index = dom::parse_document(&index.0);
    let ul = dom::find_first_by_tag("ul", [index.tree.root()]).expect("Expected list");
    ul.children()
        .filter_map(|li| dom::find_first_by_tag("a", [li]))
        .map(|a| {
            (
                dom::attribute(a, "href").unwrap_or_default().to_string(),
                dom::extract_text(a),
            )
        })
        .collect()
}

#[test]
fn test_extract_article_title_and_time() {
    let content = Fragment::parse(
        r#"<title>My Post</title><p><time datetime="2020-01-01">Jan 1</time> text</p>"#,
    );

    assert_eq!(
        article("post.html", "My Post", "2020-01-01"),
        extract_article("post.html", &content).unwrap()
    );
}

#[test]
fn test_extract_article_title_falls_back_to_heading() {
    let content = Fragment::parse(
        "<h1>Title</h1>\n<p><time datetime=\"2022-02-02\">Feb 2</time>\nBody text.</p>",
    );

    assert_eq!("Title", extract_article("hello.html", &content).unwrap().title);
}

#[test]
fn test_extract_article_without_title_is_untitled() {
    let content = Fragment::parse(r#"<p><time datetime="2019-05-05">May</time></p>"#);

    assert_eq!("", extract_article("a.html", &content).unwrap().title);
}

#[test]
fn test_extract_article_without_time_fails() {
    let content = Fragment::parse("<h1>Undated</h1><p>text</p>");

    match extract_article("undated.html", &content) {
        Err(SiteError::MissingTime { path }) => assert_eq!("undated.html", path),
        other => panic!("Expected missing time, got {:?}", other),
    }
}

#[test]
fn test_extract_article_with_empty_datetime_fails() {
    let content = Fragment::parse(r#"<p><time datetime="">someday</time></p>"#);

    assert!(extract_article("a.html", &content).is_err());
}

#[test]
fn test_extract_articles_from_content_map() {
    let mut content = ContentMap::new();
    content.insert(
        "b.html".to_string(),
        Fragment::parse(r#"<h1>B</h1><p><time datetime="2020-01-01">x</time></p>"#),
    );
    content.insert(
        "a.html".to_string(),
        Fragment::parse(r#"<h1>A</h1><p><time datetime="2021-01-01">x</time></p>"#),
    );

    assert_eq!(
        vec![
            article("a.html", "A", "2021-01-01"),
            article("b.html", "B", "2020-01-01"),
        ],
        extract_articles(&content).unwrap()
    );
}

#[test]
fn test_index_ordered_by_date() {
    let index = build_index_document(vec![
        article("a.html", "A", "2020-01-01"),
        article("b.html", "B", "2019-05-05"),
        article("c.html", "C", "2021-07-07"),
    ]);

    assert_eq!(
        vec![
            ("b.html".to_string(), "B".to_string()),
            ("a.html".to_string(), "A".to_string()),
            ("c.html".to_string(), "C".to_string()),
        ],
        listed_links(&index)
    );
}

#[test]
fn test_index_keeps_order_of_equal_dates() {
    let index = build_index_document(vec![
        article("z.html", "Z", "2020-01-01"),
        article("a.html", "A", "2020-01-01"),
        article("m.html", "M", "2019-01-01"),
    ]);

    let paths: Vec<String> = listed_links(&index).into_iter().map(|(path, _)| path).collect();
    assert_eq!(vec!["m.html", "z.html", "a.html"], paths);
}

#[test]
fn test_index_escapes_titles() {
    let index = build_index_document(vec![article("a.html", "Fish & <Chips>", "2020-01-01")]);

    assert_eq!(
        vec![("a.html".to_string(), "Fish & <Chips>".to_string())],
        listed_links(&index)
    );
    assert!(index.0.contains("Fish &amp; &lt;Chips&gt;"));
}

#[test]
fn test_index_is_minimal_document() {
    let index = build_index_document(vec![article("a.html", "A", "2020-01-01")]);

    assert_eq!(
        r#"<html><body><ul><li><a href="a.html">A</a></li></ul></body></html>"#,
        index.into_string()
    );
}

#[test]
fn test_empty_index() {
    let index = build_index_document(vec![]);

    assert!(listed_links(&index).is_empty());
}
