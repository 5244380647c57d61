use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let out = render("# Intro\n\nSome *emphasis* here.");
    assert!(out.contains("<h1>Intro</h1>"));
    assert!(out.contains("<em>emphasis</em>"));
}

#[test]
fn renders_tables() {
    let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>1</td>"));
}

#[test]
fn escapes_inline_html() {
    let out = render("hello <script>alert(1)</script>");
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;"));
}

#[test]
fn escapes_block_html() {
    let out = render("<div onclick=\"x()\">boom</div>\n");
    assert!(!out.contains("<div"));
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render(""), "");
}
