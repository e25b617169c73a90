use deadline_checker::extractor::*;

#[test]
fn test_empty_input() {
    assert_eq!(extract_text(b"").unwrap(), "");
}

#[test]
fn test_plain_text_no_html() {
    assert_eq!(extract_text(b"Hello World").unwrap(), "Hello World");
}

#[test]
fn test_simple_html() {
    let html = b"<html><body><p>Deadline: 3/31/2024</p></body></html>";
    assert_eq!(extract_text(html).unwrap(), "Deadline: 3/31/2024");
}

#[test]
fn test_text_nodes_on_separate_lines() {
    let html = b"<div><p>Hello <span>World</span></p></div>";
    assert_eq!(extract_text(html).unwrap(), "Hello \nWorld");
}

#[test]
fn test_document_order() {
    let html = b"<ul><li>first</li><li>second</li></ul><p>third</p>";
    assert_eq!(extract_text(html).unwrap(), "first\nsecond\nthird");
}

#[test]
fn test_trims_whole_output() {
    let html = b"\n\n   <p>  padded  </p>   \n";
    assert_eq!(extract_text(html).unwrap(), "padded");
}

#[test]
fn test_skips_script_and_style() {
    let html = b"<p>Before</p><script>alert('evil')</script><style>body { color: red; }</style><p>After</p>";
    let text = extract_text(html).unwrap();
    assert!(!text.contains("alert"));
    assert!(!text.contains("color"));
    assert!(text.contains("Before"));
    assert!(text.contains("After"));
}

#[test]
fn test_skips_comments_and_templates() {
    let html = b"<p>Shown</p><!-- hidden note --><template><p>Later</p></template>";
    assert_eq!(extract_text(html).unwrap(), "Shown");
}

#[test]
fn test_keeps_navigation() {
    let html = br#"<nav class="navbar">Menu</nav><p>Content</p>"#;
    let text = extract_text(html).unwrap();
    assert!(text.contains("Menu"));
    assert!(text.contains("Content"));
}

#[test]
fn test_title_included() {
    let html = b"<html><head><title>Gather Grants</title></head><body>Body</body></html>";
    assert_eq!(extract_text(html).unwrap(), "Gather Grants\nBody");
}

#[test]
fn test_entities_decoded() {
    let html = b"<p>Apply&nbsp;by &lt;March&gt; &amp; April</p>";
    assert_eq!(extract_text(html).unwrap(), "Apply\u{a0}by <March> & April");
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let html = b"<p>Deadline \xff\xfe 3/31/2024</p>";
    let text = extract_text(html).unwrap();
    assert!(text.starts_with("Deadline"));
    assert!(text.ends_with("3/31/2024"));
}

#[test]
fn test_malformed_markup_is_tolerated() {
    let html = b"<div><p>Unclosed <b>bold<p>Next</div></span>";
    let text = extract_text(html).unwrap();
    assert!(text.contains("Unclosed"));
    assert!(text.contains("bold"));
    assert!(text.contains("Next"));
}

#[test]
fn test_noscript_markup_not_leaked() {
    let html = br#"<html><body><noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-X" height="0"></iframe></noscript><p>Deadline: 3/31/2024</p></body></html>"#;
    let text = extract_text(html).unwrap();
    assert!(!text.contains('<'), "markup leaked: {text:?}");
    assert!(!text.contains("googletagmanager"));
    assert_eq!(text, "Deadline: 3/31/2024");
}

#[test]
fn test_noscript_text_kept_without_tags() {
    let html = b"<body><noscript><p>Please <b>enable</b> JavaScript</p></noscript><p>Apply by 12/01/2025</p></body>";
    let text = extract_text(html).unwrap();
    assert!(!text.contains('<'));
    assert_eq!(text, "Please \nenable\n JavaScript\nApply by 12/01/2025");
}
