use crate::parsers::html::PageDocument;

mod visible_text_tests {
    use super::*;

    fn doc(html: &str) -> PageDocument {
        PageDocument::parse(html, "https://themes.gohugo.io/themes/ananke/").unwrap()
    }

    #[test]
    fn test_blocks_become_lines() {
        let page = doc(
            "<html><head><title>T</title><style>.a { color: red }</style></head><body>\
             <div><h1>Ananke</h1><p>A  theme\n   for Hugo.</p>\
             <ul><li><strong>Author:</strong> Jane Doe</li><li>License: MIT</li></ul>\
             <script>var x = 1;</script></div></body></html>",
        );
        assert_eq!(
            page.visible_text(),
            "Ananke\nA theme for Hugo.\nAuthor: Jane Doe\nLicense: MIT"
        );
    }

    #[test]
    fn test_line_break_element() {
        let page = doc("<body>Line one<br>Line two</body>");
        assert_eq!(page.visible_text(), "Line one\nLine two");
    }

    #[test]
    fn test_hidden_and_noscript_skipped() {
        let page = doc("<body><div hidden>secret</div><noscript>enable js</noscript><p>shown</p></body>");
        assert_eq!(page.visible_text(), "shown");
    }

    #[test]
    fn test_table_cells_separated() {
        let page = doc("<body><table><tr><td>Author</td><td>Jane</td></tr></table></body>");
        assert_eq!(page.visible_text(), "Author Jane");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(doc("<html><body></body></html>").visible_text(), "");
    }
}

mod document_tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_an_error() {
        assert!(PageDocument::parse("<p>x</p>", "not a url").is_err());
    }

    #[test]
    fn test_anchors_resolved_against_page_url() {
        let page = PageDocument::parse(
            r#"<body><a href="../paper/"> Paper </a><a href="https://github.com/x/y">Source</a><a>No href</a></body>"#,
            "https://themes.gohugo.io/themes/ananke/",
        )
        .unwrap();

        let anchors = page.anchors();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].href.as_str(), "https://themes.gohugo.io/themes/paper/");
        assert_eq!(anchors[0].text, "Paper");
        assert_eq!(anchors[1].href.as_str(), "https://github.com/x/y");
    }

    #[test]
    fn test_first_paragraph() {
        let page = PageDocument::parse(
            "<body><div>intro</div><p>  First\n paragraph. </p><p>Second</p></body>",
            "https://example.com/",
        )
        .unwrap();
        assert_eq!(page.first_paragraph().as_deref(), Some("First paragraph."));
    }

    #[test]
    fn test_first_paragraph_absent_or_empty() {
        let none = PageDocument::parse("<body><div>no paragraphs</div></body>", "https://example.com/").unwrap();
        assert_eq!(none.first_paragraph(), None);

        let empty = PageDocument::parse("<body><p>  </p><p>later</p></body>", "https://example.com/").unwrap();
        assert_eq!(empty.first_paragraph(), None);
    }

    #[test]
    fn test_title() {
        let page = PageDocument::parse(
            "<html><head><title> Hugo Themes </title></head><body></body></html>",
            "https://example.com/",
        )
        .unwrap();
        assert_eq!(page.title().as_deref(), Some("Hugo Themes"));
    }
}
