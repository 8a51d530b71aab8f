use wikiforge::{render, render_with_options, NullResolver, Options};

const PREFIX: &str = "<div class=\"wiki-content\"><p>";
const SUFFIX: &str = "</p></div>";

async fn wrapped(input: &str) -> String {
    render(input, &NullResolver).await
}

#[tokio::test]
async fn every_input_gets_the_container_contract() {
    for input in [
        "",
        "plain text",
        "= heading only",
        "* list\n** nested\n",
        "''unterminated",
        "{{Missing}}",
        "{{broken",
        "a\n\nb\n\nc",
    ] {
        let html = wrapped(input).await;
        assert!(html.starts_with(PREFIX), "input {input:?} -> {html}");
        assert!(html.ends_with(SUFFIX), "input {input:?} -> {html}");
    }
}

#[tokio::test]
async fn empty_input_is_an_empty_paragraph() {
    assert_eq!(wrapped("").await, "<div class=\"wiki-content\"><p></p></div>");
}

#[tokio::test]
async fn blank_lines_split_paragraphs() {
    let options = Options {
        wrap_in_container: false,
        ..Options::default()
    };
    let html = render_with_options("first\n\nsecond", &NullResolver, &options).await;
    assert_eq!(html, "<p>first</p>\n<p>second</p>");
}

#[tokio::test]
async fn single_newline_is_a_soft_break() {
    let options = Options {
        wrap_in_container: false,
        ..Options::default()
    };
    let html = render_with_options("line one\nline two", &NullResolver, &options).await;
    assert_eq!(html, "<p>line one\nline two</p>");
}

#[tokio::test]
async fn full_document_renders_every_construct() {
    let input = "= Title =\nIntro with ''emphasis'' and '''bold'''.\n\n\
                 == Section ==\n* one\n* two\n** deep\n";
    let options = Options {
        wrap_in_container: false,
        ..Options::default()
    };
    let html = render_with_options(input, &NullResolver, &options).await;
    assert_eq!(
        html,
        "<p><h1>Title </h1>\nIntro with <i>emphasis</i> and <strong>bold</strong>.</p>\n\
         <p><h2>Section </h2>\n\
         <ul><li>one</li><li>two<ul><li>deep</li></ul></li></ul></p>"
    );
}

#[tokio::test]
async fn mismatched_heading_runs_are_taken_at_face_value() {
    let options = Options {
        wrap_in_container: false,
        ..Options::default()
    };
    let html = render_with_options("== text =", &NullResolver, &options).await;
    assert_eq!(html, "<p><h2>text </h1></p>");
}

#[tokio::test]
async fn heading_runs_clamp_to_h6() {
    let options = Options {
        wrap_in_container: false,
        ..Options::default()
    };
    let html = render_with_options("======== big ========", &NullResolver, &options).await;
    assert_eq!(html, "<p><h6>big </h6></p>");
}
