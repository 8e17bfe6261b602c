use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders guide markdown to HTML.
#[component]
pub fn Markdown(source: String) -> Element {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(&source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    rsx!(div {
        class: "markdown",
        dangerous_inner_html: "{html_output}"
    })
}
