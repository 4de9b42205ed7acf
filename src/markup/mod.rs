//! Markup renderer
//!
//! Converts a lightweight, AsciiDoc-flavoured markup into HTML fragments for
//! the carousel. Rendering is a pure function of the input text and never
//! fails: anything it does not recognise becomes an escaped paragraph.
//!
//! Supported:
//! - `= Title` through `====== Title` headings (`<h1>`..`<h6>`)
//! - paragraphs, `NOTE:`-style admonitions
//! - `*`/`-` bullet and `.` numbered lists
//! - `----` listing, `____` quote and `////` comment blocks
//! - `'''` rules, `image::src[alt]`
//! - inline `*strong*`, `_emphasis_`, `` `code` ``, `link:url[text]`

mod block;
mod inline;

pub use block::{parse_blocks, Block};
pub use inline::{escape_html, render_inline};

/// Render a whole document to an HTML fragment
pub fn render(source: &str) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let lines: Vec<&str> = source.lines().collect();
    block::blocks_to_html(&parse_blocks(&lines))
}
