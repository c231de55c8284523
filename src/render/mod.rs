//! Section rendering: markup conversion, search highlighting and the display document shell.

pub(crate) mod highlight;
pub(crate) mod markup;

pub use highlight::highlight;
pub use markup::render_body;

use markup::escape_html;

const STYLESHEET: &str = "\
body { font-family: sans-serif; line-height: 1.6; color: #2c3e50; margin: 20px; }
h1 { border-bottom: 2px solid #3498db; padding-bottom: 10px; }
h2 { border-bottom: 1px solid #bdc3c7; padding-bottom: 5px; }
code { background: #f8f9fa; padding: 2px 4px; border-radius: 3px; font-family: monospace; }
pre { background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 5px; padding: 15px; overflow-x: auto; }
blockquote { border-left: 4px solid #3498db; margin: 10px 0; padding: 10px 15px; background: #f8f9fa; font-style: italic; }
.math { font-style: italic; color: #8e44ad; }
.math-block { display: block; text-align: center; font-style: italic; margin: 10px 0; padding: 10px; background: #f0f8ff; }
mark { background: #fff3a3; }
";

/// Wrap a rendered fragment in a minimal standalone HTML document.
pub fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        STYLESHEET, fragment
    )
}

/// Finish a rendered fragment for display: highlight the active search term (if any) as the
/// last markup step, then add the document shell.
pub fn compose_page(fragment: &str, search_term: Option<&str>) -> String {
    match search_term.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => wrap_document(&highlight(fragment, term)),
        None => wrap_document(fragment),
    }
}

/// Render a raw section body straight to a display document.
pub fn render_section(raw_body: &str, search_term: Option<&str>) -> String {
    compose_page(&render_body(raw_body), search_term)
}

/// Display document for a key that resolves to nothing at all.
pub fn not_found_page(key: &str) -> String {
    wrap_document(&format!(
        "<h1>Section Not Found</h1>\n<p>The requested section '{}' could not be loaded.</p>",
        escape_html(key)
    ))
}
