use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Relative URLs and http(s)/mailto links; anything else (`javascript:`,
/// `data:`, `vbscript:`) is replaced with `#`
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore leading whitespace/control chars and tabs/newlines inside the scheme
    let cleaned: String = url
        .trim_start_matches(|c: char| c.is_whitespace() || c.is_control())
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => {
            SAFE_SCHEMES.contains(&cleaned[..i].to_ascii_lowercase().as_str())
        }
        _ => true,
    }
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("#") }
}

/// Render markdown to HTML for assistant replies and education articles.
///
/// Raw HTML in the source is escaped, never passed through, and link or
/// image targets with a script-capable scheme are neutralized: assistant
/// output is untrusted.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Link { link_type, dest_url: sanitize_url(dest_url), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Image { link_type, dest_url: sanitize_url(dest_url), title, id })
        }
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
