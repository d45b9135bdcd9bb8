use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

/// URL schemes a link or image in an article may point at. Relative
/// destinations are always allowed.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render wiki article markdown to HTML.
///
/// Raw HTML in the source is shown as text, never injected. Link and image
/// destinations with any other scheme (`javascript:`, `data:`, ...) are
/// emptied.
pub fn render_article(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_out = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html_out, parser);
    html_out
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("")
    }
}

fn is_allowed_destination(dest: &str) -> bool {
    let Some((scheme, _)) = dest.split_once(':') else {
        return true;
    };
    // A colon after the first path, query or fragment separator is not a scheme
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    // Browsers ignore whitespace and control characters inside the scheme
    let scheme: String = scheme
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}
