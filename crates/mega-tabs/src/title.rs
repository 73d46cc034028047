//! Tab title shortening

/// Page titles longer than this are cut
pub const MAX_PAGE_TITLE: usize = 20;
/// URL fallback titles longer than this are cut
pub const MAX_URL_TITLE: usize = 25;
/// Length a URL fallback title is cut to, before the ellipsis
pub const URL_TITLE_CUT: usize = 22;
/// Appended to shortened titles
pub const ELLIPSIS: char = '…';
/// Title of a tab before its engine reports anything
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Shorten a page title to at most [`MAX_PAGE_TITLE`] characters plus an ellipsis
pub fn page_title(title: &str) -> String {
    truncate(title, MAX_PAGE_TITLE, MAX_PAGE_TITLE)
}

/// Title used while a page has no title of its own: the URL without its
/// `http(s)://` prefix, shortened past [`MAX_URL_TITLE`] characters
pub fn url_title(url: &str) -> String {
    let bare = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    truncate(bare, MAX_URL_TITLE, URL_TITLE_CUT)
}

fn truncate(text: &str, max: usize, cut: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut short: String = text.chars().take(cut).collect();
    short.push(ELLIPSIS);
    short
}
