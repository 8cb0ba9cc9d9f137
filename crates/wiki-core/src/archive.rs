//! Plain-text archive of a token's pages.

use crate::types::Page;

/// File name suggested to clients downloading an archive.
pub const ARCHIVE_FILENAME: &str = "wiki_archive.txt";

/// Renders pages as `# <title>` headings, each followed by its content and a
/// blank line. Pages are written in the order given.
#[must_use]
pub fn render_archive(pages: &[Page]) -> String {
    let capacity = pages
        .iter()
        .map(|p| p.title.len() + p.content.len() + 5)
        .sum();
    let mut out = String::with_capacity(capacity);
    for page in pages {
        out.push_str("# ");
        out.push_str(&page.title);
        out.push('\n');
        out.push_str(&page.content);
        out.push_str("\n\n");
    }
    out
}
