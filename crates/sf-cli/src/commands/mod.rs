pub mod check;
pub mod list;
pub mod play;
pub mod sample;

use std::path::Path;

use sf_core::Feed;
use tracing::debug;

/// Load a feed file, turning errors into a printable message.
fn load_feed(path: &Path) -> Result<Feed, String> {
    let feed = Feed::load(path).map_err(|e| e.to_string())?;
    debug!(
        path = %path.display(),
        groups = feed.stories.group_count(),
        posts = feed.posts.len(),
        "feed loaded"
    );
    Ok(feed)
}
