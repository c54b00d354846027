use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sf_core::StoryGroup;

pub fn run(file: &Path) -> Result<(), String> {
    let feed = super::load_feed(file)?;

    if feed.stories.is_empty() && feed.posts.is_empty() {
        println!("  Feed is empty.");
        return Ok(());
    }

    if !feed.stories.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Author", "Stories", "Unviewed", "Media"]);

        for (index, group) in feed.stories.groups().iter().enumerate() {
            table.add_row(vec![
                index.to_string(),
                group.author.name.clone(),
                group.len().to_string(),
                if group.has_unviewed { "yes" } else { "no" }.to_string(),
                media_summary(group),
            ]);
        }

        println!("{table}");
        println!();
    }

    if !feed.posts.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Author", "Date", "Post", "Likes", "Comments", "Shares"]);

        for post in &feed.posts {
            let headline = post.headline();
            let headline = if headline.chars().count() > 50 {
                format!("{}...", headline.chars().take(47).collect::<String>())
            } else {
                headline.to_string()
            };
            table.add_row(vec![
                post.author.name.clone(),
                post.created_at.format("%Y-%m-%d").to_string(),
                headline,
                post.likes.to_string(),
                post.comments.to_string(),
                post.shares.to_string(),
            ]);
        }

        println!("{table}");
        println!();
    }

    println!(
        "  {} story groups, {} posts",
        feed.stories.group_count(),
        feed.posts.len()
    );

    Ok(())
}

/// Comma-separated media kinds in display order, e.g. "text, image".
fn media_summary(group: &StoryGroup) -> String {
    if group.is_empty() {
        return "—".to_string();
    }
    group
        .stories
        .iter()
        .map(|s| s.kind().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
