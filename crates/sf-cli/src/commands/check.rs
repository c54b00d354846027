use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let feed = super::load_feed(file)?;
    let issues = feed.validate();

    println!(
        "  {} story groups, {} stories, {} posts",
        feed.stories.group_count(),
        feed.stories.story_count(),
        feed.posts.len()
    );

    if issues.is_empty() {
        println!("  All checks passed for '{}'.", file.display());
        return Ok(());
    }

    for issue in &issues {
        println!("  {}  {issue}", "WARN".yellow().bold());
    }
    println!(
        "  {} issue{}",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
