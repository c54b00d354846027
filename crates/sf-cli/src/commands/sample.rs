use std::path::Path;

use chrono::Utc;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let feed = sf_core::sample::feed(Utc::now());

    if let Some(path) = output {
        feed.save(path).map_err(|e| e.to_string())?;
        println!("  Sample feed written to {}", path.display());
    } else {
        let json = feed
            .to_json_pretty()
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
    }

    Ok(())
}
