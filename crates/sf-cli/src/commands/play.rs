use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use colored::Colorize;
use sf_playback::{
    Fill, InputEvent, ManualClock, PlaybackConfig, PlaybackController, PlaybackEventKind,
    Position,
};
use tracing::debug;

/// Width of the simulated story surface that scripted taps land on.
const SURFACE_WIDTH: f32 = 300.0;

/// Options for `sf play`.
pub struct PlayOptions {
    pub file: Option<PathBuf>,
    pub group: Option<usize>,
    pub story: Option<usize>,
    pub script: Option<String>,
    pub ms_per_tick: u64,
    pub duration_ms: Option<u64>,
    pub active_only: bool,
}

/// One step of an input script.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScriptStep {
    Wait(Duration),
    Tick,
    Input(InputEvent),
}

fn parse_step(word: &str) -> Result<ScriptStep, String> {
    if let Some(ms) = word.strip_prefix("wait:") {
        let ms: u64 = ms
            .parse()
            .map_err(|_| format!("invalid wait duration in script step \"{word}\""))?;
        return Ok(ScriptStep::Wait(Duration::from_millis(ms)));
    }

    let tap = |x: f32| {
        ScriptStep::Input(InputEvent::Tap {
            x,
            width: SURFACE_WIDTH,
        })
    };
    let step = match word {
        "tick" => ScriptStep::Tick,
        "down" => ScriptStep::Input(InputEvent::PointerDown),
        "up" => ScriptStep::Input(InputEvent::PointerUp),
        "leave" => ScriptStep::Input(InputEvent::PointerLeave),
        "touch" => ScriptStep::Input(InputEvent::TouchStart),
        "release" => ScriptStep::Input(InputEvent::TouchEnd),
        "cancel" => ScriptStep::Input(InputEvent::TouchCancel),
        "close" => ScriptStep::Input(InputEvent::CloseButton),
        "left" => tap(SURFACE_WIDTH / 6.0),
        "middle" => tap(SURFACE_WIDTH / 2.0),
        "right" => tap(SURFACE_WIDTH * 5.0 / 6.0),
        other => {
            return Err(format!(
                "unknown script step \"{other}\". Use: wait:<ms>, tick, down, up, leave, \
                 touch, release, cancel, left, middle, right, close"
            ));
        }
    };
    Ok(step)
}

fn parse_script(script: &str) -> Result<Vec<ScriptStep>, String> {
    script.split_whitespace().map(parse_step).collect()
}

pub fn run(opts: PlayOptions) -> Result<(), String> {
    let (feed, source) = match &opts.file {
        Some(path) => (super::load_feed(path)?, path.display().to_string()),
        None => (sf_core::sample::feed(Utc::now()), "sample".to_string()),
    };
    let stories = if opts.active_only {
        feed.stories.active_at(Utc::now())
    } else {
        feed.stories
    };

    let steps = opts.script.as_deref().map(parse_script).transpose()?;

    let mut config =
        PlaybackConfig::default().with_tick_interval(Duration::from_millis(opts.ms_per_tick));
    if let Some(ms) = opts.duration_ms {
        config = config.with_story_duration(Duration::from_millis(ms));
    }

    let initial = match (opts.group, opts.story) {
        (None, None) => None,
        (group, story) => Some(Position::new(group.unwrap_or(0), story.unwrap_or(0))),
    };

    let clock = ManualClock::new();
    let mut viewer = PlaybackController::start(&stories, initial, config, clock.clone())
        .map_err(|e| format!("invalid playback settings: {e}"))?;

    println!(
        "  {} '{}' {}",
        "Playback".bold(),
        source,
        format!(
            "({} groups, {} stories, {}ms/tick, {:.1}s/story)",
            stories.group_count(),
            stories.story_count(),
            viewer.config().tick_interval.as_millis(),
            viewer.config().story_duration().as_secs_f64()
        )
        .dimmed()
    );
    println!();

    match steps {
        Some(steps) => {
            for step in steps {
                if viewer.is_closed() {
                    break;
                }
                debug!(?step, "script step");
                match step {
                    ScriptStep::Wait(by) => {
                        clock.advance(by);
                        viewer.pump();
                    }
                    ScriptStep::Tick => viewer.tick(),
                    ScriptStep::Input(event) => {
                        viewer.handle_input(&event);
                    }
                }
            }
        }
        None => play_to_end(&mut viewer, &clock),
    }

    print_events(&viewer);
    print_final_state(&viewer);

    Ok(())
}

/// Let every story run out. Each round covers at least one full story.
fn play_to_end(viewer: &mut PlaybackController<'_, ManualClock>, clock: &ManualClock) {
    let story_duration = viewer.config().story_duration();
    let max_rounds = 2 * (viewer.collection().story_count() + 1);
    for _ in 0..max_rounds {
        if viewer.is_closed() {
            break;
        }
        clock.advance(story_duration);
        viewer.pump();
    }
}

fn print_events(viewer: &PlaybackController<'_, ManualClock>) {
    println!("  {}", "Event Log".bold().underline());
    println!();
    for event in viewer.events().events() {
        let time = format!("[{:>8.3}s]", event.at.as_secs_f64()).dimmed();
        let desc = colorize_event(&event.kind);
        println!("  {time} {desc}");
    }
    println!();
}

fn colorize_event(kind: &PlaybackEventKind) -> colored::ColoredString {
    let description = kind.to_string();
    match kind {
        PlaybackEventKind::Opened { .. } => description.green(),
        PlaybackEventKind::Advanced { .. } => description.normal(),
        PlaybackEventKind::Navigated { .. } => description.cyan(),
        PlaybackEventKind::Stayed { .. } => description.dimmed(),
        PlaybackEventKind::Paused { .. } | PlaybackEventKind::Resumed { .. } => {
            description.yellow()
        }
        PlaybackEventKind::Closed { .. } => description.red().bold(),
    }
}

fn print_final_state(viewer: &PlaybackController<'_, ManualClock>) {
    println!("  {}", "Final State".bold().underline());
    println!();

    let Some(state) = viewer.state() else {
        if let Some(reason) = viewer.close_reason() {
            println!("  {} {reason}", "CLOSED".red().bold());
        }
        return;
    };

    let status = if state.paused {
        "PAUSED".yellow().bold()
    } else {
        "PLAYING".green().bold()
    };
    println!(
        "  {status} story {} at {:.0}%",
        state.position, state.progress
    );

    if let (Some(group), Some(story)) = (viewer.current_group(), viewer.current_story()) {
        let text = story.content.text().unwrap_or("");
        println!("  {} [{}] {text}", group.author.name.bold(), story.kind());
    }

    let bars: Vec<String> = viewer.progress_bars().into_iter().map(format_bar).collect();
    println!("  {}", bars.join(" "));
}

fn format_bar(fill: Fill) -> String {
    let filled = (fill.percent() / 10.0).round() as usize;
    let empty = 10_usize.saturating_sub(filled);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}
