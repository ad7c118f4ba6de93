//! Plain-text rendering of the chapter list and stats views.

use chrono::{DateTime, Utc};

use prep_core::model::{Chapter, Subject, SubjectStats, Trend};
use services::ChapterListView;

// Fixed glyph palette; each chapter hashes to one entry.
const GLYPHS: [char; 12] = ['◆', '◇', '●', '○', '■', '□', '▲', '△', '★', '☆', '◉', '◎'];

/// Stable glyph for a chapter name: char-code sum into the palette.
/// Purely cosmetic, no domain meaning.
#[must_use]
pub fn glyph_for(name: &str) -> char {
    let hash: u32 = name.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    GLYPHS[hash as usize % GLYPHS.len()]
}

/// Text progress bar, e.g. `[██████----]` for 60%.
#[must_use]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '-' });
    }
    bar.push(']');
    bar
}

/// Compact "time ago" label: hours under a day, days otherwise.
#[must_use]
pub fn format_time_ago(now: DateTime<Utc>, studied_at: Option<DateTime<Utc>>) -> String {
    let Some(studied_at) = studied_at else {
        return "never".to_owned();
    };
    let hours = (now - studied_at).num_hours().max(0);
    if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

fn trend_arrow(trend: Option<Trend>) -> &'static str {
    match trend {
        Some(Trend::Up) => "↑",
        Some(Trend::Down) => "↓",
        Some(Trend::Flat) => "→",
        None => " ",
    }
}

fn chapter_line(chapter: &Chapter, now: DateTime<Utc>) -> String {
    let mut line = format!(
        "{} {:<38} {:<12} {:<8} {} {:>3.0}%",
        glyph_for(&chapter.name),
        chapter.name,
        chapter.status,
        chapter.difficulty,
        progress_bar(chapter.progress_percent(), 10),
        chapter.progress_percent(),
    );
    if let Some((year, count)) = chapter.year_counts_newest_first().first() {
        line.push_str(&format!(
            "  {year}: {count}Qs {}",
            trend_arrow(chapter.question_trend())
        ));
    }
    if let Some(accuracy) = chapter.accuracy.filter(|a| *a > 0.0) {
        line.push_str(&format!("  acc {accuracy:.0}%"));
    }
    line.push_str(&format!(
        "  studied {}",
        format_time_ago(now, chapter.last_studied)
    ));
    if chapter.is_weak_chapter {
        line.push_str("  [weak]");
    }
    line
}

/// Renders the filtered list with a "showing X of Y" header.
#[must_use]
pub fn render_list(view: &ChapterListView, now: DateTime<Utc>) -> String {
    let mut out = format!("{} — showing {} chapters", view.subject, view.shown());
    if view.is_filtered() {
        out.push_str(&format!(" (filtered from {})", view.total_in_subject));
    }
    out.push('\n');

    if view.chapters.is_empty() {
        out.push_str("no chapters found matching the filters\n");
        return out;
    }
    for chapter in &view.chapters {
        out.push_str(&chapter_line(chapter, now));
        out.push('\n');
    }
    out
}

/// Renders the per-subject summary card.
#[must_use]
pub fn render_stats(subject: Subject, stats: &SubjectStats) -> String {
    let mut out = format!("{subject} — overview\n");
    out.push_str(&format!(
        "  chapters     {} total / {} completed / {} in progress / {} not started\n",
        stats.total_chapters,
        stats.completed_chapters,
        stats.in_progress_chapters,
        stats.not_started_chapters,
    ));
    out.push_str(&format!("  weak         {}\n", stats.weak_chapters));
    out.push_str(&format!(
        "  questions    {}/{} solved {} {:.0}%\n",
        stats.solved_questions,
        stats.total_questions,
        progress_bar(stats.progress_percent(), 20),
        stats.progress_percent(),
    ));
    out.push_str(&format!(
        "  completion   {} {:.0}%\n",
        progress_bar(stats.completion_rate(), 20),
        stats.completion_rate(),
    ));
    if stats.average_accuracy > 0.0 {
        out.push_str(&format!(
            "  avg accuracy {:.0}%\n",
            stats.average_accuracy
        ));
    }
    out.push_str(&format!(
        "  time spent   {}h {}m\n",
        stats.total_time_spent_minutes / 60,
        stats.total_time_spent_minutes % 60,
    ));
    out
}
