use chrono::{DateTime, Utc};
use newsdesk_core::domain::news::{Article, NewsSource};
use newsdesk_core::domain::prefs::ThemePreference;
use newsdesk_core::orchestrator::RequestResult;

use crate::browse::session::View;

pub const DESCRIPTION_LIMIT: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        if theme.dark {
            Self {
                title: "\x1b[1;97m",
                muted: "\x1b[37m",
                error: "\x1b[1;91m",
                info: "\x1b[96m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                title: "\x1b[1;34m",
                muted: "\x1b[90m",
                error: "\x1b[1;31m",
                info: "\x1b[36m",
                reset: "\x1b[0m",
            }
        }
    }

    pub fn plain() -> Self {
        Self {
            title: "",
            muted: "",
            error: "",
            info: "",
            reset: "",
        }
    }
}

pub fn render_view(view: &View, palette: &Palette, now: DateTime<Utc>) -> String {
    let Palette {
        muted,
        error,
        info,
        reset,
        ..
    } = *palette;
    match &view.state {
        RequestResult::Idle => format!("{muted}Type a keyword to search for articles.{reset}"),
        RequestResult::Loading => format!("{muted}[...] Loading articles{reset}"),
        RequestResult::Failure(failure) => format!("{error}Error: {}{reset}", failure.message),
        RequestResult::Success {
            articles,
            total_results,
        } => {
            if let Some(notice) = view.notice {
                return format!("{info}{}{reset}", notice.message());
            }
            let mut out = format!(
                "{muted}Showing {} of {} articles{reset}\n",
                articles.len(),
                total_results
            );
            for article in articles {
                out.push('\n');
                out.push_str(&render_article(article, palette, now));
            }
            out
        }
    }
}

pub fn render_article(article: &Article, palette: &Palette, now: DateTime<Utc>) -> String {
    let title = if article.title.trim().is_empty() {
        "(untitled)"
    } else {
        article.title.trim()
    };
    let mut meta = Vec::new();
    if !article.source.name.trim().is_empty() {
        meta.push(article.source.name.trim().to_string());
    }
    if let Some(when) = relative_time(&article.published_at, now) {
        meta.push(when);
    }
    if let Some(author) = article.author.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        meta.push(format!("by {author}"));
    }

    let mut out = format!("{}{}{}\n", palette.title, title, palette.reset);
    if !meta.is_empty() {
        out.push_str(&format!("{}{}{}\n", palette.muted, meta.join(" | "), palette.reset));
    }
    if let Some(description) = article
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        out.push_str(&truncate(description, DESCRIPTION_LIMIT));
        out.push('\n');
    }
    if !article.url.is_empty() {
        out.push_str(&format!("{}{}{}\n", palette.muted, article.url, palette.reset));
    }
    out
}

pub fn render_sources(sources: &[NewsSource]) -> String {
    if sources.is_empty() {
        return "No sources available; /source still accepts any source id.".to_string();
    }
    let mut out = String::from("Available sources (use /source <id>):\n");
    for source in sources {
        out.push_str(&format!("  {:<28} {}\n", source.id, source.name));
    }
    out
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

pub fn relative_time(published_at: &str, now: DateTime<Utc>) -> Option<String> {
    let published = DateTime::parse_from_rfc3339(published_at.trim())
        .ok()?
        .with_timezone(&Utc);
    let elapsed = now.signed_duration_since(published);
    let minutes = elapsed.num_minutes();
    let text = if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        published.format("%b %-d, %Y").to_string()
    };
    Some(text)
}
