use chrono::Utc;
use newsdesk_core::domain::filters::SearchState;
use newsdesk_core::domain::news::NewsSource;
use newsdesk_core::domain::prefs::ThemePreference;
use newsdesk_infra::prefs::PreferenceStore;
use tracing::warn;

use crate::browse::command::{Command, HELP};
use crate::browse::render::{Palette, render_sources, render_view};
use crate::browse::session::View;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Publish,
    Print(String),
    Quit,
    Nothing,
}

pub struct Dashboard {
    search: SearchState,
    theme: ThemePreference,
    sources: Vec<NewsSource>,
    prefs: PreferenceStore,
    color: bool,
    last_view: View,
}

impl Dashboard {
    pub fn new(
        search: SearchState,
        theme: ThemePreference,
        sources: Vec<NewsSource>,
        prefs: PreferenceStore,
        color: bool,
    ) -> Self {
        Self {
            search,
            theme,
            sources,
            prefs,
            color,
            last_view: View::default(),
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Search(query) => {
                self.search.query = query;
                Outcome::Publish
            }
            Command::Language(code) => {
                self.search.filters.language = code.into_string();
                Outcome::Publish
            }
            Command::DateRange(range) => {
                self.search.filters.date_range = range;
                Outcome::Publish
            }
            Command::Source(source) => {
                self.search.filters.source = source.into_string();
                Outcome::Publish
            }
            Command::ListSources => Outcome::Print(render_sources(&self.sources)),
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                if let Err(err) = self.prefs.store_theme(self.theme) {
                    warn!(error = %err, "failed to persist theme preference");
                }
                let label = if self.theme.dark { "Dark mode on" } else { "Dark mode off" };
                Outcome::Print(format!("{label}\n{}", self.render_last()))
            }
            Command::Help => Outcome::Print(HELP.to_string()),
            Command::Quit => Outcome::Quit,
            Command::Empty => Outcome::Nothing,
        }
    }

    pub fn show(&mut self, view: View) -> String {
        self.last_view = view;
        self.render_last()
    }

    fn render_last(&self) -> String {
        let palette = if self.color {
            Palette::for_theme(self.theme)
        } else {
            Palette::plain()
        };
        render_view(&self.last_view, &palette, Utc::now())
    }
}
