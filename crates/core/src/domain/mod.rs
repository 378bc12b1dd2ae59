pub mod filters;
pub mod news;
pub mod prefs;
