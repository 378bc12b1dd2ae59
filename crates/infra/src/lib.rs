pub mod backend;
pub mod newsapi;
pub mod prefs;
