pub mod date_range;
pub mod language;
pub mod source_filter;
