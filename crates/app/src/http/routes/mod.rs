pub mod fallback;
pub mod headlines;
pub mod health;
pub mod news;
pub mod sources;
