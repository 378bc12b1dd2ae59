pub mod client;

pub use client::{ArticlesPage, NewsApiClient, NewsApiError};
