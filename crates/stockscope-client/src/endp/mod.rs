pub mod autocomplete;
pub mod chart;
pub mod news;
pub mod quotes;
