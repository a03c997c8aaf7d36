pub mod embeds;
pub mod info;
pub mod search;
