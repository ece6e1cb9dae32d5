// Data models for Qiita users and items
pub mod item;
pub mod user;
