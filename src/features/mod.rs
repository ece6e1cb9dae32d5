// Aggregation features: items, users, and the ranking report
pub mod item_stats;
pub mod report;
pub mod user_stats;
