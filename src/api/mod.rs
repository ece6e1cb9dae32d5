// External API clients
pub mod qiita;
