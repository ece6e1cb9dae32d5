// Contribution ranking report
// Runs the user aggregation for every requested id and writes a ranked CSV

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::api::qiita::QiitaClient;
use crate::error::{ContribError, Result};
use crate::models::item::DateWindow;
use crate::models::user::UserRecord;

use super::user_stats::aggregate_user;

/// CSV header, in column order
pub const CSV_HEADER: [&str; 9] = [
    "rank",
    "user_id",
    "followees",
    "followers",
    "items",
    "likes",
    "stockers",
    "comments",
    "contribution",
];

/// Everything one report run needs
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Ids in input order; duplicates are processed twice
    pub user_ids: Vec<String>,
    pub window: DateWindow,
    pub output: PathBuf,
    pub concurrency: usize,
}

/// Aggregate every user in order. A failing user is logged and left out.
pub async fn collect_records(
    api: &QiitaClient,
    user_ids: &[String],
    window: &DateWindow,
    concurrency: usize,
) -> Vec<UserRecord> {
    let mut records = Vec::with_capacity(user_ids.len());

    for user_id in user_ids {
        match aggregate_user(api, user_id, window, concurrency).await {
            Ok(record) => records.push(record),
            Err(e) => error!("Skipping user {}: {}", user_id, e),
        }
    }

    records
}

/// Sort by contribution, highest first. Equal scores keep fetch order.
pub fn rank(mut records: Vec<UserRecord>) -> Vec<UserRecord> {
    records.sort_by(|a, b| b.contribution.cmp(&a.contribution));
    records
}

/// Render already ranked records; rank is the 1-based position
pub fn render_csv(records: &[UserRecord]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');

    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            i + 1,
            r.user_id,
            r.followees,
            r.followers,
            r.items,
            r.likes,
            r.stockers,
            r.comments,
            r.contribution
        ));
    }

    out
}

/// Write the ranked report in a single write.
/// Nothing is written when there are no records.
pub async fn write_report(path: &Path, records: &[UserRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ContribError::NoData);
    }

    tokio::fs::write(path, render_csv(records)).await?;
    Ok(())
}

/// Full run: aggregate, rank, write. Returns the ranked records.
pub async fn build_report(api: &QiitaClient, request: &ReportRequest) -> Result<Vec<UserRecord>> {
    let records = collect_records(api, &request.user_ids, &request.window, request.concurrency).await;
    let ranked = rank(records);

    write_report(&request.output, &ranked).await?;
    info!(
        "Wrote {} of {} users to {}",
        ranked.len(),
        request.user_ids.len(),
        request.output.display()
    );

    Ok(ranked)
}
