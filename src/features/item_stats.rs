// Per-item statistics
// Metadata, window check, and stocker count for one item

use tracing::debug;

use crate::api::qiita::QiitaClient;
use crate::error::Result;
use crate::models::item::{parse_timestamp, DateWindow, ItemRecord};
use crate::utils::config::PER_PAGE;

/// Fetch one item and decide whether it counts.
/// Stockers are only paged through for items inside the window.
pub async fn fetch_item(api: &QiitaClient, item_id: &str, window: &DateWindow) -> Result<ItemRecord> {
    let payload = api.get_item(item_id).await?;
    let created_at = parse_timestamp(&payload.created_at)?;
    let updated_at = parse_timestamp(&payload.updated_at)?;

    if !window.contains(created_at, updated_at) {
        debug!("Item {} is outside the date window", item_id);
        return Ok(ItemRecord::out_of_window(item_id, created_at, updated_at));
    }

    let stockers_count = count_stockers(api, item_id).await?;

    Ok(ItemRecord {
        id: item_id.to_string(),
        created_at,
        updated_at,
        is_valid: true,
        likes_count: payload.likes_count,
        comments_count: payload.comments_count,
        stockers_count,
    })
}

/// Total number of stockers, summed page by page until a short page
pub async fn count_stockers(api: &QiitaClient, item_id: &str) -> Result<u64> {
    let mut total = 0u64;
    let mut page = 1;

    loop {
        let stockers = api.get_stockers_page(item_id, page).await?;
        total += stockers.len() as u64;

        if stockers.len() < PER_PAGE {
            break;
        }
        page += 1;
    }

    Ok(total)
}
