// Per-user statistics
// Profile counts plus every item the user wrote, folded into one record

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

use crate::api::qiita::QiitaClient;
use crate::error::Result;
use crate::models::item::{DateWindow, ItemRecord};
use crate::models::user::{UserProfile, UserRecord};
use crate::utils::config::PER_PAGE;

use super::item_stats::fetch_item;

/// Followee/follower counts of a user
pub async fn fetch_profile(api: &QiitaClient, user_id: &str) -> Result<UserProfile> {
    api.get_user(user_id).await
}

/// Page through the user's items and fetch each one as it is listed.
///
/// With `concurrency` 1 every request runs strictly in sequence. Higher
/// values let up to that many item fetches of one page run at once;
/// records still come back in listing order.
pub async fn fetch_all_items(
    api: &QiitaClient,
    user_id: &str,
    window: &DateWindow,
    concurrency: usize,
) -> Result<Vec<ItemRecord>> {
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        info!("retrieving items {}...", PER_PAGE * page as usize);
        let listing = api.get_user_items_page(user_id, page).await?;

        let records: Vec<ItemRecord> = stream::iter(listing.iter())
            .map(|summary| fetch_item(api, &summary.id, window))
            .buffered(concurrency.max(1))
            .try_collect()
            .await?;
        items.extend(records);

        if listing.len() < PER_PAGE {
            break;
        }
        page += 1;
    }

    Ok(items)
}

/// Fetch and aggregate everything needed for one report row
pub async fn aggregate_user(
    api: &QiitaClient,
    user_id: &str,
    window: &DateWindow,
    concurrency: usize,
) -> Result<UserRecord> {
    info!("retrieving user_id: {}", user_id);

    let profile = fetch_profile(api, user_id).await?;
    let items = fetch_all_items(api, user_id, window, concurrency).await?;
    let record = UserRecord::from_items(user_id, profile, &items);

    info!(
        "{}: {} items, {} likes, {} stockers -> contribution {}",
        user_id, record.items, record.likes, record.stockers, record.contribution
    );

    Ok(record)
}
