//! Two-tier portrait download policy.
//!
//! First attempt is the upgraded full-resolution URL. If that attempt is
//! rejected (transport failure, bad status, or a payload under the
//! placeholder threshold) the raw thumbnail reference is fetched once and
//! its bytes accepted regardless of size or status. There is no third tier
//! and never an HD retry.

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::hd::{ensure_scheme, upgrade_to_original};
use crate::normalize::NameNormalizer;
use crate::result::{SourceTier, StoredPortrait};
use crate::storage::PortraitStore;
use bytes::Bytes;
use tracing::{info, warn};

/// Minimum accepted payload for the full-resolution tier. Wiki servers
/// return small placeholder bodies with a 200 status for some broken
/// renditions.
pub const MIN_HD_BYTES: usize = 1000;

/// Bytes plus the tier that produced them.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub bytes: Bytes,
    pub tier: SourceTier,
}

/// Fetch a portrait, preferring the full-resolution original.
///
/// At most two network attempts are made. A transport failure on the
/// fallback tier is an error: nothing is returned and nothing should be
/// written.
pub async fn download_portrait(
    fetcher: &Fetcher,
    raw_url: &str,
    name: &str,
) -> Result<DownloadOutcome> {
    let hd_url = upgrade_to_original(raw_url);

    match fetcher.fetch_bytes(&hd_url).await {
        Ok((status, bytes)) if status.is_success() && bytes.len() >= MIN_HD_BYTES => {
            return Ok(DownloadOutcome {
                bytes,
                tier: SourceTier::Original,
            });
        }
        Ok((status, bytes)) => {
            warn!(
                "{}: full-resolution fetch rejected (status {}, {} bytes), trying thumbnail",
                name,
                status.as_u16(),
                bytes.len()
            );
        }
        Err(e) => {
            warn!("{}: full-resolution fetch failed ({}), trying thumbnail", name, e);
        }
    }

    // Fallback tier: whatever the thumbnail returns is accepted as-is.
    let (_, bytes) = fetcher.fetch_bytes(&ensure_scheme(raw_url)).await?;
    Ok(DownloadOutcome {
        bytes,
        tier: SourceTier::Thumbnail,
    })
}

/// Download a ruler's portrait and persist it under the dynasty directory.
///
/// Both the ruler name and the dynasty label pass through the normalizer
/// before the path is computed, so the output tree is indexed under one
/// canonical script. Exactly one write attempt per call.
pub async fn save_portrait(
    fetcher: &Fetcher,
    store: &PortraitStore,
    normalizer: &NameNormalizer,
    raw_url: &str,
    name: &str,
    dynasty: &str,
) -> Result<StoredPortrait> {
    let outcome = download_portrait(fetcher, raw_url, name).await?;

    let name = normalizer(name);
    let dynasty = normalizer(dynasty);
    let byte_count = outcome.bytes.len();
    let path = store.write(&dynasty, &name, &outcome.bytes)?;

    info!(
        "{}: saved {} ({} KB, {:?})",
        name,
        path.display(),
        byte_count / 1024,
        outcome.tier
    );

    Ok(StoredPortrait {
        path,
        tier: outcome.tier,
        byte_count,
    })
}
