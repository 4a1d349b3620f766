//! The top-level batch runner.
//!
//! Iterates dynasties → rulers → portraits strictly sequentially, one
//! request in flight at a time. Nothing below the dynasty loop can abort
//! the batch: every failure is logged and the next unit of work continues.

use crate::config::DynastyEntry;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tianzi_scraper::error::{Result, ScrapeError};
use tianzi_scraper::{
    enumerate_rulers, find_portrait, save_portrait, DynastySummary, Fetcher, NameNormalizer,
    PortraitStore, RulerCandidate, StoredPortrait,
};
use tracing::{info, warn};

/// Options for one batch run.
pub struct BatchOptions {
    pub dynasties: Vec<DynastyEntry>,
    pub output_root: PathBuf,
    pub show_progress_bars: bool,
}

/// Callback for line-oriented progress reporting.
pub type BatchProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Run the full batch and return one summary per configured dynasty.
///
/// A dynasty whose list page cannot be fetched or parsed still yields a
/// (zeroed) summary, so the output always lines up with the input set.
pub async fn execute_batch(
    options: BatchOptions,
    normalizer: NameNormalizer,
    progress_callback: Option<BatchProgressCallback>,
) -> Vec<DynastySummary> {
    let BatchOptions {
        dynasties,
        output_root,
        show_progress_bars,
    } = options;

    let fetcher = Fetcher::new();
    let store = PortraitStore::new(output_root);

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting batch...");
        Some(pb)
    } else {
        None
    };

    let total = dynasties.len();
    let mut summaries = Vec::with_capacity(total);

    for (idx, entry) in dynasties.iter().enumerate() {
        if let Some(ref callback) = progress_callback {
            callback(format!("Dynasty {}/{}: {}", idx + 1, total, entry.label));
        }

        let summary = scrape_dynasty(
            &fetcher,
            &store,
            &normalizer,
            entry,
            progress_bar.as_ref(),
        )
        .await;
        summaries.push(summary);
    }

    if let Some(pb) = progress_bar {
        let saved: usize = summaries.iter().map(|s| s.downloads_succeeded).sum();
        pb.finish_with_message(format!("Batch complete! {} portraits saved", saved));
    }

    summaries
}

/// Process one dynasty: fetch its list page, enumerate rulers, download
/// each portrait. Any failure above the ruler level zeroes out the dynasty;
/// any per-ruler failure skips only that ruler.
async fn scrape_dynasty(
    fetcher: &Fetcher,
    store: &PortraitStore,
    normalizer: &NameNormalizer,
    entry: &DynastyEntry,
    progress_bar: Option<&ProgressBar>,
) -> DynastySummary {
    let mut summary = DynastySummary::new(&entry.label);
    info!("Starting dynasty {}", entry.label);

    let html = match fetcher.fetch_page(&entry.list_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!("{}: list page fetch failed: {}", entry.label, e);
            return summary;
        }
    };

    let candidates = match enumerate_rulers(&html, &entry.list_url, &entry.label) {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("{}: {}", entry.label, e);
            return summary;
        }
    };

    for candidate in candidates {
        summary.rulers_seen += 1;

        if let Some(pb) = progress_bar {
            pb.set_message(format!("[{}] {}", entry.label, candidate.name));
            pb.tick();
        }

        match scrape_ruler(fetcher, store, normalizer, &candidate).await {
            Ok(_) => summary.downloads_succeeded += 1,
            Err(e) => {
                warn!("{}: {} skipped: {}", entry.label, candidate.name, e);
            }
        }
    }

    info!(
        "{} complete: {} rulers seen, {} portraits saved",
        entry.label, summary.rulers_seen, summary.downloads_succeeded
    );

    summary
}

/// Process one ruler: fetch the detail page, locate the infobox portrait,
/// download and persist it.
async fn scrape_ruler(
    fetcher: &Fetcher,
    store: &PortraitStore,
    normalizer: &NameNormalizer,
    candidate: &RulerCandidate,
) -> Result<StoredPortrait> {
    let html = fetcher.fetch_page(&candidate.detail_url).await?;

    let Some(src) = find_portrait(&html) else {
        return Err(ScrapeError::ParseError(format!(
            "no portrait image for {}",
            candidate.name
        )));
    };

    save_portrait(
        fetcher,
        store,
        normalizer,
        &src,
        &candidate.name,
        &candidate.dynasty,
    )
    .await
}
