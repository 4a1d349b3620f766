pub mod download;
pub mod error;
pub mod fetch;
pub mod hd;
pub mod normalize;
pub mod page;
pub mod result;
pub mod storage;

pub use download::{download_portrait, save_portrait, DownloadOutcome, MIN_HD_BYTES};
pub use error::ScrapeError;
pub use fetch::Fetcher;
pub use hd::{ensure_scheme, upgrade_to_original};
pub use normalize::{identity, simplified_chinese, NameNormalizer};
pub use page::{enumerate_rulers, find_portrait, RulerCandidate};
pub use result::{DynastySummary, SourceTier, StoredPortrait};
pub use storage::PortraitStore;
