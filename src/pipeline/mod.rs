mod filter;
mod order;
mod regions;
mod summary;

pub use filter::{filter, filter_indices, FilterQuery};
pub use order::{sort_by_time, TimeOrder};
pub use regions::{find_region, group_by_region, InfrastructureTotals, RegionSummary};
pub use summary::{headline_stats, summarize, HeadlineStats, Summary};
