pub mod filter;
pub mod ledger;
pub mod session;

pub use filter::rank_videos;
pub use ledger::LedgerStore;
pub use session::Session;
