mod client;
mod provider;
mod types;

pub use client::ZohoClient;
pub use provider::ZohoProvider;
pub use types::RawDeal;
