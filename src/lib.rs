pub mod cli;
pub mod config;
pub mod hostlist;
pub mod query;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use hostlist::{HostSet, HostTriple};
pub use query::HostQuery;
