pub mod cli;
pub mod conf;
pub mod dashboard;
pub mod ingest;
pub mod logging;
pub mod rate;
pub mod record;
pub mod store;
