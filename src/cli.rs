// src/cli.rs
use clap::Parser;

/// CLI arguments for mongo-seed.
///
/// Every flag defaults to the value the tool seeds out of the box, so running
/// with no arguments connects to a local server, writes one admin user into
/// `mydatabase.users`, and prints the collection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    /// Database name
    #[arg(long, default_value = "mydatabase")]
    pub db: String,

    /// Collection name
    #[arg(long, default_value = "users")]
    pub collection: String,

    /// Name field of the seeded document
    #[arg(long, default_value = "Vikash")]
    pub name: String,

    /// Role field of the seeded document
    #[arg(long, default_value = "Admin")]
    pub role: String,

    /// Bound on server selection, in milliseconds (driver default if unset)
    #[arg(long)]
    pub server_selection_timeout_ms: Option<u64>,
}
