mod cli;

use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;
use mongo_seed::mongo::connect;
use mongo_seed::seed::{insert_seed, print_all, SeedUser};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let timeout = args.server_selection_timeout_ms.map(Duration::from_millis);
    let collection = connect(&args.mongo_uri, &args.db, &args.collection, timeout).await?;

    let user = SeedUser::new(&args.name, &args.role);
    insert_seed(&collection, user.to_document()?).await?;

    let mut stdout = std::io::stdout().lock();
    print_all(&collection, &mut stdout).await?;

    Ok(())
}
