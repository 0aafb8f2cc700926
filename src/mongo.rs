// src/mongo.rs
use anyhow::Result;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::time::Duration;

/// Connects to the server at `uri` and returns a handle to `collection`
/// within `db`.
///
/// Neither the database nor the collection has to exist yet; the server
/// creates both on first write. A `ping` against the target database is
/// issued up front so a malformed URI or an unreachable server fails here
/// rather than at the first insert.
pub async fn connect(
    uri: &str,
    db: &str,
    collection: &str,
    server_selection_timeout: Option<Duration>,
) -> Result<Collection<Document>> {
    let mut client_options = ClientOptions::parse(uri).await?;
    if let Some(timeout) = server_selection_timeout {
        client_options.server_selection_timeout = Some(timeout);
    }
    let client = Client::with_options(client_options)?;
    let db = client.database(db);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db.collection::<Document>(collection))
}
