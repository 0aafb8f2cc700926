// src/seed.rs
use anyhow::Result;
use bson::{doc, Bson, Document};
use futures::StreamExt;
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The document this tool seeds. The collection itself is schema-less; this
/// struct only names the shape of the one payload we write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub role: String,
}

impl SeedUser {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn to_document(&self) -> Result<Document> {
        Ok(bson::to_document(self)?)
    }
}

/// Inserts one document and returns the server-assigned `_id`.
pub async fn insert_seed(collection: &Collection<Document>, document: Document) -> Result<Bson> {
    let result = collection.insert_one(document).await?;
    Ok(result.inserted_id)
}

/// Streams every document in `collection` to `out`, one relaxed extended
/// JSON line per document, in whatever order the server returns them.
/// Returns the number of documents written; an empty collection yields zero
/// lines, not an error.
pub async fn print_all<W: Write>(collection: &Collection<Document>, out: &mut W) -> Result<usize> {
    let mut cursor = collection.find(doc! {}).await?;
    let mut count = 0;

    while let Some(document) = cursor.next().await {
        let document = document?;
        writeln!(out, "{}", Bson::Document(document).into_relaxed_extjson())?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_user_converts_to_document() {
        let user = SeedUser::new("Vikash", "Admin");
        let doc = user.to_document().unwrap();

        assert_eq!(doc.get_str("name").unwrap(), "Vikash");
        assert_eq!(doc.get_str("role").unwrap(), "Admin");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn seed_user_round_trips_through_bson() {
        let user = SeedUser::new("Vikash", "Admin");
        let doc = user.to_document().unwrap();
        let back: SeedUser = bson::from_document(doc).unwrap();

        assert_eq!(back, user);
    }

    #[test]
    fn deserialization_ignores_server_assigned_id() {
        let doc = doc! {
            "_id": bson::oid::ObjectId::new(),
            "name": "Vikash",
            "role": "Admin",
        };
        let user: SeedUser = bson::from_document(doc).unwrap();

        assert_eq!(user, SeedUser::new("Vikash", "Admin"));
    }

    #[test]
    fn printed_line_is_valid_json() {
        let doc = doc! { "name": "Vikash", "role": "Admin" };
        let line = Bson::Document(doc).into_relaxed_extjson().to_string();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["name"], "Vikash");
        assert_eq!(parsed["role"], "Admin");
    }
}
