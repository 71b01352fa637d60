use std::future::Future;

use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::modules::reservation::model::{id_to_string, Reservation, FIELD_DATE, FIELD_ID};

pub trait ReservationStore {
    fn find_by_date(&self, date: &str) -> impl Future<Output = Result<Vec<Reservation>, AppError>> + Send;

    fn export_all(&self) -> impl Future<Output = Result<Vec<Value>, AppError>> + Send;

    // `false` when the document was already gone
    fn delete(&self, reservation: &Reservation) -> impl Future<Output = Result<bool, AppError>> + Send;
}

pub struct ReservationCrud {
    collection: Collection<Document>,
}

impl ReservationCrud {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    pub fn id_filter(reservation: &Reservation) -> Document {
        doc! { FIELD_ID: reservation.raw_id.clone() }
    }
}

impl ReservationStore for ReservationCrud {
    async fn find_by_date(&self, date: &str) -> Result<Vec<Reservation>, AppError> {
        let cursor = self.collection.find(doc! { FIELD_DATE: date }).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(date, found = docs.len(), "fetched reservations");

        Ok(docs.iter().map(Reservation::from_document).collect())
    }

    async fn export_all(&self) -> Result<Vec<Value>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(tag_with_id).collect())
    }

    async fn delete(&self, reservation: &Reservation) -> Result<bool, AppError> {
        let result = self.collection.delete_one(Self::id_filter(reservation)).await?;
        Ok(result.deleted_count > 0)
    }
}

// `id` goes first; a stored `id` field wins over the generated one
pub fn tag_with_id(mut doc: Document) -> Value {
    let id = doc.remove(FIELD_ID).map(|v| id_to_string(&v)).unwrap_or_default();

    let mut tagged = Map::new();
    tagged.insert("id".to_string(), Value::String(id));

    if let Value::Object(fields) = Bson::Document(doc).into_relaxed_extjson() {
        tagged.extend(fields);
    }

    Value::Object(tagged)
}
