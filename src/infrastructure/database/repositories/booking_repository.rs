//! MongoDB implementation of BookingRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    Booking, BookingPatch, BookingRepository, DomainError, DomainResult, NewBooking,
};

const COLLECTION: &str = "bookings";

// ── Document mapping ───────────────────────────────────────────

/// Wire shape of a booking in the `bookings` collection
#[derive(Debug, Serialize, Deserialize)]
struct BookingDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    event: String,
    #[serde(rename = "ticketType")]
    ticket_type: String,
}

fn storage_err(e: mongodb::error::Error) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn document_to_domain(document: BookingDocument) -> DomainResult<Booking> {
    let id = document
        .id
        .ok_or_else(|| DomainError::Storage("booking document without _id".to_string()))?;
    Ok(Booking {
        id: id.to_hex(),
        name: document.name,
        email: document.email,
        event: document.event,
        ticket_type: document.ticket_type,
    })
}

fn parse_object_id(id: &str) -> DomainResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| DomainError::Validation(format!("Invalid booking id: {}", id)))
}

// ── MongoBookingRepository ─────────────────────────────────────

pub struct MongoBookingRepository {
    collection: Collection<BookingDocument>,
}

impl MongoBookingRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<BookingDocument>(COLLECTION),
        }
    }

    async fn find_matching(&self, filter: Document) -> DomainResult<Vec<Booking>> {
        let cursor = self.collection.find(filter).await.map_err(storage_err)?;
        let documents: Vec<BookingDocument> = cursor.try_collect().await.map_err(storage_err)?;
        documents.into_iter().map(document_to_domain).collect()
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        self.find_matching(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        let oid = parse_object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(storage_err)?;
        document.map(document_to_domain).transpose()
    }

    async fn insert(&self, booking: NewBooking) -> DomainResult<Booking> {
        let document = BookingDocument {
            id: None,
            name: booking.name,
            email: booking.email,
            event: booking.event,
            ticket_type: booking.ticket_type,
        };
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(storage_err)?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::Storage("insert did not return an object id".to_string()))?;
        info!("Booking created: {}", id.to_hex());
        Ok(Booking {
            id: id.to_hex(),
            name: document.name,
            email: document.email,
            event: document.event,
            ticket_type: document.ticket_type,
        })
    }

    async fn update(&self, id: &str, patch: BookingPatch) -> DomainResult<Option<Booking>> {
        let oid = parse_object_id(id)?;

        // The server rejects an empty $set, so an empty patch is a read.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = Document::new();
        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(email) = patch.email {
            set.insert("email", email);
        }
        if let Some(event) = patch.event {
            set.insert("event", event);
        }
        if let Some(ticket_type) = patch.ticket_type {
            set.insert("ticketType", ticket_type);
        }

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(storage_err)?;
        document.map(document_to_domain).transpose()
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let oid = parse_object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(storage_err)?;
        if result.deleted_count > 0 {
            info!("Booking deleted: {}", id);
        }
        Ok(result.deleted_count > 0)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Vec<Booking>> {
        self.find_matching(doc! { "email": email }).await
    }

    async fn find_by_event(&self, event: &str) -> DomainResult<Vec<Booking>> {
        self.find_matching(doc! { "event": event }).await
    }
}
