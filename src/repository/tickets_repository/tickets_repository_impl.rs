use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Database, IndexModel,
};
use std::sync::Arc;
use time::{Date, OffsetDateTime};

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_TICKET_ID: &str = "unique_ticket_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == TICKETS) {
            tracing::debug!(collection = TICKETS, "creating collection");
            database.create_collection(TICKETS).await?;
        }

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_TICKET_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "ticket_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_TICKET_ID.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_UNIQUE_TICKET_ID,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        ticket_id: &str,
        first_name: &str,
        last_name: &str,
        date_of_birth: Date,
        phone_number: &str,
        issued_at: OffsetDateTime,
    ) -> Result<ObjectId, repository::Error> {
        let insert_entity = TicketInsertEntity {
            ticket_id,
            first_name,
            last_name,
            date_of_birth: date_of_birth.midnight().assume_utc().into(),
            phone_number,
            used: false,
            issued_at: issued_at.into(),
            used_at: None,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn find(&self, ticket_id: &str) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "ticket_id": ticket_id,
            })
            .await?
            .map(Ticket::from);

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error> {
        let tickets = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {})
            .sort(doc! { "issued_at": 1 })
            .await?
            .try_collect::<Vec<_>>()
            .await?
            .into_iter()
            .map(Ticket::from)
            .collect();

        Ok(tickets)
    }

    async fn update_used(
        &self,
        ticket_id: &str,
        used_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "ticket_id": ticket_id,
                    "used": false,
                },
                doc! {
                    "$set": {
                        "used": true,
                        "used_at": DateTime::from(used_at),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
