// src/db/products.rs
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::db::connection::Database;
use crate::domain::{Condition, Listing, ListingDraft, ListingId, NewListing};
use crate::errors::ServerError;

const SELECT_COLUMNS: &str = "select id, name, description, price, original_price, location, \
     condition, phone, tags, image, listed_date, owner from products";

/// The product collection as the rest of the app sees it.
///
/// `update` and `delete` take the acting user's email and refuse with
/// `Forbidden` unless it matches the listing owner; hiding buttons in the UI
/// is not what protects a listing.
pub trait ProductStore {
    fn select_all(&self) -> Result<Vec<Listing>, ServerError>;
    fn select_by_id(&self, id: ListingId) -> Result<Option<Listing>, ServerError>;
    fn select_by_owner(&self, owner: &str) -> Result<Vec<Listing>, ServerError>;
    fn insert(&self, listing: &NewListing) -> Result<Listing, ServerError>;
    fn update(
        &self,
        id: ListingId,
        actor: &str,
        changes: &ListingDraft,
    ) -> Result<Listing, ServerError>;
    fn delete(&self, id: ListingId, actor: &str) -> Result<(), ServerError>;
}

impl ToSql for Condition {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Condition {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        original_price: row.get(4)?,
        location: row.get(5)?,
        condition: row.get(6)?,
        phone: row.get(7)?,
        tags: row.get(8)?,
        image: row.get(9)?,
        listed_date: row.get(10)?,
        owner: row.get(11)?,
    })
}

fn query_listings(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params, row_to_listing)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn find_listing(conn: &Connection, id: ListingId) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} where id = ?"),
        params![id],
        row_to_listing,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select product failed: {e}")))
}

/// After a guarded write touched no rows, tell "gone" apart from "not yours".
fn missing_or_forbidden(conn: &Connection, id: ListingId) -> ServerError {
    match find_listing(conn, id) {
        Ok(Some(_)) => ServerError::Forbidden("You can only change your own listings.".into()),
        Ok(None) => ServerError::NotFound,
        Err(e) => e,
    }
}

impl ProductStore for Database {
    fn select_all(&self) -> Result<Vec<Listing>, ServerError> {
        self.with_conn(|conn| query_listings(conn, &format!("{SELECT_COLUMNS} order by id"), []))
    }

    fn select_by_id(&self, id: ListingId) -> Result<Option<Listing>, ServerError> {
        self.with_conn(|conn| find_listing(conn, id))
    }

    fn select_by_owner(&self, owner: &str) -> Result<Vec<Listing>, ServerError> {
        self.with_conn(|conn| {
            query_listings(
                conn,
                &format!("{SELECT_COLUMNS} where lower(owner) = lower(?) order by id"),
                params![owner],
            )
        })
    }

    fn insert(&self, listing: &NewListing) -> Result<Listing, ServerError> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into products
                    (name, description, price, original_price, location, condition,
                     phone, tags, image, listed_date, owner)
                values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
                params![
                    listing.name,
                    listing.description,
                    listing.price,
                    listing.original_price,
                    listing.location,
                    listing.condition,
                    listing.phone,
                    listing.tags,
                    listing.image,
                    listing.listed_date,
                    listing.owner,
                ],
            )
            .map_err(|e| ServerError::DbError(format!("insert product failed: {e}")))?;

            let id = conn.last_insert_rowid();
            info!(product_id = id, owner = %listing.owner, "listing created");
            find_listing(conn, id)?.ok_or(ServerError::InternalError)
        })
    }

    fn update(
        &self,
        id: ListingId,
        actor: &str,
        changes: &ListingDraft,
    ) -> Result<Listing, ServerError> {
        self.with_conn(|conn| {
            let updated = conn
                .execute(
                    r#"
                    update products set
                        name = ?, description = ?, price = ?, original_price = ?,
                        location = ?, condition = ?, phone = ?, tags = ?,
                        image = coalesce(?, image)
                    where id = ? and lower(owner) = lower(?)
                    "#,
                    params![
                        changes.name,
                        changes.description,
                        changes.price,
                        changes.original_price,
                        changes.location,
                        changes.condition,
                        changes.phone,
                        changes.tags,
                        changes.image,
                        id,
                        actor,
                    ],
                )
                .map_err(|e| ServerError::DbError(format!("update product failed: {e}")))?;

            if updated == 0 {
                return Err(missing_or_forbidden(conn, id));
            }

            debug!(product_id = id, "listing updated");
            find_listing(conn, id)?.ok_or(ServerError::NotFound)
        })
    }

    fn delete(&self, id: ListingId, actor: &str) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            let deleted = conn
                .execute(
                    "delete from products where id = ? and lower(owner) = lower(?)",
                    params![id, actor],
                )
                .map_err(|e| ServerError::DbError(format!("delete product failed: {e}")))?;

            if deleted == 0 {
                return Err(missing_or_forbidden(conn, id));
            }

            info!(product_id = id, "listing deleted");
            Ok(())
        })
    }
}
