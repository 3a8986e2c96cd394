use crate::database_api;
use crate::database_init::DatabaseFile;
use crate::database_model::Item;
use crate::database_model::ItemFields;
use crate::database_model::ItemSummary;
use crate::database_model::Rowid;
use crate::error::ErrorContext;
use crate::error::Result;
use log::debug;
use log::info;
use log::warn;
use rusqlite::Connection;
use rusqlite::Transaction;

/// Get project version as seen by Cargo, with the git revision it was built from.
pub fn get_project_version() -> String {
    debug!("Returning API version...");
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_DESCRIBE"))
}

/// Insert a new item and return its generated id.
pub fn create_item(
    database: &DatabaseFile,
    fields: &ItemFields,
    image: Option<&[u8]>,
) -> Result<Rowid> {
    let id = with_connection(database, |conn| {
        in_transaction(conn, |tx| {
            database_api::insert_item(tx, &fields.name, &fields.description, image)
        })
    })?;
    info!(
        "Created item {} ({} image bytes)",
        id,
        image.map_or(0, <[u8]>::len)
    );
    Ok(id)
}

/// All items without their images.
pub fn get_all_items(database: &DatabaseFile) -> Result<Vec<ItemSummary>> {
    with_connection(database, |conn| database_api::select_all_items(conn))
}

/// A single item including its image, or `None` if no item has this id.
pub fn get_item(database: &DatabaseFile, id: Rowid) -> Result<Option<Item>> {
    debug!("Getting item {}", id);
    with_connection(database, |conn| database_api::select_item(conn, id))
}

/// Overwrite name and description of an item.
/// The stored image is replaced only if `image` is `Some`, otherwise it is kept as is.
pub fn update_item(
    database: &DatabaseFile,
    id: Rowid,
    fields: &ItemFields,
    image: Option<&[u8]>,
) -> Result<()> {
    let changed = with_connection(database, |conn| {
        in_transaction(conn, |tx| match image {
            Some(image) => database_api::update_item_with_image(
                tx,
                id,
                &fields.name,
                &fields.description,
                image,
            ),
            None => database_api::update_item_text(tx, id, &fields.name, &fields.description),
        })
    })?;
    if changed == 0 {
        warn!("Update of item {} changed nothing, the item does not exist", id);
    } else {
        info!("Updated item {} (new image: {})", id, image.is_some());
    }
    Ok(())
}

/// Permanently remove an item. Deleting an unknown id is not an error.
pub fn delete_item(database: &DatabaseFile, id: Rowid) -> Result<()> {
    let removed = with_connection(database, |conn| {
        in_transaction(conn, |tx| database_api::delete_item(tx, id))
    })?;
    info!("Deleted item {} ({} rows removed)", id, removed);
    Ok(())
}

//
// helper functions:
//

/// Open a connection, run `func` and close the connection again.
/// The connection is dropped on the error path as well, so no handle outlives the call.
pub fn with_connection<T, F: FnOnce(&mut Connection) -> Result<T>>(
    database: &DatabaseFile,
    func: F,
) -> Result<T> {
    let mut conn = database.connect()?;
    let result = func(&mut conn)?;
    conn.close()
        .map_err(|(_conn, err)| err)
        .context_str("Failed to close database connection")?;
    Ok(result)
}

fn in_transaction<T, F: FnOnce(&Transaction) -> Result<T>>(
    conn: &mut Connection,
    func: F,
) -> Result<T> {
    let tx = conn.transaction()?;
    let result = func(&tx)?; // Note that this function needs to exit early in case of error
    tx.commit()?;
    Ok(result)
}
