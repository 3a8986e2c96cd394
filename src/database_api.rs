use crate::database_model::Item;
use crate::database_model::ItemSummary;
use crate::database_model::Rowid;
use crate::error::ErrorContext;
use crate::error::Result;
use log::debug;
use rusqlite::params;
use rusqlite::Connection;
use rusqlite::Transaction as Tx;

pub fn create_items_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            image BLOB
        );",
    )
    .context_str("Failed to create items table")
}

pub fn insert_item(
    tx: &Tx,
    name: &str,
    description: &str,
    image: Option<&[u8]>,
) -> Result<Rowid> {
    let mut stmt = tx
        .prepare_cached("INSERT INTO items (name, description, image) VALUES (?, ?, ?);")
        .context_str("Failed to prepare/compile INSERT statement")?;
    stmt.insert(params![name, description, image])
        .context_str("Failed to execute insert_item with parameters")
}

pub fn select_all_items(conn: &Connection) -> Result<Vec<ItemSummary>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, description FROM items ORDER BY id;")?;
    let mut rows = stmt.query(params![])?;
    let mut result = Vec::new();
    while let Some(row) = rows.next()? {
        result.push(ItemSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        });
    }
    debug!("Selected {} items", result.len());
    Ok(result)
}

pub fn select_item(conn: &Connection, id: Rowid) -> Result<Option<Item>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, description, image FROM items WHERE id = ?;")?;
    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
        }))
    } else {
        Ok(None)
    }
}

/// Overwrite name and description, leaving the stored image untouched.
/// Returns the number of rows changed (0 or 1).
pub fn update_item_text(tx: &Tx, id: Rowid, name: &str, description: &str) -> Result<usize> {
    let mut stmt =
        tx.prepare_cached("UPDATE items SET name = ?, description = ? WHERE id = ?;")?;
    stmt.execute(params![name, description, id])
        .context(|| format!("Failed to update item {}", id))
}

pub fn update_item_with_image(
    tx: &Tx,
    id: Rowid,
    name: &str,
    description: &str,
    image: &[u8],
) -> Result<usize> {
    let mut stmt = tx
        .prepare_cached("UPDATE items SET name = ?, description = ?, image = ? WHERE id = ?;")?;
    stmt.execute(params![name, description, image, id])
        .context(|| format!("Failed to update item {} with a new image", id))
}

pub fn delete_item(tx: &Tx, id: Rowid) -> Result<usize> {
    let mut stmt = tx.prepare_cached("DELETE FROM items WHERE id = ?;")?;
    stmt.execute(params![id])
        .context(|| format!("Failed to delete item {}", id))
}
