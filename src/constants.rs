// Constants used in the project. These are "convention over configuration" for now.

pub const DATABASE_FILE: &str = "data.db";

/// Extensions accepted by the image pickers, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const MAX_UPLOAD_MB: u64 = 200;

pub const APP_TITLE: &str = "CRUD Application with SQLite and Images";

pub const ITEM_ADDED: &str = "Item added successfully!";
pub const ITEM_UPDATED: &str = "Item updated successfully!";
pub const ITEM_DELETED: &str = "Item deleted successfully!";
