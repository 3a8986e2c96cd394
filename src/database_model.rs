// id INTEGER PRIMARY KEY AUTOINCREMENT,
// name TEXT NOT NULL,
// description TEXT,
// image BLOB

pub type Rowid = i64;

/// A full row, as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Rowid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl Item {
    /// Image bytes, if any were stored. An empty blob counts as no image.
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref().filter(|bytes| !bytes.is_empty())
    }
}

/// A row without its image, as listed by the Read panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: Rowid,
    pub name: String,
    pub description: Option<String>,
}

/// The text fields a user edits in the Create and Update panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
}

impl ItemFields {
    pub fn new(name: &str, description: &str) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> ItemFields {
        ItemFields {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}
