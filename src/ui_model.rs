use crate::database_model::Item;
use crate::database_model::ItemFields;
use crate::database_model::ItemSummary;
use crate::database_model::Rowid;
use serde::Deserialize;

/// Menu entry in the sidebar. Exactly one panel is rendered per page draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum View {
    Create,
    Read,
    Update,
    Delete,
}

impl View {
    pub const ALL: [View; 4] = [View::Create, View::Read, View::Update, View::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Create => "Create",
            View::Read => "Read",
            View::Update => "Update",
            View::Delete => "Delete",
        }
    }
}

impl Default for View {
    fn default() -> View {
        View::Create
    }
}

/// Query string of a page draw, e.g. `/?view=Read&detail=3`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub view: Option<View>,
    /// Item chosen in the Update/Delete selector.
    pub id: Option<Rowid>,
    /// Item whose "View Details" action was activated on the Read panel.
    pub detail: Option<Rowid>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: Rowid,
}

/// Contents of the multipart form posted by "Add Item" and "Update Item".
#[derive(Debug, Default)]
pub struct ItemUpload {
    pub id: Option<Rowid>,
    pub fields: ItemFields,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug)]
pub enum Panel {
    Create {
        form: ItemFields,
    },
    Read {
        items: Vec<ItemSummary>,
        detail: Option<Item>,
    },
    Update {
        ids: Vec<Rowid>,
        selected: Option<Item>,
    },
    Delete {
        ids: Vec<Rowid>,
        selected: Option<Rowid>,
    },
}

/// Everything needed to draw one page.
#[derive(Debug)]
pub struct Page {
    pub panel: Panel,
    pub success: Option<&'static str>,
}

impl Page {
    pub fn view(&self) -> View {
        match self.panel {
            Panel::Create { .. } => View::Create,
            Panel::Read { .. } => View::Read,
            Panel::Update { .. } => View::Update,
            Panel::Delete { .. } => View::Delete,
        }
    }
}
