use crate::constants;
use crate::database_init::DatabaseFile;
use crate::database_model::Item;
use crate::database_model::ItemFields;
use crate::database_model::Rowid;
use crate::error::Error;
use crate::error::Result;
use crate::file_api;
use crate::html_render;
use crate::internal_api;
use crate::ui_model::DeleteForm;
use crate::ui_model::ItemUpload;
use crate::ui_model::Page;
use crate::ui_model::PageQuery;
use crate::ui_model::Panel;
use crate::ui_model::View;

/// Draw the page for the menu choice in `query`. Nothing is written to the database.
pub fn show_page(database: &DatabaseFile, query: PageQuery) -> Result<String> {
    let view = query.view.unwrap_or_default();
    let panel = load_panel(
        database,
        view,
        query.id,
        query.detail,
        ItemFields::default(),
    )?;
    Ok(html_render::render_page(&Page {
        panel,
        success: None,
    }))
}

/// "Add Item". The Create panel is drawn again with the submitted values still filled in.
pub fn create_item(database: &DatabaseFile, upload: ItemUpload) -> Result<String> {
    internal_api::create_item(database, &upload.fields, upload.image.as_deref())?;
    Ok(html_render::render_page(&Page {
        panel: Panel::Create {
            form: upload.fields,
        },
        success: Some(constants::ITEM_ADDED),
    }))
}

/// "Update Item". The Update panel is drawn again for the same item.
pub fn update_item(database: &DatabaseFile, upload: ItemUpload) -> Result<String> {
    let id = upload
        .id
        .ok_or_else(|| Error::bad_request("Missing id of the item to update".to_string()))?;
    require_item(database, id)?;
    internal_api::update_item(database, id, &upload.fields, upload.image.as_deref())?;
    let panel = load_panel(
        database,
        View::Update,
        Some(id),
        None,
        ItemFields::default(),
    )?;
    Ok(html_render::render_page(&Page {
        panel,
        success: Some(constants::ITEM_UPDATED),
    }))
}

/// "Delete Item". The selector then falls back to the first remaining item.
pub fn delete_item(database: &DatabaseFile, form: DeleteForm) -> Result<String> {
    internal_api::delete_item(database, form.id)?;
    let panel = load_panel(database, View::Delete, None, None, ItemFields::default())?;
    Ok(html_render::render_page(&Page {
        panel,
        success: Some(constants::ITEM_DELETED),
    }))
}

/// Stored image bytes of an item together with their content type.
pub fn get_item_image(database: &DatabaseFile, id: Rowid) -> Result<(Vec<u8>, &'static str)> {
    let item = require_item(database, id)?;
    match item.image_bytes() {
        Some(image) => Ok((image.to_vec(), file_api::image_content_type(image))),
        None => Err(Error::not_found(format!("Item {} has no image", id))),
    }
}

fn load_panel(
    database: &DatabaseFile,
    view: View,
    selected: Option<Rowid>,
    detail: Option<Rowid>,
    form: ItemFields,
) -> Result<Panel> {
    let panel = match view {
        View::Create => Panel::Create { form },
        View::Read => {
            let items = internal_api::get_all_items(database)?;
            let detail = match detail {
                Some(id) => Some(require_item(database, id)?),
                None => None,
            };
            Panel::Read { items, detail }
        }
        View::Update => {
            let ids = all_ids(database)?;
            let selected = match selected_or_first(&ids, selected) {
                Some(id) => Some(require_item(database, id)?),
                None => None,
            };
            Panel::Update { ids, selected }
        }
        View::Delete => {
            let ids = all_ids(database)?;
            let selected = selected_or_first(&ids, selected);
            Panel::Delete { ids, selected }
        }
    };
    Ok(panel)
}

/// An id that is no longer listed (e.g. deleted in the meantime) falls back to the first item.
fn selected_or_first(ids: &[Rowid], selected: Option<Rowid>) -> Option<Rowid> {
    selected
        .filter(|id| ids.contains(id))
        .or_else(|| ids.first().copied())
}

fn all_ids(database: &DatabaseFile) -> Result<Vec<Rowid>> {
    let items = internal_api::get_all_items(database)?;
    Ok(items.into_iter().map(|item| item.id).collect())
}

/// The id may have been deleted since the page listing it was drawn.
fn require_item(database: &DatabaseFile, id: Rowid) -> Result<Item> {
    internal_api::get_item(database, id)?
        .ok_or_else(|| Error::not_found(format!("Item {} not found", id)))
}
