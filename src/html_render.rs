//! HTML for a single page draw.
//!
//! Rendering is a pure function of [`Page`]: all data is loaded by the
//! endpoints beforehand, nothing here touches the database.

use crate::constants;
use crate::database_model::Item;
use crate::database_model::ItemFields;
use crate::database_model::ItemSummary;
use crate::database_model::Rowid;
use crate::ui_model::Page;
use crate::ui_model::Panel;
use crate::ui_model::View;

const IMAGE_ACCEPT: &str = ".png,.jpg,.jpeg";

pub fn render_page(page: &Page) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(constants::APP_TITLE)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&render_sidebar(page.view()));
    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(constants::APP_TITLE)));
    match &page.panel {
        Panel::Create { form } => html.push_str(&render_create(form)),
        Panel::Read { items, detail } => html.push_str(&render_read(items, detail.as_ref())),
        Panel::Update { ids, selected } => html.push_str(&render_update(ids, selected.as_ref())),
        Panel::Delete { ids, selected } => html.push_str(&render_delete(ids, *selected)),
    }
    if let Some(success) = page.success {
        html.push_str(&format!(
            "<p class=\"success\">{}</p>\n",
            escape(success)
        ));
    }
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(current: View) -> String {
    let mut html = String::from("<aside>\n<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"view\">Menu</label>\n<select id=\"view\" name=\"view\">\n");
    for view in View::ALL.iter() {
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            view.as_str(),
            selected_attr(*view == current)
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Go</button>\n</form>\n</aside>\n");
    html
}

fn render_create(form: &ItemFields) -> String {
    let mut html = String::from("<h2>Add New Item</h2>\n");
    html.push_str("<form method=\"post\" action=\"/create\" enctype=\"multipart/form-data\">\n");
    html.push_str(&render_text_fields(form));
    html.push_str(&render_image_input("Upload Image"));
    html.push_str("<button type=\"submit\">Add Item</button>\n</form>\n");
    html
}

fn render_read(items: &[ItemSummary], detail: Option<&Item>) -> String {
    let mut html = String::from("<h2>View Items</h2>\n");
    for item in items {
        html.push_str("<section class=\"item\">\n");
        html.push_str(&format!("<p>ID: {}</p>\n", item.id));
        html.push_str(&format!("<p>Name: {}</p>\n", escape(&item.name)));
        html.push_str(&format!(
            "<p>Description: {}</p>\n",
            escape(item.description.as_deref().unwrap_or(""))
        ));
        html.push_str(&format!(
            "<form method=\"get\" action=\"/\">\
             <input type=\"hidden\" name=\"view\" value=\"Read\">\
             <input type=\"hidden\" name=\"detail\" value=\"{0}\">\
             <button type=\"submit\">View Details {0}</button></form>\n",
            item.id
        ));
        if let Some(detail) = detail.filter(|d| d.id == item.id) {
            html.push_str(&render_detail(detail));
        }
        html.push_str("</section>\n");
    }
    html
}

fn render_detail(item: &Item) -> String {
    let mut html = String::from("<div class=\"detail\">\n");
    if item.image_bytes().is_some() {
        html.push_str(&format!(
            "<figure><img src=\"/items/{}/image\" alt=\"{1}\"><figcaption>{1}</figcaption></figure>\n",
            item.id,
            escape(&item.name)
        ));
    }
    html.push_str(&format!("<p>Name: {}</p>\n", escape(&item.name)));
    html.push_str(&format!(
        "<p>Description: {}</p>\n",
        escape(item.description.as_deref().unwrap_or(""))
    ));
    html.push_str("</div>\n");
    html
}

fn render_update(ids: &[Rowid], selected: Option<&Item>) -> String {
    let mut html = String::from("<h2>Update Item</h2>\n");
    html.push_str(&render_selector(
        View::Update,
        "Select Item to Update",
        ids,
        selected.map(|item| item.id),
    ));
    if let Some(item) = selected {
        html.push_str(
            "<form method=\"post\" action=\"/update\" enctype=\"multipart/form-data\">\n",
        );
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"id\" value=\"{}\">\n",
            item.id
        ));
        html.push_str(&render_text_fields(&ItemFields::from(item)));
        html.push_str(&render_image_input("Upload New Image (optional)"));
        html.push_str("<button type=\"submit\">Update Item</button>\n</form>\n");
    }
    html
}

fn render_delete(ids: &[Rowid], selected: Option<Rowid>) -> String {
    let mut html = String::from("<h2>Delete Item</h2>\n");
    // The selector is part of the delete form, so the posted id is always the one shown.
    html.push_str("<form method=\"post\" action=\"/delete\">\n");
    html.push_str(&render_id_select("Select Item to Delete", ids, selected, ""));
    if !ids.is_empty() {
        html.push_str("<button type=\"submit\">Delete Item</button>\n");
    }
    html.push_str("</form>\n");
    html
}

/// Selector over the live id list; choosing an id re-draws the page with it.
fn render_selector(view: View, label: &str, ids: &[Rowid], selected: Option<Rowid>) -> String {
    let mut html = String::from("<form method=\"get\" action=\"/\">\n");
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"view\" value=\"{}\">\n",
        view.as_str()
    ));
    html.push_str(&render_id_select(
        label,
        ids,
        selected,
        " onchange=\"this.form.submit()\"",
    ));
    html.push_str("<button type=\"submit\">Select</button>\n</form>\n");
    html
}

fn render_id_select(label: &str, ids: &[Rowid], selected: Option<Rowid>, attrs: &str) -> String {
    let mut html = format!(
        "<label for=\"id\">{}</label>\n<select id=\"id\" name=\"id\"{}>\n",
        escape(label),
        attrs
    );
    for id in ids {
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            id,
            selected_attr(Some(*id) == selected)
        ));
    }
    html.push_str("</select>\n");
    html
}

fn render_text_fields(fields: &ItemFields) -> String {
    format!(
        "<label for=\"name\">Name</label>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{}\">\n\
         <label for=\"description\">Description</label>\n\
         <textarea id=\"description\" name=\"description\">{}</textarea>\n",
        escape(&fields.name),
        escape(&fields.description)
    )
}

fn render_image_input(label: &str) -> String {
    format!(
        "<label for=\"image\">{}</label>\n\
         <input type=\"file\" id=\"image\" name=\"image\" accept=\"{}\">\n",
        escape(label),
        IMAGE_ACCEPT
    )
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
