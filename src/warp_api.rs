use crate::database_init::DatabaseFile;
use crate::error::Result;
use crate::file_api;
use crate::internal_api;
use crate::ui_model::DeleteForm;
use crate::ui_model::PageQuery;
use crate::warp_endpoints;
use log::info;
use log::warn;
use std::net::IpAddr;
use std::sync::Arc;
use warp::multipart::FormData;
use warp::Filter;
use warp::Rejection;
use warp::Reply;

/// Start web framework with specified APIs.
pub async fn run_server(
    database: DatabaseFile,
    listen: IpAddr,
    port: u16,
    max_upload_bytes: u64,
) {
    let package_name = env!("CARGO_PKG_NAME").to_uppercase();
    info!(
        "Starting {} HTTP server on http://{}:{} using database {}",
        package_name,
        listen,
        port,
        database.path().display()
    );
    warp::serve(routes(database, max_upload_bytes))
        .run((listen, port))
        .await;
}

/// All routes of the application, see `run_server`.
pub fn routes(
    database: DatabaseFile,
    max_upload_bytes: u64,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let database = Arc::new(database);

    // Get version of cargo project.
    let version = warp::path("version")
        .and(warp::path::end())
        .and(warp::get())
        .map(internal_api::get_project_version);

    // Page draw for the current menu choice.
    // Query parameters:
    //     view: Create, Read, Update or Delete, defaults to Create.
    //     id: item chosen in the Update/Delete selector.
    //     detail: item whose details are shown on the Read panel.
    let db = database.clone();
    let page = warp::path::end()
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .map(move |query: PageQuery| html_reply(warp_endpoints::show_page(&db, query)));

    // "Add Item", multipart form with `name`, `description` and optional `image`.
    let db = database.clone();
    let create_item = warp::path("create")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::multipart::form().max_length(max_upload_bytes))
        .and_then(move |form: FormData| {
            let db = db.clone();
            async move {
                let result = match file_api::read_item_upload(form).await {
                    Ok(upload) => warp_endpoints::create_item(&db, upload),
                    Err(err) => Err(err),
                };
                Ok::<_, Rejection>(html_reply(result))
            }
        });

    // "Update Item", multipart form like the one above plus the item `id`.
    let db = database.clone();
    let update_item = warp::path("update")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::multipart::form().max_length(max_upload_bytes))
        .and_then(move |form: FormData| {
            let db = db.clone();
            async move {
                let result = match file_api::read_item_upload(form).await {
                    Ok(upload) => warp_endpoints::update_item(&db, upload),
                    Err(err) => Err(err),
                };
                Ok::<_, Rejection>(html_reply(result))
            }
        });

    // "Delete Item", urlencoded form with the item `id`.
    let db = database.clone();
    let delete_item = warp::path("delete")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::form())
        .map(move |form: DeleteForm| html_reply(warp_endpoints::delete_item(&db, form)));

    // Raw image bytes of an item, used by the detail view.
    let db = database;
    let item_image = warp::path!("items" / i64 / "image")
        .and(warp::get())
        .map(move |id: i64| {
            let boxed: Box<dyn Reply> = match warp_endpoints::get_item_image(&db, id) {
                Ok((image, content_type)) => Box::new(warp::reply::with_header(
                    image,
                    "content-type",
                    content_type,
                )),
                Err(err) => {
                    warn!("Failed to serve image of item {}: {}", id, err);
                    Box::new(warp::reply::with_status(err.msg, err.code))
                }
            };
            boxed
        });

    version
        .or(page)
        .or(create_item)
        .or(update_item)
        .or(delete_item)
        .or(item_image)
}

/// A failed page draw is reported as the response of that draw.
fn html_reply(result: Result<String>) -> Box<dyn Reply> {
    match result {
        Ok(html) => Box::new(warp::reply::html(html)),
        Err(err) => {
            warn!("Page draw failed: {}", err);
            Box::new(warp::reply::with_status(err.msg, err.code))
        }
    }
}
