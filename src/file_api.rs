use crate::constants;
use crate::database_model::Rowid;
use crate::error::Error;
use crate::error::Result;
use crate::ui_model::ItemUpload;
use bytes::Buf;
use futures::TryStreamExt;
use log::debug;
use log::warn;
use std::path::Path;
use warp::multipart::FormData;
use warp::multipart::Part;

/// Read the "Add Item" / "Update Item" multipart form.
///
/// A file input left empty arrives as a part with an empty file name,
/// which is treated as "no image supplied".
pub async fn read_item_upload(form: FormData) -> Result<ItemUpload> {
    let parts: Vec<Part> = form.try_collect().await?;
    let mut upload = ItemUpload::default();
    for part in parts {
        let name = part.name().to_string();
        let filename = part.filename().map(str::to_string);
        let data = read_part(part).await?;
        match name.as_str() {
            "id" => upload.id = Some(parse_id(&data)?),
            "name" => upload.fields.name = String::from_utf8(data)?,
            "description" => upload.fields.description = String::from_utf8(data)?,
            "image" => upload.image = accept_image(filename.as_deref(), data)?,
            other => debug!("Ignoring unexpected form field {}", other),
        }
    }
    Ok(upload)
}

async fn read_part(part: Part) -> Result<Vec<u8>> {
    let data = part
        .stream()
        .try_fold(Vec::new(), |mut acc, buf| async move {
            acc.extend_from_slice(buf.chunk());
            Ok(acc)
        })
        .await?;
    Ok(data)
}

fn parse_id(data: &[u8]) -> Result<Rowid> {
    let text = String::from_utf8_lossy(data);
    text.trim()
        .parse()
        .map_err(|err| Error::bad_request(format!("Invalid item id '{}', {}", text, err)))
}

/// Apply the picker's extension filter to an uploaded file.
/// The bytes themselves are not inspected.
pub fn accept_image(filename: Option<&str>, data: Vec<u8>) -> Result<Option<Vec<u8>>> {
    let filename = match filename {
        Some(f) if !f.is_empty() => f,
        _ => return Ok(None),
    };
    if is_allowed_image(filename) {
        Ok(Some(data))
    } else {
        warn!("Rejecting upload of unsupported file {}", filename);
        Err(Error::bad_request(format!(
            "Unsupported file type of '{}', expected one of: {}",
            filename,
            constants::IMAGE_EXTENSIONS.join(", ")
        )))
    }
}

pub fn is_allowed_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            constants::IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// Content type for serving stored image bytes, guessed from the file signature.
pub fn image_content_type(image: &[u8]) -> &'static str {
    if image.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
