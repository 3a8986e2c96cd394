#![allow(dead_code)]

use crud_items::database_init;
use crud_items::database_init::DatabaseFile;
use tempfile::TempDir;

/// A freshly initialized database file, removed together with the directory on drop.
pub struct TestDatabase {
    _dir: TempDir,
    pub database: DatabaseFile,
}

pub fn test_database() -> TestDatabase {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let database = DatabaseFile::new(dir.path().join("data.db"));
    database_init::init_db(&database).expect("Failed to initialize test database");
    TestDatabase {
        _dir: dir,
        database,
    }
}

/// Starts with the PNG signature, the rest is arbitrary.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR fake png";

pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

pub const BOUNDARY: &str = "crud-items-test-boundary";

pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

pub fn multipart_body(parts: &[FormPart]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File(name, filename, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
