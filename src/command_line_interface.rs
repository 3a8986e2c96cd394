use lazy_static::lazy_static;
use std::net::IpAddr;
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "crud-items, manage named items with descriptions and images.",
    setting = AppSettings::DeriveDisplayOrder,
    setting = AppSettings::UnifiedHelpMessage,
    version = VERSION.as_ref(),
)]
pub struct CliOptions {
    /// Port to listen to.
    #[structopt(short, long, default_value = "3030", env = "ITEMS_PORT")]
    pub port: u16,

    /// Network interface to listen on.
    /// The default loopback interface means that only browsers
    /// from within the same computer will be able to open the application.
    #[structopt(short, long, default_value = "127.0.0.1", env = "ITEMS_LISTEN")]
    pub listen: IpAddr,

    /// SQLite file to store items in. Created on first start if missing.
    #[structopt(
        short,
        long,
        default_value = "data.db",
        parse(from_os_str),
        env = "ITEMS_DATABASE_FILE"
    )]
    pub database_file: PathBuf,

    /// Maximum size of an uploaded form (including the image), in megabytes.
    #[structopt(long, default_value = "200", env = "ITEMS_MAX_UPLOAD_MB")]
    pub max_upload_mb: u64,
}

impl CliOptions {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

lazy_static! {
    pub static ref VERSION: String = crate::internal_api::get_project_version();
}

lazy_static! {
    pub static ref PARSED: CliOptions = CliOptions::from_args();
}

#[cfg(test)]
pub mod tests {
    use super::CliOptions;
    use crate::constants;
    use std::net::IpAddr;
    use std::net::Ipv4Addr;
    use std::path::PathBuf;
    use structopt::StructOpt;

    /// Example test CLI. Purely for convenience,
    /// you can instantiate your own / unrelated ones as well.
    pub fn test_cli() -> CliOptions {
        CliOptions {
            port: 3030,
            listen: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            database_file: PathBuf::from(constants::DATABASE_FILE),
            max_upload_mb: constants::MAX_UPLOAD_MB,
        }
    }

    #[test]
    fn defaults_match_test_cli() {
        let parsed = CliOptions::from_iter_safe(&["crud-items"]).unwrap();
        let expected = test_cli();
        assert_eq!(parsed.port, expected.port);
        assert_eq!(parsed.listen, expected.listen);
        assert_eq!(parsed.database_file, expected.database_file);
        assert_eq!(parsed.max_upload_mb, expected.max_upload_mb);
        assert_eq!(parsed.max_upload_bytes(), 200 * 1024 * 1024);
    }

    #[test]
    fn database_file_can_be_overridden() {
        let parsed =
            CliOptions::from_iter_safe(&["crud-items", "--database-file", "/tmp/items.db"])
                .unwrap();
        assert_eq!(parsed.database_file, PathBuf::from("/tmp/items.db"));
    }
}
