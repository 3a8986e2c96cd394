use chrono::Utc;
use crud_items::command_line_interface;
use crud_items::database_init;
use crud_items::database_init::DatabaseFile;
use crud_items::warp_api;
use env_logger::Env;
use log::error;
use std::io::Write;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli_options = command_line_interface::PARSED.clone();
    let database = DatabaseFile::new(&cli_options.database_file);
    if let Err(err) = database_init::init_db(&database) {
        error!("Failed to initialize database, {}", err);
        std::process::exit(1);
    }

    // Start web framework
    warp_api::run_server(
        database,
        cli_options.listen,
        cli_options.port,
        cli_options.max_upload_bytes(),
    )
    .await;
}
