pub mod command_line_interface;
pub mod constants;
pub mod database_api;
pub mod database_init;
pub mod database_model;
pub mod error;
pub mod file_api;
pub mod html_render;
pub mod internal_api;
pub mod ui_model;
pub mod warp_api;
pub mod warp_endpoints;
