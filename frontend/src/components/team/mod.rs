pub mod image_uploader;
pub mod setting_input_container;
pub mod team_settings;

pub use team_settings::TeamSettings;
