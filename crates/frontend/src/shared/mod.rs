pub mod api_utils;
pub mod components;
pub mod dashboard_data;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod settings;
