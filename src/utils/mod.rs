pub mod text;
pub mod time_format;
