pub mod host_style;
pub mod style_mapper;
