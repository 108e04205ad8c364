pub mod line_definition;
