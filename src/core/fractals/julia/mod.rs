pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod function_catalog;
pub mod julia_config;
