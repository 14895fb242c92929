pub mod demo;
pub mod resolution;
pub mod template;
pub mod website_config;
