pub mod website_config;
