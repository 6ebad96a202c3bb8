//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::SiteConfig;
pub use site::SESSION_TOKEN_ENV;
