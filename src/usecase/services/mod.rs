pub mod browse_service;
pub mod country_service;
