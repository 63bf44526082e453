pub mod app_state;
pub mod routes;
pub mod service_factory;
