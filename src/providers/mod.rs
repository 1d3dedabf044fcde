pub mod connectivity;
pub mod geoapi;

pub use connectivity::TcpProbe;
pub use geoapi::GeoApiClient;
