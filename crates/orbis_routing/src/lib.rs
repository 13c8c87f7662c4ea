pub mod client;
pub mod config;
pub mod error;
pub mod geo_input;
pub mod lng_lat;
pub mod model;
pub mod request;
pub mod response;
pub mod schema;
pub mod validation;
pub mod vehicle;

pub use client::{
    CallObserver, OrbisRoutingClient, ReqwestTransport, RouteTransport, TransportResponse,
};
pub use config::RoutingClientParams;
pub use error::RoutingError;
pub use geo_input::{GeoInput, GeoInputKind, PathInput, Waypoint};
pub use model::route::{Route, Routes};
pub use request::{builder::CalculateRouteRequest, params::CalculateRouteParams};
pub use validation::{ValidationIssue, ValidationIssues};
