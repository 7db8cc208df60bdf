//! NavGate Library
//!
//! Route access control for client-side navigation: a declarative route
//! table, an async gate that verifies the session and applies an
//! authorization policy before a protected view is reached, and a shared
//! state store holding the last verified user.

pub mod gate;
pub mod navigator;
pub mod routes;
pub mod state;

pub use gate::{AccessGate, GateConfig, NavigationDecision, Role, RouteName, UserRecord};
pub use navigator::{NavigationError, NavigationOutcome, Navigator};
pub use routes::{RouteEntry, RouteTable};
pub use state::StateStore;
