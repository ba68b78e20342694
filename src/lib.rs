//! Liftoff host: drives the bootstrap milestones and relays them to
//! registered plugins.

pub mod bootstrap;

pub use bootstrap::Bootstrap;
