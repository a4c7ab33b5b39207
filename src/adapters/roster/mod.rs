//! Maintainer roster adapters.

mod static_roster;

pub use static_roster::StaticMaintainerRoster;
