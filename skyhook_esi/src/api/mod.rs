//! Endpoint bindings, one module per ESI tag.
//!
//! Every route has a typed method returning the decoded body and a `_raw`
//! twin returning the undecoded [`EsiResponse`](crate::EsiResponse) (or one
//! response per page for paginated listings).

pub mod alliance;
pub mod assets;
pub mod bookmarks;
pub mod calendar;
pub mod character;
pub mod clones;
pub mod contacts;
pub mod contracts;
pub mod corporation;
pub mod dogma;
pub mod faction_warfare;
pub mod fittings;
pub mod fleets;
pub mod incursions;
pub mod industry;
pub mod insurance;
pub mod killmails;
pub mod location;
pub mod loyalty;
pub mod mail;
pub mod market;
pub mod opportunities;
pub mod planetary_interaction;
pub mod routes;
pub mod search;
pub mod skills;
pub mod status;
pub mod universe;
pub mod user_interface;
pub mod wallet;
pub mod wars;

mod types;

pub use types::Position;
