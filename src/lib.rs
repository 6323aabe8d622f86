//! Virtual glasses try-on web server.
//!
//! Serves the server-rendered fitting page plus the static assets the page
//! loads in the browser (face-tracking weights and per-model glasses
//! meshes). The model catalog is a JSON file re-read on every request, so
//! catalog edits show up on the next page load without a restart.

pub mod catalog;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
