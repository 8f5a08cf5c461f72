//! Terminal host for the Roster catalog browser.
//!
//! The host owns a single event loop. User commands and frame ticks arrive
//! as [`messages::Message`]s, [`update::update`] turns them into state
//! changes plus [`messages::Effect`]s, and the runtime runs those effects in
//! background tasks whose results come back as more messages.

pub mod app;
pub mod input;
pub mod messages;
pub mod render;
pub mod runtime_config;
pub mod state;
pub mod update;
