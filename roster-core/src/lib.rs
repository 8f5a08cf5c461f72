//! # Roster Core
//!
//! Algorithms and collaborators behind the Roster catalog browser.
//!
//! ## Overview
//!
//! - **Color extraction**: derive a card background and readable text color
//!   from each item's artwork
//! - **Carousel positioning**: an endless horizontal strip built from three
//!   copies of the list, with center tracking and an open/close lifecycle
//! - **Catalog access**: a PokeAPI-shaped client, a mockable source trait and
//!   a single-flight detail cache
//! - **Detail view model**: stat bars, abilities, moves and type badges for
//!   the open item
//!
//! ## Architecture
//!
//! - [`color`]: loader, processor and cached extractor
//! - [`carousel`]: geometry, animator, focus state and the positioner
//! - [`catalog`]: remote source, client and detail cache
//! - [`detail_view`]: panel content for the open item
//! - [`constants`]: compiled defaults shared with hosts
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! use roster_core::{
//!     carousel::{CarouselLayout, CarouselPositioner},
//!     catalog::{PokeApiClient, load_catalog},
//!     color::{ColorExtractor, ExtractOptions, HttpImageLoader},
//! };
//! use roster_model::ImageUrlTemplate;
//!
//! async fn browse() -> roster_core::Result<()> {
//!     let client = PokeApiClient::new("https://pokeapi.co/api/v2")?;
//!     let items = load_catalog(&client, &ImageUrlTemplate::default()).await?;
//!
//!     let extractor = ColorExtractor::new(Arc::new(HttpImageLoader::new()?));
//!     let styled = extractor.enrich(&items, ExtractOptions::default(), 8).await;
//!
//!     let mut carousel = CarouselPositioner::new(CarouselLayout::default());
//!     carousel.set_items(styled);
//!     carousel.step_right(Instant::now());
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Infinite carousel positioning and focus
pub mod carousel;

/// Remote catalog source, client and detail cache
pub mod catalog;

/// Dominant color extraction
pub mod color;

/// Compiled defaults
pub mod constants;

/// Detail panel view model
pub mod detail_view;

/// Error types
pub mod error;

pub use error::{Result, RosterError};
