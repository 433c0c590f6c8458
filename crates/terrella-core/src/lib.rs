//! # Terrella Core
//!
//! The numerical backbone of the Terrella applet. This crate implements
//! the magnetic forward model: the anomaly of a buried dipole or monopole
//! source measured on a regular 2D survey grid, projected onto a chosen
//! receiver component.
//!
//! ## Architecture
//!
//! The entry point is [`forward::simulate`], which takes a
//! [`types::SurveyParams`] and returns an immutable
//! [`types::SurveyResult`] holding the scalar anomaly map and the survey
//! profile through the origin. The GUI and CLI both drive this single
//! function.
//!
//! ## Modules
//!
//! - [`types`] — Core data structures (parameters, maps, profiles).
//! - [`source`] — Closed-form whole-space dipole/monopole fields.
//! - [`grid`] — Cell-centred square survey grid.
//! - [`forward`] — Forward model: field evaluation and projection.
//! - [`profile`] — Profile interpolation and half-width extraction.

pub mod forward;
pub mod grid;
pub mod profile;
pub mod source;
pub mod types;
