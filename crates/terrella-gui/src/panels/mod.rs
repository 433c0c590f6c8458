//! UI panels for the Terrella application.

pub mod controls;
pub mod map_view;
