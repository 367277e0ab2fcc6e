//! Reusable UI components shared across pages.

pub mod main_nav;
pub mod route_outlet;
