//! # Widgets
//!
//! Reusable UI components shared by the screens.

pub mod forms;
pub mod icons;
pub mod layouts;
pub mod nav_bar;
pub mod notifications;
pub mod status_bar;
pub mod tables;
