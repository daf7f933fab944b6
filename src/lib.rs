//! Browser-side behaviors for the GSO request-management pages.
//!
//! The host application renders its pages on the server; this crate only
//! decorates the markup with interaction behavior:
//!
//! - [`components::request_modal`] fills and shows the request-detail modal
//!   and gates the approval action,
//! - [`components::sidebar`] drives the collapsible navigation sidebar with a
//!   collapse preference persisted across page loads,
//! - [`components::overlay_sidebar`] drives the backdrop-overlay sidebar
//!   variant.
//!
//! Each behavior is generic over the [`services::dom::ElementRegistry`] and
//! [`services::storage::PreferenceStore`] capabilities, so the state machines
//! run (and are tested) without a browser. The wasm-only `app` module binds
//! them to the live document and exports the entry points host templates
//! call.

pub mod components;
pub mod services;

#[cfg(target_arch = "wasm32")]
pub mod app;
