//! ServiceHub - Frontend Rust/Leptos Footer
//!
//! A WebAssembly page footer for the ServiceHub home services platform.
//! The host page owns layout and styling; this crate renders the footer
//! from an explicit content table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FooterContent (config)                                      │
//! │     brand · quick links · contacts · team · socials          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  <Footer content=../> (components)                           │
//! │     brand · links · contacts · team grid · copyright bar     │
//! │     <Icon/> SVG glyph per network                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Content model (BrandInfo, NavLink, TeamMember, etc.)
//! - [`config`] - Constants and the shipped ServiceHub content table
//! - [`components`] - Leptos components (Footer, Icon)

use leptos::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Brand
    BrandInfo,
    // Links
    ContactEntry, LinkKind, NavLink, Network, ProfileLink, SocialLink, TeamMember,
    // Content table
    FooterContent,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the footer into the host page's body.
///
/// Exported to JavaScript so a host page can embed the footer, and
/// called by the binary entry point.
#[wasm_bindgen]
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏠 {} footer - Starting Leptos App", APP_NAME);

    // Audit and render the same table
    let content = FooterContent::default();
    content.report_issues();

    mount_to_body(move || view! { <App content=content/> });
}

#[component]
pub fn App(content: FooterContent) -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="footer" href=STYLESHEET_HREF/>
        <Footer content=content/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::ssr::render_to_string;

    #[test]
    fn test_app_renders_the_table_it_is_given() {
        let mut content = FooterContent::servicehub();
        content.team = vec![TeamMember {
            name: "Only Member".into(),
            links: vec![ProfileLink::email("mailto:only@servicehub.com")],
        }];
        content.copyright_year = 2031;

        let html = render_to_string(move || view! { <App content=content/> }).to_string();
        assert!(html.contains("Only Member"));
        assert!(html.contains("© 2031 ServiceHub. All rights reserved."));
        assert!(!html.contains("Anchal Chaurasiya"));
    }
}
