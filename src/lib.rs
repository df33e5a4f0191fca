//! # Live-Ops Event Blueprint Generator
//!
//! Turns a flat record of event-planning fields (the [`EventDescriptor`])
//! into a standalone HTML page — the blueprint — for a live-ops marketing
//! event.
//!
//! ## Features
//! - Pure descriptor-to-document generation with per-field placeholders
//! - HTML escaping and multi-line list sanitization for every field
//! - Live preview projection behind a small display interface
//! - Export with optional asset inlining for a self-contained file
//! - Tab and mobile-nav state as pure, testable transitions
//!
//! ## Example
//! ```ignore
//! use liveops_blueprint::{export, EventDescriptor, ExportOptions};
//! use liveops_blueprint::{DirAssetSource, DirFileSink};
//!
//! let yaml = r#"
//! eventName: Neon Nights
//! eventHashtag: "#neon"
//! "#;
//!
//! let descriptor = EventDescriptor::from_yaml(yaml)?;
//! let assets = DirAssetSource::new("assets");
//! let mut sink = DirFileSink::new(".");
//! let filename = export(&descriptor, &ExportOptions::inlined(), &assets, &mut sink)?;
//! assert_eq!(filename, "event-neon-nights.html");
//! ```

pub mod blueprint;
pub mod descriptor;
pub mod error;
pub mod export;
pub mod preview;
pub mod tabs;
pub mod text;

// --- Core types ---
pub use descriptor::{EventDescriptor, FieldSource, FIELD_IDS};
pub use error::{BlueprintError, BlueprintResult};

// --- Rendering ---
pub use preview::{render_preview, PreviewSlot, PreviewSurface};
pub use text::{escape_html, lines_to_list_items, slugify};

// --- Export ---
pub use export::{
    export, inline_assets, AssetSource, DirAssetSource, DirFileSink, ExportOptions, FileSink,
    RUNTIME_ASSET, STYLESHEET_ASSET,
};

// --- Page behavior ---
pub use tabs::{blueprint_tab_group, NavState, PanelView, TabGroup};

/// Generate the full blueprint document for a descriptor.
pub fn generate_blueprint(descriptor: &EventDescriptor) -> String {
    blueprint::generate(descriptor)
}

/// The filename an export of this descriptor would produce.
pub fn export_filename(descriptor: &EventDescriptor) -> String {
    export::export_filename(descriptor)
}
