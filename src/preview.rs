//! The live preview: projects a subset of the descriptor onto a display
//! surface, using the same defaulting and escaping rules as the full
//! generator.

use crate::descriptor::EventDescriptor;
use crate::text::{escape_html, lines_to_list_items, slugify};

// Preview-specific placeholders. The preview nudges the author, so its
// defaults differ from the generated page's copy.
pub const PREVIEW_DEFAULT_NAME: &str = "Event name not set";
pub const PREVIEW_DEFAULT_DATES: &str = "Dates not set";
pub const PREVIEW_DEFAULT_HASHTAG: &str = "#hashtag";
pub const PREVIEW_DEFAULT_THEME: &str = "Describe the event theme";
pub const PREVIEW_DEFAULT_GOALS: &str =
    "Add primary goals to make this blueprint useful for Growth, Product and CRM.";
const PREVIEW_FALLBACK_PRIMARY_KPIS: &str = "<li>Add primary KPIs</li>";
const PREVIEW_FALLBACK_SECONDARY_KPIS: &str = "<li>Add secondary KPIs</li>";

/// The preview surfaces a host page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewSlot {
    EventName,
    Meta,
    Goals,
    PrimaryKpis,
    SecondaryKpis,
    FileName,
}

/// Display abstraction for the preview panel.
///
/// `set_text` carries plain text, `set_markup` carries pre-sanitized HTML
/// fragments. An implementation with no element for a slot ignores the
/// call; the remaining slots still update.
pub trait PreviewSurface {
    fn set_text(&mut self, slot: PreviewSlot, text: &str);
    fn set_markup(&mut self, slot: PreviewSlot, html: &str);
}

/// The download filename a descriptor would produce, `event-<slug>.html`.
pub fn preview_filename(display_name: &str) -> String {
    format!("event-{}.html", slugify(display_name))
}

/// Push the descriptor's preview projection onto a surface.
pub fn render_preview(descriptor: &EventDescriptor, surface: &mut impl PreviewSurface) {
    let name = non_empty_or(&descriptor.event_name, PREVIEW_DEFAULT_NAME);
    let dates = non_empty_or(&descriptor.event_dates, PREVIEW_DEFAULT_DATES);
    let hashtag = non_empty_or(&descriptor.event_hashtag, PREVIEW_DEFAULT_HASHTAG);
    let theme = non_empty_or(&descriptor.event_theme, PREVIEW_DEFAULT_THEME);
    let goals = non_empty_or(&descriptor.primary_goals, PREVIEW_DEFAULT_GOALS);

    surface.set_text(PreviewSlot::EventName, name);
    surface.set_markup(
        PreviewSlot::Meta,
        &format!(
            "{} &middot; {} &middot; {}",
            escape_html(dates),
            escape_html(theme),
            escape_html(hashtag)
        ),
    );
    surface.set_text(PreviewSlot::Goals, goals);

    let primary = lines_to_list_items(&descriptor.primary_kpis);
    surface.set_markup(
        PreviewSlot::PrimaryKpis,
        if primary.is_empty() { PREVIEW_FALLBACK_PRIMARY_KPIS } else { &primary },
    );
    let secondary = lines_to_list_items(&descriptor.secondary_kpis);
    surface.set_markup(
        PreviewSlot::SecondaryKpis,
        if secondary.is_empty() { PREVIEW_FALLBACK_SECONDARY_KPIS } else { &secondary },
    );

    // The filename tracks the displayed name, defaulted or not.
    surface.set_text(PreviewSlot::FileName, &preview_filename(name));
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
