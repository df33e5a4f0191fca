//! The Event Descriptor — the flat record of all planning fields for one
//! event — and the form-reading seam that produces it.

use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, BlueprintResult};

/// The fixed set of form field identifiers, in form order.
///
/// These match the serde names of [`EventDescriptor`], so a descriptor can
/// be rebuilt from any host form that exposes values under these ids.
pub const FIELD_IDS: &[&str] = &[
    "eventName",
    "eventTheme",
    "eventDates",
    "eventHashtag",
    "coreAssets",
    "primaryGoals",
    "targetCohorts",
    "primaryKpis",
    "secondaryKpis",
    "timelinePre",
    "timelineDuring",
    "timelinePost",
    "roomFormats",
    "specialItems",
    "creatorLogic",
    "gifterLogic",
    "antiAbuse",
    "growthTargets",
    "monetisationTargets",
    "creatorTargets",
    "crmNotes",
];

/// A source of raw field values, typically the host page's form.
///
/// Implementations return `None` for fields they do not have; reading
/// never fails.
pub trait FieldSource {
    fn value(&self, id: &str) -> Option<String>;
}

/// All planning fields for one event.
///
/// Every field is an optional free-text string; an empty string means
/// "not provided" and is replaced by a per-field placeholder at render
/// time. The descriptor carries no identity and is rebuilt fresh for
/// every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDescriptor {
    pub event_name: String,
    pub event_theme: String,
    pub event_dates: String,
    pub event_hashtag: String,
    pub core_assets: String,
    pub primary_goals: String,
    pub target_cohorts: String,
    pub primary_kpis: String,
    pub secondary_kpis: String,
    pub timeline_pre: String,
    pub timeline_during: String,
    pub timeline_post: String,
    pub room_formats: String,
    pub special_items: String,
    pub creator_logic: String,
    pub gifter_logic: String,
    pub anti_abuse: String,
    pub growth_targets: String,
    pub monetisation_targets: String,
    pub creator_targets: String,
    pub crm_notes: String,
}

impl EventDescriptor {
    /// Read every known field from a form source, trimming values and
    /// mapping missing fields to empty strings. Never fails.
    pub fn from_source(source: &impl FieldSource) -> Self {
        let get = |id: &str| {
            source
                .value(id)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            event_name: get("eventName"),
            event_theme: get("eventTheme"),
            event_dates: get("eventDates"),
            event_hashtag: get("eventHashtag"),
            core_assets: get("coreAssets"),
            primary_goals: get("primaryGoals"),
            target_cohorts: get("targetCohorts"),
            primary_kpis: get("primaryKpis"),
            secondary_kpis: get("secondaryKpis"),
            timeline_pre: get("timelinePre"),
            timeline_during: get("timelineDuring"),
            timeline_post: get("timelinePost"),
            room_formats: get("roomFormats"),
            special_items: get("specialItems"),
            creator_logic: get("creatorLogic"),
            gifter_logic: get("gifterLogic"),
            anti_abuse: get("antiAbuse"),
            growth_targets: get("growthTargets"),
            monetisation_targets: get("monetisationTargets"),
            creator_targets: get("creatorTargets"),
            crm_notes: get("crmNotes"),
        }
    }

    /// Parse a descriptor from YAML. Every field is optional; an empty
    /// document yields the all-default descriptor.
    pub fn from_yaml(yaml: &str) -> BlueprintResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| BlueprintError::DescriptorParse(e.to_string()))
    }

    /// True when the descriptor has a usable event name — the one field
    /// the export guard requires.
    pub fn has_name(&self) -> bool {
        !self.event_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    impl<'a> FieldSource for HashMap<&'a str, &'a str> {
        fn value(&self, id: &str) -> Option<String> {
            self.get(id).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_from_source_trims_and_defaults() {
        let mut form = HashMap::new();
        form.insert("eventName", "  Neon Nights  ");
        form.insert("eventHashtag", "#neon");

        let descriptor = EventDescriptor::from_source(&form);
        assert_eq!(descriptor.event_name, "Neon Nights");
        assert_eq!(descriptor.event_hashtag, "#neon");
        assert_eq!(descriptor.event_theme, "");
        assert_eq!(descriptor.crm_notes, "");
    }

    #[test]
    fn test_field_ids_cover_every_field() {
        // A source that answers every id proves the reader consumes the
        // whole FIELD_IDS set and nothing else.
        struct Echo;
        impl FieldSource for Echo {
            fn value(&self, id: &str) -> Option<String> {
                assert!(FIELD_IDS.contains(&id), "unknown field id '{}'", id);
                Some(id.to_string())
            }
        }

        let descriptor = EventDescriptor::from_source(&Echo);
        assert_eq!(descriptor.event_name, "eventName");
        assert_eq!(descriptor.monetisation_targets, "monetisationTargets");
        assert_eq!(FIELD_IDS.len(), 21);
    }

    #[test]
    fn test_from_yaml_camel_case_keys() {
        let yaml = "eventName: Neon Nights\nprimaryKpis: |\n  DAU\n  Gifting\n";
        let descriptor = EventDescriptor::from_yaml(yaml).unwrap();
        assert_eq!(descriptor.event_name, "Neon Nights");
        assert_eq!(descriptor.primary_kpis, "DAU\nGifting\n");
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        assert_eq!(EventDescriptor::from_yaml("").unwrap(), EventDescriptor::default());
        assert_eq!(EventDescriptor::from_yaml("  \n").unwrap(), EventDescriptor::default());
    }

    #[test]
    fn test_from_yaml_rejects_malformed_input() {
        let result = EventDescriptor::from_yaml("eventName: [unclosed");
        assert!(matches!(result, Err(BlueprintError::DescriptorParse(_))));
    }

    #[test]
    fn test_has_name() {
        let mut descriptor = EventDescriptor::default();
        assert!(!descriptor.has_name());
        descriptor.event_name = "   ".to_string();
        assert!(!descriptor.has_name());
        descriptor.event_name = "Neon Nights".to_string();
        assert!(descriptor.has_name());
    }
}
