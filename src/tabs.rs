//! Tab and mobile-nav state, modeled as explicit values with pure
//! transitions. The display layer applies a state through [`PanelView`];
//! nothing here touches a real page.

/// A set of mutually exclusive content panels. Exactly one panel is
/// active at any time; the first panel is active initially, matching the
/// markup convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    panels: Vec<String>,
    active: usize,
}

impl TabGroup {
    pub fn new<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: panels.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// Transition for a click on the button targeting `target`.
    ///
    /// Deactivates everything else and activates the matching panel. An
    /// unknown target leaves the state unchanged, so the one-active-panel
    /// invariant always holds.
    pub fn activate(&self, target: &str) -> TabGroup {
        match self.panels.iter().position(|p| p == target) {
            Some(index) => TabGroup {
                panels: self.panels.clone(),
                active: index,
            },
            None => self.clone(),
        }
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.panels.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_panel() == Some(id)
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }
}

/// Mobile nav state: a single open/closed flag flipped on each click of
/// the toggle control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggled(self) -> NavState {
        NavState { open: !self.open }
    }
}

/// Display abstraction the interface layer implements to reflect tab and
/// nav state, e.g. by swapping `active`/`open` classes.
pub trait PanelView {
    fn set_active_panel(&mut self, id: &str);
    fn set_nav_open(&mut self, open: bool);
}

/// Push a tab group's state to the display.
pub fn apply(group: &TabGroup, view: &mut impl PanelView) {
    if let Some(panel) = group.active_panel() {
        view.set_active_panel(panel);
    }
}

/// Push the nav state to the display.
pub fn apply_nav(nav: &NavState, view: &mut impl PanelView) {
    view.set_nav_open(nav.open);
}

/// The tab group of a generated blueprint page, overview first.
pub fn blueprint_tab_group() -> TabGroup {
    TabGroup::new(["overview", "mechanics", "pnl", "crm", "creative"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_panel_active_initially() {
        let group = blueprint_tab_group();
        assert_eq!(group.active_panel(), Some("overview"));
        assert!(group.is_active("overview"));
        assert!(!group.is_active("mechanics"));
    }

    #[test]
    fn test_activate_switches_exactly_one_panel() {
        let group = blueprint_tab_group().activate("mechanics");
        assert_eq!(group.active_panel(), Some("mechanics"));
        let active_count = group
            .panels()
            .iter()
            .filter(|p| group.is_active(p))
            .count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_activate_is_independent_of_prior_state() {
        let from_first = blueprint_tab_group().activate("pnl");
        let from_other = blueprint_tab_group().activate("creative").activate("pnl");
        assert_eq!(from_first, from_other);
    }

    #[test]
    fn test_activate_unknown_target_is_noop() {
        let group = blueprint_tab_group().activate("mechanics");
        assert_eq!(group.activate("missing"), group);
    }

    #[test]
    fn test_nav_toggle_flips_each_click() {
        let nav = NavState::default();
        assert!(!nav.open);
        assert!(nav.toggled().open);
        assert!(!nav.toggled().toggled().open);
    }

    #[test]
    fn test_apply_pushes_state_to_view() {
        #[derive(Default)]
        struct Recorded {
            panel: Option<String>,
            nav_open: Option<bool>,
        }
        impl PanelView for Recorded {
            fn set_active_panel(&mut self, id: &str) {
                self.panel = Some(id.to_string());
            }
            fn set_nav_open(&mut self, open: bool) {
                self.nav_open = Some(open);
            }
        }

        let mut view = Recorded::default();
        apply(&blueprint_tab_group().activate("crm"), &mut view);
        apply_nav(&NavState { open: true }, &mut view);
        assert_eq!(view.panel.as_deref(), Some("crm"));
        assert_eq!(view.nav_open, Some(true));
    }
}
