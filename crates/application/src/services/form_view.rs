//! Rendering contract for the form
//!
//! A [`FormView`] is a snapshot of everything the presentation layer
//! needs: control values, enabled/disabled flags and the standing
//! error. It holds no behavior and borrows nothing from the component.

use std::fmt::Write as _;

use domain::PriceTier;

/// Fixed placeholder shown in place of the filter text for sessions
/// without premium entitlement
pub const FILTER_PLACEHOLDER: &str = "Subscribe to MysteryPlus+ to use custom AI filters!";

/// Prompt shown in the location readback until coordinates arrive
pub const LOCATION_PROMPT: &str = "Please allow location access";

/// The AI filter control, as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Premium sessions see and edit the actual filter text
    Editable(String),
    /// Everyone else sees a fixed, disabled placeholder
    Locked(&'static str),
}

impl FilterField {
    /// The text currently displayed in the control
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Editable(text) => text,
            Self::Locked(placeholder) => placeholder,
        }
    }

    /// Whether the control accepts input
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Editable(_))
    }
}

/// Snapshot of the form for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Location readback: `"lat, lng"` or the allow-access prompt
    pub location_text: String,
    /// Styling flag: the form is highlighted while no location exists
    pub missing_location: bool,
    /// Distance slider value
    pub distance_km: u8,
    /// Selected price tier
    pub price: PriceTier,
    /// AI filter control
    pub filter_field: FilterField,
    /// The submit control is enabled only with a location and no
    /// pending submission
    pub submit_enabled: bool,
    /// All other interactive controls; disabled while submitting
    pub controls_enabled: bool,
    /// A submission is in flight
    pub loading: bool,
    /// Standing user-visible error, if any
    pub error: Option<String>,
}

impl FormView {
    /// Render the form as text, one control per line
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.missing_location {
            let _ = writeln!(out, "!! location required !!");
        }
        let _ = writeln!(out, "Location: {}", self.location_text);
        let _ = writeln!(out, "Distance: {} Kilometers", self.distance_km);
        let _ = write!(out, "Price:   ");
        for tier in PriceTier::ALL {
            if tier == self.price {
                let _ = write!(out, " [{tier}]");
            } else {
                let _ = write!(out, "  {tier} ");
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "MysteryPlus+ AI Filter: {}", self.filter_field.display_text());
        let submit = if self.loading {
            "Searching..."
        } else if self.submit_enabled {
            "[Go!]"
        } else {
            "[Go!] (disabled)"
        };
        let _ = writeln!(out, "{submit}");
        if let Some(ref error) = self.error {
            let _ = writeln!(out, "Error: {error}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> FormView {
        FormView {
            location_text: "44.669591, -63.613833".to_string(),
            missing_location: false,
            distance_km: 25,
            price: PriceTier::Any,
            filter_field: FilterField::Locked(FILTER_PLACEHOLDER),
            submit_enabled: true,
            controls_enabled: true,
            loading: false,
            error: None,
        }
    }

    #[test]
    fn locked_filter_shows_placeholder_and_rejects_edit() {
        let field = FilterField::Locked(FILTER_PLACEHOLDER);
        assert!(!field.is_editable());
        assert_eq!(field.display_text(), FILTER_PLACEHOLDER);
    }

    #[test]
    fn editable_filter_shows_text() {
        let field = FilterField::Editable("vegan ramen".to_string());
        assert!(field.is_editable());
        assert_eq!(field.display_text(), "vegan ramen");
    }

    #[test]
    fn render_includes_controls() {
        let rendered = sample_view().render();
        assert!(rendered.contains("Location: 44.669591, -63.613833"));
        assert!(rendered.contains("Distance: 25 Kilometers"));
        assert!(rendered.contains("[Any]"));
        assert!(rendered.contains(FILTER_PLACEHOLDER));
        assert!(rendered.contains("[Go!]"));
    }

    #[test]
    fn render_flags_missing_location() {
        let mut view = sample_view();
        view.missing_location = true;
        view.location_text = LOCATION_PROMPT.to_string();
        view.submit_enabled = false;

        let rendered = view.render();
        assert!(rendered.contains("location required"));
        assert!(rendered.contains(LOCATION_PROMPT));
        assert!(rendered.contains("(disabled)"));
    }

    #[test]
    fn render_shows_pending_submission() {
        let mut view = sample_view();
        view.loading = true;
        view.submit_enabled = false;
        view.controls_enabled = false;

        assert!(view.render().contains("Searching..."));
    }

    #[test]
    fn render_appends_error_line() {
        let mut view = sample_view();
        view.error = Some("Failed to fetch places".to_string());

        assert!(view.render().contains("Error: Failed to fetch places"));
    }
}
