//! Context-aware binding resolution.
//!
//! Given a physical button press and the currently active host context,
//! decide which action (if any) a preset binds it to. This is the hot path
//! of event handling: a pure lookup with no side effects, so the caller can
//! cheaply decide whether to consume or pass through the input event.

use crate::models::{ActionRef, Preset};

/// Resolves a button press against a preset.
///
/// Lookup order:
/// 1. `preset.context_mappings[context][button_id]` (exact-string,
///    case-sensitive context match, no wildcards or hierarchy);
/// 2. `preset.mappings[button_id]`;
/// 3. `None`: the caller must not consume the input event.
///
/// # Examples
///
/// ```
/// use mousebind::models::{ActionRef, Preset};
/// use mousebind::resolver::resolve;
///
/// let mut preset = Preset::new("Editing", "generic_5_button");
/// preset.set_mapping("back", ActionRef::new("edit_undo"), None);
/// preset.set_mapping("back", ActionRef::new("segment_previous"), Some("SegmentEditor"));
///
/// assert_eq!(resolve(&preset, "back", "SegmentEditor").unwrap().action, "segment_previous");
/// assert_eq!(resolve(&preset, "back", "Markups").unwrap().action, "edit_undo");
/// assert!(resolve(&preset, "thumb", "Markups").is_none());
/// ```
#[must_use]
pub fn resolve<'a>(preset: &'a Preset, button_id: &str, context: &str) -> Option<&'a ActionRef> {
    preset.mapping(button_id, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionRef;

    fn preset_with_override() -> Preset {
        let mut preset = Preset::new("Editing", "generic_5_button");
        preset.set_mapping("back", ActionRef::new("edit_undo"), None);
        preset.set_mapping(
            "back",
            ActionRef::new("segment_previous"),
            Some("SegmentEditor"),
        );
        preset
    }

    #[test]
    fn test_context_override_beats_default() {
        let preset = preset_with_override();
        assert_eq!(
            resolve(&preset, "back", "SegmentEditor").unwrap().action,
            "segment_previous"
        );
    }

    #[test]
    fn test_other_context_falls_back_to_default() {
        let preset = preset_with_override();
        assert_eq!(resolve(&preset, "back", "Markups").unwrap().action, "edit_undo");
    }

    #[test]
    fn test_unmapped_button_resolves_to_none() {
        let preset = preset_with_override();
        assert!(resolve(&preset, "thumb", "SegmentEditor").is_none());
        assert!(resolve(&preset, "thumb", "").is_none());
    }

    #[test]
    fn test_context_match_is_case_sensitive() {
        let preset = preset_with_override();
        // "segmenteditor" is a different context; only the default applies
        assert_eq!(
            resolve(&preset, "back", "segmenteditor").unwrap().action,
            "edit_undo"
        );
    }

    #[test]
    fn test_context_only_mapping_has_no_default() {
        let mut preset = Preset::new("Narrow", "generic_5_button");
        preset.set_mapping("forward", ActionRef::new("segment_next"), Some("SegmentEditor"));

        assert_eq!(
            resolve(&preset, "forward", "SegmentEditor").unwrap().action,
            "segment_next"
        );
        assert!(resolve(&preset, "forward", "Markups").is_none());
    }

    #[test]
    fn test_empty_preset_resolves_nothing() {
        let preset = Preset::new("Empty", "generic_5_button");
        for button in ["left", "right", "middle", "back", "forward", "thumb"] {
            assert!(resolve(&preset, button, "AnyContext").is_none());
        }
    }
}
