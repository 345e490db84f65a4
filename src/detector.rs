//! Interactive button detection for unknown mice.
//!
//! When no bundled profile matches the user's device, the detector walks
//! them through pressing each button, captures the raw hardware codes in
//! press order, and can generate a custom profile from the result.

use crate::models::{MouseButton, MouseFeatures, MouseProfile};
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Suggested canonical ids in the order buttons are usually pressed.
const SUGGESTED_BUTTONS: &[(&str, &str)] = &[
    ("left", "Left Click"),
    ("right", "Right Click"),
    ("middle", "Middle Click"),
    ("back", "Back"),
    ("forward", "Forward"),
    ("thumb", "Thumb Button"),
    ("extra1", "Extra Button 1"),
    ("extra2", "Extra Button 2"),
];

/// A button captured during detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedButton {
    /// Raw hardware code reported by the host
    pub hardware_code: u32,
    /// Suggested canonical id based on press order
    pub suggested_id: String,
    /// Suggested display name
    pub suggested_name: String,
    /// Number of times the button was pressed
    pub press_count: u32,
}

/// State of a detection session.
#[derive(Debug, Clone, Default)]
pub struct DetectionSession {
    /// Captured buttons keyed by hardware code
    pub buttons: HashMap<u32, DetectedButton>,
    /// Current instruction shown to the user
    pub current_prompt: String,
    /// Number of distinct buttons captured so far
    pub step: usize,
    /// Expected number of buttons
    pub total_steps: usize,
    /// Whether detection has finished
    pub completed: bool,
}

/// Guides a user through pressing each button on an unknown mouse.
#[derive(Debug, Default)]
pub struct ButtonDetector {
    session: Option<DetectionSession>,
    detection_order: Vec<u32>,
}

impl ButtonDetector {
    /// Creates an idle detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new detection session expecting the given button count.
    pub fn start(&mut self, expected_buttons: usize) -> &DetectionSession {
        tracing::info!(expected = expected_buttons, "started button detection");
        self.detection_order.clear();
        self.session.insert(DetectionSession {
            total_steps: expected_buttons,
            current_prompt: "Press button 1 (usually Left Click)...".to_string(),
            ..DetectionSession::default()
        })
    }

    /// Stops detection, returning whatever was captured.
    pub fn stop(&mut self) -> Option<DetectionSession> {
        let session = self.session.take();
        self.detection_order.clear();
        if let Some(s) = &session {
            tracing::info!(captured = s.buttons.len(), "detection stopped");
        }
        session
    }

    /// Handles a button press. Returns false if no session is active.
    ///
    /// Repeat presses of an already captured code bump its press count;
    /// a new code is captured with a suggested id based on press order.
    pub fn press(&mut self, hardware_code: u32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        if let Some(existing) = session.buttons.get_mut(&hardware_code) {
            existing.press_count += 1;
            return true;
        }

        let step = session.buttons.len();
        let (suggested_id, suggested_name) = SUGGESTED_BUTTONS.get(step).map_or_else(
            || (format!("button{step}"), format!("Button {step}")),
            |(id, name)| ((*id).to_string(), (*name).to_string()),
        );

        tracing::info!(code = hardware_code, id = %suggested_id, "detected button");
        session.buttons.insert(
            hardware_code,
            DetectedButton {
                hardware_code,
                suggested_id,
                suggested_name,
                press_count: 1,
            },
        );
        self.detection_order.push(hardware_code);
        session.step = step + 1;

        if session.step < session.total_steps {
            let next_name = SUGGESTED_BUTTONS
                .get(session.step)
                .map_or_else(|| format!("Button {}", session.step + 1), |(_, n)| (*n).to_string());
            session.current_prompt = format!("Press button {} ({next_name})...", session.step + 1);
        } else {
            session.current_prompt = "Detection complete!".to_string();
            session.completed = true;
        }

        true
    }

    /// Marks the session complete without waiting for the expected count.
    pub fn finalize(&mut self) -> Option<&DetectionSession> {
        let session = self.session.as_mut()?;
        session.completed = true;
        session.current_prompt = "Detection complete!".to_string();
        Some(session)
    }

    /// The current session, if detection is running or finished.
    #[must_use]
    pub fn session(&self) -> Option<&DetectionSession> {
        self.session.as_ref()
    }

    /// Returns true while a session is active and incomplete.
    #[must_use]
    pub fn is_detecting(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.completed)
    }

    /// Generates a mouse profile from the captured buttons.
    ///
    /// Buttons are emitted in detection order; left and right stay
    /// non-remappable so a preset cannot take the primary buttons away.
    pub fn generate_profile(
        &self,
        profile_id: impl Into<String>,
        profile_name: impl Into<String>,
        vendor: impl Into<String>,
    ) -> Result<MouseProfile> {
        let Some(session) = &self.session else {
            bail!("No detection session active");
        };
        if session.buttons.is_empty() {
            bail!("No buttons detected");
        }

        let buttons = self
            .detection_order
            .iter()
            .filter_map(|code| session.buttons.get(code))
            .map(|detected| {
                let mut button = MouseButton::new(
                    detected.suggested_id.clone(),
                    detected.suggested_name.clone(),
                    detected.hardware_code,
                );
                if matches!(detected.suggested_id.as_str(), "left" | "right") {
                    button = button.fixed();
                }
                button
            })
            .collect();

        Ok(MouseProfile {
            id: profile_id.into(),
            name: profile_name.into(),
            vendor: vendor.into(),
            vendor_id: "0x0000".to_string(),
            product_ids: vec![],
            buttons,
            features: MouseFeatures::default(),
        })
    }
}
