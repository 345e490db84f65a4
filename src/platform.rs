//! Platform-specific button and modifier normalization.
//!
//! Raw hardware codes reported by the host event source are normalized to
//! canonical button ids before any preset lookup happens. The platform is
//! selected once at startup (from configuration or detection) and the
//! normalizer is a pure mapping after that; no OS branching leaks into
//! resolution or validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical, platform-independent button identifiers.
///
/// The discriminants match the raw button bit codes used by the host
/// toolkit on every supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CanonicalButton {
    /// Unrecognized button
    Unknown = 0,
    /// Primary button
    Left = 1,
    /// Secondary button
    Right = 2,
    /// Wheel click
    Middle = 4,
    /// Navigation back
    Back = 8,
    /// Navigation forward
    Forward = 16,
    /// First extra button (thumb button on most devices)
    Extra1 = 32,
    /// Second extra button
    Extra2 = 64,
    /// Third extra button
    Extra3 = 128,
}

impl CanonicalButton {
    /// Canonical string id for this button (e.g., "back", "thumb").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
            Self::Back => "back",
            Self::Forward => "forward",
            // Button 32 is the thumb button on MX Master class devices
            Self::Extra1 => "thumb",
            Self::Extra2 => "extra1",
            Self::Extra3 => "extra2",
        }
    }

    /// Maps a raw button code to a canonical button.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Left,
            2 => Self::Right,
            4 => Self::Middle,
            8 => Self::Back,
            16 => Self::Forward,
            32 => Self::Extra1,
            64 => Self::Extra2,
            128 => Self::Extra3,
            _ => Self::Unknown,
        }
    }
}

/// Supported host platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    MacOs,
    /// Linux (X11 or Wayland)
    #[default]
    Linux,
}

impl Platform {
    /// Detects the platform this build is running on.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }
}

// Modifier bit flags as reported by the host toolkit.
const MOD_SHIFT: u32 = 0x0200_0000;
const MOD_CTRL: u32 = 0x0400_0000;
const MOD_ALT: u32 = 0x0800_0000;
const MOD_META: u32 = 0x1000_0000;

/// Normalizes raw button and modifier codes for a selected platform.
#[derive(Debug, Clone, Copy)]
pub struct ButtonNormalizer {
    platform: Platform,
    swap_ctrl_meta: bool,
}

impl ButtonNormalizer {
    /// Creates a normalizer for a platform.
    ///
    /// `swap_ctrl_meta` only affects macOS, where the host reports the
    /// Command key as Ctrl and the Control key as Meta; swapping (the
    /// default) makes Command behave like Ctrl on the other platforms.
    #[must_use]
    pub const fn new(platform: Platform, swap_ctrl_meta: bool) -> Self {
        Self {
            platform,
            swap_ctrl_meta,
        }
    }

    /// The platform this normalizer was built for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Normalizes a raw button code to a canonical button.
    ///
    /// Button codes are identical across supported platforms; the
    /// per-platform differences live in modifier handling.
    #[must_use]
    pub const fn normalize_button(&self, raw: u32) -> CanonicalButton {
        CanonicalButton::from_raw(raw)
    }

    /// Normalizes a raw button code straight to a canonical button id.
    #[must_use]
    pub const fn button_id(&self, raw: u32) -> &'static str {
        CanonicalButton::from_raw(raw).id()
    }

    /// Normalizes raw modifier flags to canonical modifier names.
    #[must_use]
    pub fn normalize_modifiers(&self, raw: u32) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        if raw & MOD_SHIFT != 0 {
            result.insert("shift".to_string());
        }
        if raw & MOD_ALT != 0 {
            result.insert("alt".to_string());
        }

        let swap = self.platform == Platform::MacOs && self.swap_ctrl_meta;
        let (ctrl_bit, meta_bit) = if swap {
            // Host reports Command as Ctrl already; keep mapping stable and
            // swap only the un-swapped macOS layout below.
            (MOD_CTRL, MOD_META)
        } else if self.platform == Platform::MacOs {
            (MOD_META, MOD_CTRL)
        } else {
            (MOD_CTRL, MOD_META)
        };

        if raw & ctrl_bit != 0 {
            result.insert("ctrl".to_string());
        }
        if raw & meta_bit != 0 {
            result.insert("meta".to_string());
        }
        result
    }
}

impl Default for ButtonNormalizer {
    fn default() -> Self {
        Self::new(Platform::current(), true)
    }
}
