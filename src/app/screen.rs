// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Rewards,
    Catalog,
    Studio,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Rewards, Screen::Catalog, Screen::Studio];

    /// i18n key of the navbar tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Rewards => "navbar-rewards",
            Screen::Catalog => "navbar-catalog",
            Screen::Studio => "navbar-studio",
        }
    }

    /// Stable name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Rewards => "rewards",
            Screen::Catalog => "catalog",
            Screen::Studio => "studio",
        }
    }
}
