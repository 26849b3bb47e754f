//! Wizard tabs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tab of the weapon wizard once a weapon exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardTab {
    #[default]
    Data,
    Geometry,
    Skin,
}

impl WizardTab {
    pub const ALL: [WizardTab; 3] = [WizardTab::Data, WizardTab::Geometry, WizardTab::Skin];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardTab::Data => "data",
            WizardTab::Geometry => "geometry",
            WizardTab::Skin => "skin",
        }
    }
}

impl fmt::Display for WizardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
