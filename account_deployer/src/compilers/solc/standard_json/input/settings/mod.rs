//!
//! The `solc --standard-json` input settings.
//!

pub mod optimizer;
pub mod selection;

use serde::Serialize;

use crate::config::solidity::profile::Profile;

use self::optimizer::Optimizer;
use self::selection::Selection;

///
/// The `solc --standard-json` input settings.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_selection: Option<Selection>,
    /// Whether to compile via IR. Only for `solc` >=0.8.13.
    #[serde(rename = "viaIR", skip_serializing_if = "Option::is_none")]
    pub via_ir: Option<bool>,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_selection: Selection, via_ir: bool, optimizer: Optimizer) -> Self {
        Self {
            output_selection: Some(output_selection),
            via_ir: if via_ir { Some(true) } else { None },
            optimizer,
        }
    }
}

impl From<&Profile> for Settings {
    fn from(profile: &Profile) -> Self {
        Self::new(
            Selection::new_required(),
            profile.via_ir,
            Optimizer::from(&profile.optimizer),
        )
    }
}
