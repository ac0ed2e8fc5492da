//! # Assemblies
//!
//! Stiffened panels and the transverse sections built from them.
//!
//! ## Structure
//!
//! ```text
//! TransverseSection
//! └── panels: BTreeMap<PanelId, StiffenedPanel>
//!     ├── plating: FlatPlate
//!     └── stiffeners: BTreeMap<StiffenerId, Stiffener>
//! ```
//!
//! Both levels keep their members in id order and hold a geometry that is
//! rebuilt from the members after every structural change. Members edited
//! through a `*_mut` accessor are only picked up by the next `update()`;
//! the `edit_*` closures rebuild automatically.
//!
//! ## Ids
//!
//! Ids are small integers. Callers may choose them; otherwise they are
//! assigned from 1 upwards, skipping any already taken.

pub mod panel;
pub mod section;

pub use panel::StiffenedPanel;
pub use section::TransverseSection;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{SectionError, SectionResult};

/// Defines a `u32` id newtype with ordering, serde and display.
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[doc = concat!("Key of a ", $entity, " within its parent assembly")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const ENTITY: &'static str = $entity;
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                $name(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(StiffenerId, "stiffener");
define_id!(PanelId, "panel");

/// Next free id after `counter`, advancing the counter past it.
pub(crate) fn allocate_id<K, V>(counter: &mut u32, taken: &BTreeMap<K, V>) -> SectionResult<K>
where
    K: Ord + From<u32>,
{
    loop {
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| SectionError::configuration("id space exhausted"))?;
        let candidate = K::from(*counter);
        if !taken.contains_key(&candidate) {
            return Ok(candidate);
        }
    }
}

/// Where a panel sits in the hull, for listings and the assessment layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Deck,
    SideShell,
    Bilge,
    Bottom,
    Bulkhead,
    Girder,
    Other,
}

impl PanelKind {
    pub const ALL: [PanelKind; 7] = [
        PanelKind::Deck,
        PanelKind::SideShell,
        PanelKind::Bilge,
        PanelKind::Bottom,
        PanelKind::Bulkhead,
        PanelKind::Girder,
        PanelKind::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Deck => "Deck",
            PanelKind::SideShell => "Side shell",
            PanelKind::Bilge => "Bilge",
            PanelKind::Bottom => "Bottom",
            PanelKind::Bulkhead => "Bulkhead",
            PanelKind::Girder => "Girder",
            PanelKind::Other => "Other",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
