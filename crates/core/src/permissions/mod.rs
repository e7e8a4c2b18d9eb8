//! Who may see and edit which marshals.
//!
//! # Modules
//!
//! - [`claims`] - the caller's identity and role grants for one event
//! - [`resolver`] - computes [`ContactPermissions`] from an event snapshot

pub mod claims;
pub mod resolver;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use claims::{RoleGrant, UserClaims};
pub use resolver::{area_lead_marshals, get_contact_permissions};

use crate::models::Marshal;
use crate::types::MarshalId;

/// The result of resolving a caller's contact permissions.
///
/// When the blanket flags are false, access is limited to the explicit ID
/// sets. Absence from a set means no access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPermissions {
    pub can_view_all: bool,
    pub can_modify_all: bool,
    pub viewable_marshal_ids: BTreeSet<MarshalId>,
    pub modifiable_marshal_ids: BTreeSet<MarshalId>,
}

impl ContactPermissions {
    /// Unrestricted access (event admins).
    #[must_use]
    pub const fn all() -> Self {
        Self {
            can_view_all: true,
            can_modify_all: true,
            viewable_marshal_ids: BTreeSet::new(),
            modifiable_marshal_ids: BTreeSet::new(),
        }
    }

    /// No access to anyone.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            can_view_all: false,
            can_modify_all: false,
            viewable_marshal_ids: BTreeSet::new(),
            modifiable_marshal_ids: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn can_view_contact_details(&self, marshal_id: &MarshalId) -> bool {
        self.can_view_all || self.viewable_marshal_ids.contains(marshal_id)
    }

    #[must_use]
    pub fn can_modify_marshal(&self, marshal_id: &MarshalId) -> bool {
        self.can_modify_all || self.modifiable_marshal_ids.contains(marshal_id)
    }

    /// The view of `marshal` this caller is allowed to receive.
    ///
    /// Names are always visible (they appear on rotas); email and phone are
    /// removed unless the caller can view contact details.
    #[must_use]
    pub fn redact(&self, marshal: &Marshal) -> MarshalContact {
        let contact_visible = self.can_view_contact_details(&marshal.id);
        MarshalContact {
            id: marshal.id.clone(),
            name: marshal.name.clone(),
            email: marshal.email.clone().filter(|_| contact_visible),
            phone_number: marshal.phone_number.clone().filter(|_| contact_visible),
            contact_visible,
            can_modify: self.can_modify_marshal(&marshal.id),
        }
    }
}

/// A marshal as returned to a particular caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarshalContact {
    pub id: MarshalId,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Whether contact fields were visible to the caller.
    pub contact_visible: bool,
    pub can_modify: bool,
}
