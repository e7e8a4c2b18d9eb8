//! Contact visibility audit.
//!
//! Shows every marshal in an event exported as a snapshot, with contact
//! details redacted the way the API would redact them for the given person.
//!
//! # Usage
//!
//! ```bash
//! checkin contacts --snapshot event.json --person p-123
//!
//! # Act as a specific marshal record
//! checkin contacts --snapshot event.json --person p-123 --marshal m-9
//! ```

use std::path::Path;

use marshal_checkin_core::{MarshalId, PersonId};
use tracing::info;

use super::{CommandError, load_snapshot, print_json};

/// Print the marshals `person_id` can see, redacted.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub async fn audit(
    snapshot_file: &Path,
    person_id: PersonId,
    marshal_id: Option<MarshalId>,
) -> Result<(), CommandError> {
    let snapshot = load_snapshot(snapshot_file).await?;
    let claims = snapshot.claims_for(person_id, marshal_id);

    let contacts = snapshot.visible_contacts(&claims);
    let visible = contacts.iter().filter(|c| c.contact_visible).count();
    let modifiable = contacts.iter().filter(|c| c.can_modify).count();
    info!(
        person_id = %claims.person_id,
        marshals = contacts.len(),
        visible,
        modifiable,
        "Resolved contact permissions"
    );

    print_json(&contacts)
}
