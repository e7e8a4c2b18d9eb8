//! Newtype IDs for type-safe entity references.
//!
//! Entities in the table store are keyed by opaque strings (GUIDs for rows we
//! create, arbitrary text for imported ones). Use the `define_id!` macro to
//! create wrappers that prevent accidentally mixing IDs from different
//! entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `generate()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use marshal_checkin_core::define_id;
/// define_id!(MarshalId);
/// define_id!(LocationId);
///
/// let marshal_id = MarshalId::new("m-1");
/// let location_id = LocationId::new("m-1");
///
/// // These are different types, so this won't compile:
/// // let _: MarshalId = location_id;
/// assert_eq!(marshal_id.as_str(), location_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing key.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random (UUID v4) ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the underlying key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying key.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(EventId);
define_id!(AreaId);
define_id!(LocationId);
define_id!(MarshalId);
define_id!(PersonId);
define_id!(AssignmentId);
define_id!(EventRoleId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_key() {
        let id = MarshalId::new("marshal-42");
        assert_eq!(id.to_string(), "marshal-42");
    }

    #[test]
    fn test_generate_is_unique_uuid() {
        let a = AssignmentId::generate();
        let b = AssignmentId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_serde_transparent() {
        let id = AreaId::new("north");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"north\"");

        let parsed: AreaId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ordering_follows_key() {
        let mut ids = vec![LocationId::from("b"), LocationId::from("a")];
        ids.sort();
        assert_eq!(ids, vec![LocationId::from("a"), LocationId::from("b")]);
    }
}
