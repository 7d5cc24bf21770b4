//! Field-selection policies for structural equality
//!
//! The policy is declared once per type and fixed: a type compares all
//! of its fields, an explicit allow-list, or everything except an
//! explicit deny-list. The enum makes declaring both lists at once
//! unrepresentable.

use crate::error::{Error, Result};

/// Which fields of a record participate in equality comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqPolicy {
    /// Compare every field
    All,

    /// Compare only the listed fields
    Include(&'static [&'static str]),

    /// Compare every field except the listed ones
    Exclude(&'static [&'static str]),
}

impl EqPolicy {
    /// Resolve the field names to compare for a record type
    ///
    /// `fields` is the type's full field list. Any name explicitly
    /// listed in the policy that is not one of `fields` fails with
    /// [`Error::FieldNotFound`] rather than being skipped.
    pub fn select(
        &self,
        fields: &'static [&'static str],
        type_name: &'static str,
    ) -> Result<Vec<&'static str>> {
        match self {
            EqPolicy::All => Ok(fields.to_vec()),
            EqPolicy::Include(listed) => {
                for name in listed.iter().copied() {
                    if !fields.contains(&name) {
                        return Err(Error::FieldNotFound {
                            type_name,
                            field: name,
                        });
                    }
                }
                Ok(listed.to_vec())
            }
            EqPolicy::Exclude(listed) => {
                for name in listed.iter().copied() {
                    if !fields.contains(&name) {
                        return Err(Error::FieldNotFound {
                            type_name,
                            field: name,
                        });
                    }
                }
                Ok(fields
                    .iter()
                    .copied()
                    .filter(|field| !listed.contains(field))
                    .collect())
            }
        }
    }
}
