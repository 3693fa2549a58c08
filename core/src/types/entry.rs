use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MAX_NAME_LENGTH: usize = 256;

/// User-supplied display name of a registered application.
///
/// Non-empty after trimming; uniqueness is deliberately not enforced.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct AppName(String);

/// Process-local stable identifier of a catalog entry.
///
/// Assigned by the catalog on load/add and never persisted; the on-disk
/// document stays `{name, path}` and external addressing stays index-based.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntryId(pub(crate) u64);

/// One registered application. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: AppName,
    /// Path to an executable or openable resource. Not validated to exist.
    pub path: PathBuf,
    #[serde(skip)]
    pub id: EntryId,
}
