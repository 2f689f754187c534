use thiserror::Error;

use crate::model::enums::UnknownVariant;

/// Internal issues indicating unexpected stored data or possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value no variant matches.
    #[error("Corrupt stored value: {0}")]
    UnknownVariant(#[from] UnknownVariant),

    /// A stored password hash is not in the expected format.
    #[error("Stored password hash for team member {member_id} is malformed")]
    MalformedPasswordHash { member_id: i32 },
}
