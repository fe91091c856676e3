//! User ID Value Object

use kernel::id::Id;

/// Marker for user-account IDs
pub struct UserMarker;

/// Identifies one user account
pub type UserId = Id<UserMarker>;
