//! Shared constants for error messages and seed data

/// Error message for an unknown activity id
pub const ERR_ACTIVITY_NOT_FOUND: &str = "Activity not found";

/// Error message when a signup would exceed max_participants
pub const ERR_ACTIVITY_FULL: &str = "Activity is full";

/// Error message for a duplicate signup attempt
pub const ERR_ALREADY_SIGNED_UP: &str = "Student is already signed up";

/// Error message for unregistering without a live signup
pub const ERR_NOT_SIGNED_UP: &str = "Student is not signed up for this activity";
