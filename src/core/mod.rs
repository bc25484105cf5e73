//! Collaborators that sit in front of the store: validation before writes,
//! aggregate views over its list operations, attendance workflow and
//! operation-log rendering.

pub mod attendance;
pub mod log;
pub mod portal;
pub mod shift_view;
pub mod stats;
pub mod validate;
