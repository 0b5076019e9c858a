// Apply-channel classification and application tracking. Creating an
// application is the only state transition this service performs; actual
// submission (queued → submitted/failed) belongs to the downstream
// submission executor.

pub mod channel;
pub mod handlers;
pub mod tracker;
