// Service module exports
// Layout, event selection, overlap resolution and pointer lookup

pub mod event;
pub mod layout;
pub mod overlap;
pub mod position;
