/// Event channel: EventChannel, ChannelCell, Subscription, dispatch.
pub mod channel;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Channel entity, dispatch statistics, owner cell, subscription guard.
pub use channel::{
    subscribe, ActionCallback, ChannelCell, ChannelStats, EventChannel, Subscription,
};
