/// Notification interface between the feature store and its consumers.
///
/// The store calls [`notify`](Messenger::notify) after every observable state
/// change (committed or removed features, error slot updates). Consumers are
/// expected to re-read the store through its synchronous accessors; no state
/// is carried by the notification itself.
pub trait Messenger {
    /// Called after the store's observable state changed.
    fn notify(&self);
}
