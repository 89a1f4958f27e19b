//! The outbound transport primitive available inside the embedded context.

/// Posts one serialized event message towards the host.
///
/// This is the only transport primitive the embedded context has: a
/// fire-and-forget string channel. There is no acknowledgement and no retry;
/// a failed or absent sink means the message is gone.
pub trait EventSink {
    /// Hands one wire message to the transport.
    fn post(&self, message: &str);
}
