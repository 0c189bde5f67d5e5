use kernel::model::event::StreamEvent;
use tokio::sync::broadcast;

/// In-process fan-out: one lossy broadcast channel per push stream. A send
/// with no listeners, or past a lagging listener's buffer, drops the event —
/// slow subscribers lose updates rather than applying backpressure.
#[derive(Clone)]
pub struct EventHub {
    bookings: broadcast::Sender<StreamEvent>,
    complaints: broadcast::Sender<StreamEvent>,
}

impl EventHub {
    pub fn new(capacity: usize) -> Self {
        let (bookings, _) = broadcast::channel(capacity);
        let (complaints, _) = broadcast::channel(capacity);
        Self {
            bookings,
            complaints,
        }
    }

    pub fn publish_booking(&self, event: StreamEvent) {
        let _ = self.bookings.send(event);
    }

    pub fn publish_complaint(&self, event: StreamEvent) {
        let _ = self.complaints.send(event);
    }

    pub fn subscribe_bookings(&self) -> broadcast::Receiver<StreamEvent> {
        self.bookings.subscribe()
    }

    pub fn subscribe_complaints(&self) -> broadcast::Receiver<StreamEvent> {
        self.complaints.subscribe()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::event::{BookingKind, ChangeOp};

    #[tokio::test]
    async fn subscribers_receive_published_events() -> anyhow::Result<()> {
        let hub = EventHub::default();
        let mut rx = hub.subscribe_bookings();

        let event = StreamEvent::booking(BookingKind::Pending, ChangeOp::Insert, "b-1");
        hub.publish_booking(event.clone());

        assert_eq!(rx.recv().await?, event);
        Ok(())
    }

    #[tokio::test]
    async fn channels_are_independent() -> anyhow::Result<()> {
        let hub = EventHub::default();
        let mut bookings = hub.subscribe_bookings();
        let mut complaints = hub.subscribe_complaints();

        hub.publish_complaint(StreamEvent::complaint(ChangeOp::Delete, "c-1"));

        assert_eq!(
            complaints.recv().await?,
            StreamEvent::complaint(ChangeOp::Delete, "c-1")
        );
        assert!(bookings.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let hub = EventHub::default();
        hub.publish_booking(StreamEvent::booking(
            BookingKind::Approved,
            ChangeOp::Update,
            "b-2",
        ));
    }
}
