use kernel::model::event::StreamEvent;
use shared::error::{AppError, AppResult};
use sqlx::postgres::PgListener;

use crate::{database::ConnectionPool, event::EventHub};

const BOOKING_CHANNEL: &str = "booking_events";
const COMPLAINT_CHANNEL: &str = "complaint_events";

/// Re-publishes storage-level row changes into the fan-out hub, driven by
/// the NOTIFY triggers shipped with the migrations. Strictly an enhancement:
/// when this cannot start, the push streams still carry the events the
/// handlers publish themselves.
pub async fn run_change_feed(db: &ConnectionPool, hub: EventHub) -> AppResult<()> {
    let mut listener = PgListener::connect_with(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
    listener
        .listen_all([BOOKING_CHANNEL, COMPLAINT_CHANNEL])
        .await
        .map_err(AppError::SpecificOperationError)?;

    loop {
        let notification = listener
            .recv()
            .await
            .map_err(AppError::SpecificOperationError)?;

        match serde_json::from_str::<StreamEvent>(notification.payload()) {
            Ok(event) => match notification.channel() {
                BOOKING_CHANNEL => hub.publish_booking(event),
                _ => hub.publish_complaint(event),
            },
            Err(e) => {
                tracing::warn!(
                    payload = notification.payload(),
                    error = %e,
                    "Ignoring malformed change-feed payload"
                );
            }
        }
    }
}
