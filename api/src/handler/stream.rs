use std::{convert::Infallible, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use kernel::model::event::StreamEvent;
use registry::AppRegistry;
use tokio::sync::broadcast;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);

fn sse_from(
    rx: broadcast::Receiver<StreamEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(rx).filter_map(|event| match event {
        // A serialization failure drops the event rather than the stream.
        Ok(event) => Event::default().json_data(&event).ok().map(Ok),
        // Lagged receivers skip ahead; the next events still arrive.
        Err(_) => None,
    });

    // Comment-line heartbeats keep idle proxies from closing the stream.
    Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
}

pub async fn stream_bookings(
    State(registry): State<AppRegistry>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    sse_from(registry.event_hub().subscribe_bookings())
}

pub async fn stream_complaints(
    State(registry): State<AppRegistry>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    sse_from(registry.event_hub().subscribe_complaints())
}
