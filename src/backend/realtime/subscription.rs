/**
 * Trip Event Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for `GET /api/trips/{trip_id}/events`. One connection bridges one client
 * to one trip's event channel.
 *
 * # Server-Sent Events (SSE)
 *
 * The stream is one-way, server to client. Each published `TripEvent`
 * becomes exactly one SSE frame: the frame's event name is the kind tag
 * (`item_added`, `item_checked`, ...) and its data is the serialized event.
 * Frames are flushed individually; two events are never merged.
 *
 * # Authorization
 *
 * The subscription is authorized exactly like a mutation: the caller must
 * be the trip's creator or a listed collaborator. Failures reject the
 * connection with a status code before any streaming begins.
 *
 * # Connection Management
 *
 * - axum's keep-alive mechanism injects comment lines to hold the
 *   connection open between events
 * - A lagged receiver skips its own lost events and keeps streaming
 * - Channel closure (the trip was completed or deleted) ends the stream
 *   cleanly; so does client disconnect, which drops the receiver and
 *   shrinks the channel's subscriber count. Neither is an error.
 */

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    Extension,
};
use futures_util::stream;
use uuid::Uuid;

use crate::backend::error::AppError;
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::backend::trips::{access, db};

/// Handle trip event subscription (GET /api/trips/{trip_id}/events)
///
/// Sequence:
/// 1. Load the trip (404 when it does not exist)
/// 2. Authorize the caller as creator-or-collaborator (403 otherwise,
///    with no stream data written)
/// 3. Subscribe to the trip's channel and relay events until the client
///    disconnects or the channel is closed
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: item_added
/// data: {"trip_id":"...","trip_item_id":"...","event_type":"item_added","payload":{...},"timestamp":"..."}
/// ```
pub async fn handle_trip_subscription(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>>, AppError> {
    tracing::info!(
        "[TripSync] Subscription request for trip {} from user {}",
        trip_id,
        user.user_id
    );

    db::get_trip_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::not_found("Trip"))?;

    access::ensure_collaborator(&state.db, trip_id, user.user_id).await?;

    let receiver = state.trip_channels.subscribe(trip_id);
    tracing::debug!("[TripSync] Subscription active for trip {}", trip_id);

    // Relay loop: one SSE frame per received event. The receiver is dropped
    // with the stream on client disconnect, releasing the subscription.
    let stream = stream::unfold(receiver, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[TripSync] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default().event(event.kind_name()).data(data);
                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // Only this subscriber fell behind; it resumes with the
                    // next event while siblings are unaffected.
                    tracing::warn!(
                        "[TripSync] Subscriber on trip {} lagged, skipped {} events",
                        trip_id,
                        skipped
                    );
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    // Normal completion: the trip's channel was closed.
                    tracing::debug!(
                        "[TripSync] Channel for trip {} closed, ending stream",
                        trip_id
                    );
                    return None;
                }
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
