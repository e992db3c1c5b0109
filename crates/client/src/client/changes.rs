//! SSE change feed for one list's items.

use uuid::Uuid;

use memora_core::identity::Caller;
use memora_core::store::{Result, StoreError};
use memora_core::todo::ItemChange;

use super::{error_for, network_error, with_credential, MemoraClient};

impl MemoraClient {
    /// Subscribe to the change feed for one list's items.
    ///
    /// Each SSE frame's `data:` line carries one JSON-encoded [`ItemChange`].
    /// Malformed payloads are skipped, never surfaced. A transport failure
    /// mid-stream yields one `Network` error and ends the stream; the caller
    /// resubscribes and refetches, missed events are never replayed.
    /// Dropping the returned stream closes the subscription.
    pub async fn watch_items(
        &self,
        caller: &Caller,
        todo_list_id: Uuid,
    ) -> Result<impl futures_core::Stream<Item = Result<ItemChange>> + Send + 'static> {
        let url = format!(
            "{}/api/changes?table=todos&todo_list_id={}",
            self.base_url, todo_list_id
        );

        let response = with_credential(self.client.get(&url), caller)
            .header("Accept", "text/event-stream")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(StoreError::not_found("TodoList", todo_list_id));
        }
        if !status.is_success() {
            return Err(error_for(response).await);
        }

        let stream = async_stream::stream! {
            use tokio_stream::StreamExt;

            let mut byte_stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk_result) = byte_stream.next().await {
                match chunk_result {
                    Ok(chunk) => {
                        buffer.push_str(&String::from_utf8_lossy(&chunk));
                        for frame in drain_frames(&mut buffer) {
                            if let Some(change) = parse_change(&frame) {
                                yield Ok(change);
                            }
                        }
                    }
                    Err(e) => {
                        yield Err(StoreError::Network(e.to_string()));
                        break;
                    }
                }
            }
        };

        Ok(stream)
    }
}

/// Split complete SSE frames (terminated by a blank line) off the front of
/// the buffer, leaving any partial frame in place.
fn drain_frames(buffer: &mut String) -> Vec<String> {
    let mut frames = Vec::new();
    while let Some(pos) = buffer.find("\n\n") {
        frames.push(buffer[..pos].to_string());
        *buffer = buffer[pos + 2..].to_string();
    }
    frames
}

/// Parse one change from an SSE frame. Anything unparseable is dropped.
fn parse_change(frame: &str) -> Option<ItemChange> {
    let mut data = None;

    for line in frame.lines() {
        if let Some(value) = line.strip_prefix("data: ") {
            data = Some(value);
        }
    }

    match serde_json::from_str(data?) {
        Ok(change) => Some(change),
        Err(error) => {
            tracing::debug!(%error, "skipping malformed change event");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memora_core::todo::TodoItem;

    #[test]
    fn test_parse_change_reads_the_data_line() {
        let item = TodoItem::new(Uuid::new_v4(), "Buy milk");
        let payload = serde_json::to_string(&ItemChange::Insert { new: item.clone() }).unwrap();
        let frame = format!("event: change\nid: 7\ndata: {payload}");

        let parsed = parse_change(&frame).unwrap();
        assert_eq!(parsed.item_id(), item.id);
    }

    #[test]
    fn test_malformed_payloads_are_skipped() {
        assert!(parse_change(r#"data: {"type":"truncate"}"#).is_none());
        assert!(parse_change("data: not json at all").is_none());
        assert!(parse_change(": keep-alive comment").is_none());
        assert!(parse_change("").is_none());
    }

    #[test]
    fn test_drain_frames_splits_and_keeps_partials() {
        let mut buffer = "data: one\n\ndata: two\n\ndata: par".to_string();

        let frames = drain_frames(&mut buffer);

        assert_eq!(frames, vec!["data: one", "data: two"]);
        assert_eq!(buffer, "data: par");
    }

    #[test]
    fn test_feed_continues_past_malformed_frames() {
        let item = TodoItem::new(Uuid::new_v4(), "Buy milk");
        let good = serde_json::to_string(&ItemChange::Insert { new: item.clone() }).unwrap();
        let mut buffer = format!("data: garbage\n\ndata: {good}\n\n");

        let changes: Vec<ItemChange> = drain_frames(&mut buffer)
            .iter()
            .filter_map(|frame| parse_change(frame))
            .collect();

        assert_eq!(changes, vec![ItemChange::Insert { new: item }]);
    }
}
