//! Server-Sent Events line decoding
//!
//! Turns a raw HTTP byte stream into a `FragmentStream` by splitting it into
//! lines and feeding each line through a `StreamAdapter`. Bytes are buffered
//! until a full line is available, so multi-byte characters split across
//! network chunks decode correctly.

use std::collections::VecDeque;

use bytes::Bytes;
use futures_util::stream::{self, BoxStream, Stream, StreamExt};

use crate::provider::FragmentStream;
use crate::types::LlmError;
use edumorph_core::streaming::{StreamAdapter, UnifiedStreamEvent};

struct DecoderState<A> {
    bytes: BoxStream<'static, Result<Bytes, String>>,
    adapter: A,
    buffer: Vec<u8>,
    pending: VecDeque<UnifiedStreamEvent>,
    finished: bool,
}

impl<A: StreamAdapter> DecoderState<A> {
    /// Take the next complete line out of the buffer, if one is there.
    fn next_line(&mut self) -> Option<String> {
        let line_end = self.buffer.iter().position(|b| *b == b'\n')?;
        let line: Vec<u8> = self.buffer.drain(..=line_end).collect();
        Some(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn feed(&mut self, line: &str) -> Result<(), LlmError> {
        let events = self.adapter.adapt(line).map_err(|e| LlmError::ParseError {
            message: format!("{} stream: {}", self.adapter.provider_name(), e),
        })?;
        self.pending.extend(events);
        Ok(())
    }
}

/// Decode a byte stream of SSE lines into unified events.
///
/// The returned stream ends after the underlying byte stream ends, or right
/// after the first transport or adapter error, which is yielded as `Err`.
pub fn decode_event_stream<S, E, A>(bytes: S, mut adapter: A) -> FragmentStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display,
    A: StreamAdapter + 'static,
{
    adapter.reset();
    let state = DecoderState {
        bytes: bytes.map(|chunk| chunk.map_err(|e| e.to_string())).boxed(),
        adapter,
        buffer: Vec::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(event) = state.pending.pop_front() {
                return Some((Ok(event), state));
            }
            if state.finished {
                return None;
            }

            if let Some(line) = state.next_line() {
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = state.feed(&line) {
                    state.finished = true;
                    return Some((Err(e), state));
                }
                continue;
            }

            match state.bytes.next().await {
                Some(Ok(chunk)) => state.buffer.extend_from_slice(&chunk),
                Some(Err(message)) => {
                    state.finished = true;
                    return Some((Err(LlmError::NetworkError { message }), state));
                }
                None => {
                    state.finished = true;
                    let rest = std::mem::take(&mut state.buffer);
                    let rest = String::from_utf8_lossy(&rest).trim().to_string();
                    if !rest.is_empty() {
                        if let Err(e) = state.feed(&rest) {
                            return Some((Err(e), state));
                        }
                    }
                }
            }
        }
    })
    .boxed()
}
