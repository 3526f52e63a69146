//! Single-pass recovery of frames and noise from a byte buffer

use tracing::{debug, trace};

use crate::core::Frame;
use crate::encoding::decode_frame;
use crate::layout::FRAME_SIZE;
use crate::sync::find_sync;

/// One piece of the input, in stream order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEvent {
    /// Bytes that belong to no valid frame
    Noise {
        /// Offset of the first noise byte
        offset: usize,
        /// Number of noise bytes
        len: usize,
    },
    /// A decoded, validated frame
    Frame {
        /// Offset of the frame's sync marker
        offset: usize,
        /// The decoded frame
        frame: Frame,
    },
}

impl StreamEvent {
    /// Number of input bytes this event covers
    pub fn byte_len(&self) -> usize {
        match self {
            StreamEvent::Noise { len, .. } => *len,
            StreamEvent::Frame { .. } => FRAME_SIZE,
        }
    }
}

/// Iterator over the frames and noise spans of a buffer
///
/// Walks forward only: a consumed frame is never rescanned, and a marker that
/// cannot hold a full frame costs exactly one noise byte, so every step makes
/// progress and the walk ends after at most `buffer.len()` events.
#[derive(Debug, Clone)]
pub struct StreamWalker<'a> {
    buffer: &'a [u8],
    position: usize,
    pending: Option<StreamEvent>,
    done: bool,
}

impl<'a> StreamWalker<'a> {
    /// Start seeking at offset 0 of `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        StreamWalker {
            buffer,
            position: 0,
            pending: None,
            done: false,
        }
    }

    /// Offset the next scan starts from
    pub fn position(&self) -> usize {
        self.position
    }

    /// Event for the marker at `offset`: a frame, or one byte of noise
    fn event_at_marker(&mut self, offset: usize) -> StreamEvent {
        match decode_frame(self.buffer, offset) {
            Ok(frame) if frame.is_valid() => {
                self.position = offset + FRAME_SIZE;
                debug!(offset, sequence = frame.sequence, "frame recovered");
                StreamEvent::Frame { offset, frame }
            }
            result => {
                self.position = offset + 1;
                debug!(
                    offset,
                    remaining = self.buffer.len() - offset,
                    error = ?result.err(),
                    "sync marker rejected, counted as noise"
                );
                StreamEvent::Noise { offset, len: 1 }
            }
        }
    }
}

impl Iterator for StreamWalker<'_> {
    type Item = StreamEvent;

    fn next(&mut self) -> Option<StreamEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        if self.done {
            return None;
        }

        let start = self.position;
        match find_sync(self.buffer, start) {
            None => {
                self.done = true;
                self.position = self.buffer.len();
                let len = self.buffer.len().saturating_sub(start);
                if len == 0 {
                    return None;
                }
                trace!(offset = start, len, "trailing noise");
                Some(StreamEvent::Noise { offset: start, len })
            }
            Some(marker) => {
                let event = self.event_at_marker(marker);
                if marker > start {
                    trace!(offset = start, len = marker - start, "noise before marker");
                    self.pending = Some(event);
                    Some(StreamEvent::Noise {
                        offset: start,
                        len: marker - start,
                    })
                } else {
                    Some(event)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AxisSample;
    use crate::encoding::encode_frame;
    use crate::layout::AXIS_COUNT;

    fn frame_bytes(sequence: u8) -> [u8; FRAME_SIZE] {
        encode_frame(&Frame::new(sequence, [AxisSample::new(100, 10, 500); AXIS_COUNT]))
    }

    #[test]
    fn test_walk_empty_buffer() {
        assert_eq!(StreamWalker::new(&[]).count(), 0);
    }

    #[test]
    fn test_walk_noise_only() {
        let events: Vec<_> = StreamWalker::new(&[1, 2, 3, 0xAA]).collect();
        assert_eq!(events, vec![StreamEvent::Noise { offset: 0, len: 4 }]);
    }

    #[test]
    fn test_walk_noise_then_frame() {
        let mut buf = vec![0x01, 0x02];
        buf.extend_from_slice(&frame_bytes(5));

        let events: Vec<_> = StreamWalker::new(&buf).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], StreamEvent::Noise { offset: 0, len: 2 });
        match events[1] {
            StreamEvent::Frame { offset, frame } => {
                assert_eq!(offset, 2);
                assert_eq!(frame.sequence, 5);
            }
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn test_walk_back_to_back_frames() {
        let mut buf = Vec::new();
        for seq in 0..3 {
            buf.extend_from_slice(&frame_bytes(seq));
        }

        let offsets: Vec<_> = StreamWalker::new(&buf)
            .map(|event| match event {
                StreamEvent::Frame { offset, .. } => offset,
                StreamEvent::Noise { .. } => panic!("unexpected noise"),
            })
            .collect();
        assert_eq!(offsets, vec![0, FRAME_SIZE, 2 * FRAME_SIZE]);
    }

    #[test]
    fn test_walk_truncated_tail() {
        let mut buf = frame_bytes(1).to_vec();
        buf.extend_from_slice(&frame_bytes(2)[..10]);

        let events: Vec<_> = StreamWalker::new(&buf).collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], StreamEvent::Frame { offset: 0, .. }));
        assert_eq!(
            events[1],
            StreamEvent::Noise {
                offset: FRAME_SIZE,
                len: 1
            }
        );
        assert_eq!(
            events[2],
            StreamEvent::Noise {
                offset: FRAME_SIZE + 1,
                len: 9
            }
        );
    }

    #[test]
    fn test_walk_marker_in_last_byte() {
        let buf = [0x00, 0x00, 0xAA];
        let total: usize = StreamWalker::new(&buf).map(|e| e.byte_len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_walk_does_not_rescan_inside_frame() {
        // A marker pattern inside a frame body must not produce a second frame
        let frame = Frame::new(
            0xAA,
            [AxisSample::new(0x55AA_u16 as i16, 0x55AA_u16 as i16, 0x55AA); AXIS_COUNT],
        );
        let buf = encode_frame(&frame);

        let events: Vec<_> = StreamWalker::new(&buf).collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], StreamEvent::Frame { offset: 0, .. }));
    }

    #[test]
    fn test_walk_false_marker_before_frame() {
        // A stray marker just ahead of a real frame wins; no backtracking
        let mut buf = vec![0xAA, 0x55];
        buf.extend_from_slice(&[0x00; 5]);
        buf.extend_from_slice(&frame_bytes(9));

        let events: Vec<_> = StreamWalker::new(&buf).collect();
        assert!(matches!(events[0], StreamEvent::Frame { offset: 0, .. }));
        let covered: usize = events.iter().map(StreamEvent::byte_len).sum();
        assert_eq!(covered, buf.len());
    }

    #[test]
    fn test_walk_position_reaches_end() {
        let buf = frame_bytes(3);
        let mut walker = StreamWalker::new(&buf);
        while walker.next().is_some() {}
        assert_eq!(walker.position(), FRAME_SIZE);
    }
}
