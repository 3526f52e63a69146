//! Frame decoding and encoding for the telemetry wire format

use bytes::{Buf, BufMut};

use crate::core::{AxisSample, Frame};
use crate::error::{ParseError, Result};
use crate::layout::{AXIS_COUNT, FRAME_SIZE};

/// Frame decoder for the 39-byte telemetry layout
pub struct FrameDecoder;

impl FrameDecoder {
    /// Decode one axis block: position (i16 LE), speed (i16 LE), current (u16 LE)
    ///
    /// The caller guarantees at least 6 readable bytes.
    fn decode_axis(src: &mut impl Buf) -> AxisSample {
        let position_raw = src.get_i16_le();
        let speed_raw = src.get_i16_le();
        let current_raw = src.get_u16_le();
        AxisSample {
            position_raw,
            speed_raw,
            current_raw,
        }
    }

    /// Decode a frame starting at `offset` in `buffer`
    ///
    /// Fields are read at explicit byte offsets in little-endian order, so
    /// neither host endianness nor alignment matters. The marker bytes are
    /// copied as found; validity is checked separately with
    /// [`Frame::is_valid`].
    pub fn decode_frame(buffer: &[u8], offset: usize) -> Result<Frame> {
        let available = buffer.len().saturating_sub(offset);
        let mut src = offset
            .checked_add(FRAME_SIZE)
            .and_then(|end| buffer.get(offset..end))
            .ok_or_else(|| {
                ParseError::insufficient_bytes(format!(
                    "Expected {} bytes at offset {}, got {}",
                    FRAME_SIZE, offset, available
                ))
            })?;

        let sync_marker = [src.get_u8(), src.get_u8()];
        let sequence = src.get_u8();

        let mut axes = [AxisSample::default(); AXIS_COUNT];
        for axis in axes.iter_mut() {
            *axis = Self::decode_axis(&mut src);
        }

        Ok(Frame {
            sync_marker,
            sequence,
            axes,
        })
    }
}

/// Frame encoder producing the 39-byte telemetry layout
pub struct FrameEncoder;

impl FrameEncoder {
    /// Append the wire form of `frame` to `dst`
    pub fn encode_into(frame: &Frame, dst: &mut impl BufMut) {
        dst.put_slice(&frame.sync_marker);
        dst.put_u8(frame.sequence);
        for axis in &frame.axes {
            dst.put_i16_le(axis.position_raw);
            dst.put_i16_le(axis.speed_raw);
            dst.put_u16_le(axis.current_raw);
        }
    }

    /// Encode `frame` into a fixed-size array
    pub fn encode_frame(frame: &Frame) -> [u8; FRAME_SIZE] {
        let mut out = [0u8; FRAME_SIZE];
        let mut dst = &mut out[..];
        Self::encode_into(frame, &mut dst);
        out
    }
}

/// Decode a frame at `offset`; see [`FrameDecoder::decode_frame`]
pub fn decode_frame(buffer: &[u8], offset: usize) -> Result<Frame> {
    FrameDecoder::decode_frame(buffer, offset)
}

/// Encode a frame; see [`FrameEncoder::encode_frame`]
pub fn encode_frame(frame: &Frame) -> [u8; FRAME_SIZE] {
    FrameEncoder::encode_frame(frame)
}
