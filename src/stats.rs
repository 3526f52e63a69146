//! Stream statistics and lost-frame estimation

use crate::layout::SEQUENCE_MODULUS;

/// Note attached to every lost-frame estimate
pub const SINGLE_WRAP_ASSUMPTION: &str = "assumes the sequence counter wrapped at most once";

/// Sequence numbers observed over a run
///
/// Initialized from the first frame, never from a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceRange {
    /// Smallest sequence value seen
    pub min: u8,
    /// Largest sequence value seen
    pub max: u8,
    /// Sequence of the first frame in stream order
    pub first: u8,
    /// Sequence of the most recent frame in stream order
    pub last: u8,
    /// Number of times a sequence was lower than its predecessor
    pub wraps_observed: u32,
}

impl SequenceRange {
    fn starting_at(sequence: u8) -> Self {
        SequenceRange {
            min: sequence,
            max: sequence,
            first: sequence,
            last: sequence,
            wraps_observed: 0,
        }
    }

    fn observe(&mut self, sequence: u8) {
        if sequence < self.last {
            self.wraps_observed += 1;
        }
        self.min = self.min.min(sequence);
        self.max = self.max.max(sequence);
        self.last = sequence;
    }

    /// Number of frames the producer should have sent between `first` and `last`
    ///
    /// Assumes at most one wrap: with no decrease the span is `last - first`,
    /// otherwise the counter is taken to have passed 255 exactly once.
    pub fn expected_frames(&self) -> usize {
        let span = if self.wraps_observed == 0 {
            self.last.wrapping_sub(self.first) as usize
        } else {
            SEQUENCE_MODULUS - self.first as usize + self.last as usize
        };
        span + 1
    }
}

/// Best-effort count of frames lost in transit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LossEstimate {
    /// Frames the sequence span implies
    pub expected: usize,
    /// Frames actually decoded
    pub received: usize,
    /// `expected - received`, floored at zero
    pub lost: usize,
    /// Decreases seen in the sequence stream
    pub wraps_observed: u32,
}

impl LossEstimate {
    /// Whether the observed stream is consistent with the single-wrap assumption
    pub fn within_single_wrap(&self) -> bool {
        self.wraps_observed <= 1
    }
}

impl std::fmt::Display for LossEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lost of {} expected (estimate, {})",
            self.lost, self.expected, SINGLE_WRAP_ASSUMPTION
        )?;
        if !self.within_single_wrap() {
            write!(
                f,
                "; {} wraps observed, loss is likely underestimated",
                self.wraps_observed
            )?;
        }
        Ok(())
    }
}

/// Counters accumulated over one pass of a stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Total input length
    pub bytes_read: usize,
    /// Bytes not part of any valid frame
    pub noise_bytes: usize,
    /// Frames decoded and validated
    pub valid_frames: usize,
    /// Valid frames with at least one axis in alert
    pub alert_frames: usize,
    /// Sequence tracking, present once a frame was seen
    pub sequence: Option<SequenceRange>,
}

impl Statistics {
    /// Create empty statistics for an input of `bytes_read` bytes
    pub fn new(bytes_read: usize) -> Self {
        Statistics {
            bytes_read,
            ..Statistics::default()
        }
    }

    /// Record one valid frame
    pub fn record_frame(&mut self, sequence: u8, alert: bool) {
        self.valid_frames += 1;
        if alert {
            self.alert_frames += 1;
        }
        match self.sequence.as_mut() {
            Some(range) => range.observe(sequence),
            None => self.sequence = Some(SequenceRange::starting_at(sequence)),
        }
    }

    /// Record a span of noise bytes
    pub fn record_noise(&mut self, len: usize) {
        self.noise_bytes += len;
    }

    /// Smallest sequence seen, if any frame was recorded
    pub fn sequence_min(&self) -> Option<u8> {
        self.sequence.map(|range| range.min)
    }

    /// Largest sequence seen, if any frame was recorded
    pub fn sequence_max(&self) -> Option<u8> {
        self.sequence.map(|range| range.max)
    }

    /// Estimated lost frames, if any frame was recorded
    pub fn lost_frames(&self) -> Option<LossEstimate> {
        self.sequence.map(|range| {
            let expected = range.expected_frames();
            LossEstimate {
                expected,
                received: self.valid_frames,
                lost: expected.saturating_sub(self.valid_frames),
                wraps_observed: range.wraps_observed,
            }
        })
    }
}
