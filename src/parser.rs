//! High-level stream analyzer for robotic arm telemetry

use tracing::debug;

use crate::alert::frame_has_alert;
use crate::error::{ParseError, Result};
use crate::layout::DEFAULT_ALERT_THRESHOLD_AMPS;
use crate::report::{FrameReport, NullSink, ReportSink, Summary};
use crate::stats::Statistics;
use crate::walker::{StreamEvent, StreamWalker};

/// Analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzerConfig {
    /// Axis current above which a frame is flagged, in amperes. Default: 5.0
    pub alert_threshold_amps: f32,
}

impl AnalyzerConfig {
    /// Reject thresholds that cannot be compared meaningfully
    pub fn validate(&self) -> Result<()> {
        let threshold = self.alert_threshold_amps;
        if !threshold.is_finite() {
            return Err(ParseError::invalid_config(format!(
                "Alert threshold must be finite, got {}",
                threshold
            )));
        }
        if threshold < 0.0 {
            return Err(ParseError::invalid_config(format!(
                "Alert threshold must not be negative, got {}",
                threshold
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            alert_threshold_amps: DEFAULT_ALERT_THRESHOLD_AMPS,
        }
    }
}

/// Telemetry stream analyzer
///
/// Runs one forward pass over a fully acquired buffer, reporting each valid
/// frame to a sink and returning the accumulated statistics.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new analyzer, validating its configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Analyzer { config })
    }

    /// Current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `buffer`, reporting every valid frame and the final summary to `sink`
    ///
    /// Fails only with [`ParseError::EmptyInput`]; every other condition is
    /// absorbed into the noise count.
    pub fn run<S: ReportSink + ?Sized>(&self, buffer: &[u8], sink: &mut S) -> Result<Statistics> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let threshold = self.config.alert_threshold_amps;
        let mut stats = Statistics::new(buffer.len());

        for event in StreamWalker::new(buffer) {
            match event {
                StreamEvent::Noise { len, .. } => stats.record_noise(len),
                StreamEvent::Frame { offset, frame } => {
                    stats.record_frame(frame.sequence, frame_has_alert(&frame, threshold));
                    sink.on_frame(&FrameReport::new(offset, &frame, threshold));
                }
            }
        }

        debug!(
            bytes_read = stats.bytes_read,
            noise_bytes = stats.noise_bytes,
            valid_frames = stats.valid_frames,
            alert_frames = stats.alert_frames,
            "stream analysis complete"
        );

        sink.on_summary(&Summary::new(stats.clone(), threshold));
        Ok(stats)
    }

    /// Analyze `buffer` for statistics only
    pub fn analyze(&self, buffer: &[u8]) -> Result<Statistics> {
        self.run(buffer, &mut NullSink)
    }

    /// Analyze `buffer` and wrap the result in a [`Summary`]
    pub fn summarize(&self, buffer: &[u8]) -> Result<Summary> {
        let stats = self.analyze(buffer)?;
        Ok(Summary::new(stats, self.config.alert_threshold_amps))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer {
            config: AnalyzerConfig::default(),
        }
    }
}

/// Builder for configuring an [`Analyzer`]
pub struct AnalyzerBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerBuilder {
    /// Create a new analyzer builder
    pub fn new() -> Self {
        AnalyzerBuilder {
            config: AnalyzerConfig::default(),
        }
    }

    /// Set the alert threshold in amperes
    pub fn with_alert_threshold(mut self, amps: f32) -> Self {
        self.config.alert_threshold_amps = amps;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<Analyzer> {
        Analyzer::new(self.config)
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
