//! Injection sinks.
//!
//! An [`InjectionSink`] takes a finished record array and injects it as one
//! ordered batch. The Windows backend provides `SendInputSink`; [`RecordingSink`]
//! keeps every batch in memory for tests and dry runs.
//!
//! Use [`submit`] rather than calling [`InjectionSink::inject`] directly: it skips
//! empty batches and turns a short count into [`InjectError::Partial`].

use crate::builder::{InputBatch, InputBuilder};
use crate::error::InjectError;
use crate::record::InputRecord;

/// Consumer of finished record arrays.
pub trait InjectionSink {
    /// Inject `batch` in order, without interleaving from other sources.
    ///
    /// Returns the number of records the host accepted.
    fn inject(&mut self, batch: &[InputRecord]) -> Result<usize, InjectError>;

    /// Human-readable backend name for logs.
    fn name(&self) -> &str;
}

impl<S: InjectionSink + ?Sized> InjectionSink for &mut S {
    fn inject(&mut self, batch: &[InputRecord]) -> Result<usize, InjectError> {
        (**self).inject(batch)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: InjectionSink + ?Sized> InjectionSink for Box<S> {
    fn inject(&mut self, batch: &[InputRecord]) -> Result<usize, InjectError> {
        (**self).inject(batch)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Materialize `builder` and hand it to `sink` as a single batch.
///
/// Returns the submitted batch on success.
pub fn submit<S>(sink: &mut S, builder: InputBuilder) -> Result<InputBatch, InjectError>
where
    S: InjectionSink + ?Sized,
{
    let batch = builder.into_batch();
    if batch.is_empty() {
        return Ok(batch);
    }

    log::debug!("submitting {} record(s) to {}", batch.len(), sink.name());
    #[cfg(feature = "debug-log")]
    for (i, record) in batch.iter().enumerate() {
        log::trace!("[{}] #{i} {record:?}", sink.name());
    }

    let sent = sink.inject(&batch)?;
    if sent != batch.len() {
        log::warn!(
            "{} accepted {sent} of {} record(s)",
            sink.name(),
            batch.len()
        );
        return Err(InjectError::Partial {
            sent,
            expected: batch.len(),
        });
    }
    Ok(batch)
}

/// In-memory sink that records every batch it receives.
///
/// `accept_limit` caps how many records of each batch are reported as injected,
/// which is handy for exercising partial-injection handling.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    batches: Vec<InputBatch>,
    accept_limit: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report at most `limit` records per batch as injected.
    pub fn with_accept_limit(limit: usize) -> Self {
        Self {
            batches: Vec::new(),
            accept_limit: Some(limit),
        }
    }

    /// Batches received so far, oldest first.
    pub fn batches(&self) -> &[InputBatch] {
        &self.batches
    }

    /// All received records, flattened in submission order.
    pub fn records(&self) -> impl Iterator<Item = &InputRecord> {
        self.batches.iter().flat_map(|b| b.iter())
    }

    /// Take all recorded batches, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<InputBatch> {
        std::mem::take(&mut self.batches)
    }

    /// Recorded batches as pretty JSON (one array per batch).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.batches)
    }
}

impl InjectionSink for RecordingSink {
    fn inject(&mut self, batch: &[InputRecord]) -> Result<usize, InjectError> {
        self.batches.push(batch.iter().copied().collect());
        Ok(self
            .accept_limit
            .map_or(batch.len(), |limit| limit.min(batch.len())))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Sink for builds without an OS backend; every non-empty batch fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedSink;

impl InjectionSink for UnsupportedSink {
    fn inject(&mut self, _batch: &[InputRecord]) -> Result<usize, InjectError> {
        Err(InjectError::Unsupported)
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// Default OS sink for this build.
///
/// `SendInputSink` on Windows with the `sendinput` feature, otherwise
/// [`UnsupportedSink`].
pub fn system_sink() -> Box<dyn InjectionSink> {
    #[cfg(all(feature = "sendinput", target_os = "windows"))]
    {
        Box::new(crate::backends::windows::SendInputSink::new())
    }

    #[cfg(not(all(feature = "sendinput", target_os = "windows")))]
    {
        Box::new(UnsupportedSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::VirtualKey;

    #[test]
    fn submit_records_one_batch_per_call() {
        let mut sink = RecordingSink::new();
        submit(&mut sink, InputBuilder::new().key_press(VirtualKey::A)).unwrap();
        submit(&mut sink, InputBuilder::new().relative_move(3, 4)).unwrap();

        assert_eq!(sink.batches().len(), 2);
        assert_eq!(sink.batches()[0].len(), 2);
        assert_eq!(sink.records().count(), 3);
    }

    #[test]
    fn empty_builder_is_not_submitted() {
        let mut sink = RecordingSink::new();
        let batch = submit(&mut sink, InputBuilder::new()).unwrap();
        assert!(batch.is_empty());
        assert!(sink.batches().is_empty());
    }

    #[test]
    fn short_count_is_partial_error() {
        let mut sink = RecordingSink::with_accept_limit(1);
        let err = submit(&mut sink, InputBuilder::new().key_press(VirtualKey::B)).unwrap_err();
        assert!(matches!(
            err,
            InjectError::Partial {
                sent: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn unsupported_sink_fails() {
        let err = submit(&mut UnsupportedSink, InputBuilder::new().key_press(VirtualKey::C))
            .unwrap_err();
        assert!(matches!(err, InjectError::Unsupported));
    }

    #[test]
    fn json_dump_lists_batches() {
        let mut sink = RecordingSink::new();
        submit(&mut sink, InputBuilder::new().vertical_scroll(-120)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&sink.to_json().unwrap()).unwrap();
        assert_eq!(json[0][0]["type"], "mouse");
        assert_eq!(json[0][0]["mouse_data"], -120);
    }

    #[test]
    fn drain_empties_sink() {
        let mut sink = RecordingSink::new();
        submit(&mut sink, InputBuilder::new().key_press(VirtualKey::D)).unwrap();
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.batches().is_empty());
    }
}
