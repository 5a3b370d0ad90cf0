//! Delivery of outward signals from the core to the rendering layer.

use crossbeam_channel::{Sender, TrySendError};
use shared::signal::UiSignal;
use tracing::{debug, warn};

/// Receives signals synchronously as the core emits them.
pub trait SignalSink {
    fn deliver(&mut self, signal: UiSignal);
}

/// Queues onto the front-end's channel. Never blocks: a full or
/// disconnected queue drops the signal and logs it.
impl SignalSink for Sender<UiSignal> {
    fn deliver(&mut self, signal: UiSignal) {
        let name = signal.name();
        match self.try_send(signal) {
            Ok(()) => debug!(signal = name, "queued core->ui signal"),
            Err(TrySendError::Full(_)) => {
                warn!(signal = name, "ui signal queue is full; signal dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(signal = name, "ui signal receiver disconnected; signal dropped");
            }
        }
    }
}

/// Keeps every signal in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordedSignals {
    signals: Vec<UiSignal>,
}

impl RecordedSignals {
    pub fn take(&mut self) -> Vec<UiSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn as_slice(&self) -> &[UiSignal] {
        &self.signals
    }
}

impl SignalSink for RecordedSignals {
    fn deliver(&mut self, signal: UiSignal) {
        self.signals.push(signal);
    }
}

#[cfg(test)]
#[path = "tests/signals_tests.rs"]
mod tests;
