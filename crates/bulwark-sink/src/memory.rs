// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{error::SinkError, event::BoundaryEvent, sink::EventSink};
use std::sync::{Mutex, MutexGuard};

/// Keeps recorded events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<BoundaryEvent>>,
}

impl MemorySink {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded event.
    pub fn events(&self) -> Result<Vec<BoundaryEvent>, SinkError> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize, SinkError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SinkError> {
        Ok(self.lock()?.is_empty())
    }

    #[inline]
    fn lock(&self) -> Result<MutexGuard<'_, Vec<BoundaryEvent>>, SinkError> {
        self.events.lock().map_err(|_| SinkError::Poisoned)
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &BoundaryEvent) -> Result<(), SinkError> {
        self.lock()?.push(event.clone());
        log::debug!("recorded event in memory: {}", event);
        Ok(())
    }

    fn name(&self) -> &str {
        "MemorySink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_records_in_order() {
        let sink = MemorySink::new();
        sink.record(&BoundaryEvent::new("i8", "add", "overflow"))
            .unwrap();
        sink.record(&BoundaryEvent::new("u8", "subtract", "underflow"))
            .unwrap();

        let events = sink.events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].type_name(), "i8");
        assert_eq!(events[1].type_name(), "u8");
    }

    #[test]
    fn test_concurrent_writers() {
        let sink = Arc::new(MemorySink::new());

        std::thread::scope(|scope| {
            for t in 0..4 {
                let sink = Arc::clone(&sink);
                scope.spawn(move || {
                    for _ in 0..25 {
                        sink.record(&BoundaryEvent::new(format!("t{}", t), "add", "overflow"))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(sink.len().unwrap(), 100);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let sink = Arc::new(MemorySink::new());
        let poisoner = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.events.lock().unwrap();
            panic!("poison the sink");
        })
        .join();

        assert!(matches!(
            sink.record(&BoundaryEvent::new("i8", "add", "overflow")),
            Err(SinkError::Poisoned)
        ));
    }
}
