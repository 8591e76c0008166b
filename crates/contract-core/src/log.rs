//! Logging collaborator for failed checks

use crate::ContractError;

/// Sink for failure reasons written by `log_on_failure`
pub trait FailureLog {
    fn write(&self, failure: &ContractError);
}

/// Default sink: one `tracing` error event per failure
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl FailureLog for TracingLog {
    fn write(&self, failure: &ContractError) {
        tracing::error!(target: "contract", "{}", failure);
    }
}

impl<F> FailureLog for F
where
    F: Fn(&ContractError),
{
    fn write(&self, failure: &ContractError) {
        self(failure)
    }
}

#[cfg(test)]
pub(crate) mod capture {
    //! Captures `tracing` output written while a closure runs

    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn read_logs(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::capture::read_logs;
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_tracing_log_writes_reason() {
        let logs = read_logs(|| {
            TracingLog.write(&ContractError::unsatisfied("the condition is not fulfilled"));
        });
        assert!(logs.contains("the condition is not fulfilled"));
        assert!(logs.contains("ERROR"));
    }

    #[test]
    fn test_closure_log() {
        let lines = RefCell::new(Vec::new());
        let sink = |e: &ContractError| lines.borrow_mut().push(e.to_string());

        sink.write(&ContractError::ViolatedInvariant);
        assert_eq!(*lines.borrow(), vec!["violated invariant".to_string()]);
    }
}
