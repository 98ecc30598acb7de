//! Control channel polled between execution bursts.
//!
//! The run loop owns the CPU; external agents (a debugger front end, a
//! control server) steer it by sending commands through a channel that
//! supports a timeout-bounded readiness check. The concrete transport is
//! the caller's business; an mpsc-backed implementation covers the
//! common case.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Commands accepted between bursts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop executing instructions; keep servicing the channel.
    Pause,
    /// Resume instruction execution.
    Resume,
    /// Leave the run loop.
    Quit,
}

/// A pollable source of [`Command`]s.
pub trait ControlChannel {
    /// Wait up to `timeout` for a command. `None` means nothing arrived
    /// (or the peer went away).
    fn poll(&mut self, timeout: Duration) -> Option<Command>;
}

/// Control channel backed by an `mpsc` receiver.
pub struct ChannelControl {
    rx: Receiver<Command>,
}

impl ChannelControl {
    #[must_use]
    pub fn new(rx: Receiver<Command>) -> Self {
        Self { rx }
    }
}

impl ControlChannel for ChannelControl {
    fn poll(&mut self, timeout: Duration) -> Option<Command> {
        match self.rx.recv_timeout(timeout) {
            Ok(cmd) => Some(cmd),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// A channel that never delivers anything; for machines that just run.
pub struct NoControl;

impl ControlChannel for NoControl {
    fn poll(&mut self, _timeout: Duration) -> Option<Command> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn channel_control_delivers_and_times_out() {
        let (tx, rx) = mpsc::channel();
        let mut control = ChannelControl::new(rx);
        tx.send(Command::Pause).expect("send");
        assert_eq!(control.poll(Duration::ZERO), Some(Command::Pause));
        assert_eq!(control.poll(Duration::ZERO), None);
        drop(tx);
        assert_eq!(control.poll(Duration::ZERO), None);
    }
}
