use std::{
    cell::RefCell,
    fmt,
    io::Write,
    rc::Rc,
    sync::mpsc::{SyncSender, TrySendError},
};

use anyhow::bail;

use crate::prelude::*;

/// State of the swarm after one completed sweep.
///
/// Every field is an owned copy; the observer may keep or modify it without
/// any effect on the running optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSnapshot {
    /// 1-based sweep index.
    pub iteration: usize,
    pub particles: Vec<Particle>,
    pub global_best: Particle,
    pub global_best_value: f64,
}

impl IterationSnapshot {
    pub fn progress_line(&self) -> ProgressLine {
        ProgressLine {
            iteration: self.iteration,
            best: self.global_best,
            value: self.global_best_value,
        }
    }
}

/// Receives one snapshot per completed sweep, in iteration order.
///
/// Delivery is synchronous with the optimization loop: a slow observer delays
/// the next sweep. Returning an error aborts the run and the error is handed
/// back to the caller of `run` as [`PsoError::Observer`].
pub trait IterationObserver {
    fn on_iteration(&mut self, snapshot: IterationSnapshot) -> anyhow::Result<()>;
}

impl<F> IterationObserver for F
where
    F: FnMut(IterationSnapshot) -> anyhow::Result<()>,
{
    fn on_iteration(&mut self, snapshot: IterationSnapshot) -> anyhow::Result<()> {
        self(snapshot)
    }
}

/// One row of the textual progress report: `iteration;(x, y);value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressLine {
    pub iteration: usize,
    pub best: Particle,
    pub value: f64,
}

impl ProgressLine {
    pub const HEADER: &'static str = "iteration;best;value";
}

impl fmt::Display for ProgressLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.iteration, self.best, self.value)
    }
}

/// Writes the progress report to any `io::Write`, header first.
pub struct ProgressLog<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> ProgressLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IterationObserver for ProgressLog<W> {
    fn on_iteration(&mut self, snapshot: IterationSnapshot) -> anyhow::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{}", ProgressLine::HEADER)?;
            self.header_written = true;
        }
        writeln!(self.out, "{}", snapshot.progress_line())?;
        Ok(())
    }
}

/// Records the global-best value of every delivered snapshot.
///
/// Clones share the same history, so one clone can be handed to the
/// optimizer while another is kept for inspection.
#[derive(Clone, Default)]
pub struct CostHistory {
    cost_history: Rc<RefCell<Vec<f64>>>,
    iterations: Rc<RefCell<Vec<usize>>>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cost_history(&self) -> Vec<f64> {
        self.cost_history.borrow().clone()
    }

    pub fn iterations(&self) -> Vec<usize> {
        self.iterations.borrow().clone()
    }

    pub fn observe_cost(&self, iteration: usize, cost: f64) {
        self.iterations.borrow_mut().push(iteration);
        self.cost_history.borrow_mut().push(cost);
    }
}

impl IterationObserver for CostHistory {
    fn on_iteration(&mut self, snapshot: IterationSnapshot) -> anyhow::Result<()> {
        self.observe_cost(snapshot.iteration, snapshot.global_best_value);
        Ok(())
    }
}

/// Forwards snapshots to another thread (e.g. a UI) over a bounded channel.
///
/// Sending never blocks: when the channel is full the snapshot is dropped and
/// counted. A disconnected receiver is reported as an observer error, which
/// stops the run.
pub struct ChannelObserver {
    tx: SyncSender<IterationSnapshot>,
    dropped: usize,
}

impl ChannelObserver {
    pub fn new(tx: SyncSender<IterationSnapshot>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Snapshots discarded because the receiver was behind.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl IterationObserver for ChannelObserver {
    fn on_iteration(&mut self, snapshot: IterationSnapshot) -> anyhow::Result<()> {
        match self.tx.try_send(snapshot) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(dropped)) => {
                self.dropped += 1;
                tracing::trace!(iteration = dropped.iteration, "snapshot channel full, dropping");
                Ok(())
            }
            Err(TrySendError::Disconnected(snapshot)) => {
                bail!(
                    "snapshot receiver disconnected before iteration {}",
                    snapshot.iteration
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::sync_channel;

    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(iteration: usize, value: f64) -> IterationSnapshot {
        IterationSnapshot {
            iteration,
            particles: vec![Particle::new(1.0, 2.0, 0.1, 0.2)],
            global_best: Particle::new(0.5, -0.25, 0.0, 0.0),
            global_best_value: value,
        }
    }

    #[test]
    fn test_progress_line_format() {
        assert_eq!(snapshot(7, 0.125).progress_line().to_string(), "7;(0.5, -0.25);0.125");
    }

    #[test]
    fn test_progress_log_writes_header_once() {
        let mut log = ProgressLog::new(Vec::new());
        log.on_iteration(snapshot(1, 2.0)).unwrap();
        log.on_iteration(snapshot(2, 1.0)).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(
            text,
            "iteration;best;value\n1;(0.5, -0.25);2\n2;(0.5, -0.25);1\n"
        );
    }

    #[test]
    fn test_cost_history_clones_share_state() {
        let history = CostHistory::new();
        let mut handle = history.clone();
        handle.on_iteration(snapshot(1, 3.0)).unwrap();
        handle.on_iteration(snapshot(2, 1.5)).unwrap();
        assert_eq!(history.cost_history(), vec![3.0, 1.5]);
        assert_eq!(history.iterations(), vec![1, 2]);
    }

    #[test]
    fn test_channel_observer_drops_when_full() {
        let (tx, rx) = sync_channel(1);
        let mut observer = ChannelObserver::new(tx);
        observer.on_iteration(snapshot(1, 1.0)).unwrap();
        observer.on_iteration(snapshot(2, 0.5)).unwrap();
        assert_eq!(observer.dropped(), 1);
        assert_eq!(rx.recv().unwrap().iteration, 1);
    }

    #[test]
    fn test_channel_observer_fails_when_disconnected() {
        let (tx, rx) = sync_channel(1);
        drop(rx);
        let mut observer = ChannelObserver::new(tx);
        assert!(observer.on_iteration(snapshot(1, 1.0)).is_err());
    }

    #[test]
    fn test_closure_is_an_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |s: IterationSnapshot| -> anyhow::Result<()> {
                seen.push(s.iteration);
                Ok(())
            };
            observer.on_iteration(snapshot(4, 0.0)).unwrap();
        }
        assert_eq!(seen, vec![4]);
    }
}
