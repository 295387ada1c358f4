//! Hooks for whoever wants to watch a maze being carved and solved.
//!
//! Nothing in the crate depends on what a tracer does with the events, they
//! are fire-and-forget notifications.

use log::trace;

use crate::dims::Dims;

pub trait Tracer {
    /// The final wall state of the cell at `pos` is known.
    fn on_cell_ready(&mut self, _pos: Dims) {}

    /// A solver visited one more cell.
    fn on_step(&mut self) {}

    /// A solver committed to the edge `from -> to`, or backed out of it when
    /// `undo` is set.
    fn on_move(&mut self, _from: Dims, _to: Dims, _undo: bool) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn on_cell_ready(&mut self, pos: Dims) {
        (**self).on_cell_ready(pos)
    }

    fn on_step(&mut self) {
        (**self).on_step()
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        (**self).on_move(from, to, undo)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// Forwards every event to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn on_cell_ready(&mut self, pos: Dims) {
        trace!("cell ready {:?}", pos);
    }

    fn on_step(&mut self) {
        trace!("step");
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        if undo {
            trace!("retreat {:?} <- {:?}", from, to);
        } else {
            trace!("enter {:?} -> {:?}", from, to);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    CellReady(Dims),
    Step,
    Move { from: Dims, to: Dims, undo: bool },
}

/// Keeps every event in order, e.g. to replay an animation later.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<TraceEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Step))
            .count()
    }

    pub fn moves(&self, undo: bool) -> impl Iterator<Item = (Dims, Dims)> + '_ {
        self.events.iter().filter_map(move |e| match *e {
            TraceEvent::Move { from, to, undo: u } if u == undo => Some((from, to)),
            _ => None,
        })
    }

    pub fn ready_cells(&self) -> impl Iterator<Item = Dims> + '_ {
        self.events.iter().filter_map(|e| match *e {
            TraceEvent::CellReady(pos) => Some(pos),
            _ => None,
        })
    }
}

impl Tracer for Recorder {
    fn on_cell_ready(&mut self, pos: Dims) {
        self.events.push(TraceEvent::CellReady(pos));
    }

    fn on_step(&mut self) {
        self.events.push(TraceEvent::Step);
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        self.events.push(TraceEvent::Move { from, to, undo });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(mut tracer: impl Tracer) {
        tracer.on_cell_ready(Dims(1, 2));
        tracer.on_step();
        tracer.on_move(Dims(0, 0), Dims(1, 0), false);
        tracer.on_move(Dims(0, 0), Dims(1, 0), true);
    }

    #[test]
    fn recorder_keeps_order() {
        let mut rec = Recorder::new();
        drive(&mut rec);
        assert_eq!(
            rec.events,
            vec![
                TraceEvent::CellReady(Dims(1, 2)),
                TraceEvent::Step,
                TraceEvent::Move {
                    from: Dims(0, 0),
                    to: Dims(1, 0),
                    undo: false
                },
                TraceEvent::Move {
                    from: Dims(0, 0),
                    to: Dims(1, 0),
                    undo: true
                },
            ]
        );
        assert_eq!(rec.steps(), 1);
        assert_eq!(rec.moves(true).count(), 1);
        assert_eq!(rec.ready_cells().collect::<Vec<_>>(), vec![Dims(1, 2)]);
    }

    #[test]
    fn noop_and_log_accept_everything() {
        drive(NoopTracer);
        drive(LogTracer);
    }
}
