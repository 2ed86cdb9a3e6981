//! Step-by-step observation of the elementary sorts.
//!
//! [`bubble::sort_observed`](crate::bubble::sort_observed) and
//! [`selection::sort_observed`](crate::selection::sort_observed) run the same code as their plain
//! `sort` counterparts, reporting every comparison and swap to an [`Observer`] together with a
//! view of the slice at that point.

/// A single step of a sort. Indices refer to positions in the slice being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The elements at both positions are about to be compared.
    Compare(usize, usize),
    /// The elements at both positions were just swapped.
    Swap(usize, usize),
    /// The position holds its final value.
    Settled(usize),
    /// The sort is finished. Always the last event.
    Done,
}

pub trait Observer<T> {
    fn observe(&mut self, event: Event, v: &[T]);
}

/// Discards every event. Used by the plain `sort` entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;

impl<T> Observer<T> for Ignore {
    #[inline(always)]
    fn observe(&mut self, _event: Event, _v: &[T]) {}
}

/// Counts comparisons and swaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub comparisons: usize,
    pub swaps: usize,
}

impl<T> Observer<T> for Counter {
    fn observe(&mut self, event: Event, _v: &[T]) {
        match event {
            Event::Compare(..) => self.comparisons += 1,
            Event::Swap(..) => self.swaps += 1,
            Event::Settled(_) | Event::Done => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub event: Event,
    /// The slice as it was when `event` was reported.
    pub snapshot: Vec<T>,
}

/// Keeps a snapshot of the slice for every event, e.g. to replay a sort frame by frame.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    steps: Vec<Step<T>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn observe(&mut self, event: Event, v: &[T]) {
        self.steps.push(Step {
            event,
            snapshot: v.to_vec(),
        });
    }
}
