//! Type-aligned continuation queue for stack-safe resolution.
//!
//! Based on "Reflection without Remorse": pending continuations are kept in a
//! FIFO queue instead of being nested inside each other, so appending one more
//! step costs O(1) no matter how long the chain already is, and running the
//! chain needs no recursion.
//!
//! The queue stores type-erased arrows from `I` to `O`. [`QueueStack`] tracks
//! the queues of chains that were spliced in while another chain was still
//! running; the most recently spliced queue drains first.

use std::collections::VecDeque;

use smallvec::SmallVec;

/// A one-shot, type-erased continuation step.
pub(crate) trait TypeErasedArrow<I, O> {
    /// Runs the step.
    fn apply(self: Box<Self>, input: I) -> O;
}

impl<I, O, F> TypeErasedArrow<I, O> for F
where
    F: FnOnce(I) -> O,
{
    #[inline]
    fn apply(self: Box<Self>, input: I) -> O {
        (*self)(input)
    }
}

/// A boxed arrow.
pub(crate) type Arrow<I, O> = Box<dyn TypeErasedArrow<I, O>>;

/// FIFO queue of pending arrows.
pub(crate) struct ContinuationQueue<I, O> {
    arrows: VecDeque<Arrow<I, O>>,
}

impl<I, O> ContinuationQueue<I, O> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            arrows: VecDeque::new(),
        }
    }

    #[inline]
    pub(crate) fn singleton(arrow: Arrow<I, O>) -> Self {
        let mut queue = Self::new();
        queue.push_arrow(arrow);
        queue
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.arrows.len()
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Arrow<I, O>> {
        self.arrows.pop_front()
    }

    #[inline]
    pub(crate) fn push_arrow(&mut self, arrow: Arrow<I, O>) {
        self.arrows.push_back(arrow);
    }
}

impl<I, O> Default for ContinuationQueue<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stack of queues; nested chains are short, so a few fit inline.
pub(crate) struct QueueStack<I, O> {
    current: ContinuationQueue<I, O>,
    pending: SmallVec<[ContinuationQueue<I, O>; 4]>,
}

impl<I, O> QueueStack<I, O> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            current: ContinuationQueue::new(),
            pending: SmallVec::new(),
        }
    }

    /// Makes `queue` current. Its arrows run before any already queued.
    #[inline]
    pub(crate) fn push_queue(&mut self, queue: ContinuationQueue<I, O>) {
        if queue.is_empty() {
            return;
        }
        let previous = std::mem::replace(&mut self.current, queue);
        if !previous.is_empty() {
            self.pending.push(previous);
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Arrow<I, O>> {
        loop {
            if let Some(arrow) = self.current.pop() {
                return Some(arrow);
            }
            self.current = self.pending.pop()?;
        }
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.current.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add(amount: i32) -> Arrow<i32, i32> {
        Box::new(move |input: i32| input + amount)
    }

    fn multiply(factor: i32) -> Arrow<i32, i32> {
        Box::new(move |input: i32| input * factor)
    }

    fn drain(stack: &mut QueueStack<i32, i32>, mut value: i32) -> i32 {
        while let Some(arrow) = stack.pop() {
            value = arrow.apply(value);
        }
        value
    }

    #[rstest]
    fn queue_pops_in_fifo_order() {
        let mut queue = ContinuationQueue::new();
        queue.push_arrow(add(1));
        queue.push_arrow(multiply(2));
        assert_eq!(queue.len(), 2);

        let first = queue.pop().map(|arrow| arrow.apply(10));
        let second = queue.pop().map(|arrow| arrow.apply(10));
        assert_eq!(first, Some(11));
        assert_eq!(second, Some(20));
        assert!(queue.pop().is_none());
    }

    #[rstest]
    fn singleton_holds_one_arrow() {
        let queue = ContinuationQueue::singleton(add(3));
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }

    #[rstest]
    fn stack_runs_spliced_queue_first() {
        let mut stack = QueueStack::new();
        stack.push_queue(ContinuationQueue::singleton(add(1)));
        stack.push_queue(ContinuationQueue::singleton(multiply(10)));
        // (5 * 10) + 1
        assert_eq!(drain(&mut stack, 5), 51);
        assert!(stack.is_exhausted());
    }

    #[rstest]
    fn pushing_empty_queue_keeps_current() {
        let mut stack = QueueStack::new();
        stack.push_queue(ContinuationQueue::singleton(add(1)));
        stack.push_queue(ContinuationQueue::new());
        assert_eq!(drain(&mut stack, 1), 2);
    }

    #[rstest]
    fn many_nested_queues_drain_in_lifo_order() {
        let mut stack = QueueStack::new();
        for amount in 1..=10 {
            let mut queue = ContinuationQueue::new();
            queue.push_arrow(multiply(2));
            queue.push_arrow(add(amount));
            stack.push_queue(queue);
        }
        let mut expected = 0;
        for amount in (1..=10).rev() {
            expected = expected * 2 + amount;
        }
        assert_eq!(drain(&mut stack, 0), expected);
    }
}
