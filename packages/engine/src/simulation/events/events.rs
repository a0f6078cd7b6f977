//! Typed host events, queued between frames and drained at the start of a tick

use std::collections::VecDeque;

use crate::domain::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StageEvent {
    Resize { width: f32, height: f32 },
    Scroll,
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
}

/// FIFO of pending events.
///
/// Resizes are last-write-wins: a newer resize supersedes any pending one, so
/// a burst of resize signals turns into a single wall swap. Consecutive
/// pointer moves collapse into the latest position.
#[derive(Default, Debug)]
pub struct EventQueue {
    pending: VecDeque<StageEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { pending: VecDeque::with_capacity(16) }
    }

    pub fn push(&mut self, event: StageEvent) {
        match event {
            StageEvent::Resize { .. } => {
                let pending = self.pending.iter_mut().find(|e| matches!(e, StageEvent::Resize { .. }));
                if let Some(slot) = pending {
                    *slot = event;
                    return;
                }
            }
            StageEvent::PointerMove(_) => {
                if let Some(StageEvent::PointerMove(_)) = self.pending.back() {
                    self.pending.pop_back();
                }
            }
            _ => {}
        }
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<StageEvent> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_last_write_wins() {
        let mut q = EventQueue::new();
        q.push(StageEvent::Resize { width: 100.0, height: 100.0 });
        q.push(StageEvent::Scroll);
        q.push(StageEvent::Resize { width: 300.0, height: 200.0 });
        q.push(StageEvent::Resize { width: 640.0, height: 480.0 });

        // the pending resize keeps its place ahead of the scroll
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some(StageEvent::Resize { width: 640.0, height: 480.0 }));
        assert_eq!(q.pop(), Some(StageEvent::Scroll));
        assert!(q.is_empty());
    }

    #[test]
    fn pointer_moves_collapse_but_keep_order_around_presses() {
        let mut q = EventQueue::new();
        q.push(StageEvent::PointerDown(Vec2::new(1.0, 1.0)));
        q.push(StageEvent::PointerMove(Vec2::new(2.0, 2.0)));
        q.push(StageEvent::PointerMove(Vec2::new(3.0, 3.0)));
        q.push(StageEvent::PointerUp);
        q.push(StageEvent::PointerMove(Vec2::new(4.0, 4.0)));

        let drained: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(
            drained,
            vec![
                StageEvent::PointerDown(Vec2::new(1.0, 1.0)),
                StageEvent::PointerMove(Vec2::new(3.0, 3.0)),
                StageEvent::PointerUp,
                StageEvent::PointerMove(Vec2::new(4.0, 4.0)),
            ]
        );
    }
}
