use std::fmt;

use crate::{Result, ShowcaseError};

/// Handle returned by [`SlideIndexController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(usize)>;

/// Wrap-around cursor over a fixed number of slides.
///
/// The index is the only mutable state and always lies in `[0, len - 1]`.
/// Observers run synchronously, in registration order, inside the call that
/// changed the index and receive the new index only. They are not `Send`, so
/// a controller stays with the single owner that drives it.
pub struct SlideIndexController {
    index: usize,
    len: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl SlideIndexController {
    /// Creates a controller over `len` slides starting at `initial`.
    ///
    /// Construction is permissive: an out-of-range `initial` is clamped into
    /// `[0, len - 1]`. A `len` of zero is rejected.
    pub fn new(len: usize, initial: isize) -> Result<Self> {
        if len == 0 {
            return Err(ShowcaseError::InvalidCatalogSize(len));
        }

        let index = usize::try_from(initial).unwrap_or(0).min(len - 1);
        Ok(Self {
            index,
            len,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Creates a controller over `len` slides starting at the first one.
    pub fn with_len(len: usize) -> Result<Self> {
        Self::new(len, 0)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A carousel always holds at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the index after re-checking the bounds invariant.
    pub fn checked_index(&self) -> Result<usize> {
        if self.index < self.len {
            Ok(self.index)
        } else {
            Err(ShowcaseError::InvariantViolation {
                index: self.index,
                len: self.len,
            })
        }
    }

    /// Moves to the next slide, wrapping from the last to the first.
    pub fn advance(&mut self) -> usize {
        let next = (self.index + 1) % self.len;
        self.set_index(next);
        self.index
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        let previous = (self.index + self.len - 1) % self.len;
        self.set_index(previous);
        self.index
    }

    /// Selects an arbitrary slide.
    ///
    /// Unlike construction this path never clamps: a target outside
    /// `[0, len - 1]` fails with [`ShowcaseError::OutOfRangeIndex`] and the
    /// current index is kept.
    pub fn jump_to(&mut self, target: isize) -> Result<usize> {
        let Some(position) = usize::try_from(target).ok().filter(|t| *t < self.len) else {
            tracing::warn!(slide = target, len = self.len, "rejected out of range slide jump");
            return Err(ShowcaseError::OutOfRangeIndex {
                target,
                len: self.len,
            });
        };

        self.set_index(position);
        Ok(self.index)
    }

    /// Registers an observer that receives every new index.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(usize) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` when the handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn set_index(&mut self, index: usize) {
        debug_assert!(index < self.len);
        if index == self.index {
            return;
        }

        tracing::debug!(from = self.index, to = index, "slide changed");
        self.index = index;
        for (_, observer) in &mut self.observers {
            observer(index);
        }
    }
}

impl fmt::Debug for SlideIndexController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideIndexController")
            .field("index", &self.index)
            .field("len", &self.len)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recorder(controller: &mut SlideIndexController) -> Rc<RefCell<Vec<usize>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |index| sink.borrow_mut().push(index));
        seen
    }

    #[test]
    fn rejects_empty_carousel() {
        let err = SlideIndexController::with_len(0).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidCatalogSize(0)));
    }

    #[test]
    fn clamps_initial_index_at_construction() {
        assert_eq!(SlideIndexController::new(5, -3).unwrap().current_index(), 0);
        assert_eq!(SlideIndexController::new(5, 42).unwrap().current_index(), 4);
        assert_eq!(SlideIndexController::new(5, 3).unwrap().current_index(), 3);
    }

    #[test]
    fn wraps_in_both_directions() {
        for len in 2..8 {
            let mut controller = SlideIndexController::with_len(len).unwrap();
            assert_eq!(controller.retreat(), len - 1);

            let mut controller = SlideIndexController::new(len, len as isize - 1).unwrap();
            assert_eq!(controller.advance(), 0);
        }
    }

    #[test]
    fn single_slide_never_notifies() {
        let mut controller = SlideIndexController::with_len(1).unwrap();
        let seen = recorder(&mut controller);

        assert_eq!(controller.advance(), 0);
        assert_eq!(controller.retreat(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn advance_then_retreat_restores_position() {
        for len in 1..6 {
            for start in 0..len {
                let mut controller = SlideIndexController::new(len, start as isize).unwrap();
                controller.advance();
                controller.retreat();
                assert_eq!(controller.current_index(), start);

                controller.retreat();
                controller.advance();
                assert_eq!(controller.current_index(), start);
            }
        }
    }

    #[test]
    fn rejected_jumps_leave_state_unchanged() {
        let mut controller = SlideIndexController::new(5, 3).unwrap();
        let seen = recorder(&mut controller);

        for target in [5, -1, isize::MIN, isize::MAX] {
            let err = controller.jump_to(target).unwrap_err();
            assert!(matches!(err, ShowcaseError::OutOfRangeIndex { len: 5, .. }));
            assert_eq!(controller.current_index(), 3);
            assert_eq!(controller.checked_index().unwrap(), 3);
        }
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn notifies_only_on_change() {
        let mut controller = SlideIndexController::new(5, 2).unwrap();
        let seen = recorder(&mut controller);

        controller.jump_to(2).unwrap();
        assert!(seen.borrow().is_empty());

        controller.jump_to(4).unwrap();
        assert_eq!(*seen.borrow(), vec![4]);
    }

    #[test]
    fn observers_run_in_registration_order() {
        let mut controller = SlideIndexController::with_len(3).unwrap();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            controller.subscribe(move |index| sink.borrow_mut().push((tag, index)));
        }

        controller.advance();
        assert_eq!(
            *order.borrow(),
            vec![("first", 1), ("second", 1), ("third", 1)]
        );
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let mut controller = SlideIndexController::with_len(4).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = controller.subscribe(move |index| sink.borrow_mut().push(index));

        controller.advance();
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.advance();

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(controller.observer_count(), 0);
    }

    #[test]
    fn index_stays_in_bounds_over_mixed_operations() {
        let mut controller = SlideIndexController::with_len(3).unwrap();
        for step in 0..60_isize {
            match step % 4 {
                0 => {
                    controller.advance();
                }
                1 => {
                    controller.retreat();
                }
                2 => {
                    let _ = controller.jump_to(step % 5 - 1);
                }
                _ => {
                    controller.advance();
                    controller.advance();
                }
            }
            assert!(controller.current_index() < controller.len());
        }
    }

    #[test]
    fn walks_the_event_asset_ring() {
        let mut controller = SlideIndexController::with_len(5).unwrap();
        let seen = recorder(&mut controller);

        assert_eq!(controller.advance(), 1);
        for _ in 0..3 {
            controller.advance();
        }
        assert_eq!(controller.current_index(), 4);
        assert_eq!(controller.advance(), 0);
        assert_eq!(controller.retreat(), 4);

        seen.borrow_mut().clear();
        assert_eq!(controller.jump_to(2).unwrap(), 2);
        assert_eq!(*seen.borrow(), vec![2]);

        assert!(matches!(
            controller.jump_to(9),
            Err(ShowcaseError::OutOfRangeIndex { target: 9, len: 5 })
        ));
        assert_eq!(controller.current_index(), 2);
    }
}
