//! Single-threaded observable value shared between the host page and the layers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Inner<T> {
    value: Cell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: Cell<u64>,
    notifying: Cell<bool>,
    dirty: Cell<bool>,
}

/// Shared value cell with change notification.
///
/// Clones are handles to the same value, so a holder always observes the
/// latest `set`. Subscribers run synchronously inside `set`, and only when
/// the value actually changes. A `set` issued from within a subscriber is
/// stored immediately and announced once the current round has finished.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Copy + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: Cell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                notifying: Cell::new(false),
                dirty: Cell::new(false),
            }),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    pub fn set(&self, value: T) {
        if self.inner.value.get() == value {
            return;
        }
        self.inner.value.set(value);
        if self.inner.notifying.get() {
            self.inner.dirty.set(true);
            return;
        }
        self.inner.notifying.set(true);
        loop {
            self.inner.dirty.set(false);
            let current = self.inner.value.get();
            // Snapshot so subscribers may (un)subscribe while being notified
            let subscribers: Vec<Subscriber<T>> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(_, s)| s.clone())
                .collect();
            for s in subscribers {
                if let Ok(mut f) = s.try_borrow_mut() {
                    (&mut *f)(current);
                }
            }
            if !self.inner.dirty.get() {
                break;
            }
        }
        self.inner.notifying.set(false);
    }

    pub fn subscribe(&self, f: impl FnMut(T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let subscriber: Subscriber<T> = Rc::new(RefCell::new(f));
        self.inner.subscribers.borrow_mut().push((id, subscriber));
        id
    }

    /// Returns false when `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.inner.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.inner.value.get())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}
