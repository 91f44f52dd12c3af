//! Ordered callback registry used by the store for fan-out.

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

pub(crate) struct Observers<T> {
    next_id: u64,
    entries: Vec<(Subscription, Callback<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Observers<T> {
    pub(crate) fn insert(&mut self, callback: Callback<T>) -> Subscription {
        let sub = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((sub, callback));
        sub
    }

    /// Returns `false` when `sub` was not registered (already removed).
    pub(crate) fn remove(&mut self, sub: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != sub);
        self.entries.len() != before
    }

    /// Call every observer with `value`, in subscription order.
    pub(crate) fn notify(&mut self, value: &T) {
        for (_, callback) in self.entries.iter_mut() {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
