/// Handle returned by [`Observers::bind`]; pass it to [`Observers::unbind`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BindingId(u64);

/// Explicit property-change callbacks.
///
/// Callbacks run synchronously, in registration order, on every [`notify`](Self::notify).
pub struct Observers<T: ?Sized> {
    next_id: u64,
    callbacks: Vec<(BindingId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T: ?Sized> Observers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, f: impl FnMut(&T) + 'static) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(f)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not bound.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(bound, _)| *bound != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (_, f) in &mut self.callbacks {
            f(value);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: ?Sized> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observers::<i32>::new();
        let l1 = log.clone();
        obs.bind(move |v| l1.borrow_mut().push(("a", *v)));
        let l2 = log.clone();
        obs.bind(move |v| l2.borrow_mut().push(("b", *v)));

        obs.notify(&7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unbind_stops_notifications() {
        let hits = Rc::new(RefCell::new(0));
        let mut obs = Observers::<str>::new();
        let h = hits.clone();
        let id = obs.bind(move |_| *h.borrow_mut() += 1);

        obs.notify("x");
        assert!(obs.unbind(id));
        assert!(!obs.unbind(id));
        obs.notify("y");
        assert_eq!(*hits.borrow(), 1);
        assert!(obs.is_empty());
    }
}
