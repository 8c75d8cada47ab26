/// A hook called once per echo time trial.
///
/// The search hands each event to the observer and reads back an optional
/// action. `None` leaves the trial as evaluated. `Some(action)` asks the
/// search to stop, or to use a different verdict for the trial.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` is the observer
/// that never acts and is what the `*_unobserved` entry points pass.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
