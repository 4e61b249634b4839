/// Receives progression events from a [`Session`](super::Session).
///
/// `on_case_complete` is called once for every investigation whose completion delay
/// elapses. `on_level_complete` is called at most once per session, right after the
/// completion that first meets the level threshold.
pub trait SessionObserver {
    fn on_case_complete(&mut self, case_id: &str);

    fn on_level_complete(&mut self);
}

impl SessionObserver for () {
    fn on_case_complete(&mut self, _case_id: &str) {}

    fn on_level_complete(&mut self) {}
}

impl<T: SessionObserver + ?Sized> SessionObserver for Box<T> {
    fn on_case_complete(&mut self, case_id: &str) {
        (**self).on_case_complete(case_id);
    }

    fn on_level_complete(&mut self) {
        (**self).on_level_complete();
    }
}
