// frontend_redirect/src/redirect.rs
//! Mount-triggered one-shot navigation, decoupled from the UI framework.

/// The navigation collaborator: requests a client-side route change.
///
/// Fire-and-forget from the caller's perspective. No return value is
/// consumed and no error is observed; failures surface through whatever
/// default handling the hosting environment provides.
pub trait Navigation {
    fn push(&self, path: &str);
}

/// Performs a single navigation to a fixed destination when told the
/// component has mounted.
pub struct MountRedirect<N: Navigation> {
    destination: String,
    navigation: N,
    diagnostic: Option<Box<dyn Fn(&str)>>,
}

impl<N: Navigation> MountRedirect<N> {
    pub fn new(destination: impl Into<String>, navigation: N) -> Self {
        Self {
            destination: destination.into(),
            navigation,
            diagnostic: None,
        }
    }

    /// Install a diagnostic hook; it receives one line per fired navigation,
    /// immediately before the push.
    pub fn with_diagnostic(mut self, hook: impl Fn(&str) + 'static) -> Self {
        self.diagnostic = Some(Box::new(hook));
        self
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Explicit state-transition callback for the mount flag.
    ///
    /// Fires whenever the new value is `true`; holds no internal latch, so
    /// the at-most-once guarantee comes from the mount signal's contract
    /// (false to true at most once per component lifetime), not from here.
    pub fn on_mount_change(&self, mounted: bool) {
        if !mounted {
            return;
        }
        if let Some(diagnostic) = &self.diagnostic {
            diagnostic(&format!("push to {}", self.destination));
        }
        self.navigation.push(&self.destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingNav {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Navigation for RecordingNav {
        fn push(&self, path: &str) {
            self.events.borrow_mut().push(format!("push:{path}"));
        }
    }

    fn redirect_with_log(nav: RecordingNav) -> MountRedirect<RecordingNav> {
        let events = nav.events.clone();
        MountRedirect::new("/about", nav)
            .with_diagnostic(move |line| events.borrow_mut().push(format!("log:{line}")))
    }

    #[test]
    fn unmounted_produces_no_side_effects() {
        let nav = RecordingNav::default();
        let events = nav.events.clone();
        let redirect = redirect_with_log(nav);

        redirect.on_mount_change(false);
        redirect.on_mount_change(false);
        redirect.on_mount_change(false);

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn single_transition_logs_then_pushes_once() {
        let nav = RecordingNav::default();
        let events = nav.events.clone();
        let redirect = redirect_with_log(nav);

        redirect.on_mount_change(false);
        redirect.on_mount_change(true);

        assert_eq!(
            *events.borrow(),
            vec!["log:push to /about".to_string(), "push:/about".to_string()]
        );
    }

    #[test]
    fn rearms_on_each_true_transition() {
        let nav = RecordingNav::default();
        let events = nav.events.clone();
        let redirect = redirect_with_log(nav);

        redirect.on_mount_change(true);
        redirect.on_mount_change(false);
        redirect.on_mount_change(true);

        let pushes = events.borrow().iter().filter(|e| e.starts_with("push:")).count();
        assert_eq!(pushes, 2);
    }

    #[test]
    fn fires_without_diagnostic_hook() {
        let nav = RecordingNav::default();
        let events = nav.events.clone();
        let redirect = MountRedirect::new("/about", nav);

        redirect.on_mount_change(true);

        assert_eq!(*events.borrow(), vec!["push:/about".to_string()]);
    }

    #[test]
    fn dropped_before_mount_is_silent() {
        let nav = RecordingNav::default();
        let events = nav.events.clone();
        let redirect = redirect_with_log(nav);
        assert_eq!(redirect.destination(), "/about");
        drop(redirect);

        assert!(events.borrow().is_empty());
    }
}
