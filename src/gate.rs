// ── Dialog gate ───────────────────────────────────────────────────────────────
//
// Serializes every call into the blocking native message box.  Exactly one
// `DialogGate` per backend is meant to exist for the real OS primitive (see
// `DialogGate::global`); tests build their own around a fake backend.
//
// State machine:
//
//   Idle ──show──▶ Displaying (lock held, flag set, native call in flight)
//    ▲                          │
//    └──── native call returns ─┘   (success, failure, error or unwind)

use std::sync::{
    atomic::{AtomicBool, Ordering},
    OnceLock,
};

use log::{debug, trace, warn};
use parking_lot::{Mutex, MutexGuard};

use crate::{
    error::{GateError, Result},
    outcome::{self, DialogOutcome},
    platform::SystemDialog,
    request::{ButtonSet, DefaultButton, DialogRequest, Icon, OwnerHandle, Style},
};

// ── Native boundary ───────────────────────────────────────────────────────────

/// The blocking message-box primitive.
///
/// Implementations block the calling thread until the user dismisses the box
/// and return the raw result code.  A return of `Ok(0)` is the platform's
/// failure sentinel and is reported by the gate as
/// [`GateError::Invocation`]; an implementation may also report the failure
/// itself with richer detail.
pub trait NativeDialog: Send + Sync {
    fn message_box(
        &self,
        owner: Option<OwnerHandle>,
        text: &str,
        caption: &str,
        style: Style,
    ) -> Result<i32>;
}

/// Name reported in [`GateError::Invocation`] for a bare failure sentinel.
const NATIVE_FUNCTION: &str = "MessageBoxW";

// ── DialogGate ────────────────────────────────────────────────────────────────

/// Admits one message box at a time.
///
/// Calls from any thread queue on an internal lock; the order in which
/// waiters are admitted is unspecified.  The lock is not re-entrant: a
/// `show` issued from inside a backend call on the same thread deadlocks
/// rather than stacking a second box.
pub struct DialogGate<B> {
    backend: B,
    lock: Mutex<()>,
    displaying: AtomicBool,
}

impl<B: NativeDialog> DialogGate<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            lock: Mutex::new(()),
            displaying: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `true` while a message box is up.
    ///
    /// Advisory only: the value may be stale by the time the caller looks at
    /// it.  Good for greying out a button, not for deciding whether `show`
    /// will block.
    pub fn is_displaying(&self) -> bool {
        self.displaying.load(Ordering::Acquire)
    }

    /// Show `text` with an empty caption and an OK button.
    pub fn show(&self, owner: Option<OwnerHandle>, text: &str) -> Result<DialogOutcome> {
        self.show_request(&DialogRequest::new(text).owner(owner))
    }

    /// Show `text` under `caption` with an OK button.
    pub fn show_with_caption(
        &self,
        owner: Option<OwnerHandle>,
        text: &str,
        caption: &str,
    ) -> Result<DialogOutcome> {
        self.show_request(&DialogRequest::new(text).owner(owner).caption(caption))
    }

    /// Show a fully specified message box.
    pub fn show_with(
        &self,
        owner: Option<OwnerHandle>,
        text: &str,
        caption: &str,
        buttons: ButtonSet,
        icon: Icon,
        default_button: DefaultButton,
    ) -> Result<DialogOutcome> {
        let request = DialogRequest::new(text)
            .owner(owner)
            .caption(caption)
            .buttons(buttons)
            .icon(icon)
            .default_button(default_button);
        self.show_request(&request)
    }

    /// Show `request`, waiting for any box already on screen to close first.
    pub fn show_request(&self, request: &DialogRequest) -> Result<DialogOutcome> {
        if self.is_displaying() {
            trace!("message box already up; waiting for the gate");
        }
        let guard = Displaying::enter(self.lock.lock(), &self.displaying);
        self.invoke(guard, request)
    }

    /// Show `request` only if no other box is up.
    ///
    /// Returns `Ok(None)` without blocking when the gate is taken.
    pub fn try_show(&self, request: &DialogRequest) -> Result<Option<DialogOutcome>> {
        let Some(lock) = self.lock.try_lock() else {
            trace!("message box already up; declining");
            return Ok(None);
        };
        let guard = Displaying::enter(lock, &self.displaying);
        self.invoke(guard, request).map(Some)
    }

    fn invoke(&self, guard: Displaying<'_>, request: &DialogRequest) -> Result<DialogOutcome> {
        let style = request.style();
        debug!(
            "showing message box (style {:#06x}, owner {:?})",
            style.bits(),
            request.owner.map(OwnerHandle::as_raw)
        );

        let code = self
            .backend
            .message_box(request.owner, &request.text, &request.caption, style);

        // Clear the flag and release the lock before anything else can fail.
        drop(guard);

        let code = match code {
            Ok(outcome::FAILURE) => {
                warn!("{NATIVE_FUNCTION} returned the failure sentinel");
                return Err(GateError::Invocation {
                    function: NATIVE_FUNCTION,
                    code: 0,
                });
            }
            Ok(code) => code,
            Err(e) => {
                warn!("message box failed: {e}");
                return Err(e);
            }
        };

        let outcome = outcome::translate(code);
        if outcome == DialogOutcome::None {
            debug!("unrecognised message box result {code}");
        } else {
            debug!("message box dismissed with {outcome}");
        }
        Ok(outcome)
    }
}

// ── Process-wide instance ─────────────────────────────────────────────────────

static SYSTEM_GATE: OnceLock<DialogGate<SystemDialog>> = OnceLock::new();

impl DialogGate<SystemDialog> {
    /// The gate in front of the operating system's own message box.
    ///
    /// Created on first use; every caller in the process shares it.
    pub fn global() -> &'static Self {
        SYSTEM_GATE.get_or_init(|| DialogGate::new(SystemDialog::default()))
    }
}

// ── Scoped display state ──────────────────────────────────────────────────────

/// Holds the gate's lock and keeps the displaying flag raised.
///
/// Dropping it lowers the flag and then releases the lock, on every exit
/// path including unwinding out of the backend.
struct Displaying<'a> {
    _lock: MutexGuard<'a, ()>,
    flag: &'a AtomicBool,
}

impl<'a> Displaying<'a> {
    fn enter(lock: MutexGuard<'a, ()>, flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self { _lock: lock, flag }
    }
}

impl Drop for Displaying<'_> {
    fn drop(&mut self) {
        // Runs before the fields drop, so the flag is down before the next
        // waiter can take the lock.
        self.flag.store(false, Ordering::Release);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicI32, AtomicUsize},
        Arc,
    };

    use super::*;
    use crate::request::Modality;

    /// What the fake saw on its most recent call.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Seen {
        owner: Option<isize>,
        text: String,
        caption: String,
        style: u32,
    }

    /// Returns a fixed code and records its arguments.
    struct Canned {
        code: i32,
        seen: Mutex<Option<Seen>>,
    }

    impl Canned {
        fn new(code: i32) -> Self {
            Self {
                code,
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> Seen {
            self.seen.lock().clone().expect("backend was called")
        }
    }

    impl NativeDialog for Canned {
        fn message_box(
            &self,
            owner: Option<OwnerHandle>,
            text: &str,
            caption: &str,
            style: Style,
        ) -> Result<i32> {
            *self.seen.lock() = Some(Seen {
                owner: owner.map(OwnerHandle::as_raw),
                text: text.to_owned(),
                caption: caption.to_owned(),
                style: style.bits(),
            });
            Ok(self.code)
        }
    }

    fn canned_gate(code: i32) -> DialogGate<Canned> {
        DialogGate::new(Canned::new(code))
    }

    #[test]
    fn short_form_uses_defaults() {
        let gate = canned_gate(outcome::IDOK);
        assert_eq!(gate.show(None, "hello").unwrap(), DialogOutcome::Ok);

        let seen = gate.backend().seen();
        assert_eq!(seen.text, "hello");
        assert_eq!(seen.caption, "");
        assert_eq!(seen.owner, None);
        let style = Style::from_bits_retain(seen.style);
        assert_eq!(style.button_set(), Some(ButtonSet::Ok));
        assert_eq!(style.icon(), Some(Icon::None));
        assert_eq!(style.default_button(), Some(DefaultButton::First));
        assert_eq!(style.modality(), Modality::Task);
    }

    #[test]
    fn caption_form_passes_caption() {
        let gate = canned_gate(outcome::IDOK);
        gate.show_with_caption(None, "saved", "Notes").unwrap();
        assert_eq!(gate.backend().seen().caption, "Notes");
    }

    #[test]
    fn confirm_prompt_end_to_end() {
        let gate = canned_gate(outcome::IDNO);
        let outcome = gate
            .show_with(
                None,
                "Proceed?",
                "Confirm",
                ButtonSet::YesNoCancel,
                Icon::Question,
                DefaultButton::Second,
            )
            .unwrap();
        assert_eq!(outcome, DialogOutcome::No);
        assert_eq!(gate.backend().seen().style, 0x2000 | 0x3 | 0x20 | 0x100);
    }

    #[test]
    fn owned_box_is_application_modal() {
        let gate = canned_gate(outcome::IDOK);
        let owner = OwnerHandle::from_raw(0x10_0042);
        gate.show(owner, "x").unwrap();
        let seen = gate.backend().seen();
        assert_eq!(seen.owner, Some(0x10_0042));
        assert_eq!(seen.style & Style::TASK_MODAL.bits(), 0);
    }

    #[test]
    fn flag_is_raised_only_during_the_call() {
        let mirrored = MirrorGate::new();
        assert!(!mirrored.gate.is_displaying());
        assert_eq!(mirrored.show(None, "x").unwrap(), DialogOutcome::Ok);
        assert!(mirrored.seen_displaying());
        assert!(!mirrored.gate.is_displaying());
    }

    /// A gate whose backend reads the gate's own flag during the call.
    struct MirrorGate {
        gate: Arc<DialogGate<Mirror>>,
    }

    struct Mirror {
        gate: OnceLock<std::sync::Weak<DialogGate<Mirror>>>,
        seen: AtomicBool,
    }

    impl NativeDialog for Mirror {
        fn message_box(&self, _: Option<OwnerHandle>, _: &str, _: &str, _: Style) -> Result<i32> {
            let up = self
                .gate
                .get()
                .and_then(std::sync::Weak::upgrade)
                .is_some_and(|g| g.is_displaying());
            self.seen.store(up, Ordering::Release);
            Ok(outcome::IDOK)
        }
    }

    impl MirrorGate {
        fn new() -> Self {
            let gate = Arc::new(DialogGate::new(Mirror {
                gate: OnceLock::new(),
                seen: AtomicBool::new(false),
            }));
            let _ = gate.backend().gate.set(Arc::downgrade(&gate));
            Self { gate }
        }

        fn show(&self, owner: Option<OwnerHandle>, text: &str) -> Result<DialogOutcome> {
            self.gate.show(owner, text)
        }

        fn seen_displaying(&self) -> bool {
            self.gate.backend().seen.load(Ordering::Acquire)
        }
    }

    #[test]
    fn failure_sentinel_is_an_error_not_none() {
        let gate = canned_gate(outcome::FAILURE);
        let err = gate.show(None, "x").unwrap_err();
        assert!(matches!(
            err,
            GateError::Invocation {
                function: "MessageBoxW",
                code: 0
            }
        ));
        assert!(!gate.is_displaying());
        // The lock is free again.
        assert!(gate.lock.try_lock().is_some());
    }

    #[test]
    fn backend_error_releases_the_gate() {
        struct Broken;
        impl NativeDialog for Broken {
            fn message_box(&self, _: Option<OwnerHandle>, _: &str, _: &str, _: Style) -> Result<i32> {
                Err(GateError::Invocation {
                    function: "MessageBoxW",
                    code: 1400,
                })
            }
        }
        let gate = DialogGate::new(Broken);
        assert!(matches!(
            gate.show(None, "x"),
            Err(GateError::Invocation { code: 1400, .. })
        ));
        assert!(!gate.is_displaying());
        assert!(gate.lock.try_lock().is_some());
    }

    #[test]
    fn panicking_backend_releases_the_gate() {
        struct Panics;
        impl NativeDialog for Panics {
            fn message_box(&self, _: Option<OwnerHandle>, _: &str, _: &str, _: Style) -> Result<i32> {
                panic!("backend blew up");
            }
        }
        let gate = DialogGate::new(Panics);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| gate.show(None, "x")));
        assert!(result.is_err());
        assert!(!gate.is_displaying());
        assert!(gate.lock.try_lock().is_some());
    }

    #[test]
    fn unmapped_code_is_none() {
        let gate = canned_gate(999);
        assert_eq!(gate.show(None, "x").unwrap(), DialogOutcome::None);
    }

    #[test]
    fn try_show_declines_while_taken() {
        let gate = canned_gate(outcome::IDOK);
        let held = gate.lock.lock();
        let req = DialogRequest::new("x");
        assert_eq!(gate.try_show(&req).unwrap(), None);
        drop(held);
        assert_eq!(gate.try_show(&req).unwrap(), Some(DialogOutcome::Ok));
    }

    #[test]
    fn calls_are_counted_once_each() {
        struct Counting(AtomicUsize, AtomicI32);
        impl NativeDialog for Counting {
            fn message_box(&self, _: Option<OwnerHandle>, _: &str, _: &str, _: Style) -> Result<i32> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(self.1.load(Ordering::SeqCst))
            }
        }
        let gate = DialogGate::new(Counting(AtomicUsize::new(0), AtomicI32::new(outcome::IDYES)));
        assert_eq!(gate.show(None, "a").unwrap(), DialogOutcome::Yes);
        gate.backend().1.store(outcome::IDCANCEL, Ordering::SeqCst);
        assert_eq!(gate.show(None, "b").unwrap(), DialogOutcome::Cancel);
        assert_eq!(gate.backend().0.load(Ordering::SeqCst), 2);
    }
}
