// ── Dialog requests & flag composition ────────────────────────────────────────
//
// The domain-level description of a message box and the pure function that
// folds it into the native `MessageBoxW` style word.  No `unsafe`, no I/O:
// everything here is plain data and can be tested on any target.

use std::num::NonZeroIsize;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// ── Native style word ─────────────────────────────────────────────────────────

bitflags! {
    /// The composed `uType` argument handed to `MessageBoxW`.
    ///
    /// The style word is made of four independent groups: buttons (low
    /// nibble), icon (second nibble), default button (third nibble) and
    /// modality.  The value of each group that is encoded as zero (`MB_OK`,
    /// no icon, `MB_DEFBUTTON1`, `MB_APPLMODAL`) has no constant here; it is
    /// simply the absence of bits in that group.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Style: u32 {
        const OK_CANCEL          = 0x0000_0001;
        const ABORT_RETRY_IGNORE = 0x0000_0002;
        const YES_NO_CANCEL      = 0x0000_0003;
        const YES_NO             = 0x0000_0004;
        const RETRY_CANCEL       = 0x0000_0005;
        const CANCEL_TRY_CONTINUE = 0x0000_0006;

        const ICON_ERROR       = 0x0000_0010;
        const ICON_QUESTION    = 0x0000_0020;
        const ICON_WARNING     = 0x0000_0030;
        const ICON_INFORMATION = 0x0000_0040;

        const DEFAULT_BUTTON_2 = 0x0000_0100;
        const DEFAULT_BUTTON_3 = 0x0000_0200;
        const DEFAULT_BUTTON_4 = 0x0000_0300;

        const TASK_MODAL = 0x0000_2000;
    }
}

const BUTTONS_MASK: u32 = 0x0000_000F;
const ICON_MASK: u32 = 0x0000_00F0;
const DEFAULT_BUTTON_MASK: u32 = 0x0000_0F00;

impl Style {
    /// The button-set group of this style, if it holds a known value.
    pub fn button_set(self) -> Option<ButtonSet> {
        ButtonSet::from_raw(self.bits() & BUTTONS_MASK)
    }

    /// The icon group of this style, if it holds a known value.
    pub fn icon(self) -> Option<Icon> {
        Icon::from_raw(self.bits() & ICON_MASK)
    }

    /// The default-button group of this style.
    pub fn default_button(self) -> Option<DefaultButton> {
        DefaultButton::from_raw(self.bits() & DEFAULT_BUTTON_MASK)
    }

    pub fn modality(self) -> Modality {
        if self.contains(Style::TASK_MODAL) {
            Modality::Task
        } else {
            Modality::Application
        }
    }
}

// ── Button set ────────────────────────────────────────────────────────────────

/// Which push buttons the message box shows (`MB_OK` … `MB_CANCELTRYCONTINUE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ButtonSet {
    /// A single OK button.
    #[default]
    Ok = 0x0,
    OkCancel = 0x1,
    AbortRetryIgnore = 0x2,
    YesNoCancel = 0x3,
    YesNo = 0x4,
    RetryCancel = 0x5,
    /// Cancel, Try Again, Continue.  Preferred over `AbortRetryIgnore`.
    CancelTryContinue = 0x6,
}

impl ButtonSet {
    pub const ALL: [ButtonSet; 7] = [
        Self::Ok,
        Self::OkCancel,
        Self::AbortRetryIgnore,
        Self::YesNoCancel,
        Self::YesNo,
        Self::RetryCancel,
        Self::CancelTryContinue,
    ];

    pub fn raw(self) -> u32 {
        self as u32
    }

    fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.raw() == raw)
    }
}

// ── Icon ──────────────────────────────────────────────────────────────────────

/// The icon shown next to the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum Icon {
    #[default]
    None = 0x00,
    /// Stop sign (`MB_ICONERROR`, `MB_ICONSTOP`, `MB_ICONHAND`).
    #[serde(alias = "stop", alias = "hand")]
    Error = 0x10,
    Question = 0x20,
    /// Exclamation point (`MB_ICONWARNING`, `MB_ICONEXCLAMATION`).
    #[serde(alias = "exclamation")]
    Warning = 0x30,
    /// Lowercase "i" in a circle (`MB_ICONINFORMATION`, `MB_ICONASTERISK`).
    #[serde(alias = "asterisk")]
    Information = 0x40,
}

impl Icon {
    pub const STOP: Icon = Icon::Error;
    pub const HAND: Icon = Icon::Error;
    pub const EXCLAMATION: Icon = Icon::Warning;
    pub const ASTERISK: Icon = Icon::Information;

    pub const ALL: [Icon; 5] = [
        Self::None,
        Self::Error,
        Self::Question,
        Self::Warning,
        Self::Information,
    ];

    pub fn raw(self) -> u32 {
        self as u32
    }

    fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.raw() == raw)
    }
}

// ── Default button ────────────────────────────────────────────────────────────

/// Which button has keyboard focus when the box opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum DefaultButton {
    #[default]
    First = 0x000,
    Second = 0x100,
    Third = 0x200,
    Fourth = 0x300,
}

impl DefaultButton {
    pub const ALL: [DefaultButton; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    pub fn raw(self) -> u32 {
        self as u32
    }

    fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.raw() == raw)
    }
}

// ── Modality ──────────────────────────────────────────────────────────────────

/// How much of the calling application the message box blocks.
///
/// Never stored: always derived from whether the request has an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// `MB_APPLMODAL`: only the owner window's hierarchy is disabled.
    Application,
    /// `MB_TASKMODAL`: every top-level window of the calling thread is
    /// disabled.  Used when there is no owner to attach to.
    Task,
}

impl Modality {
    pub fn for_owner(has_owner: bool) -> Self {
        if has_owner {
            Self::Application
        } else {
            Self::Task
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::Application => 0x0000_0000,
            Self::Task => Style::TASK_MODAL.bits(),
        }
    }
}

// ── Owner handle ──────────────────────────────────────────────────────────────

/// An opaque reference to the parent window (an `HWND` on Windows).
///
/// A null handle cannot be represented; "no owner" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerHandle(NonZeroIsize);

impl OwnerHandle {
    /// Wrap a raw window handle.  Returns `None` for the null handle.
    pub fn from_raw(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(Self)
    }

    pub fn as_raw(self) -> isize {
        self.0.get()
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Fold the three selections and the owner's presence into one style word.
///
/// Total: every combination of enum members is valid.
pub fn compose(
    buttons: ButtonSet,
    icon: Icon,
    default_button: DefaultButton,
    has_owner: bool,
) -> Style {
    Style::from_bits_retain(
        Modality::for_owner(has_owner).raw() | buttons.raw() | icon.raw() | default_button.raw(),
    )
}

// ── DialogRequest ─────────────────────────────────────────────────────────────

/// Everything needed to show one message box.
///
/// Built with [`DialogRequest::new`] and the chained setters, or deserialized
/// from JSON (see `config.rs`); every field but `text` is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    #[serde(default)]
    pub owner: Option<OwnerHandle>,
    pub text: String,
    /// Title bar text.  Empty means the platform default.
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub buttons: ButtonSet,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub default_button: DefaultButton,
}

impl DialogRequest {
    /// An OK-only, icon-less, unowned request with an empty caption.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            owner: None,
            text: text.into(),
            caption: String::new(),
            buttons: ButtonSet::default(),
            icon: Icon::default(),
            default_button: DefaultButton::default(),
        }
    }

    pub fn owner(mut self, owner: Option<OwnerHandle>) -> Self {
        self.owner = owner;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn default_button(mut self, default_button: DefaultButton) -> Self {
        self.default_button = default_button;
        self
    }

    pub fn modality(&self) -> Modality {
        Modality::for_owner(self.owner.is_some())
    }

    /// The native style word for this request.
    pub fn style(&self) -> Style {
        compose(
            self.buttons,
            self.icon,
            self.default_button,
            self.owner.is_some(),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
