//! Localized response texts.
//!
//! Every login response message is looked up by outcome kind so that the
//! wording can vary by locale without touching the handler's control flow.
//! The Arabic texts are the ones clients of the original deployment expect,
//! reproduced byte for byte.

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Arabic,
}

impl Locale {
    /// Parse a locale tag as found in configuration (`en`, `ar`).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::English),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

/// The four observable outcomes of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    MissingCredentials,
    UnknownUsername,
    WrongPassword,
    Succeeded,
}

/// Outcome-keyed message lookup for a fixed locale.
#[derive(Debug, Clone, Copy)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, outcome: LoginOutcome) -> &'static str {
        match (self.locale, outcome) {
            (Locale::English, LoginOutcome::MissingCredentials) => {
                "username and password are required"
            }
            (Locale::English, LoginOutcome::UnknownUsername) => "invalid username",
            (Locale::English, LoginOutcome::WrongPassword) => "incorrect password",
            (Locale::English, LoginOutcome::Succeeded) => "login succeeded",
            (Locale::Arabic, LoginOutcome::MissingCredentials) => {
                "اسم المستخدم وكلمة المرور مطلوبان"
            }
            (Locale::Arabic, LoginOutcome::UnknownUsername) => "اسم المستخدم غير صحيح",
            (Locale::Arabic, LoginOutcome::WrongPassword) => "كلمة المرور غير صحيحة",
            (Locale::Arabic, LoginOutcome::Succeeded) => "تم تسجيل الدخول بنجاح",
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
