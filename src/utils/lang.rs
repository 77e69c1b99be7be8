// Start of file: /src/utils/lang.rs

// * Minimal translation catalogue for user-facing error strings.

use std::borrow::Cow;

const FALLBACK_LOCALE: &str = "en";

const EN: &[(&str, &str)] = &[
    (
        "general.token_expired",
        "Your form session has expired. Please try again.",
    ),
    ("general.not_found", "Page not found"),
    (
        "general.not_found_body",
        "The page you are looking for does not exist or has been moved.",
    ),
    ("general.error", "Something went wrong"),
];

const ES: &[(&str, &str)] = &[
    (
        "general.token_expired",
        "Tu sesión del formulario ha caducado. Por favor, inténtalo de nuevo.",
    ),
    ("general.not_found", "Página no encontrada"),
    (
        "general.not_found_body",
        "La página que buscas no existe o ha sido movida.",
    ),
    ("general.error", "Algo salió mal"),
];

fn catalogue(locale: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match locale {
        "en" => Some(EN),
        "es" => Some(ES),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    locale: Cow<'static, str>,
}

impl Translator {
    pub fn new(locale: impl Into<Cow<'static, str>>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Looks `key` up in the active locale, then in English, and finally
    /// hands the key back unchanged.
    pub fn trans<'a>(&self, key: &'a str) -> Cow<'a, str> {
        let lookup = |locale: &str| {
            catalogue(locale)?
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
        };

        match lookup(&self.locale).or_else(|| lookup(FALLBACK_LOCALE)) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Borrowed(key),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}


// End of file: /src/utils/lang.rs
