use dioxus::prelude::*;

use crate::app::Route;
use crate::i18n::Locale;

/// Locale of the current route (`en` for unprefixed paths)
pub fn use_locale() -> Locale {
    use_route::<Route>().locale()
}
