//! Interactive prompts built on `inquire`.

use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, InquireError, Password, PasswordDisplayMode, Text};
use pogoda_core::cities;

/// Feeds the popular-city list into the prompt's suggestion panel.
#[derive(Debug, Clone, Default)]
pub struct CityAutocomplete;

impl Autocomplete for CityAutocomplete {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(cities::matching(input)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// City prompt; `Ok(None)` means the user pressed Esc.
pub fn city() -> Result<Option<String>, InquireError> {
    Text::new("Город:")
        .with_placeholder("Введите название города...")
        .with_autocomplete(CityAutocomplete)
        .with_help_message("↑/↓ — подсказки, Enter — поиск, Esc — выход")
        .prompt_skippable()
}

/// Masked prompt for the OpenWeather API key.
pub fn api_key() -> Result<String, InquireError> {
    Password::new("Ключ OpenWeather API:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
}
