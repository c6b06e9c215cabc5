//! Interactive prompts.

use dbdraw_core::{Language, ModuleType};
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use eyre::{Context, Result};

pub fn text(
    prompt: &str,
    default: Option<&str>,
    validate: impl Fn(&str) -> Result<(), String>,
) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| validate(value.trim()));
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let value = input.interact_text().wrap_err("Failed to read input")?;
    Ok(value.trim().to_string())
}

pub fn select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .wrap_err("Failed to get selection")
}

pub fn multi_select(prompt: &str, items: &[String]) -> Result<Vec<usize>> {
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .interact()
        .wrap_err("Failed to get selection")
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .wrap_err("Failed to get confirmation")
}

/// Validator for values that must not be blank.
pub fn required(message: &'static str) -> impl Fn(&str) -> Result<(), String> {
    move |value| {
        if value.is_empty() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

const LANGUAGES: [Language; 2] = [Language::TypeScript, Language::JavaScript];
const MODULE_TYPES: [ModuleType; 2] = [ModuleType::CommonJs, ModuleType::Module];

pub fn language() -> Result<Language> {
    let items = ["TypeScript".to_string(), "JavaScript".to_string()];
    let index = select("Choose the project language", &items, 0)?;
    Ok(LANGUAGES[index])
}

pub fn module_type() -> Result<ModuleType> {
    let items = ["CommonJS".to_string(), "ES Module".to_string()];
    let index = select("Choose the module system", &items, 0)?;
    Ok(MODULE_TYPES[index])
}
