//! Built-in language configurations
//!
//! One function per language family; `language_config` is exhaustive
//! over `LanguageId`, so the registry can never miss a language.

mod c;
mod java;
mod javascript;
mod kotlin;
mod markup;
mod python;
mod sql;

use super::language::LanguageId;
use super::registry::LanguageConfig;

/// Build the configuration for a language
pub fn language_config(id: LanguageId) -> LanguageConfig {
    match id {
        LanguageId::Kotlin => kotlin::kotlin_config(),
        LanguageId::Java => java::java_config(),
        LanguageId::JavaScript => javascript::javascript_config(),
        LanguageId::Python => python::python_config(),
        LanguageId::Cpp => c::cpp_config(),
        LanguageId::C => c::c_config(),
        LanguageId::Xml => markup::xml_config(),
        LanguageId::Json => markup::json_config(),
        LanguageId::Html => markup::html_config(),
        LanguageId::Css => markup::css_config(),
        LanguageId::Sql => sql::sql_config(),
    }
}
