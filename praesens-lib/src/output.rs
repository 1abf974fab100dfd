// Output formatting for conjugation results.

use crate::types::{Person, PersonForms};

/// Render a paradigm as one "<subject pronoun> <form>" line per person, in
/// canonical order ("ich lerne", "du lernst", ...).
pub fn to_lines(forms: &PersonForms) -> Vec<String> {
    Person::ALL
        .iter()
        .map(|&p| format!("{} {}", p.subject(), forms.get(p)))
        .collect()
}

/// Render a paradigm as a newline-joined table.
pub fn to_table(forms: &PersonForms) -> String {
    to_lines(forms).join("\n")
}
