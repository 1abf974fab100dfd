// Recomposition: reattach detached parts to the six derived base forms.

use crate::types::PersonForms;

/// Attach the separable prefix and/or reflexive pronouns to every form.
///
/// The prefix lands at the end of the clause ("ich stehe auf"); reflexive
/// verbs additionally take the person-matched accusative pronoun after it
/// ("ich freue mich").
pub fn compose(base: &PersonForms, prefix: &str, is_reflexive: bool) -> PersonForms {
    let suffix = if prefix.is_empty() {
        String::new()
    } else {
        format!(" {prefix}")
    };

    if is_reflexive {
        base.map(|person, form| format!("{form}{suffix} {}", person.reflexive()))
    } else if !prefix.is_empty() {
        base.map(|_, form| format!("{form}{suffix}"))
    } else {
        base.clone()
    }
}
