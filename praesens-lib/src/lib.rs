pub mod types;
pub mod lexicon;
pub mod morphology;
pub mod compose;
pub mod output;

pub use lexicon::Lexicon;
pub use morphology::{conjugate, decompose, derive_base};
pub use types::{Conjugation, DecomposedVerb, Person, PersonForms};
