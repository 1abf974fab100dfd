use serde::{Deserialize, Serialize};

/// Grammatical person of a present-tense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    Ich,
    Du,
    ErSieEs,
    Wir,
    Ihr,
    SieSie,
}

impl Person {
    /// All six persons in canonical order.
    pub const ALL: [Person; 6] = [
        Person::Ich,
        Person::Du,
        Person::ErSieEs,
        Person::Wir,
        Person::Ihr,
        Person::SieSie,
    ];

    /// Subject pronoun shown next to a form (e.g., "er/sie/es lernt").
    pub fn subject(self) -> &'static str {
        match self {
            Person::Ich => "ich",
            Person::Du => "du",
            Person::ErSieEs => "er/sie/es",
            Person::Wir => "wir",
            Person::Ihr => "ihr",
            Person::SieSie => "sie/Sie",
        }
    }

    /// Accusative reflexive pronoun for this person.
    pub fn reflexive(self) -> &'static str {
        match self {
            Person::Ich => "mich",
            Person::Du => "dich",
            Person::ErSieEs => "sich",
            Person::Wir => "uns",
            Person::Ihr => "euch",
            Person::SieSie => "sich",
        }
    }
}

/// The six present-tense forms of a verb, one per grammatical person.
///
/// A value of this type is always complete: a verb either conjugates fully
/// or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForms {
    pub ich: String,
    pub du: String,
    pub er_sie_es: String,
    pub wir: String,
    pub ihr: String,
    pub sie_sie: String,
}

impl PersonForms {
    /// The form for a given person.
    pub fn get(&self, person: Person) -> &str {
        match person {
            Person::Ich => &self.ich,
            Person::Du => &self.du,
            Person::ErSieEs => &self.er_sie_es,
            Person::Wir => &self.wir,
            Person::Ihr => &self.ihr,
            Person::SieSie => &self.sie_sie,
        }
    }

    /// Build a new record by applying `f` to each person's form.
    pub fn map(&self, f: impl Fn(Person, &str) -> String) -> PersonForms {
        PersonForms {
            ich: f(Person::Ich, &self.ich),
            du: f(Person::Du, &self.du),
            er_sie_es: f(Person::ErSieEs, &self.er_sie_es),
            wir: f(Person::Wir, &self.wir),
            ihr: f(Person::Ihr, &self.ihr),
            sie_sie: f(Person::SieSie, &self.sie_sie),
        }
    }
}

/// Result of splitting a raw headword into its lexical parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedVerb {
    /// True if the headword carried the leading "sich " reflexive marker.
    pub is_reflexive: bool,
    /// Detached separable prefix (e.g., "auf"), empty if none was found.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// The bare infinitive the derivation rules run on.
    pub base_verb: String,
}

/// A fully conjugated headword: its decomposition plus the final forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    /// Normalized (trimmed, lowercased) input.
    pub input: String,
    pub decomposed: DecomposedVerb,
    pub forms: PersonForms,
}

/// Raw irregular-verb entry loaded from embedded JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularEntry {
    pub infinitive: String,
    pub forms: PersonForms,
}

/// Raw strong-verb entry: the mutated stems used for the du/er forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongEntry {
    pub infinitive: String,
    pub du_stem: String,
    pub er_stem: String,
}

/// Raw embedded data from data/verbs.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedLexicon {
    pub irregular: Vec<IrregularEntry>,
    pub strong: Vec<StrongEntry>,
}
