// German present-tense conjugation.
//
// A headword runs through four stages:
//   1. Decompose: strip the "sich " reflexive marker and any separable prefix.
//   2. Irregular lookup: fully irregular and modal verbs come straight from
//      the lexicon table, bypassing all derivation.
//   3. Derivation: stem extraction, strong-verb stem mutation, and phonetic
//      suffix adjustments produce the six base forms.
//   4. Compose: the prefix and/or reflexive pronouns are reattached.

use crate::compose;
use crate::lexicon::Lexicon;
use crate::types::{Conjugation, DecomposedVerb, PersonForms};

// ---------------------------------------------------------------------------
// Decomposition constants
// ---------------------------------------------------------------------------

/// Reflexive marker on headwords ("sich freuen").
const REFLEXIVE_MARKER: &str = "sich ";

/// Separable prefixes (13 total), in match order. The first prefix that
/// qualifies wins, even when a later one would also match, so the order is
/// load-bearing.
const SEPARABLE_PREFIXES: &[&str] = &[
    "ab", "an", "auf", "aus", "bei", "ein", "mit", "nach", "her", "hin", "vor", "zu", "weg",
];

/// Stem finals that take an epenthetic "e" before -st/-t (arbeiten -> du
/// arbeitest).
const EPENTHETIC_FINALS: &[char] = &['t', 'd'];

/// Stem finals that already sound like "s", suppressing the doubled "s" of
/// -st (essen -> du isst, not issst).
const SIBILANT_FINALS: &[char] = &['s', 'ß', 'z', 'x'];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Conjugate a raw headword into its six present-tense forms.
///
/// Returns `None` only for blank input. Verbs outside the irregular and
/// strong tables fall through to the regular derivation rules and get a
/// best-effort paradigm rather than an error.
pub fn conjugate(raw: &str, lexicon: &Lexicon) -> Option<Conjugation> {
    let input = raw.trim().to_lowercase();
    let decomposed = decompose(&input)?;

    let base = match lexicon.irregular(&decomposed.base_verb) {
        Some(forms) => forms.clone(),
        None => derive_base(&decomposed.base_verb, lexicon),
    };

    let forms = compose::compose(&base, &decomposed.prefix, decomposed.is_reflexive);

    Some(Conjugation {
        input,
        decomposed,
        forms,
    })
}

/// Split a raw headword into reflexive marker, separable prefix, and base
/// verb. Returns `None` if the input is blank after trimming.
pub fn decompose(raw: &str) -> Option<DecomposedVerb> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let (is_reflexive, mut base_verb) = match normalized.strip_prefix(REFLEXIVE_MARKER) {
        Some(rest) => (true, rest.trim().to_string()),
        None => (false, normalized),
    };

    // First qualifying prefix in list order wins. The infinitive-ending guard
    // keeps most non-separable lookalikes intact, but it is a heuristic:
    // misfires like antworten -> an + tworten are part of the contract and
    // must not be "fixed" here.
    let mut prefix = String::new();
    for p in SEPARABLE_PREFIXES {
        if base_verb.starts_with(p)
            && base_verb.len() > p.len() + 1
            && (base_verb.ends_with("en") || base_verb.ends_with('n'))
        {
            prefix = (*p).to_string();
            base_verb = base_verb[p.len()..].to_string();
            break;
        }
    }

    Some(DecomposedVerb {
        is_reflexive,
        prefix,
        base_verb,
    })
}

/// Derive the six base forms of a verb that is not in the irregular table.
/// Total over non-empty input; never fails.
pub fn derive_base(base_verb: &str, lexicon: &Lexicon) -> PersonForms {
    // Stem extraction: strip the infinitive ending.
    let stem = if let Some(s) = base_verb.strip_suffix("en") {
        s
    } else if let Some(s) = base_verb.strip_suffix('n') {
        s
    } else {
        base_verb
    };

    // Strong-verb mutation replaces the du/er stems only; everything else
    // derives from the unmutated stem.
    let (du_stem, er_stem) = match lexicon.strong_stems(base_verb) {
        Some(entry) => (entry.du_stem.as_str(), entry.er_stem.as_str()),
        None => (stem, stem),
    };

    let mut ich = format!("{stem}e");
    let mut du = format!("{du_stem}st");
    let mut er = format!("{er_stem}t");
    let mut wir = base_verb.to_string();
    let mut ihr = format!("{stem}t");
    let mut sie = base_verb.to_string();

    // Epenthetic "e" after stems in -t/-d (arbeiten -> du arbeitest), except
    // on forms a stem mutation already rewrote.
    if stem.ends_with(EPENTHETIC_FINALS) {
        if du_stem == stem {
            du = format!("{stem}est");
        }
        if er_stem == stem {
            er = format!("{stem}et");
        }
        ihr = format!("{stem}et");
    }

    // Sibilant stems drop the "s" of -st (heißen -> du heißt). Checked on
    // whichever du stem is in effect, so mutated stems qualify too
    // (essen -> iss -> du isst).
    if du_stem.ends_with(SIBILANT_FINALS) {
        du = format!("{du_stem}t");
    }

    // Syncopated -eln verbs contract the first person (handeln -> ich
    // handle); the plural forms stay on the full infinitive.
    if let Some(eln_base) = base_verb.strip_suffix("eln") {
        ich = format!("{eln_base}le");
        wir = base_verb.to_string();
        sie = base_verb.to_string();
    }

    PersonForms {
        ich,
        du,
        er_sie_es: er,
        wir,
        ihr,
        sie_sie: sie,
    }
}
