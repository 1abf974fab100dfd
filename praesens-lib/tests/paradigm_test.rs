// Full-paradigm sweep: each input is conjugated and compared against its six
// expected forms in canonical person order (ich, du, er/sie/es, wir, ihr,
// sie/Sie).

use praesens_lib::{conjugate, Lexicon};

struct Case {
    input: &'static str,
    expected: [&'static str; 6],
}

const CASES: &[Case] = &[
    // Core irregulars.
    Case {
        input: "sein",
        expected: ["bin", "bist", "ist", "sind", "seid", "sind"],
    },
    Case {
        input: "haben",
        expected: ["habe", "hast", "hat", "haben", "habt", "haben"],
    },
    Case {
        input: "werden",
        expected: ["werde", "wirst", "wird", "werden", "werdet", "werden"],
    },
    Case {
        input: "wissen",
        expected: ["weiß", "weißt", "weiß", "wissen", "wisst", "wissen"],
    },
    // Modals.
    Case {
        input: "können",
        expected: ["kann", "kannst", "kann", "können", "könnt", "können"],
    },
    Case {
        input: "müssen",
        expected: ["muss", "musst", "muss", "müssen", "müsst", "müssen"],
    },
    Case {
        input: "wollen",
        expected: ["will", "willst", "will", "wollen", "wollt", "wollen"],
    },
    Case {
        input: "sollen",
        expected: ["soll", "sollst", "soll", "sollen", "sollt", "sollen"],
    },
    Case {
        input: "dürfen",
        expected: ["darf", "darfst", "darf", "dürfen", "dürft", "dürfen"],
    },
    Case {
        input: "mögen",
        expected: ["mag", "magst", "mag", "mögen", "mögt", "mögen"],
    },
    // Regular weak verbs.
    Case {
        input: "lernen",
        expected: ["lerne", "lernst", "lernt", "lernen", "lernt", "lernen"],
    },
    Case {
        input: "machen",
        expected: ["mache", "machst", "macht", "machen", "macht", "machen"],
    },
    Case {
        input: "tun",
        expected: ["tue", "tust", "tut", "tun", "tut", "tun"],
    },
    Case {
        input: "wandern",
        expected: [
            "wandere", "wanderst", "wandert", "wandern", "wandert", "wandern",
        ],
    },
    // Strong verbs (du/er stem mutation).
    Case {
        input: "sehen",
        expected: ["sehe", "siehst", "sieht", "sehen", "seht", "sehen"],
    },
    Case {
        input: "lesen",
        expected: ["lese", "liest", "liest", "lesen", "lest", "lesen"],
    },
    Case {
        input: "geben",
        expected: ["gebe", "gibst", "gibt", "geben", "gebt", "geben"],
    },
    Case {
        input: "nehmen",
        expected: ["nehme", "nimmst", "nimmt", "nehmen", "nehmt", "nehmen"],
    },
    Case {
        input: "treffen",
        expected: [
            "treffe", "triffst", "trifft", "treffen", "trefft", "treffen",
        ],
    },
    Case {
        input: "stehlen",
        expected: [
            "stehle", "stiehlst", "stiehlt", "stehlen", "stehlt", "stehlen",
        ],
    },
    Case {
        input: "fahren",
        expected: ["fahre", "fährst", "fährt", "fahren", "fahrt", "fahren"],
    },
    Case {
        input: "schlafen",
        expected: [
            "schlafe", "schläfst", "schläft", "schlafen", "schlaft", "schlafen",
        ],
    },
    Case {
        input: "waschen",
        expected: [
            "wasche", "wäschst", "wäscht", "waschen", "wascht", "waschen",
        ],
    },
    Case {
        input: "laufen",
        expected: ["laufe", "läufst", "läuft", "laufen", "lauft", "laufen"],
    },
    // Epenthetic -e after dental stems.
    Case {
        input: "arbeiten",
        expected: [
            "arbeite",
            "arbeitest",
            "arbeitet",
            "arbeiten",
            "arbeitet",
            "arbeiten",
        ],
    },
    Case {
        input: "finden",
        expected: [
            "finde", "findest", "findet", "finden", "findet", "finden",
        ],
    },
    Case {
        input: "reden",
        expected: ["rede", "redest", "redet", "reden", "redet", "reden"],
    },
    Case {
        input: "warten",
        expected: [
            "warte", "wartest", "wartet", "warten", "wartet", "warten",
        ],
    },
    // Sibilant stems.
    Case {
        input: "heißen",
        expected: ["heiße", "heißt", "heißt", "heißen", "heißt", "heißen"],
    },
    Case {
        input: "tanzen",
        expected: ["tanze", "tanzt", "tanzt", "tanzen", "tanzt", "tanzen"],
    },
    Case {
        input: "essen",
        expected: ["esse", "isst", "isst", "essen", "esst", "essen"],
    },
    Case {
        input: "lassen",
        expected: ["lasse", "lässt", "lässt", "lassen", "lasst", "lassen"],
    },
    // Syncopated -eln verbs.
    Case {
        input: "handeln",
        expected: [
            "handle", "handelst", "handelt", "handeln", "handelt", "handeln",
        ],
    },
    Case {
        input: "sammeln",
        expected: [
            "sammle", "sammelst", "sammelt", "sammeln", "sammelt", "sammeln",
        ],
    },
    // Separable prefixes.
    Case {
        input: "aufstehen",
        expected: [
            "stehe auf",
            "stehst auf",
            "steht auf",
            "stehen auf",
            "steht auf",
            "stehen auf",
        ],
    },
    Case {
        input: "einkaufen",
        expected: [
            "kaufe ein",
            "kaufst ein",
            "kauft ein",
            "kaufen ein",
            "kauft ein",
            "kaufen ein",
        ],
    },
    Case {
        input: "mitkommen",
        expected: [
            "komme mit",
            "kommst mit",
            "kommt mit",
            "kommen mit",
            "kommt mit",
            "kommen mit",
        ],
    },
    Case {
        input: "ansehen",
        expected: [
            "sehe an",
            "siehst an",
            "sieht an",
            "sehen an",
            "seht an",
            "sehen an",
        ],
    },
    Case {
        input: "zunehmen",
        expected: [
            "nehme zu",
            "nimmst zu",
            "nimmt zu",
            "nehmen zu",
            "nehmt zu",
            "nehmen zu",
        ],
    },
    // Reflexives.
    Case {
        input: "sich freuen",
        expected: [
            "freue mich",
            "freust dich",
            "freut sich",
            "freuen uns",
            "freut euch",
            "freuen sich",
        ],
    },
    Case {
        input: "sich setzen",
        expected: [
            "setze mich",
            "setzt dich",
            "setzt sich",
            "setzen uns",
            "setzt euch",
            "setzen sich",
        ],
    },
    Case {
        input: "sich anziehen",
        expected: [
            "ziehe an mich",
            "ziehst an dich",
            "zieht an sich",
            "ziehen an uns",
            "zieht an euch",
            "ziehen an sich",
        ],
    },
];

#[test]
fn expected_paradigms() {
    let lexicon = Lexicon::new();
    for case in CASES {
        let c = conjugate(case.input, &lexicon)
            .unwrap_or_else(|| panic!("{:?} should conjugate", case.input));
        let got = [
            c.forms.ich.as_str(),
            c.forms.du.as_str(),
            c.forms.er_sie_es.as_str(),
            c.forms.wir.as_str(),
            c.forms.ihr.as_str(),
            c.forms.sie_sie.as_str(),
        ];
        assert_eq!(got, case.expected, "paradigm mismatch for {:?}", case.input);
    }
}
