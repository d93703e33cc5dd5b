// WHY: Curated English lexical tables, written from the gender-fair side
// Each entry maps a gender-fair word to its generic male or generic female counterpart

pub const PRONOUNS_MALE: &[(&str, &str)] = &[
    ("they", "he"),
    ("them", "him"),
    ("their", "his"),
    ("theirs", "his"),
    ("themself", "himself"),
];

pub const PRONOUNS_FEMALE: &[(&str, &str)] = &[
    ("they", "she"),
    ("them", "her"),
    ("their", "her"),
    ("theirs", "hers"),
    ("themself", "herself"),
];

pub const NOUNS_MALE: &[(&str, &str)] = &[
    ("chairperson", "chairman"), ("chairpeople", "chairmen"),
    ("anchor", "anchorman"), ("anchors", "anchormen"),
    ("member of congress", "congressman"), ("members of congress", "congressmen"),
    ("police officer", "policeman"), ("police officers", "policemen"),
    ("spokesperson", "spokesman"), ("spokespersons", "spokesmen"),
    ("flight attendant", "steward"), ("flight attendants", "stewards"),
    ("principal", "headmaster"), ("principals", "headmasters"),
    ("business person", "businessman"), ("business persons", "businessmen"),
    ("mail carrier", "postman"), ("mail carriers", "postmen"),
    ("salesperson", "salesman"), ("salespersons", "salesmen"),
    ("firefighter", "fireman"), ("firefighters", "firemen"),
    ("bartender", "barman"), ("bartenders", "barmen"),
    ("cleaner", "cleaning man"), ("cleaners", "cleaning men"),
    ("supervisor", "foreman"), ("supervisors", "foremen"),
    ("average person", "average man"), ("average people", "average men"),
    ("best person for the job", "best man for the job"),
    ("best people for the job", "best men for the job"),
    ("layperson", "layman"), ("laypeople", "laymen"),
    ("husband and wife", "man and wife"), ("humankind", "mankind"),
    ("human-made", "man-made"), ("skillful", "workmanlike"),
    ("first-year student", "freshman"),
];

pub const NOUNS_FEMALE: &[(&str, &str)] = &[
    ("chairperson", "chairwoman"), ("chairpeople", "chairwomen"),
    ("anchor", "anchorwoman"), ("anchors", "anchorwomen"),
    ("member of congress", "congresswoman"), ("members of congress", "congresswomen"),
    ("police officer", "policewoman"), ("police officers", "policewomen"),
    ("spokesperson", "spokeswoman"), ("spokespersons", "spokeswomen"),
    ("flight attendant", "stewardess"), ("flight attendants", "stewardesses"),
    ("principal", "headmistress"), ("principals", "headmistresses"),
    ("business person", "businesswoman"), ("business persons", "businesswomen"),
    ("mail carrier", "postwoman"), ("mail carriers", "postwomen"),
    ("salesperson", "saleswoman"), ("salespersons", "saleswomen"),
    ("firefighter", "firewoman"), ("firefighters", "firewomen"),
    ("bartender", "barwoman"), ("bartenders", "barwomen"),
    ("cleaner", "cleaning lady"), ("cleaners", "cleaning ladies"),
    ("supervisor", "forewoman"), ("supervisors", "forewomen"),
    ("actor", "actress"), ("actors", "actresses"),
    ("hero", "heroine"), ("heroes", "heroines"),
    ("comedian", "comedienne"), ("comedians", "comediennes"),
    ("executor", "executrix"), ("executors", "executrices"),
    ("poet", "poetess"), ("poets", "poetesses"),
    ("usher", "usherette"), ("ushers", "usherettes"),
    ("author", "authoress"), ("authors", "authoresses"),
    ("boss", "boss lady"), ("bosses", "boss ladies"),
    ("waiter", "waitress"), ("waiters", "waitresses"),
];

/// Plural verb forms with an irregular third-person singular
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("'re", "'s"),
    ("’re", "’s"),
    ("'ve", "'s"),
    ("’ve", "’s"),
    ("are", "is"),
    ("were", "was"),
    ("have", "has"),
    ("do", "does"),
    ("go", "goes"),
    ("quiz", "quizzes"),
];

/// Singular verb forms with an irregular plural; "'s" is read as the contracted "is"
pub const IRREGULAR_VERBS_PLURAL: &[(&str, &str)] = &[
    ("'s", "'re"),
    ("’s", "’re"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("does", "do"),
    ("goes", "go"),
    ("quizzes", "quiz"),
];

/// Gendered pronouns swapped into their opposite-gender counterpart
pub const FORMS_TO_CHANGE: &[(&str, &str)] = &[
    ("he", "she"),
    ("him", "her"),
    ("his", "her"),
    ("himself", "herself"),
    ("she", "he"),
    ("her", "him"),
    ("hers", "his"),
    ("herself", "himself"),
];

/// Gendered pronouns whose presence makes a gender-fair English sentence ambiguous
pub const GENDERED_PRONOUNS: &[&str] = &["he", "him", "his", "himself", "she", "her", "hers", "herself"];
