// WHY: Curated German pronoun pairs; each entry is (first form, second form or ending)
// MF tables start with the masculine form, FF tables with the feminine one

pub const PERS_PRONOUNS_MF: &[(&str, &str)] = &[("er", "sie"), ("ihn", "sie"), ("ihm", "ihr")];
pub const PERS_PRONOUNS_FF: &[(&str, &str)] = &[("sie", "er"), ("sie", "ihn"), ("ihr", "ihm")];

pub const POSS_PRONOUNS_MF: &[(&str, &str)] = &[
    ("mein", "meine"), ("mein", "e"), ("meinen", "meine"),
    ("meinem", "meiner"), ("meinem", "r"),
    ("meines", "meiner"), ("meines", "r"),
    ("dein", "deine"), ("dein", "e"), ("deinen", "deine"),
    ("deinem", "deiner"), ("deinem", "r"),
    ("deines", "deiner"), ("deines", "r"),
    ("sein", "seine"), ("sein", "e"), ("seinen", "seine"),
    ("seinem", "seiner"), ("seinem", "r"),
    ("seines", "seiner"), ("seines", "r"),
    ("ihr", "ihre"), ("ihr", "e"), ("ihren", "ihre"),
    ("ihrem", "ihrer"), ("ihrem", "r"),
    ("ihres", "ihrer"), ("ihres", "r"),
    ("unser", "unsere"), ("unser", "e"), ("unseren", "unsere"),
    ("unserem", "unserer"), ("unserem", "r"),
    ("unseres", "unserer"), ("unseres", "r"),
    ("euer", "eure"), ("euren", "eure"),
    ("eurem", "eurer"), ("eurem", "r"),
    ("eures", "eurer"), ("eures", "r"),
    ("sein", "ihr"), ("seine", "ihre"),
    ("seinen", "ihren"), ("seinem", "ihrem"),
    ("seines", "ihres"), ("seiner", "ihrer"),
];

pub const POSS_PRONOUNS_FF: &[(&str, &str)] = &[
    ("meine", "mein"), ("meine", "meinen"), ("meine", "n"),
    ("meiner", "meinem"), ("meiner", "m"),
    ("meiner", "meines"), ("meiner", "s"),
    ("deine", "dein"), ("deine", "deinen"), ("deine", "n"),
    ("deiner", "deinem"), ("deiner", "m"),
    ("deiner", "deines"), ("deiner", "s"),
    ("seine", "sein"), ("seine", "seinen"), ("seine", "n"),
    ("seiner", "seinem"), ("seiner", "m"),
    ("seiner", "seines"), ("seiner", "s"),
    ("ihre", "ihr"), ("ihre", "ihren"), ("ihre", "n"),
    ("ihrer", "ihrem"), ("ihrer", "m"),
    ("ihrer", "ihres"), ("ihrer", "s"),
    ("unsere", "unser"), ("unsere", "unseren"), ("unsere", "n"),
    ("unserer", "unserem"), ("unserer", "m"),
    ("unserer", "unseres"), ("unserer", "s"),
    ("eure", "euer"), ("eure", "euren"), ("eure", "n"),
    ("eurer", "eurem"), ("eurer", "m"),
    ("eurer", "eures"), ("eurer", "s"),
    ("ihr", "sein"), ("ihre", "seine"),
    ("ihren", "seinen"), ("ihrem", "seinem"),
    ("ihres", "seines"), ("ihrer", "seiner"),
];

pub const RELA_PRONOUNS_MF: &[(&str, &str)] = &[
    ("der", "die"), ("den", "die"),
    ("dem", "der"), ("des", "der"), ("dem", "r"),
    ("dessen", "deren"), ("des", "r"),
    ("welcher", "welche"), ("welchen", "welche"),
    ("welchem", "welcher"), ("welchem", "r"),
    ("welches", "welcher"), ("welches", "r"),
];

pub const RELA_PRONOUNS_FF: &[(&str, &str)] = &[
    ("die", "der"), ("die", "den"),
    ("der", "dem"), ("der", "des"), ("der", "m"),
    ("deren", "dessen"), ("der", "s"),
    ("welche", "welcher"), ("welche", "r"),
    ("welche", "welchen"), ("welche", "n"),
    ("welcher", "welchem"), ("welcher", "m"),
    ("welcher", "welches"), ("welcher", "s"),
];

pub const INDF_PRONOUNS_MF: &[(&str, &str)] = &[
    ("ein", "eine"), ("ein", "e"), ("einer", "eine"),
    ("einen", "eine"), ("einem", "einer"), ("einem", "r"),
    ("eines", "einer"), ("eines", "r"),
    ("irgendein", "irgendeine"), ("irgendein", "e"),
    ("irgendeiner", "irgendeine"), ("irgendeinen", "irgendeine"),
    ("irgendeinem", "irgendeiner"), ("irgendeinem", "r"),
    ("irgendeines", "irgendeiner"), ("irgendeines", "r"),
    ("kein", "keine"), ("kein", "e"),
    ("keiner", "keine"), ("keinen", "keine"),
    ("keinem", "keiner"), ("keinem", "r"),
    ("keines", "keiner"), ("keines", "r"),
    ("jeder", "jede"), ("jeden", "jede"),
    ("jedem", "jeder"), ("jedem", "r"),
    ("jedes", "jeder"), ("jedes", "r"),
];

pub const INDF_PRONOUNS_FF: &[(&str, &str)] = &[
    ("eine", "ein"), ("eine", "einer"), ("eine", "r"),
    ("eine", "einen"), ("eine", "n"),
    ("einer", "einem"), ("einer", "m"),
    ("einer", "eines"), ("einer", "s"),
    ("irgendeine", "irgendein"),
    ("irgendeine", "irgendeiner"), ("irgendeine", "r"),
    ("irgendeine", "irgendeinen"), ("irgendeine", "n"),
    ("irgendeiner", "irgendeinem"), ("irgendeiner", "m"),
    ("irgendeiner", "irgendeines"), ("irgendeiner", "s"),
    ("keine", "kein"), ("keine", "keiner"), ("keine", "r"),
    ("keine", "keinen"), ("keine", "n"),
    ("keiner", "keinem"), ("keiner", "m"),
    ("keiner", "keines"), ("keiner", "s"),
    ("jede", "jeder"), ("jede", "r"),
    ("jede", "jeden"), ("jede", "n"),
    ("jeder", "jedem"), ("jeder", "m"),
    ("jeder", "jedes"), ("jeder", "s"),
];

pub const DEMO_PRONOUNS_MF: &[(&str, &str)] = &[
    ("dieser", "diese"), ("diesen", "diese"),
    ("diesem", "dieser"), ("diesem", "r"),
    ("dieses", "dieser"), ("dieses", "r"),
    ("jener", "jene"), ("jenen", "jene"),
    ("jenem", "jener"), ("jenem", "r"),
    ("jenes", "jener"), ("jenes", "r"),
    ("derjenige", "diejenige"), ("denjenigen", "diejenige"),
    ("demjenigen", "derjenigen"), ("desjenigen", "derjenigen"),
    ("derselbe", "dieselbe"), ("denselben", "dieselbe"),
    ("demselben", "derselben"), ("desselben", "derselben"),
];

pub const DEMO_PRONOUNS_FF: &[(&str, &str)] = &[
    ("diese", "dieser"), ("diese", "r"),
    ("diese", "diesen"), ("diese", "n"),
    ("dieser", "diesem"), ("dieser", "m"),
    ("dieser", "dieses"), ("dieser", "s"),
    ("jene", "jener"), ("jene", "r"),
    ("jene", "jenen"), ("jene", "n"),
    ("jener", "jenem"), ("jener", "m"),
    ("jener", "jenes"), ("jener", "s"),
    ("diejenige", "derjenige"), ("diejenige", "denjenigen"),
    ("derjenigen", "demjenigen"), ("derjenigen", "desjenigen"),
    ("dieselbe", "derselbe"), ("dieselbe", "denselben"),
    ("derselben", "demselben"), ("derselben", "desselben"),
];

pub const PREPOSITIONS_MF: &[(&str, &str)] = &[("vom", "von"), ("vom", "n"), ("zum", "zur"), ("zum", "r")];
pub const PREPOSITIONS_FF: &[(&str, &str)] = &[("von", "vom"), ("von", "m"), ("zur", "zum"), ("zur", "m")];

/// Masculine-first tables, in matching order
pub const PRONOUN_TABLES_MF: &[&[(&str, &str)]] = &[
    PERS_PRONOUNS_MF,
    POSS_PRONOUNS_MF,
    RELA_PRONOUNS_MF,
    INDF_PRONOUNS_MF,
    DEMO_PRONOUNS_MF,
    PREPOSITIONS_MF,
];

/// Feminine-first tables, in matching order
pub const PRONOUN_TABLES_FF: &[&[(&str, &str)]] = &[
    PERS_PRONOUNS_FF,
    POSS_PRONOUNS_FF,
    RELA_PRONOUNS_FF,
    INDF_PRONOUNS_FF,
    DEMO_PRONOUNS_FF,
    PREPOSITIONS_FF,
];

/// Delimiter spellings seen in the wild; ":" is left out because it is too noisy
pub const DELIMITER_SPELLINGS: &[&str] = &["*", "_", "/", " / ", " oder ", " bzw ", " bzw. "];

/// Binnen-I words that are not gender-fair forms
pub const BINNEN_I_EXCEPTIONS: &[&str] = &["Linked", "Check"];
