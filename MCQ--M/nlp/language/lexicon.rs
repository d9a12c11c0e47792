use std::collections::{HashMap, HashSet};

use super::token::PartOfSpeech;

/// Common English function words excluded from fallback keyword selection.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "call", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly",
    "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
    "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over",
    "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re", "really",
    "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems", "serious",
    "several", "she", "should", "show", "side", "since", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "take", "ten",
    "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "third",
    "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to",
    "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "under", "unless",
    "until", "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Lowercase abbreviations, without their final period, that never end a
/// sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "u.s", "u.k",
    "fig", "inc", "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "approx", "dept", "est", "mt", "gen", "gov", "sen", "rep",
    "capt", "col", "lt", "sgt", "a.m", "p.m",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose", "my",
    "your", "his", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "someone", "somebody", "something",
    "anyone", "anybody", "anything", "everyone", "everybody", "everything", "nobody", "nothing",
    "none", "one", "her",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "across", "along", "among", "around", "behind", "beside", "beyond",
    "despite", "inside", "near", "onto", "outside", "per", "since", "toward", "towards",
    "upon", "via", "within", "without", "like", "than",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "unless", "while", "whereas", "whether", "once",
    "until", "when", "where", "as",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "'s", "'re", "'m", "'ve", "'ll", "'d", "isn't", "aren't", "wasn't", "weren't",
    "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "couldn't", "shouldn't",
    "hasn't", "haven't", "hadn't",
];

/// Auxiliaries after which a bare word reads as a verb.
pub const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did", "won't", "wouldn't", "can't", "couldn't", "shouldn't", "don't", "doesn't", "didn't",
];

const PARTICLES: &[&str] = &["not", "n't", "'s"];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "even", "still", "already", "always", "never",
    "often", "sometimes", "usually", "again", "here", "there", "now", "then", "soon", "today",
    "tomorrow", "yesterday", "almost", "quite", "rather", "however", "therefore", "thus",
    "why", "how", "ever", "perhaps", "maybe", "away", "back", "together", "instead", "indeed",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "wow", "hey", "hello", "yes", "ouch", "alas", "hmm"];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand", "million", "billion",
];

const ADJECTIVES: &[&str] = &[
    "quick", "brown", "lazy", "big", "small", "large", "little", "old", "new", "young", "good",
    "bad", "great", "high", "low", "long", "short", "hot", "cold", "warm", "cool", "red",
    "blue", "green", "yellow", "black", "white", "dark", "bright", "happy", "sad", "fast",
    "slow", "early", "late", "easy", "hard", "strong", "weak", "rich", "poor", "deep",
    "heavy", "light", "important", "different", "same", "main", "major", "whole", "free",
    "full", "simple", "clear", "common", "special", "public", "human", "natural", "solid",
    "liquid", "true", "false", "ancient", "modern", "wide", "narrow", "quiet", "loud", "wild",
    "calm", "clean", "dry", "wet", "fresh", "rare", "tall",
];

const VERBS: &[&str] = &[
    "sleep", "run", "eat", "drink", "go", "come", "see", "make", "take", "give", "get", "know",
    "think", "say", "tell", "find", "use", "work", "call", "try", "ask", "need", "feel",
    "become", "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "show", "hear",
    "play", "move", "live", "believe", "bring", "happen", "write", "sit", "stand", "lose",
    "pay", "meet", "include", "continue", "learn", "change", "lead", "understand", "watch",
    "follow", "stop", "create", "speak", "read", "grow", "open", "walk", "win", "teach",
    "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send",
    "build", "stay", "fall", "cut", "reach", "kill", "raise", "pass", "sell", "decide",
    "return", "explain", "hope", "develop", "carry", "break", "receive", "agree", "support",
    "hit", "produce", "cover", "catch", "draw", "choose", "jump", "fly", "swim", "boil",
    "melt", "freeze", "carve", "flow", "shine", "rise", "bark", "chase", "sing", "dance",
    "orbit", "absorb", "contain", "form", "cause", "provide", "require", "allow",
    "became", "began", "came", "ran", "ate", "saw", "made", "took", "gave", "got", "knew",
    "thought", "said", "told", "found", "felt", "left", "kept", "brought", "wrote", "sat",
    "stood", "lost", "paid", "met", "led", "spoke", "grew", "won", "taught", "bought", "sent",
    "built", "fell", "caught", "drew", "chose", "flew", "swam", "froze", "rose", "sang",
];

/// Closed-class and common open-class vocabulary of the built-in English
/// model. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
    closed_class: HashMap<&'static str, PartOfSpeech>,
    modals: HashSet<&'static str>,
    numbers: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// Builds the English tables.
    #[must_use]
    pub fn english() -> Self {
        let mut closed_class = HashMap::new();
        // Later tables win for words listed twice, so the most common
        // reading goes last.
        let tables: [(&[&'static str], PartOfSpeech); 9] = [
            (INTERJECTIONS, PartOfSpeech::Intj),
            (ADVERBS, PartOfSpeech::Adv),
            (SUBORDINATORS, PartOfSpeech::Sconj),
            (ADPOSITIONS, PartOfSpeech::Adp),
            (COORDINATORS, PartOfSpeech::Cconj),
            (PARTICLES, PartOfSpeech::Part),
            (PRONOUNS, PartOfSpeech::Pron),
            (DETERMINERS, PartOfSpeech::Det),
            (AUXILIARIES, PartOfSpeech::Aux),
        ];
        for (words, pos) in tables {
            for word in words {
                closed_class.insert(*word, pos);
            }
        }
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            closed_class,
            modals: MODALS.iter().copied().collect(),
            numbers: NUMBER_WORDS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
        }
    }

    /// Case-insensitive stop-word test.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// True when `word` (without the trailing period) is a known abbreviation.
    #[must_use]
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word.to_lowercase().as_str())
    }

    /// Tag of a function word, if `lower` is one.
    #[must_use]
    pub fn closed_class(&self, lower: &str) -> Option<PartOfSpeech> {
        self.closed_class.get(lower).copied()
    }

    /// Modal or do-support auxiliary.
    #[must_use]
    pub fn is_modal(&self, lower: &str) -> bool {
        self.modals.contains(lower)
    }

    /// Spelled-out cardinal number.
    #[must_use]
    pub fn is_number_word(&self, lower: &str) -> bool {
        self.numbers.contains(lower)
    }

    /// Known adjective.
    #[must_use]
    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    /// Known verb, either the base form or a listed irregular past.
    #[must_use]
    pub fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower)
    }

    /// Known verb after stripping a regular inflection (`-s`, `-es`, `-ed`,
    /// `-ing`).
    #[must_use]
    pub fn is_inflected_verb(&self, lower: &str) -> bool {
        if self.is_verb(lower) {
            return true;
        }
        let stems = [
            lower.strip_suffix("es"),
            lower.strip_suffix('s'),
            lower.strip_suffix("ed"),
            lower.strip_suffix('d'),
            lower.strip_suffix("ing"),
        ];
        stems
            .into_iter()
            .flatten()
            .any(|stem| !stem.is_empty() && (self.is_verb(stem) || self.is_doubled_stem(stem)))
    }

    // "chased" -> "chas" + "e", "running" -> "runn" -> "run"
    fn is_doubled_stem(&self, stem: &str) -> bool {
        let with_e = format!("{stem}e");
        if self.is_verb(&with_e) {
            return true;
        }
        let mut chars = stem.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(last), Some(prev)) if last == prev => {
                self.is_verb(&stem[..stem.len() - last.len_utf8()])
            }
            _ => false,
        }
    }
}
