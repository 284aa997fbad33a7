//! Stop words for the six supported languages, merged into one lookup set.

use std::collections::HashSet;
use std::sync::OnceLock;

const SPANISH: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "mas", "pero", "sus", "le", "ya", "o",
    "este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
    "tambien", "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante",
    "todos", "uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto",
    "mí", "antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto",
    "esa", "estos", "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar",
    "estas", "algunas", "algo", "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus",
    "ellas", "nosotras", "vosotros", "vosotras", "os", "mío", "mía", "míos", "mías", "tuyo",
    "tuya", "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro", "nuestra",
    "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas",
    "estoy", "estás", "está", "estamos", "estáis", "están", "ser", "es", "son", "fue", "era",
    "eran", "sido", "soy", "eres", "somos", "sois", "han", "ha", "he", "has", "hemos", "tiene",
    "tienen", "tener", "puede", "pueden", "cómo", "cuál", "dónde", "cuándo", "aquí", "allí",
];

const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "can", "will", "just", "should", "now", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "would", "could", "may", "might", "must", "shall", "this", "that",
    "these", "those", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
    "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "as", "until", "while", "also", "because",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "de", "des", "du", "un", "une", "et", "ou", "mais", "donc", "car",
    "ni", "que", "qui", "quoi", "dont", "où", "dans", "sur", "sous", "avec", "sans", "pour",
    "par", "en", "au", "aux", "ce", "cet", "cette", "ces", "mon", "ton", "son", "ma", "ta",
    "sa", "mes", "tes", "ses", "notre", "votre", "leur", "nos", "vos", "leurs", "je", "tu",
    "il", "elle", "nous", "vous", "ils", "elles", "on", "se", "ne", "pas", "plus", "est",
    "sont", "était", "être", "avoir", "ont", "été", "fait", "faire", "comme", "tout", "tous",
    "toute", "toutes", "très", "aussi", "bien", "peut", "entre", "chez", "lui", "même",
    "moi", "toi", "eux", "avons", "avez", "suis", "sommes", "êtes", "sera", "seront", "cela",
    "ceci", "celle", "celui", "ceux", "quand", "comment", "pourquoi", "alors", "encore",
];

const GERMAN: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "eines", "einem",
    "einen", "und", "oder", "aber", "doch", "nicht", "kein", "keine", "ist", "sind", "war",
    "waren", "sein", "bin", "bist", "seid", "hat", "haben", "hatte", "hatten", "wird",
    "werden", "wurde", "wurden", "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "dich",
    "sich", "uns", "euch", "mein", "dein", "ihre", "unser", "euer", "mit", "von", "zu", "zum",
    "zur", "auf", "aus", "bei", "für", "über", "unter", "nach", "vor", "durch", "gegen",
    "ohne", "um", "im", "in", "an", "am", "als", "wie", "wenn", "dass", "daß", "auch", "noch",
    "nur", "schon", "sehr", "so", "was", "wer", "wo", "warum", "kann", "können", "muss",
    "müssen", "soll", "sollen", "dies", "diese", "dieser", "dieses", "diesem", "diesen",
    "hier", "dort", "dann", "denn", "weil", "man", "alle", "alles", "mehr",
];

const ITALIAN: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "di", "da", "in", "con", "su",
    "per", "tra", "fra", "del", "dello", "della", "dei", "degli", "delle", "al", "allo",
    "alla", "ai", "agli", "alle", "dal", "dalla", "dai", "nel", "nella", "nei", "sul",
    "sulla", "sui", "e", "ed", "o", "ma", "che", "chi", "cui", "non", "come", "anche",
    "più", "piu", "sono", "sei", "siamo", "siete", "era", "erano", "essere", "avere", "ho",
    "hai", "ha", "abbiamo", "avete", "hanno", "questo", "questa", "questi", "queste",
    "quello", "quella", "quelli", "quelle", "io", "tu", "lui", "lei", "noi", "voi", "loro",
    "mio", "mia", "miei", "mie", "tuo", "tua", "suo", "sua", "suoi", "nostro", "nostra",
    "vostro", "vostra", "se", "quando", "dove", "perché", "perche", "quindi", "molto",
    "tutto", "tutti", "ancora", "già", "solo", "sempre",
];

const PORTUGUESE: &[&str] = &[
    "o", "a", "os", "as", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "em",
    "no", "na", "nos", "nas", "por", "pelo", "pela", "pelos", "pelas", "para", "com", "sem",
    "sob", "sobre", "entre", "e", "ou", "mas", "que", "quem", "qual", "quais", "não", "nao",
    "sim", "se", "como", "mais", "muito", "muita", "muitos", "muitas", "também", "tambem",
    "já", "ainda", "só", "é", "são", "foi", "foram", "ser", "estar", "está", "estão", "era",
    "eram", "ter", "tem", "têm", "tinha", "havia", "há", "eu", "tu", "ele", "ela", "nós",
    "vós", "eles", "elas", "meu", "minha", "meus", "minhas", "seu", "sua", "seus", "suas",
    "nosso", "nossa", "nossos", "nossas", "este", "esta", "estes", "estas", "esse", "essa",
    "esses", "essas", "isso", "isto", "aquele", "aquela", "aquilo", "quando", "onde",
    "porque", "então", "aqui", "ali", "lhe", "lhes", "você", "vocês", "todo", "toda", "todos",
    "todas",
];

/// All stop-word tables, one per language.
pub const LANGUAGE_TABLES: [(&str, &[&str]); 6] = [
    ("es", SPANISH),
    ("en", ENGLISH),
    ("fr", FRENCH),
    ("de", GERMAN),
    ("it", ITALIAN),
    ("pt", PORTUGUESE),
];

static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The merged multilingual stop-word set.
pub fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        LANGUAGE_TABLES
            .iter()
            .flat_map(|(_, words)| words.iter().copied())
            .collect()
    })
}

pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token)
}
