//! Static word lists and pattern tables.
//!
//! The stop-word set is a curated multilingual junk filter (English plus
//! Turkish chat filler, media placeholders, export artifacts). The
//! polarity lexicons and emoji valence table drive the sentiment scorer;
//! the notice patterns and keyword list drive the system-author filter.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Noise tokens excluded from vocabulary and bigram statistics.
static STOP_WORD_LIST: &[&str] = &[
    // English
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "is", "are",
    "was", "were", "am", "im", "its", "can", "just", "dont", "did", "like", "know", "ok",
    "okay", "yes", "no", "yeah", "your", "more", "still", "here",
    // Turkish
    "ve", "bir", "bu", "da", "de", "için", "ile", "çok", "ama", "o", "kadar", "gibi", "var",
    "ben", "ne", "sen", "diye", "mi", "yok", "daha", "bana", "seni", "beni", "onu", "bunu",
    "şunu", "mı", "mu", "mü", "fakat", "lakin", "ancak", "çünkü", "yani", "öyle", "böyle",
    "şöyle", "hiç", "her", "kim", "nasıl", "neden", "niye", "şey", "bi", "tamam", "peki",
    "evet", "hayır", "oldu", "olur", "yap", "et", "gel", "git", "bak", "lan", "ya", "ha",
    "zaten", "biz", "biraz", "san", "şu", "senin", "benim", "bizim", "siz", "sizin", "onlar",
    "onların", "ki", "ise",
    // Chat filler and export artifacts
    "falan", "abi", "bence", "haha", "hahaha", "sonra", "iyi", "melih", "cakici", "message",
    "zaman", "değil", "arada", "cok", "baya", "valla", "akşam", "bugün", "derin", "şimdi",
    "bile", "lazım", "aynen", "olarak", "isteyen", "sadece", "olsun", "belki", "bende",
    "yeni", "yarın", "güzel", "varsa", "tam", "yine", "euro", "gün", "işte", "başka", "adam",
    "geldi", "olan", "image", "sticker", "video", "omitted", "edited", "null", "undefined",
    "andre", "son", "ilk", "saat", "sanırım", "hala", "degil", "bide", "instagram", "önce",
    "amk", "kahve", "ona", "neyse", "tibet", "kendi", "direk", "icin", "dedi", "para",
    "artık", "yer", "bisey", "tmm", "lol", "size", "göre", "dedim", "bira", "heralde",
    "sanki", "aksam", "doğru", "olabilir", "iki", "yoksa", "kolay", "orda", "alman",
    "bilmiyorum", "uyar", "onun", "gene", "oluyor", "burda", "bişe", "filan", "fıstık",
    "tabi", "tabii", "yaa", "hmm", "bişey", "geliyor", "acaba", "beyler", "tane", "olsa",
    "tan", "tek", "geldim", "kötü", "buna", "diyor", "hafta", "oha", "sene", "hee",
    "herkes", "kişi", "erten", "olmaz", "vardı", "sana", "simdi", "aslında", "geçen",
    "gelmek", "lazim", "şeyler", "dün", "erlangen", "almanca", "büyük", "demek", "fazla",
    "ondan", "bütün", "ara", "veya", "oyle", "aynı", "yapmak", "gelen", "belli", "hem",
    "eve", "guzel",
];

/// Tokens contributing +1 to a message's sentiment delta.
static POSITIVE_WORD_LIST: &[&str] = &[
    "guzel", "güzel", "süper", "harika", "muhteşem", "iyi", "sevdim", "aşk", "love", "great",
    "good", "best", "happy", "thanks", "teşekkür", "tebrik", "kutlarım", "bomba", "efsane",
    "kral", "adamsın", "hahaha", "haha", "lol", "huhu", "yes", "evet", "aynen", "tabi",
    "tabii", "keyif", "mutlu", "sevindim", "başarı", "kazandık", "oleyy", "yaşasın",
];

/// Tokens contributing −1 to a message's sentiment delta.
static NEGATIVE_WORD_LIST: &[&str] = &[
    "kötü", "berbat", "iğrenç", "nefret", "hayır", "no", "bad", "sad", "hate", "worst",
    "üzgün", "maalesef", "tüh", "yazık", "lanet", "aptal", "salak", "gerizekalı", "mal",
    "bok", "siktir", "amk", "aq", "sie", "sus", "kes", "kızgın", "sinirli", "bıktım",
    "yeter", "off", "of", "hayal kırıklığı", "sorun", "problem", "hata", "yanlış",
];

/// Emoji valence weights, −1.0 to +1.0.
static EMOJI_VALENCE_LIST: &[(&str, f64)] = &[
    ("😂", 0.8),
    ("🤣", 0.9),
    ("❤️", 1.0),
    ("😍", 1.0),
    ("👍", 0.5),
    ("😊", 0.6),
    ("😘", 0.8),
    ("😁", 0.6),
    ("🎉", 0.9),
    ("🔥", 0.7),
    ("😭", -0.8),
    ("😢", -0.6),
    ("😔", -0.5),
    ("😡", -0.9),
    ("🤬", -1.0),
    ("👎", -0.5),
    ("🙄", -0.2),
    ("😒", -0.4),
    ("💔", -0.8),
    ("💩", -0.3),
];

/// Textual patterns of WhatsApp system notices.
static SYSTEM_NOTICE_PATTERN_LIST: &[&str] = &[
    r"(?i)messages and calls are end-to-end encrypted",
    r"(?i)created group",
    r"(?i)added \+?\d+",
    r"(?i)changed the subject to",
    r"(?i)changed the group description",
    r"(?i)security code changed",
    r"(?i)waiting for this message",
    r"(?i)this chat is with a business account",
    r"(?i)disappearing messages",
    r"(?i)added you",
    r"(?i)left",
    r"(?i)joined using this group's invite link",
];

/// Substrings marking a vocabulary entry as system-flavored.
///
/// Note: the `security code` entry can never match a single token (tokens
/// contain no spaces); it is carried for parity with the notice patterns.
pub static SYSTEM_KEYWORDS: &[&str] = &[
    "changed",
    "added",
    "removed",
    "security code",
    "encrypted",
    "created",
    "left",
    "joined",
    "subject",
    "description",
    "disappearing",
];

/// The multilingual stop-word set.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Positive polarity lexicon.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORD_LIST.iter().copied().collect());

/// Negative polarity lexicon.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORD_LIST.iter().copied().collect());

/// Emoji valence lookup.
pub static EMOJI_VALENCE: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| EMOJI_VALENCE_LIST.iter().copied().collect());

/// Compiled system-notice patterns.
pub static SYSTEM_NOTICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SYSTEM_NOTICE_PATTERN_LIST
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Returns `true` if the content matches any system-notice pattern.
pub fn is_system_notice(content: &str) -> bool {
    SYSTEM_NOTICE_PATTERNS.iter().any(|p| p.is_match(content))
}
