use std::fmt;

use serde::Serialize;

use crate::error::{Result, TldwError};

/// A supported translation target.
///
/// The set is closed: every value comes from [`Language::all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

const DEFAULT_INDEX: usize = 21;

static LANGUAGES: &[Language] = &[
    Language::new("af", "afrikaans"),
    Language::new("sq", "albanian"),
    Language::new("am", "amharic"),
    Language::new("ar", "arabic"),
    Language::new("hy", "armenian"),
    Language::new("az", "azerbaijani"),
    Language::new("eu", "basque"),
    Language::new("be", "belarusian"),
    Language::new("bn", "bengali"),
    Language::new("bs", "bosnian"),
    Language::new("bg", "bulgarian"),
    Language::new("ca", "catalan"),
    Language::new("ceb", "cebuano"),
    Language::new("ny", "chichewa"),
    Language::new("zh-cn", "chinese (simplified)"),
    Language::new("zh-tw", "chinese (traditional)"),
    Language::new("co", "corsican"),
    Language::new("hr", "croatian"),
    Language::new("cs", "czech"),
    Language::new("da", "danish"),
    Language::new("nl", "dutch"),
    Language::new("en", "english"),
    Language::new("eo", "esperanto"),
    Language::new("et", "estonian"),
    Language::new("tl", "filipino"),
    Language::new("fi", "finnish"),
    Language::new("fr", "french"),
    Language::new("fy", "frisian"),
    Language::new("gl", "galician"),
    Language::new("ka", "georgian"),
    Language::new("de", "german"),
    Language::new("el", "greek"),
    Language::new("gu", "gujarati"),
    Language::new("ht", "haitian creole"),
    Language::new("ha", "hausa"),
    Language::new("haw", "hawaiian"),
    Language::new("he", "hebrew"),
    Language::new("hi", "hindi"),
    Language::new("hmn", "hmong"),
    Language::new("hu", "hungarian"),
    Language::new("is", "icelandic"),
    Language::new("ig", "igbo"),
    Language::new("id", "indonesian"),
    Language::new("ga", "irish"),
    Language::new("it", "italian"),
    Language::new("ja", "japanese"),
    Language::new("jw", "javanese"),
    Language::new("kn", "kannada"),
    Language::new("kk", "kazakh"),
    Language::new("km", "khmer"),
    Language::new("ko", "korean"),
    Language::new("ku", "kurdish (kurmanji)"),
    Language::new("ky", "kyrgyz"),
    Language::new("lo", "lao"),
    Language::new("la", "latin"),
    Language::new("lv", "latvian"),
    Language::new("lt", "lithuanian"),
    Language::new("lb", "luxembourgish"),
    Language::new("mk", "macedonian"),
    Language::new("mg", "malagasy"),
    Language::new("ms", "malay"),
    Language::new("ml", "malayalam"),
    Language::new("mt", "maltese"),
    Language::new("mi", "maori"),
    Language::new("mr", "marathi"),
    Language::new("mn", "mongolian"),
    Language::new("my", "myanmar (burmese)"),
    Language::new("ne", "nepali"),
    Language::new("no", "norwegian"),
    Language::new("or", "odia"),
    Language::new("ps", "pashto"),
    Language::new("fa", "persian"),
    Language::new("pl", "polish"),
    Language::new("pt", "portuguese"),
    Language::new("pa", "punjabi"),
    Language::new("ro", "romanian"),
    Language::new("ru", "russian"),
    Language::new("sm", "samoan"),
    Language::new("gd", "scots gaelic"),
    Language::new("sr", "serbian"),
    Language::new("st", "sesotho"),
    Language::new("sn", "shona"),
    Language::new("sd", "sindhi"),
    Language::new("si", "sinhala"),
    Language::new("sk", "slovak"),
    Language::new("sl", "slovenian"),
    Language::new("so", "somali"),
    Language::new("es", "spanish"),
    Language::new("su", "sundanese"),
    Language::new("sw", "swahili"),
    Language::new("sv", "swedish"),
    Language::new("tg", "tajik"),
    Language::new("ta", "tamil"),
    Language::new("te", "telugu"),
    Language::new("th", "thai"),
    Language::new("tr", "turkish"),
    Language::new("uk", "ukrainian"),
    Language::new("ur", "urdu"),
    Language::new("ug", "uyghur"),
    Language::new("uz", "uzbek"),
    Language::new("vi", "vietnamese"),
    Language::new("cy", "welsh"),
    Language::new("xh", "xhosa"),
    Language::new("yi", "yiddish"),
    Language::new("yo", "yoruba"),
    Language::new("zu", "zulu"),
];

impl Language {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Every supported language, in selector order.
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn from_code(code: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| TldwError::UnsupportedLanguage(code.to_string()))
    }

    pub fn from_name(name: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| TldwError::UnsupportedLanguage(name.to_string()))
    }

    /// Accept either a code (`de`) or a display name (`German`).
    pub fn lookup(value: &str) -> Result<Self> {
        Self::from_code(value).or_else(|_| Self::from_name(value))
    }
}

impl Default for Language {
    fn default() -> Self {
        LANGUAGES[DEFAULT_INDEX]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
