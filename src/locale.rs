//! Locale identifiers recognized by the translation catalogue.

use std::collections::HashSet;
use std::collections::hash_set;
use std::sync::LazyLock;

/// Locale identifiers accepted by [`LocaleSet::builtin`].
///
/// Language-only and `language_REGION` forms, underscore separated.
const BUILTIN_LOCALES: &[&str] = &[
    "af",
    "af_ZA",
    "ar",
    "ar_AE",
    "ar_BH",
    "ar_DZ",
    "ar_EG",
    "ar_IQ",
    "ar_JO",
    "ar_KW",
    "ar_LB",
    "ar_LY",
    "ar_MA",
    "ar_OM",
    "ar_QA",
    "ar_SA",
    "ar_SY",
    "ar_TN",
    "ar_YE",
    "az",
    "az_AZ",
    "az_Cyrl_AZ",
    "be",
    "be_BY",
    "bg",
    "bg_BG",
    "bs_BA",
    "ca",
    "ca_ES",
    "cs",
    "cs_CZ",
    "cy",
    "cy_GB",
    "da",
    "da_DK",
    "de",
    "de_AT",
    "de_CH",
    "de_DE",
    "de_LI",
    "de_LU",
    "dv",
    "dv_MV",
    "el",
    "el_GR",
    "en",
    "en_AU",
    "en_BZ",
    "en_CA",
    "en_CB",
    "en_GB",
    "en_IE",
    "en_JM",
    "en_NZ",
    "en_PH",
    "en_TT",
    "en_US",
    "en_ZA",
    "en_ZW",
    "eo",
    "es",
    "es_AR",
    "es_BO",
    "es_CL",
    "es_CO",
    "es_CR",
    "es_DO",
    "es_EC",
    "es_ES",
    "es_GT",
    "es_HN",
    "es_MX",
    "es_NI",
    "es_PA",
    "es_PE",
    "es_PR",
    "es_PY",
    "es_SV",
    "es_UY",
    "es_VE",
    "et",
    "et_EE",
    "eu",
    "eu_ES",
    "fa",
    "fa_IR",
    "fi",
    "fi_FI",
    "fo",
    "fo_FO",
    "fr",
    "fr_BE",
    "fr_CA",
    "fr_CH",
    "fr_FR",
    "fr_LU",
    "fr_MC",
    "gl",
    "gl_ES",
    "gu",
    "gu_IN",
    "he",
    "he_IL",
    "hi",
    "hi_IN",
    "hr",
    "hr_BA",
    "hr_HR",
    "hu",
    "hu_HU",
    "hy",
    "hy_AM",
    "id",
    "id_ID",
    "is",
    "is_IS",
    "it",
    "it_CH",
    "it_IT",
    "ja",
    "ja_JP",
    "ka",
    "ka_GE",
    "kk",
    "kk_KZ",
    "kn",
    "kn_IN",
    "ko",
    "ko_KR",
    "kok",
    "kok_IN",
    "ky",
    "ky_KG",
    "lt",
    "lt_LT",
    "lv",
    "lv_LV",
    "mi",
    "mi_NZ",
    "mk",
    "mk_MK",
    "mn",
    "mn_MN",
    "mr",
    "mr_IN",
    "ms",
    "ms_BN",
    "ms_MY",
    "mt",
    "mt_MT",
    "nb",
    "nb_NO",
    "nl",
    "nl_BE",
    "nl_NL",
    "nn_NO",
    "ns",
    "ns_ZA",
    "pa",
    "pa_IN",
    "pl",
    "pl_PL",
    "ps",
    "ps_AR",
    "pt",
    "pt_BR",
    "pt_PT",
    "qu",
    "qu_BO",
    "qu_EC",
    "qu_PE",
    "ro",
    "ro_RO",
    "ru",
    "ru_RU",
    "sa",
    "sa_IN",
    "se",
    "se_FI",
    "se_NO",
    "se_SE",
    "sk",
    "sk_SK",
    "sl",
    "sl_SI",
    "sq",
    "sq_AL",
    "sr_BA",
    "sr_Cyrl_BA",
    "sr_SP",
    "sr_Cyrl_SP",
    "sv",
    "sv_FI",
    "sv_SE",
    "sw",
    "sw_KE",
    "syr",
    "syr_SY",
    "ta",
    "ta_IN",
    "te",
    "te_IN",
    "th",
    "th_TH",
    "tl",
    "tl_PH",
    "tn",
    "tn_ZA",
    "tr",
    "tr_TR",
    "tt",
    "tt_RU",
    "ts",
    "uk",
    "uk_UA",
    "ur",
    "ur_PK",
    "uz",
    "uz_UZ",
    "uz_Cyrl_UZ",
    "vi",
    "vi_VN",
    "xh",
    "xh_ZA",
    "zh",
    "zh_CN",
    "zh_HK",
    "zh_MO",
    "zh_SG",
    "zh_TW",
    "zu",
    "zu_ZA",
];

/// Lookup table built once from [`BUILTIN_LOCALES`].
static BUILTIN_LOCALE_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| BUILTIN_LOCALES.iter().map(|code| (*code).to_string()).collect());

/// Fixed set of locale identifiers a catalogue accepts as write targets.
///
/// Membership is exact: `en_US` and `en-us` are different locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSet {
    /// 登録済みロケール
    locales: HashSet<String>,
}

impl LocaleSet {
    /// Creates a locale set. Duplicates and ordering are irrelevant.
    #[must_use]
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { locales: locales.into_iter().map(Into::into).collect() }
    }

    /// Standard table of recognized locales.
    #[must_use]
    pub fn builtin() -> Self {
        Self { locales: BUILTIN_LOCALE_SET.clone() }
    }

    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains(locale)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Iterates over the locales in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.locales.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for LocaleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the language part of a locale identifier.
///
/// # Examples
/// - `nl_BE` → `nl`
/// - `az_Cyrl_AZ` → `az`
/// - `de` → `de`
#[must_use]
pub fn language_of(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}
