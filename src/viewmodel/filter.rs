//! Case- and diacritic-insensitive text matching for browse and search filters

/// Lowercase and strip common Latin diacritics.
///
/// Covers the accented forms that show up in brand and category names;
/// anything outside the table passes through lowercased.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Case/diacritic-insensitive substring test
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Case-insensitive (but diacritic-sensitive) substring test, used for
/// keyword matching
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
