use std::collections::HashSet;

use dome_common::domain::Domain;

/// Builds the ordered, deduplicated list of hostnames to resolve.
///
/// Each word becomes `word.domain` (trimmed, lowercased, blanks skipped).
/// Passive names are already fully qualified: they are normalized, a leading
/// `*.` is dropped, and only names covered by `domain` are kept. Order is
/// first-seen, words before passive names.
pub fn build_candidates<W, P>(domain: &Domain, words: W, passive: P) -> Vec<String>
where
    W: IntoIterator,
    W::Item: AsRef<str>,
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let from_words = words.into_iter().filter_map(|word| {
        let label: String = word.as_ref().trim().to_lowercase();
        (!label.is_empty()).then(|| domain.child(&label))
    });

    let from_passive = passive
        .into_iter()
        .filter_map(|name| normalize_passive(domain, name.as_ref()));

    dedupe(from_words.chain(from_passive))
}

/// Normalizes a name reported by a passive source, or drops it when out of scope.
pub fn normalize_passive(domain: &Domain, name: &str) -> Option<String> {
    let name: String = name.trim().to_lowercase();
    let name: &str = name.strip_prefix("*.").unwrap_or(&name);
    domain.covers(name).then(|| name.to_string())
}

fn dedupe(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
