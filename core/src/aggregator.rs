use dome_common::finding::Finding;

/// Orders findings by host (byte order of the lowercase name).
///
/// `host` is the dedupe key of candidate generation, so equal hosts cannot
/// occur; should one slip through, only its first occurrence is kept.
pub fn finalize(mut findings: Vec<Finding>) -> Vec<Finding> {
    findings.sort_by(|a, b| a.host.cmp(&b.host));
    findings.dedup_by(|next, kept| next.host == kept.host);
    findings
}
