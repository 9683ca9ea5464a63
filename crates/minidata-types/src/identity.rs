use std::collections::{HashMap, HashSet};

use crate::record::MetricRecord;

/// Stable render keys for a pass over `records`, one per record in order.
///
/// The first card with a given title is keyed by the title itself; later
/// cards sharing it get `"<title>#<n>"`, skipping any key already taken.
pub fn card_keys(records: &[MetricRecord]) -> Vec<String> {
    let titles: HashSet<&str> = records.iter().map(|r| r.title.as_str()).collect();
    let mut used: HashSet<String> = HashSet::new();
    let mut occurrences: HashMap<&str, usize> = HashMap::new();

    records
        .iter()
        .map(|record| {
            let count = occurrences.entry(record.title.as_str()).or_insert(0);
            *count += 1;

            let mut key = if *count == 1 {
                record.title.clone()
            } else {
                format!("{}#{}", record.title, count)
            };
            while used.contains(&key) || (*count > 1 && titles.contains(key.as_str())) {
                *count += 1;
                key = format!("{}#{}", record.title, count);
            }

            used.insert(key.clone());
            key
        })
        .collect()
}

/// Titles that occur more than once, in first-seen order.
pub fn duplicate_titles(records: &[MetricRecord]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for record in records {
        let count = counts.entry(record.title.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(record.title.as_str());
        }
    }

    duplicates
}
