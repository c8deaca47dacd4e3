/// Snapshot of the visitor statistics shown on the page.
///
/// Produced fresh on every counter refresh and never persisted here;
/// persistence, if any, lives in the remote backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisitorMetrics {
    pub total_visitors: u64,
    pub today_visitors: u64,
    pub page_views: u64,
    pub online_users: u64,
}

/// Formats a number with thousands separators for the display slots.
pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
