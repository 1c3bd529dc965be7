//! Card network names.

/// Canonical spelling of a card network as matched in statement text.
///
/// `Master Card` and `MasterCard` become `Mastercard`, `Amex` becomes
/// `American Express`; anything unknown is title-cased.
pub fn normalize_network(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    match collapsed.as_str() {
        "master card" | "mastercard" => "Mastercard".to_string(),
        "amex" | "american express" => "American Express".to_string(),
        "visa" => "Visa".to_string(),
        "discover" => "Discover".to_string(),
        "rupay" => "RuPay".to_string(),
        other => title_case(other),
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
