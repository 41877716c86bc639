//! Wire naming for resources and actions.

/// Convert `snake_case`, `CamelCase` or mixed names to `kebab-case`.
///
/// `partner_account` -> `partner-account`, `PartnerAccount` ->
/// `partner-account`, `HTMLTemplate` -> `html-template`, `upload-image`
/// stays as is.
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    let mut prev_upper = false;
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            prev_lower = false;
            prev_upper = false;
        } else if ch.is_uppercase() {
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev_lower || (prev_upper && next_lower) {
                result.push('-');
            }
            result.extend(ch.to_lowercase());
            prev_lower = false;
            prev_upper = true;
        } else {
            result.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            prev_upper = false;
        }
    }
    result
}
