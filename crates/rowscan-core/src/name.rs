/// Converts a mixed-case identifier to snake case.
///
/// A `_` is inserted before every `Upper lower+` run that follows another
/// character, then between a lowercase letter or digit and a following
/// uppercase letter. The result is lowercased.
///
/// ```
/// # use rowscan_core::name::to_snake_case;
/// assert_eq!(to_snake_case("FirstName"), "first_name");
/// assert_eq!(to_snake_case("UserID"), "user_id");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(src: &str) -> String {
    let words = split_before_capitalized_words(src);
    split_after_lower(&words).to_lowercase()
}

fn split_before_capitalized_words(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let starts_word = chars.get(i + 1).is_some_and(char::is_ascii_uppercase)
            && chars.get(i + 2).is_some_and(char::is_ascii_lowercase);

        out.push(chars[i]);

        if !starts_word {
            i += 1;
            continue;
        }

        out.push('_');
        out.push(chars[i + 1]);
        i += 2;

        while let Some(c) = chars.get(i).filter(|c| c.is_ascii_lowercase()) {
            out.push(*c);
            i += 1;
        }
    }

    out
}

fn split_after_lower(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);

        let lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        match chars.get(i + 1) {
            Some(next) if lower && next.is_ascii_uppercase() => {
                out.push('_');
                out.push(*next);
                i += 2;
            }
            _ => i += 1,
        }
    }

    out
}
