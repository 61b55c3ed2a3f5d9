//! Hygiene and format checks for user-provided text (testimonials, lead forms).

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>").expect("Invalid regex")
});

static IFRAME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<iframe\b.*?</iframe\s*>").expect("Invalid regex")
});

static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("Invalid regex"));

static INLINE_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)on\w+="[^"]*""#).expect("Invalid regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex")
});

// Optional +55, two-digit area code (parentheses optional), 8 or 9 digit number.
static BR_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+55\s?)?\(?[0-9]{2}\)?\s?[0-9]{4,5}-?[0-9]{4}$").expect("Invalid regex")
});

/// Strip script/iframe blocks, `javascript:` markers and inline event handlers.
///
/// This is a blocklist, not an HTML parser: it is meant for short plain-text
/// fields that should never contain markup in the first place.
pub fn sanitize_html(content: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(content, "");
    let without_iframes = IFRAME_BLOCK.replace_all(&without_scripts, "");
    let without_scheme = JAVASCRIPT_SCHEME.replace_all(&without_iframes, "");
    INLINE_HANDLER.replace_all(&without_scheme, "").into_owned()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Brazilian phone number, e.g. `+55 (11) 91234-5678` or `1134567890`.
pub fn is_valid_phone_number(phone: &str) -> bool {
    BR_PHONE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_and_iframe_blocks() {
        let input = "Amei!<script>alert('x')</script> De verdade<IFRAME src=\"x\">\n</iframe>.";
        assert_eq!(sanitize_html(input), "Amei! De verdade.");
    }

    #[test]
    fn removes_multiline_script_blocks() {
        let input = "antes<script type=\"text/javascript\">\nlet a = 1;\n</script>depois";
        assert_eq!(sanitize_html(input), "antesdepois");
    }

    #[test]
    fn removes_javascript_scheme_and_inline_handlers() {
        let input = r#"<a href="JavaScript:void(0)" onclick="steal()">link</a>"#;
        assert_eq!(sanitize_html(input), r#"<a href="void(0)" >link</a>"#);
    }

    #[test]
    fn leaves_plain_text_untouched() {
        let input = "Já é a minha 3ª compra, ótimo produto e de boa absorção.";
        assert_eq!(sanitize_html(input), input);
    }

    #[test]
    fn validates_email_addresses() {
        assert!(is_valid_email("suporte@renoovy.com"));
        assert!(is_valid_email("a.b+c@mail.com.br"));
        assert!(!is_valid_email("sem-arroba.com"));
        assert!(!is_valid_email("dois@@renoovy.com"));
        assert!(!is_valid_email("espaco @renoovy.com"));
        assert!(!is_valid_email("sem@dominio"));
    }

    #[test]
    fn validates_brazilian_phone_numbers() {
        for valid in [
            "+55 (11) 91234-5678",
            "+5511912345678",
            "(21) 3456-7890",
            "11912345678",
            "1134567890",
        ] {
            assert!(is_valid_phone_number(valid), "{valid}");
        }

        for invalid in ["12345", "+1 (11) 91234-5678", "(11) 912345-67890", "abc"] {
            assert!(!is_valid_phone_number(invalid), "{invalid}");
        }
    }
}
