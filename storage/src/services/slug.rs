/// Derives a URL-safe slug from an event name: lowercased, with runs of
/// non-alphanumeric characters collapsed to a single hyphen and no
/// leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("AI Workshop"), "ai-workshop");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Code Golf Contest!!"), "code-golf-contest");
        assert_eq!(slugify("Cyber   Security -- Hackathon"), "cyber-security-hackathon");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  CTF Night  "), "ctf-night");
        assert_eq!(slugify("!!important!!"), "important");
    }

    #[test]
    fn is_idempotent() {
        let once = slugify("Code Golf Contest!!");
        assert_eq!(slugify(&once), once);
    }
}
