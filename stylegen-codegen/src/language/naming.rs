use std::borrow::Cow;

/// Reserved words of a target language and how to quote one used as a name.
///
/// Member names come straight from the schema; the lints reject anything
/// that is not a plain identifier, so quoting keywords is all that is left.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    pub reserved_words: &'static [&'static str],
    /// Text placed before and after a reserved word, e.g. backticks.
    pub quotes: (&'static str, &'static str),
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// `name`, quoted if the language reserves it.
    pub fn safe_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !self.is_reserved(name) {
            return Cow::Borrowed(name);
        }
        let (open, close) = self.quotes;
        Cow::Owned(format!("{}{}{}", open, name, close))
    }
}
