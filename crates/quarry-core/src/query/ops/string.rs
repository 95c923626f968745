use crate::{
    query::{
        expr::Query,
        token::{StringOptions, StringSearchKind, Token},
    },
    traits::StringSearchable,
};

impl<T: StringSearchable> Query<T> {
    fn search(
        self,
        kind: StringSearchKind,
        pattern: impl Into<String>,
        options: impl Into<StringOptions>,
    ) -> Query<bool> {
        self.extend([Token::StringSearch {
            kind,
            pattern: pattern.into(),
            options: options.into(),
        }])
    }

    /// `<path> CONTAINS[cd] %@`
    #[must_use]
    pub fn text_contains(
        self,
        pattern: impl Into<String>,
        options: impl Into<StringOptions>,
    ) -> Query<bool> {
        self.search(StringSearchKind::Contains, pattern, options)
    }

    /// `<path> LIKE[cd] %@`, with `?` and `*` wildcards.
    #[must_use]
    pub fn like(
        self,
        pattern: impl Into<String>,
        options: impl Into<StringOptions>,
    ) -> Query<bool> {
        self.search(StringSearchKind::Like, pattern, options)
    }

    /// `<path> BEGINSWITH[cd] %@`
    #[must_use]
    pub fn starts_with(
        self,
        prefix: impl Into<String>,
        options: impl Into<StringOptions>,
    ) -> Query<bool> {
        self.search(StringSearchKind::BeginsWith, prefix, options)
    }

    /// `<path> ENDSWITH[cd] %@`
    #[must_use]
    pub fn ends_with(
        self,
        suffix: impl Into<String>,
        options: impl Into<StringOptions>,
    ) -> Query<bool> {
        self.search(StringSearchKind::EndsWith, suffix, options)
    }
}
