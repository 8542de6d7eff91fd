use std::{
    fmt::{Display, Formatter},
    ops::Deref,
    str::Lines,
};

/// The whole input file, held in memory for the duration of the run.
#[derive(Debug)]
pub struct Document(String);

impl Document {
    #[inline]
    pub fn new(buffer: String) -> Self {
        Self(buffer)
    }

    #[inline]
    pub fn inner(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn lines(&self) -> Lines<'_> {
        self.0.lines()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Document {
    #[inline]
    fn from(buffer: String) -> Self {
        Document(buffer)
    }
}

impl Deref for Document {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
