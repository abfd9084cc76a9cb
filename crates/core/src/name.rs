use std::fmt;

pub const MAX_LEVELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Database,
    Schema,
    Table,
    Column,
}

impl Level {
    pub const ALL: [Self; MAX_LEVELS] = [Self::Database, Self::Schema, Self::Table, Self::Column];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Schema => "schema",
            Self::Table => "table",
            Self::Column => "column",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warehouse object name of up to four levels.
///
/// Levels are expected to be populated from the database inward. Names
/// built by the parser or by [`QualifiedName::from_segments`] never have a
/// gap; a name assembled field by field may, in which case everything after
/// the first absent level is ignored by the formatter and by [`segments`].
///
/// [`segments`]: QualifiedName::segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub table: Option<String>,
    pub column: Option<String>,
}

impl QualifiedName {
    pub fn database(database: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            ..Self::default()
        }
    }

    /// Fills levels left to right. Segments past the column level are dropped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut name = Self::default();
        for (level, segment) in Level::ALL.into_iter().zip(segments) {
            *name.slot_mut(level) = Some(segment.into());
        }
        name
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    #[must_use]
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Database => self.database.as_deref(),
            Level::Schema => self.schema.as_deref(),
            Level::Table => self.table.as_deref(),
            Level::Column => self.column.as_deref(),
        }
    }

    /// Leading populated levels, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        Level::ALL.into_iter().map_while(|level| self.get(level))
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.database.is_none()
    }

    /// Innermost populated level, if any.
    #[must_use]
    pub fn leaf_level(&self) -> Option<Level> {
        self.depth().checked_sub(1).map(|index| Level::ALL[index])
    }

    /// Copy of the name with its innermost level removed.
    #[must_use]
    pub fn parent(&self) -> Self {
        let depth = self.depth();
        Self::from_segments(self.segments().take(depth.saturating_sub(1)))
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::Database => &mut self.database,
            Level::Schema => &mut self.schema,
            Level::Table => &mut self.table,
            Level::Column => &mut self.column,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format(self, true))
    }
}
