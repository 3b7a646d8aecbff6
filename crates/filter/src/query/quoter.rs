//! Defines the `Quoter` trait for database-specific identifier quoting.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub trait Quoter: Send + Sync {
    /// Wraps an identifier (like a column name) in the correct quotation
    /// marks for the dialect.
    ///
    /// - PostgreSQL, SQLite and Oracle use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    /// - SQL Server uses brackets: `[my_column]`
    fn quote(&self, ident: &str) -> String;

    /// Returns the name of the quoting style (e.g., "ANSI", "MySQL").
    fn name(&self) -> &'static str;
}

/// Leaves identifiers untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainQuoter;

impl Quoter for PlainQuoter {
    fn quote(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiQuoter;

impl Quoter for AnsiQuoter {
    fn quote(&self, ident: &str) -> String {
        wrap(ident, '"', '"')
    }

    fn name(&self) -> &'static str {
        "ANSI"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQuoter;

impl Quoter for MySqlQuoter {
    fn quote(&self, ident: &str) -> String {
        wrap(ident, '`', '`')
    }

    fn name(&self) -> &'static str {
        "MySQL"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MsSqlQuoter;

impl Quoter for MsSqlQuoter {
    fn quote(&self, ident: &str) -> String {
        wrap(ident, '[', ']')
    }

    fn name(&self) -> &'static str {
        "MSSQL"
    }
}

// An embedded closing character is doubled so it cannot end the quoted name.
fn wrap(ident: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push(open);
    for c in ident.chars() {
        if c == close {
            out.push(close);
        }
        out.push(c);
    }
    out.push(close);
    out
}

/// Quoting style selectable from configuration. Configuration files accept
/// the same names as [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuoteStyle {
    Plain,
    #[default]
    Ansi,
    Mysql,
    Mssql,
}

impl QuoteStyle {
    pub fn quoter(&self) -> Box<dyn Quoter> {
        match self {
            QuoteStyle::Plain => Box::new(PlainQuoter),
            QuoteStyle::Ansi => Box::new(AnsiQuoter),
            QuoteStyle::Mysql => Box::new(MySqlQuoter),
            QuoteStyle::Mssql => Box::new(MsSqlQuoter),
        }
    }
}

impl Quoter for QuoteStyle {
    fn quote(&self, ident: &str) -> String {
        match self {
            QuoteStyle::Plain => PlainQuoter.quote(ident),
            QuoteStyle::Ansi => AnsiQuoter.quote(ident),
            QuoteStyle::Mysql => MySqlQuoter.quote(ident),
            QuoteStyle::Mssql => MsSqlQuoter.quote(ident),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            QuoteStyle::Plain => PlainQuoter.name(),
            QuoteStyle::Ansi => AnsiQuoter.name(),
            QuoteStyle::Mysql => MySqlQuoter.name(),
            QuoteStyle::Mssql => MsSqlQuoter.name(),
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(QuoteStyle::Plain),
            "ansi" | "postgres" | "postgresql" | "sqlite" => Ok(QuoteStyle::Ansi),
            "mysql" | "backtick" => Ok(QuoteStyle::Mysql),
            "mssql" | "sqlserver" | "bracket" => Ok(QuoteStyle::Mssql),
            other => Err(format!("Unknown quote style: {other}")),
        }
    }
}

impl TryFrom<String> for QuoteStyle {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<QuoteStyle> for String {
    fn from(style: QuoteStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteStyle::Plain => "plain",
            QuoteStyle::Ansi => "ansi",
            QuoteStyle::Mysql => "mysql",
            QuoteStyle::Mssql => "mssql",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_styles() {
        assert_eq!(PlainQuoter.quote("name"), "name");
        assert_eq!(AnsiQuoter.quote("name"), r#""name""#);
        assert_eq!(MySqlQuoter.quote("name"), "`name`");
        assert_eq!(MsSqlQuoter.quote("name"), "[name]");
    }

    #[test]
    fn test_embedded_close_char_is_doubled() {
        assert_eq!(AnsiQuoter.quote(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(MySqlQuoter.quote("a`b"), "`a``b`");
        assert_eq!(MsSqlQuoter.quote("a]b"), "[a]]b]");
        assert_eq!(MsSqlQuoter.quote("a[b"), "[a[b]");
    }

    #[test]
    fn test_quote_style_parsing() {
        assert_eq!("MySQL".parse::<QuoteStyle>(), Ok(QuoteStyle::Mysql));
        assert_eq!("postgres".parse::<QuoteStyle>(), Ok(QuoteStyle::Ansi));
        assert_eq!(" none ".parse::<QuoteStyle>(), Ok(QuoteStyle::Plain));
        assert!("oracle9".parse::<QuoteStyle>().is_err());
    }

    #[test]
    fn test_quote_style_delegates() {
        for style in [
            QuoteStyle::Plain,
            QuoteStyle::Ansi,
            QuoteStyle::Mysql,
            QuoteStyle::Mssql,
        ] {
            assert_eq!(style.quote("id"), style.quoter().quote("id"));
            assert_eq!(style.name(), style.quoter().name());
        }
    }
}
