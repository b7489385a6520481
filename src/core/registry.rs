//! Process-wide registry of the two compiled personal-name patterns.
//!
//! Both patterns are compiled once, on first use of [`PatternRegistry::global`]
//! or [`PatternRegistry::try_global`], and are shared read-only afterwards.

use crate::domain::model::{NameMatch, NameOrder};
use crate::domain::ports::NameMatcher;
use crate::utils::error::{NameError, Result};
use once_cell::sync::OnceCell;
use regex::Regex;

/// Given name (may contain spaces and periods), separator, single-word surname at end of input.
pub const FIRST_LAST_LITERAL: &str = r"([-'A-Za-z .]+)[ ,;]+([-'A-Za-z]+)$";

/// Single-word surname at start of input, separator, given name.
pub const LAST_FIRST_LITERAL: &str = r"^([-'A-Za-z]+)[ ,;]+([-'A-Za-z .]+)";

static GLOBAL: OnceCell<PatternRegistry> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct NamePattern {
    order: NameOrder,
    regex: Regex,
}

impl NamePattern {
    /// Compiles `literal` as the matcher for `order`.
    ///
    /// The literal must contain two capture groups; group order is interpreted
    /// according to `order`.
    pub fn new(order: NameOrder, literal: &str) -> Result<Self> {
        let regex = Regex::new(literal).map_err(|source| NameError::PatternCompilationError {
            name: order.as_str(),
            literal: literal.to_string(),
            source,
        })?;
        tracing::debug!("Compiled {} pattern: {}", order, literal);
        Ok(Self { order, regex })
    }

    pub fn order(&self) -> NameOrder {
        self.order
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Applies the pattern and returns the capture groups as name parts.
    /// Captures are returned verbatim.
    pub fn match_name(&self, input: &str) -> Option<NameMatch> {
        let caps = self.regex.captures(input)?;
        let first = caps.get(1)?.as_str().to_string();
        let second = caps.get(2)?.as_str().to_string();

        let (given, surname) = match self.order {
            NameOrder::FirstLast => (first, second),
            NameOrder::LastFirst => (second, first),
        };

        Some(NameMatch {
            given,
            surname,
            order: self.order,
        })
    }
}

impl NameMatcher for NamePattern {
    fn order(&self) -> NameOrder {
        self.order
    }

    fn source(&self) -> &str {
        self.as_str()
    }

    fn match_name(&self, input: &str) -> Option<NameMatch> {
        NamePattern::match_name(self, input)
    }
}

#[derive(Debug, Clone)]
pub struct PatternRegistry {
    first_last: NamePattern,
    last_first: NamePattern,
}

impl PatternRegistry {
    /// Compiles a fresh registry from the built-in literals.
    pub fn compile() -> Result<Self> {
        Ok(Self {
            first_last: NamePattern::new(NameOrder::FirstLast, FIRST_LAST_LITERAL)?,
            last_first: NamePattern::new(NameOrder::LastFirst, LAST_FIRST_LITERAL)?,
        })
    }

    /// Returns the process-wide registry, compiling it on first call.
    ///
    /// A failed compilation is not cached; every later call reports it again.
    pub fn try_global() -> Result<&'static Self> {
        GLOBAL.get_or_try_init(Self::compile)
    }

    /// Infallible form of [`PatternRegistry::try_global`].
    ///
    /// # Panics
    ///
    /// Panics if a built-in literal fails to compile. Binaries should call
    /// `try_global` during startup so the failure is reported cleanly.
    pub fn global() -> &'static Self {
        match Self::try_global() {
            Ok(registry) => registry,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn get(&self, order: NameOrder) -> &NamePattern {
        match order {
            NameOrder::FirstLast => &self.first_last,
            NameOrder::LastFirst => &self.last_first,
        }
    }

    pub fn first_last(&self) -> &NamePattern {
        &self.first_last
    }

    pub fn last_first(&self) -> &NamePattern {
        &self.last_first
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamePattern> {
        [&self.first_last, &self.last_first].into_iter()
    }
}

/// Compiled "First Last" matcher from the global registry.
pub fn first_last_pattern() -> &'static NamePattern {
    PatternRegistry::global().first_last()
}

/// Compiled "Last, First" matcher from the global registry.
pub fn last_first_pattern() -> &'static NamePattern {
    PatternRegistry::global().last_first()
}
