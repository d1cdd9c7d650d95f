//! Inline-level helpers: role resolution, enumeration symbols, escaping.
//!
//! Roles referenced by inline spans must be declared in the output before a
//! reader resolves them. [`RoleRegistry`] collects one declaration per span
//! visited, in traversal order; the writer flushes the log after the body.

/// One deferred `.. role::` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoleDeclaration {
    pub name: String,
    pub inherit: Option<String>,
    pub classes: Vec<String>,
}

/// Ordered log of role declarations produced during one traversal.
///
/// Entries are appended per occurrence, never deduplicated; the flush order
/// is the order spans were first visited. Anonymous spans get synthesized
/// names, numbered monotonically across the whole traversal.
#[derive(Debug, Default)]
pub(crate) struct RoleRegistry {
    declarations: Vec<RoleDeclaration>,
    anonymous_count: usize,
}

impl RoleRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resolves a span's class list to a role name and logs the declaration.
    ///
    /// Recognized base decorations (`emphasis`, `strong`, `literal`) collapse
    /// to at most one inherited role; extra recognized tokens fall back into
    /// the plain class list. The first remaining class becomes the role name,
    /// or one is synthesized as `inline_role<N>`.
    pub(crate) fn register(&mut self, classes: &[String]) -> String {
        let mut inherit = Vec::new();
        let mut rest = Vec::new();
        for class in classes {
            if matches!(class.as_str(), "emphasis" | "strong" | "literal") {
                inherit.push(class.clone());
            } else {
                rest.push(class.clone());
            }
        }
        let mut options = rest;
        let name = if options.is_empty() {
            None
        } else {
            Some(options.remove(0))
        };
        if inherit.len() > 1 {
            options.extend(inherit.drain(1..));
        }
        let inherit = inherit.pop();
        let name = name.unwrap_or_else(|| {
            self.anonymous_count += 1;
            format!("inline_role{}", self.anonymous_count)
        });
        self.declarations.push(RoleDeclaration {
            name: name.clone(),
            inherit,
            classes: options,
        });
        name
    }

    pub(crate) fn declarations(&self) -> &[RoleDeclaration] {
        &self.declarations
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Enumeration style of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumKind {
    Arabic,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl EnumKind {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "arabic" => Some(EnumKind::Arabic),
            "loweralpha" => Some(EnumKind::LowerAlpha),
            "upperalpha" => Some(EnumKind::UpperAlpha),
            "lowerroman" => Some(EnumKind::LowerRoman),
            "upperroman" => Some(EnumKind::UpperRoman),
            _ => None,
        }
    }

    /// Renders a 1-based ordinal in this style.
    ///
    /// Returns `None` outside the style's range: alphabetic enumerators stop
    /// at 26, roman numerals at 4999.
    pub(crate) fn symbol(self, ordinal: i64) -> Option<String> {
        match self {
            EnumKind::Arabic => (ordinal >= 1).then(|| ordinal.to_string()),
            EnumKind::LowerAlpha => alpha_symbol(ordinal, b'a'),
            EnumKind::UpperAlpha => alpha_symbol(ordinal, b'A'),
            EnumKind::LowerRoman => roman_symbol(ordinal).map(|s| s.to_lowercase()),
            EnumKind::UpperRoman => roman_symbol(ordinal),
        }
    }
}

fn alpha_symbol(ordinal: i64, base: u8) -> Option<String> {
    if !(1..=26).contains(&ordinal) {
        return None;
    }
    Some(char::from(base + (ordinal - 1) as u8).to_string())
}

const ROMAN_PAIRS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn roman_symbol(ordinal: i64) -> Option<String> {
    if !(1..=4999).contains(&ordinal) {
        return None;
    }
    let mut remaining = ordinal;
    let mut out = String::new();
    for (value, glyphs) in ROMAN_PAIRS {
        while remaining >= value {
            out.push_str(glyphs);
            remaining -= value;
        }
    }
    Some(out)
}

/// Escapes inline markup characters in body text.
///
/// Backslash, backquote, asterisk and vertical bar are always escaped; an
/// underscore is escaped only where it would close a reference, at the end
/// of a word.
pub(crate) fn escape_inline(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | '`' | '*' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '_' => {
                let ends_word = chars.peek().map_or(true, |next| !next.is_alphanumeric());
                if ends_word {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
