//! The closed tag taxonomy the writer dispatches over.
//!
//! [`Tag::from_name`] resolves a tag string through the primary set first,
//! then the three catch-all categories ([`DocinfoField`], [`AdmonitionKind`],
//! [`DirectiveKind`]); anything left lands in [`Tag::Other`], which the
//! writer rejects rather than skipping content silently.

/// Document-information fields, rendered as `:Field:` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocinfoField {
    Author,
    Authors,
    Organization,
    Contact,
    Address,
    Status,
    Date,
    Version,
    Revision,
    Copyright,
}

impl DocinfoField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "author" => Some(DocinfoField::Author),
            "authors" => Some(DocinfoField::Authors),
            "organization" => Some(DocinfoField::Organization),
            "contact" => Some(DocinfoField::Contact),
            "address" => Some(DocinfoField::Address),
            "status" => Some(DocinfoField::Status),
            "date" => Some(DocinfoField::Date),
            "version" => Some(DocinfoField::Version),
            "revision" => Some(DocinfoField::Revision),
            "copyright" => Some(DocinfoField::Copyright),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocinfoField::Author => "author",
            DocinfoField::Authors => "authors",
            DocinfoField::Organization => "organization",
            DocinfoField::Contact => "contact",
            DocinfoField::Address => "address",
            DocinfoField::Status => "status",
            DocinfoField::Date => "date",
            DocinfoField::Version => "version",
            DocinfoField::Revision => "revision",
            DocinfoField::Copyright => "copyright",
        }
    }

    /// The capitalized label written into the field marker.
    pub fn label(self) -> &'static str {
        match self {
            DocinfoField::Author => "Author",
            DocinfoField::Authors => "Authors",
            DocinfoField::Organization => "Organization",
            DocinfoField::Contact => "Contact",
            DocinfoField::Address => "Address",
            DocinfoField::Status => "Status",
            DocinfoField::Date => "Date",
            DocinfoField::Version => "Version",
            DocinfoField::Revision => "Revision",
            DocinfoField::Copyright => "Copyright",
        }
    }
}

/// Admonition kinds, rendered as the matching directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmonitionKind {
    Attention,
    Caution,
    Danger,
    Warning,
    Error,
    Hint,
    Important,
    Note,
    Tip,
    /// The generic form, which carries its own title as an argument.
    Admonition,
}

impl AdmonitionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "attention" => Some(AdmonitionKind::Attention),
            "caution" => Some(AdmonitionKind::Caution),
            "danger" => Some(AdmonitionKind::Danger),
            "warning" => Some(AdmonitionKind::Warning),
            "error" => Some(AdmonitionKind::Error),
            "hint" => Some(AdmonitionKind::Hint),
            "important" => Some(AdmonitionKind::Important),
            "note" => Some(AdmonitionKind::Note),
            "tip" => Some(AdmonitionKind::Tip),
            "admonition" => Some(AdmonitionKind::Admonition),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdmonitionKind::Attention => "attention",
            AdmonitionKind::Caution => "caution",
            AdmonitionKind::Danger => "danger",
            AdmonitionKind::Warning => "warning",
            AdmonitionKind::Error => "error",
            AdmonitionKind::Hint => "hint",
            AdmonitionKind::Important => "important",
            AdmonitionKind::Note => "note",
            AdmonitionKind::Tip => "tip",
            AdmonitionKind::Admonition => "admonition",
        }
    }
}

/// Generic directive kinds with no structure beyond a name and a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Raw,
    Epigraph,
    Header,
    Footer,
    Sidebar,
    Rubric,
    Compound,
}

impl DirectiveKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw" => Some(DirectiveKind::Raw),
            "epigraph" => Some(DirectiveKind::Epigraph),
            "header" => Some(DirectiveKind::Header),
            "footer" => Some(DirectiveKind::Footer),
            "sidebar" => Some(DirectiveKind::Sidebar),
            "rubric" => Some(DirectiveKind::Rubric),
            "compound" => Some(DirectiveKind::Compound),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveKind::Raw => "raw",
            DirectiveKind::Epigraph => "epigraph",
            DirectiveKind::Header => "header",
            DirectiveKind::Footer => "footer",
            DirectiveKind::Sidebar => "sidebar",
            DirectiveKind::Rubric => "rubric",
            DirectiveKind::Compound => "compound",
        }
    }
}

/// Tag kind of one element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Document,
    Section,
    Title,
    Subtitle,
    Paragraph,
    Emphasis,
    Strong,
    Literal,
    Inline,
    TitleReference,
    Subscript,
    Superscript,
    Reference,
    FootnoteReference,
    CitationReference,
    Target,
    SubstitutionDefinition,
    Footnote,
    Citation,
    Label,
    BulletList,
    EnumeratedList,
    ListItem,
    DefinitionList,
    DefinitionListItem,
    Term,
    Classifier,
    Definition,
    FieldList,
    Field,
    FieldName,
    FieldBody,
    OptionList,
    OptionListItem,
    OptionGroup,
    Option,
    OptionString,
    OptionArgument,
    Description,
    LiteralBlock,
    DoctestBlock,
    LineBlock,
    Line,
    BlockQuote,
    Attribution,
    Comment,
    Transition,
    Topic,
    Image,
    Figure,
    Caption,
    Legend,
    Docinfo,
    Decoration,
    Generated,
    SystemMessage,
    Problematic,
    Table,
    Tgroup,
    Colspec,
    Thead,
    Tbody,
    Row,
    Entry,
    DocinfoField(DocinfoField),
    Admonition(AdmonitionKind),
    Directive(DirectiveKind),
    /// A tag the taxonomy does not know. Rendering one fails.
    Other(String),
}

impl Tag {
    /// Resolves a tag name, falling through the catch-all categories.
    pub fn from_name(name: &str) -> Tag {
        match name {
            "document" => Tag::Document,
            "section" => Tag::Section,
            "title" => Tag::Title,
            "subtitle" => Tag::Subtitle,
            "paragraph" => Tag::Paragraph,
            "emphasis" => Tag::Emphasis,
            "strong" => Tag::Strong,
            "literal" => Tag::Literal,
            "inline" => Tag::Inline,
            "title_reference" => Tag::TitleReference,
            "subscript" => Tag::Subscript,
            "superscript" => Tag::Superscript,
            "reference" => Tag::Reference,
            "footnote_reference" => Tag::FootnoteReference,
            "citation_reference" => Tag::CitationReference,
            "target" => Tag::Target,
            "substitution_definition" => Tag::SubstitutionDefinition,
            "footnote" => Tag::Footnote,
            "citation" => Tag::Citation,
            "label" => Tag::Label,
            "bullet_list" => Tag::BulletList,
            "enumerated_list" => Tag::EnumeratedList,
            "list_item" => Tag::ListItem,
            "definition_list" => Tag::DefinitionList,
            "definition_list_item" => Tag::DefinitionListItem,
            "term" => Tag::Term,
            "classifier" => Tag::Classifier,
            "definition" => Tag::Definition,
            "field_list" => Tag::FieldList,
            "field" => Tag::Field,
            "field_name" => Tag::FieldName,
            "field_body" => Tag::FieldBody,
            "option_list" => Tag::OptionList,
            "option_list_item" => Tag::OptionListItem,
            "option_group" => Tag::OptionGroup,
            "option" => Tag::Option,
            "option_string" => Tag::OptionString,
            "option_argument" => Tag::OptionArgument,
            "description" => Tag::Description,
            "literal_block" => Tag::LiteralBlock,
            "doctest_block" => Tag::DoctestBlock,
            "line_block" => Tag::LineBlock,
            "line" => Tag::Line,
            "block_quote" => Tag::BlockQuote,
            "attribution" => Tag::Attribution,
            "comment" => Tag::Comment,
            "transition" => Tag::Transition,
            "topic" => Tag::Topic,
            "image" => Tag::Image,
            "figure" => Tag::Figure,
            "caption" => Tag::Caption,
            "legend" => Tag::Legend,
            "docinfo" => Tag::Docinfo,
            "decoration" => Tag::Decoration,
            "generated" => Tag::Generated,
            "system_message" => Tag::SystemMessage,
            "problematic" => Tag::Problematic,
            "table" => Tag::Table,
            "tgroup" => Tag::Tgroup,
            "colspec" => Tag::Colspec,
            "thead" => Tag::Thead,
            "tbody" => Tag::Tbody,
            "row" => Tag::Row,
            "entry" => Tag::Entry,
            other => {
                if let Some(field) = DocinfoField::from_name(other) {
                    Tag::DocinfoField(field)
                } else if let Some(kind) = AdmonitionKind::from_name(other) {
                    Tag::Admonition(kind)
                } else if let Some(kind) = DirectiveKind::from_name(other) {
                    Tag::Directive(kind)
                } else {
                    Tag::Other(other.to_string())
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Document => "document",
            Tag::Section => "section",
            Tag::Title => "title",
            Tag::Subtitle => "subtitle",
            Tag::Paragraph => "paragraph",
            Tag::Emphasis => "emphasis",
            Tag::Strong => "strong",
            Tag::Literal => "literal",
            Tag::Inline => "inline",
            Tag::TitleReference => "title_reference",
            Tag::Subscript => "subscript",
            Tag::Superscript => "superscript",
            Tag::Reference => "reference",
            Tag::FootnoteReference => "footnote_reference",
            Tag::CitationReference => "citation_reference",
            Tag::Target => "target",
            Tag::SubstitutionDefinition => "substitution_definition",
            Tag::Footnote => "footnote",
            Tag::Citation => "citation",
            Tag::Label => "label",
            Tag::BulletList => "bullet_list",
            Tag::EnumeratedList => "enumerated_list",
            Tag::ListItem => "list_item",
            Tag::DefinitionList => "definition_list",
            Tag::DefinitionListItem => "definition_list_item",
            Tag::Term => "term",
            Tag::Classifier => "classifier",
            Tag::Definition => "definition",
            Tag::FieldList => "field_list",
            Tag::Field => "field",
            Tag::FieldName => "field_name",
            Tag::FieldBody => "field_body",
            Tag::OptionList => "option_list",
            Tag::OptionListItem => "option_list_item",
            Tag::OptionGroup => "option_group",
            Tag::Option => "option",
            Tag::OptionString => "option_string",
            Tag::OptionArgument => "option_argument",
            Tag::Description => "description",
            Tag::LiteralBlock => "literal_block",
            Tag::DoctestBlock => "doctest_block",
            Tag::LineBlock => "line_block",
            Tag::Line => "line",
            Tag::BlockQuote => "block_quote",
            Tag::Attribution => "attribution",
            Tag::Comment => "comment",
            Tag::Transition => "transition",
            Tag::Topic => "topic",
            Tag::Image => "image",
            Tag::Figure => "figure",
            Tag::Caption => "caption",
            Tag::Legend => "legend",
            Tag::Docinfo => "docinfo",
            Tag::Decoration => "decoration",
            Tag::Generated => "generated",
            Tag::SystemMessage => "system_message",
            Tag::Problematic => "problematic",
            Tag::Table => "table",
            Tag::Tgroup => "tgroup",
            Tag::Colspec => "colspec",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Row => "row",
            Tag::Entry => "entry",
            Tag::DocinfoField(field) => field.as_str(),
            Tag::Admonition(kind) => kind.as_str(),
            Tag::Directive(kind) => kind.as_str(),
            Tag::Other(name) => name,
        }
    }

    /// Containers whose first child inherits block mode and needs no
    /// separation of its own.
    pub(crate) fn is_block_container(&self) -> bool {
        matches!(
            self,
            Tag::Document
                | Tag::Section
                | Tag::Footnote
                | Tag::ListItem
                | Tag::Definition
                | Tag::FieldBody
        )
    }
}
