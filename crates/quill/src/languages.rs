//! Built-in language definitions for the code highlighter.
//!
//! Each language is a table of regex category rules over raw source text.
//! The rules are lexical only; there is no real tokenizer behind them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::theme::ColorRole;

/// Lexical token class within a language definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comments,
    Strings,
    Preprocessor,
    Keywords,
    Types,
    Numbers,
    Functions,
    Variables,
    Operators,
    Decorators,
    Macros,
    Lifetimes,
    Booleans,
    Properties,
    Selectors,
    Colors,
    Ids,
    Punctuation,
}

/// Category scan order. Earlier categories win overlapping matches, so
/// comments and strings must come first.
pub const CATEGORY_PRIORITY: &[Category] = &[
    Category::Comments,
    Category::Strings,
    Category::Preprocessor,
    Category::Keywords,
    Category::Types,
    Category::Numbers,
    Category::Functions,
    Category::Variables,
    Category::Operators,
    Category::Decorators,
    Category::Macros,
    Category::Lifetimes,
    Category::Booleans,
    Category::Properties,
    Category::Selectors,
    Category::Colors,
    Category::Ids,
    Category::Punctuation,
];

impl Category {
    /// Default capture group for the category's rules. Zero means the whole
    /// match; categories whose patterns anchor on trailing context (a
    /// function name before `(`, a property name before `:`) color group 1.
    fn capture_group(self) -> usize {
        match self {
            Category::Functions
            | Category::Booleans
            | Category::Properties
            | Category::Selectors
            | Category::Ids => 1,
            _ => 0,
        }
    }

    /// Display color role for the category.
    pub(crate) fn role(self) -> ColorRole {
        match self {
            Category::Comments => ColorRole::Comment,
            Category::Strings | Category::Colors => ColorRole::String,
            Category::Preprocessor | Category::Keywords | Category::Booleans => ColorRole::Keyword,
            Category::Types | Category::Lifetimes => ColorRole::Type,
            Category::Numbers => ColorRole::Number,
            Category::Functions
            | Category::Decorators
            | Category::Macros
            | Category::Selectors => ColorRole::Function,
            Category::Variables | Category::Ids => ColorRole::Variable,
            Category::Operators => ColorRole::Operator,
            Category::Properties => ColorRole::Property,
            Category::Punctuation => ColorRole::Punctuation,
        }
    }
}

/// One regex rule within a language definition.
pub struct Rule {
    pub category: Category,
    pub pattern: Regex,
    group: usize,
}

impl Rule {
    /// Capture group whose span gets colored.
    pub(crate) fn group(&self) -> usize {
        self.group
    }
}

/// A registered language: canonical name, aliases, category rules.
pub struct LanguageDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    rules: Vec<Rule>,
}

impl LanguageDef {
    /// Rule for a category, if this language defines one.
    pub(crate) fn rule(&self, category: Category) -> Option<&Rule> {
        self.rules.iter().find(|r| r.category == category)
    }
}

fn rule(category: Category, pattern: &str) -> Rule {
    rule_group(category, pattern, category.capture_group())
}

fn rule_group(category: Category, pattern: &str, group: usize) -> Rule {
    Rule {
        category,
        pattern: Regex::new(pattern).unwrap(),
        group,
    }
}

/// The built-in language table, compiled once per process.
static LANGUAGES: Lazy<Vec<LanguageDef>> = Lazy::new(|| {
    vec![
        LanguageDef {
            name: "javascript",
            aliases: &["js", "jsx", "typescript", "ts", "tsx"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:const|let|var|function|return|if|else|for|while|do|switch|case|break|continue|new|this|class|extends|import|export|from|default|async|await|try|catch|finally|throw|typeof|instanceof|in|of|true|false|null|undefined|void)\b",
                ),
                rule(
                    Category::Strings,
                    r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#,
                ),
                rule(Category::Comments, r"//[^\n]*|/\*(?s:.*?)\*/"),
                rule(Category::Numbers, r"\b(?:\d+\.?\d*|0x[a-fA-F0-9]+)\b"),
                rule(Category::Functions, r"\b([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\("),
                rule(Category::Operators, r"[+\-*/%=!<>&|^~?:]|=>|\.\.\."),
            ],
        },
        LanguageDef {
            name: "python",
            aliases: &["py", "python3"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:def|class|if|elif|else|for|while|try|except|finally|with|as|import|from|return|yield|raise|pass|break|continue|and|or|not|in|is|True|False|None|lambda|global|nonlocal|async|await)\b",
                ),
                rule(
                    Category::Strings,
                    r#""""(?s:.*?)"""|'''(?s:.*?)'''|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
                ),
                rule(Category::Comments, r"#[^\n]*"),
                rule(
                    Category::Numbers,
                    r"\b(?:\d+\.?\d*|0x[a-fA-F0-9]+|0b[01]+|0o[0-7]+)\b",
                ),
                rule(Category::Functions, r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\("),
                rule(Category::Decorators, r"@[a-zA-Z_][a-zA-Z0-9_]*"),
            ],
        },
        LanguageDef {
            name: "bash",
            aliases: &["sh", "shell", "zsh"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:if|then|else|elif|fi|for|while|do|done|case|esac|function|return|exit|export|source|alias|unset|local|readonly|declare)\b",
                ),
                rule(Category::Strings, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
                rule(Category::Comments, r"#[^\n]*"),
                rule(Category::Numbers, r"\b\d+\b"),
                rule(
                    Category::Variables,
                    r"\$[a-zA-Z_][a-zA-Z0-9_]*|\$\{[^}]+\}|\$\([^)]+\)",
                ),
                rule(Category::Operators, r"[|&;<>()]|>>|<<|\|\||&&"),
            ],
        },
        LanguageDef {
            name: "json",
            aliases: &[],
            rules: vec![
                // Keys and values are told apart by the colon, so both
                // patterns capture the colored part explicitly.
                rule_group(Category::Strings, r#"("(?:[^"\\]|\\.)*")\s*:"#, 1),
                rule_group(Category::Numbers, r":\s*(-?\d+\.?\d*)", 1),
                rule(Category::Booleans, r":\s*(true|false|null)\b"),
                rule(Category::Punctuation, r"[{}\[\]:,]"),
            ],
        },
        LanguageDef {
            name: "qml",
            aliases: &[],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:import|property|signal|function|Component|Item|Rectangle|Text|Row|Column|Repeater|ListView|MouseArea|Timer|Connections|Binding|alias|readonly|required|default|on[A-Z][a-zA-Z]*)\b",
                ),
                rule(
                    Category::Types,
                    r"\b(?:int|real|double|string|bool|var|list|url|color|font|date|point|size|rect|vector2d|vector3d|vector4d|quaternion|matrix4x4)\b",
                ),
                rule(Category::Strings, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
                rule(Category::Comments, r"//[^\n]*|/\*(?s:.*?)\*/"),
                rule(Category::Numbers, r"\b\d+\.?\d*\b"),
                rule(Category::Properties, r"([a-zA-Z][a-zA-Z0-9_]*)\s*:"),
                rule(Category::Ids, r"\bid\s*:\s*([a-zA-Z_][a-zA-Z0-9_]*)"),
            ],
        },
        LanguageDef {
            name: "css",
            aliases: &["scss", "sass", "less"],
            rules: vec![
                rule(
                    Category::Selectors,
                    r"([.#]?[a-zA-Z_-][a-zA-Z0-9_-]*)\s*\{",
                ),
                rule(Category::Properties, r"([a-zA-Z-]+)\s*:"),
                rule(Category::Strings, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
                rule(Category::Comments, r"/\*(?s:.*?)\*/"),
                rule(
                    Category::Numbers,
                    r"\b\d+\.?\d*(?:px|em|rem|%|vh|vw|deg|s|ms)?\b",
                ),
                rule(
                    Category::Colors,
                    r"#[a-fA-F0-9]{3,8}|rgba?\([^)]+\)|hsla?\([^)]+\)",
                ),
            ],
        },
        LanguageDef {
            name: "rust",
            aliases: &["rs"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:fn|let|mut|const|static|if|else|match|for|while|loop|break|continue|return|struct|enum|impl|trait|pub|mod|use|crate|self|super|where|async|await|move|ref|type|unsafe|extern|dyn|macro_rules)\b",
                ),
                rule(
                    Category::Types,
                    r"\b(?:i8|i16|i32|i64|i128|isize|u8|u16|u32|u64|u128|usize|f32|f64|bool|char|str|String|Vec|Option|Result|Box|Rc|Arc|Self)\b",
                ),
                rule(
                    Category::Strings,
                    r##"r#*"(?s:.*?)"#*|"(?:[^"\\]|\\.)*""##,
                ),
                rule(Category::Comments, r"//[^\n]*|/\*(?s:.*?)\*/"),
                rule(
                    Category::Numbers,
                    r"\b\d+\.?\d*(?:_\d+)*(?:f32|f64|i32|u32|usize)?\b",
                ),
                rule(Category::Macros, r"\b[a-zA-Z_][a-zA-Z0-9_]*!"),
                rule(Category::Lifetimes, r"'[a-zA-Z_][a-zA-Z0-9_]*"),
            ],
        },
        LanguageDef {
            name: "go",
            aliases: &["golang"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:func|return|if|else|for|range|switch|case|default|break|continue|goto|fallthrough|defer|go|select|chan|map|struct|interface|type|package|import|const|var|nil|true|false|iota)\b",
                ),
                rule(
                    Category::Types,
                    r"\b(?:int|int8|int16|int32|int64|uint|uint8|uint16|uint32|uint64|uintptr|float32|float64|complex64|complex128|byte|rune|string|bool|error)\b",
                ),
                rule(
                    Category::Strings,
                    r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#,
                ),
                rule(Category::Comments, r"//[^\n]*|/\*(?s:.*?)\*/"),
                rule(Category::Numbers, r"\b\d+\.?\d*\b"),
                rule(Category::Functions, r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\("),
            ],
        },
        LanguageDef {
            name: "cpp",
            aliases: &["c", "c++", "cxx", "h", "hpp"],
            rules: vec![
                rule(
                    Category::Keywords,
                    r"\b(?:auto|break|case|catch|class|const|continue|default|delete|do|else|enum|explicit|export|extern|false|for|friend|goto|if|inline|mutable|namespace|new|noexcept|nullptr|operator|private|protected|public|register|return|sizeof|static|struct|switch|template|this|throw|true|try|typedef|typeid|typename|union|using|virtual|volatile|while|override|final)\b",
                ),
                rule(
                    Category::Types,
                    r"\b(?:void|bool|char|short|int|long|float|double|signed|unsigned|wchar_t|size_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|string|vector|map|set|list|array|unique_ptr|shared_ptr)\b",
                ),
                rule(
                    Category::Preprocessor,
                    r"(?m)#\s*(?:include|define|undef|ifdef|ifndef|if|else|elif|endif|pragma|error|warning).*$",
                ),
                rule(Category::Strings, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
                rule(Category::Comments, r"//[^\n]*|/\*(?s:.*?)\*/"),
                rule(
                    Category::Numbers,
                    r"\b(?:\d+\.?\d*[fFlLuU]*|0x[a-fA-F0-9]+[uUlL]*)\b",
                ),
            ],
        },
    ]
});

/// Resolve a language name or alias to its definition.
///
/// Lookup trims whitespace and is case-insensitive; the canonical name is
/// tried first, then every definition's alias set.
pub fn resolve(name: &str) -> Option<&'static LanguageDef> {
    let normalized = name.trim().to_lowercase();

    LANGUAGES
        .iter()
        .find(|def| def.name == normalized)
        .or_else(|| {
            LANGUAGES
                .iter()
                .find(|def| def.aliases.contains(&normalized.as_str()))
        })
}

/// Every canonical name plus every alias, sorted.
pub fn supported_languages() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LANGUAGES
        .iter()
        .flat_map(|def| std::iter::once(def.name).chain(def.aliases.iter().copied()))
        .collect();
    names.sort_unstable();
    names
}
