use logos::Logos;

use crate::ast::Position;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, plus [`Token::End`]
/// and [`Token::Error`], which only the [`Scanner`] produces.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Num(i64),
    /// Identifier tokens, such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Id(String),
    /// `int`
    #[token("int")]
    Int,
    /// `boolean`
    #[token("boolean")]
    Boolean,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `break`
    #[token("break")]
    Break,
    /// `print`
    #[token("print")]
    Print,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEq,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEq,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Not,
    /// End of input. Repeated on every call once the source is exhausted.
    End,
    /// Input that starts no valid token.
    Error(LexicalError),

    /// Newlines advance the line counter and are skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Why a piece of input could not be tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token, including a lone `&` or `|`.
    #[default]
    UnrecognizedCharacter,
    /// A run of digits whose value exceeds `i64::MAX`.
    LiteralTooLarge,
}

/// The payload of [`Token::Error`]: the failure and the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The source text that failed to scan.
    pub text: String,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so columns
/// can be computed for every token.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Digit runs are accumulated as `i64`; values past `i64::MAX` are rejected
/// instead of wrapping.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// Pulls tokens out of the source one at a time.
///
/// The scanner never looks back: each call to [`Scanner::next_token`] consumes
/// the next token and moves the reported position to its first character.
///
/// ## Example
/// ```
/// use dragon::interpreter::lexer::{Scanner, Token};
///
/// let mut scanner = Scanner::new("x =\n  42;");
///
/// assert_eq!(scanner.next_token(), Token::Id("x".to_string()));
/// assert_eq!(scanner.next_token(), Token::Assign);
/// assert_eq!(scanner.next_token(), Token::Num(42));
/// assert_eq!(scanner.position().line, 2);
/// assert_eq!(scanner.position().column, 3);
/// assert_eq!(scanner.next_token(), Token::Semicolon);
/// assert_eq!(scanner.next_token(), Token::End);
/// assert_eq!(scanner.next_token(), Token::End);
/// ```
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, Token>,
    position: Position,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned before the first character of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer_with_extras(source,
                                                  LexerExtras { line:       1,
                                                                line_start: 0, }),
               position: Position::new(1, 1),
               finished: false, }
    }

    /// Returns the next token and advances past it.
    ///
    /// Unrecognized input becomes [`Token::Error`]; the scanner keeps going
    /// after it. Once the input is exhausted every call returns
    /// [`Token::End`].
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::End;
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                self.position = self.position_of(self.lexer.span().start);
                token
            },
            Some(Err(kind)) => {
                self.position = self.position_of(self.lexer.span().start);
                Token::Error(LexicalError { kind,
                                            text: self.lexer.slice().to_string() })
            },
            None => {
                self.finished = true;
                self.position = self.position_of(self.lexer.source().len());
                Token::End
            },
        }
    }

    /// The position of the most recently returned token.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Converts a byte offset on the current line to a position.
    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.lexer.extras;
        let column = self.lexer.source()[extras.line_start..offset].chars().count() + 1;

        Position::new(extras.line, column)
    }
}

impl Iterator for Scanner<'_> {
    type Item = (Token, Position);

    /// Yields every token with its position, stopping before [`Token::End`].
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::End => None,
            token => Some((token, self.position)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Num(n) => return write!(f, "number {n}"),
            Self::Id(name) => return write!(f, "identifier '{name}'"),
            Self::Error(error) => return write!(f, "invalid input '{}'", error.text),
            Self::End => return write!(f, "end of input"),
            Self::NewLine => return write!(f, "newline"),
            Self::Ignored => return write!(f, "whitespace"),
            Self::Int => "int",
            Self::Boolean => "boolean",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Do => "do",
            Self::Break => "break",
            Self::Print => "print",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Not => "!",
        };
        write!(f, "'{symbol}'")
    }
}
