//! a module turns a String expression into a symbolic expression
//!
//! The grammar covers the closed node set of the engine: numbers, variables,
//! `+ - * / ^`, unary minus, brackets and the function names
//! `exp, ln, log, sin, cos, tg, tan, ctg, cot`. Implicit multiplication
//! between a number and a following variable or bracket ("2x", "3(x+1)") is
//! accepted, the way hand-written formulas usually arrive from a UI.
//!
//!# Example
//! ```
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let parsed = Expr::parse_expression("x^2 - 4").unwrap();
//! let f = parsed.lambdify1D();
//! assert_eq!(f(3.0), 5.0);
//! ```

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::has_balanced_brackets;
use std::f64::consts::{E, PI};
use thiserror::Error;

/// Parse failures. Malformed input is reported to the caller, never masked
/// behind a panic or a default expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unbalanced brackets in `{0}`")]
    UnbalancedBrackets(String),
    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },
    #[error("unexpected end of expression after `{0}`")]
    UnexpectedEnd(String),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
    #[error("expression is not a polynomial in `{var}`: {reason}")]
    NotPolynomial { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::MalformedNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            _ if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_')
                {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push(Token::Ident(name));
            }
            _ => return Err(ParseError::UnexpectedCharacter { ch: c, pos: i }),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    // expr := term (('+'|'-') term)*
    fn parse_expr_level(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Add(lhs.boxed(), rhs.boxed());
                }
                Token::Minus => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Sub(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // term := unary (('*'|'/') unary)*, with implicit '*' before idents and brackets
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Mul(lhs.boxed(), rhs.boxed());
                }
                Some(Token::Slash) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Div(lhs.boxed(), rhs.boxed());
                }
                // implicit multiplication: "2x", "3(x+1)", "x sin(x)"
                Some(Token::Ident(_)) | Some(Token::LParen) | Some(Token::Number(_)) => {
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Mul(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // unary := '-' unary | power
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(Token::Minus) = self.peek() {
            self.next();
            let inner = self.parse_unary()?;
            return Ok(Expr::Mul(
                Expr::Const(-1.0).boxed(),
                inner.boxed(),
            ));
        }
        if let Some(Token::Plus) = self.peek() {
            self.next();
            return self.parse_unary();
        }
        self.parse_power()
    }

    // power := atom ('^' unary)?, right-associative
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.next();
            let exp = self.parse_unary()?;
            return Ok(Expr::Pow(base.boxed(), exp.boxed()));
        }
        Ok(base)
    }

    // atom := number | constant | variable | function '(' expr ')' | '(' expr ')'
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(Expr::Const(value)),
            Some(Token::Ident(name)) => {
                if let Some(Token::LParen) = self.peek() {
                    self.next();
                    let argument = self.parse_expr_level()?;
                    match self.next() {
                        Some(Token::RParen) => {}
                        _ => return Err(ParseError::UnexpectedEnd(name.clone())),
                    }
                    let arg = argument.boxed();
                    match name.as_str() {
                        "exp" => Ok(Expr::Exp(arg)),
                        "ln" | "log" => Ok(Expr::Ln(arg)),
                        "sin" => Ok(Expr::sin(arg)),
                        "cos" => Ok(Expr::cos(arg)),
                        "tg" | "tan" => Ok(Expr::tg(arg)),
                        "ctg" | "cot" => Ok(Expr::ctg(arg)),
                        _ => Err(ParseError::UnknownFunction(name.clone())),
                    }
                } else {
                    match name.as_str() {
                        "pi" | "Pi" | "PI" => Ok(Expr::Const(PI)),
                        "e" => Ok(Expr::Const(E)),
                        _ => Ok(Expr::Var(name)),
                    }
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr_level()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ParseError::UnexpectedEnd("(".to_string())),
                }
            }
            Some(tok) => Err(ParseError::UnexpectedCharacter {
                ch: match tok {
                    Token::Plus => '+',
                    Token::Minus => '-',
                    Token::Star => '*',
                    Token::Slash => '/',
                    Token::Caret => '^',
                    Token::RParen => ')',
                    _ => '?',
                },
                pos: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd("expression".to_string())),
        }
    }
}

/// parse a trimmed input string into a symbolic expression
pub fn parse_expression_func(input: &str) -> Result<Expr, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    if !has_balanced_brackets(input) {
        return Err(ParseError::UnbalancedBrackets(input.to_string()));
    }
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr_level()?;
    if parser.pos != parser.tokens.len() {
        return Err(ParseError::UnexpectedEnd(input.to_string()));
    }
    Ok(expr)
}

impl Expr {
    /// Parses a string into a symbolic expression.
    ///
    /// # Examples
    /// ```
    /// use RustedRoots::symbolic::symbolic_engine::Expr;
    /// let expr = Expr::parse_expression("2*x + sin(x)").unwrap();
    /// println!("{}", expr);
    /// ```
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        parse_expression_func(input)
    }

    /// Parses a vector of strings into symbolic expressions.
    pub fn parse_vector_expression(inputs: Vec<&str>) -> Result<Vec<Expr>, ParseError> {
        inputs.iter().map(|s| parse_expression_func(s)).collect()
    }
}
