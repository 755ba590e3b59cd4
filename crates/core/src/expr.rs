//! Restricted arithmetic evaluator.
//!
//! Accepts numeric literals, `+ - * /`, unary sign and parentheses. Nothing
//! else: no identifiers, calls, or other operators.

use std::fmt;
use thiserror::Error;

const MAX_DEPTH: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum ExprError {
    #[error("unexpected character '{0}' at {1}")]
    UnexpectedChar(char, usize),
    #[error("malformed number at {0}")]
    BadNumber(usize),
    #[error("unexpected token at {0}")]
    UnexpectedToken(usize),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("division by zero")]
    DivisionByZero,
    #[error("numeric overflow")]
    Overflow,
}

/// Integers stay exact until they meet a float or a division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn checked_float(value: f64) -> Result<Number, ExprError> {
        if value.is_finite() {
            Ok(Number::Float(value))
        } else {
            Err(ExprError::Overflow)
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// Shortest round-trip form; integral values keep a `.0`, very large and
/// very small magnitudes switch to exponent notation (`1e+16`, `1.5e-05`).
fn format_float(v: f64) -> String {
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", v);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => sci,
        };
    }
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(Number),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                let (number, end) = scan_number(&chars, start)?;
                tokens.push((Token::Num(number), start));
                i = end;
                continue;
            }
            other => return Err(ExprError::UnexpectedChar(other, i)),
        };
        tokens.push((token, i));
        i += 1;
    }

    Ok(tokens)
}

fn scan_number(chars: &[char], start: usize) -> Result<(Number, usize), ExprError> {
    let mut i = start;
    let mut is_float = false;
    let digits = |i: &mut usize| {
        let from = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - from
    };

    let int_digits = digits(&mut i);
    let mut frac_digits = 0;
    if i < chars.len() && chars[i] == '.' {
        is_float = true;
        i += 1;
        frac_digits = digits(&mut i);
    }
    if int_digits == 0 && frac_digits == 0 {
        return Err(ExprError::BadNumber(start));
    }
    if i < chars.len() && matches!(chars[i], 'e' | 'E') {
        is_float = true;
        i += 1;
        if i < chars.len() && matches!(chars[i], '+' | '-') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return Err(ExprError::BadNumber(start));
        }
    }

    let text: String = chars[start..i].iter().collect();
    let number = if is_float {
        let value: f64 = text.parse().map_err(|_| ExprError::BadNumber(start))?;
        Number::checked_float(value)?
    } else {
        Number::Int(text.parse().map_err(|_| ExprError::Overflow)?)
    };
    Ok((number, i))
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map(|(_, at)| *at).unwrap_or(0)
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Number, ExprError> {
        let mut acc = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = apply(op, acc, rhs)?;
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<Number, ExprError> {
        let mut acc = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            acc = apply(op, acc, rhs)?;
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<Number, ExprError> {
        self.enter()?;
        let value = match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()?
            }
            Some(Token::Minus) => {
                self.pos += 1;
                match self.unary()? {
                    Number::Int(i) => Number::Int(i.checked_neg().ok_or(ExprError::Overflow)?),
                    Number::Float(f) => Number::Float(-f),
                }
            }
            _ => self.primary()?,
        };
        self.depth -= 1;
        Ok(value)
    }

    fn primary(&mut self) -> Result<Number, ExprError> {
        let at = self.offset();
        match self.advance() {
            Some(Token::Num(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    Some(_) => Err(ExprError::UnexpectedToken(at)),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(_) => Err(ExprError::UnexpectedToken(at)),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}

fn apply(op: Token, lhs: Number, rhs: Number) -> Result<Number, ExprError> {
    if op == Token::Slash {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(ExprError::DivisionByZero);
        }
        return Number::checked_float(lhs.as_f64() / divisor);
    }

    match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => {
            let result = match op {
                Token::Plus => a.checked_add(b),
                Token::Minus => a.checked_sub(b),
                _ => a.checked_mul(b),
            };
            result.map(Number::Int).ok_or(ExprError::Overflow)
        }
        _ => {
            let (a, b) = (lhs.as_f64(), rhs.as_f64());
            let result = match op {
                Token::Plus => a + b,
                Token::Minus => a - b,
                _ => a * b,
            };
            Number::checked_float(result)
        }
    }
}

/// Evaluate an arithmetic expression.
pub fn evaluate(input: &str) -> Result<Number, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(ExprError::UnexpectedToken(parser.offset()));
    }
    Ok(value)
}
