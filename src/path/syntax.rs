use crate::errors::{Error, Result};

pub const COMMAND_LETTERS: &str = "MmLlHhVvZzCcSsQqTtAa";

pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }
}

impl PathSyntax for SvgPathSyntax {
    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    fn rest(&self) -> String {
        self.data[self.index.min(self.data.len())..].iter().collect()
    }
}

pub trait PathSyntax {
    fn current(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;
    /// Unconsumed input, for error reporting
    fn rest(&self) -> String;

    fn at_command(&self) -> bool {
        self.current().is_some_and(|c| COMMAND_LETTERS.contains(c))
    }

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(Error::Parse("ran out of data".to_string()))
        } else {
            Ok(())
        }
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while self.current().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    /// Classify text which is neither a number nor a command letter.
    fn unexpected(&self) -> Error {
        let rest = self.rest();
        let lower = rest.to_ascii_lowercase();
        let lower = lower.trim_start_matches(['+', '-']);
        if lower.starts_with("nan") || lower.starts_with("inf") {
            let word: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphabetic() || *c == '+' || *c == '-')
                .collect();
            Error::NonFiniteParameter(word)
        } else {
            match self.current() {
                Some(c) if c.is_alphabetic() => Error::UnknownCommand(c),
                Some(c) => Error::Parse(format!("unexpected character '{c}'")),
                None => Error::Parse("ran out of data".to_string()),
            }
        }
    }

    fn read_flag(&mut self) -> Result<bool> {
        self.check_not_end()?;
        // per the grammar for `a`/`A`, could have '00' etc for
        // the two adjacent flags...
        let res = match self.current() {
            Some('0') => false,
            Some('1') => true,
            Some(c) if c.is_ascii_digit() => {
                return Err(Error::Parse(format!("invalid arc flag '{c}'")));
            }
            _ => return Err(self.unexpected()),
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    fn read_number(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        };
        if !self
            .current()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(match self.unexpected() {
                Error::NonFiniteParameter(word) if mult < 0. => {
                    Error::NonFiniteParameter(format!("-{word}"))
                }
                err => err,
            });
        }
        Ok(mult * self.read_non_negative()?)
    }

    fn read_non_negative(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.ends_with(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        self.skip_wsp_comma();
        Ok(s.parse()?)
    }

    fn read_command(&mut self) -> Result<char> {
        if self.at_command() {
            let command = self.current().unwrap_or_default();
            self.advance();
            self.skip_wsp_comma();
            Ok(command)
        } else if self
            .current()
            .is_some_and(|c| c.is_ascii_digit() || "+-.".contains(c))
        {
            Err(Error::Parse(format!(
                "expected a command letter before '{}'",
                self.rest().trim_end()
            )))
        } else {
            Err(self.unexpected())
        }
    }
}
