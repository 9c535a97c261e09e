//! XPath step lexer
//!
//! Splits a location path into steps on `/` and `//`. Separators inside
//! predicates or string literals are part of the step. Every byte of the
//! input lands in exactly one separator or step, so joining the steps
//! back reproduces the input.

/// One location step and the separator run in front of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    /// `""`, `/`, `//` (or any longer slash run, kept verbatim)
    pub separator: &'a str,
    pub text: &'a str,
}

/// Node test of a step with the axis stripped, plus where predicates begin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTest<'a> {
    pub name: &'a str,
    /// Byte offset of the first `[` outside quotes, or the step length
    pub predicate_start: usize,
}

/// Step lexer
pub struct StepLexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> StepLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        StepLexer { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    fn read_separator(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek() == Some('/') {
            self.advance(1);
        }
        &self.input[start..self.pos]
    }

    /// Read step text up to the next top-level `/`
    fn read_step(&mut self) -> &'a str {
        let start = self.pos;
        let mut depth = 0usize;
        let mut quote: Option<char> = None;

        while let Some(c) = self.peek() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '/' if depth == 0 => break,
                    '"' | '\'' => quote = Some(c),
                    '[' => depth += 1,
                    ']' => depth = depth.saturating_sub(1),
                    _ => {}
                },
            }
            self.advance(c.len_utf8());
        }
        &self.input[start..self.pos]
    }

    /// Next step, or `None` at end of input
    pub fn next_step(&mut self) -> Option<Step<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let separator = self.read_separator();
        let text = self.read_step();
        Some(Step { separator, text })
    }

    /// Split the entire input
    pub fn tokenize(&mut self) -> Vec<Step<'a>> {
        let mut steps = Vec::new();
        while let Some(step) = self.next_step() {
            steps.push(step);
        }
        steps
    }
}

/// Split an XPath into steps with their separators
pub fn split_steps(xpath: &str) -> Vec<Step<'_>> {
    StepLexer::new(xpath).tokenize()
}

/// Separate a step's node test from its predicate suffix
///
/// `descendant::div[@x]` yields name `div` and the offset of `[`.
pub fn parse_node_test(step: &str) -> NodeTest<'_> {
    let mut quote: Option<char> = None;
    let mut predicate_start = step.len();

    for (idx, c) in step.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '[' => {
                predicate_start = idx;
                break;
            }
            None => {}
        }
    }

    let test = &step[..predicate_start];
    let name = match test.split_once("::") {
        Some((_, local)) => local,
        None => test,
    };
    NodeTest {
        name: name.trim(),
        predicate_start,
    }
}
