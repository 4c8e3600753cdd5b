// Statement interpreter for the Sanskritam fallback engine

use crate::interpreter::evaluator::evaluate;
use crate::keywords::{KeywordRole, ScriptMode};
use crate::lexer::{Token, TokenKind};
use crate::runtime::environment::Environment;
use crate::trace::DebugTrace;

/// The statement interpreter: a state machine over a single linear index
/// into the token stream. No recursion, no call stack — the only forward
/// scanning is the depth-counted block skip for falsy conditionals.
///
/// Side effects (stdout, environment mutation, trace appends) are
/// observable only through the returned [`Execution`].
pub struct Interpreter<'t> {
    tokens: &'t [Token],
    pos: usize,
    env: Environment,
    stdout: Vec<String>,
    trace: DebugTrace,
    statements: usize,
}

/// Everything one interpreter pass produced.
#[derive(Debug)]
pub struct Execution {
    /// One entry per print statement, joined by newline for display
    pub stdout_lines: Vec<String>,
    pub trace: DebugTrace,
    pub env: Environment,
    pub statements: usize,
}

impl Execution {
    /// Deterministic, locally produced run summary. The richer prose
    /// explanation comes from the external processor, not this engine.
    pub fn summary(&self, script: ScriptMode) -> String {
        format!(
            "Fallback engine run ({} script): {} statement(s) executed, \
             {} variable(s) in scope, {} output line(s).",
            script,
            self.statements,
            self.env.len(),
            self.stdout_lines.len()
        )
    }
}

impl<'t> Interpreter<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Interpreter {
            tokens,
            pos: 0,
            env: Environment::new(),
            stdout: Vec::new(),
            trace: DebugTrace::new(),
            statements: 0,
        }
    }

    /// Run the token stream to exhaustion.
    pub fn run(mut self) -> Execution {
        while self.pos < self.tokens.len() {
            self.step();
        }

        Execution {
            stdout_lines: self.stdout,
            trace: self.trace,
            env: self.env,
            statements: self.statements,
        }
    }

    /// Dispatch one statement (or consume one token without effect).
    fn step(&mut self) {
        let token = &self.tokens[self.pos];

        match token.role() {
            Some(KeywordRole::Value) => self.declaration(),
            Some(KeywordRole::Print) => self.print(),
            Some(KeywordRole::If) => self.conditional(),
            Some(KeywordRole::End) => self.block_end(),

            // Recognized by the lexer and rendered by the code generator,
            // but the fallback engine has no execution case for these:
            // unhandled, token consumed without effect.
            Some(KeywordRole::While)
            | Some(KeywordRole::For)
            | Some(KeywordRole::Function)
            | Some(KeywordRole::Return)
            | Some(KeywordRole::Break)
            | Some(KeywordRole::Continue)
            | Some(KeywordRole::Try)
            | Some(KeywordRole::Catch)
            | Some(KeywordRole::Throw)
            | Some(KeywordRole::Class)
            | Some(KeywordRole::Import)
            | Some(KeywordRole::Then)
            | Some(KeywordRole::Else)
            | Some(KeywordRole::True)
            | Some(KeywordRole::False)
            | Some(KeywordRole::Null) => self.pos += 1,

            None => {
                if self.at_assignment() {
                    self.assignment();
                } else {
                    self.pos += 1;
                }
            }
        }
    }

    /// `VALUE ident = expr…` — bind and snapshot.
    fn declaration(&mut self) {
        let line = self.tokens[self.pos].line;

        let name = match self.tokens.get(self.pos + 1) {
            Some(t) if t.kind == TokenKind::Identifier => t.text.clone(),
            _ => {
                self.pos += 1;
                return;
            }
        };
        match self.tokens.get(self.pos + 2) {
            Some(t) if t.kind == TokenKind::Operator && t.text == "=" => {}
            _ => {
                self.pos += 1;
                return;
            }
        }

        let end = self.line_end(self.pos);
        let value = evaluate(&self.tokens[self.pos + 3..end], &self.env);
        self.env.set(name, value);
        self.snapshot(line);
        self.pos = end;
    }

    /// `PRINT expr…` — one stdout entry per print.
    fn print(&mut self) {
        let line = self.tokens[self.pos].line;
        let end = self.line_end(self.pos);

        let value = evaluate(&self.tokens[self.pos + 1..end], &self.env);
        self.stdout.push(value.to_string());
        self.snapshot(line);
        self.pos = end;
    }

    /// `IF cond THEN … END` — evaluate the condition span, snapshot at the
    /// IF line, then either fall into the block or skip it with a depth
    /// counter. Only IF nests for skip purposes.
    fn conditional(&mut self) {
        let line = self.tokens[self.pos].line;
        let end = self.line_end(self.pos);

        let then_index =
            (self.pos + 1..end).find(|&j| self.tokens[j].role() == Some(KeywordRole::Then));
        let condition_end = then_index.unwrap_or(end);

        let condition = evaluate(&self.tokens[self.pos + 1..condition_end], &self.env);
        self.snapshot(line);

        let resume = then_index.map(|j| j + 1).unwrap_or(end);
        if condition.is_truthy() {
            self.pos = resume;
        } else {
            self.pos = self.skip_block(resume);
        }
    }

    /// `END` — snapshot and advance. No stack pop happens because blocks
    /// were never pushed; nesting is realized through the skip-scan counter.
    fn block_end(&mut self) {
        let line = self.tokens[self.pos].line;
        self.snapshot(line);
        self.pos += 1;
    }

    /// `ident = expr…` — overwrite or implicitly create the binding.
    fn assignment(&mut self) {
        let line = self.tokens[self.pos].line;
        let name = self.tokens[self.pos].text.clone();
        let end = self.line_end(self.pos);

        let value = evaluate(&self.tokens[self.pos + 2..end], &self.env);
        self.env.set(name, value);
        self.snapshot(line);
        self.pos = end;
    }

    fn at_assignment(&self) -> bool {
        self.tokens[self.pos].kind == TokenKind::Identifier
            && matches!(
                self.tokens.get(self.pos + 1),
                Some(t) if t.kind == TokenKind::Operator && t.text == "="
            )
    }

    /// Scan forward from `from`, tracking nesting depth (starting at 1),
    /// until the matching END closes the block. Returns the index just
    /// past that END, or the stream length if the block never closes.
    fn skip_block(&self, from: usize) -> usize {
        let mut depth = 1usize;
        let mut j = from;

        while j < self.tokens.len() {
            match self.tokens[j].role() {
                Some(KeywordRole::If) => depth += 1,
                Some(KeywordRole::End) => {
                    depth -= 1;
                    if depth == 0 {
                        return j + 1;
                    }
                }
                _ => {}
            }
            j += 1;
        }

        self.tokens.len()
    }

    /// Index one past the last token on the same source line as `from`.
    fn line_end(&self, from: usize) -> usize {
        let line = self.tokens[from].line;
        let mut j = from + 1;
        while j < self.tokens.len() && self.tokens[j].line == line {
            j += 1;
        }
        j
    }

    fn snapshot(&mut self, line: usize) {
        self.trace.record(line, &self.env, &self.stdout);
        self.statements += 1;
    }
}
