// C-flavored source rendering of a Sanskritam token stream

use crate::keywords::KeywordRole;
use crate::lexer::{Token, TokenKind};

const INDENT: &str = "    ";

/// Render the token stream as an analogous low-level program.
///
/// This is a second, independent pass: it never consults the environment or
/// the debug trace and does not require the program to be executable. The
/// output is a best-effort cosmetic rendering — close enough to C to read,
/// not guaranteed to satisfy a real toolchain.
pub fn generate(tokens: &[Token]) -> String {
    CodeGenerator::new(tokens).emit()
}

/// Indentation/nesting-tracking emitter. Everything lives inside an
/// implicit `main` wrapper, so the indent level starts at 1.
struct CodeGenerator<'t> {
    tokens: &'t [Token],
    pos: usize,
    indent: usize,
    out: String,
}

impl<'t> CodeGenerator<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        CodeGenerator {
            tokens,
            pos: 0,
            indent: 1,
            out: String::from("int main() {\n"),
        }
    }

    fn emit(mut self) -> String {
        while self.pos < self.tokens.len() {
            self.emit_line();
        }

        // Close any still-open nesting, then the implicit wrapper
        while self.indent > 1 {
            self.indent -= 1;
            self.push_indent();
            self.out.push_str("}\n");
        }
        self.out.push_str(INDENT);
        self.out.push_str("return 0;\n}\n");
        self.out
    }

    /// Emit one source line worth of tokens.
    fn emit_line(&mut self) {
        let start = self.pos;
        let end = self.line_end(start);
        self.pos = end;
        let tokens: &'t [Token] = self.tokens;
        let line = &tokens[start..end];

        match line[0].role() {
            Some(KeywordRole::Value) => {
                self.push_indent();
                self.out.push_str("auto ");
                self.push_span(&line[1..]);
                self.terminate();
            }

            Some(KeywordRole::Print) => {
                // Call-style wrapper collecting the rest of the line
                self.push_indent();
                self.out.push_str("print(");
                self.push_span(&line[1..]);
                self.out.push_str(");\n");
            }

            Some(role @ (KeywordRole::If | KeywordRole::While | KeywordRole::For)) => {
                self.conditional_opener(role, line);
            }

            Some(KeywordRole::Then) => {
                // Stray THEN becomes a bare opening brace
                self.push_indent();
                self.out.push_str("{\n");
                self.indent += 1;
                if line.len() > 1 {
                    self.push_indent();
                    self.push_span(&line[1..]);
                    self.terminate();
                }
            }

            Some(KeywordRole::End) => {
                if self.indent > 1 {
                    self.indent -= 1;
                }
                self.push_indent();
                self.out.push_str("}\n");
            }

            Some(KeywordRole::Else) => {
                let saved = self.indent;
                if self.indent > 1 {
                    self.indent -= 1;
                }
                self.push_indent();
                self.out.push_str("} else {\n");
                self.indent = saved;
            }

            Some(KeywordRole::Function) => {
                // Inline-callable opener named by the following identifier
                self.push_indent();
                let name = line
                    .get(1)
                    .filter(|t| t.kind == TokenKind::Identifier)
                    .map(|t| t.text.as_str())
                    .unwrap_or("anonymous");
                self.out.push_str("auto ");
                self.out.push_str(name);
                self.out.push_str(" = [&]() {\n");
                self.indent += 1;
            }

            Some(KeywordRole::Return) => {
                self.push_indent();
                self.out.push_str("return");
                if line.len() > 1 {
                    self.out.push(' ');
                    self.push_span(&line[1..]);
                }
                self.terminate();
            }

            Some(KeywordRole::Break) => {
                self.push_indent();
                self.out.push_str("break");
                self.terminate();
            }

            Some(KeywordRole::Continue) => {
                self.push_indent();
                self.out.push_str("continue");
                self.terminate();
            }

            // No dedicated template: expression statements, assignments,
            // and the keywords this renderer carries through verbatim
            _ => {
                self.push_indent();
                self.push_span(line);
                self.terminate();
            }
        }
    }

    /// `if (…) {` / `while (…) {` / `for (…) {` — tokens up to THEN become
    /// the condition, THEN itself becomes the opening brace.
    fn conditional_opener(&mut self, role: KeywordRole, line: &[Token]) {
        self.push_indent();
        self.out.push_str(match role {
            KeywordRole::While => "while (",
            KeywordRole::For => "for (",
            _ => "if (",
        });

        let then_at = line.iter().position(|t| t.role() == Some(KeywordRole::Then));
        let condition_end = then_at.unwrap_or(line.len());
        self.push_span(&line[1..condition_end]);
        self.out.push_str(") {\n");
        self.indent += 1;

        // Anything after THEN on the same line becomes the first body line
        if let Some(at) = then_at {
            if at + 1 < line.len() {
                self.push_indent();
                self.push_span(&line[at + 1..]);
                self.terminate();
            }
        }
    }

    /// Append the tokens of a span with simple spacing: no space after `(`
    /// or before `)` and `,`.
    fn push_span(&mut self, tokens: &[Token]) {
        for (i, token) in tokens.iter().enumerate() {
            let text = render_token(token);
            if i > 0 && text != "," && text != ")" && !self.out.ends_with('(') {
                self.out.push(' ');
            }
            self.out.push_str(&text);
        }
    }

    /// Statement terminator: a semicolon unless the buffer already ends a
    /// statement or a brace.
    fn terminate(&mut self) {
        match self.out.chars().last() {
            Some(';') | Some('{') | Some('}') => {}
            _ => self.out.push(';'),
        }
        self.out.push('\n');
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
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
}

/// Fixed spellings for literal keywords; numbers verbatim, strings
/// re-quoted, everything else as written.
fn render_token(token: &Token) -> String {
    if token.kind == TokenKind::String {
        return format!("\"{}\"", token.text);
    }
    match token.role() {
        Some(KeywordRole::True) => "true".to_string(),
        Some(KeywordRole::False) => "false".to_string(),
        Some(KeywordRole::Null) => "NULL".to_string(),
        _ => token.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn gen(source: &str) -> String {
        let (tokens, errors) = Lexer::new(source).tokenize();
        assert!(errors.is_empty(), "lex errors in test source: {:?}", errors);
        generate(&tokens)
    }

    #[test]
    fn test_declaration_and_print() {
        let generated = gen("mulyam x = 10\nvadatu x");
        assert_eq!(
            generated,
            "int main() {\n    auto x = 10;\n    print(x);\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_conditional_block_indents() {
        let generated = gen("yadi 1 < 2 tarhi\nvadatu \"yes\"\nsamaptam");
        assert_eq!(
            generated,
            "int main() {\n    if (1 < 2) {\n        print(\"yes\");\n    }\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_loops_render_even_though_never_executed() {
        let generated = gen("yavat x < 10 tarhi\nx = x + 1\nsamaptam");
        assert!(generated.contains("while (x < 10) {"));
        assert!(generated.contains("        x = x + 1;"));
    }

    #[test]
    fn test_function_opener_uses_following_identifier() {
        let generated = gen("karyam namaskara\nvadatu \"om\"\nsamaptam");
        assert!(generated.contains("auto namaskara = [&]() {"));
        assert!(generated.contains("        print(\"om\");"));
    }

    #[test]
    fn test_literal_keywords_get_fixed_spellings() {
        let generated = gen("mulyam a = satyam\nmulyam b = asatyam\nmulyam c = shunyam");
        assert!(generated.contains("auto a = true;"));
        assert!(generated.contains("auto b = false;"));
        assert!(generated.contains("auto c = NULL;"));
    }

    #[test]
    fn test_exhaustion_closes_open_blocks() {
        let generated = gen("yadi satyam tarhi\nvadatu 1");
        assert_eq!(
            generated,
            "int main() {\n    if (true) {\n        print(1);\n    }\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_devanagari_source_renders_identically() {
        assert_eq!(gen("मूल्यम् x = १०\nवदतु x"), gen("mulyam x = 10\nvadatu x"));
    }

    #[test]
    fn test_strings_are_requoted() {
        let generated = gen("vadatu \"hello\"");
        assert!(generated.contains("print(\"hello\");"));
    }

    #[test]
    fn test_control_flow_statements() {
        let generated = gen("phalam x\nviram\nagre");
        assert!(generated.contains("    return x;\n"));
        assert!(generated.contains("    break;\n"));
        assert!(generated.contains("    continue;\n"));
    }

    #[test]
    fn test_empty_stream_is_just_the_wrapper() {
        let generated = gen("// only a comment\n");
        assert_eq!(generated, "int main() {\n    return 0;\n}\n");
    }
}
