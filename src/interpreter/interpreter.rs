//! Interpreter - Tree-walking evaluator
//!
//! One method per AST variant, each returning the accumulated result of its
//! subtree. `Err` aborts the whole evaluation; a reported application failure
//! is data inside `Ok`.

use crate::ast::types::{CallNode, Node, PipeNode, SeqNode};
use crate::commands::CommandRegistry;
use crate::interpreter::command_substitution::evaluate_substitution;
use crate::interpreter::errors::ShellError;
use crate::interpreter::glob_expansion::expand_arguments;
use crate::interpreter::redirections::{partition_redirects, read_input, write_output};
use crate::interpreter::types::ExecResult;
use crate::interpreter::word_expansion::{
    evaluate_double_quote, evaluate_single_quote, expand_word, resolve_app_name, ExpandedWord,
};

pub struct Interpreter<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> Interpreter<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }

    /// Evaluate a tree with no upstream input.
    pub fn evaluate(&self, node: &Node) -> Result<ExecResult, ShellError> {
        self.evaluate_with_input(node, None)
    }

    /// Evaluate a tree fed by `stdin`, the output of an upstream pipe stage.
    /// Sequences and pipes hand the input to their left side.
    pub fn evaluate_with_input(
        &self,
        node: &Node,
        stdin: Option<&[String]>,
    ) -> Result<ExecResult, ShellError> {
        match node {
            Node::SingleQuote(q) => Ok(evaluate_single_quote(q)),
            Node::DoubleQuote(q) => evaluate_double_quote(self, q),
            Node::Substitution(sub) => evaluate_substitution(self, sub),
            Node::RedirectIn(r) => read_input(r),
            Node::RedirectOut(r) => write_output(r, stdin.unwrap_or_default()),
            Node::Call(call) => self.evaluate_call(call, stdin),
            Node::Seq(seq) => self.evaluate_seq(seq, stdin),
            Node::Pipe(pipe) => self.evaluate_pipe(pipe, stdin),
        }
    }

    fn evaluate_call(
        &self,
        call: &CallNode,
        piped: Option<&[String]>,
    ) -> Result<ExecResult, ShellError> {
        let name = resolve_app_name(self, &call.app_name)?;
        let app = self.registry.resolve(&name)?;

        let (input, output) = partition_redirects(&call.redirects)?;
        let redirected = input.map(read_input).transpose()?;
        let stdin: &[String] = match (&redirected, piped) {
            (Some(result), _) => &result.stdout,
            (None, Some(piped)) => piped,
            (None, None) => &[],
        };

        let words = call
            .args
            .iter()
            .map(|word| expand_word(self, word))
            .collect::<Result<Vec<ExpandedWord>, ShellError>>()?;
        let invocations = expand_arguments(&words);

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        for args in &invocations {
            tracing::debug!(target: "eval", app = %app.name, unsafe_dispatch = app.is_unsafe, ?args, "invoking");
            let result = app.run(args, stdin)?;
            stdout.extend(result.stdout);
            stderr.extend(result.stderr);
        }

        if let Some(output) = output {
            write_output(output, &stdout)?;
            stdout.clear();
        }

        Ok(ExecResult::new(stdout, stderr))
    }

    /// Streams concatenate left then right; the exit code is the left one
    /// when nonzero, otherwise the right one.
    fn evaluate_seq(&self, seq: &SeqNode, stdin: Option<&[String]>) -> Result<ExecResult, ShellError> {
        let left = self.evaluate_with_input(&seq.left, stdin)?;
        let right = self.evaluate(&seq.right)?;

        let mut stdout = left.stdout;
        stdout.extend(right.stdout);
        let mut stderr = left.stderr;
        stderr.extend(right.stderr);

        Ok(ExecResult {
            stdout,
            stderr,
            exit_code: ExecResult::combine_exit(left.exit_code, right.exit_code),
        })
    }

    /// The right side consumes the left side's stdout; only its own stdout
    /// comes out of the pipe.
    fn evaluate_pipe(&self, pipe: &PipeNode, stdin: Option<&[String]>) -> Result<ExecResult, ShellError> {
        let left = self.evaluate_with_input(&pipe.left, stdin)?;
        let right = self.evaluate_with_input(&pipe.right, Some(&left.stdout))?;

        let mut stderr = left.stderr;
        stderr.extend(right.stderr);

        Ok(ExecResult {
            stdout: right.stdout,
            stderr,
            exit_code: ExecResult::combine_exit(left.exit_code, right.exit_code),
        })
    }
}
