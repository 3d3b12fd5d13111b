//! Abstract Syntax Tree (AST) Types
//!
//! Architecture:
//!   Input → Parser → AST → Interpreter → Output
//!
//! Substitution nodes keep their raw text, so the interpreter calls back
//! into the parser when it reaches one.

pub mod types;
