use log::{trace, warn};

use crate::ast::{Decl, DeclToken, File, GenDecl, Spec};
use crate::transpiler::java::keywords::{ENTRY_POINT, SYMBOLS};
use crate::transpiler::{namespaces, TranslationError};

pub mod keywords;
pub mod class;
pub mod functions;
pub mod imperative;
pub mod expressions;
pub mod types;

/// Whether a `class` opened by a type declaration is still waiting for its closing brace.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ClassBlock {
    Closed,
    OpenFor(String),
}

pub struct EmissionContext {
    pub symbols: namespaces::Level,
    pub class_block: ClassBlock,
}

impl EmissionContext {
    pub fn new() -> EmissionContext {
        EmissionContext {
            symbols: namespaces::Level::new(&SYMBOLS),
            class_block: ClassBlock::Closed,
        }
    }

    pub fn open_class(&mut self, name: &str) {
        if let ClassBlock::OpenFor(open) = &self.class_block {
            // The open block is never closed explicitly; the new class ends up nested inside it.
            warn!("Class {} is declared while class {} is still open", name, open);
        }
        self.class_block = ClassBlock::OpenFor(name.to_string());
    }

    /// Closes the open class unless it belongs to `receiver_type`.
    pub fn close_class_unless(&mut self, receiver_type: &str, out: &mut String) {
        if let ClassBlock::OpenFor(open) = &self.class_block {
            if open != receiver_type {
                trace!("Closing class {} before a method of {}", open, receiver_type);
                out.push_str("}\n");
                self.class_block = ClassBlock::Closed;
            }
        }
    }
}

pub fn transpile_file(file: &File, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    let is_program = file.name == ENTRY_POINT;

    match is_program {
        true => out.push_str(&format!("{} {}{{\n", keywords::CLASS_KEYWORD, ENTRY_POINT)),
        false => out.push_str(&format!("package {};\n", context.symbols.translate(&file.name))),
    }

    let decls = file.decls.iter()
        .filter(|decl| !matches!(decl, Decl::Gen(GenDecl { token: DeclToken::Import, .. })));
    for (idx, decl) in decls.enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        transpile_decl(decl, context, out)?;
    }

    if is_program {
        out.push_str("\n}");
    }
    else if let ClassBlock::OpenFor(_) = context.class_block {
        out.push('}');
        context.class_block = ClassBlock::Closed;
    }

    Ok(())
}

pub fn transpile_decl(decl: &Decl, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    trace!("Emitting {}", <&'static str>::from(decl));

    match decl {
        Decl::Func(function) => functions::transpile_function(function, context, out),
        Decl::Gen(decl) => {
            transpile_gen_decl(decl, context, out)?;
            if matches!(decl.token, DeclToken::Const | DeclToken::Var) {
                out.push_str(";\n");
            }
            Ok(())
        }
    }
}

pub fn transpile_gen_decl(decl: &GenDecl, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for (idx, spec) in decl.specs.iter().enumerate() {
        match spec {
            Spec::Import(_) => {}
            Spec::Type(spec) => class::transpile_type_spec(spec, context, out)?,
            Spec::Value(spec) => {
                if idx > 0 {
                    out.push_str("; ");
                }
                imperative::transpile_value_spec(spec, context, out)?;
            }
        }
    }

    Ok(())
}
