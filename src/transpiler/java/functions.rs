use log::debug;

use crate::ast::{Expr, FieldList, FuncDecl, FuncType};
use crate::transpiler::java::keywords::{ENTRY_POINT, MAIN_SIGNATURE, SELF_ALIAS};
use crate::transpiler::java::{imperative, types, EmissionContext};
use crate::transpiler::TranslationError;

pub fn transpile_function(function: &FuncDecl, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    if let Some(type_params) = &function.type_.type_params {
        return Err(TranslationError::unsupported("type parameters", type_params.position.clone()));
    }

    if let Some(receiver) = &function.recv {
        let receiver_type = receiver.first_type()
            .ok_or_else(|| TranslationError::Malformed { msg: format!("method {} has an empty receiver", function.name) })?;
        reject_generic_receiver(receiver_type)?;
        let type_name = receiver_type.base_type_name()
            .ok_or_else(|| TranslationError::Malformed { msg: format!("receiver of {} is not a named type", function.name) })?;

        context.close_class_unless(type_name, out);
        if let Some(name) = function.receiver_name() {
            debug!("Binding receiver {} of {}.{}", name, type_name, function.name);
            context.symbols.bind(name, SELF_ALIAS);
        }
    }

    if function.name == ENTRY_POINT {
        out.push_str(MAIN_SIGNATURE);
    }
    else {
        out.push_str(visibility(&function.name));
        out.push(' ');
        transpile_return_type(&function.type_, context, out)?;
        out.push(' ');
        out.push_str(context.symbols.translate(&function.name));
        out.push('(');
        transpile_parameters(&function.type_.params, context, out)?;
        out.push(')');
    }

    out.push_str(" {\n");
    if let Some(body) = &function.body {
        imperative::transpile_statements(&body.statements, context, out)?;
    }
    out.push_str("\n}");

    Ok(())
}

/// Exported Go names start with an upper case letter.
pub fn visibility(name: &str) -> &'static str {
    match name.chars().next().is_some_and(char::is_uppercase) {
        true => "public",
        false => "private",
    }
}

/// Java methods return one value: the first Go result, or `void`.
pub fn transpile_return_type(signature: &FuncType, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    match signature.results.as_ref().and_then(FieldList::first_type) {
        Some(type_) => types::transpile_type(type_, context, out),
        None => {
            out.push_str("void");
            Ok(())
        }
    }
}

/// `a, b int` becomes `int a, int b`.
pub fn transpile_parameters(params: &FieldList, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    let mut first = true;
    for param in params.list.iter() {
        let mut type_ = String::new();
        types::transpile_type(&param.type_, context, &mut type_)?;

        if param.names.is_empty() {
            if !first { out.push_str(", "); }
            out.push_str(&type_);
            first = false;
        }
        for name in param.names.iter() {
            if !first { out.push_str(", "); }
            out.push_str(&type_);
            out.push(' ');
            out.push_str(context.symbols.translate(name));
            first = false;
        }
    }

    Ok(())
}

fn reject_generic_receiver(type_: &Expr) -> Result<(), TranslationError> {
    match type_ {
        Expr::Star(x) | Expr::Paren(x) => reject_generic_receiver(x),
        Expr::IndexList { position, .. } => Err(TranslationError::unsupported("generic receiver", position.clone())),
        _ => Ok(()),
    }
}
