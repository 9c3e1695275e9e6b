use itertools::Itertools;
use log::debug;

use crate::ast::{Expr, FieldList, TypeSpec};
use crate::transpiler::java::keywords::CLASS_KEYWORD;
use crate::transpiler::java::{functions, types, EmissionContext};
use crate::transpiler::TranslationError;

/// Opens a class for the declared type. The block stays open so that methods can follow;
/// it is closed by the next method of another type or at the end of the unit.
pub fn transpile_type_spec(spec: &TypeSpec, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    if let Some(type_params) = &spec.type_params {
        return Err(TranslationError::unsupported("type parameters", type_params.position.clone()));
    }

    if spec.is_alias {
        return transpile_alias(spec, context);
    }

    context.open_class(&spec.name);
    out.push_str(CLASS_KEYWORD);
    out.push(' ');
    out.push_str(context.symbols.translate(&spec.name));
    out.push_str(" {\n");

    match &spec.type_ {
        Expr::StructType(fields) => transpile_fields(fields, context, out),
        Expr::InterfaceType(methods) => transpile_interface_methods(methods, context, out),
        _ => Ok(()),
    }
}

/// Java has no type aliases; later uses of the alias are replaced by the aliased type.
fn transpile_alias(spec: &TypeSpec, context: &mut EmissionContext) -> Result<(), TranslationError> {
    let mut target = String::new();
    types::transpile_type(&spec.type_, context, &mut target)?;

    debug!("Aliasing {} to {}", spec.name, target);
    context.symbols.bind(&spec.name, &target);
    Ok(())
}

pub fn transpile_fields(fields: &FieldList, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for field in fields.list.iter() {
        types::transpile_type(&field.type_, context, out)?;
        if !field.names.is_empty() {
            out.push(' ');
            out.push_str(&field.names.iter().map(|name| context.symbols.translate(name)).join(", "));
        }
        out.push_str(";\n");
    }

    Ok(())
}

fn transpile_interface_methods(methods: &FieldList, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for method in methods.list.iter() {
        let Expr::FuncType(signature) = &method.type_ else {
            // Embedded interface
            types::transpile_type(&method.type_, context, out)?;
            out.push_str(";\n");
            continue
        };

        for name in method.names.iter() {
            out.push_str(functions::visibility(name));
            out.push_str(" abstract ");
            functions::transpile_return_type(signature, context, out)?;
            out.push(' ');
            out.push_str(context.symbols.translate(name));
            out.push('(');
            functions::transpile_parameters(&signature.params, context, out)?;
            out.push_str(");\n");
        }
    }

    Ok(())
}
