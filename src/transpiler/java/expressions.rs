use log::trace;

use crate::ast::{Expr, UnaryOp};
use crate::transpiler::java::{functions, imperative, types, EmissionContext};
use crate::transpiler::TranslationError;

pub fn transpile_expr(expr: &Expr, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    trace!("Emitting {}", <&'static str>::from(expr));

    match expr {
        Expr::Ident(name) => out.push_str(context.symbols.translate(name)),
        Expr::BasicLit { value, .. } => out.push_str(value),
        Expr::CompositeLit { type_, elements } => {
            if let Some(type_) = type_ {
                out.push_str("new ");
                types::transpile_type(type_, context, out)?;
            }
            out.push('{');
            transpile_expr_list(elements, context, out)?;
            out.push('}');
        }
        Expr::FuncLit { type_, body } => {
            out.push('(');
            functions::transpile_parameters(&type_.params, context, out)?;
            out.push_str(") -> ");
            imperative::transpile_block(body, context, out)?;
        }
        Expr::Paren(x) => {
            out.push('(');
            transpile_expr(x, context, out)?;
            out.push(')');
        }
        Expr::Selector { x, sel } => {
            transpile_expr(x, context, out)?;
            out.push('.');
            out.push_str(context.symbols.translate(sel));
        }
        Expr::Index { x, index } => {
            transpile_expr(x, context, out)?;
            out.push('[');
            transpile_expr(index, context, out)?;
            out.push(']');
        }
        Expr::IndexList { position, .. } => {
            return Err(TranslationError::unsupported("generic instantiation", position.clone()))
        }
        Expr::Slice { x, low, high, max } => {
            transpile_expr(x, context, out)?;
            out.push('[');
            if let Some(low) = low {
                transpile_expr(low, context, out)?;
            }
            out.push(':');
            if let Some(high) = high {
                transpile_expr(high, context, out)?;
            }
            if let Some(max) = max {
                out.push(':');
                transpile_expr(max, context, out)?;
            }
            out.push(']');
        }
        Expr::TypeAssert { x, type_: Some(type_) } => {
            out.push_str("((");
            types::transpile_type(type_, context, out)?;
            out.push_str(") ");
            transpile_expr(x, context, out)?;
            out.push(')');
        }
        Expr::TypeAssert { x, type_: None } => {
            transpile_expr(x, context, out)?;
            out.push_str(".(type)");
        }
        // A trailing `...` spread has no Java counterpart; varargs accept the array as is.
        Expr::Call { fun, args, .. } => {
            transpile_expr(fun, context, out)?;
            out.push('(');
            transpile_expr_list(args, context, out)?;
            out.push(')');
        }
        Expr::Star(x) => transpile_expr(x, context, out)?,
        Expr::Unary { op: UnaryOp::AddressOf, x } => transpile_expr(x, context, out)?,
        Expr::Unary { op: UnaryOp::Complement, x } => {
            out.push('~');
            transpile_expr(x, context, out)?;
        }
        Expr::Unary { op, x } => {
            out.push_str(&op.to_string());
            transpile_expr(x, context, out)?;
        }
        Expr::Binary { x, op, y } => {
            transpile_expr(x, context, out)?;
            out.push_str(&format!(" {} ", op));
            transpile_expr(y, context, out)?;
        }
        Expr::KeyValue { key, value } => {
            transpile_expr(key, context, out)?;
            out.push_str(": ");
            transpile_expr(value, context, out)?;
        }
        Expr::Ellipsis(_)
        | Expr::ArrayType { .. }
        | Expr::StructType(_)
        | Expr::FuncType(_)
        | Expr::InterfaceType(_)
        | Expr::MapType { .. }
        | Expr::ChanType { .. } => types::transpile_type(expr, context, out)?,
    }

    Ok(())
}

pub fn transpile_expr_list(exprs: &[Expr], context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        transpile_expr(expr, context, out)?;
    }

    Ok(())
}
