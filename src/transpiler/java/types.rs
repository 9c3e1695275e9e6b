use crate::ast::Expr;
use crate::transpiler::java::{expressions, EmissionContext};
use crate::transpiler::TranslationError;

/// Emits a Go type expression as the closest Java type.
pub fn transpile_type(type_: &Expr, context: &mut EmissionContext, out: &mut String) -> Result<(), TranslationError> {
    match type_ {
        Expr::ArrayType { elt, .. } => {
            transpile_type(elt, context, out)?;
            out.push_str("[]");
        }
        Expr::MapType { key, value } => {
            out.push_str("Map<");
            transpile_type(key, context, out)?;
            out.push_str(", ");
            transpile_type(value, context, out)?;
            out.push('>');
        }
        Expr::ChanType { value, .. } => {
            out.push_str("BlockingQueue<");
            transpile_type(value, context, out)?;
            out.push('>');
        }
        // Anonymous types
        Expr::StructType(_) | Expr::InterfaceType(_) | Expr::FuncType(_) => out.push_str("Object"),
        Expr::Ellipsis(Some(elt)) => {
            transpile_type(elt, context, out)?;
            out.push_str("...");
        }
        Expr::Ellipsis(None) => out.push_str("..."),
        Expr::Star(x) => transpile_type(x, context, out)?,
        Expr::IndexList { position, .. } => {
            return Err(TranslationError::unsupported("generic type", position.clone()))
        }
        _ => expressions::transpile_expr(type_, context, out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ast::{ChanDir, Expr, FieldList};
    use crate::transpiler::java::types::transpile_type;
    use crate::transpiler::java::EmissionContext;
    use crate::transpiler::TranslationError;

    fn emit(type_: &Expr) -> Result<String, TranslationError> {
        let mut out = String::new();
        transpile_type(type_, &mut EmissionContext::new(), &mut out)?;
        Ok(out)
    }

    #[test]
    fn containers_map_to_java_collections() -> Result<(), TranslationError> {
        let slice = Expr::ArrayType { len: None, elt: Box::new(Expr::ident("float64")) };
        assert_eq!(emit(&slice)?, "double[]");

        let map = Expr::MapType { key: Box::new(Expr::ident("string")), value: Box::new(slice) };
        assert_eq!(emit(&map)?, "Map<String, double[]>");

        let channel = Expr::ChanType { dir: ChanDir::Recv, value: Box::new(Expr::ident("int")) };
        assert_eq!(emit(&channel)?, "BlockingQueue<int>");
        Ok(())
    }

    #[test]
    fn anonymous_types_become_object() -> Result<(), TranslationError> {
        assert_eq!(emit(&Expr::InterfaceType(FieldList::default()))?, "Object");
        assert_eq!(emit(&Expr::StructType(FieldList::default()))?, "Object");
        Ok(())
    }

    #[test]
    fn variadic_and_pointer_types() -> Result<(), TranslationError> {
        assert_eq!(emit(&Expr::Ellipsis(Some(Box::new(Expr::ident("string")))))?, "String...");
        assert_eq!(emit(&Expr::Star(Box::new(Expr::ident("Circle"))))?, "Circle");
        Ok(())
    }
}
