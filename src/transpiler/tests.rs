#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use crate::error::{error_titles, RResult};
    use crate::{parser, transpiler};
    use crate::transpiler::TranslationError;

    fn transpile_fixture(name: &str) -> RResult<String> {
        let content = fs::read_to_string(format!("test-code/{}", name)).unwrap();
        let file = parser::parse_file(&content)?;
        transpiler::transpile(&file)
    }

    #[test]
    fn hello_world() -> RResult<()> {
        let java = transpile_fixture("hello_world.go")?;
        assert_eq!(java, "class main{\npublic static void main(String[] args) {\nSystem.out.println(\"Hello World!\");\n\n}\n}");
        Ok(())
    }

    #[test]
    fn empty_main() -> RResult<()> {
        let file = parser::parse_file("package main\n\nfunc main() {}\n")?;
        let java = transpiler::transpile(&file)?;
        assert_eq!(java, "class main{\npublic static void main(String[] args) {\n\n}\n}");
        Ok(())
    }

    /// Methods stay inside the class of their receiver, which is closed at the end of the file.
    #[test]
    fn shapes() -> RResult<()> {
        let java = transpile_fixture("shapes.go")?;
        assert!(java.starts_with("package shapes;\nclass Circle {\ndouble radius;"));
        assert_eq!(java, "package shapes;\nclass Circle {\ndouble radius;\n\
\npublic double Area() {\nreturn math.Pi * this.radius * this.radius;\n\n}\
\npublic void Scale(double factor) {\nthis.radius *= factor;\n\n}}");
        Ok(())
    }

    #[test]
    fn calc() -> RResult<()> {
        let java = transpile_fixture("calc.go")?;
        assert!(java.contains("public int Add(int a, int b) {"));
        assert!(java.contains("return a + b"));
        assert_eq!(java, "package calc;\npublic int Add(int a, int b) {\nreturn a + b;\n\n}\
\nprivate int sum(int[] xs) {\ntotal = 0;\nfor _, x := range xs {\ntotal += x;\n\n};\nreturn total;\n\n}");
        Ok(())
    }

    #[test]
    fn grouped_parameters_are_expanded() -> RResult<()> {
        let file = parser::parse_file("package calc\n\nfunc Add(a, b int, rest ...int) int {\n\treturn a\n}\n")?;
        let java = transpiler::transpile(&file)?;
        assert!(java.contains("public int Add(int a, int b, int... rest) {"));
        Ok(())
    }

    /// A method of another type closes the open class before it starts.
    #[test]
    fn receivers() -> RResult<()> {
        let java = transpile_fixture("receivers.go")?;
        assert_eq!(java, "package zoo;\nclass Dog {\nString name;\n\
\npublic String Speak() {\nreturn this.name;\n\n}\
\nclass Cat {\nint lives;\n\
\npublic String Speak() {\nreturn \"meow\";\n\n}\
\n}\npublic void Fetch() {\nthis.name = \"fetched\";\n\n}");
        Ok(())
    }

    /// A second type declaration does not close the first class; the second one ends up nested.
    #[test]
    fn consecutive_types_nest() -> RResult<()> {
        let java = transpile_fixture("consecutive_types.go")?;
        assert_eq!(java, "package nested;\nclass A {\n\nclass B {\n}");
        Ok(())
    }

    #[test]
    fn interfaces() -> RResult<()> {
        let java = transpile_fixture("interfaces.go")?;
        assert_eq!(java, "package geometry;\nclass Shape {\npublic abstract double Area();\nprivate abstract String name();\n}");
        // The package header and one per method.
        assert_eq!(java.matches(";\n").count(), 3);
        Ok(())
    }

    /// Library units terminate the package header, top-level values, fields and statements alike.
    #[test]
    fn library_terminators() -> RResult<()> {
        let java = transpile_fixture("library.go")?;
        assert_eq!(java, "package p;\nlimit = 10;\n\nclass Point {\nint x;\nint y;\n\
\npublic int Sum() {\ntotal = this.x;\nreturn total + this.y;\n\n}}");

        // Header, value, two fields, two statements.
        assert_eq!(java.matches(";\n").count(), 6);
        Ok(())
    }

    #[test]
    fn grouped_values_list_each_name_once() -> RResult<()> {
        let file = parser::parse_file("package p\n\nconst a, b = 1, 2\n\nvar c, d int\n")?;
        let java = transpiler::transpile(&file)?;
        assert_eq!(java, "package p;\na, b = 1, 2;\n\nint c, d;\n");
        Ok(())
    }

    #[test]
    fn type_switches_list_every_type() -> RResult<()> {
        let java = transpile_fixture("type_switch.go")?;
        assert!(java.contains("private void describe(Object x) {\n"));
        assert!(java.contains("switch (v = x.(type)) {\ncase int, String:\nuse(v);\n\n}"));
        Ok(())
    }

    #[test]
    fn aliases_replace_their_name() -> RResult<()> {
        let file = parser::parse_file("package temp\n\ntype Celsius = float64\n\nfunc Freeze() Celsius {\n\treturn 0\n}\n")?;
        let java = transpiler::transpile(&file)?;
        assert_eq!(java, "package temp;\n\npublic double Freeze() {\nreturn 0;\n\n}");
        Ok(())
    }

    #[test]
    fn unsupported_errors_point_at_their_construct() {
        let error = TranslationError::unsupported("type parameters", 20..27).to_runtime_error();
        assert_eq!(error.title, "Unsupported construct: type parameters");
        assert_eq!(error.range, Some(20..27));
    }

    #[test]
    fn control_flow() -> RResult<()> {
        let java = transpile_fixture("control_flow.go")?;

        assert!(java.contains("values = new int[]{1, 2, 3};\n"));
        assert!(java.contains("for (i = 0; i < len(values); i++) {\n"));
        assert!(java.contains("if (values[i] % 2 == 0) {\nSystem.out.println(\"even\");\n\n} else if (values[i] > 2) {\ncontinue;\n\n} else {\nSystem.out.println(\"odd\");\n\n}"));
        assert!(java.contains("switch (len(values)) {\ncase 1, 2:\nSystem.out.println(\"short\");\ndefault:\nSystem.out.println(\"long\");\n\n}"));
        assert!(java.contains("double total = 0;\n"));
        assert!(java.contains("total++;\n"));

        // One terminator per statement.
        assert_eq!(java.matches(";\n").count(), 11);
        Ok(())
    }

    #[test]
    fn translation_is_deterministic() -> RResult<()> {
        assert_eq!(transpile_fixture("receivers.go")?, transpile_fixture("receivers.go")?);
        Ok(())
    }

    #[test]
    fn receiver_aliases_do_not_leak_between_files() -> RResult<()> {
        let first = parser::parse_file("package a\n\ntype T struct {\n}\n\nfunc (d T) M() {\n}\n")?;
        let second = parser::parse_file("package b\n\nfunc f(d int) int {\n\treturn d\n}\n")?;

        transpiler::transpile(&first)?;
        let java = transpiler::transpile(&second)?;
        assert!(java.contains("return d;"));
        Ok(())
    }

    #[test]
    fn generic_functions_are_rejected() {
        let content = fs::read_to_string("test-code/generics.go").unwrap();
        let file = parser::parse_file(&content).unwrap();
        let errors = transpiler::transpile(&file).unwrap_err();

        assert_eq!(error_titles(&errors), vec!["Unsupported construct: type parameters"]);
        let range = errors[0].range.clone().unwrap();
        assert_eq!(&content[range], "[T any]");
    }

    #[test]
    fn generic_types_are_rejected() {
        let file = parser::parse_file("package box\n\ntype Box[T any] struct {\n\tvalue T\n}\n").unwrap();
        let errors = transpiler::transpile(&file).unwrap_err();
        assert_eq!(error_titles(&errors), vec!["Unsupported construct: type parameters"]);
    }

    #[test]
    fn generic_instantiations_are_rejected() {
        let errors = transpile_fixture("generic_call.go").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].title.starts_with("Unsupported construct"));
        assert!(errors[0].range.is_some());
    }

    #[test]
    fn packages_are_translated_file_by_file() -> RResult<()> {
        let package = parser::parse_package(&[
            (PathBuf::from("circle.go"), fs::read_to_string("test-code/shapes.go").unwrap()),
            (PathBuf::from("more.go"), "package shapes\n\nfunc Unit() float64 {\n\treturn 1\n}\n".to_string()),
        ])?;

        let java = transpiler::transpile_package(&package)?;
        assert!(java.ends_with("}}\n\npackage shapes;\npublic double Unit() {\nreturn 1;\n\n}"));
        Ok(())
    }
}
