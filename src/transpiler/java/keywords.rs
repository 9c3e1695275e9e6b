use std::collections::HashMap;
use lazy_static::lazy_static;

/// The function that becomes `public static void main(String[] args)`, and the package that wraps a program.
pub const ENTRY_POINT: &str = "main";
pub const MAIN_SIGNATURE: &str = "public static void main(String[] args)";
/// What a method's receiver is called inside the method.
pub const SELF_ALIAS: &str = "this";
pub const CLASS_KEYWORD: &str = "class";

lazy_static! {
    pub static ref SYMBOLS: HashMap<&'static str, &'static str> = HashMap::from([
        ("fmt", "System.out"),
        ("Println", "println"),
        ("Printf", "printf"),
        ("Print", "print"),

        ("string", "String"),
        ("bool", "boolean"),
        ("float64", "double"),
        ("float32", "float"),
        ("int64", "long"),
        ("int32", "int"),
        ("int16", "short"),
        ("int8", "byte"),
        ("uint8", "byte"),
        ("rune", "char"),
        ("any", "Object"),
        ("error", "Exception"),

        ("nil", "null"),
        ("type", CLASS_KEYWORD),
    ]);
}
