//! Swift spelling of decoder expressions and plan statements.

use jsongen_codegen::{
    decoder::{Callee, DecoderArg, DecoderExpr},
    plan::Statement,
};

/// Name of the parameter carrying the decoder for a type parameter.
pub fn decoder_param(type_param: &str) -> String {
    format!("decode{}", type_param)
}

/// Render a decoder expression as a Swift function value.
///
/// # Example
///
/// ```
/// use jsongen_codegen::decoder::{Callee, DecoderArg, DecoderExpr};
/// use jsongen_codegen_swift::render_decoder;
///
/// let point = DecoderExpr::Invoke {
///     callee: Callee::Static("Point".into()),
///     args: vec![],
/// };
/// let array = DecoderExpr::Invoke {
///     callee: Callee::Static("Array".into()),
///     args: vec![DecoderArg::Forward(point)],
/// };
/// assert_eq!(render_decoder(&array), "Array.decode({ Point.decode($0) })");
/// ```
pub fn render_decoder(expr: &DecoderExpr) -> String {
    match expr {
        DecoderExpr::Reinterpret(name) => format!("{{ $0 as {} }}", name),
        DecoderExpr::Downcast(name) => format!("{{ $0 as? {} }}", name),
        DecoderExpr::Invoke { callee, args } => {
            let head = match callee {
                Callee::Scope(name) => decoder_param(name),
                Callee::Static(name) => format!("{}.decode", name),
            };
            args.iter().fold(head, |mut out, arg| {
                out.push_str(&render_argument(arg));
                out
            })
        }
    }
}

/// Render a decoder argument as one curried call clause.
pub fn render_argument(arg: &DecoderArg) -> String {
    match arg {
        DecoderArg::Transform(expr) => format!("({})", render_decoder(expr)),
        DecoderArg::Forward(expr) => format!("({{ {}($0) }})", render_decoder(expr)),
    }
}

/// Render one statement of a decode routine as a single Swift line.
pub fn render_statement(statement: &Statement) -> String {
    match statement {
        Statement::Lookup { key, local } => {
            format!("let {}: AnyObject? = dict[\"{}\"]", local, key)
        }
        Statement::RequirePresent { local, field } => format!(
            "if {} == nil {{ assertionFailure(\"field '{}' is missing\"); return nil }}",
            local, field
        ),
        Statement::BindRaw { name, ty, from } => format!("let {}: {} = {}!", name, ty, from),
        Statement::Downcast { local, from, ty } => {
            format!("let {}: {}? = {}! as? {}", local, ty, from, ty)
        }
        Statement::Decode {
            local,
            from,
            ty,
            decoder,
            absent_as_none,
        } => {
            let apply = format!("{}({}!)", render_decoder(decoder), from);
            if *absent_as_none {
                format!("let {}: {}? = {} == nil ? .Some(nil) : {}", local, ty, from, apply)
            } else {
                format!("let {}: {}? = {}", local, ty, apply)
            }
        }
        Statement::RequireValue {
            local,
            field,
            expected,
        } => format!(
            "if {} == nil {{ assertionFailure(\"field '{}' is not {}\"); return nil }}",
            local, field, expected
        ),
        Statement::BindValue { name, ty, from } => format!("let {}: {} = {}!", name, ty, from),
        Statement::Construct { record, fields } => {
            let args = fields
                .iter()
                .map(|f| format!("{}: {}", f, f))
                .collect::<Vec<_>>()
                .join(", ");
            format!("return {}({})", record, args)
        }
    }
}

#[cfg(test)]
mod tests {
    use jsongen_model::Type;

    use super::*;

    fn invoke(callee: Callee, args: Vec<DecoderArg>) -> DecoderExpr {
        DecoderExpr::Invoke { callee, args }
    }

    #[test]
    fn test_leaf_decoders() {
        assert_eq!(
            render_decoder(&DecoderExpr::Reinterpret("AnyObject".into())),
            "{ $0 as AnyObject }"
        );
        assert_eq!(
            render_decoder(&DecoderExpr::Downcast("JsonObject".into())),
            "{ $0 as? JsonObject }"
        );
        assert_eq!(
            render_decoder(&invoke(Callee::Static("Int".into()), vec![])),
            "Int.decode"
        );
        assert_eq!(
            render_decoder(&invoke(Callee::Scope("T".into()), vec![])),
            "decodeT"
        );
    }

    #[test]
    fn test_arguments_are_curried_clauses() {
        let dict = invoke(
            Callee::Static("Dictionary".into()),
            vec![
                DecoderArg::Forward(invoke(Callee::Static("String".into()), vec![])),
                DecoderArg::Transform(DecoderExpr::Reinterpret("AnyObject".into())),
            ],
        );
        assert_eq!(
            render_decoder(&dict),
            "Dictionary.decode({ String.decode($0) })({ $0 as AnyObject })"
        );
    }

    #[test]
    fn test_nested_forwarding() {
        let expr = invoke(
            Callee::Static("Array".into()),
            vec![DecoderArg::Forward(invoke(
                Callee::Static("Optional".into()),
                vec![DecoderArg::Forward(invoke(Callee::Scope("T".into()), vec![]))],
            ))],
        );
        assert_eq!(
            render_decoder(&expr),
            "Array.decode({ Optional.decode({ decodeT($0) })($0) })"
        );
    }

    #[test]
    fn test_statements() {
        let ty = Type::named("Int");
        assert_eq!(
            render_statement(&Statement::Lookup {
                key: "x".into(),
                local: "x_field".into()
            }),
            r#"let x_field: AnyObject? = dict["x"]"#
        );
        assert_eq!(
            render_statement(&Statement::RequirePresent {
                local: "x_field".into(),
                field: "x".into()
            }),
            r#"if x_field == nil { assertionFailure("field 'x' is missing"); return nil }"#
        );
        assert_eq!(
            render_statement(&Statement::RequireValue {
                local: "x_value".into(),
                field: "x".into(),
                expected: ty.clone()
            }),
            r#"if x_value == nil { assertionFailure("field 'x' is not Int"); return nil }"#
        );
        assert_eq!(
            render_statement(&Statement::BindValue {
                name: "x".into(),
                ty,
                from: "x_value".into()
            }),
            "let x: Int = x_value!"
        );
        assert_eq!(
            render_statement(&Statement::Construct {
                record: "Point".into(),
                fields: vec!["x".into(), "y".into()]
            }),
            "return Point(x: x, y: y)"
        );
    }

    #[test]
    fn test_optional_decode_tolerates_absence() {
        let ty = Type::optional(Type::named("String"));
        let decoder = invoke(
            Callee::Static("Optional".into()),
            vec![DecoderArg::Forward(invoke(
                Callee::Static("String".into()),
                vec![],
            ))],
        );
        let line = render_statement(&Statement::Decode {
            local: "tag_value".into(),
            from: "tag_field".into(),
            ty,
            decoder,
            absent_as_none: true,
        });
        assert_eq!(
            line,
            "let tag_value: String?? = tag_field == nil ? .Some(nil) : Optional.decode({ String.decode($0) })(tag_field!)"
        );
    }
}
