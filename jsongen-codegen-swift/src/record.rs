//! Swift decode extensions for records.

use jsongen_codegen::plan::{self, RecordPlan};
use jsongen_model::{Struct, TypeAliases, Vocabulary};

use crate::{
    ast::{Extension, Func, Param},
    render::{decoder_param, render_statement},
};

/// Raw input parameter of every decode function.
const INPUT: &str = "json";

/// Build the `extension` holding a record's `decode` function.
pub fn record_extension(plan: &RecordPlan) -> Extension {
    let params = plan
        .type_arguments
        .iter()
        .map(|t| Param::new(decoder_param(t), format!("AnyObject -> {}?", t)))
        .chain(std::iter::once(Param::new(INPUT, "AnyObject")));

    // Only the first curried clause keeps its argument label.
    let mut func = params
        .enumerate()
        .fold(Func::new("decode").static_(), |f, (i, p)| {
            f.param(if i == 0 { p } else { p.unlabeled() })
        });

    func = func
        .returns(format!("{}?", plan.name))
        .body_line(format!("let _dict = {} as? [String : AnyObject]", INPUT))
        .body_line("if _dict == nil { return nil }")
        .body_line("let dict = _dict!")
        .body_blank();

    for field in &plan.fields {
        func = field
            .statements
            .iter()
            .fold(func, |f, s| f.body_line(render_statement(s)))
            .body_blank();
    }

    Extension::new(&plan.name).method(func.body_line(render_statement(&plan.construct)))
}

/// Assemble the Swift decode extension of one record.
pub fn assemble_record(record: &Struct, aliases: &TypeAliases, vocabulary: &Vocabulary) -> String {
    let plan = plan::assemble_record(record, aliases, vocabulary);
    record_extension(&plan).build()
}

#[cfg(test)]
mod tests {
    use jsongen_model::Type;

    use super::*;

    #[test]
    fn test_point_extension() {
        let point = Struct::new("Point")
            .field("x", Type::named("Int"))
            .field("y", Type::named("Int"));
        let code = assemble_record(&point, &TypeAliases::new(), &Vocabulary::default());

        let expected = r#"extension Point {
  static func decode(json: AnyObject) -> Point? {
    let _dict = json as? [String : AnyObject]
    if _dict == nil { return nil }
    let dict = _dict!

    let x_field: AnyObject? = dict["x"]
    if x_field == nil { assertionFailure("field 'x' is missing"); return nil }
    let x_value: Int? = Int.decode(x_field!)
    if x_value == nil { assertionFailure("field 'x' is not Int"); return nil }
    let x: Int = x_value!

    let y_field: AnyObject? = dict["y"]
    if y_field == nil { assertionFailure("field 'y' is missing"); return nil }
    let y_value: Int? = Int.decode(y_field!)
    if y_value == nil { assertionFailure("field 'y' is not Int"); return nil }
    let y: Int = y_value!

    return Point(x: x, y: y)
  }
}
"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn test_generic_record_takes_decoders_first() {
        let pair = Struct::new("Pair")
            .type_argument("A")
            .type_argument("B")
            .field("first", Type::named("A"));
        let code = assemble_record(&pair, &TypeAliases::new(), &Vocabulary::default());

        assert!(code.contains(
            "  static func decode(decodeA: AnyObject -> A?)(_ decodeB: AnyObject -> B?)(_ json: AnyObject) -> Pair? {"
        ));
        assert!(code.contains("    let first_value: A? = decodeA(first_field!)"));
    }

    #[test]
    fn test_empty_record_constructs_immediately() {
        let code = assemble_record(
            &Struct::new("Unit"),
            &TypeAliases::new(),
            &Vocabulary::default(),
        );
        assert!(code.contains("    let dict = _dict!\n\n    return Unit()\n"));
    }
}
