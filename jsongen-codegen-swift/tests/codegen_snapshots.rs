//! Snapshot tests for Swift code generation.
//!
//! These tests verify that the generated Swift code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use jsongen_codegen::testing;
use jsongen_codegen_swift::{Generator, LanguageCodegen, assemble_record};
use jsongen_model::{ModelFile, Struct, StructuralModel, Type, TypeAliases, Vocabulary};

/// Generate files from a model and return them sorted by path for deterministic snapshots.
fn generate_files(model: &StructuralModel) -> Vec<(String, String)> {
    let generator = Generator::new(model);
    let files = generator.preview();

    let mut result: Vec<(String, String)> =
        files.into_iter().map(|f| (f.path, f.content)).collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

fn point() -> Struct {
    Struct::new("Point")
        .field("x", Type::named("Int"))
        .field("y", Type::named("Int"))
}

#[test]
fn test_point_file() {
    let model = StructuralModel::new(vec![ModelFile::new("Point.swift").with_struct(point())]);
    let files = generate_files(&model);

    let point = get_file(&files, "Point+JsonGen.swift").expect("Point+JsonGen.swift not found");
    insta::assert_snapshot!(point, @r#"
    //
    //  Point+JsonGen.swift
    //
    //  Auto generated by jsongen
    //

    import Foundation

    extension Point {
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
    "#);
}

#[test]
fn test_generic_record_takes_decoder_parameters() {
    let boxed = Struct::new("Box")
        .type_argument("T")
        .field("value", Type::named("T"));
    let code = assemble_record(&boxed, &TypeAliases::new(), &Vocabulary::default());

    insta::assert_snapshot!(code, @r#"
    extension Box {
      static func decode(decodeT: AnyObject -> T?)(_ json: AnyObject) -> Box? {
        let _dict = json as? [String : AnyObject]
        if _dict == nil { return nil }
        let dict = _dict!

        let value_field: AnyObject? = dict["value"]
        if value_field == nil { assertionFailure("field 'value' is missing"); return nil }
        let value_value: T? = decodeT(value_field!)
        if value_value == nil { assertionFailure("field 'value' is not T"); return nil }
        let value: T = value_value!

        return Box(value: value)
      }
    }
    "#);
}

#[test]
fn test_nested_generic_decoders_compose_outside_in() {
    let shelf = Struct::new("Shelf").field(
        "items",
        Type::array(Type::optional(Type::generic("Box", vec![Type::named("Point")]))),
    );
    let aliases = TypeAliases::new().with("Box", &["T"]);
    let code = assemble_record(&shelf, &aliases, &Vocabulary::default());

    insta::assert_snapshot!(code, @r#"
    extension Shelf {
      static func decode(json: AnyObject) -> Shelf? {
        let _dict = json as? [String : AnyObject]
        if _dict == nil { return nil }
        let dict = _dict!

        let items_field: AnyObject? = dict["items"]
        if items_field == nil { assertionFailure("field 'items' is missing"); return nil }
        let items_value: [Box<Point>?]? = Array.decode({ Optional.decode({ Box.decode({ Point.decode($0) })($0) })($0) })(items_field!)
        if items_value == nil { assertionFailure("field 'items' is not [Box<Point>?]"); return nil }
        let items: [Box<Point>?] = items_value!

        return Shelf(items: items)
      }
    }
    "#);
}

#[test]
fn test_field_policies() {
    let mixed = Struct::new("Mixed")
        .field("tag", Type::optional(Type::named("String")))
        .field("meta", Type::named("JsonObject"))
        .field("raw", Type::named("AnyJson"));
    let code = assemble_record(&mixed, &TypeAliases::new(), &Vocabulary::default());

    insta::assert_snapshot!(code, @r#"
    extension Mixed {
      static func decode(json: AnyObject) -> Mixed? {
        let _dict = json as? [String : AnyObject]
        if _dict == nil { return nil }
        let dict = _dict!

        let tag_field: AnyObject? = dict["tag"]
        let tag_value: String?? = tag_field == nil ? .Some(nil) : Optional.decode({ String.decode($0) })(tag_field!)
        if tag_value == nil { assertionFailure("field 'tag' is not String?"); return nil }
        let tag: String? = tag_value!

        let meta_field: AnyObject? = dict["meta"]
        if meta_field == nil { assertionFailure("field 'meta' is missing"); return nil }
        let meta_value: JsonObject? = meta_field! as? JsonObject
        if meta_value == nil { assertionFailure("field 'meta' is not JsonObject"); return nil }
        let meta: JsonObject = meta_value!

        let raw_field: AnyObject? = dict["raw"]
        if raw_field == nil { assertionFailure("field 'raw' is missing"); return nil }
        let raw: AnyJson = raw_field!

        return Mixed(tag: tag, meta: meta, raw: raw)
      }
    }
    "#);
}

#[test]
fn test_alias_names_the_decoder() {
    let record = Struct::new("User").field("id", Type::named("Identifier").with_alias("UserId"));
    let code = assemble_record(&record, &TypeAliases::new(), &Vocabulary::default());

    assert!(code.contains("    let id_value: Identifier? = UserId.decode(id_field!)\n"));
}

#[test]
fn test_alias_decides_the_decoder_strategy() {
    let record = Struct::new("Envelope")
        .type_argument("T")
        .field("payload", Type::named("Payload").with_alias("AnyObject"))
        .field("item", Type::named("Element").with_alias("T"));
    let code = assemble_record(&record, &TypeAliases::new(), &Vocabulary::default());

    assert!(code.contains("    let payload_value: Payload? = { $0 as AnyObject }(payload_field!)\n"));
    assert!(code.contains("    let item_value: Element? = decodeT(item_field!)\n"));
}

#[test]
fn test_known_argument_is_a_transform_closure() {
    let record = Struct::new("Bag").field(
        "entries",
        Type::dictionary(Type::named("String"), Type::named("AnyObject")),
    );
    let code = assemble_record(&record, &TypeAliases::new(), &Vocabulary::default());

    assert!(code.contains(
        "Dictionary.decode({ String.decode($0) })({ $0 as AnyObject })(entries_field!)"
    ));
}

#[test]
fn test_multiple_files_share_registry() {
    let model = StructuralModel::new(vec![
        ModelFile::new("Sources/Box.swift")
            .with_struct(
                Struct::new("Box")
                    .type_argument("T")
                    .field("value", Type::named("T")),
            )
            .with_aliases(TypeAliases::new().with("Box", &["T"])),
        ModelFile::new("Sources/Holder.swift").with_struct(
            Struct::new("Holder").field("held", Type::generic("Box", vec![Type::named("Int")])),
        ),
        ModelFile::new("Sources/JsonGen.swift"),
    ]);
    let files = generate_files(&model);

    assert_eq!(files.len(), 2);
    let holder = files
        .iter()
        .find(|(p, _)| p.ends_with("Holder+JsonGen.swift"))
        .map(|(_, c)| c.as_str())
        .expect("Holder+JsonGen.swift not found");
    assert!(holder.contains("Box.decode({ Int.decode($0) })(held_field!)"));
}

#[test]
fn test_written_files_match_preview() {
    let model = testing::model();
    let generator = Generator::new(&model);

    let dir = testing::generate_to_temp(|dir| generator.generate(dir).map(|_| ())).unwrap();

    for file in generator.preview() {
        let on_disk = std::fs::read_to_string(dir.path().join(&file.path)).unwrap();
        testing::assert_content_eq(&file.content, &on_disk);
    }
    let shelf = std::fs::read_to_string(dir.path().join("Sources/Shelf+JsonGen.swift")).unwrap();
    assert!(shelf.contains("extension P {"));
    assert!(shelf.contains("Array.decode({ Optional.decode({ Box.decode({ Point.decode($0) })($0) })($0) })(items_field!)"));
}
