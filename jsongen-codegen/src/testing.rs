//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;
use jsongen_model::{ModelFile, Struct, StructuralModel, Type, TypeAliases};

/// `Point { x: Int, y: Int }`
pub fn point() -> Struct {
    Struct::new("Point")
        .field("x", Type::named("Int"))
        .field("y", Type::named("Int"))
}

/// `P { tag: String? }`
pub fn tagged() -> Struct {
    Struct::new("P").field("tag", Type::optional(Type::named("String")))
}

/// `Box<T> { value: T }`
pub fn boxed() -> Struct {
    Struct::new("Box")
        .type_argument("T")
        .field("value", Type::named("T"))
}

/// `Shelf { items: [Box<Point>?] }`, referring to the records above.
pub fn shelf() -> Struct {
    Struct::new("Shelf").field(
        "items",
        Type::array(Type::optional(Type::generic(
            "Box",
            vec![Type::named("Point")],
        ))),
    )
}

/// A two-file model with the registry entry for `Box` in the first file.
pub fn model() -> StructuralModel {
    StructuralModel::new(vec![
        ModelFile::new("Sources/Point.swift")
            .with_struct(point())
            .with_struct(boxed())
            .with_aliases(TypeAliases::new().with("Box", &["T"])),
        ModelFile::new("Sources/Shelf.swift")
            .with_struct(tagged())
            .with_struct(shelf()),
    ])
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}
