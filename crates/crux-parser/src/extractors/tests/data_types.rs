use super::*;
use pretty_assertions::assert_eq;

#[test]
fn point_struct_has_two_fields() {
    let items = parse_and_extract("struct Point { x: f64, y: f64 }");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, ItemKind::Struct);
    assert_eq!(items[0].name, "Point");
    assert_eq!(items[0].fields.as_ref().map(Vec::len), Some(2));
}

#[test]
fn field_visibility_is_independent_of_struct() {
    let items =
        parse_and_extract("struct Mixed { pub id: u64, pub(crate) tag: String, secret: Vec<u8> }");
    assert_eq!(
        items[0].fields,
        Some(vec![
            StructField {
                name: "id".to_string(),
                ty: "u64".to_string(),
                visibility: Visibility::Public,
            },
            StructField {
                name: "tag".to_string(),
                ty: "String".to_string(),
                visibility: Visibility::Crate,
            },
            StructField {
                name: "secret".to_string(),
                ty: "Vec<u8>".to_string(),
                visibility: Visibility::Private,
            },
        ])
    );
    assert_eq!(items[0].visibility, Visibility::Private);
}

#[test]
fn tuple_and_unit_structs_have_no_fields() {
    let items = parse_and_extract("pub struct Meters(pub f64);\npub struct Marker;");
    let meters = find_by_name(&items, "Meters");
    let marker = find_by_name(&items, "Marker");
    assert_eq!(meters.fields, Some(Vec::new()));
    assert_eq!(marker.fields, Some(Vec::new()));
}

#[test]
fn enum_variants_with_discriminants() {
    let items = parse_and_extract("enum Level { Low = 1, Mid, High = 1 << 4 }");
    assert_eq!(
        items[0].variants,
        Some(vec![
            EnumVariant {
                name: "Low".to_string(),
                discriminant: Some("1".to_string()),
            },
            EnumVariant {
                name: "Mid".to_string(),
                discriminant: None,
            },
            EnumVariant {
                name: "High".to_string(),
                discriminant: Some("1 << 4".to_string()),
            },
        ])
    );
}

#[test]
fn enum_payload_variants_keep_only_names() {
    let items = parse_and_extract("enum Shape { Circle { r: f64 }, Rect(f64, f64), Empty }");
    let names: Vec<&str> = items[0]
        .variants
        .as_ref()
        .expect("variants")
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["Circle", "Rect", "Empty"]);
}

#[test]
fn generic_enum_and_alias() {
    let items = parse_and_extract(
        "pub enum Either<L, R> { Left(L), Right(R) }\npub type Pair<T> = (T, T);",
    );
    let either = find_by_name(&items, "Either");
    assert_eq!(either.generic_parameters, vec!["L".to_string(), "R".to_string()]);
    let pair = find_by_name(&items, "Pair");
    assert_eq!(pair.kind, ItemKind::TypeAlias);
    assert_eq!(pair.generic_parameters, vec!["T".to_string()]);
    assert_eq!(pair.fields, None);
}

#[test]
fn struct_fields_only_on_structs() {
    let items = parse_and_extract("enum E { A }\nstruct S { a: u8 }");
    assert_eq!(find_by_name(&items, "E").fields, None);
    assert_eq!(find_by_name(&items, "S").variants, None);
}
