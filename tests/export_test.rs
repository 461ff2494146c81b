
use chem_domain::InputKind;
use chem_domain::LookupInput;
use chem_lookup::export::{default_file_stem, text_payload};
use chem_lookup::{export_image, export_text, AcceptFirst, ExportOutcome, Lookup, LookupOutcome};
use tempfile::TempDir;
use test_support::*;

fn aspirin_record(kind: InputKind, text: &str) -> chem_domain::CompoundRecord {
    let mock = with_synonyms(aspirin_service(), &["aspirin"]);
    let lookup = Lookup::new(client(mock));
    let input = LookupInput::parse(kind, text).unwrap();
    match lookup.run(&input, &AcceptFirst).unwrap() {
        LookupOutcome::Found(assembled) => assembled.record,
        other => panic!("expected record, got {other:?}"),
    }
}

#[test]
fn test_export_text_forces_txt_extension() {
    let dir = TempDir::new().unwrap();
    let rec = aspirin_record(InputKind::Name, "aspirin");
    let outcome = export_text(&rec, Some(dir.path().join("aspirin.json").as_path())).unwrap();
    let path = match outcome {
        ExportOutcome::Written(path) => path,
        ExportOutcome::Cancelled => panic!("export should write"),
    };
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["IdentifierList"]["CID"][0], 2244);
    assert_eq!(parsed["PropertyTable"]["Properties"][0]["MolecularFormula"], "C9H8O4");
}

#[test]
fn test_export_text_by_identifier_has_only_properties() {
    let rec = aspirin_record(InputKind::Identifier, "2244");
    let payload: serde_json::Value = serde_json::from_str(&text_payload(&rec)).unwrap();
    assert!(payload.get("IdentifierList").is_none());
    assert!(payload.get("PropertyTable").is_some());
}

#[test]
fn test_export_image_writes_raw_bytes() {
    let dir = TempDir::new().unwrap();
    let rec = aspirin_record(InputKind::Name, "aspirin");
    let input = LookupInput::parse(InputKind::Name, "aspirin").unwrap();
    let target = dir.path().join(default_file_stem(&input));
    let outcome = export_image(&rec, Some(target.as_path())).unwrap();
    assert_eq!(outcome, ExportOutcome::Written(dir.path().join("aspirin.png")));
    assert_eq!(std::fs::read(dir.path().join("aspirin.png")).unwrap(), PNG_BYTES);
}

#[test]
fn test_cancelled_dialog_is_not_an_error() {
    let rec = aspirin_record(InputKind::Name, "aspirin");
    assert_eq!(export_text(&rec, None).unwrap(), ExportOutcome::Cancelled);
    assert_eq!(export_image(&rec, None).unwrap(), ExportOutcome::Cancelled);
}

#[test]
fn test_unwritable_path_is_export_error() {
    let dir = TempDir::new().unwrap();
    let rec = aspirin_record(InputKind::Name, "aspirin");
    let missing = dir.path().join("no-such-dir").join("aspirin");
    let err = export_text(&rec, Some(missing.as_path())).unwrap_err();
    assert_eq!(err.symbol(), "ExportError");
}

#[test]
fn test_text_export_is_stable() {
    let a = aspirin_record(InputKind::Name, "aspirin");
    let b = aspirin_record(InputKind::Name, "aspirin");
    assert_eq!(text_payload(&a), text_payload(&b));
}

#[test]
fn test_default_stem_for_identifier_is_the_cid() {
    let dir = TempDir::new().unwrap();
    let rec = aspirin_record(InputKind::Identifier, "2244");
    assert_eq!(rec.display_name(), "aspirin");
    let input = LookupInput::parse(InputKind::Identifier, " 2244 ").unwrap();
    let stem = default_file_stem(&input);
    assert_eq!(stem, "2244");
    let outcome = export_image(&rec, Some(dir.path().join(&stem).as_path())).unwrap();
    assert_eq!(outcome, ExportOutcome::Written(dir.path().join("2244.png")));
}
