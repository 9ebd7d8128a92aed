//! Reconciliation Integration Tests
//!
//! Reads osgameclones-style YAML and our JSON catalogue from disk and checks
//! the rendered report.

use std::fs;

use osgl_site_index::load_catalogue;
use osgl_site_index::reconcile::{load_external, reconcile, Discrepancy};

const OSGC: &str = r#"
- name: Freeciv
  type: remake
  originals: [Civilization]
  repo: https://github.com/freeciv/freeciv
  url: http://www.freeciv.org/
  license: [GPL2]
  lang: [C, Python]
  status: playable
  development: active
- name: OpenRA
  type: remake
  originals: [Red Alert]
  license: [GPL3]
"#;

const GAMES: &str = r#"[
    {
        "Title": "Freeciv",
        "Home": ["https://www.freeciv.org/"],
        "Keywords": ["remake", "inspired by Civilization"],
        "State": ["mature"],
        "Code language": ["C", "Lua"],
        "Code license": ["GPL-2.0"],
        "Code repository": ["https://github.com/freeciv/freeciv.git"]
    },
    {"Title": "Zero-K"}
]"#;

#[test]
fn test_report_from_files() {
    let osgc_dir = tempfile::tempdir().unwrap();
    fs::write(osgc_dir.path().join("games.yaml"), OSGC).unwrap();

    let data_dir = tempfile::tempdir().unwrap();
    fs::write(data_dir.path().join("games.json"), GAMES).unwrap();
    fs::write(data_dir.path().join("inspirations.json"), "[]").unwrap();
    fs::write(data_dir.path().join("developers.json"), "[]").unwrap();

    let external = load_external(osgc_dir.path()).unwrap();
    let catalogue = load_catalogue(data_dir.path()).unwrap();
    let report = reconcile(&external, &catalogue.games);

    assert_eq!(report.in_both, 1);
    assert_eq!(report.only_external, 1);
    assert_eq!(report.only_ours, 1);
    assert_eq!(
        report.mandatory_fields.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["license", "name", "originals", "type"]
    );

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].name, "Freeciv");
    assert_eq!(report.entries[0].discrepancies, vec![Discrepancy::MissingCodeLanguage("Python".to_string())]);

    let text = report.to_string();
    assert!(text.contains("osgc-license: GPL2, GPL3\n"));
    assert!(text.contains("\nFreeciv\n code language Python missing\n"));
}
