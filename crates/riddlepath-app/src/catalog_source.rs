//! Catalog selection: the bundled riddles or a JSON file.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use riddlepath_core::{Catalog, CatalogError, PuzzleDefinition, StageId};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogLoadError {
    #[display("failed to read catalog: {_0}")]
    Io(io::Error),
    #[display("failed to parse catalog: {_0}")]
    Parse(serde_json::Error),
    #[display("invalid catalog: {_0}")]
    Invalid(CatalogError),
}

const BUILTIN_PUZZLES: [(&str, &str, &str); 4] = [
    (
        "יו",
        "שלב 1",
        "לפעמים אומרים אותי בהתלהבות, כשמכפילים אותי מקבלים משחק ילדות. מי אני? (שתי אותיות)",
    ),
    (
        "סי",
        "שלב 2",
        "אם אומרים אותי במקומות מסויימים, זה יחשב כהסכמה. אך אם אומרים אותי על המגרש, זה אצל רונאלדו אחרי בעיטה. מי אני? (שתי אותיות)",
    ),
    (
        "בי",
        "שלב 3",
        "אני אות אחת, אבל כשאומרים אותי – אני שתיים. מי אני? (שתי אותיות)",
    ),
    (
        "טון",
        "שלב 4",
        "אני יחידת מידה למשקל, אני גם שינוי בגובה קול, ואני סוגר את השם. מי אני? (שלוש אותיות)",
    ),
];

/// Returns the bundled four-stage catalog.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let puzzles = (1..)
        .zip(BUILTIN_PUZZLES)
        .map(|(id, (fragment, title, prompt))| {
            PuzzleDefinition::new(StageId::new(id), fragment, title, prompt)
        })
        .collect();
    Catalog::new(puzzles)
}

/// Reads a JSON catalog of the form `{"puzzles": [{"id": 1, ...}, ...]}`.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogLoadError> {
    let catalog = serde_json::from_reader(reader)?;
    Ok(catalog)
}

/// Loads the catalog at `path`, or the bundled one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    match path {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            read_catalog(BufReader::new(File::open(path)?))
        }
        None => Ok(builtin_catalog()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_stages() {
        let catalog = builtin_catalog().expect("bundled catalog is valid");
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog
                .iter()
                .map(PuzzleDefinition::answer_fragment)
                .collect::<Vec<_>>(),
            ["יו", "סי", "בי", "טון"]
        );
    }

    #[test]
    fn read_catalog_accepts_valid_json() {
        let json = r#"{"puzzles": [
            {"id": 1, "answer_fragment": "ab", "title": "one", "prompt": "first"},
            {"id": 2, "answer_fragment": "cd", "title": "two", "prompt": "second"}
        ]}"#;
        let catalog = read_catalog(json.as_bytes()).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.last_id(), StageId::new(2));
    }

    #[test]
    fn read_catalog_reports_parse_errors() {
        assert!(matches!(
            read_catalog("not json".as_bytes()),
            Err(CatalogLoadError::Parse(_))
        ));
        assert!(matches!(
            read_catalog(r#"{"puzzles": []}"#.as_bytes()),
            Err(CatalogLoadError::Parse(_))
        ));
    }

    #[test]
    fn load_catalog_without_path_uses_builtin() {
        let catalog = load_catalog(None).expect("bundled catalog is valid");
        assert_eq!(catalog, builtin_catalog().expect("bundled catalog is valid"));
    }

    #[test]
    fn load_catalog_reads_sample_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("catalogs/sample.json");
        let catalog = load_catalog(Some(&path)).expect("sample catalog is valid");
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog
                .iter()
                .map(PuzzleDefinition::answer_fragment)
                .collect::<String>(),
            "sunflower"
        );
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let missing = Path::new("/nonexistent/riddlepath/catalog.json");
        assert!(matches!(
            load_catalog(Some(missing)),
            Err(CatalogLoadError::Io(_))
        ));
    }
}
