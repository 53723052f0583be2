//! Test helpers for writing snapshot files into temporary workspaces.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// A temporary directory holding snapshot fixtures.
pub(super) struct SnapshotDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SnapshotDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write snapshot file");
        path
    }
}

/// Three favourites from three users on two places, with birth dates.
pub(super) const WORKED_SNAPSHOT: &str = r#"{
  "has_birth_dates": true,
  "rows": [
    {"user_id": 1, "lieu_id": 1, "lieu_nom": "Dar Ben Abdallah", "categorie": "MUSEE",
     "ville": "Tunis", "budget_min": 10, "budget_max": 10,
     "date_naissance": "2004-06-01", "role": "abonne", "date_ajout": "2025-03-10 10:00:00"},
    {"user_id": 2, "lieu_id": 1, "lieu_nom": "Dar Ben Abdallah", "categorie": "MUSEE",
     "ville": "Tunis", "budget_min": 10, "budget_max": 10,
     "date_naissance": "1994-06-01", "role": "abonne", "date_ajout": "2025-03-11 10:00:00"},
    {"user_id": 3, "lieu_id": 2, "lieu_nom": "Café des Délices", "categorie": "CAFE",
     "ville": "Sousse", "budget_min": 80, "budget_max": 100,
     "date_naissance": "1984-06-01", "role": "visiteur", "date_ajout": "2025-03-12 10:00:00"}
  ],
  "avg_note_by_lieu": {"1": 4.5},
  "current_week_by_lieu": {"1": 2, "2": 1},
  "previous_week_by_lieu": {"1": 1}
}"#;
