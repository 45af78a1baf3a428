//! Savings ledger repository

use crate::models::SavingRecord;

use super::records::{RecordRepository, StoredRecord};

/// Repository for `data/savings.json`
pub type SavingRepository = RecordRepository<SavingRecord>;

impl StoredRecord for SavingRecord {
    const COLLECTION: &'static str = "savings";
    const ENTITY: &'static str = "saving";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn matches_id(&self, input: &str) -> bool {
        self.id.matches(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinanceRecord;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings.json");
        let repo = SavingRepository::new(path.clone());

        repo.insert(SavingRecord::new(100.0, "2025-01-01").with_note("bonus"))
            .unwrap();
        repo.insert(SavingRecord::new(-25.0, "2025-01-05")).unwrap();
        repo.save().unwrap();

        let reloaded = SavingRepository::new(path);
        reloaded.load().unwrap();
        let all = reloaded.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].note, "bonus");
        assert!(all[1].is_withdrawal());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings.json");
        fs::write(&path, "{ broken").unwrap();

        let repo = SavingRepository::new(path);
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_skips_non_objects() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings.json");
        fs::write(&path, r#"{"savings": [1, {"amount": "40", "date": "2025-02-02"}]}"#).unwrap();

        let repo = SavingRepository::new(path);
        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount_value(), 40.0);
        assert_eq!(repo.skipped().unwrap(), 1);
    }

    #[test]
    fn test_null_note_keeps_the_deposit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings.json");
        fs::write(
            &path,
            r#"{"savings": [{"amount": 100, "note": null}, {"id": 12, "amount": -30, "date": null}]}"#,
        )
        .unwrap();

        let repo = SavingRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.skipped().unwrap(), 0);

        let all = repo.get_all().unwrap();
        assert_eq!(crate::reports::total_amount(&all), 70.0);
        assert!(all[0].note.is_empty());
        assert_eq!(all[1].id.as_str(), "12");
    }
}
