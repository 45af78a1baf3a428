//! Expense repository

use crate::models::ExpenseRecord;

use super::records::{RecordRepository, StoredRecord};

/// Repository for `data/expenses.json`
pub type ExpenseRepository = RecordRepository<ExpenseRecord>;

impl StoredRecord for ExpenseRecord {
    const COLLECTION: &'static str = "expenses";
    const ENTITY: &'static str = "expense";

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
    use crate::models::{ExpenseId, FinanceRecord};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_save_reload() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = ExpenseRecord::new(12.5, "Food", "2025-03-01").with_description("lunch");
        let id = expense.id.clone();
        repo.insert(expense).unwrap();
        repo.save().unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\"expenses\""));

        let reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        let found = reloaded.find(id.as_str()).unwrap().unwrap();
        assert_eq!(found.description, "lunch");
        assert_eq!(found.category_label(), "Food");
    }

    #[test]
    fn test_lenient_load_counts_skipped() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"expenses": [
                {"id": "a1", "amount": 10, "category": "Food", "date": "2025-01-01"},
                "garbage",
                {"id": "a2", "amount": "7.5abc", "recovered_from_savings": true},
                {"id": 5}
            ]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 3);
        assert_eq!(repo.skipped().unwrap(), 1);

        let second = repo.find("a2").unwrap().unwrap();
        assert!(second.paid_from_savings);
        assert_eq!(second.category_label(), "Uncategorized");
        assert!(repo.find("5").unwrap().is_some());
    }

    #[test]
    fn test_null_and_mistyped_fields_keep_the_record() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"expenses": [
                {"id": "e1", "amount": 10, "category": "Food", "date": "2025-01-01"},
                {"id": "e2", "amount": 20, "category": "Food", "description": null},
                {"id": "e3", "amount": 30, "category": "Food", "paidFromSavings": null},
                {"id": 7, "amount": 40, "category": "Food"},
                {"id": "e5", "amount": 50, "category": 5}
            ]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.skipped().unwrap(), 0);

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(crate::reports::total_amount(&all), 150.0);
        assert!(repo.find("7").unwrap().is_some());
        assert_eq!(repo.find("e5").unwrap().unwrap().category_label(), "Uncategorized");
    }

    #[test]
    fn test_list_newest_first_undated_last() {
        let (_temp_dir, repo) = create_test_repo();
        let mut undated = ExpenseRecord::new(1.0, "Misc", "");
        undated.date = None;
        repo.insert(undated).unwrap();
        repo.insert(ExpenseRecord::new(2.0, "Misc", "2025-01-01")).unwrap();
        repo.insert(ExpenseRecord::new(3.0, "Misc", "2025-02-01")).unwrap();
        repo.insert(ExpenseRecord::new(4.0, "Misc", "not a date")).unwrap();

        let listed = repo.list().unwrap();
        let dates: Vec<_> = listed.iter().map(|e| e.date.clone()).collect();
        assert_eq!(dates[0].as_deref(), Some("2025-02-01"));
        assert_eq!(dates[1].as_deref(), Some("2025-01-01"));
        assert!(listed[2].parsed_date().is_none());
        assert!(listed[3].parsed_date().is_none());
    }

    #[test]
    fn test_find_by_prefix_and_ambiguity() {
        let (_temp_dir, repo) = create_test_repo();
        let mut first = ExpenseRecord::new(1.0, "A", "2025-01-01");
        first.id = ExpenseId::from_raw("abcd1111");
        let mut second = ExpenseRecord::new(2.0, "B", "2025-01-01");
        second.id = ExpenseId::from_raw("abcd2222");
        repo.insert(first).unwrap();
        repo.insert(second).unwrap();

        assert_eq!(repo.find("exp-abcd1111").unwrap().unwrap().category_label(), "A");
        assert!(repo.find("abcd").is_err());
        assert!(repo.find("zzzz").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let (_temp_dir, repo) = create_test_repo();
        let first = ExpenseRecord::new(5.0, "Food", "2025-01-01");
        let second = ExpenseRecord::new(6.0, "Rent", "2025-01-02");
        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();

        let mut edited = first.clone();
        edited.description = "dinner".into();
        repo.upsert(edited).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].description, "dinner");

        repo.upsert(ExpenseRecord::new(7.0, "Fun", "2025-01-03")).unwrap();
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let expense = ExpenseRecord::new(5.0, "Food", "2025-01-01");
        let id = expense.id.clone();
        repo.insert(expense).unwrap();

        assert!(repo.delete(id.as_str()).unwrap());
        assert!(!repo.delete(id.as_str()).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
