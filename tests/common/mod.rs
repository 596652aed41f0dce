// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bilancio::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary budget file
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("budget.json");
    let service = LedgerService::open(path)?;
    Ok((service, temp_dir))
}

/// Test fixture: the standard three-entry budget
pub struct SampleBudget;

impl SampleBudget {
    pub fn fill(service: &mut LedgerService) -> Result<()> {
        service.add(
            "Coffee".into(),
            "Food".into(),
            4.5,
            Some("2024-01-01".into()),
        )?;
        service.add(
            "Rent".into(),
            "Housing".into(),
            1200.0,
            Some("2024-01-01".into()),
        )?;
        service.add(
            "Bus".into(),
            "Transport".into(),
            2.75,
            Some("2024-01-02".into()),
        )?;
        Ok(())
    }
}
